pub mod args;
pub mod conversions;
pub mod document;
pub mod errors;

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use document::Document;
use errors::LayoutError;

/// Reads and parses a map description. The format follows the file extension;
/// anything that is not yaml or toml is treated as JSON.
pub fn load_layout(path: &str) -> Result<Document, LayoutError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LayoutError::InputNotFound(path.to_string()),
        _ => LayoutError::InputUnreadable {
            path: path.to_string(),
            source: e,
        },
    })?;

    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parse_error = |format: &'static str, message: String| LayoutError::InputParseError {
        path: path.to_string(),
        format,
        message,
    };

    let (format, parsed): (_, Result<Value, String>) = match ext.as_str() {
        "yaml" | "yml" => ("YAML", serde_yaml::from_str(&text).map_err(|e| e.to_string())),
        "toml" => ("TOML", toml::from_str(&text).map_err(|e| e.to_string())),
        _ => ("JSON", serde_json::from_str(&text).map_err(|e| e.to_string())),
    };
    let value = parsed.map_err(|message| parse_error(format, message))?;
    if !value.is_object() {
        let message = "top-level value must be an object".to_string();
        return Err(parse_error(format, message));
    }
    let document: Document =
        serde_json::from_value(value).map_err(|e| parse_error(format, e.to_string()))?;

    tracing::debug!("Loaded {} map groups from {}", document.maps.len(), path);
    Ok(document)
}

/// Parses a base-16 offset. Accepts an optional sign, an optional `0x`/`0X`
/// prefix and surrounding whitespace.
pub fn parse_base_offset(text: &str) -> Result<i64, LayoutError> {
    let invalid = || LayoutError::InvalidOffset(text.to_string());

    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .unwrap_or(unsigned);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let magnitude = i64::from_str_radix(digits, 16).map_err(|_| invalid())?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Loads the document and its base offset. Nothing is built if either step fails.
pub fn load(path: &str, base_offset_text: &str) -> Result<(Document, i64), LayoutError> {
    let document = load_layout(path)?;
    let base_offset = parse_base_offset(base_offset_text)?;
    Ok((document, base_offset))
}
