//! Typed view of the map description consumed by the converter.
//!
//! Every field is optional. Defaults live in the accessor methods below, so the
//! precedence "explicit value > computed default > fallback" is resolved in one place.

use serde::Deserialize;

use super::conversions::{
    Scalar, lenient, lenient_number, lenient_or_default, non_empty_object, truthy,
};

/// Root of the input document.
#[derive(Debug, Default, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "lenient")]
    pub filename: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub maps: Vec<MapGroup>,
}

/// A named group of maps; the name becomes the XDF category.
#[derive(Debug, Default, Deserialize)]
pub struct MapGroup {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub maps: Vec<MapEntry>,
}

/// A single calibration table.
#[derive(Debug, Default, Deserialize)]
pub struct MapEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub map_id: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub width: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub height: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub data_organization: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub stride: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub line_skip_bytes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub factor: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub addition: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub precision: Option<i64>,
    #[serde(default, deserialize_with = "truthy")]
    pub z_signed: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub z_units: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub z_min_val: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub z_max_val: Option<Scalar>,
    #[serde(default, deserialize_with = "non_empty_object")]
    pub x: Option<AxisSpec>,
    #[serde(default, deserialize_with = "non_empty_object")]
    pub y: Option<AxisSpec>,
}

/// Definition of an x or y axis.
#[derive(Debug, Default, Deserialize)]
pub struct AxisSpec {
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub skip_bytes: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub axis_id: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub data_organization: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub stride: Option<f64>,
    #[serde(default, deserialize_with = "truthy")]
    pub signed: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub units: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub factor: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub addition: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub precision: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub min_val: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_val: Option<Scalar>,
}

pub const DEFAULT_FACTOR: f64 = 1.0;
pub const DEFAULT_ADDITION: f64 = 0.0;
pub const DEFAULT_PRECISION: i64 = 2;

/// Width of a single stored element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementSize {
    Byte,
    Word,
}

impl ElementSize {
    /// `"LOHI"` marks 16-bit data; everything else is read as bytes.
    pub fn from_organization(organization: Option<&str>) -> Self {
        match organization {
            Some("LOHI") => ElementSize::Word,
            _ => ElementSize::Byte,
        }
    }

    pub fn bits(self) -> i64 {
        match self {
            ElementSize::Byte => 8,
            ElementSize::Word => 16,
        }
    }

    pub fn bytes(self) -> f64 {
        self.bits() as f64 / 8.0
    }

    /// Natural value range of a raw element, `(min, max)`.
    pub fn range(self, signed: bool) -> (f64, f64) {
        match (self, signed) {
            (ElementSize::Byte, false) => (0.0, 255.0),
            (ElementSize::Word, false) => (0.0, 65535.0),
            (ElementSize::Byte, true) => (-128.0, 127.0),
            (ElementSize::Word, true) => (-32768.0, 32767.0),
        }
    }
}

impl Document {
    /// Title of the definition, falling back to the input file's stem.
    pub fn title(&self, source_path: &str) -> String {
        self.filename
            .as_ref()
            .map(|f| f.to_string())
            .unwrap_or_else(|| default_title(source_path))
    }
}

/// Base name of `path` up to its first dot, honouring both separator styles.
pub fn default_title(path: &str) -> String {
    let base = path.rsplit('/').next().unwrap_or(path);
    let base = base.rsplit('\\').next().unwrap_or(base);
    base.split('.').next().unwrap_or(base).to_string()
}

impl MapGroup {
    /// Trimmed group name, or a placeholder derived from its 1-based position.
    pub fn category_name(&self, position: usize) -> String {
        let name = self
            .name
            .as_ref()
            .map(|n| n.to_string().trim().to_string())
            .unwrap_or_default();
        if name.is_empty() {
            format!("Unnamed Category {}", position + 1)
        } else {
            name
        }
    }
}

impl MapEntry {
    pub fn title(&self) -> String {
        self.name
            .as_ref()
            .map_or_else(|| "Unknown Map".to_string(), |n| n.to_string())
    }

    pub fn description(&self) -> String {
        self.map_id
            .as_ref()
            .map_or_else(|| self.title(), |id| id.to_string())
    }

    pub fn element_size(&self) -> ElementSize {
        ElementSize::from_organization(self.data_organization.as_deref())
    }

    /// Distance between consecutive cells in bytes.
    pub fn stride_bytes(&self) -> f64 {
        self.stride.unwrap_or_else(|| self.element_size().bytes())
    }

    pub fn width(&self) -> i64 {
        self.width.unwrap_or(1)
    }

    pub fn height(&self) -> i64 {
        self.height.unwrap_or(1)
    }

    pub fn line_skip_bytes(&self) -> f64 {
        self.line_skip_bytes.unwrap_or(0.0)
    }

    pub fn factor(&self) -> f64 {
        self.factor.unwrap_or(DEFAULT_FACTOR)
    }

    pub fn addition(&self) -> f64 {
        self.addition.unwrap_or(DEFAULT_ADDITION)
    }

    pub fn precision(&self) -> i64 {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }

    /// Number of x/y axes that will be emitted for this table.
    pub fn axis_count(&self) -> usize {
        usize::from(self.x.is_some()) + usize::from(self.y.is_some())
    }
}

impl AxisSpec {
    pub fn element_size(&self) -> ElementSize {
        ElementSize::from_organization(self.data_organization.as_deref())
    }

    pub fn stride_bytes(&self) -> f64 {
        self.stride.unwrap_or_else(|| self.element_size().bytes())
    }

    pub fn skip_bytes(&self) -> i64 {
        self.skip_bytes.unwrap_or(0)
    }

    pub fn size(&self) -> i64 {
        self.size.unwrap_or(0)
    }

    pub fn factor(&self) -> f64 {
        self.factor.unwrap_or(DEFAULT_FACTOR)
    }

    pub fn addition(&self) -> f64 {
        self.addition.unwrap_or(DEFAULT_ADDITION)
    }

    pub fn precision(&self) -> i64 {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }

    /// Trimmed axis label, if one was given.
    pub fn label(&self) -> Option<String> {
        let label = self.axis_id.as_ref()?.to_string().trim().to_string();
        (!label.is_empty()).then_some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_strips_directories_and_extensions() {
        assert_eq!(default_title("maps/ecu.json"), "ecu");
        assert_eq!(default_title(r"C:\tunes\ecu.v2.json"), "ecu");
        assert_eq!(default_title("plain"), "plain");
    }

    #[test]
    fn unnamed_groups_get_positional_placeholder() {
        let group: MapGroup = serde_json::from_value(json!({ "name": "   " })).unwrap();
        assert_eq!(group.category_name(2), "Unnamed Category 3");

        let group: MapGroup = serde_json::from_value(json!({ "name": " Fuel " })).unwrap();
        assert_eq!(group.category_name(0), "Fuel");
    }

    #[test]
    fn entry_defaults() {
        let entry: MapEntry = serde_json::from_value(json!({})).unwrap();
        assert_eq!(entry.title(), "Unknown Map");
        assert_eq!(entry.description(), "Unknown Map");
        assert_eq!(entry.width(), 1);
        assert_eq!(entry.height(), 1);
        assert_eq!(entry.stride_bytes(), 1.0);
        assert_eq!(entry.precision(), 2);
        assert!(entry.x.is_none() && entry.y.is_none());
    }

    #[test]
    fn lohi_selects_word_elements() {
        let entry: MapEntry =
            serde_json::from_value(json!({ "data_organization": "LOHI" })).unwrap();
        assert_eq!(entry.element_size(), ElementSize::Word);
        assert_eq!(entry.stride_bytes(), 2.0);
    }

    #[test]
    fn empty_axis_object_is_absent() {
        let entry: MapEntry =
            serde_json::from_value(json!({ "x": {}, "y": { "size": 4 } })).unwrap();
        assert!(entry.x.is_none());
        assert_eq!(entry.y.as_ref().map(AxisSpec::size), Some(4));
    }

    #[test]
    fn blank_axis_label_is_ignored() {
        let axis: AxisSpec = serde_json::from_value(json!({ "axis_id": "  " })).unwrap();
        assert_eq!(axis.label(), None);
        let axis: AxisSpec = serde_json::from_value(json!({ "axis_id": " RPM " })).unwrap();
        assert_eq!(axis.label().as_deref(), Some("RPM"));
    }
}
