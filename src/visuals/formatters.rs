use crate::xdf::format::format_hex;

pub fn format_bytes(bytes: usize) -> String {
    let s = bytes.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect::<String>() + " bytes"
}

pub fn format_offset(offset: i64) -> String {
    format!("{} ({})", format_hex(offset.into()), offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_get_thousands_separators() {
        assert_eq!(format_bytes(0), "0 bytes");
        assert_eq!(format_bytes(1234567), "1,234,567 bytes");
    }

    #[test]
    fn offsets_show_hex_and_decimal() {
        assert_eq!(format_offset(0x200000), "0x200000 (2097152)");
    }
}
