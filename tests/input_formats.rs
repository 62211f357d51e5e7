use std::fs;

#[path = "common/mod.rs"]
mod common;

use common::{attr_value, openings, path_str, scratch_dir, write_input};

fn convert_file(file_name: &str, contents: &str) -> String {
    let dir = scratch_dir();
    let input = write_input(dir.path(), file_name, contents);
    let output = dir.path().join("out.xdf");
    json2xdf::convert(path_str(&input), path_str(&output), "0x200000").expect("conversion");
    fs::read_to_string(output).expect("read output")
}

const JSON: &str = r#"{ "maps": [{ "name": "Boost", "maps": [
    { "name": "Target", "address": 2113536, "width": 4, "x": { "size": 4, "signed": true } }
] }] }"#;

const YAML: &str = r#"
maps:
  - name: Boost
    maps:
      - name: Target
        address: 0x204000
        width: 4
        x:
          size: 4
          signed: true
"#;

const TOML: &str = r#"
[[maps]]
name = "Boost"

[[maps.maps]]
name = "Target"
address = 0x204000
width = 4
x = { size = 4, signed = true }
"#;

#[test]
fn yaml_and_toml_match_json() {
    let from_json = convert_file("ecu.json", JSON);
    assert_eq!(convert_file("ecu.yaml", YAML), from_json);
    assert_eq!(convert_file("ecu.toml", TOML), from_json);
}

#[test]
fn unknown_extension_is_read_as_json() {
    let xml = convert_file("ecu.map", JSON);
    let table = openings(&xml, "XDFTABLE")[0];
    assert_eq!(attr_value(table, "uniqueid"), Some("0x4000"));
}
