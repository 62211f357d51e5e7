#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

pub fn write_input(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, contents).expect("write input file");
    path
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

/// Converts `json` and returns the produced XDF text.
pub fn convert_json(json: &str, base_offset: &str) -> String {
    let dir = scratch_dir();
    let input = write_input(dir.path(), "ecu.json", json);
    let output = dir.path().join("ecu.xdf");
    json2xdf::convert(path_str(&input), path_str(&output), base_offset).expect("conversion");
    fs::read_to_string(&output).expect("read output")
}

/// Text of every `<tag ...>` or `<tag/>` opening in document order.
pub fn openings<'a>(xml: &'a str, tag: &str) -> Vec<&'a str> {
    let needle = format!("<{tag}");
    xml.match_indices(&needle)
        .filter_map(|(start, _)| {
            let rest = &xml[start..];
            let end = rest.find('>')?;
            let opening = &rest[..=end];
            let next = *opening.as_bytes().get(needle.len())?;
            matches!(next, b' ' | b'>' | b'/').then_some(opening)
        })
        .collect()
}

/// Value of `attr` inside an opening tag.
pub fn attr_value<'a>(opening: &'a str, attr: &str) -> Option<&'a str> {
    let needle = format!(" {attr}=\"");
    let start = opening.find(&needle)? + needle.len();
    let len = opening[start..].find('"')?;
    Some(&opening[start..start + len])
}

/// Blocks `<XDFTABLE ...> ... </XDFTABLE>` in document order.
pub fn tables(xml: &str) -> Vec<&str> {
    xml.match_indices("<XDFTABLE ")
        .filter_map(|(start, _)| {
            let len = xml[start..].find("</XDFTABLE>")?;
            Some(&xml[start..start + len])
        })
        .collect()
}
