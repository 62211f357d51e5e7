use super::axis::{AxisKind, translate, xy_axis, z_axis};
use super::category::Categories;
use super::format::format_hex;
use super::node::{XdfNode, XdfValue};
use crate::layout::document::{Document, MapEntry};

pub const XDF_VERSION: &str = "1.80";

/// Builds the complete XDF tree. `source_path` only supplies the fallback title.
pub fn build_document(document: &Document, source_path: &str, base_offset: i64) -> XdfNode {
    let categories = Categories::from_groups(&document.maps);

    let mut tables = Vec::new();
    for (position, group) in document.maps.iter().enumerate() {
        let category = categories.member_ref(&group.category_name(position));
        tables.extend(
            group
                .maps
                .iter()
                .map(|entry| table(entry, category, base_offset)),
        );
    }
    tracing::debug!(
        "Built {} categories and {} tables",
        categories.len(),
        tables.len()
    );

    XdfNode::new("XDFFORMAT")
        .attr("version", XDF_VERSION)
        .child(header(&document.title(source_path), base_offset))
        .child(region())
        .children(categories.nodes())
        .children(tables)
}

fn header(title: &str, base_offset: i64) -> XdfNode {
    XdfNode::new("XDFHEADER")
        .child(XdfNode::text_element("flags", XdfValue::Hex(1)))
        .child(XdfNode::text_element("deftitle", title))
        .child(XdfNode::text_element(
            "description",
            format!("Mappack for {title} generated from JSON"),
        ))
        .child(
            XdfNode::new("BASEOFFSET")
                .attr("offset", base_offset)
                .attr("subtract", 0_i64),
        )
        .child(
            XdfNode::new("DEFAULTS")
                .attr("datasizeinbits", 8_i64)
                .attr("sigdigits", 4_i64)
                .attr("outputtype", 1_i64)
                .attr("signed", 0_i64)
                .attr("lsbfirst", 1_i64)
                .attr("float", 0_i64),
        )
}

/// A single region covering the whole 8 MiB address space.
fn region() -> XdfNode {
    XdfNode::new("REGION")
        .attr("type", "0xFFFFFFFF")
        .attr("startaddress", XdfValue::Hex(0))
        .attr("size", XdfValue::Hex(0x80_0000))
        .attr("regioncolor", XdfValue::Hex(0))
        .attr("regionflags", XdfValue::Hex(0))
        .attr("name", "Binary")
        .attr("desc", "Full Binary Region")
}

fn table(entry: &MapEntry, category: i64, base_offset: i64) -> XdfNode {
    let unique_id = format_hex(
        entry
            .address
            .map_or(0, |address| translate(address, base_offset)),
    );

    XdfNode::new("XDFTABLE")
        .attr("flags", XdfValue::Hex(0))
        .attr("uniqueid", unique_id.as_str())
        .child(XdfNode::text_element("title", entry.title()))
        .child(XdfNode::text_element("description", entry.description()))
        .child(
            XdfNode::new("CATEGORYMEM")
                .attr("index", 0_i64)
                .attr("category", category),
        )
        .children(xy_axis(AxisKind::X, entry.x.as_ref(), base_offset, &unique_id))
        .children(xy_axis(AxisKind::Y, entry.y.as_ref(), base_offset, &unique_id))
        .child(z_axis(entry, base_offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(raw: serde_json::Value, base_offset: i64) -> XdfNode {
        let document: Document = serde_json::from_value(raw).unwrap();
        build_document(&document, "input/ecu.json", base_offset)
    }

    fn attr(node: &XdfNode, key: &str) -> String {
        node.attribute(key).map(ToString::to_string).unwrap_or_default()
    }

    #[test]
    fn element_order_is_fixed() {
        let root = build(
            json!({ "maps": [{ "name": "Fuel", "maps": [{ "address": 16 }] }] }),
            0,
        );
        let tags: Vec<_> = root.child_nodes().iter().map(XdfNode::tag).collect();
        assert_eq!(tags, ["XDFHEADER", "REGION", "CATEGORY", "XDFTABLE"]);
        assert_eq!(attr(&root, "version"), "1.80");
    }

    #[test]
    fn header_uses_file_stem_without_filename() {
        let root = build(json!({}), 0x200000);
        let header = root.find("XDFHEADER").unwrap();
        let text = |tag: &str| header.find(tag).and_then(XdfNode::text).unwrap().to_string();
        assert_eq!(text("flags"), "0x1");
        assert_eq!(text("deftitle"), "ecu");
        assert_eq!(text("description"), "Mappack for ecu generated from JSON");
        assert_eq!(attr(header.find("BASEOFFSET").unwrap(), "offset"), "2097152");
    }

    #[test]
    fn header_prefers_explicit_filename() {
        let root = build(json!({ "filename": "stage1.bin" }), 0);
        let header = root.find("XDFHEADER").unwrap();
        let title = header.find("deftitle").and_then(XdfNode::text).unwrap();
        assert_eq!(title.to_string(), "stage1.bin");
    }

    #[test]
    fn categories_are_indexed_by_first_occurrence() {
        let root = build(
            json!({ "maps": [
                { "name": "A", "maps": [{ "name": "t1" }] },
                { "name": "B", "maps": [{ "name": "t2" }] },
                { "name": "A", "maps": [{ "name": "t3" }] }
            ] }),
            0,
        );
        let indices: Vec<_> = root.find_all("CATEGORY").map(|c| attr(c, "index")).collect();
        assert_eq!(indices, ["0x0", "0x1"]);
        let refs: Vec<_> = root
            .find_all("XDFTABLE")
            .map(|t| attr(t.find("CATEGORYMEM").unwrap(), "category"))
            .collect();
        assert_eq!(refs, ["1", "2", "1"]);
    }

    #[test]
    fn table_without_address_uses_zero_id() {
        let root = build(json!({ "maps": [{ "maps": [{ "x": { "size": 2 } }] }] }), 0x100);
        let table = root.find("XDFTABLE").unwrap();
        assert_eq!(attr(table, "uniqueid"), "0x0");
        let x = table.find("XDFAXIS").unwrap();
        assert_eq!(attr(x, "uniqueid"), "0x0_x_axis");
        let category = root.find("CATEGORY").unwrap();
        assert_eq!(attr(category, "name"), "Unnamed Category 1");
    }

    #[test]
    fn description_prefers_map_id() {
        let root = build(
            json!({ "maps": [{ "name": "G", "maps": [{ "name": "Spark", "map_id": "KFZW" }] }] }),
            0,
        );
        let table = root.find("XDFTABLE").unwrap();
        let text = |tag: &str| table.find(tag).and_then(XdfNode::text).unwrap().to_string();
        assert_eq!(text("title"), "Spark");
        assert_eq!(text("description"), "KFZW");
    }
}
