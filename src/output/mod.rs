pub mod args;
pub mod errors;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::xdf::XdfNode;
use errors::OutputError;

/// Renders the document with a declaration and one tab per nesting level.
pub fn render_xdf(root: &XdfNode) -> Result<Vec<u8>, OutputError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(render_error)?;
    write_node(&mut writer, root)?;
    Ok(writer.into_inner())
}

fn render_error<E: std::fmt::Display>(e: E) -> OutputError {
    OutputError::RenderError(e.to_string())
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &XdfNode) -> Result<(), OutputError> {
    let mut start = BytesStart::new(node.tag());
    let attributes: Vec<(&str, String)> = node
        .attributes()
        .map(|(key, value)| (key, value.to_string()))
        .collect();
    for (key, value) in &attributes {
        start.push_attribute((*key, value.as_str()));
    }

    let text = node
        .text()
        .map(ToString::to_string)
        .filter(|t| !t.is_empty());

    if text.is_none() && node.child_nodes().is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(render_error);
    }

    writer.write_event(Event::Start(start)).map_err(render_error)?;
    if let Some(text) = &text {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(render_error)?;
    }
    for child in node.child_nodes() {
        write_node(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(node.tag())))
        .map_err(render_error)
}
