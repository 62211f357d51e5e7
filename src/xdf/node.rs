use indexmap::IndexMap;
use std::fmt;

use super::format::{format_float, format_hex};

/// A typed attribute or text value. Numbers stay numeric until the document is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum XdfValue {
    Text(String),
    Int(i128),
    Hex(i128),
    Float(f64),
    /// A value that could not be resolved; stored as an empty string.
    Absent,
}

impl fmt::Display for XdfValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XdfValue::Text(s) => f.write_str(s),
            XdfValue::Int(n) => write!(f, "{n}"),
            XdfValue::Hex(n) => f.write_str(&format_hex(*n)),
            XdfValue::Float(v) => f.write_str(&format_float(*v)),
            XdfValue::Absent => Ok(()),
        }
    }
}

impl From<&str> for XdfValue {
    fn from(value: &str) -> Self {
        XdfValue::Text(value.to_string())
    }
}

impl From<String> for XdfValue {
    fn from(value: String) -> Self {
        XdfValue::Text(value)
    }
}

impl From<i64> for XdfValue {
    fn from(value: i64) -> Self {
        XdfValue::Int(value.into())
    }
}

impl From<i128> for XdfValue {
    fn from(value: i128) -> Self {
        XdfValue::Int(value)
    }
}

impl<T: Into<XdfValue>> From<Option<T>> for XdfValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(XdfValue::Absent, Into::into)
    }
}

/// One element of the output document.
#[derive(Debug, Clone, PartialEq)]
pub struct XdfNode {
    tag: String,
    attributes: IndexMap<String, XdfValue>,
    text: Option<XdfValue>,
    children: Vec<XdfNode>,
}

impl XdfNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: IndexMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Element holding only text.
    pub fn text_element(tag: &str, text: impl Into<XdfValue>) -> Self {
        Self::new(tag).with_text(text)
    }

    pub fn attr(mut self, key: &str, value: impl Into<XdfValue>) -> Self {
        let value = match value.into() {
            XdfValue::Absent => {
                tracing::warn!(
                    "Attribute '{}' for tag '{}' has no value. Converting to empty string.",
                    key,
                    self.tag
                );
                XdfValue::Text(String::new())
            }
            value => value,
        };
        self.attributes.insert(key.to_string(), value);
        self
    }

    pub fn with_text(mut self, text: impl Into<XdfValue>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: XdfNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = XdfNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &XdfValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn attribute(&self, key: &str) -> Option<&XdfValue> {
        self.attributes.get(key)
    }

    pub fn text(&self) -> Option<&XdfValue> {
        self.text.as_ref()
    }

    pub fn child_nodes(&self) -> &[XdfNode] {
        &self.children
    }

    /// Direct children with the given tag, in document order.
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XdfNode> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    pub fn find(&self, tag: &str) -> Option<&XdfNode> {
        self.children.iter().find(|c| c.tag == tag)
    }
}
