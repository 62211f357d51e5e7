use indexmap::IndexMap;

use super::node::{XdfNode, XdfValue};
use crate::layout::document::MapGroup;

pub const GENERIC_CATEGORY: &str = "Generic";

/// Category names in first-occurrence order. The position in the map is the
/// zero-based index written to `CATEGORY`; tables refer to it one-based.
#[derive(Debug, Default)]
pub struct Categories {
    names: IndexMap<String, usize>,
}

impl Categories {
    pub fn from_groups(groups: &[MapGroup]) -> Self {
        let mut names = IndexMap::new();
        if groups.is_empty() {
            names.insert(GENERIC_CATEGORY.to_string(), 0);
        }
        for (position, group) in groups.iter().enumerate() {
            let name = group.category_name(position);
            let next = names.len();
            names.entry(name).or_insert(next);
        }
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    /// Value for `CATEGORYMEM/@category`.
    pub fn member_ref(&self, name: &str) -> i64 {
        self.index_of(name).map_or(1, |index| index as i64 + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.names.iter().map(|(name, index)| (name.as_str(), *index))
    }

    pub fn nodes(&self) -> Vec<XdfNode> {
        self.iter()
            .map(|(name, index)| {
                XdfNode::new("CATEGORY")
                    .attr("index", XdfValue::Hex(index as i128))
                    .attr("name", name)
            })
            .collect()
    }
}
