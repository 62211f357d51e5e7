use std::time::Duration;

use crate::layout::document::Document;
use crate::xdf::category::Categories;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStat {
    pub name: String,
    pub index: usize,
    pub tables: usize,
}

#[derive(Debug, Default)]
pub struct ConversionStats {
    pub output: String,
    pub base_offset: i64,
    pub categories: Vec<CategoryStat>,
    pub tables: usize,
    pub axes: usize,
    pub bytes_written: usize,
    pub total_duration: Duration,
}

impl ConversionStats {
    /// Counts what the builder emits for `document`.
    pub fn collect(document: &Document, base_offset: i64) -> Self {
        let registry = Categories::from_groups(&document.maps);
        let mut categories: Vec<CategoryStat> = registry
            .iter()
            .map(|(name, index)| CategoryStat {
                name: name.to_string(),
                index,
                tables: 0,
            })
            .collect();

        let mut stats = Self {
            base_offset,
            ..Self::default()
        };

        for (position, group) in document.maps.iter().enumerate() {
            if let Some(index) = registry.index_of(&group.category_name(position)) {
                categories[index].tables += group.maps.len();
            }
            stats.tables += group.maps.len();
            stats.axes += group.maps.iter().map(|e| e.axis_count()).sum::<usize>();
        }

        stats.categories = categories;
        stats
    }
}
