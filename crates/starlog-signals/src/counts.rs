//! Per-category signal counts.

use starlog_core::models::{Category, SignalRecord};

/// How many records fall into each category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: [usize; Category::COUNT],
}

impl CategoryCounts {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a SignalRecord>) -> Self {
        let mut counts = Self::default();
        for record in records {
            counts.counts[record.category().index()] += 1;
        }
        counts
    }

    pub fn get(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Non-zero counts in category order.
    pub fn non_zero(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL
            .iter()
            .map(|&c| (c, self.get(c)))
            .filter(|&(_, n)| n > 0)
    }
}
