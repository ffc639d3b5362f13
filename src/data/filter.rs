use super::model::{Catalog, Category};

// ---------------------------------------------------------------------------
// Filter predicate: plant list and family
// ---------------------------------------------------------------------------

/// Sidebar selection. `None` means no constraint ("Alle planten" / "Alle").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantFilter {
    pub list: Option<Category>,
    pub family: Option<String>,
}

impl PlantFilter {
    /// Whether a plant at `idx` passes both predicates.
    fn accepts(&self, catalog: &Catalog, idx: usize) -> bool {
        let plant = &catalog.plants[idx];
        if let Some(cat) = self.list {
            if !plant.has_category(cat) {
                return false;
            }
        }
        match &self.family {
            Some(family) => plant.family.as_deref() == Some(family.as_str()),
            None => true,
        }
    }
}

/// Return indices of plants that pass the filter, in catalog order.
pub fn filtered_indices(catalog: &Catalog, filter: &PlantFilter) -> Vec<usize> {
    (0..catalog.len())
        .filter(|&i| filter.accepts(catalog, i))
        .collect()
}

// ---------------------------------------------------------------------------
// Number range: the start/end fields of the sidebar
// ---------------------------------------------------------------------------

/// A 1-based inclusive sub-range of the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    pub start: usize,
    pub end: usize,
}

impl NumberRange {
    /// The whole list of `total` plants.
    pub fn full(total: usize) -> Self {
        NumberRange {
            start: 1,
            end: total.max(1),
        }
    }

    /// Keep `1 <= start <= end <= total`.
    pub fn clamped(self, total: usize) -> Self {
        let max = total.max(1);
        let start = self.start.clamp(1, max);
        let end = self.end.clamp(start, max);
        NumberRange { start, end }
    }

    /// The part of `indices` covered by this range.
    pub fn slice<'a>(&self, indices: &'a [usize]) -> &'a [usize] {
        if indices.is_empty() {
            return &[];
        }
        let r = self.clamped(indices.len());
        &indices[r.start - 1..r.end]
    }
}
