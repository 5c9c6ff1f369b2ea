use std::collections::HashSet;

/// The table of boolean style flags populated by the source-expression pass.
///
/// Indices are producer-assigned and never validated against a declared range;
/// reading an index that was never written yields `false`. Writes only ever
/// assert a flag — suppression voids a set request, it never unsets.
#[derive(Debug, Default)]
pub struct StyleTable {
    active: HashSet<usize>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asserts the style at `index`. Re-asserting an already-set index is a
    /// no-op.
    pub fn set(&mut self, index: usize) {
        self.active.insert(index);
    }

    /// Returns the current value of the style at `index` (unset → false).
    pub fn get(&self, index: usize) -> bool {
        self.active.contains(&index)
    }
}
