//! Table configuration parameters.

/// Configuration for a [`MatrixTable`](crate::MatrixTable).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of slots. Must be at least 1.
    ///
    /// Default: 10.
    pub capacity: usize,
}

impl TableConfig {
    /// Default slot count.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Create a config with the given slot count.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
