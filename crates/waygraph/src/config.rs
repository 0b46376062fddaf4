//! Graph construction options.

/// Options fixed when a [`Graph`](crate::Graph) is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraphConfig {
    /// Reject `add_node` and `set_value` calls whose value is already held
    /// by another live node.
    ///
    /// Without this, duplicate values are allowed and value lookups resolve
    /// to the first matching node in insertion order.
    pub unique_values: bool,
    /// Number of node slots to pre-allocate.
    pub initial_capacity: usize,
}

impl GraphConfig {
    /// Default configuration: duplicates allowed, no pre-allocation.
    pub const fn new() -> Self {
        Self {
            unique_values: false,
            initial_capacity: 0,
        }
    }

    /// Set the duplicate-value policy.
    pub const fn unique_values(mut self, unique: bool) -> Self {
        self.unique_values = unique;
        self
    }

    /// Set the number of node slots to pre-allocate.
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
