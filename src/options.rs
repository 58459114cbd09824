//! Construction configuration.

/// Options recognized at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// Maximum number of past snapshots retained by `save()`.
    ///
    /// `0` (the default) keeps no history; the dirty flag still works.
    pub history: usize,
}

impl Options {
    /// Retain up to `history` snapshots.
    pub fn with_history(history: usize) -> Self {
        Self { history }
    }
}
