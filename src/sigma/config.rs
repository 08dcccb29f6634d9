//! Configuration for the closure engine.

/// Limits applied while closing a family under complement and union.
///
/// The default places no limit on the number of passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosureConfig {
    /// Maximum number of passes before giving up, `None` for no limit.
    ///
    /// The closure of a finite family always terminates; a limit only bounds
    /// the work spent on large generating families.
    pub max_passes: Option<usize>,
}

impl ClosureConfig {
    pub fn with_max_passes(limit: usize) -> Self {
        Self {
            max_passes: Some(limit),
        }
    }
}
