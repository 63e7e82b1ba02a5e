use thiserror::Error;

/// Problem found while reading command-line flags.
///
/// These are diagnostics, not failures: parsing always produces usable options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgError {
    #[error("unknown flag `{0}`, skipping")]
    UnknownFlag(String),

    #[error("`{flag}` expects {expected} value(s), found {found}")]
    MissingValues {
        flag: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("`{flag}`: `{value}` is not a number, flag ignored")]
    InvalidNumber { flag: &'static str, value: String },
}
