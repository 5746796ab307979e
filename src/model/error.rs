use thiserror::Error;

/// Errors raised by the rating engine. Both variants abort the run
/// immediately; no partial results are returned.
///
/// Chronological ordering of the fixture stream is a caller obligation the
/// engine cannot verify: out-of-order input silently produces ratings and
/// forecasts consistent with the supplied order. There is no error variant
/// for it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessorError {
    #[error("fixture {index}: field `{field}` {reason}")]
    Schema {
        index: usize,
        field: &'static str,
        reason: String
    },

    #[error("invalid configuration: {0}")]
    Configuration(String)
}

impl ProcessorError {
    pub fn schema(index: usize, field: &'static str, reason: impl Into<String>) -> ProcessorError {
        ProcessorError::Schema {
            index,
            field,
            reason: reason.into()
        }
    }
}
