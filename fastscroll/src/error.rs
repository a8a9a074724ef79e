use crate::InputField;

/// Rejection of a raw host value under [`crate::InputPolicy::Strict`].
///
/// Resolution itself never fails; this is only produced when a host opts into strict input
/// validation instead of the default lenient coercion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: InputField, value: i64 },

    #[error("{field} value {value} exceeds the maximum of {max}")]
    OutOfRange {
        field: InputField,
        value: i64,
        max: u64,
    },

    #[error("expanded group {index} is out of bounds for {group_count} groups")]
    ExpandedOutOfBounds { index: i64, group_count: usize },
}
