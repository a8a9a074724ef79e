use core::fmt;

use crate::{GeometryState, InputError};

/// Identifies one host-provided geometry input.
///
/// The declaration order is the order in which a batch of changes is applied, so a new
/// `GroupCount` is in place before an `ExpandedGroup` in the same batch is validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputField {
    GroupCount,
    GroupHeight,
    ExpandedGroup,
    ElementCount,
    ElementHeight,
    ScrollOffset,
    ViewportHeight,
}

impl InputField {
    pub fn name(self) -> &'static str {
        match self {
            Self::GroupCount => "group_count",
            Self::GroupHeight => "group_height",
            Self::ExpandedGroup => "expanded_group",
            Self::ElementCount => "element_count",
            Self::ElementHeight => "element_height",
            Self::ScrollOffset => "scroll_offset",
            Self::ViewportHeight => "viewport_height",
        }
    }

    /// Whether a change to this field invalidates the derived layout.
    pub fn affects_layout(self) -> bool {
        !matches!(self, Self::ScrollOffset)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw, unvalidated value coming from the host (e.g. a component binding).
///
/// `ExpandedGroup(None)` collapses every group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputChange {
    GroupCount(i64),
    GroupHeight(i64),
    ExpandedGroup(Option<i64>),
    ElementCount(i64),
    ElementHeight(i64),
    ScrollOffset(i64),
    ViewportHeight(i64),
}

impl InputChange {
    pub fn field(&self) -> InputField {
        match self {
            Self::GroupCount(_) => InputField::GroupCount,
            Self::GroupHeight(_) => InputField::GroupHeight,
            Self::ExpandedGroup(_) => InputField::ExpandedGroup,
            Self::ElementCount(_) => InputField::ElementCount,
            Self::ElementHeight(_) => InputField::ElementHeight,
            Self::ScrollOffset(_) => InputField::ScrollOffset,
            Self::ViewportHeight(_) => InputField::ViewportHeight,
        }
    }

    /// Validates this change against `state` and writes it.
    ///
    /// On error `state` is left untouched.
    pub fn apply_to(self, state: &mut GeometryState, policy: InputPolicy) -> Result<(), InputError> {
        let field = self.field();
        match self {
            Self::GroupCount(v) => state.set_group_count(policy.count(field, v)?),
            Self::GroupHeight(v) => state.set_group_height(policy.height(field, v)?),
            Self::ExpandedGroup(v) => {
                let index = policy.expanded(v, state.group_count)?;
                state.set_expanded_group(index);
            }
            Self::ElementCount(v) => state.set_element_count(policy.count(field, v)?),
            Self::ElementHeight(v) => state.set_element_height(policy.height(field, v)?),
            Self::ScrollOffset(v) => state.set_scroll_offset(policy.offset(field, v)?),
            Self::ViewportHeight(v) => state.set_viewport_height(policy.height(field, v)?),
        }
        Ok(())
    }
}

/// How raw host values that are not valid geometry are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputPolicy {
    /// Substitute `0` (or "no group expanded") for invalid values. Never fails.
    #[default]
    Lenient,
    /// Reject invalid values with an [`InputError`].
    Strict,
}

impl InputPolicy {
    fn reject<T>(self, fallback: T, err: InputError) -> Result<T, InputError> {
        match self {
            Self::Lenient => {
                fwarn!(%err, "coercing invalid input");
                Ok(fallback)
            }
            Self::Strict => Err(err),
        }
    }

    fn count(self, field: InputField, value: i64) -> Result<usize, InputError> {
        if value < 0 {
            return self.reject(0, InputError::Negative { field, value });
        }
        match usize::try_from(value) {
            Ok(v) => Ok(v),
            Err(_) => self.reject(
                0,
                InputError::OutOfRange {
                    field,
                    value,
                    max: usize::MAX as u64,
                },
            ),
        }
    }

    fn height(self, field: InputField, value: i64) -> Result<u32, InputError> {
        if value < 0 {
            return self.reject(0, InputError::Negative { field, value });
        }
        match u32::try_from(value) {
            Ok(v) => Ok(v),
            Err(_) => self.reject(
                0,
                InputError::OutOfRange {
                    field,
                    value,
                    max: u32::MAX as u64,
                },
            ),
        }
    }

    fn offset(self, field: InputField, value: i64) -> Result<u64, InputError> {
        if value < 0 {
            return self.reject(0, InputError::Negative { field, value });
        }
        Ok(value as u64)
    }

    fn expanded(self, value: Option<i64>, group_count: usize) -> Result<Option<usize>, InputError> {
        let Some(index) = value else {
            return Ok(None);
        };
        if index < 0 {
            return self.reject(
                None,
                InputError::Negative {
                    field: InputField::ExpandedGroup,
                    value: index,
                },
            );
        }
        match usize::try_from(index) {
            Ok(i) if i < group_count => Ok(Some(i)),
            _ => self.reject(
                None,
                InputError::ExpandedOutOfBounds { index, group_count },
            ),
        }
    }
}
