//! Academic year selection

use thiserror::Error;

/// Raised when a raw index does not name one of the four academic years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid academic year index {0}, expected 0..=3")]
pub struct InvalidYearIndex(pub usize);

/// Year of study, shown as a four-option segmented control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AcademicYear {
    #[default]
    First,
    Second,
    Third,
    Fourth,
}

impl AcademicYear {
    /// All years in display order
    pub const ALL: [AcademicYear; 4] = [Self::First, Self::Second, Self::Third, Self::Fourth];

    pub fn label(&self) -> &'static str {
        match self {
            Self::First => "First",
            Self::Second => "Second",
            Self::Third => "Third",
            Self::Fourth => "Fourth",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
            Self::Fourth => 3,
        }
    }

    /// Next year, staying on Fourth
    pub fn next(&self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::Third,
            Self::Third | Self::Fourth => Self::Fourth,
        }
    }

    /// Previous year, staying on First
    pub fn prev(&self) -> Self {
        match self {
            Self::First | Self::Second => Self::First,
            Self::Third => Self::Second,
            Self::Fourth => Self::Third,
        }
    }
}

impl TryFrom<usize> for AcademicYear {
    type Error = InvalidYearIndex;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(index).copied().ok_or(InvalidYearIndex(index))
    }
}
