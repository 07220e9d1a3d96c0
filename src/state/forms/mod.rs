//! Form domain layer
//!
//! The introduction form is a flat record of user input plus a pure
//! function that derives the introduction text on demand. Nothing here
//! knows about rendering.

mod academic_year;
mod field;
mod form_state;

pub use academic_year::AcademicYear;
pub use field::{FieldKind, FormField};
pub use form_state::{FormState, IntroductionStyle, PET_COUNT_MAX, PET_COUNT_MIN};
