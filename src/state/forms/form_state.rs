//! Introduction form state and its derived text

use super::academic_year::AcademicYear;
use super::field::FormField;
use serde::{Deserialize, Serialize};

/// Fewest pets the stepper allows
pub const PET_COUNT_MIN: u32 = 0;
/// Most pets the stepper allows
pub const PET_COUNT_MAX: u32 = 50;

/// How the "more pets" sentence is phrased
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntroductionStyle {
    /// "It is true that I want more pets."
    #[default]
    Literal,
    /// "I would like more pets."
    Conversational,
}

/// Everything the user has entered on the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    first_name: String,
    last_name: String,
    school_name: String,
    year: AcademicYear,
    pet_count: u32,
    wants_more_pets: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn school_name(&self) -> &str {
        &self.school_name
    }

    pub fn year(&self) -> AcademicYear {
        self.year
    }

    pub fn pet_count(&self) -> u32 {
        self.pet_count
    }

    pub fn wants_more_pets(&self) -> bool {
        self.wants_more_pets
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_school_name(&mut self, value: impl Into<String>) {
        self.school_name = value.into();
    }

    pub fn set_year(&mut self, year: AcademicYear) {
        self.year = year;
    }

    pub fn select_next_year(&mut self) {
        self.year = self.year.next();
    }

    pub fn select_prev_year(&mut self) {
        self.year = self.year.prev();
    }

    /// Move the pet count by `delta`, clamped to [`PET_COUNT_MIN`, `PET_COUNT_MAX`]
    pub fn adjust_pet_count(&mut self, delta: i32) {
        let adjusted = (i64::from(self.pet_count) + i64::from(delta))
            .clamp(i64::from(PET_COUNT_MIN), i64::from(PET_COUNT_MAX));
        self.pet_count = u32::try_from(adjusted).unwrap_or(PET_COUNT_MAX);
    }

    pub fn set_wants_more_pets(&mut self, value: bool) {
        self.wants_more_pets = value;
    }

    pub fn toggle_wants_more_pets(&mut self) {
        self.set_wants_more_pets(!self.wants_more_pets);
    }

    /// Text value backing `field`, if it is a text field
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::SchoolName => Some(&self.school_name),
            FormField::FirstName => Some(&self.first_name),
            FormField::LastName => Some(&self.last_name),
            _ => None,
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::SchoolName => Some(&mut self.school_name),
            FormField::FirstName => Some(&mut self.first_name),
            FormField::LastName => Some(&mut self.last_name),
            _ => None,
        }
    }

    /// Push a character to a text field. Non-text fields are ignored.
    pub fn push_char(&mut self, field: FormField, c: char) {
        if let Some(text) = self.text_mut(field) {
            text.push(c);
        }
    }

    /// Remove the last character from a text field
    pub fn pop_char(&mut self, field: FormField) {
        if let Some(text) = self.text_mut(field) {
            text.pop();
        }
    }

    /// School name for the header, `None` when it is blank
    pub fn school_display_name(&self) -> Option<&str> {
        let trimmed = self.school_name.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(&self.school_name)
        }
    }

    fn pet_noun(&self) -> &'static str {
        if self.pet_count == 1 {
            "dog"
        } else {
            "dogs"
        }
    }

    /// Compose the three-line introduction from the current values
    pub fn build_introduction(&self) -> String {
        self.build_introduction_with(IntroductionStyle::Literal)
    }

    pub fn build_introduction_with(&self, style: IntroductionStyle) -> String {
        let wish = match style {
            IntroductionStyle::Literal => {
                format!("It is {} that I want more pets.", self.wants_more_pets)
            }
            IntroductionStyle::Conversational if self.wants_more_pets => {
                "I would like more pets.".to_string()
            }
            IntroductionStyle::Conversational => "I would not like more pets.".to_string(),
        };

        format!(
            "My name is {} {} and I attend {}.\nI am currently in my {} year and I own {} {}.\n{}",
            self.first_name,
            self.last_name,
            self.school_name,
            self.year.label(),
            self.pet_count,
            self.pet_noun(),
            wish,
        )
    }
}
