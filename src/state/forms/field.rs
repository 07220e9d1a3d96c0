//! Focusable form fields

/// How a field takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Segmented,
    Stepper,
    Toggle,
    Button,
}

/// Represents a single focusable row of the introduction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    SchoolName,
    FirstName,
    LastName,
    Year,
    PetCount,
    WantsMorePets,
    Introduce,
}

impl FormField {
    /// Fields in focus order
    pub const ALL: [FormField; 7] = [
        Self::SchoolName,
        Self::FirstName,
        Self::LastName,
        Self::Year,
        Self::PetCount,
        Self::WantsMorePets,
        Self::Introduce,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Next field in focus order (wraps around)
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field in focus order (wraps around)
    pub fn prev(&self) -> Self {
        let index = self.index();
        if index == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[index - 1]
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SchoolName => "School name",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Year => "Year",
            Self::PetCount => "Number of pets",
            Self::WantsMorePets => "I want more pets",
            Self::Introduce => "Introduce Self",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::SchoolName | Self::FirstName | Self::LastName => FieldKind::Text,
            Self::Year => FieldKind::Segmented,
            Self::PetCount => FieldKind::Stepper,
            Self::WantsMorePets => FieldKind::Toggle,
            Self::Introduce => FieldKind::Button,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_school_name() {
        assert_eq!(FormField::default(), FormField::SchoolName);
    }

    #[test]
    fn test_next_cycles() {
        let mut field = FormField::default();
        for _ in 0..FormField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, FormField::SchoolName);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        assert_eq!(FormField::SchoolName.prev(), FormField::Introduce);
        assert_eq!(FormField::Introduce.prev(), FormField::WantsMorePets);
    }

    #[test]
    fn test_index_round_trips_focus_order() {
        for (i, field) in FormField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_kinds() {
        assert_eq!(FormField::SchoolName.kind(), FieldKind::Text);
        assert_eq!(FormField::FirstName.kind(), FieldKind::Text);
        assert_eq!(FormField::LastName.kind(), FieldKind::Text);
        assert_eq!(FormField::Year.kind(), FieldKind::Segmented);
        assert_eq!(FormField::PetCount.kind(), FieldKind::Stepper);
        assert_eq!(FormField::WantsMorePets.kind(), FieldKind::Toggle);
        assert_eq!(FormField::Introduce.kind(), FieldKind::Button);
    }

    #[test]
    fn test_labels_match_form() {
        assert_eq!(FormField::PetCount.label(), "Number of pets");
        assert_eq!(FormField::Introduce.label(), "Introduce Self");
    }
}
