//! Trait abstraction for image lookup to enable mocking in tests

/// Name of the school logo resource
pub const SCHOOL_LOGO: &str = "SchoolLogo";

/// A text-mode image, one string per row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiImage {
    rows: Vec<String>,
}

impl AsciiImage {
    /// Build an image from its rows. Returns `None` when every row is blank.
    pub fn new(rows: Vec<String>) -> Option<Self> {
        if rows.iter().all(|r| r.trim().is_empty()) {
            return None;
        }
        Some(Self { rows })
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.rows.len()).unwrap_or(u16::MAX)
    }
}

/// Source of optional named images
#[cfg_attr(test, mockall::automock)]
pub trait AssetProvider {
    /// Look up an image by name; `None` when it is not available
    fn image(&self, name: &str) -> Option<AsciiImage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_image_is_none() {
        assert!(AsciiImage::new(vec![]).is_none());
        assert!(AsciiImage::new(vec!["   ".to_string(), String::new()]).is_none());
    }

    #[test]
    fn test_height_counts_rows() {
        let image = AsciiImage::new(vec!["ab".to_string(), String::new(), "cd".to_string()]).unwrap();
        assert_eq!(image.height(), 3);
        assert_eq!(image.rows()[1], "");
    }
}
