//! Images declared in the user configuration

use super::provider::{AsciiImage, AssetProvider, SCHOOL_LOGO};
use crate::config::TuiConfig;
use std::collections::HashMap;

/// Serves the images listed in [`TuiConfig`]
#[derive(Debug, Clone, Default)]
pub struct ConfiguredAssets {
    images: HashMap<String, AsciiImage>,
}

impl ConfiguredAssets {
    pub fn from_config(config: &TuiConfig) -> Self {
        let mut images = HashMap::new();
        if let Some(logo) = config.school_logo.clone().and_then(AsciiImage::new) {
            tracing::debug!(rows = logo.height(), "loaded school logo from config");
            images.insert(SCHOOL_LOGO.to_string(), logo);
        }
        Self { images }
    }
}

impl AssetProvider for ConfiguredAssets {
    fn image(&self, name: &str) -> Option<AsciiImage> {
        self.images.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_logo_configured() {
        let assets = ConfiguredAssets::from_config(&TuiConfig::default());
        assert!(assets.image(SCHOOL_LOGO).is_none());
    }

    #[test]
    fn test_logo_from_config() {
        let config = TuiConfig {
            school_logo: Some(vec![" /\\ ".to_string(), "/__\\".to_string()]),
            ..Default::default()
        };
        let assets = ConfiguredAssets::from_config(&config);
        let logo = assets.image(SCHOOL_LOGO).unwrap();
        assert_eq!(logo.rows(), &[" /\\ ".to_string(), "/__\\".to_string()]);
    }

    #[test]
    fn test_blank_logo_is_treated_as_absent() {
        let config = TuiConfig {
            school_logo: Some(vec!["  ".to_string()]),
            ..Default::default()
        };
        let assets = ConfiguredAssets::from_config(&config);
        assert!(assets.image(SCHOOL_LOGO).is_none());
    }

    #[test]
    fn test_unknown_name_is_none() {
        let config = TuiConfig {
            school_logo: Some(vec!["X".to_string()]),
            ..Default::default()
        };
        let assets = ConfiguredAssets::from_config(&config);
        assert!(assets.image("Mascot").is_none());
    }
}
