//! Named image resources for the form

mod configured;
mod provider;

pub use configured::ConfiguredAssets;
pub use provider::{AsciiImage, AssetProvider, SCHOOL_LOGO};

#[cfg(test)]
pub use provider::MockAssetProvider;
