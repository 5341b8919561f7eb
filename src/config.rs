//! Generator configuration: size manifests and output layout.
//!
//! [`GeneratorConfig`] serializes to camelCase JSON so build tooling can pin
//! or override the manifests. Missing fields fall back to the defaults.
//!
//! # Example
//!
//! ```
//! use parallelchat_icons::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_json(r#"{ "root": "/tmp/app" }"#).unwrap();
//! assert_eq!(config.sizes, GeneratorConfig::default().sizes);
//! assert!(config.icon_ico_path().ends_with("build/icon.ico"));
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::IconError;

/// Sizes written as individual PNGs.
pub const DEFAULT_SIZES: [u32; 8] = [16, 32, 48, 64, 128, 256, 512, 1024];

/// Sizes embedded in the ICO container.
pub const DEFAULT_ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Project root; `build/` and `public/` live directly under it.
    pub root: PathBuf,

    /// Primary size manifest, one `{n}x{n}.png` each.
    pub sizes: Vec<u32>,

    /// Frames of `icon.ico`. Written smallest-first regardless of order here.
    pub ico_sizes: Vec<u32>,

    /// Size of `build/icon.png` and `public/logo.png`.
    pub main_icon_size: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            sizes: DEFAULT_SIZES.to_vec(),
            ico_sizes: DEFAULT_ICO_SIZES.to_vec(),
            main_icon_size: 512,
        }
    }
}

impl GeneratorConfig {
    /// Default manifests rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root.join("build")
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.build_dir().join("icons")
    }

    pub fn public_dir(&self) -> PathBuf {
        self.root.join("public")
    }

    /// `build/icons/{n}x{n}.png`
    pub fn sized_png_path(&self, size: u32) -> PathBuf {
        self.icons_dir().join(format!("{size}x{size}.png"))
    }

    pub fn icon_png_path(&self) -> PathBuf {
        self.build_dir().join("icon.png")
    }

    pub fn icon_ico_path(&self) -> PathBuf {
        self.build_dir().join("icon.ico")
    }

    pub fn logo_path(&self) -> PathBuf {
        self.public_dir().join("logo.png")
    }

    /// Reads a config file.
    pub fn load(path: &Path) -> Result<Self, IconError> {
        let json = std::fs::read_to_string(path).map_err(|e| IconError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Serializes to a JSON string.
    pub fn to_json(&self) -> Result<String, IconError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, IconError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, IconError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_manifests() {
        let config = GeneratorConfig::default();
        assert_eq!(config.sizes, vec![16, 32, 48, 64, 128, 256, 512, 1024]);
        assert_eq!(config.ico_sizes, vec![16, 32, 48, 64, 128, 256]);
        assert_eq!(config.main_icon_size, 512);
    }

    #[test]
    fn layout_paths() {
        let config = GeneratorConfig::with_root("/project");
        assert_eq!(
            config.sized_png_path(48),
            PathBuf::from("/project/build/icons/48x48.png")
        );
        assert_eq!(config.icon_png_path(), PathBuf::from("/project/build/icon.png"));
        assert_eq!(config.icon_ico_path(), PathBuf::from("/project/build/icon.ico"));
        assert_eq!(config.logo_path(), PathBuf::from("/project/public/logo.png"));
    }

    #[test]
    fn json_uses_camel_case() {
        let json = GeneratorConfig::default().to_json().unwrap();
        assert!(json.contains("\"icoSizes\""));
        assert!(json.contains("\"mainIconSize\":512"));
    }

    #[test]
    fn json_round_trip_keeps_overrides() {
        let mut config = GeneratorConfig::with_root("assets");
        config.ico_sizes = vec![16, 256];

        let restored = GeneratorConfig::from_json(&config.to_json_pretty().unwrap()).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = GeneratorConfig::from_json(r#"{ "sizes": [32] }"#).unwrap();
        assert_eq!(config.sizes, vec![32]);
        assert_eq!(config.ico_sizes, DEFAULT_ICO_SIZES.to_vec());
        assert_eq!(config.root, PathBuf::from("."));
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.json");
        std::fs::write(&path, r#"{ "mainIconSize": 256 }"#).unwrap();
        assert_eq!(GeneratorConfig::load(&path).unwrap().main_icon_size, 256);

        let missing = dir.path().join("absent.json");
        match GeneratorConfig::load(&missing).unwrap_err() {
            IconError::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = GeneratorConfig::from_json("{ sizes: }").unwrap_err();
        assert!(matches!(err, IconError::Config(_)));
    }
}
