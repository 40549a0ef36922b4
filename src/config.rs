//! Poster configuration (poster.yaml).
//!
//! The configuration holds the user-facing rendering parameters plus a
//! `style` section with the tunables of every layer. Every field has a
//! default, so an empty file is a valid configuration.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PosterError, Result};
use crate::render::{AuroraSpec, BackgroundMode, BackgroundSpec, StarSpec, StardustSpec, TitleSpec};
use crate::types::PaletteSpec;

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "poster.yaml";

pub const STAR_RANGE: RangeInclusive<usize> = 5..=40;
pub const WIDTH_RANGE: RangeInclusive<f64> = 4.0..=10.0;
pub const HEIGHT_RANGE: RangeInclusive<f64> = 6.0..=14.0;
pub const DPI_RANGE: RangeInclusive<f64> = 10.0..=1200.0;
pub const PADDING_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Parse seed text into a seed value.
///
/// Surrounding whitespace is ignored. Any integer that fits in `u64` or
/// `i64` is accepted (negative values keep their bit pattern); everything
/// else, including blank text, means "no seed".
pub fn parse_seed(text: &str) -> Option<u64> {
    let text = text.trim();
    text.parse::<u64>()
        .ok()
        .or_else(|| text.parse::<i64>().ok().map(|v| v as u64))
}

/// Per-layer tunables.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub palette: PaletteSpec,
    pub background: BackgroundSpec,
    pub aurora: AuroraSpec,
    pub stardust: StardustSpec,
    pub stars: StarSpec,
    pub title: TitleSpec,
}

/// Everything needed to render one poster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterConfig {
    /// Number of stars.
    pub stars: usize,

    /// Backdrop mode. Unknown names fall back to `gradient`.
    pub background: BackgroundMode,

    /// Draw the title text.
    pub title: bool,

    /// Figure width in inches.
    pub width: f64,

    /// Figure height in inches.
    pub height: f64,

    /// Seed text; blank or non-integer means an unseeded render.
    #[serde(deserialize_with = "seed_text")]
    pub seed: String,

    /// Output resolution.
    pub dpi: f64,

    /// Export padding in inches.
    pub padding: f64,

    pub style: Style,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            stars: 14,
            background: BackgroundMode::Gradient,
            title: true,
            width: 7.0,
            height: 10.0,
            seed: String::new(),
            dpi: 300.0,
            padding: 0.05,
            style: Style::default(),
        }
    }
}

impl PosterConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PosterError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| PosterError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| PosterError::Parse {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Look for `poster.yaml` in a directory.
    pub fn find(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_FILENAME);
        path.is_file().then_some(path)
    }

    /// The parsed seed, if the seed text holds a valid integer.
    pub fn seed_value(&self) -> Option<u64> {
        parse_seed(&self.seed)
    }

    /// Side of the square drawing area in inches.
    pub fn canvas_inches(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Check the user-facing parameters against their allowed ranges.
    pub fn validate(&self) -> Result<()> {
        check("stars", self.stars, &STAR_RANGE)?;
        check("width", self.width, &WIDTH_RANGE)?;
        check("height", self.height, &HEIGHT_RANGE)?;
        check("dpi", self.dpi, &DPI_RANGE)?;
        check("padding", self.padding, &PADDING_RANGE)?;
        Ok(())
    }
}

fn check<T>(name: &str, value: T, range: &RangeInclusive<T>) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        return Ok(());
    }
    Err(PosterError::Validation {
        message: format!("{} = {} is out of range", name, value),
        help: Some(format!(
            "{} must be between {} and {}",
            name,
            range.start(),
            range.end()
        )),
    })
}

/// Accept any YAML value as a seed. Integers and strings keep their text;
/// floats keep a decimal point so they never parse as a seed; anything
/// else becomes blank.
fn seed_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Signed(i64),
        Unsigned(u64),
        Float(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => String::new(),
        Some(Raw::Signed(v)) => v.to_string(),
        Some(Raw::Unsigned(v)) => v.to_string(),
        Some(Raw::Float(v)) => format!("{:?}", v),
        Some(Raw::Text(s)) => s,
        Some(Raw::Other(_)) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("42"), Some(42));
        assert_eq!(parse_seed("  7 "), Some(7));
        assert_eq!(parse_seed("-1"), Some(u64::MAX));
        assert_eq!(parse_seed("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_seed(""), None);
        assert_eq!(parse_seed("   "), None);
        assert_eq!(parse_seed("abc"), None);
        assert_eq!(parse_seed("4.2"), None);
        assert_eq!(parse_seed("99999999999999999999999"), None);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(PosterConfig::parse("").unwrap(), PosterConfig::default());
        assert_eq!(PosterConfig::parse("{}").unwrap(), PosterConfig::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = PosterConfig::parse(
            r#"
stars: 20
background: solid
title: false
seed: 42
style:
  stars:
    glow_alpha: 0.2
"#,
        )
        .unwrap();

        assert_eq!(config.stars, 20);
        assert_eq!(config.background, BackgroundMode::Solid);
        assert!(!config.title);
        assert_eq!(config.seed_value(), Some(42));
        assert_eq!(config.style.stars.glow_alpha, 0.2);
        assert_eq!(config.style.stars.body_alpha, StarSpec::default().body_alpha);
        assert_eq!(config.width, 7.0);
    }

    #[test]
    fn test_seed_forms() {
        let text = PosterConfig::parse("seed: \"42\"").unwrap();
        assert_eq!(text.seed_value(), Some(42));

        let null = PosterConfig::parse("seed: null").unwrap();
        assert_eq!(null.seed_value(), None);

        let float = PosterConfig::parse("seed: 1.5").unwrap();
        assert_eq!(float.seed_value(), None);

        let word = PosterConfig::parse("seed: banana").unwrap();
        assert_eq!(word.seed_value(), None);
    }

    #[test]
    fn test_whole_float_seed_is_unseeded() {
        let config = PosterConfig::parse("seed: 42.0").unwrap();
        assert_eq!(config.seed, "42.0");
        assert_eq!(config.seed_value(), None);
    }

    #[test]
    fn test_non_scalar_seed_is_unseeded() {
        for yaml in ["seed: true", "seed: [1]", "seed: {a: 1}"] {
            let config = PosterConfig::parse(yaml).unwrap();
            assert_eq!(config.seed_value(), None, "{}", yaml);
            assert_eq!(config.seed, "");
        }
    }

    #[test]
    fn test_unknown_background_falls_back() {
        let config = PosterConfig::parse("background: radial").unwrap();
        assert_eq!(config.background, BackgroundMode::Gradient);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = PosterConfig::parse("stars: [").unwrap_err();
        assert!(matches!(err, PosterError::Parse { .. }));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = PosterConfig::default();
        config.seed = "123".to_string();
        config.background = BackgroundMode::Solid;
        let yaml = config.to_yaml().unwrap();
        let back = PosterConfig::parse(&yaml).unwrap();
        assert_eq!(back.seed_value(), Some(123));
        assert_eq!(back.background, BackgroundMode::Solid);
        assert_eq!(back.style.palette, config.style.palette);
        assert_eq!(back.style.title.lines.len(), 2);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(PosterConfig::default().validate().is_ok());

        let too_many = PosterConfig {
            stars: 41,
            ..PosterConfig::default()
        };
        assert!(matches!(too_many.validate(), Err(PosterError::Validation { .. })));

        let narrow = PosterConfig {
            width: 3.5,
            ..PosterConfig::default()
        };
        assert!(narrow.validate().is_err());

        let tall = PosterConfig {
            height: 14.0,
            ..PosterConfig::default()
        };
        assert!(tall.validate().is_ok());
    }

    #[test]
    fn test_canvas_is_square_of_smaller_side() {
        let config = PosterConfig {
            width: 9.0,
            height: 6.5,
            ..PosterConfig::default()
        };
        assert_eq!(config.canvas_inches(), 6.5);
    }

    #[test]
    fn test_find_and_load() {
        let dir = tempdir().unwrap();
        assert!(PosterConfig::find(dir.path()).is_none());

        std::fs::write(dir.path().join(CONFIG_FILENAME), "stars: 9\n").unwrap();
        let path = PosterConfig::find(dir.path()).unwrap();
        assert_eq!(PosterConfig::load(&path).unwrap().stars, 9);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PosterConfig::load(Path::new("/nonexistent/poster.yaml")).unwrap_err();
        assert!(matches!(err, PosterError::Io { .. }));
    }
}
