//! Dropdown configuration.
//!
//! Keys use the camelCase names of the widget's public options so a config
//! document reads like the widget's props:
//!
//! ```json
//! { "chunkSize": 50, "displayKey": "address.city", "multipleSelect": false }
//! ```

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::Deserialize;

use crate::error::ConfigError;

/// Default number of items appended to the display window per growth.
pub const DEFAULT_CHUNK_SIZE: usize = 100;
/// Default fixed row height.
pub const DEFAULT_ITEM_HEIGHT: f32 = 35.0;
/// Default height cap of the dropdown panel.
pub const DEFAULT_MAX_DROPDOWN_HEIGHT: f32 = 300.0;
/// Panel width used before the host has been measured, when the configured
/// width has no usable number.
pub const FALLBACK_DROPDOWN_WIDTH: f32 = 350.0;

/// A CSS-like length: absolute units or a percentage of the parent.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "LengthRepr")]
pub enum Length {
    /// Absolute units (`"350px"` or a bare number).
    Px(f32),
    /// Percentage of the parent extent (`"100%"`).
    Percent(f32),
}

impl Length {
    /// Resolve against the parent extent.
    pub fn resolve(&self, parent: f32) -> f32 {
        match *self {
            Length::Px(px) => px,
            Length::Percent(pct) => parent * pct / 100.0,
        }
    }

    /// The bare number, whatever the unit.
    pub fn value(&self) -> f32 {
        match *self {
            Length::Px(v) | Length::Percent(v) => v,
        }
    }
}

impl FromStr for Length {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ConfigError::InvalidLength {
            value: s.to_string(),
        };

        if let Some(pct) = trimmed.strip_suffix('%') {
            pct.trim().parse().map(Length::Percent).map_err(|_| invalid())
        } else {
            let px = trimmed.strip_suffix("px").unwrap_or(trimmed);
            px.trim().parse().map(Length::Px).map_err(|_| invalid())
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) => write!(f, "{}px", px),
            Length::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LengthRepr {
    Number(f32),
    Text(String),
}

impl TryFrom<LengthRepr> for Length {
    type Error = ConfigError;

    fn try_from(repr: LengthRepr) -> Result<Self, Self::Error> {
        match repr {
            LengthRepr::Number(px) => Ok(Length::Px(px)),
            LengthRepr::Text(text) => text.parse(),
        }
    }
}

/// Options recognized by the dropdown.
///
/// The candidate list and the change callback are not part of the config;
/// they are handed to [`Dropdown`](crate::Dropdown) directly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropdownConfig {
    /// Window growth increment.
    pub chunk_size: usize,
    /// Fixed row height in the virtualized list.
    pub item_height: f32,
    /// Dotted path of the row label.
    pub display_key: String,
    /// Field holding each item's unique identity.
    pub key_field: String,
    /// Multi-select (checkboxes, select-all) versus single-select.
    pub multiple_select: bool,
    /// Width of the input box.
    pub input_width: Length,
    /// Minimum height of the input box.
    pub input_height: Length,
    /// Border color of the input box, as a hex code.
    pub input_color: String,
    /// Width of the whole control.
    pub dropdown_width: Length,
    /// Height cap of the dropdown panel.
    pub max_dropdown_height: f32,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            item_height: DEFAULT_ITEM_HEIGHT,
            display_key: "customer".to_string(),
            key_field: "id".to_string(),
            multiple_select: true,
            input_width: Length::Percent(100.0),
            input_height: Length::Px(35.0),
            input_color: "#ccc".to_string(),
            dropdown_width: Length::Px(350.0),
            max_dropdown_height: DEFAULT_MAX_DROPDOWN_HEIGHT,
        }
    }
}

impl DropdownConfig {
    /// Parse and validate a JSON config document. Missing keys keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the widget cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.item_height.is_nan() || self.item_height <= 0.0 {
            return Err(ConfigError::InvalidItemHeight(self.item_height));
        }
        if self.max_dropdown_height.is_nan() || self.max_dropdown_height <= 0.0 {
            return Err(ConfigError::InvalidMaxHeight(self.max_dropdown_height));
        }
        self.input_rgb()?;
        Ok(())
    }

    /// The input border color.
    pub fn input_rgb(&self) -> Result<Srgb<u8>, ConfigError> {
        self.input_color
            .parse::<Srgb<u8>>()
            .map_err(|source| ConfigError::InvalidColor {
                value: self.input_color.clone(),
                source,
            })
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_item_height(mut self, item_height: f32) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_display_key(mut self, display_key: impl Into<String>) -> Self {
        self.display_key = display_key.into();
        self
    }

    pub fn with_key_field(mut self, key_field: impl Into<String>) -> Self {
        self.key_field = key_field.into();
        self
    }

    pub fn with_multiple_select(mut self, multiple_select: bool) -> Self {
        self.multiple_select = multiple_select;
        self
    }

    pub fn with_dropdown_width(mut self, width: Length) -> Self {
        self.dropdown_width = width;
        self
    }

    pub fn with_max_dropdown_height(mut self, height: f32) -> Self {
        self.max_dropdown_height = height;
        self
    }
}
