//! Page configuration.
//!
//! The single read-once input describing page content and theme. Wire
//! names are camelCase to match the shape the configuration literal has
//! always had. Every optional field that is absent suppresses exactly the
//! subtree it would have produced - nothing validates, nothing defaults.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Top-level page configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Document title, also the image alt-text fallback.
    pub title: String,

    /// Page background image URL.
    #[serde(default)]
    pub background: Option<String>,
    /// Favicon URL; MIME type is derived from the extension.
    #[serde(default)]
    pub favicon: Option<String>,

    #[serde(default)]
    pub font_color: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    /// Rendered as the `--sub-color` custom property.
    #[serde(default)]
    pub sub_color: Option<String>,

    #[serde(default)]
    pub header: Option<HeaderConfig>,
    #[serde(default)]
    pub main: Option<MainConfig>,
}

/// Header section: logo, navigation and social links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub menu: Option<Vec<MenuItem>>,
    #[serde(default)]
    pub social: Option<Vec<SocialLink>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub title: String,
    pub link: String,
    pub image: String,
}

/// Hero section: genre, rating, description, trailer and episode slider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainConfig {
    #[serde(default)]
    pub genre: Option<String>,
    /// Numeric-as-text, interpreted as an integer 0-10 for the star row.
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub trailer: Option<String>,
    #[serde(default)]
    pub slider: Option<Vec<Slide>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub img: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
}

impl PageConfig {
    /// Load a configuration from JSON text. Malformed input is fatal;
    /// there is no partial recovery.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Slide {
    /// Alt text for the card image: title and subtitle space-joined,
    /// empty parts omitted, trimmed.
    pub fn alt_text(&self) -> String {
        let title = self.title.as_deref().unwrap_or("");
        let subtitle = self.subtitle.as_deref().unwrap_or("");
        format!("{} {}", title, subtitle).trim().to_string()
    }

    pub fn has_caption(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
            || self.subtitle.as_deref().is_some_and(|s| !s.is_empty())
    }
}
