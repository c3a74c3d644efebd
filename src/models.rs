//! Data model for the superhero REST API
//!
//! Mirrors the JSON schema served by the remote API: one `Hero` object with
//! nested attribute groups, and a pagination envelope for list queries.
//! Everything is owned data, so a `clone()` of a cached value is a fully
//! independent copy.

use serde::{Deserialize, Serialize};

/// A single superhero record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub powerstats: Powerstats,
    #[serde(default)]
    pub biography: Biography,
    #[serde(default)]
    pub appearance: Appearance,
    #[serde(default)]
    pub work: Work,
    #[serde(default)]
    pub connections: Connections,
    #[serde(default)]
    pub images: HeroImages,
}

/// Power statistics, each on a 0-100 scale
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Powerstats {
    #[serde(default)]
    pub intelligence: u32,
    #[serde(default)]
    pub strength: u32,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    pub durability: u32,
    #[serde(default)]
    pub power: u32,
    #[serde(default)]
    pub combat: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Biography {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub first_appearance: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub alter_egos: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Physical appearance. Height and weight come as one entry per unit
/// system (imperial, metric).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub height: Vec<String>,
    #[serde(default)]
    pub weight: Vec<String>,
    #[serde(default)]
    pub eye_color: Option<String>,
    #[serde(default)]
    pub hair_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Work {
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub base: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connections {
    #[serde(default)]
    pub group_affiliation: Option<String>,
    #[serde(default)]
    pub relatives: Option<String>,
}

/// Image URLs by resolution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroImages {
    #[serde(default)]
    pub xs: Option<String>,
    #[serde(default)]
    pub sm: Option<String>,
    #[serde(default)]
    pub md: Option<String>,
    #[serde(default)]
    pub lg: Option<String>,
}

impl Hero {
    /// Get the preferred image URL: medium, then large, then small
    pub fn image_url(&self) -> Option<&str> {
        self.images
            .md
            .as_deref()
            .or(self.images.lg.as_deref())
            .or(self.images.sm.as_deref())
    }
}

/// One page of heroes plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroPage {
    /// Total number of heroes across all pages
    pub length: u32,
    pub size: u32,
    pub page: u32,
    pub first_page: u32,
    pub last_page: u32,
    pub start_index: u32,
    pub end_index: u32,
    pub items: Vec<Hero>,
}

impl HeroPage {
    /// Total number of pages for this page size
    pub fn total_pages(&self) -> u32 {
        self.last_page
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
