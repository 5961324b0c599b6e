use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

const SMALL_IMAGE_HEIGHT: u32 = 56;
const NORMAL_IMAGE_HEIGHT: u32 = 84;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListItemSize {
    #[default]
    Normal,
    Small,
}

impl FromStr for ListItemSize {
    type Err = Infallible;

    /// Only `"small"` selects the small size; anything else is normal
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "small" {
            ListItemSize::Small
        } else {
            ListItemSize::Normal
        })
    }
}

/// Image shown at the start of a list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemImage<'a> {
    pub src: &'a str,
    pub fallback_src: &'a str,
    pub height: u32,
}

impl<'a> ListItemImage<'a> {
    /// Pick the source to load: the primary one when it is set and `exists`
    /// accepts it, otherwise the fallback when that is set.
    pub fn resolve(&self, exists: impl Fn(&str) -> bool) -> Option<&'a str> {
        if !self.src.is_empty() && exists(self.src) {
            Some(self.src)
        } else if !self.fallback_src.is_empty() {
            log::debug!("Using fallback image '{}' instead of '{}'", self.fallback_src, self.src);
            Some(self.fallback_src)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListItem {
    pub image_src: String,
    pub image_fallback_src: String,
    pub headline: String,
    pub subhead: String,
    pub size: ListItemSize,
}

impl ListItem {
    pub fn new(headline: impl Into<String>, subhead: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            subhead: subhead.into(),
            ..Default::default()
        }
    }

    pub fn with_image(mut self, src: impl Into<String>, fallback_src: impl Into<String>) -> Self {
        self.image_src = src.into();
        self.image_fallback_src = fallback_src.into();
        self
    }

    pub fn with_size(mut self, size: ListItemSize) -> Self {
        self.size = size;
        self
    }

    pub fn is_small(&self) -> bool {
        self.size == ListItemSize::Small
    }

    pub fn image(&self) -> Option<ListItemImage<'_>> {
        if self.image_src.is_empty() && self.image_fallback_src.is_empty() {
            return None;
        }

        Some(ListItemImage {
            src: &self.image_src,
            fallback_src: &self.image_fallback_src,
            height: if self.is_small() {
                SMALL_IMAGE_HEIGHT
            } else {
                NORMAL_IMAGE_HEIGHT
            },
        })
    }

    pub fn headline(&self) -> Option<&str> {
        Some(self.headline.as_str()).filter(|s| !s.is_empty())
    }

    pub fn subhead(&self) -> Option<&str> {
        Some(self.subhead.as_str()).filter(|s| !s.is_empty())
    }
}
