//! Gallery configuration: which widget states the demo application and the
//! CLI start from.
//!
//! Stored as JSON (`gallery.json`) in the platform config directory. Every
//! field is optional on disk; missing fields take the built-in defaults.

use crate::dropdown::{DEFAULT_DROPDOWN_WIDTH, Dropdown, DropdownOption};
use crate::error::WidgetError;
use crate::list_item::{ListItem, ListItemSize};
use crate::pagination::Pagination;
use crate::tab_bar_item::TabBar;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILE_NAME: &str = "gallery.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationDemo {
    pub pages: i64,
    pub current_page: i64,
}

impl Default for PaginationDemo {
    fn default() -> Self {
        Self {
            pages: 6,
            current_page: 3,
        }
    }
}

impl PaginationDemo {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.pages, self.current_page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropdownDemo {
    pub label: String,
    pub options: Vec<DropdownOption>,
    pub selected_key: String,
    pub width: u32,
    pub disabled: bool,
}

impl Default for DropdownDemo {
    fn default() -> Self {
        Self {
            label: "Sort by".to_string(),
            options: vec![
                DropdownOption::new("name", "Name"),
                DropdownOption::new("date", "Date added"),
                DropdownOption::divider(),
                DropdownOption::new("size", "Size"),
            ],
            selected_key: String::new(),
            width: DEFAULT_DROPDOWN_WIDTH,
            disabled: false,
        }
    }
}

impl DropdownDemo {
    pub fn dropdown(&self) -> Dropdown {
        Dropdown::new(self.options.clone())
            .with_label(self.label.clone())
            .with_selected_key(self.selected_key.clone())
            .with_width(self.width)
            .with_disabled(self.disabled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    pub pagination: PaginationDemo,
    pub dropdown: DropdownDemo,
    pub list_items: Vec<ListItem>,
    pub tabs: Vec<String>,
    pub active_tab: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            pagination: PaginationDemo::default(),
            dropdown: DropdownDemo::default(),
            list_items: vec![
                ListItem::new("Headline", "Subhead text"),
                ListItem::new("Small item", "Compact layout").with_size(ListItemSize::Small),
            ],
            tabs: vec![
                "Overview".to_string(),
                "Details".to_string(),
                "Settings".to_string(),
            ],
            active_tab: Some(0),
        }
    }
}

impl GalleryConfig {
    pub fn load(path: &Path) -> Result<Self, WidgetError> {
        let contents = fs::read_to_string(path)?;
        let config: GalleryConfig = serde_json::from_str(&contents)?;
        if let Some(active) = config.active_tab.filter(|&i| i >= config.tabs.len()) {
            return Err(WidgetError::Config(format!(
                "activeTab {} is out of range for {} tabs",
                active,
                config.tabs.len()
            )));
        }
        info!(path = %path.display(), "Loaded gallery configuration");
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the default location.
    /// A missing default file yields the built-in configuration.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, WidgetError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                debug!(path = %path.display(), "No gallery configuration found, using defaults");
                Ok(Self::default())
            }
            None => {
                debug!("No config directory available, using default gallery configuration");
                Ok(Self::default())
            }
        }
    }

    pub fn tab_bar(&self) -> TabBar {
        let mut bar = TabBar::new(self.tabs.iter().cloned());
        if let Some(index) = self.active_tab {
            bar.activate(index);
        }
        bar
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ui-widgets").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
