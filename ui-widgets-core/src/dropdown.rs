use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_DROPDOWN_WIDTH: u32 = 160;
pub const PLACEHOLDER_TEXT: &str = "Select an option";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropdownOptionKind {
    #[default]
    Option,
    Divider,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, rename = "type")]
    pub kind: DropdownOptionKind,
}

impl DropdownOption {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            kind: DropdownOptionKind::Option,
        }
    }

    pub fn divider() -> Self {
        Self {
            key: String::new(),
            value: String::new(),
            kind: DropdownOptionKind::Divider,
        }
    }

    pub fn is_divider(&self) -> bool {
        self.kind == DropdownOptionKind::Divider
    }
}

/// Emitted when the user picks an option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownChange {
    pub key: String,
}

/// Dropdown state: the option list plus whether the list is showing.
///
/// The widget never decides on outside clicks itself. The host calls
/// [`Dropdown::dismiss`] when a click lands elsewhere, and should only listen
/// for such clicks while [`Dropdown::is_open`] holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    pub label: String,
    pub options: Vec<DropdownOption>,
    pub selected_key: String,
    pub width: u32,
    pub disabled: bool,
    open: bool,
}

impl Dropdown {
    pub fn new(options: Vec<DropdownOption>) -> Self {
        Self {
            label: String::new(),
            options,
            selected_key: String::new(),
            width: DEFAULT_DROPDOWN_WIDTH,
            disabled: false,
            open: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_selected_key(mut self, key: impl Into<String>) -> Self {
        self.selected_key = key.into();
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the option list; a disabled dropdown stays closed
    pub fn toggle(&mut self) {
        if !self.disabled {
            self.open = !self.open;
        }
    }

    pub fn dismiss(&mut self) {
        if self.open {
            debug!(label = %self.label, "Dropdown dismissed");
        }
        self.open = false;
    }

    pub fn select(&mut self, key: impl Into<String>) -> DropdownChange {
        let key = key.into();
        debug!(label = %self.label, key = %key, "Dropdown option selected");
        self.selected_key = key.clone();
        self.open = false;
        DropdownChange { key }
    }

    pub fn selected_option(&self) -> Option<&DropdownOption> {
        self.options
            .iter()
            .find(|option| !option.is_divider() && option.key == self.selected_key)
    }

    /// Value of the selected option, or the placeholder text
    pub fn button_text(&self) -> &str {
        self.selected_option()
            .map(|option| option.value.as_str())
            .unwrap_or(PLACEHOLDER_TEXT)
    }

    pub fn is_selected(&self, option: &DropdownOption) -> bool {
        !option.is_divider() && option.key == self.selected_key
    }

    /// The label element is omitted when the label is empty
    pub fn label(&self) -> Option<&str> {
        if self.label.is_empty() {
            None
        } else {
            Some(&self.label)
        }
    }
}
