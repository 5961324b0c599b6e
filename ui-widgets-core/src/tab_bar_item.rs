use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabBarItem {
    pub label: String,
    #[serde(default)]
    pub active: bool,
}

impl TabBarItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            active: false,
        }
    }
}

/// A row of tab items with at most one active
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabBar {
    pub items: Vec<TabBarItem>,
}

impl TabBar {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: labels.into_iter().map(TabBarItem::new).collect(),
        }
    }

    /// Mark `index` as the only active tab. Returns `false` and leaves the
    /// bar untouched when `index` is out of range.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        for (i, item) in self.items.iter_mut().enumerate() {
            item.active = i == index;
        }
        true
    }

    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.active)
    }
}
