pub mod dropdown;
pub mod error;
pub mod format;
pub mod gallery;
pub mod list_item;
pub mod pagination;
pub mod tab_bar_item;

pub use dropdown::{Dropdown, DropdownChange, DropdownOption, DropdownOptionKind};
pub use error::WidgetError;
pub use format::{format_intent, format_slot, format_slots};
pub use gallery::{GalleryConfig, default_config_path};
pub use list_item::{ListItem, ListItemImage, ListItemSize};
pub use pagination::{NavigationIntent, Pagination, Slot, activate, compute};
pub use tab_bar_item::{TabBar, TabBarItem};
