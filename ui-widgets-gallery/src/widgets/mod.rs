//! `iced` renderings of the core widget models. Each function only maps a
//! model to elements; state changes travel back to the host as messages.

mod dropdown;
mod list_item;
mod pagination;
mod tab_bar;

pub use dropdown::dropdown;
pub use list_item::list_item;
pub use pagination::pagination;
pub use tab_bar::tab_bar;
