use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Pagination, Slot};

/// Outward request for the host to show another page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationIntent {
    pub target_page: i64,
}

impl NavigationIntent {
    pub fn new(target_page: i64) -> Self {
        Self { target_page }
    }
}

/// Resolve a user activation of `slot` into at most one intent.
///
/// Disabled arrows and ellipsis placeholders emit nothing. A page button always
/// emits its own index, including the current page.
pub fn activate(slot: &Slot, current_page: i64) -> Option<NavigationIntent> {
    match *slot {
        Slot::Back { enabled: true } => Some(NavigationIntent::new(current_page.saturating_sub(1))),
        Slot::Forward { enabled: true } => {
            Some(NavigationIntent::new(current_page.saturating_add(1)))
        }
        Slot::Page { index, .. } => Some(NavigationIntent::new(index)),
        Slot::Back { enabled: false } | Slot::Forward { enabled: false } | Slot::Ellipsis => None,
    }
}

impl Pagination {
    pub fn activate(&self, slot: &Slot) -> Option<NavigationIntent> {
        activate(slot, self.current_page)
    }

    /// Host-side handling of an intent: the next state when the target is a
    /// real page, `None` when it falls outside `1..=total_pages`.
    pub fn navigate(&self, intent: NavigationIntent) -> Option<Pagination> {
        if (1..=self.total_pages).contains(&intent.target_page) {
            Some(Pagination::new(self.total_pages, intent.target_page))
        } else {
            debug!(
                target_page = intent.target_page,
                total_pages = self.total_pages,
                "Ignoring navigation to a page outside the range"
            );
            None
        }
    }
}
