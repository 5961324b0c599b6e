use crate::pagination::{NavigationIntent, Slot};

/// Render slots on one line, e.g. `(‹) [1] 2 … 8 ›`.
///
/// Disabled arrows are parenthesised and the selected page is bracketed.
pub fn format_slots(slots: &[Slot]) -> String {
    slots
        .iter()
        .map(format_slot)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_slot(slot: &Slot) -> String {
    match slot {
        Slot::Back { enabled: false } | Slot::Forward { enabled: false } => {
            format!("({})", slot.label())
        }
        Slot::Page { selected: true, .. } => format!("[{}]", slot.label()),
        _ => slot.label(),
    }
}

pub fn format_intent(intent: Option<NavigationIntent>) -> String {
    match intent {
        Some(intent) => format!("Navigate to page {}", intent.target_page),
        None => "No navigation".to_string(),
    }
}
