//! Pagination control: turns a `(total pages, current page)` pair into the
//! ordered slots a view layer renders, and resolves slot activations into
//! navigation intents for the host.
//!
//! The control owns no page state. The host keeps `current_page`, reacts to
//! the [`NavigationIntent`] produced by an activation and renders again with
//! the new value.

pub mod navigation;

pub use navigation::{NavigationIntent, activate};

use serde::{Deserialize, Serialize};

/// Below this many pages every page gets its own button
pub const REDUCTION_MIN_PAGES: i64 = 8;

// The start run collapses once the current page is at least this far in
const REDUCED_START_MIN_PAGE: i64 = 5;
// The end run collapses while the current page is at least this far from the end
const REDUCED_END_MARGIN: i64 = 4;
// Pages this distance (or more) from the current page may be collapsed
const COLLAPSE_DISTANCE: i64 = 2;

/// One renderable unit of the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Slot {
    Back { enabled: bool },
    Page { index: i64, selected: bool },
    Ellipsis,
    Forward { enabled: bool },
}

impl Slot {
    /// Text shown on the rendered element
    pub fn label(&self) -> String {
        match self {
            Slot::Back { .. } => "‹".to_string(),
            Slot::Page { index, .. } => index.to_string(),
            Slot::Ellipsis => "…".to_string(),
            Slot::Forward { .. } => "›".to_string(),
        }
    }

    /// Ellipsis placeholders are static, everything else is a button
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Slot::Ellipsis)
    }

    /// Whether activating the slot can emit an intent
    pub fn is_enabled(&self) -> bool {
        match self {
            Slot::Back { enabled } | Slot::Forward { enabled } => *enabled,
            Slot::Page { .. } => true,
            Slot::Ellipsis => false,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Slot::Page { selected: true, .. })
    }
}

/// The two host inputs of the control, paired for convenience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_pages: i64,
    pub current_page: i64,
}

impl Pagination {
    pub fn new(total_pages: i64, current_page: i64) -> Self {
        Self {
            total_pages,
            current_page,
        }
    }

    /// No slots at all are rendered for zero or negative page counts
    pub fn is_visible(&self) -> bool {
        self.total_pages > 0
    }

    pub fn slots(&self) -> Vec<Slot> {
        compute(self.total_pages, self.current_page)
    }
}

/// Compute the slot sequence for `total_pages` pages with `current_page`
/// selected.
///
/// `current_page` is used as given. Out-of-range values are not clamped; they
/// can leave no page selected or give the arrows an unexpected enabled state.
///
/// With at least [`REDUCTION_MIN_PAGES`] pages, runs of pages two or more
/// away from the current page collapse into a single [`Slot::Ellipsis`] on
/// each side. Page 1 never belongs to the start run and the last page never
/// belongs to the end run.
pub fn compute(total_pages: i64, current_page: i64) -> Vec<Slot> {
    if total_pages <= 0 {
        return Vec::new();
    }

    let reduced_start =
        total_pages >= REDUCTION_MIN_PAGES && current_page >= REDUCED_START_MIN_PAGE;
    let reduced_end =
        total_pages >= REDUCTION_MIN_PAGES && current_page <= total_pages - REDUCED_END_MARGIN;

    let start_run_end = current_page.saturating_sub(COLLAPSE_DISTANCE);
    let end_run_start = current_page.saturating_add(COLLAPSE_DISTANCE);

    let mut slots = vec![Slot::Back {
        enabled: current_page > 1,
    }];

    // Each run is contiguous, so after its placeholder the walk jumps to the
    // first index past it. Work stays bounded for huge page counts.
    let mut index = 1;
    while index <= total_pages {
        if reduced_start && index <= start_run_end && index != 1 {
            slots.push(Slot::Ellipsis);
            index = start_run_end + 1;
        } else if reduced_end && index >= end_run_start && index != total_pages {
            slots.push(Slot::Ellipsis);
            index = total_pages;
        } else {
            slots.push(Slot::Page {
                index,
                selected: index == current_page,
            });
            if index == total_pages {
                break;
            }
            index += 1;
        }
    }

    slots.push(Slot::Forward {
        enabled: current_page < total_pages,
    });

    log::debug!(
        "Computed {} pagination slots for page {} of {} (reduced start: {}, reduced end: {})",
        slots.len(),
        current_page,
        total_pages,
        reduced_start,
        reduced_end
    );

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(index: i64) -> Slot {
        Slot::Page {
            index,
            selected: false,
        }
    }

    fn selected(index: i64) -> Slot {
        Slot::Page {
            index,
            selected: true,
        }
    }

    fn back(enabled: bool) -> Slot {
        Slot::Back { enabled }
    }

    fn forward(enabled: bool) -> Slot {
        Slot::Forward { enabled }
    }

    /// Index-by-index walk with "first time entered" flags, used to check the
    /// jumping walk in `compute` against.
    fn literal_walk(total_pages: i64, current_page: i64) -> Vec<Slot> {
        if total_pages <= 0 {
            return Vec::new();
        }
        let reduced_start = total_pages >= 8 && current_page >= 5;
        let reduced_end = total_pages >= 8 && current_page <= total_pages - 4;
        let mut start_added = false;
        let mut end_added = false;
        let mut slots = vec![back(current_page > 1)];
        for index in 1..=total_pages {
            if reduced_start && index <= current_page - 2 && index != 1 {
                if !start_added {
                    start_added = true;
                    slots.push(Slot::Ellipsis);
                }
            } else if reduced_end && index >= current_page + 2 && index != total_pages {
                if !end_added {
                    end_added = true;
                    slots.push(Slot::Ellipsis);
                }
            } else {
                slots.push(Slot::Page {
                    index,
                    selected: index == current_page,
                });
            }
        }
        slots.push(forward(current_page < total_pages));
        slots
    }

    fn page_indices(slots: &[Slot]) -> Vec<i64> {
        slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Page { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    fn ellipsis_count(slots: &[Slot]) -> usize {
        slots.iter().filter(|slot| **slot == Slot::Ellipsis).count()
    }

    #[test]
    fn zero_pages_renders_nothing() {
        assert_eq!(compute(0, 1), Vec::<Slot>::new());
    }

    #[test]
    fn negative_pages_render_nothing() {
        assert!(compute(-1, 1).is_empty());
        assert!(compute(-50, -3).is_empty());
        assert!(compute(i64::MIN, i64::MIN).is_empty());
    }

    #[test]
    fn single_page() {
        assert_eq!(
            compute(1, 1),
            vec![back(false), selected(1), forward(false)]
        );
    }

    #[test]
    fn seven_pages_never_truncate() {
        assert_eq!(
            compute(7, 4),
            vec![
                back(true),
                page(1),
                page(2),
                page(3),
                selected(4),
                page(5),
                page(6),
                page(7),
                forward(true),
            ]
        );
    }

    #[test]
    fn eight_pages_on_first_page_reduces_end_only() {
        assert_eq!(
            compute(8, 1),
            vec![
                back(false),
                selected(1),
                page(2),
                Slot::Ellipsis,
                page(8),
                forward(true),
            ]
        );
    }

    #[test]
    fn eight_pages_on_last_page_reduces_start_only() {
        assert_eq!(
            compute(8, 8),
            vec![
                back(true),
                page(1),
                Slot::Ellipsis,
                page(7),
                selected(8),
                forward(false),
            ]
        );
    }

    #[test]
    fn twenty_pages_in_the_middle_reduces_both_sides() {
        assert_eq!(
            compute(20, 10),
            vec![
                back(true),
                page(1),
                Slot::Ellipsis,
                page(9),
                selected(10),
                page(11),
                Slot::Ellipsis,
                page(20),
                forward(true),
            ]
        );
    }

    #[test]
    fn reduction_thresholds_on_eight_pages() {
        // Page 4 is the last one without a start run, page 5 the first with one
        assert_eq!(page_indices(&compute(8, 4)), vec![1, 2, 3, 4, 5, 8]);
        assert_eq!(page_indices(&compute(8, 5)), vec![1, 4, 5, 6, 7, 8]);
        assert_eq!(ellipsis_count(&compute(8, 4)), 1);
        assert_eq!(ellipsis_count(&compute(8, 5)), 1);
    }

    #[test]
    fn adjacent_run_of_one_page_still_collapses() {
        // The start run is just page 2 here
        assert_eq!(
            compute(10, 4),
            vec![
                back(true),
                page(1),
                page(2),
                page(3),
                selected(4),
                page(5),
                Slot::Ellipsis,
                page(10),
                forward(true),
            ]
        );
        assert_eq!(page_indices(&compute(10, 5)), vec![1, 4, 5, 6, 10]);
    }

    #[test]
    fn deterministic_for_repeated_calls() {
        for total in -2..=30 {
            for current in -2..=32 {
                assert_eq!(compute(total, current), compute(total, current));
            }
        }
    }

    #[test]
    fn matches_literal_walk() {
        for total in -3..=40 {
            for current in -5..=45 {
                assert_eq!(
                    compute(total, current),
                    literal_walk(total, current),
                    "total {} current {}",
                    total,
                    current
                );
            }
        }
    }

    #[test]
    fn first_and_last_pages_always_present() {
        for total in 1..=40 {
            for current in 1..=total {
                let indices = page_indices(&compute(total, current));
                assert_eq!(indices.first(), Some(&1), "total {} current {}", total, current);
                assert_eq!(indices.last(), Some(&total), "total {} current {}", total, current);
            }
        }
    }

    #[test]
    fn at_most_one_placeholder_per_run() {
        for total in 8..=60 {
            for current in 1..=total {
                let slots = compute(total, current);
                let expected = usize::from(current >= 5 && current - 2 > 1)
                    + usize::from(current <= total - 4 && current + 2 < total);
                assert_eq!(ellipsis_count(&slots), expected, "total {} current {}", total, current);
                assert!(
                    !slots
                        .windows(2)
                        .any(|pair| pair[0] == Slot::Ellipsis && pair[1] == Slot::Ellipsis)
                );
            }
        }
    }

    #[test]
    fn exactly_one_selected_page_for_valid_input() {
        for total in 1..=40 {
            for current in 1..=total {
                let chosen: Vec<Slot> = compute(total, current)
                    .into_iter()
                    .filter(Slot::is_selected)
                    .collect();
                assert_eq!(chosen, vec![Slot::Page { index: current, selected: true }]);
            }
        }
    }

    #[test]
    fn small_page_counts_show_every_page() {
        for total in 1..=7 {
            for current in -3..=10 {
                let slots = compute(total, current);
                assert_eq!(page_indices(&slots), (1..=total).collect::<Vec<_>>());
                assert_eq!(ellipsis_count(&slots), 0);
            }
        }
    }

    #[test]
    fn arrows_wrap_the_sequence() {
        for total in 1..=20 {
            for current in 0..=21 {
                let slots = compute(total, current);
                assert_eq!(slots.first(), Some(&back(current > 1)));
                assert_eq!(slots.last(), Some(&forward(current < total)));
            }
        }
    }

    #[test]
    fn out_of_range_current_page_selects_nothing() {
        assert!(!compute(5, 0).iter().any(Slot::is_selected));
        assert!(!compute(5, 6).iter().any(Slot::is_selected));
        assert_eq!(compute(5, 6).last(), Some(&forward(false)));
        assert_eq!(compute(5, 0).first(), Some(&back(false)));
    }

    #[test]
    fn huge_page_count_stays_bounded() {
        let slots = compute(i64::MAX, 1_000_000);
        assert_eq!(
            page_indices(&slots),
            vec![1, 999_999, 1_000_000, 1_000_001, i64::MAX]
        );
        assert_eq!(ellipsis_count(&slots), 2);
    }

    #[test]
    fn slot_labels() {
        assert_eq!(back(true).label(), "‹");
        assert_eq!(forward(false).label(), "›");
        assert_eq!(Slot::Ellipsis.label(), "…");
        assert_eq!(selected(12).label(), "12");
        assert!(!Slot::Ellipsis.is_interactive());
        assert!(!back(false).is_enabled());
        assert!(page(3).is_enabled());
    }

    #[test]
    fn pagination_visibility() {
        assert!(Pagination::new(1, 1).is_visible());
        assert!(!Pagination::new(0, 1).is_visible());
        assert_eq!(Pagination::new(8, 8).slots(), compute(8, 8));
    }

    #[test]
    fn slots_serialize_with_kind_tag() {
        let json = serde_json::to_string(&compute(1, 1)).unwrap();
        assert_eq!(
            json,
            r#"[{"kind":"back","enabled":false},{"kind":"page","index":1,"selected":true},{"kind":"forward","enabled":false}]"#
        );
        let ellipsis = serde_json::to_string(&Slot::Ellipsis).unwrap();
        assert_eq!(ellipsis, r#"{"kind":"ellipsis"}"#);
    }
}
