//! Month-grid derivation for the calendar view.
//!
//! Pure functions over an event snapshot: no I/O, no store access. The
//! view state mirrors the calendar page — a reference month, an optional
//! area subset, a selected day, and an opened event — and every derivation
//! recomputes from the snapshot it is handed.

use crate::types::Event;
use chrono::{Datelike, Days, Months, NaiveDate};

/// The ordered days of the reference date's month, first through last.
#[must_use]
pub fn month_days(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = reference.with_day(1).unwrap_or(reference);
    let mut days = Vec::with_capacity(31);
    let mut day = first;
    while day.month() == first.month() && day.year() == first.year() {
        days.push(day);
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }
    days
}

/// Move the reference date by whole months, clamping the day-of-month to
/// the target month's length (Jan 31 back one month is Dec 31; forward one
/// month is Feb 28/29).
#[must_use]
pub fn add_months(reference: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        reference.checked_add_months(months)
    } else {
        reference.checked_sub_months(months)
    };
    shifted.unwrap_or(reference)
}

/// Events from `events` that fall on `day`, ignoring time-of-day.
#[must_use]
pub fn events_on_day<'a>(events: &'a [Event], day: NaiveDate) -> Vec<&'a Event> {
    events.iter().filter(|event| event.occurs_on(day)).collect()
}

/// Client-side calendar state: reference month, area filter, selection.
#[derive(Clone, Debug)]
pub struct CalendarView {
    reference: NaiveDate,
    selected_areas: Vec<String>,
    selected_day: Option<NaiveDate>,
    opened_event: Option<String>,
}

impl CalendarView {
    /// View anchored at the given reference date, with no filters.
    #[must_use]
    pub const fn new(reference: NaiveDate) -> Self {
        Self {
            reference,
            selected_areas: Vec::new(),
            selected_day: None,
            opened_event: None,
        }
    }

    /// The current reference date.
    #[must_use]
    pub const fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// The selected area ids. Empty means no filter.
    #[must_use]
    pub fn selected_areas(&self) -> &[String] {
        &self.selected_areas
    }

    /// The currently selected day, if any.
    #[must_use]
    pub const fn selected_day(&self) -> Option<NaiveDate> {
        self.selected_day
    }

    /// The id of the event opened in the detail view, if any.
    #[must_use]
    pub fn opened_event(&self) -> Option<&str> {
        self.opened_event.as_deref()
    }

    /// The ordered days of the reference month.
    #[must_use]
    pub fn days(&self) -> Vec<NaiveDate> {
        month_days(self.reference)
    }

    /// Add or remove an area from the selected subset.
    pub fn toggle_area(&mut self, area_id: &str) {
        if let Some(index) = self.selected_areas.iter().position(|id| id == area_id) {
            self.selected_areas.remove(index);
        } else {
            self.selected_areas.push(area_id.to_string());
        }
    }

    /// Clear the area filter entirely.
    pub fn clear_areas(&mut self) {
        self.selected_areas.clear();
    }

    /// Navigate to the next month.
    pub fn next_month(&mut self) {
        self.reference = add_months(self.reference, 1);
    }

    /// Navigate to the previous month.
    pub fn prev_month(&mut self) {
        self.reference = add_months(self.reference, -1);
    }

    /// Select a day, surfacing its events in the side panel.
    pub fn select_day(&mut self, day: NaiveDate) {
        self.selected_day = Some(day);
    }

    /// Open an event's detail view.
    pub fn open_event(&mut self, event_id: &str) {
        self.opened_event = Some(event_id.to_string());
    }

    /// Close the detail view.
    pub fn close_event(&mut self) {
        self.opened_event = None;
    }

    /// Events passing the area filter. An empty subset passes everything.
    #[must_use]
    pub fn visible_events<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events
            .iter()
            .filter(|event| {
                self.selected_areas.is_empty()
                    || self.selected_areas.iter().any(|id| id == &event.area_id)
            })
            .collect()
    }

    /// Events on `day` after the area filter is applied.
    #[must_use]
    pub fn events_for<'a>(&self, events: &'a [Event], day: NaiveDate) -> Vec<&'a Event> {
        self.visible_events(events)
            .into_iter()
            .filter(|event| event.occurs_on(day))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seed;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_events() -> Vec<Event> {
        let types = seed::event_types();
        seed::events(&types)
    }

    #[test]
    fn test_month_days_spans_whole_month() {
        let days = month_days(date(2025, 1, 15));
        assert_eq!(days.len(), 31);
        assert_eq!(days[0], date(2025, 1, 1));
        assert_eq!(days[30], date(2025, 1, 31));
    }

    #[test]
    fn test_month_days_february_leap_year() {
        assert_eq!(month_days(date(2024, 2, 10)).len(), 29);
        assert_eq!(month_days(date(2025, 2, 10)).len(), 28);
    }

    #[test]
    fn test_add_months_clamps_short_target() {
        // Jan 31 forward lands on the last day of February.
        assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        // March 31 back one month clamps the same way.
        assert_eq!(add_months(date(2025, 3, 31), -1), date(2025, 2, 28));
    }

    #[test]
    fn test_add_months_crosses_year_boundary() {
        assert_eq!(add_months(date(2025, 1, 15), -1), date(2024, 12, 15));
        assert_eq!(add_months(date(2024, 12, 15), 1), date(2025, 1, 15));
    }

    #[test]
    fn test_events_on_day_matches_calendar_day() {
        let events = sample_events();
        let on_18th = events_on_day(&events, date(2025, 1, 18));
        assert_eq!(on_18th.len(), 1);
        assert_eq!(on_18th[0].title, "Milonga La Noche");
        assert!(events_on_day(&events, date(2025, 2, 18)).is_empty());
    }

    #[test]
    fn test_empty_area_subset_means_no_filter() {
        let events = sample_events();
        let view = CalendarView::new(date(2025, 1, 1));
        assert_eq!(view.visible_events(&events).len(), events.len());
    }

    #[test]
    fn test_toggle_area_filters_and_untoggles() {
        let events = sample_events();
        let mut view = CalendarView::new(date(2025, 1, 1));

        view.toggle_area("downtown");
        let filtered = view.visible_events(&events);
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|e| e.area_id == "downtown"));

        view.toggle_area("riverside");
        let both = view.visible_events(&events);
        assert!(both
            .iter()
            .all(|e| e.area_id == "downtown" || e.area_id == "riverside"));
        assert!(both.len() > filtered.len());

        // Toggling twice removes the filter again.
        view.toggle_area("downtown");
        view.toggle_area("riverside");
        assert_eq!(view.visible_events(&events).len(), events.len());
    }

    #[test]
    fn test_events_for_applies_area_filter_first() {
        let events = sample_events();
        let mut view = CalendarView::new(date(2025, 1, 1));
        view.toggle_area("riverside");

        // Jan 18 has a downtown event only, so the filtered view is empty.
        assert!(view.events_for(&events, date(2025, 1, 18)).is_empty());
        // Jan 16 is a riverside day.
        let riverside = view.events_for(&events, date(2025, 1, 16));
        assert_eq!(riverside.len(), 1);
        assert_eq!(riverside[0].area_id, "riverside");
    }

    #[test]
    fn test_navigation_round_trips_mid_month() {
        let mut view = CalendarView::new(date(2025, 1, 15));
        view.next_month();
        assert_eq!(view.reference(), date(2025, 2, 15));
        view.prev_month();
        assert_eq!(view.reference(), date(2025, 1, 15));
    }

    #[test]
    fn test_selection_toggles() {
        let mut view = CalendarView::new(date(2025, 1, 1));
        assert!(view.selected_day().is_none());

        view.select_day(date(2025, 1, 18));
        assert_eq!(view.selected_day(), Some(date(2025, 1, 18)));

        view.open_event("2");
        assert_eq!(view.opened_event(), Some("2"));
        view.close_event();
        assert!(view.opened_event().is_none());
    }
}
