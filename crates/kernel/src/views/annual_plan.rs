//! Annual plan view: event grid and month timeline.

use tracing::debug;

use crate::gather::{
    EventFilter, Facet, GatherResult, MonthGroup, PlanStats, event_type_options, gather,
    group_by_month, month_options,
};
use crate::models::AdventureEvent;

/// Event catalog with its filter bar state.
#[derive(Debug, Clone)]
pub struct AnnualPlanView {
    events: Vec<AdventureEvent>,
    filter: EventFilter,
    season_year: i32,
}

impl AnnualPlanView {
    pub fn new(events: Vec<AdventureEvent>, season_year: i32) -> Self {
        Self {
            events,
            filter: EventFilter::default(),
            season_year,
        }
    }

    /// The full store, in content order.
    pub fn events(&self) -> &[AdventureEvent] {
        &self.events
    }

    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    pub fn season_year(&self) -> i32 {
        self.season_year
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        debug!(query = %self.filter.query, "plan search changed");
    }

    pub fn set_type(&mut self, event_type: impl Into<Facet>) {
        self.filter.event_type = event_type.into();
        debug!(event_type = %self.filter.event_type.as_str(), "plan type filter changed");
    }

    pub fn set_month(&mut self, month: impl Into<Facet>) {
        self.filter.month = month.into();
        debug!(month = %self.filter.month.as_str(), "plan month filter changed");
    }

    /// Replace the whole filter state.
    pub fn set_filter(&mut self, filter: EventFilter) {
        self.filter = filter;
    }

    /// Reset search and selectors to "All".
    pub fn clear_filters(&mut self) {
        self.filter = EventFilter::default();
    }

    /// Filtered events in content order.
    pub fn grid(&self) -> GatherResult<'_, AdventureEvent> {
        gather(&self.events, &self.filter.predicate())
    }

    /// Filtered events grouped by month in season order.
    pub fn timeline(&self) -> Vec<MonthGroup<'_>> {
        group_by_month(self.grid().items)
    }

    pub fn type_options(&self) -> Vec<String> {
        event_type_options(&self.events)
    }

    pub fn month_options(&self) -> Vec<String> {
        month_options(&self.events)
    }

    /// Headline numbers over the full store.
    pub fn stats(&self) -> PlanStats {
        PlanStats::from_events(&self.events)
    }

    pub fn find(&self, id: &str) -> Option<&AdventureEvent> {
        self.events.iter().find(|event| event.id == id)
    }
}
