//! Activities catalog view.

use crate::gather::{ActivityFilter, Facet, GatherResult, activity_category_options, gather};
use crate::models::Activity;

/// Activity cards with the category selector.
#[derive(Debug, Clone)]
pub struct ActivitiesView {
    activities: Vec<Activity>,
    filter: ActivityFilter,
}

impl ActivitiesView {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            filter: ActivityFilter::default(),
        }
    }

    pub fn filter(&self) -> &ActivityFilter {
        &self.filter
    }

    pub fn set_category(&mut self, category: impl Into<Facet>) {
        self.filter.category = category.into();
    }

    pub fn clear_filters(&mut self) {
        self.filter = ActivityFilter::default();
    }

    pub fn category_options(&self) -> Vec<String> {
        activity_category_options()
    }

    pub fn visible(&self) -> GatherResult<'_, Activity> {
        gather(&self.activities, &self.filter.predicate())
    }
}
