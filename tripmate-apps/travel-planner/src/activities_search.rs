//!  Tripmate Travel Planner
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # Activities Search
//!
//! Per-city search with rating, price and category filters, plus the
//! cross-city listings used for inspiration.

use crate::activities_catalog::{ActivitiesCatalog, Activity, builtin_activities, categories};
use crate::catalog::{list_alternatives, title_case};
use crate::currency::format_rupees;
use crate::telemetry::log_search_metrics;
use crate::tool_reply::{TravelError, TravelResult, ordered_map};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityFilters {
    pub min_rating: Option<f64>,
    pub max_price: Option<u64>,
    /// Matched case-insensitively.
    pub category: Option<String>,
}

impl ActivityFilters {
    fn accepts(&self, activity: &Activity) -> bool {
        if self.min_rating.is_some_and(|min| activity.rating < min) {
            return false;
        }
        if let Some(ceiling) = self.max_price {
            if !activity.ticket_price().is_ok_and(|p| p.within(ceiling)) {
                return false;
            }
        }
        match &self.category {
            Some(category) => activity.in_category(category),
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityQuery {
    pub city: String,
    pub filters: ActivityFilters,
}

impl ActivityQuery {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            filters: ActivityFilters::default(),
        }
    }

    pub fn filters(mut self, filters: ActivityFilters) -> Self {
        self.filters = filters;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityFiltersApplied {
    pub min_rating: String,
    pub max_price: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySearchResponse {
    pub city: String,
    pub activities_found: usize,
    pub activities: Vec<Activity>,
    pub filters_applied: ActivityFiltersApplied,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllActivitiesResponse {
    pub total_cities: usize,
    pub cities: Vec<String>,
    #[serde(serialize_with = "ordered_map")]
    pub activities_by_city: Vec<(String, Vec<Activity>)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryActivitiesResponse {
    pub category: String,
    pub cities_with_activities: usize,
    pub cities: Vec<String>,
    #[serde(serialize_with = "ordered_map")]
    pub activities_by_city: Vec<(String, Vec<Activity>)>,
}

pub trait ActivitySearch {
    fn search_activities(&self, query: &ActivityQuery) -> TravelResult<ActivitySearchResponse>;
}

/// Highest rated first; ties keep catalog order.
fn rank(activities: &mut [Activity]) {
    activities.sort_by(|a, b| b.rating.total_cmp(&a.rating));
}

#[derive(Clone)]
pub struct ActivitiesClient {
    catalog: Arc<ActivitiesCatalog>,
}

impl Default for ActivitiesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivitiesClient {
    pub fn new() -> Self {
        Self::with_catalog(builtin_activities())
    }

    pub fn with_catalog(catalog: Arc<ActivitiesCatalog>) -> Self {
        Self { catalog }
    }

    pub fn cities(&self) -> Vec<String> {
        self.catalog.keys().cloned().collect()
    }

    pub fn list_all(&self) -> AllActivitiesResponse {
        let activities_by_city: Vec<(String, Vec<Activity>)> = self
            .catalog
            .iter()
            .map(|(city, activities)| {
                let mut sorted = activities.to_vec();
                rank(&mut sorted);
                (title_case(city), sorted)
            })
            .collect();
        AllActivitiesResponse {
            total_cities: activities_by_city.len(),
            cities: activities_by_city.iter().map(|(c, _)| c.clone()).collect(),
            activities_by_city,
        }
    }

    pub fn by_category(&self, category: &str) -> TravelResult<CategoryActivitiesResponse> {
        tracing::info!("Searching activities by category: {}", category);
        let known = categories(&self.catalog);
        let Some(canonical) = known
            .iter()
            .find(|c| c.to_lowercase() == category.to_lowercase())
        else {
            tracing::warn!("Category '{}' not found", category);
            return Err(TravelError::not_found(format!(
                "Category '{}' not found. Available categories: {}",
                category,
                known.iter().cloned().collect::<Vec<_>>().join(", ")
            )));
        };

        let activities_by_city: Vec<(String, Vec<Activity>)> = self
            .catalog
            .iter()
            .filter_map(|(city, activities)| {
                let mut matching: Vec<Activity> = activities
                    .iter()
                    .filter(|a| a.in_category(canonical))
                    .cloned()
                    .collect();
                if matching.is_empty() {
                    return None;
                }
                rank(&mut matching);
                Some((title_case(city), matching))
            })
            .collect();
        tracing::info!(
            "Category search completed: {} cities have {} activities",
            activities_by_city.len(),
            canonical
        );

        Ok(CategoryActivitiesResponse {
            category: canonical.clone(),
            cities_with_activities: activities_by_city.len(),
            cities: activities_by_city.iter().map(|(c, _)| c.clone()).collect(),
            activities_by_city,
        })
    }
}

impl ActivitySearch for ActivitiesClient {
    fn search_activities(&self, query: &ActivityQuery) -> TravelResult<ActivitySearchResponse> {
        let city_key = query.city.to_lowercase();
        let filters = &query.filters;
        let applied = ActivityFiltersApplied {
            min_rating: filters
                .min_rating
                .map_or("None".to_string(), |r| format!("{r} stars")),
            max_price: filters.max_price.map_or("None".to_string(), format_rupees),
            category: filters.category.clone().unwrap_or_else(|| "None".to_string()),
        };
        let metrics = [
            ("min_rating", applied.min_rating.clone()),
            ("max_price", applied.max_price.clone()),
            ("category", applied.category.clone()),
        ];

        let Some(all) = self.catalog.get(&city_key) else {
            tracing::warn!("No activities available in {}", query.city);
            log_search_metrics("activities", &city_key, 0, &metrics);
            return Err(TravelError::not_found(format!(
                "No activities available in {}. Available cities: {}",
                title_case(&query.city),
                list_alternatives(self.catalog.keys())
            )));
        };

        let mut activities: Vec<Activity> =
            all.iter().filter(|a| filters.accepts(a)).cloned().collect();
        rank(&mut activities);
        log_search_metrics("activities", &city_key, activities.len(), &metrics);

        Ok(ActivitySearchResponse {
            city: title_case(&query.city),
            activities_found: activities.len(),
            activities,
            filters_applied: applied,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn activity(name: &str, category: &str, price: &str, rating: f64) -> Activity {
        Activity {
            name: name.into(),
            category: category.into(),
            duration: "1 hour".into(),
            price: price.into(),
            rating,
            description: String::new(),
        }
    }

    fn client() -> ActivitiesClient {
        ActivitiesClient::with_catalog(Arc::new(Catalog::new(vec![
            (
                "hampi".to_string(),
                vec![
                    activity("Boulder Walk", "Adventure", "₹free", 4.1),
                    activity("Temple Tour", "Heritage", "₹900", 4.7),
                    activity("Coracle Ride", "Adventure", "₹400", 4.1),
                    activity("Guide on call", "Heritage", "varies", 3.9),
                ],
            ),
            (
                "ooty".to_string(),
                vec![activity("Toy Train", "Leisure", "₹300", 4.4)],
            ),
        ])))
    }

    #[test]
    fn ties_keep_catalog_order() {
        let res = client().search_activities(&ActivityQuery::new("Hampi")).unwrap();
        let names: Vec<&str> = res.activities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Temple Tour", "Boulder Walk", "Coracle Ride", "Guide on call"]);
    }

    #[test]
    fn free_passes_ceiling_and_garbage_does_not() {
        let query = ActivityQuery::new("hampi").filters(ActivityFilters {
            max_price: Some(500),
            ..Default::default()
        });
        let res = client().search_activities(&query).unwrap();
        let names: Vec<&str> = res.activities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Boulder Walk", "Coracle Ride"]);
        assert_eq!(res.filters_applied.max_price, "₹500");
        assert_eq!(res.filters_applied.min_rating, "None");
    }

    #[test]
    fn empty_filtered_list_is_success() {
        let query = ActivityQuery::new("ooty").filters(ActivityFilters {
            min_rating: Some(4.5),
            category: Some("leisure".into()),
            ..Default::default()
        });
        let res = client().search_activities(&query).unwrap();
        assert_eq!(res.activities_found, 0);
        assert_eq!(res.filters_applied.min_rating, "4.5 stars");
        assert_eq!(res.filters_applied.category, "leisure");
    }

    #[test]
    fn whole_rating_echo_has_no_decimal() {
        let query = ActivityQuery::new("hampi").filters(ActivityFilters {
            min_rating: Some(4.0),
            ..Default::default()
        });
        let res = client().search_activities(&query).unwrap();
        assert_eq!(res.filters_applied.min_rating, "4 stars");
    }

    #[test]
    fn by_category_uses_canonical_spelling() {
        let res = client().by_category("HERITAGE").unwrap();
        assert_eq!(res.category, "Heritage");
        assert_eq!(res.cities, ["Hampi"]);
        assert_eq!(res.activities_by_city[0].1[0].name, "Temple Tour");
    }

    #[test]
    fn unknown_category_lists_sorted_alternatives() {
        let err = client().by_category("Nightlife").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Category 'Nightlife' not found. Available categories: Adventure, Heritage, Leisure"
        );
    }

    #[test]
    fn list_all_covers_every_city() {
        let res = client().list_all();
        assert_eq!(res.total_cities, 2);
        assert_eq!(res.cities, ["Hampi", "Ooty"]);
    }
}
