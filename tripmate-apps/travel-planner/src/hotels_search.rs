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

//! # Hotels Search
//!
//! City lookup with nightly price and star rating filters. Results are
//! ranked best-rated first, cheaper first among equals.

use crate::catalog::{list_alternatives, title_case};
use crate::currency::format_rupees;
use crate::dates::{format_date, today};
use crate::hotels_catalog::{Hotel, HotelsCatalog, builtin_hotels};
use crate::telemetry::log_search_metrics;
use crate::tool_reply::{TravelError, TravelResult};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelFilters {
    /// Per night, in rupees.
    pub max_price: Option<u64>,
    /// Stars, 1 to 5.
    pub min_rating: Option<u8>,
}

impl HotelFilters {
    fn accepts(&self, hotel: &Hotel) -> bool {
        if let Some(ceiling) = self.max_price {
            match hotel.nightly_price() {
                Ok(price) if price.within(ceiling) => {}
                _ => return false,
            }
        }
        match self.min_rating {
            Some(stars) => hotel.rating.stars() >= stars,
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HotelQuery {
    pub city: String,
    pub checkin: Option<NaiveDate>,
    pub checkout: Option<NaiveDate>,
    pub filters: HotelFilters,
}

impl HotelQuery {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            checkin: None,
            checkout: None,
            filters: HotelFilters::default(),
        }
    }

    pub fn stay(mut self, checkin: Option<NaiveDate>, checkout: Option<NaiveDate>) -> Self {
        self.checkin = checkin;
        self.checkout = checkout;
        self
    }

    pub fn filters(mut self, filters: HotelFilters) -> Self {
        self.filters = filters;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelFiltersApplied {
    pub max_price: String,
    pub min_rating: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelSearchResponse {
    pub city: String,
    pub checkin_date: String,
    pub checkout_date: String,
    pub hotels_found: usize,
    pub hotels: Vec<Hotel>,
    pub filters_applied: HotelFiltersApplied,
}

pub trait HotelSearch {
    fn search_hotels(&self, query: &HotelQuery) -> TravelResult<HotelSearchResponse>;
}

#[derive(Clone)]
pub struct HotelsClient {
    catalog: Arc<HotelsCatalog>,
}

impl Default for HotelsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HotelsClient {
    pub fn new() -> Self {
        Self::with_catalog(builtin_hotels())
    }

    pub fn with_catalog(catalog: Arc<HotelsCatalog>) -> Self {
        Self { catalog }
    }

    pub fn cities(&self) -> Vec<String> {
        self.catalog.keys().cloned().collect()
    }
}

impl HotelSearch for HotelsClient {
    fn search_hotels(&self, query: &HotelQuery) -> TravelResult<HotelSearchResponse> {
        let city_key = query.city.to_lowercase();
        let applied = HotelFiltersApplied {
            max_price: query.filters.max_price.map_or("None".to_string(), format_rupees),
            min_rating: query
                .filters
                .min_rating
                .map_or("None".to_string(), |s| format!("{s} stars")),
        };
        let metrics = [
            ("max_price", applied.max_price.clone()),
            ("min_rating", applied.min_rating.clone()),
        ];

        let Some(all) = self.catalog.get(&city_key) else {
            tracing::warn!("No hotels available in {}", query.city);
            log_search_metrics("hotels", &city_key, 0, &metrics);
            return Err(TravelError::not_found(format!(
                "No hotels available in {}. Available cities: {}",
                title_case(&query.city),
                list_alternatives(self.catalog.keys())
            )));
        };
        tracing::debug!("Found {} total hotels in {}, applying filters", all.len(), city_key);

        let mut hotels: Vec<Hotel> = all
            .iter()
            .filter(|h| query.filters.accepts(h))
            .cloned()
            .collect();
        log_search_metrics("hotels", &city_key, hotels.len(), &metrics);

        if hotels.is_empty() {
            tracing::warn!("No hotels found in {} matching criteria", query.city);
            return Err(TravelError::not_found(format!(
                "No hotels found in {} matching your criteria. Try adjusting your filters.",
                title_case(&query.city)
            )));
        }

        // Unpriced labels sort last among hotels of equal rating.
        hotels.sort_by_key(|h| {
            let nightly = h.nightly_price().map_or(u64::MAX, |p| p.amount());
            (Reverse(h.rating), nightly)
        });

        let checkin = query.checkin.unwrap_or_else(today);
        let checkout = match query.checkout {
            Some(date) => date,
            None => checkin
                .checked_add_days(Days::new(1))
                .ok_or_else(|| TravelError::computation("Invalid check-in date", checkin))?,
        };

        Ok(HotelSearchResponse {
            city: title_case(&query.city),
            checkin_date: format_date(checkin),
            checkout_date: format_date(checkout),
            hotels_found: hotels.len(),
            hotels,
            filters_applied: applied,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::hotels_catalog::StarRating;

    fn hotel(name: &str, rating: StarRating, price: &str) -> Hotel {
        Hotel {
            name: name.into(),
            rating,
            price_per_night: price.into(),
            amenities: vec!["WiFi".into()],
            location: "Centre".into(),
        }
    }

    fn client() -> HotelsClient {
        HotelsClient::with_catalog(Arc::new(Catalog::new(vec![(
            "testville".to_string(),
            vec![
                hotel("Pricey", StarRating::Four, "₹9,000"),
                hotel("Mystery", StarRating::Four, "ask at desk"),
                hotel("Budget", StarRating::Four, "₹2,000"),
                hotel("Grand", StarRating::Five, "₹20,000"),
            ],
        )])))
    }

    #[test]
    fn rating_then_price_ordering() {
        let res = client().search_hotels(&HotelQuery::new("TestVille")).unwrap();
        let names: Vec<&str> = res.hotels.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Grand", "Budget", "Pricey", "Mystery"]);
        assert_eq!(res.city, "Testville");
    }

    #[test]
    fn checkout_defaults_to_day_after_checkin() {
        let checkin = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        let res = client()
            .search_hotels(&HotelQuery::new("testville").stay(Some(checkin), None))
            .unwrap();
        assert_eq!(res.checkin_date, "2026-12-31");
        assert_eq!(res.checkout_date, "2027-01-01");
    }

    #[test]
    fn empty_match_is_an_error() {
        let query = HotelQuery::new("testville").filters(HotelFilters {
            max_price: Some(1_000),
            min_rating: None,
        });
        let err = client().search_hotels(&query).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No hotels found in Testville matching your criteria. Try adjusting your filters."
        );
    }

    #[test]
    fn unparsable_price_is_dropped_under_a_ceiling() {
        let query = HotelQuery::new("testville").filters(HotelFilters {
            max_price: Some(100_000),
            min_rating: Some(4),
        });
        let res = client().search_hotels(&query).unwrap();
        assert_eq!(res.hotels_found, 3);
        assert_eq!(res.filters_applied.max_price, "₹100,000");
        assert_eq!(res.filters_applied.min_rating, "4 stars");
    }
}
