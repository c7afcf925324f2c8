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

//! # Flights Search
//!
//! Route lookup over the flights catalog with an optional fare ceiling.
//! Flights carry no rating, so results keep catalog order.

use crate::catalog::Route;
use crate::currency::{PriceParseError, format_rupees};
use crate::dates::{format_date, today};
use crate::flights_catalog::{FlightOffer, FlightsCatalog, builtin_flights};
use crate::telemetry::log_search_metrics;
use crate::tool_reply::{TravelError, TravelResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Optional constraints; `None` means unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightFilters {
    pub max_price: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightQuery {
    pub source: String,
    pub destination: String,
    pub date: Option<NaiveDate>,
    pub filters: FlightFilters,
}

impl FlightQuery {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            date: None,
            filters: FlightFilters::default(),
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn max_price(mut self, max_price: Option<u64>) -> Self {
        self.filters.max_price = max_price;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightFiltersApplied {
    pub max_price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FlightSearchResponse {
    pub route: String,
    pub date: String,
    pub flights_found: usize,
    pub flights: Vec<FlightOffer>,
    pub filters_applied: FlightFiltersApplied,
}

impl FlightSearchResponse {
    /// Lowest fare among the returned flights, `None` when empty.
    pub fn cheapest_fare(&self) -> Result<Option<u64>, PriceParseError> {
        let mut cheapest = None;
        for flight in &self.flights {
            let fare = flight.fare()?.amount();
            cheapest = Some(cheapest.map_or(fare, |c: u64| c.min(fare)));
        }
        Ok(cheapest)
    }
}

pub trait FlightSearch {
    fn search_flights(&self, query: &FlightQuery) -> TravelResult<FlightSearchResponse>;
}

#[derive(Clone)]
pub struct FlightsClient {
    catalog: Arc<FlightsCatalog>,
}

impl Default for FlightsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightsClient {
    pub fn new() -> Self {
        Self::with_catalog(builtin_flights())
    }

    pub fn with_catalog(catalog: Arc<FlightsCatalog>) -> Self {
        Self { catalog }
    }

    /// Every city appearing on either end of a route, sorted.
    pub fn cities(&self) -> Vec<String> {
        self.catalog
            .keys()
            .flat_map(|r| [r.source.clone(), r.destination.clone()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn available_routes(&self) -> String {
        let mut routes: Vec<String> = self.catalog.keys().map(|r| r.to_string()).collect();
        routes.sort();
        routes.join(", ")
    }
}

impl FlightSearch for FlightsClient {
    fn search_flights(&self, query: &FlightQuery) -> TravelResult<FlightSearchResponse> {
        let route = Route::new(&query.source, &query.destination);
        let filters = [(
            "max_price",
            query.filters.max_price.map_or("None".to_string(), format_rupees),
        )];

        let Some(offers) = self.catalog.get(&route) else {
            tracing::warn!("No flights available for route {}", route);
            log_search_metrics("flights", &route.to_string(), 0, &filters);
            return Err(TravelError::not_found(format!(
                "No flights available from {} to {}. Available routes: {}",
                query.source,
                query.destination,
                self.available_routes()
            )));
        };

        let flights: Vec<FlightOffer> = offers
            .iter()
            .filter(|f| match query.filters.max_price {
                Some(ceiling) => f.fare().is_ok_and(|p| p.within(ceiling)),
                None => true,
            })
            .cloned()
            .collect();

        log_search_metrics("flights", &route.to_string(), flights.len(), &filters);

        Ok(FlightSearchResponse {
            route: route.to_string(),
            date: format_date(query.date.unwrap_or_else(today)),
            flights_found: flights.len(),
            flights,
            filters_applied: FlightFiltersApplied {
                max_price: filters[0].1.clone(),
            },
        })
    }
}
