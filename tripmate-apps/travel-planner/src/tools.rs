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

//! # Travel Toolkit
//!
//! The tool surface shared by the MCP server and the planner CLI. Each tool
//! takes a deserializable input, logs the call, and answers with a
//! status-tagged [`ToolReply`].
//!
//! Zero or blank filter values mean "no filter", matching how language
//! models tend to fill optional arguments.

use crate::activities_search::{
    ActivitiesClient, ActivityFilters, ActivityQuery, ActivitySearch, ActivitySearchResponse,
    AllActivitiesResponse, CategoryActivitiesResponse,
};
use crate::agents::tool_owner;
use crate::dates::parse_optional_date;
use crate::destination_compare::Comparison;
use crate::flights_search::{FlightQuery, FlightSearch, FlightSearchResponse, FlightsClient};
use crate::hotels_search::{HotelFilters, HotelQuery, HotelSearch, HotelSearchResponse, HotelsClient};
use crate::telemetry::{log_agent_interaction, traced_tool};
use crate::tool_reply::{ToolReply, TravelResult};
use crate::trip_planner::{TravelPlan, TravelPlanner, TripRequest};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct SearchFlightsInput {
    /// The departure city.
    pub source: String,
    /// The arrival city.
    pub destination: String,
    /// Travel date in YYYY-MM-DD format. Defaults to today.
    #[serde(default)]
    pub date: Option<String>,
    /// Maximum fare in rupees.
    #[serde(default)]
    pub max_price: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct SearchHotelsInput {
    /// The city to search for hotels.
    pub city: String,
    /// Check-in date in YYYY-MM-DD format. Defaults to today.
    #[serde(default)]
    pub checkin_date: Option<String>,
    /// Check-out date in YYYY-MM-DD format. Defaults to the day after check-in.
    #[serde(default)]
    pub checkout_date: Option<String>,
    /// Maximum price per night in rupees.
    #[serde(default)]
    pub max_price: Option<u64>,
    /// Minimum hotel rating (1-5 stars).
    #[serde(default)]
    pub min_rating: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct SearchActivitiesInput {
    /// The city to search for activities.
    pub city: String,
    /// Minimum activity rating (1-5 stars).
    #[serde(default)]
    pub min_rating: Option<f64>,
    /// Maximum price in rupees.
    #[serde(default)]
    pub max_price: Option<u64>,
    /// Activity category, e.g. Adventure, Heritage, Culinary.
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct CategoryInput {
    /// The activity category to search for.
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct DestinationActivitiesInput {
    /// The destination city.
    pub destination: String,
    /// Type of activity (Adventure, Heritage, Culinary, etc.).
    #[serde(default)]
    pub activity_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct InspirationInput {
    /// The type of activities you're interested in.
    pub activity_category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct CompareInput {
    /// Destination cities to compare.
    pub destinations: Vec<String>,
    /// Travel preferences to weigh the comparison.
    #[serde(default)]
    pub preferences: Option<String>,
}

fn nonzero(v: Option<u64>) -> Option<u64> {
    v.filter(|&v| v > 0)
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

#[derive(Clone)]
pub struct TravelToolkit<F = FlightsClient, H = HotelsClient, A = ActivitiesClient> {
    planner: TravelPlanner<F, H, A>,
}

impl TravelToolkit {
    pub fn builtin() -> Self {
        Self::new(TravelPlanner::builtin())
    }
}

impl Default for TravelToolkit {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<F, H, A> TravelToolkit<F, H, A>
where
    F: FlightSearch,
    H: HotelSearch,
    A: ActivitySearch,
{
    pub fn new(planner: TravelPlanner<F, H, A>) -> Self {
        Self { planner }
    }

    pub fn planner(&self) -> &TravelPlanner<F, H, A> {
        &self.planner
    }

    fn run<I: Debug, T>(&self, tool: &str, input: &I, handler: impl FnOnce() -> TravelResult<T>) -> ToolReply<T> {
        log_agent_interaction(tool_owner(tool), "tool_call", tool);
        traced_tool(tool, format!("{input:?}"), || handler().into())
    }

    pub fn search_flights(&self, input: SearchFlightsInput) -> ToolReply<FlightSearchResponse> {
        self.run("search_flights", &input, || {
            let date = parse_optional_date(input.date.as_deref())?;
            let mut query = FlightQuery::new(&input.source, &input.destination)
                .max_price(nonzero(input.max_price));
            query.date = date;
            self.planner.flights().search_flights(&query)
        })
    }

    pub fn search_hotels(&self, input: SearchHotelsInput) -> ToolReply<HotelSearchResponse> {
        self.run("search_hotels", &input, || {
            let checkin = parse_optional_date(input.checkin_date.as_deref())?;
            let checkout = parse_optional_date(input.checkout_date.as_deref())?;
            let query = HotelQuery::new(&input.city)
                .stay(checkin, checkout)
                .filters(HotelFilters {
                    max_price: nonzero(input.max_price),
                    min_rating: input.min_rating.filter(|&r| r > 0),
                });
            self.planner.hotels().search_hotels(&query)
        })
    }

    pub fn search_activities(&self, input: SearchActivitiesInput) -> ToolReply<ActivitySearchResponse> {
        self.run("search_activities", &input, || {
            let query = ActivityQuery::new(&input.city).filters(ActivityFilters {
                min_rating: input.min_rating.filter(|&r| r > 0.0),
                max_price: nonzero(input.max_price),
                category: non_blank(input.category.clone()),
            });
            self.planner.activities().search_activities(&query)
        })
    }

    pub fn create_comprehensive_travel_plan(&self, input: TripRequest) -> ToolReply<TravelPlan> {
        self.run("create_comprehensive_travel_plan", &input, || {
            self.planner.create_plan(&input)
        })
    }

    pub fn search_destination_activities(
        &self,
        input: DestinationActivitiesInput,
    ) -> ToolReply<ActivitySearchResponse> {
        self.run("search_destination_activities", &input, || {
            let query = ActivityQuery::new(&input.destination).filters(ActivityFilters {
                category: non_blank(input.activity_type.clone()),
                ..ActivityFilters::default()
            });
            self.planner.activities().search_activities(&query)
        })
    }

    pub fn compare_destinations(&self, input: CompareInput) -> ToolReply<Comparison> {
        self.run("compare_destinations", &input, || {
            self.planner
                .compare(&input.destinations, input.preferences.as_deref())
        })
    }
}

impl<F, H> TravelToolkit<F, H, ActivitiesClient>
where
    F: FlightSearch,
    H: HotelSearch,
{
    pub fn get_all_activities(&self) -> ToolReply<AllActivitiesResponse> {
        self.run("get_all_activities", &(), || Ok(self.planner.activities().list_all()))
    }

    pub fn get_activities_by_category(&self, input: CategoryInput) -> ToolReply<CategoryActivitiesResponse> {
        self.run("get_activities_by_category", &input, || {
            self.planner.activities().by_category(&input.category)
        })
    }

    pub fn get_travel_inspiration(&self, input: InspirationInput) -> ToolReply<CategoryActivitiesResponse> {
        self.run("get_travel_inspiration", &input, || {
            self.planner.activities().by_category(&input.activity_category)
        })
    }
}
