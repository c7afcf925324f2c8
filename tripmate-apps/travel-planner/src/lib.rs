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

// Library for tripmate-travel-planner
// Travel planning agents (flights, hotels, activities) over mock catalogs

mod catalog;
pub mod config;
mod currency;
mod dates;
mod preferences;
pub mod telemetry;
mod tool_reply;

mod activities_catalog;
mod flights_catalog;
mod hotels_catalog;

mod activities_search;
mod flights_search;
mod hotels_search;

pub mod agents;
mod destination_compare;
mod tools;
mod trip_planner;

pub use catalog::{Catalog, Route, title_case};
pub use currency::{FREE_LABEL, Price, PriceParseError, format_rupees};
pub use dates::{format_date, parse_date, today};
pub use preferences::{HotelTier, Keyword, Preferences};
pub use tool_reply::{ToolReply, TravelError, TravelResult};

pub use activities_catalog::{ActivitiesCatalog, Activity, builtin_activities, categories};
pub use flights_catalog::{FlightOffer, FlightsCatalog, builtin_flights};
pub use hotels_catalog::{Hotel, HotelsCatalog, StarRating, builtin_hotels};

pub use activities_search::*;
pub use flights_search::*;
pub use hotels_search::*;

pub use destination_compare::{
    ActivitySummary, Comparison, DestinationReport, HotelSummary, Recommendation, compare_destinations,
};
pub use tools::*;
pub use trip_planner::*;
