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

//! # Flights Catalog
//!
//! Mock flight offers between Indian metro and tourist cities.

use crate::catalog::{Catalog, Route};
use crate::currency::{Price, PriceParseError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FlightOffer {
    pub flight_number: String,
    pub departure: String,
    pub arrival: String,
    pub price: String,
    pub airline: String,
}

impl FlightOffer {
    pub fn fare(&self) -> Result<Price, PriceParseError> {
        Price::parse(&self.price)
    }
}

pub type FlightsCatalog = Catalog<Route, FlightOffer>;

fn flight(number: &str, departure: &str, arrival: &str, price: &str, airline: &str) -> FlightOffer {
    FlightOffer {
        flight_number: number.to_string(),
        departure: departure.to_string(),
        arrival: arrival.to_string(),
        price: price.to_string(),
        airline: airline.to_string(),
    }
}

static BUILTIN_FLIGHTS: Lazy<Arc<FlightsCatalog>> = Lazy::new(|| Arc::new(build_flights()));

/// The process-wide flights catalog.
pub fn builtin_flights() -> Arc<FlightsCatalog> {
    Arc::clone(&BUILTIN_FLIGHTS)
}

fn build_flights() -> FlightsCatalog {
    Catalog::new(vec![
        // Metro cities
        (
            Route::new("delhi", "mumbai"),
            vec![
                flight("AI131", "06:00", "08:30", "₹8,500", "Air India"),
                flight("6E2131", "14:30", "17:00", "₹7,200", "IndiGo"),
            ],
        ),
        (
            Route::new("delhi", "bangalore"),
            vec![
                flight("SG8157", "09:15", "12:45", "₹9,800", "SpiceJet"),
                flight("UK955", "19:00", "22:30", "₹11,200", "Vistara"),
            ],
        ),
        (
            Route::new("mumbai", "delhi"),
            vec![
                flight("AI860", "07:30", "10:00", "₹8,800", "Air India"),
                flight("6E2142", "21:15", "23:45", "₹7,500", "IndiGo"),
            ],
        ),
        (
            Route::new("mumbai", "bangalore"),
            vec![
                flight("SG134", "11:20", "13:15", "₹6,500", "SpiceJet"),
                flight("UK864", "16:45", "18:40", "₹8,200", "Vistara"),
            ],
        ),
        (
            Route::new("bangalore", "delhi"),
            vec![
                flight("AI506", "05:45", "08:30", "₹10,200", "Air India"),
                flight("6E5327", "15:30", "18:15", "₹9,100", "IndiGo"),
            ],
        ),
        (
            Route::new("bangalore", "mumbai"),
            vec![
                flight("AI652", "12:00", "13:55", "₹6,800", "Air India"),
                flight("UK871", "20:10", "22:05", "₹7,900", "Vistara"),
            ],
        ),
        // Tourist destinations
        (
            Route::new("delhi", "goa"),
            vec![
                flight("AI439", "08:15", "10:45", "₹12,500", "Air India"),
                flight("6E6671", "16:20", "18:50", "₹10,800", "IndiGo"),
            ],
        ),
        (
            Route::new("goa", "delhi"),
            vec![
                flight("AI440", "11:30", "14:00", "₹12,200", "Air India"),
                flight("6E6672", "19:45", "22:15", "₹11,100", "IndiGo"),
            ],
        ),
        (
            Route::new("mumbai", "goa"),
            vec![
                flight("SG8723", "07:00", "08:15", "₹5,500", "SpiceJet"),
                flight("6E783", "18:30", "19:45", "₹4,800", "IndiGo"),
            ],
        ),
        (
            Route::new("goa", "mumbai"),
            vec![
                flight("SG8724", "09:00", "10:15", "₹5,200", "SpiceJet"),
                flight("6E784", "20:30", "21:45", "₹4,900", "IndiGo"),
            ],
        ),
        (
            Route::new("delhi", "jaipur"),
            vec![
                flight("AI9614", "07:30", "08:45", "₹6,800", "Air India"),
                flight("6E2423", "17:15", "18:30", "₹5,900", "IndiGo"),
            ],
        ),
        (
            Route::new("jaipur", "delhi"),
            vec![
                flight("AI9615", "09:30", "10:45", "₹6,500", "Air India"),
                flight("6E2424", "19:00", "20:15", "₹6,200", "IndiGo"),
            ],
        ),
        (
            Route::new("delhi", "udaipur"),
            vec![
                flight("AI473", "10:20", "11:50", "₹9,200", "Air India"),
                flight("6E2141", "14:45", "16:15", "₹8,100", "IndiGo"),
            ],
        ),
        (
            Route::new("udaipur", "delhi"),
            vec![
                flight("AI474", "12:30", "14:00", "₹8,900", "Air India"),
                flight("6E2142", "17:00", "18:30", "₹8,300", "IndiGo"),
            ],
        ),
        (
            Route::new("mumbai", "udaipur"),
            vec![
                flight("SG8429", "13:15", "14:45", "₹7,800", "SpiceJet"),
                flight("UK883", "16:30", "18:00", "₹9,100", "Vistara"),
            ],
        ),
        (
            Route::new("udaipur", "mumbai"),
            vec![
                flight("SG8430", "15:30", "17:00", "₹7,600", "SpiceJet"),
                flight("UK884", "18:45", "20:15", "₹8,800", "Vistara"),
            ],
        ),
        (
            Route::new("bangalore", "goa"),
            vec![
                flight("AI2814", "09:45", "10:50", "₹6,200", "Air India"),
                flight("6E5089", "15:20", "16:25", "₹5,400", "IndiGo"),
            ],
        ),
        (
            Route::new("goa", "bangalore"),
            vec![
                flight("AI2815", "11:45", "12:50", "₹5,900", "Air India"),
                flight("6E5090", "17:15", "18:20", "₹5,700", "IndiGo"),
            ],
        ),
        (
            Route::new("delhi", "manali"),
            vec![
                flight("AI9809", "06:45", "08:15", "₹11,500", "Air India"),
                flight("SG8467", "14:30", "16:00", "₹9,800", "SpiceJet"),
            ],
        ),
        (
            Route::new("manali", "delhi"),
            vec![
                flight("AI9810", "09:00", "10:30", "₹11,200", "Air India"),
                flight("SG8468", "17:00", "18:30", "₹10,100", "SpiceJet"),
            ],
        ),
        (
            Route::new("mumbai", "kerala"),
            vec![
                flight("AI689", "08:00", "10:15", "₹8,900", "Air India"),
                flight("6E345", "15:45", "18:00", "₹7,600", "IndiGo"),
            ],
        ),
        (
            Route::new("kerala", "mumbai"),
            vec![
                flight("AI690", "11:00", "13:15", "₹8,700", "Air India"),
                flight("6E346", "19:30", "21:45", "₹7,900", "IndiGo"),
            ],
        ),
        (
            Route::new("delhi", "kashmir"),
            vec![
                flight("AI441", "07:15", "08:45", "₹13,800", "Air India"),
                flight("6E2355", "13:30", "15:00", "₹12,100", "IndiGo"),
            ],
        ),
        (
            Route::new("kashmir", "delhi"),
            vec![
                flight("AI442", "09:30", "11:00", "₹13,500", "Air India"),
                flight("6E2356", "16:00", "17:30", "₹12,400", "IndiGo"),
            ],
        ),
        (
            Route::new("mumbai", "kashmir"),
            vec![
                flight("UK867", "10:15", "12:30", "₹15,200", "Vistara"),
                flight("SG3421", "16:45", "19:00", "₹13,900", "SpiceJet"),
            ],
        ),
        (
            Route::new("kashmir", "mumbai"),
            vec![
                flight("UK868", "13:15", "15:30", "₹14,800", "Vistara"),
                flight("SG3422", "19:45", "22:00", "₹14,200", "SpiceJet"),
            ],
        ),
    ])
}
