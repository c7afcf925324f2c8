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

//! # Hotels Catalog
//!
//! Mock accommodation across Indian tourist cities, four hotels per city
//! from backpacker hostels to palace resorts.

use crate::catalog::Catalog;
use crate::currency::{Price, PriceParseError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum StarRating {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl StarRating {
    pub fn stars(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Hotel {
    pub name: String,
    pub rating: StarRating,
    pub price_per_night: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub location: String,
}

impl Hotel {
    pub fn nightly_price(&self) -> Result<Price, PriceParseError> {
        Price::parse(&self.price_per_night)
    }
}

pub type HotelsCatalog = Catalog<String, Hotel>;

fn hotel(
    name: &str,
    rating: StarRating,
    price_per_night: &str,
    amenities: &[&str],
    location: &str,
) -> Hotel {
    Hotel {
        name: name.to_string(),
        rating,
        price_per_night: price_per_night.to_string(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        location: location.to_string(),
    }
}

static BUILTIN_HOTELS: Lazy<Arc<HotelsCatalog>> = Lazy::new(|| Arc::new(build_hotels()));

pub fn builtin_hotels() -> Arc<HotelsCatalog> {
    Arc::clone(&BUILTIN_HOTELS)
}

fn build_hotels() -> HotelsCatalog {
    use StarRating::*;
    Catalog::new(vec![
        (
            "delhi".to_string(),
            vec![
                hotel("The Imperial New Delhi", Five, "₹15,000", &["WiFi", "Pool", "Spa", "Restaurant"], "Connaught Place"),
                hotel("The Oberoi New Delhi", Five, "₹18,000", &["WiFi", "Pool", "Gym", "Restaurant", "Bar"], "Golf Links"),
                hotel("Hotel Tara Palace", Three, "₹4,500", &["WiFi", "Restaurant", "Room Service"], "Chandni Chowk"),
                hotel("Bloom Hotel", Four, "₹8,200", &["WiFi", "Gym", "Restaurant", "Business Center"], "Nehru Place"),
            ],
        ),
        (
            "mumbai".to_string(),
            vec![
                hotel("The Taj Mahal Palace", Five, "₹20,000", &["WiFi", "Pool", "Spa", "Restaurant", "Heritage"], "Gateway of India"),
                hotel("The Oberoi Mumbai", Five, "₹22,000", &["WiFi", "Pool", "Spa", "Restaurant", "Ocean View"], "Nariman Point"),
                hotel("Hotel Marine Plaza", Four, "₹9,500", &["WiFi", "Restaurant", "Bar", "Business Center"], "Marine Drive"),
                hotel("FabHotel Prime", Three, "₹3,800", &["WiFi", "AC", "Room Service"], "Andheri"),
            ],
        ),
        (
            "bangalore".to_string(),
            vec![
                hotel("The Leela Palace Bengaluru", Five, "₹16,500", &["WiFi", "Pool", "Spa", "Restaurant", "Garden"], "Airport Road"),
                hotel("ITC Gardenia", Five, "₹14,000", &["WiFi", "Pool", "Spa", "Restaurant", "Business Center"], "Residency Road"),
                hotel("Vivanta Bengaluru", Four, "₹8,800", &["WiFi", "Pool", "Gym", "Restaurant"], "Whitefield"),
                hotel("Zostel Bangalore", Three, "₹1,200", &["WiFi", "Common Area", "Kitchen"], "Koramangala"),
            ],
        ),
        (
            "goa".to_string(),
            vec![
                hotel("The Leela Goa", Five, "₹25,000", &["WiFi", "Beach Access", "Pool", "Spa", "Restaurant"], "Cavelossim Beach"),
                hotel("Grand Hyatt Goa", Five, "₹18,500", &["WiFi", "Beach Access", "Pool", "Spa", "Golf"], "Bambolim"),
                hotel("Pousada by the Beach", Four, "₹7,200", &["WiFi", "Beach Access", "Restaurant", "Bar"], "Calangute"),
                hotel("Backpacker Panda", Two, "₹800", &["WiFi", "Common Kitchen", "Lounge"], "Anjuna"),
            ],
        ),
        (
            "jaipur".to_string(),
            vec![
                hotel("Rambagh Palace", Five, "₹35,000", &["WiFi", "Heritage", "Pool", "Spa", "Restaurant", "Palace"], "Bhawani Singh Road"),
                hotel("The Oberoi Rajvilas", Five, "₹40,000", &["WiFi", "Heritage", "Pool", "Spa", "Villas"], "Goner Road"),
                hotel("Hotel Pearl Palace", Three, "₹3,200", &["WiFi", "Restaurant", "Rooftop"], "Hathroi Fort"),
                hotel("Zostel Jaipur", Three, "₹1,500", &["WiFi", "Common Area", "Cafe"], "MI Road"),
            ],
        ),
        (
            "udaipur".to_string(),
            vec![
                hotel("The Oberoi Udaivilas", Five, "₹45,000", &["WiFi", "Lake View", "Heritage", "Pool", "Spa", "Boat"], "Lake Pichola"),
                hotel("Taj Lake Palace", Five, "₹50,000", &["WiFi", "Lake Palace", "Heritage", "Spa", "Boat Access"], "Lake Pichola"),
                hotel("Hotel Lakend", Four, "₹6,500", &["WiFi", "Lake View", "Restaurant", "Terrace"], "Fateh Sagar Lake"),
                hotel("Moustache Udaipur", Three, "₹2,000", &["WiFi", "Cafe", "Common Area"], "Old City"),
            ],
        ),
        (
            "manali".to_string(),
            vec![
                hotel("The Himalayan", Four, "₹12,000", &["WiFi", "Mountain View", "Spa", "Restaurant", "Fireplace"], "Hadimba Road"),
                hotel("Snow Valley Resorts", Four, "₹8,500", &["WiFi", "Mountain View", "Restaurant", "Adventure Sports"], "Solang Valley"),
                hotel("Hotel Holiday", Three, "₹4,200", &["WiFi", "Restaurant", "Room Service"], "Mall Road"),
                hotel("Zostel Manali", Three, "₹1,800", &["WiFi", "Common Area", "Mountain View"], "Old Manali"),
            ],
        ),
        (
            "kerala".to_string(),
            vec![
                hotel("Kumarakom Lake Resort", Five, "₹28,000", &["WiFi", "Backwaters", "Ayurveda", "Pool", "Boat"], "Kumarakom"),
                hotel("Coconut Lagoon", Five, "₹22,000", &["WiFi", "Heritage", "Backwaters", "Ayurveda", "Traditional"], "Kumarakom"),
                hotel("Spice Village", Four, "₹9,500", &["WiFi", "Spice Garden", "Restaurant", "Nature"], "Thekkady"),
                hotel("Green Palace", Three, "₹3,500", &["WiFi", "Garden", "Restaurant"], "Munnar"),
            ],
        ),
        (
            "kashmir".to_string(),
            vec![
                hotel("The Khyber Himalayan Resort", Five, "₹32,000", &["WiFi", "Mountain View", "Spa", "Skiing", "Restaurant"], "Gulmarg"),
                hotel("Vivanta Dal View", Five, "₹24,000", &["WiFi", "Lake View", "Spa", "Restaurant", "Shikara"], "Dal Lake"),
                hotel("Hotel Heevan", Four, "₹7,800", &["WiFi", "Mountain View", "Restaurant", "Garden"], "Pahalgam"),
                hotel("Youth Hostel", Two, "₹1,500", &["Basic WiFi", "Shared Rooms", "Cafeteria"], "Srinagar"),
            ],
        ),
    ])
}
