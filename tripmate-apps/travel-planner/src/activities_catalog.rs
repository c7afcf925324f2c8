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

//! # Activities Catalog
//!
//! Mock experiences per city. Prices are rupee labels or the `₹free` sentinel.

use crate::catalog::Catalog;
use crate::currency::{Price, PriceParseError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Activity {
    pub name: String,
    pub category: String,
    pub duration: String,
    pub price: String,
    pub rating: f64,
    pub description: String,
}

impl Activity {
    pub fn ticket_price(&self) -> Result<Price, PriceParseError> {
        Price::parse(&self.price)
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

pub type ActivitiesCatalog = Catalog<String, Activity>;

/// Every category present in the catalog, sorted.
pub fn categories(catalog: &ActivitiesCatalog) -> BTreeSet<String> {
    catalog
        .iter()
        .flat_map(|(_, activities)| activities.iter().map(|a| a.category.clone()))
        .collect()
}

fn activity(
    name: &str,
    category: &str,
    duration: &str,
    price: &str,
    rating: f64,
    description: &str,
) -> Activity {
    Activity {
        name: name.to_string(),
        category: category.to_string(),
        duration: duration.to_string(),
        price: price.to_string(),
        rating,
        description: description.to_string(),
    }
}

static BUILTIN_ACTIVITIES: Lazy<Arc<ActivitiesCatalog>> =
    Lazy::new(|| Arc::new(build_activities()));

pub fn builtin_activities() -> Arc<ActivitiesCatalog> {
    Arc::clone(&BUILTIN_ACTIVITIES)
}

fn build_activities() -> ActivitiesCatalog {
    Catalog::new(vec![
        (
            "delhi".to_string(),
            vec![
                activity("Red Fort Historical Tour", "Heritage", "3 hours", "₹800", 4.5, "Explore the magnificent Mughal architecture and history"),
                activity("India Gate Cycling Tour", "Adventure", "2 hours", "₹600", 4.2, "Cycle around India Gate and Rajpath with guided commentary"),
                activity("Old Delhi Food Walk", "Culinary", "4 hours", "₹1,200", 4.8, "Taste authentic street food in Chandni Chowk"),
                activity("Kingdom of Dreams Show", "Entertainment", "2.5 hours", "₹2,500", 4.3, "Bollywood musical and cultural performances"),
            ],
        ),
        (
            "mumbai".to_string(),
            vec![
                activity("Marine Drive Evening Walk", "Leisure", "2 hours", "₹free", 4.6, "Stroll along the Queen's Necklace with sunset views"),
                activity("Elephanta Caves Ferry Trip", "Heritage", "6 hours", "₹1,500", 4.4, "Ferry ride and ancient cave temples exploration"),
                activity("Bollywood Studio Tour", "Entertainment", "4 hours", "₹3,200", 4.7, "Behind-the-scenes look at Bollywood film making"),
                activity("Dharavi Slum Tour", "Cultural", "3 hours", "₹1,800", 4.5, "Educational tour of Asia's largest slum community"),
            ],
        ),
        (
            "bangalore".to_string(),
            vec![
                activity("Nandi Hills Sunrise Trek", "Adventure", "4 hours", "₹1,000", 4.6, "Early morning trek to catch spectacular sunrise views"),
                activity("Bangalore Palace Tour", "Heritage", "2 hours", "₹500", 4.3, "Explore the Tudor-style architecture and royal artifacts"),
                activity("Microbrewery Pub Crawl", "Nightlife", "4 hours", "₹2,800", 4.5, "Visit 3-4 craft beer breweries with guided tasting"),
                activity("Cubbon Park Nature Walk", "Nature", "2 hours", "₹300", 4.1, "Guided walk through the city's green lung"),
            ],
        ),
        (
            "goa".to_string(),
            vec![
                activity("Parasailing at Calangute Beach", "Water Sports", "1 hour", "₹2,500", 4.7, "Soar high above the Arabian Sea with stunning coastal views"),
                activity("Sunset Dolphin Cruise", "Wildlife", "3 hours", "₹1,800", 4.8, "Spot dolphins while enjoying sunset over the ocean"),
                activity("Spice Plantation Tour", "Nature", "5 hours", "₹1,200", 4.4, "Learn about spice cultivation with traditional Goan lunch"),
                activity("Casino Royale Night", "Entertainment", "4 hours", "₹4,000", 4.2, "Try your luck at offshore floating casinos"),
            ],
        ),
        (
            "jaipur".to_string(),
            vec![
                activity("Hot Air Balloon Ride", "Adventure", "3 hours", "₹12,000", 4.9, "Aerial views of Amber Fort and Pink City landscape"),
                activity("Amber Fort Elephant Ride", "Heritage", "2 hours", "₹1,500", 4.0, "Traditional elephant ride up to the majestic fort"),
                activity("Rajasthani Cooking Class", "Culinary", "4 hours", "₹2,200", 4.6, "Learn to cook authentic Rajasthani dishes"),
                activity("Chokhi Dhani Village Experience", "Cultural", "5 hours", "₹3,500", 4.4, "Traditional Rajasthani village life with folk shows"),
            ],
        ),
        (
            "udaipur".to_string(),
            vec![
                activity("Lake Pichola Boat Ride", "Leisure", "2 hours", "₹1,000", 4.7, "Romantic boat ride with palace views"),
                activity("City Palace Heritage Walk", "Heritage", "3 hours", "₹1,800", 4.5, "Explore the largest palace complex in Rajasthan"),
                activity("Vintage Car Museum Tour", "Culture", "1.5 hours", "₹800", 4.2, "See the royal collection of classic automobiles"),
                activity("Monsoon Palace Sunset Trek", "Adventure", "3 hours", "₹1,500", 4.6, "Hike to hilltop palace for panoramic sunset views"),
            ],
        ),
        (
            "manali".to_string(),
            vec![
                activity("Solang Valley Paragliding", "Adventure", "2 hours", "₹3,500", 4.8, "Tandem paragliding with Himalayan mountain views"),
                activity("Rohtang Pass Snow Activities", "Adventure", "6 hours", "₹2,800", 4.6, "Skiing, snowboarding, and snow scooter rides"),
                activity("Beas River Rafting", "Water Sports", "4 hours", "₹2,200", 4.5, "White water rafting through scenic valleys"),
                activity("Hadimba Temple Forest Walk", "Spiritual", "2 hours", "₹500", 4.3, "Peaceful walk through cedar forests to ancient temple"),
            ],
        ),
        (
            "kerala".to_string(),
            vec![
                activity("Backwater Houseboat Cruise", "Leisure", "8 hours", "₹8,000", 4.9, "Traditional kettuvallam cruise through palm-fringed canals"),
                activity("Periyar Wildlife Safari", "Wildlife", "4 hours", "₹2,500", 4.6, "Spot elephants, tigers and exotic birds in Thekkady"),
                activity("Ayurvedic Spa Treatment", "Wellness", "3 hours", "₹4,500", 4.7, "Traditional Kerala massage and herbal treatments"),
                activity("Tea Plantation Tour in Munnar", "Nature", "5 hours", "₹1,800", 4.4, "Learn about tea processing with tasting sessions"),
            ],
        ),
        (
            "kashmir".to_string(),
            vec![
                activity("Gulmarg Gondola Cable Car", "Adventure", "4 hours", "₹2,200", 4.8, "World's second-highest operating cable car ride"),
                activity("Dal Lake Shikara Ride", "Leisure", "2 hours", "₹1,200", 4.7, "Traditional boat ride on the famous lake"),
                activity("Skiing at Gulmarg", "Adventure", "6 hours", "₹5,500", 4.6, "World-class skiing on pristine Himalayan slopes"),
                activity("Mughal Gardens Tour", "Heritage", "3 hours", "₹800", 4.4, "Visit Shalimar, Nishat and Chashme Shahi gardens"),
            ],
        ),
    ])
}
