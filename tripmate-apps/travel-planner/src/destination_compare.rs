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

//! # Destination Comparison
//!
//! Scores candidate destinations against free-text preferences using their
//! unfiltered hotel and activity listings.

use crate::activities_search::{ActivityQuery, ActivitySearch, ActivitySearchResponse};
use crate::catalog::title_case;
use crate::currency::format_rupees;
use crate::hotels_search::{HotelQuery, HotelSearch, HotelSearchResponse};
use crate::preferences::{Keyword, Preferences};
use crate::tool_reply::{ToolReply, TravelError, TravelResult, ordered_map};
use serde::Serialize;
use std::collections::BTreeSet;

const BUDGET_AVG_CEILING: u64 = 5_000;
const LUXURY_MIN_STARS: u8 = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelSummary {
    pub total_hotels: usize,
    pub avg_price: String,
    pub luxury_options: usize,
    #[serde(skip)]
    avg_price_amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySummary {
    pub total_activities: usize,
    pub categories: Vec<String>,
    pub avg_rating: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DestinationReport {
    pub city: String,
    pub hotels: ToolReply<HotelSearchResponse>,
    pub activities: ToolReply<ActivitySearchResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_summary: Option<HotelSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_summary: Option<ActivitySummary>,
    pub score: u32,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub best_match: String,
    pub score: u32,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub destinations_compared: Vec<String>,
    pub preferences: Option<String>,
    /// Keyed by lower-cased destination, in first-seen order.
    #[serde(serialize_with = "ordered_map")]
    pub comparison_results: Vec<(String, DestinationReport)>,
    pub recommendation: Option<Recommendation>,
}

impl Comparison {
    pub fn report(&self, destination: &str) -> Option<&DestinationReport> {
        let key = destination.to_lowercase();
        self.comparison_results
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, report)| report)
    }
}

fn summarize_hotels(found: &HotelSearchResponse) -> TravelResult<HotelSummary> {
    let mut sum: u64 = 0;
    for hotel in &found.hotels {
        let nightly = hotel
            .nightly_price()
            .map_err(|e| TravelError::computation("Failed to summarize hotels", e))?;
        sum = sum
            .checked_add(nightly.amount())
            .ok_or_else(|| TravelError::computation("Failed to summarize hotels", "amount overflow"))?;
    }
    let avg = sum.checked_div(found.hotels.len() as u64).unwrap_or(0);
    Ok(HotelSummary {
        total_hotels: found.hotels.len(),
        avg_price: format_rupees(avg),
        luxury_options: found
            .hotels
            .iter()
            .filter(|h| h.rating.stars() >= LUXURY_MIN_STARS)
            .count(),
        avg_price_amount: avg,
    })
}

fn summarize_activities(found: &ActivitySearchResponse) -> ActivitySummary {
    let categories: BTreeSet<String> = found.activities.iter().map(|a| a.category.clone()).collect();
    let avg_rating = if found.activities.is_empty() {
        0.0
    } else {
        let mean = found.activities.iter().map(|a| a.rating).sum::<f64>() / found.activities.len() as f64;
        (mean * 10.0).round() / 10.0
    };
    ActivitySummary {
        total_activities: found.activities.len(),
        categories: categories.into_iter().collect(),
        avg_rating,
    }
}

fn score_destination(
    prefs: &Preferences,
    hotels: Option<&HotelSummary>,
    activities: Option<&ActivitySummary>,
) -> (u32, Vec<String>) {
    let mut score = 0;
    let mut highlights = Vec::new();

    if let Some(h) = hotels {
        if prefs.mentions(Keyword::Budget) && h.avg_price_amount <= BUDGET_AVG_CEILING {
            score += 2;
            highlights.push("Budget-friendly accommodation".to_string());
        } else if prefs.mentions(Keyword::Luxury) && h.luxury_options > 0 {
            score += 2;
            highlights.push("Luxury accommodation available".to_string());
        }
    }

    if let Some(a) = activities {
        let has = |category: &str| a.categories.iter().any(|c| c == category);
        if prefs.mentions(Keyword::Adventure) && has("Adventure") {
            score += 3;
            highlights.push("Great for adventure activities".to_string());
        } else if prefs.mentions(Keyword::Cultural) && has("Heritage") {
            score += 3;
            highlights.push("Rich cultural experiences".to_string());
        } else if prefs.mentions(Keyword::Food) && has("Culinary") {
            score += 2;
            highlights.push("Excellent food experiences".to_string());
        }
    }

    (score, highlights)
}

fn assess<H: HotelSearch, A: ActivitySearch>(
    hotels: &H,
    activities: &A,
    destination: &str,
    prefs: &Preferences,
) -> TravelResult<DestinationReport> {
    let hotels = hotels.search_hotels(&HotelQuery::new(destination));
    let activities = activities.search_activities(&ActivityQuery::new(destination));

    let hotel_summary = hotels.as_ref().ok().map(summarize_hotels).transpose()?;
    let activity_summary = activities.as_ref().ok().map(summarize_activities);
    let (score, highlights) = score_destination(prefs, hotel_summary.as_ref(), activity_summary.as_ref());

    Ok(DestinationReport {
        city: title_case(destination),
        hotels: hotels.into(),
        activities: activities.into(),
        hotel_summary,
        activity_summary,
        score,
        highlights,
    })
}

pub fn compare_destinations<H: HotelSearch, A: ActivitySearch>(
    hotels: &H,
    activities: &A,
    destinations: &[String],
    preferences: Option<&str>,
) -> TravelResult<Comparison> {
    let prefs = Preferences::parse(preferences);
    tracing::info!(
        "Comparing {} destinations, preferences: {:?}",
        destinations.len(),
        prefs.as_str()
    );

    let mut results: Vec<(String, DestinationReport)> = Vec::new();
    for destination in destinations {
        let report = assess(hotels, activities, destination, &prefs)?;
        let key = destination.to_lowercase();
        match results.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = report,
            None => results.push((key, report)),
        }
    }

    let mut best: Option<&DestinationReport> = None;
    for (_, report) in &results {
        if best.is_none_or(|b| report.score > b.score) {
            best = Some(report);
        }
    }
    let recommendation = best.map(|b| Recommendation {
        best_match: b.city.clone(),
        score: b.score,
        reasons: b.highlights.clone(),
    });

    Ok(Comparison {
        destinations_compared: destinations.to_vec(),
        preferences: prefs.as_str().map(str::to_string),
        comparison_results: results,
        recommendation,
    })
}
