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

//! Destination comparison and ranking.

use std::sync::Arc;
use tripmate_travel_planner::{
    ActivitiesClient, Catalog, FlightsClient, Hotel, HotelsClient, StarRating, TravelError,
    TravelPlanner, builtin_activities,
};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_adventure_prefers_manali() {
    let cmp = TravelPlanner::builtin()
        .compare(&names(&["goa", "manali"]), Some("adventure"))
        .unwrap();

    let goa = cmp.report("Goa").unwrap();
    let manali = cmp.report("manali").unwrap();
    assert_eq!(goa.score, 0);
    assert_eq!(manali.score, 3);
    assert_eq!(manali.highlights, ["Great for adventure activities"]);

    let best = cmp.recommendation.unwrap();
    assert_eq!(best.best_match, "Manali");
    assert_eq!(best.score, 3);
    assert_eq!(best.reasons, ["Great for adventure activities"]);
}

#[test]
fn test_summaries() {
    let cmp = TravelPlanner::builtin()
        .compare(&names(&["Goa"]), None)
        .unwrap();
    let goa = cmp.report("goa").unwrap();

    let hotels = goa.hotel_summary.as_ref().unwrap();
    assert_eq!(hotels.total_hotels, 4);
    assert_eq!(hotels.avg_price, "₹12,875");
    assert_eq!(hotels.luxury_options, 3);

    let activities = goa.activity_summary.as_ref().unwrap();
    assert_eq!(activities.total_activities, 4);
    assert_eq!(activities.categories, ["Entertainment", "Nature", "Water Sports", "Wildlife"]);
    assert_eq!(activities.avg_rating, 4.5);
}

#[test]
fn test_budget_and_culture() {
    let cmp = TravelPlanner::builtin()
        .compare(&names(&["udaipur", "bangalore", "jaipur"]), Some("budget cultural"))
        .unwrap();
    // Every average is above ₹5,000, so only the Heritage bonus counts.
    for (_, report) in &cmp.comparison_results {
        assert_eq!(report.score, 3, "{}", report.city);
    }
    assert_eq!(cmp.recommendation.unwrap().best_match, "Udaipur");
}

#[test]
fn test_first_of_equal_scores_wins_and_repeats_replace() {
    let cmp = TravelPlanner::builtin()
        .compare(&names(&["Kerala", "goa", "KERALA"]), Some("food"))
        .unwrap();
    let keys: Vec<&str> = cmp.comparison_results.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["kerala", "goa"]);
    assert_eq!(cmp.report("kerala").unwrap().city, "Kerala");
    assert_eq!(cmp.destinations_compared.len(), 3);
    assert_eq!(cmp.recommendation.unwrap().best_match, "Kerala");
}

#[test]
fn test_unknown_destination_has_error_replies() {
    let cmp = TravelPlanner::builtin()
        .compare(&names(&["atlantis"]), Some("luxury"))
        .unwrap();
    let report = cmp.report("atlantis").unwrap();
    assert!(!report.hotels.is_success());
    assert!(report.hotel_summary.is_none());
    assert_eq!(report.score, 0);

    let json = serde_json::to_value(&cmp).unwrap();
    assert_eq!(json["comparison_results"]["atlantis"]["hotels"]["status"], "error");
    assert!(json["comparison_results"]["atlantis"].get("hotel_summary").is_none());
}

#[test]
fn test_nothing_to_compare() {
    let cmp = TravelPlanner::builtin().compare(&[], Some("luxury")).unwrap();
    assert!(cmp.comparison_results.is_empty());
    assert!(cmp.recommendation.is_none());
    let json = serde_json::to_value(&cmp).unwrap();
    assert!(json["recommendation"].is_null());
}

#[test]
fn test_huge_nightly_prices_fail_the_comparison() {
    let hotel = |name: &str| Hotel {
        name: name.into(),
        rating: StarRating::Five,
        price_per_night: "₹18,000,000,000,000,000,000".into(),
        amenities: Vec::new(),
        location: "Anjuna".into(),
    };
    let hotels = Catalog::new(vec![("goa".to_string(), vec![hotel("Palace"), hotel("Fort")])]);
    let planner = TravelPlanner::new(
        FlightsClient::new(),
        HotelsClient::with_catalog(Arc::new(hotels)),
        ActivitiesClient::with_catalog(builtin_activities()),
    );
    let err = planner.compare(&names(&["goa"]), Some("luxury")).unwrap_err();
    assert!(matches!(err, TravelError::ComputationFailure(_)));
}
