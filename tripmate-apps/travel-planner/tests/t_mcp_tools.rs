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

//! Tool replies validated against the JSON schemas in `tests/schemas`.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tripmate_travel_planner::{
    CategoryInput, CompareInput, DestinationActivitiesInput, InspirationInput,
    SearchActivitiesInput, SearchFlightsInput, SearchHotelsInput, ToolReply, TravelToolkit,
    TripRequest,
};

fn load_schema_from_file(name: &str) -> Result<Value> {
    let schema_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("schemas")
        .join(name);

    let content = std::fs::read_to_string(&schema_path)
        .context(format!("Failed to read schema file: {:?}", schema_path))?;

    serde_json::from_str(&content)
        .context(format!("Failed to parse schema file: {:?}", schema_path))
}

fn validate_json_schema(instance: &Value, schema_name: &str) -> Result<()> {
    let schema = load_schema_from_file(schema_name)?;
    let validator = jsonschema::Validator::new(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to create validator for {}: {}", schema_name, e))?;

    let errors: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| format!("{}: {}", schema_name, e))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        anyhow::bail!(
            "Schema validation failed for {}:\n{}\ninstance: {}",
            schema_name,
            errors.join("\n"),
            instance
        )
    }
}

/// Round-trips through the text the MCP server would send.
fn reply_value<T: Serialize>(reply: &ToolReply<T>) -> Result<Value> {
    let text = reply.to_json()?;
    Ok(serde_json::from_str(&text)?)
}

fn flights_input(source: &str, destination: &str) -> SearchFlightsInput {
    SearchFlightsInput {
        source: source.into(),
        destination: destination.into(),
        date: Some("2026-03-01".into()),
        max_price: None,
    }
}

#[test]
fn test_search_flights_schema() -> Result<()> {
    let toolkit = TravelToolkit::builtin();
    let reply = reply_value(&toolkit.search_flights(flights_input("Delhi", "Goa")))?;
    validate_json_schema(&reply, "flights-response.json")?;
    assert_eq!(reply["flights_found"], 2);

    let reply = reply_value(&toolkit.search_flights(flights_input("Goa", "Kerala")))?;
    validate_json_schema(&reply, "error-response.json")?;
    Ok(())
}

#[test]
fn test_search_hotels_schema() -> Result<()> {
    let toolkit = TravelToolkit::builtin();
    let reply = reply_value(&toolkit.search_hotels(SearchHotelsInput {
        city: "goa".into(),
        checkin_date: Some("2026-03-01".into()),
        checkout_date: None,
        max_price: Some(8_000),
        min_rating: Some(4),
    }))?;
    validate_json_schema(&reply, "hotels-response.json")?;
    assert_eq!(reply["hotels"][0]["name"], "Pousada by the Beach");
    assert_eq!(reply["hotels"][0]["rating"], 4);
    assert_eq!(reply["checkout_date"], "2026-03-02");

    let reply = reply_value(&toolkit.search_hotels(SearchHotelsInput {
        city: "goa".into(),
        checkin_date: None,
        checkout_date: None,
        max_price: Some(500),
        min_rating: None,
    }))?;
    validate_json_schema(&reply, "error-response.json")?;
    Ok(())
}

#[test]
fn test_search_activities_schema() -> Result<()> {
    let toolkit = TravelToolkit::builtin();
    let reply = reply_value(&toolkit.search_activities(SearchActivitiesInput {
        city: "Mumbai".into(),
        min_rating: None,
        max_price: None,
        category: None,
    }))?;
    validate_json_schema(&reply, "activities-response.json")?;
    assert_eq!(reply["activities"][1]["price"], "₹free");

    let input: SearchActivitiesInput =
        serde_json::from_value(serde_json::json!({"city": "delhi", "min_rating": 4}))?;
    let reply = reply_value(&toolkit.search_activities(input))?;
    validate_json_schema(&reply, "activities-response.json")?;
    assert_eq!(reply["filters_applied"]["min_rating"], "4 stars");

    let reply = reply_value(&toolkit.search_destination_activities(DestinationActivitiesInput {
        destination: "goa".into(),
        activity_type: Some("Heritage".into()),
    }))?;
    validate_json_schema(&reply, "activities-response.json")?;
    assert_eq!(reply["activities_found"], 0);
    Ok(())
}

#[test]
fn test_category_tools_schema() -> Result<()> {
    let toolkit = TravelToolkit::builtin();
    let reply = reply_value(&toolkit.get_activities_by_category(CategoryInput {
        category: "Water Sports".into(),
    }))?;
    validate_json_schema(&reply, "category-response.json")?;
    assert_eq!(reply["cities"], serde_json::json!(["Goa", "Manali"]));

    let reply = reply_value(&toolkit.get_travel_inspiration(InspirationInput {
        activity_category: "Skydiving".into(),
    }))?;
    validate_json_schema(&reply, "error-response.json")?;

    let reply = reply_value(&toolkit.get_all_activities())?;
    assert_eq!(reply["status"], "success");
    assert_eq!(reply["total_cities"], 9);
    Ok(())
}

#[test]
fn test_travel_plan_schema() -> Result<()> {
    let toolkit = TravelToolkit::builtin();
    let request: TripRequest = serde_json::from_value(serde_json::json!({
        "source": "bangalore",
        "destination": "goa",
        "travel_date": "2026-07-01",
        "return_date": "2026-07-05",
        "budget": 80000,
        "preferences": "budget beach"
    }))?;
    assert_eq!(request.travelers, 1);

    let reply = reply_value(&toolkit.create_comprehensive_travel_plan(request))?;
    validate_json_schema(&reply, "travel-plan.json")?;
    assert_eq!(reply["accommodation"]["filters_applied"]["max_price"], "₹5,000");
    assert_eq!(reply["trip_overview"]["budget"], "₹80,000");

    let bad: TripRequest = serde_json::from_value(serde_json::json!({
        "source": "bangalore",
        "destination": "goa",
        "travel_date": "July 1st"
    }))?;
    let reply = reply_value(&toolkit.create_comprehensive_travel_plan(bad))?;
    validate_json_schema(&reply, "error-response.json")?;
    Ok(())
}

#[test]
fn test_compare_destinations_schema() -> Result<()> {
    let toolkit = TravelToolkit::builtin();
    let reply = reply_value(&toolkit.compare_destinations(CompareInput {
        destinations: vec!["Goa".into(), "Manali".into(), "Atlantis".into()],
        preferences: Some("adventure".into()),
    }))?;
    validate_json_schema(&reply, "comparison.json")?;
    assert_eq!(reply["recommendation"]["best_match"], "Manali");

    let reply = reply_value(&toolkit.compare_destinations(CompareInput {
        destinations: Vec::new(),
        preferences: None,
    }))?;
    validate_json_schema(&reply, "comparison.json")?;
    Ok(())
}
