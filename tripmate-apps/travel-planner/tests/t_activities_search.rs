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

//! Activity search and the cross-city listings.

use tripmate_travel_planner::{
    ActivitiesClient, ActivityFilters, ActivityQuery, ActivitySearch, TravelError, builtin_activities,
    categories,
};

#[test]
fn test_every_city_sorted_by_rating() {
    let client = ActivitiesClient::new();
    for city in client.cities() {
        let res = client.search_activities(&ActivityQuery::new(&city)).unwrap();
        assert_eq!(res.activities_found, builtin_activities().get(city.as_str()).unwrap().len());
        assert!(res.activities.windows(2).all(|w| w[0].rating >= w[1].rating), "{city}");
    }
}

#[test]
fn test_free_activity_passes_price_ceiling() {
    let res = ActivitiesClient::new()
        .search_activities(&ActivityQuery::new("Mumbai").filters(ActivityFilters {
            max_price: Some(1_000),
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(res.activities_found, 1);
    assert_eq!(res.activities[0].name, "Marine Drive Evening Walk");
    assert_eq!(res.activities[0].price, "₹free");
}

#[test]
fn test_combined_filters() {
    let filters = ActivityFilters {
        min_rating: Some(4.6),
        max_price: Some(5_000),
        category: Some("adventure".into()),
    };
    let res = ActivitiesClient::new()
        .search_activities(&ActivityQuery::new("kashmir").filters(filters))
        .unwrap();
    let names: Vec<&str> = res.activities.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Gulmarg Gondola Cable Car"]);
    assert_eq!(res.filters_applied.min_rating, "4.6 stars");
    assert_eq!(res.filters_applied.max_price, "₹5,000");
    assert_eq!(res.filters_applied.category, "adventure");
}

#[test]
fn test_unknown_city() {
    let err = ActivitiesClient::new()
        .search_activities(&ActivityQuery::new("Shimla"))
        .unwrap_err();
    assert!(matches!(err, TravelError::NotFound(_)));
    assert!(err.to_string().contains("Available cities: Bangalore, Delhi, Goa"));
}

#[test]
fn test_list_all() {
    let res = ActivitiesClient::new().list_all();
    assert_eq!(res.total_cities, 9);
    assert_eq!(res.cities[0], "Delhi");
    assert_eq!(res.cities.len(), res.activities_by_city.len());
    let (city, delhi) = &res.activities_by_city[0];
    assert_eq!(city, "Delhi");
    assert_eq!(delhi[0].name, "Old Delhi Food Walk");

    let json = serde_json::to_value(&res).unwrap();
    assert!(json["activities_by_city"]["Kashmir"].is_array());
}

#[test]
fn test_by_category_across_cities() {
    let res = ActivitiesClient::new().by_category("adventure").unwrap();
    assert_eq!(res.category, "Adventure");
    assert_eq!(
        res.cities,
        ["Delhi", "Bangalore", "Jaipur", "Udaipur", "Manali", "Kashmir"]
    );
    assert_eq!(res.cities_with_activities, 6);
    let (_, kashmir) = res.activities_by_city.last().unwrap();
    assert_eq!(kashmir[0].name, "Gulmarg Gondola Cable Car");
    assert_eq!(kashmir[1].name, "Skiing at Gulmarg");
}

#[test]
fn test_unknown_category_lists_all_categories() {
    let err = ActivitiesClient::new().by_category("Shopping").unwrap_err();
    let msg = err.to_string();
    for category in categories(&builtin_activities()) {
        assert!(msg.contains(&category), "missing {category}");
    }
}
