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

//! # Trip Planner
//!
//! Composes the flights, hotels and activities searches into one
//! itinerary with a budget-aware cost estimate.
//!
//! Budget allocation: 40% of the budget goes to accommodation, 20% to
//! activities. Hotel ceilings only apply when both a budget and some
//! preferences are given; the activity ceiling applies with any budget.
//!
//! The search services are injected, so the planner can run against
//! custom catalogs or test doubles.

use crate::activities_search::{
    ActivitiesClient, ActivityFilters, ActivityQuery, ActivitySearch, ActivitySearchResponse,
};
use crate::catalog::title_case;
use crate::currency::format_rupees;
use crate::dates::{format_date, parse_optional_date, today};
use crate::destination_compare::{Comparison, compare_destinations};
use crate::flights_search::{FlightQuery, FlightSearch, FlightSearchResponse, FlightsClient};
use crate::hotels_search::{HotelFilters, HotelQuery, HotelSearch, HotelSearchResponse, HotelsClient};
use crate::preferences::{HotelTier, Keyword, Preferences};
use crate::telemetry::{Operation, log_business_event};
use crate::tool_reply::{ToolReply, TravelError, TravelResult};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

const HOTEL_SHARE: f64 = 0.4;
const ACTIVITY_SHARE: f64 = 0.2;
const BUDGET_HOTEL_CEILING: u64 = 5_000;
const LUXURY_MIN_STARS: u8 = 4;
const ACTIVITIES_PER_DAY: u64 = 2;
const DEFAULT_TRIP_DAYS: u64 = 2;

fn one_traveler() -> u32 {
    1
}

/// Parameters of a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct TripRequest {
    /// The departure city.
    pub source: String,
    /// The destination city.
    pub destination: String,
    /// Travel date in YYYY-MM-DD format. Defaults to today.
    #[serde(default)]
    pub travel_date: Option<String>,
    /// Return date in YYYY-MM-DD format. Defaults to two days after the travel date.
    #[serde(default)]
    pub return_date: Option<String>,
    /// Total budget in rupees.
    #[serde(default)]
    pub budget: Option<u64>,
    /// Number of travelers. Defaults to 1.
    #[serde(default = "one_traveler")]
    pub travelers: u32,
    /// Travel preferences, e.g. "luxury", "budget", "adventure", "cultural".
    #[serde(default)]
    pub preferences: Option<String>,
}

impl TripRequest {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            travel_date: None,
            return_date: None,
            budget: None,
            travelers: 1,
            preferences: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripOverview {
    pub source: String,
    pub destination: String,
    pub travel_date: String,
    pub return_date: String,
    pub duration_days: u64,
    pub travelers: u32,
    pub preferences: Option<String>,
    pub budget: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanFlights {
    pub outbound: ToolReply<FlightSearchResponse>,
    #[serde(rename = "return")]
    pub inbound: ToolReply<FlightSearchResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flights: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    pub total: String,
    pub per_person: String,
    pub breakdown: CostBreakdown,
    pub budget_status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TravelPlan {
    pub trip_overview: TripOverview,
    pub plan_generated_at: String,
    pub flights: PlanFlights,
    pub accommodation: ToolReply<HotelSearchResponse>,
    pub activities: ToolReply<ActivitySearchResponse>,
    pub cost_estimate: CostEstimate,
    pub recommendations: Vec<String>,
}

/// Trip shape after defaults and validation.
#[derive(Debug)]
struct Itinerary {
    travel_date: NaiveDate,
    return_date: NaiveDate,
    duration_days: u64,
}

fn resolve_itinerary(request: &TripRequest) -> TravelResult<Itinerary> {
    if request.travelers == 0 {
        return Err(TravelError::computation("Invalid trip", "travelers must be at least 1"));
    }
    let travel_date = parse_optional_date(request.travel_date.as_deref())?.unwrap_or_else(today);
    let return_date = match parse_optional_date(request.return_date.as_deref())? {
        Some(date) => date,
        None => travel_date
            .checked_add_days(Days::new(DEFAULT_TRIP_DAYS))
            .ok_or_else(|| TravelError::computation("Invalid travel date", travel_date))?,
    };
    let days = (return_date - travel_date).num_days();
    let duration_days = u64::try_from(days).map_err(|_| {
        TravelError::computation(
            "Invalid trip",
            format!("return date {return_date} is before travel date {travel_date}"),
        )
    })?;
    Ok(Itinerary {
        travel_date,
        return_date,
        duration_days,
    })
}

/// Floor of `budget * share / days`, `None` when it rounds to zero.
fn share_per_day(budget: u64, share: f64, days: u64) -> Option<u64> {
    let ceiling = (budget as f64 * share / days as f64) as u64;
    (ceiling > 0).then_some(ceiling)
}

fn hotel_filters(budget: Option<u64>, prefs: &Preferences, duration_days: u64) -> HotelFilters {
    let mut filters = HotelFilters::default();
    let Some(budget) = budget.filter(|_| prefs.is_specified()) else {
        return filters;
    };
    if duration_days > 0 {
        filters.max_price = share_per_day(budget, HOTEL_SHARE, duration_days);
    }
    match prefs.hotel_tier() {
        Some(HotelTier::Luxury) => filters.min_rating = Some(LUXURY_MIN_STARS),
        Some(HotelTier::Budget) => filters.max_price = Some(BUDGET_HOTEL_CEILING),
        None => {}
    }
    filters
}

fn activity_filters(budget: Option<u64>, prefs: &Preferences, duration_days: u64) -> ActivityFilters {
    ActivityFilters {
        min_rating: None,
        max_price: budget.and_then(|b| share_per_day(b, ACTIVITY_SHARE, duration_days.max(1))),
        category: prefs.activity_focus().map(str::to_string),
    }
}

fn cost_overflow() -> TravelError {
    TravelError::computation("Failed to estimate costs", "amount overflow")
}

fn flights_cost(
    outbound: &TravelResult<FlightSearchResponse>,
    inbound: &TravelResult<FlightSearchResponse>,
    travelers: u32,
) -> TravelResult<Option<u64>> {
    let (Ok(outbound), Ok(inbound)) = (outbound, inbound) else {
        return Ok(None);
    };
    let cheapest = |r: &FlightSearchResponse| {
        r.cheapest_fare()
            .map(Option::unwrap_or_default)
            .map_err(|e| TravelError::computation("Failed to estimate flight cost", e))
    };
    cheapest(outbound)?
        .checked_add(cheapest(inbound)?)
        .and_then(|pair| pair.checked_mul(u64::from(travelers)))
        .map(Some)
        .ok_or_else(cost_overflow)
}

fn accommodation_cost(
    hotels: &TravelResult<HotelSearchResponse>,
    duration_days: u64,
) -> TravelResult<Option<u64>> {
    let Ok(hotels) = hotels else {
        return Ok(None);
    };
    let mut cheapest: Option<u64> = None;
    for hotel in &hotels.hotels {
        let nightly = hotel
            .nightly_price()
            .map_err(|e| TravelError::computation("Failed to estimate accommodation cost", e))?
            .amount();
        cheapest = Some(cheapest.map_or(nightly, |c| c.min(nightly)));
    }
    cheapest
        .map(|nightly| nightly.checked_mul(duration_days).ok_or_else(cost_overflow))
        .transpose()
}

/// Average of the first `planned` paid activities, times how many were
/// averaged. Free activities cost nothing.
fn activities_cost(activities: &ActivitySearchResponse, planned: u64) -> TravelResult<u64> {
    let mut paid = Vec::new();
    for activity in &activities.activities {
        let price = activity
            .ticket_price()
            .map_err(|e| TravelError::computation("Failed to estimate activities cost", e))?;
        if !price.is_free() {
            paid.push(price.amount());
        }
    }
    let count = paid.len().min(usize::try_from(planned).unwrap_or(usize::MAX));
    if count == 0 {
        return Ok(0);
    }
    let sum = paid[..count]
        .iter()
        .try_fold(0u64, |acc, &p| acc.checked_add(p))
        .ok_or_else(cost_overflow)?;
    Ok(sum / count as u64 * count as u64)
}

fn budget_status(budget: Option<u64>, total: u64) -> &'static str {
    match budget {
        Some(b) if total <= b => "Within budget",
        Some(_) => "Over budget",
        None => "No budget specified",
    }
}

fn recommendations(prefs: &Preferences, duration_days: u64) -> Vec<String> {
    let mut tips: Vec<String> = Vec::new();
    if prefs.mentions(Keyword::Budget) {
        tips.push("Consider booking hostels or budget hotels to save money".into());
        tips.push("Look for free activities and walking tours".into());
    }
    if prefs.mentions(Keyword::Luxury) {
        tips.push("Book premium hotels with spa and fine dining".into());
        tips.push("Consider private tours and premium experiences".into());
    }
    if prefs.mentions(Keyword::Adventure) {
        tips.push("Pack appropriate gear for adventure activities".into());
        tips.push("Check weather conditions for outdoor activities".into());
    }
    if prefs.mentions(Keyword::Cultural) {
        tips.push("Research local customs and traditions".into());
        tips.push("Visit museums and heritage sites early to avoid crowds".into());
    }
    tips.push("Book flights at least 2-3 weeks in advance for better prices".into());
    tips.push(format!("Consider travel insurance for {duration_days}-day trips"));
    tips.push("Check visa requirements if traveling internationally".into());
    tips.push("Pack according to the destination's weather and cultural norms".into());
    tips
}

#[derive(Clone)]
pub struct TravelPlanner<F, H, A> {
    flights: F,
    hotels: H,
    activities: A,
}

impl TravelPlanner<FlightsClient, HotelsClient, ActivitiesClient> {
    /// Planner over the built-in catalogs.
    pub fn builtin() -> Self {
        Self::new(FlightsClient::new(), HotelsClient::new(), ActivitiesClient::new())
    }
}

impl<F, H, A> TravelPlanner<F, H, A>
where
    F: FlightSearch,
    H: HotelSearch,
    A: ActivitySearch,
{
    pub fn new(flights: F, hotels: H, activities: A) -> Self {
        Self {
            flights,
            hotels,
            activities,
        }
    }

    pub fn flights(&self) -> &F {
        &self.flights
    }

    pub fn hotels(&self) -> &H {
        &self.hotels
    }

    pub fn activities(&self) -> &A {
        &self.activities
    }

    pub fn create_plan(&self, request: &TripRequest) -> TravelResult<TravelPlan> {
        let op = Operation::start(format!(
            "travel_plan {} -> {}",
            request.source, request.destination
        ));
        let result = self.build_plan(request, &op);
        op.finish(&result);
        result
    }

    fn build_plan(&self, request: &TripRequest, op: &Operation) -> TravelResult<TravelPlan> {
        let budget = request.budget.filter(|&b| b > 0);
        log_business_event(
            "travel_plan_requested",
            &[
                ("source", request.source.clone()),
                ("destination", request.destination.clone()),
                ("travelers", request.travelers.to_string()),
                ("budget", budget.map_or("None".into(), format_rupees)),
            ],
        );

        let trip = resolve_itinerary(request)?;
        let prefs = Preferences::parse(request.preferences.as_deref());
        op.step(
            "itinerary",
            format!(
                "{} to {} ({} days)",
                trip.travel_date, trip.return_date, trip.duration_days
            ),
        );

        let outbound = self.flights.search_flights(
            &FlightQuery::new(&request.source, &request.destination).on(trip.travel_date),
        );
        let inbound = self.flights.search_flights(
            &FlightQuery::new(&request.destination, &request.source).on(trip.return_date),
        );
        op.step("flights", format!("outbound ok={} return ok={}", outbound.is_ok(), inbound.is_ok()));

        let hotels = self.hotels.search_hotels(
            &HotelQuery::new(&request.destination)
                .stay(Some(trip.travel_date), Some(trip.return_date))
                .filters(hotel_filters(budget, &prefs, trip.duration_days)),
        );
        op.step("hotels", format!("ok={}", hotels.is_ok()));

        let activities = self.activities.search_activities(
            &ActivityQuery::new(&request.destination)
                .filters(activity_filters(budget, &prefs, trip.duration_days)),
        );
        op.step("activities", format!("ok={}", activities.is_ok()));

        let mut breakdown = CostBreakdown::default();
        let mut total: u64 = 0;
        if let Some(cost) = flights_cost(&outbound, &inbound, request.travelers)? {
            breakdown.flights = Some(format_rupees(cost));
            total = total.checked_add(cost).ok_or_else(cost_overflow)?;
        }
        if let Some(cost) = accommodation_cost(&hotels, trip.duration_days)? {
            breakdown.accommodation = Some(format!(
                "{} ({} nights)",
                format_rupees(cost),
                trip.duration_days
            ));
            total = total.checked_add(cost).ok_or_else(cost_overflow)?;
        }
        if let Ok(found) = &activities {
            if !found.activities.is_empty() {
                let planned = trip.duration_days * ACTIVITIES_PER_DAY;
                let cost = activities_cost(found, planned)?;
                breakdown.activities = Some(format!(
                    "{} (estimated {} activities)",
                    format_rupees(cost),
                    planned
                ));
                total = total.checked_add(cost).ok_or_else(cost_overflow)?;
            }
        }

        let per_person = if request.travelers > 1 {
            total / u64::from(request.travelers)
        } else {
            total
        };
        let cost_estimate = CostEstimate {
            total: format_rupees(total),
            per_person: format_rupees(per_person),
            breakdown,
            budget_status: budget_status(budget, total).to_string(),
        };

        log_business_event(
            "travel_plan_completed",
            &[
                ("destination", request.destination.clone()),
                ("total_cost", cost_estimate.total.clone()),
                ("budget_status", cost_estimate.budget_status.clone()),
            ],
        );

        Ok(TravelPlan {
            trip_overview: TripOverview {
                source: title_case(&request.source),
                destination: title_case(&request.destination),
                travel_date: format_date(trip.travel_date),
                return_date: format_date(trip.return_date),
                duration_days: trip.duration_days,
                travelers: request.travelers,
                preferences: prefs.as_str().map(str::to_string),
                budget: budget.map_or("Not specified".to_string(), format_rupees),
            },
            plan_generated_at: chrono::Local::now().to_rfc3339(),
            flights: PlanFlights {
                outbound: outbound.into(),
                inbound: inbound.into(),
            },
            accommodation: hotels.into(),
            activities: activities.into(),
            cost_estimate,
            recommendations: recommendations(&prefs, trip.duration_days),
        })
    }

    /// Ranks destinations by how well they match the preferences.
    pub fn compare(&self, destinations: &[String], preferences: Option<&str>) -> TravelResult<Comparison> {
        compare_destinations(&self.hotels, &self.activities, destinations, preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(travel: &str, ret: &str) -> TripRequest {
        TripRequest {
            travel_date: Some(travel.into()),
            return_date: Some(ret.into()),
            ..TripRequest::new("Delhi", "Mumbai")
        }
    }

    #[test]
    fn return_defaults_to_two_days_later() {
        let trip = resolve_itinerary(&TripRequest {
            travel_date: Some("2026-05-30".into()),
            ..TripRequest::new("a", "b")
        })
        .unwrap();
        assert_eq!(format_date(trip.return_date), "2026-06-01");
        assert_eq!(trip.duration_days, 2);
    }

    #[test]
    fn return_before_departure_is_rejected() {
        let err = resolve_itinerary(&request("2026-05-10", "2026-05-08")).unwrap_err();
        assert!(matches!(err, TravelError::ComputationFailure(_)));
        assert!(err.to_string().contains("before travel date"));
    }

    #[test]
    fn zero_travelers_is_rejected() {
        let mut req = request("2026-05-10", "2026-05-12");
        req.travelers = 0;
        assert!(resolve_itinerary(&req).is_err());
    }

    #[test]
    fn hotel_ceiling_needs_budget_and_preferences() {
        let none = Preferences::parse(None);
        assert_eq!(hotel_filters(Some(50_000), &none, 2), HotelFilters::default());

        let beach = Preferences::parse(Some("beach"));
        assert_eq!(hotel_filters(Some(50_000), &beach, 2).max_price, Some(10_000));
        assert_eq!(hotel_filters(Some(50_000), &beach, 0).max_price, None);

        let lux = hotel_filters(Some(50_000), &Preferences::parse(Some("luxury")), 2);
        assert_eq!(lux.max_price, Some(10_000));
        assert_eq!(lux.min_rating, Some(4));

        let cheap = hotel_filters(Some(500_000), &Preferences::parse(Some("budget")), 2);
        assert_eq!(cheap.max_price, Some(5_000));
    }

    #[test]
    fn activity_ceiling_uses_at_least_one_day() {
        let none = Preferences::parse(None);
        assert_eq!(activity_filters(Some(10_000), &none, 0).max_price, Some(2_000));
        assert_eq!(activity_filters(Some(10_000), &none, 4).max_price, Some(500));
        assert_eq!(activity_filters(Some(4), &none, 1).max_price, None);
        assert_eq!(activity_filters(None, &none, 1).max_price, None);
    }

    #[test]
    fn budget_statuses() {
        assert_eq!(budget_status(None, 10), "No budget specified");
        assert_eq!(budget_status(Some(10), 10), "Within budget");
        assert_eq!(budget_status(Some(9), 10), "Over budget");
    }

    #[test]
    fn preference_tips_come_first() {
        let tips = recommendations(&Preferences::parse(Some("budget luxury cultural")), 3);
        assert_eq!(tips.len(), 10);
        assert_eq!(tips[0], "Consider booking hostels or budget hotels to save money");
        assert_eq!(tips[2], "Book premium hotels with spa and fine dining");
        assert_eq!(tips[4], "Research local customs and traditions");
        assert_eq!(tips[7], "Consider travel insurance for 3-day trips");
    }
}
