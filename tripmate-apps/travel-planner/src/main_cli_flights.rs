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

//! CLI for flight search over the mock flights catalog.

use anyhow::{Context, Result};
use clap::Parser;
use std::cmp::max;
use tripmate_travel_planner::config::AppConfig;
use tripmate_travel_planner::telemetry::init_tracing;
use tripmate_travel_planner::{FlightOffer, FlightSearchResponse, SearchFlightsInput, ToolReply, TravelToolkit};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "tripmate-flights")]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Departure city (e.g., Delhi, Mumbai)
    #[arg(short, long)]
    from: String,

    /// Arrival city (e.g., Goa, Kashmir)
    #[arg(short, long)]
    to: String,

    /// Travel date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<String>,

    /// Maximum fare in rupees
    #[arg(short = 'p', long)]
    max_price: Option<u64>,

    /// Print the raw JSON reply
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

/// Get terminal width for responsive tables
fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(100)
}

fn dash_bar() -> String {
    "-".repeat(get_terminal_width().min(100))
}

fn fmt_times(flight: &FlightOffer) -> String {
    format!("{} → {}", flight.departure, flight.arrival)
}

/// Calculate column widths from the longest cells
fn calc_column_widths(flights: &[FlightOffer]) -> (usize, usize, usize) {
    let mut number_w = 6;
    let mut airline_w = 7;
    let mut times_w = 13;
    for f in flights {
        number_w = max(number_w, f.flight_number.len());
        airline_w = max(airline_w, f.airline.len());
        times_w = max(times_w, fmt_times(f).chars().count());
    }
    (number_w, airline_w, times_w)
}

/// Render results to stdout
fn render_results(result: &FlightSearchResponse) {
    let title_bar = format!(
        "================================================================================================\n  🛫  {} on {}\n================================================================================================",
        result.route, result.date
    );
    println!("{}\n", title_bar);

    match result.cheapest_fare() {
        Ok(Some(fare)) => println!("💰 Best Price:  {}", tripmate_travel_planner::format_rupees(fare)),
        _ => println!("💰 Best Price:  n/a"),
    }
    println!("📊 Total Flights: {}", result.flights_found);
    println!("🔎 Max price filter: {}", result.filters_applied.max_price);

    let (nw, aw, tw) = calc_column_widths(&result.flights);
    println!("\n{}", dash_bar());
    println!(
        "  {:>3}  {:<nw$}  {:<aw$}  {:<tw$}   PRICE",
        "#", "FLIGHT", "AIRLINE", "DEP → ARR"
    );
    println!("{}", dash_bar());
    for (i, f) in result.flights.iter().enumerate() {
        println!(
            "  {:>3}  {:<nw$}  {:<aw$}  {:<tw$}   {}",
            i + 1,
            f.flight_number,
            f.airline,
            fmt_times(f),
            f.price
        );
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    let config = AppConfig::from_env().with_overrides(None, Some(level.to_string()), None);
    init_tracing(&config)?;

    tracing::info!("Starting tripmate-flights CLI");
    tracing::debug!("Args: {:?}", args);

    let toolkit = TravelToolkit::builtin();
    let reply = toolkit.search_flights(SearchFlightsInput {
        source: args.from,
        destination: args.to,
        date: args.date,
        max_price: args.max_price,
    });

    if args.json {
        println!("{}", reply.to_json().context("Failed to serialize reply")?);
        return Ok(());
    }
    match reply {
        ToolReply::Success(result) => render_results(&result),
        ToolReply::Error { error_message } => anyhow::bail!(error_message),
    }
    Ok(())
}
