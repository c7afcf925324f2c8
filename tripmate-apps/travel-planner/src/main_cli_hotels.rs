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

//! # Hotels CLI
//!
//! Search the mock hotels catalog of a city.
//!
//! # Examples
//!
//! ## Basic search
//!
//! ```bash
//! tripmate-hotels -L Goa -i 2026-02-15 -o 2026-02-20
//! ```
//!
//! ## Search with filters
//!
//! ```bash
//! # 4-5 star hotels under ₹8,000 per night
//! tripmate-hotels -L Goa -p 8000 -s 4
//! ```
//!
//! # Output
//!
//! A summary of the stay followed by matching hotels, best rated first:
//! - Name and star rating
//! - Price per night
//! - Location and amenities

use anyhow::{Context, Result};
use clap::Parser;
use tripmate_travel_planner::config::AppConfig;
use tripmate_travel_planner::telemetry::init_tracing;
use tripmate_travel_planner::{HotelSearchResponse, SearchHotelsInput, ToolReply, TravelToolkit};

#[derive(Parser, Debug)]
#[command(name = "tripmate-hotels")]
#[command(version = "0.1.0")]
#[command(about = "Search hotels in Indian tourist cities")]
struct Args {
    #[arg(short = 'L', long)]
    city: String,
    #[arg(short = 'i', long, help = "Check-in date (YYYY-MM-DD), defaults to today")]
    checkin: Option<String>,
    #[arg(short = 'o', long, help = "Check-out date (YYYY-MM-DD), defaults to the next day")]
    checkout: Option<String>,
    #[arg(short = 'p', long, help = "Maximum price per night in rupees")]
    max_price: Option<u64>,
    #[arg(short = 's', long, help = "Minimum star rating (1-5)", value_parser = clap::value_parser!(u8).range(1..=5))]
    min_stars: Option<u8>,
    #[arg(short = 'n', long, default_value = "10")]
    limit: usize,
    #[arg(long, help = "Print the raw JSON reply")]
    json: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn stars(n: u8) -> String {
    "★".repeat(n as usize)
}

fn print_hotels(result: &HotelSearchResponse, limit: usize) {
    println!("🏨 {} | {} → {}", result.city, result.checkin_date, result.checkout_date);
    println!(
        "   Filters: max price {} | min rating {}",
        result.filters_applied.max_price, result.filters_applied.min_rating
    );
    println!("   {} hotel(s) found\n", result.hotels_found);

    for (i, h) in result.hotels.iter().take(limit).enumerate() {
        println!("{:>2}. {} {}", i + 1, h.name, stars(h.rating.stars()));
        println!("    {} / night  ·  📍 {}", h.price_per_night, h.location);
        if !h.amenities.is_empty() {
            println!("    {}", h.amenities.join(", "));
        }
        println!();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    let config = AppConfig::from_env().with_overrides(None, Some(level.to_string()), None);
    init_tracing(&config)?;

    let reply = TravelToolkit::builtin().search_hotels(SearchHotelsInput {
        city: args.city,
        checkin_date: args.checkin,
        checkout_date: args.checkout,
        max_price: args.max_price,
        min_rating: args.min_stars,
    });

    if args.json {
        println!("{}", reply.to_json().context("Failed to serialize reply")?);
        return Ok(());
    }
    match reply {
        ToolReply::Success(result) => print_hotels(&result, args.limit),
        ToolReply::Error { error_message } => anyhow::bail!(error_message),
    }
    Ok(())
}
