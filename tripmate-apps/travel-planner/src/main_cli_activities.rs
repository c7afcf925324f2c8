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

//! CLI for activity search: one city, every city, or one category.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use serde::Serialize;
use tripmate_travel_planner::config::AppConfig;
use tripmate_travel_planner::telemetry::init_tracing;
use tripmate_travel_planner::{
    Activity, CategoryInput, SearchActivitiesInput, ToolReply, TravelToolkit,
};

#[derive(Parser, Debug)]
#[command(name = "tripmate-activities")]
#[command(author, version, about = "Search activities in Indian tourist cities")]
#[command(group(ArgGroup::new("mode").required(true).args(["city", "all", "category"])))]
struct CliArgs {
    /// City to search (e.g., Jaipur)
    #[arg(short = 'L', long)]
    city: Option<String>,

    /// List every city's activities
    #[arg(long)]
    all: bool,

    /// Activity category across all cities (e.g., Adventure), or a filter with --city
    #[arg(short, long)]
    category: Option<String>,

    /// Minimum rating (1-5)
    #[arg(short = 'r', long)]
    min_rating: Option<f64>,

    /// Maximum price in rupees
    #[arg(short = 'p', long)]
    max_price: Option<u64>,

    /// Print the raw JSON reply
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn print_activities(activities: &[Activity]) {
    for a in activities {
        println!(
            "  ⭐ {:.1}  {}  [{}]  {} · {}",
            a.rating, a.name, a.category, a.duration, a.price
        );
        println!("         {}", a.description);
    }
}

fn print_by_city(by_city: &[(String, Vec<Activity>)]) {
    for (city, activities) in by_city {
        println!("\n🏙️  {}", city);
        print_activities(activities);
    }
}

fn finish<T: Serialize>(reply: ToolReply<T>, json: bool, render: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", reply.to_json().context("Failed to serialize reply")?);
        return Ok(());
    }
    match reply {
        ToolReply::Success(result) => {
            render(&result);
            Ok(())
        }
        ToolReply::Error { error_message } => anyhow::bail!(error_message),
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    let config = AppConfig::from_env().with_overrides(None, Some(level.to_string()), None);
    init_tracing(&config)?;

    let toolkit = TravelToolkit::builtin();

    if args.all {
        return finish(toolkit.get_all_activities(), args.json, |r| {
            println!("📚 {} cities", r.total_cities);
            print_by_city(&r.activities_by_city);
        });
    }

    match (args.city, args.category) {
        (Some(city), category) => finish(
            toolkit.search_activities(SearchActivitiesInput {
                city,
                min_rating: args.min_rating,
                max_price: args.max_price,
                category,
            }),
            args.json,
            |r| {
                println!(
                    "🎯 {}: {} activities (rating {}, max price {}, category {})",
                    r.city,
                    r.activities_found,
                    r.filters_applied.min_rating,
                    r.filters_applied.max_price,
                    r.filters_applied.category
                );
                print_activities(&r.activities);
            },
        ),
        (None, Some(category)) => finish(
            toolkit.get_activities_by_category(CategoryInput { category }),
            args.json,
            |r| {
                println!("🧭 {}: {} cities", r.category, r.cities_with_activities);
                print_by_city(&r.activities_by_city);
            },
        ),
        (None, None) => anyhow::bail!("Pass --city, --all or --category"),
    }
}
