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

//! # Travel Planner CLI
//!
//! Demo entry point of the travel desk. Without a subcommand it greets the
//! user; subcommands build plans, compare destinations, suggest
//! destinations for an interest and list the agents.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tripmate_travel_planner::agents::agent_profiles;
use tripmate_travel_planner::config::AppConfig;
use tripmate_travel_planner::telemetry::{init_tracing, log_business_event};
use tripmate_travel_planner::{
    CompareInput, Comparison, InspirationInput, ToolReply, TravelPlan, TravelToolkit, TripRequest,
};

#[derive(Parser, Debug)]
#[command(name = "tripmate-planner")]
#[command(author, version, about = "Plan trips across Indian tourist destinations")]
struct Cli {
    /// Print raw JSON replies
    #[arg(long, global = true)]
    json: bool,

    /// Model name the agents are registered with
    #[arg(long, global = true)]
    model: Option<String>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a full travel plan with a cost estimate
    Plan {
        #[arg(short, long)]
        from: String,
        #[arg(short, long)]
        to: String,
        /// Travel date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// Return date (YYYY-MM-DD)
        #[arg(short = 'R', long)]
        return_date: Option<String>,
        /// Total budget in rupees
        #[arg(short, long)]
        budget: Option<u64>,
        #[arg(short = 'n', long, default_value = "1")]
        travelers: u32,
        /// e.g. "luxury", "budget adventure", "cultural"
        #[arg(short, long)]
        preferences: Option<String>,
    },
    /// Compare destinations against preferences
    Compare {
        #[arg(required = true)]
        destinations: Vec<String>,
        #[arg(short, long)]
        preferences: Option<String>,
    },
    /// Find destinations offering a kind of activity
    Inspire { category: String },
    /// List the agents and their tools
    Agents,
}

fn print_plan(plan: &TravelPlan) {
    let o = &plan.trip_overview;
    println!("================================================================================");
    println!("  ✈️  {} → {}  |  {} → {} ({} days)", o.source, o.destination, o.travel_date, o.return_date, o.duration_days);
    println!("  👥 {} traveler(s)  |  💰 budget {}", o.travelers, o.budget);
    if let Some(p) = &o.preferences {
        println!("  ❤️  {}", p);
    }
    println!("================================================================================\n");

    for (label, reply) in [("Outbound", &plan.flights.outbound), ("Return", &plan.flights.inbound)] {
        match reply {
            ToolReply::Success(f) => {
                println!("🛫 {} ({}, {}):", label, f.route, f.date);
                for offer in &f.flights {
                    println!("    {:<8} {:<10} {} → {}  {}", offer.flight_number, offer.airline, offer.departure, offer.arrival, offer.price);
                }
            }
            ToolReply::Error { error_message } => println!("🛫 {}: {}", label, error_message),
        }
    }

    match &plan.accommodation {
        ToolReply::Success(h) => {
            println!("\n🏨 Hotels in {}:", h.city);
            for hotel in &h.hotels {
                println!("    {} ({}★) {} / night, {}", hotel.name, hotel.rating.stars(), hotel.price_per_night, hotel.location);
            }
        }
        ToolReply::Error { error_message } => println!("\n🏨 {}", error_message),
    }

    match &plan.activities {
        ToolReply::Success(a) => {
            println!("\n🎯 Activities ({}):", a.activities_found);
            for act in &a.activities {
                println!("    ⭐ {:.1} {} [{}] {}", act.rating, act.name, act.category, act.price);
            }
        }
        ToolReply::Error { error_message } => println!("\n🎯 {}", error_message),
    }

    let c = &plan.cost_estimate;
    println!("\n💵 Estimated cost: {} ({} per person) | {}", c.total, c.per_person, c.budget_status);
    for (label, line) in [
        ("flights", &c.breakdown.flights),
        ("accommodation", &c.breakdown.accommodation),
        ("activities", &c.breakdown.activities),
    ] {
        if let Some(line) = line {
            println!("    {:<14} {}", label, line);
        }
    }

    println!("\n📝 Recommendations:");
    for tip in &plan.recommendations {
        println!("    • {}", tip);
    }
}

fn print_comparison(cmp: &Comparison) {
    for (_, report) in &cmp.comparison_results {
        println!("📍 {}  score {}", report.city, report.score);
        if let Some(h) = &report.hotel_summary {
            println!("    hotels: {} (avg {}, {} rated 4★+)", h.total_hotels, h.avg_price, h.luxury_options);
        }
        if let Some(a) = &report.activity_summary {
            println!("    activities: {} (avg rating {}) {}", a.total_activities, a.avg_rating, a.categories.join(", "));
        }
        for why in &report.highlights {
            println!("    ✔ {}", why);
        }
    }
    match &cmp.recommendation {
        Some(r) => println!("\n🏆 Best match: {} (score {})", r.best_match, r.score),
        None => println!("\nNo destinations to compare"),
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
    let cli = Cli::parse();
    let config = AppConfig::from_env().with_overrides(cli.model.clone(), cli.log_level.clone(), cli.log_file.clone());
    init_tracing(&config)?;
    tracing::info!("Starting Travel Agent Application");

    let toolkit = TravelToolkit::builtin();
    let result = match cli.command {
        None => {
            println!("Welcome to Travel Agent!!");
            tracing::info!("Application started successfully");
            log_business_event(
                "application_started",
                &[("version", env!("CARGO_PKG_VERSION").to_string()), ("mode", "demo".to_string())],
            );
            Ok(())
        }
        Some(Command::Plan { from, to, date, return_date, budget, travelers, preferences }) => {
            let request = TripRequest {
                travel_date: date,
                return_date,
                budget,
                travelers,
                preferences,
                ..TripRequest::new(from, to)
            };
            finish(toolkit.create_comprehensive_travel_plan(request), cli.json, print_plan)
        }
        Some(Command::Compare { destinations, preferences }) => finish(
            toolkit.compare_destinations(CompareInput { destinations, preferences }),
            cli.json,
            print_comparison,
        ),
        Some(Command::Inspire { category }) => finish(
            toolkit.get_travel_inspiration(InspirationInput { activity_category: category }),
            cli.json,
            |r| {
                println!("🧭 {} in {} cities: {}", r.category, r.cities_with_activities, r.cities.join(", "));
                for (city, activities) in &r.activities_by_city {
                    for a in activities {
                        println!("    {:<10} ⭐ {:.1} {} ({})", city, a.rating, a.name, a.price);
                    }
                }
            },
        ),
        Some(Command::Agents) => {
            let profiles = agent_profiles(&config);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&profiles).context("Failed to serialize agents")?);
            } else {
                for p in &profiles {
                    println!("🤖 {} [{}]\n    {}\n    tools: {}\n", p.name, p.model, p.description, p.tools.join(", "));
                }
            }
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!("Error in main application: {:#}", e);
    }
    tracing::info!("Travel Agent Application shutting down");
    result
}
