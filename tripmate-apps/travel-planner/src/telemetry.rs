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

//! # Telemetry
//!
//! Tracing setup shared by every binary, and the structured log helpers used
//! by the agents: search metrics, business events, agent interactions,
//! timed operations and tool calls.

use crate::config::AppConfig;
use crate::tool_reply::{ToolReply, TravelResult};
use anyhow::{Context, Result};
use std::fmt::Display;
use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::Instant;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber: `RUST_LOG` (or the configured level),
/// RFC 3339 timestamps on stderr, plus the optional log file.
pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("Invalid log level: {}", config.log_level))?;

    let file_layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .try_init()
        .context("Tracing subscriber already installed")?;

    tracing::info!("Logging system initialized");
    Ok(())
}

fn join_pairs(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn log_search_metrics(search_type: &str, query: &str, results: usize, filters: &[(&str, String)]) {
    let filters = join_pairs(filters);
    tracing::info!(
        target: "tripmate::search_metrics",
        search_type,
        query,
        results,
        filters = %filters,
        "SEARCH: {} | QUERY: {} | RESULTS: {}",
        search_type,
        query,
        results
    );
}

pub fn log_business_event(event_type: &str, data: &[(&str, String)]) {
    let data = join_pairs(data);
    tracing::info!(
        target: "tripmate::business_events",
        event_type,
        data = %data,
        "BUSINESS_EVENT: {}",
        event_type
    );
}

pub fn log_agent_interaction(agent: &str, action: &str, details: impl Display) {
    tracing::info!(
        target: "tripmate::agent_flow",
        "AGENT: {} | ACTION: {} | DETAILS: {}",
        agent,
        action,
        details
    );
}

/// A named unit of work whose duration and outcome get logged.
pub struct Operation {
    name: String,
    started: Instant,
}

impl Operation {
    pub fn start(name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::info!(target: "tripmate::operations", "Starting operation: {}", name);
        Self {
            name,
            started: Instant::now(),
        }
    }

    pub fn step(&self, step: &str, details: impl Display) {
        tracing::debug!(target: "tripmate::operations", "  Step: {} | {}", step, details);
    }

    pub fn finish<T>(self, result: &TravelResult<T>) {
        let secs = self.started.elapsed().as_secs_f64();
        match result {
            Ok(_) => tracing::info!(
                target: "tripmate::operations",
                "Operation completed: {} - Time: {:.3}s",
                self.name,
                secs
            ),
            Err(e) => tracing::error!(
                target: "tripmate::operations",
                "Operation failed: {} - Error: {} - Time: {:.3}s",
                self.name,
                e,
                secs
            ),
        }
    }
}

/// Runs a tool handler, logging the call, its reply status and timing.
pub fn traced_tool<T>(name: &str, args: impl Display, handler: impl FnOnce() -> ToolReply<T>) -> ToolReply<T> {
    tracing::info!(target: "tripmate::tools", "Function called: {}({})", name, args);
    let started = Instant::now();
    let reply = handler();
    tracing::info!(
        target: "tripmate::tools",
        "Function completed: {} - Status: {} - Time: {:.3}s",
        name,
        reply.status(),
        started.elapsed().as_secs_f64()
    );
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool_reply::TravelError;

    #[test]
    fn pairs_render_in_order() {
        let rendered = join_pairs(&[("max_price", "₹8,000".into()), ("min_rating", "None".into())]);
        assert_eq!(rendered, "max_price=₹8,000, min_rating=None");
    }

    #[test]
    fn traced_tool_passes_reply_through() {
        let reply: ToolReply<()> = traced_tool("noop", "", || {
            Err::<(), _>(TravelError::not_found("nothing here")).into()
        });
        assert_eq!(reply.status(), "error");
    }

    #[test]
    fn invalid_log_file_is_reported() {
        let config = AppConfig {
            log_file: Some("/nonexistent-dir/for/sure/tripmate.log".into()),
            ..AppConfig::default()
        };
        let err = init_tracing(&config).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to open log file"));
    }
}
