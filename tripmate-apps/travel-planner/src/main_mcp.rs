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

//! # Unified MCP Server Entry Point
//!
//! Supports stdio and HTTP transports via subcommand.

use anyhow::{Context, Error, Result};
use clap::{Parser, Subcommand};
use rmcp::handler::server::{ServerHandler, tool::ToolRouter, wrapper::Parameters};
use rmcp::service::serve_server;
use rmcp::tool;
use rmcp::tool_router;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tripmate_travel_planner::config::AppConfig;
use tripmate_travel_planner::telemetry::{init_tracing, log_business_event};
use tripmate_travel_planner::{
    CategoryInput, CompareInput, DestinationActivitiesInput, InspirationInput,
    SearchActivitiesInput, SearchFlightsInput, SearchHotelsInput, ToolReply, TravelToolkit,
    TripRequest, agents,
};

#[derive(Parser, Debug)]
#[command(name = "tripmate-travel-mcp")]
#[command(
    author,
    version,
    about = "MCP server for travel planning (flights, hotels & activities)"
)]
struct Args {
    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run MCP server over stdio (for Claude Desktop, etc.)
    Stdio,

    /// Run MCP server over HTTP
    Http {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        #[arg(long, default_value = "8080")]
        port: u16,
    },
}

fn to_text<T: Serialize>(reply: ToolReply<T>) -> Result<String, String> {
    reply.to_json().map_err(|e| e.to_string())
}

#[derive(Clone)]
pub struct TravelPlannerServer {
    toolkit: Arc<TravelToolkit>,
    tool_router: ToolRouter<Self>,
}

impl TravelPlannerServer {
    pub fn new(toolkit: Arc<TravelToolkit>) -> Self {
        Self {
            toolkit,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl TravelPlannerServer {
    #[tool(
        name = "search_flights",
        description = "Search for available flights between two cities in India. Parameters: source, destination, date (YYYY-MM-DD, optional, defaults to today), max_price (rupees, optional)."
    )]
    async fn search_flights(&self, params: Parameters<SearchFlightsInput>) -> Result<String, String> {
        to_text(self.toolkit.search_flights(params.0))
    }

    #[tool(
        name = "search_hotels",
        description = "Search for hotels in a city. Parameters: city, checkin_date and checkout_date (YYYY-MM-DD, optional), max_price (per night in rupees), min_rating (1-5 stars). Results are sorted by rating, then price."
    )]
    async fn search_hotels(&self, params: Parameters<SearchHotelsInput>) -> Result<String, String> {
        to_text(self.toolkit.search_hotels(params.0))
    }

    #[tool(
        name = "search_activities",
        description = "Search for activities in a city. Parameters: city, min_rating (1-5), max_price (rupees), category (optional). Results are sorted by rating."
    )]
    async fn search_activities(&self, params: Parameters<SearchActivitiesInput>) -> Result<String, String> {
        to_text(self.toolkit.search_activities(params.0))
    }

    #[tool(
        name = "get_all_activities",
        description = "List every activity across all cities, organized by city."
    )]
    async fn get_all_activities(&self) -> Result<String, String> {
        to_text(self.toolkit.get_all_activities())
    }

    #[tool(
        name = "get_activities_by_category",
        description = "Find activities of one category (Adventure, Heritage, Culinary, ...) across all cities."
    )]
    async fn get_activities_by_category(&self, params: Parameters<CategoryInput>) -> Result<String, String> {
        to_text(self.toolkit.get_activities_by_category(params.0))
    }

    #[tool(
        name = "create_comprehensive_travel_plan",
        description = "Create a travel plan with flights, accommodation, activities, a cost estimate and recommendations. Parameters: source, destination, travel_date, return_date (YYYY-MM-DD), budget (rupees), travelers, preferences (e.g. luxury, budget, adventure, cultural)."
    )]
    async fn create_comprehensive_travel_plan(&self, params: Parameters<TripRequest>) -> Result<String, String> {
        to_text(self.toolkit.create_comprehensive_travel_plan(params.0))
    }

    #[tool(
        name = "search_destination_activities",
        description = "Search activities in a destination, optionally restricted to an activity type (Adventure, Heritage, Culinary, etc.)."
    )]
    async fn search_destination_activities(
        &self,
        params: Parameters<DestinationActivitiesInput>,
    ) -> Result<String, String> {
        to_text(self.toolkit.search_destination_activities(params.0))
    }

    #[tool(
        name = "get_travel_inspiration",
        description = "Get cities and activities matching an activity category you are interested in."
    )]
    async fn get_travel_inspiration(&self, params: Parameters<InspirationInput>) -> Result<String, String> {
        to_text(self.toolkit.get_travel_inspiration(params.0))
    }

    #[tool(
        name = "compare_destinations",
        description = "Compare destinations on accommodation and activities, scored against optional preferences, and recommend the best match."
    )]
    async fn compare_destinations(&self, params: Parameters<CompareInput>) -> Result<String, String> {
        to_text(self.toolkit.compare_destinations(params.0))
    }
}

impl ServerHandler for TravelPlannerServer {
    fn list_tools(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> impl Future<Output = Result<rmcp::model::ListToolsResult, rmcp::ErrorData>> + Send + '_
    {
        tracing::debug!(
            "list_tools called, tools count: {}",
            self.tool_router.list_all().len()
        );
        Box::pin(async move {
            let tools = self.tool_router.list_all();
            Ok(rmcp::model::ListToolsResult::with_all_items(tools))
        })
    }

    fn call_tool(
        &self,
        request: rmcp::model::CallToolRequestParam,
        context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> impl Future<Output = Result<rmcp::model::CallToolResult, rmcp::ErrorData>> + Send + '_
    {
        let router = self.tool_router.clone();
        let self_clone = self.clone();
        Box::pin(async move {
            let context =
                rmcp::handler::server::tool::ToolCallContext::new(&self_clone, request, context);
            router.call(context).await
        })
    }

    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            protocol_version: rmcp::model::ProtocolVersion::V_2025_03_26,
            capabilities: rmcp::model::ServerCapabilities {
                tools: Some(rmcp::model::ToolsCapability::default()),
                ..Default::default()
            },
            server_info: rmcp::model::Implementation::from_build_env(),
            instructions: Some(agents::planner_instruction().to_string()),
        }
    }
}

fn shutdown_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl+C received, shutting down");
        }
        trigger.cancel();
    });
    token
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();
    let config = AppConfig::from_env().with_overrides(None, args.log_level.clone(), args.log_file.clone());
    init_tracing(&config)?;
    tracing::debug!("Parsed args: {:?}", args);

    let toolkit = Arc::new(TravelToolkit::builtin());
    log_business_event(
        "application_started",
        &[("mode", "mcp".to_string()), ("model", config.model_name.clone())],
    );

    match args.command {
        Command::Stdio => {
            eprintln!("Starting MCP server over stdio...");
            let server = TravelPlannerServer::new(toolkit);
            let running = serve_server(Arc::new(server), rmcp::transport::io::stdio())
                .await
                .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;
            let reason = running.waiting().await.context("MCP server task failed")?;
            tracing::info!("MCP server stopped: {:?}", reason);
        }
        Command::Http { host, port } => {
            let addr: SocketAddr = format!("{}:{}", host, port)
                .parse()
                .context("Invalid host:port")?;
            tracing::info!("Starting MCP server over HTTP on {}", addr);
            let server = TravelPlannerServer::new(toolkit);
            let session_manager = Arc::new(LocalSessionManager::default());
            let config = StreamableHttpServerConfig {
                stateful_mode: true,
                ..Default::default()
            };
            let service =
                StreamableHttpService::new(move || Ok(server.clone()), session_manager, config);
            let app = axum::Router::new().nest_service("/mcp", service);
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .context("Failed to bind to address")?;
            let shutdown = shutdown_on_ctrl_c();
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { shutdown.cancelled().await })
                .await
                .context("HTTP server error")?;
        }
    }

    tracing::info!("Travel planner MCP server shutting down");
    Ok(())
}
