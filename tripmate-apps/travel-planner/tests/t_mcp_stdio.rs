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

//! MCP server integration tests using subprocess with stdio transport.

#![cfg(test)]

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::process::Stdio;
use std::sync::Once;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::time::Duration;
use tracing_subscriber::EnvFilter;

const TIMEOUT: Duration = Duration::from_secs(5);
const BINARY: &str = env!("CARGO_BIN_EXE_tripmate-travel-mcp");

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_thread_ids(true)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339())
            .with_writer(std::io::stderr)
            .with_env_filter(EnvFilter::new("debug"))
            .init();
    });
}

struct McpSession {
    child: Child,
    stdin: ChildStdin,
    stdout: Lines<BufReader<ChildStdout>>,
}

impl McpSession {
    async fn start() -> Result<Self> {
        let mut child = Command::new(BINARY)
            .args(["--log-level", "warn", "stdio"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .context("Failed to spawn tripmate-travel-mcp")?;
        let stdin = child.stdin.take().context("stdin not piped")?;
        let stdout = child.stdout.take().context("stdout not piped")?;
        let mut session = Self {
            child,
            stdin,
            stdout: BufReader::new(stdout).lines(),
        };
        session.initialize().await?;
        Ok(session)
    }

    async fn send(&mut self, message: Value) -> Result<()> {
        let mut line = message.to_string();
        line.push('\n');
        tracing::debug!("Sending: {}", line.trim_end());
        self.stdin.write_all(line.as_bytes()).await?;
        self.stdin.flush().await?;
        Ok(())
    }

    /// Reads lines until the JSON-RPC response carrying `id` shows up.
    async fn response(&mut self, id: u64) -> Result<Value> {
        loop {
            let line = tokio::time::timeout(TIMEOUT, self.stdout.next_line())
                .await
                .context("Timed out waiting for MCP response")??
                .context("MCP server closed stdout")?;
            tracing::debug!("Received: {}", line);
            let Ok(message) = serde_json::from_str::<Value>(&line) else {
                continue;
            };
            if message["id"] == id {
                return Ok(message);
            }
        }
    }

    async fn initialize(&mut self) -> Result<()> {
        self.send(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "test-client", "version": "1.0"}
            }
        }))
        .await?;
        let init = self.response(1).await?;
        assert_eq!(init["jsonrpc"], "2.0");
        assert!(
            init["result"]["serverInfo"].is_object(),
            "Init response should carry serverInfo: {}",
            init
        );

        self.send(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
            .await
    }

    async fn call_tool(&mut self, id: u64, name: &str, args: Value) -> Result<Value> {
        self.send(json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "tools/call",
            "params": {"name": name, "arguments": args}
        }))
        .await?;
        let response = self.response(id).await?;
        let text = response["result"]["content"][0]["text"]
            .as_str()
            .with_context(|| format!("No text content in response: {}", response))?;
        Ok(serde_json::from_str(text)?)
    }

    async fn shutdown(mut self) -> Result<()> {
        drop(self.stdin);
        let _ = tokio::time::timeout(TIMEOUT, self.child.wait()).await;
        self.child.start_kill().ok();
        Ok(())
    }
}

#[tokio::test]
async fn test_mcp_stdio_lists_tools() -> Result<()> {
    init_tracing();
    let mut session = McpSession::start().await?;

    session
        .send(json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}))
        .await?;
    let response = session.response(2).await?;
    let mut names: Vec<&str> = response["result"]["tools"]
        .as_array()
        .context("tools/list should return an array")?
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    names.sort_unstable();

    assert_eq!(
        names,
        [
            "compare_destinations",
            "create_comprehensive_travel_plan",
            "get_activities_by_category",
            "get_all_activities",
            "get_travel_inspiration",
            "search_activities",
            "search_destination_activities",
            "search_flights",
            "search_hotels",
        ]
    );

    session.shutdown().await
}

#[tokio::test]
async fn test_mcp_stdio_search_hotels() -> Result<()> {
    init_tracing();
    let mut session = McpSession::start().await?;

    let reply = session
        .call_tool(
            2,
            "search_hotels",
            json!({"city": "goa", "max_price": 8000, "min_rating": 4}),
        )
        .await?;
    assert_eq!(reply["status"], "success");
    assert_eq!(reply["city"], "Goa");
    assert_eq!(reply["hotels_found"], 1);
    assert_eq!(reply["hotels"][0]["name"], "Pousada by the Beach");
    assert_eq!(reply["filters_applied"]["max_price"], "₹8,000");
    assert_eq!(reply["filters_applied"]["min_rating"], "4 stars");

    session.shutdown().await
}

#[tokio::test]
async fn test_mcp_stdio_error_reply_is_not_a_protocol_error() -> Result<()> {
    init_tracing();
    let mut session = McpSession::start().await?;

    let reply = session
        .call_tool(
            2,
            "search_flights",
            json!({"source": "Goa", "destination": "Kerala"}),
        )
        .await?;
    assert_eq!(reply["status"], "error");
    let message = reply["error_message"].as_str().unwrap_or_default();
    assert!(
        message.starts_with("No flights available from Goa to Kerala."),
        "Unexpected message: {}",
        message
    );

    let reply = session
        .call_tool(
            3,
            "compare_destinations",
            json!({"destinations": ["Goa", "Manali"], "preferences": "adventure"}),
        )
        .await?;
    assert_eq!(reply["recommendation"]["best_match"], "Manali");

    session.shutdown().await
}

#[tokio::test]
async fn test_mcp_help_and_version() -> Result<()> {
    let output = Command::new(BINARY).arg("--help").output().await?;
    assert!(output.status.success());
    let help = String::from_utf8_lossy(&output.stdout);
    assert!(help.contains("stdio"));
    assert!(help.contains("http"));

    let output = Command::new(BINARY).arg("--version").output().await?;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}
