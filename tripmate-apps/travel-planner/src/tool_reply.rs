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

//! # Errors and Tool Replies
//!
//! Every public operation returns `Result<T, TravelError>`. At the tool
//! boundary the result becomes a [`ToolReply`], a JSON object tagged with
//! `"status": "success"` or `"status": "error"`.

use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TravelError {
    /// Key, route or category absent from a catalog.
    #[error("{0}")]
    NotFound(String),
    /// Malformed input broke a computation (dates, prices, trip shape).
    #[error("{0}")]
    ComputationFailure(String),
}

impl TravelError {
    pub fn not_found(message: impl Into<String>) -> Self {
        TravelError::NotFound(message.into())
    }

    pub fn computation(context: &str, cause: impl std::fmt::Display) -> Self {
        TravelError::ComputationFailure(format!("{context}: {cause}"))
    }
}

pub type TravelResult<T> = std::result::Result<T, TravelError>;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolReply<T> {
    Success(T),
    Error { error_message: String },
}

impl<T> ToolReply<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolReply::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            ToolReply::Success(v) => Some(v),
            ToolReply::Error { .. } => None,
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            ToolReply::Success(_) => "success",
            ToolReply::Error { .. } => "error",
        }
    }
}

impl<T> From<TravelResult<T>> for ToolReply<T> {
    fn from(result: TravelResult<T>) -> Self {
        match result {
            Ok(v) => ToolReply::Success(v),
            Err(e) => ToolReply::Error {
                error_message: e.to_string(),
            },
        }
    }
}

impl<T: Serialize> ToolReply<T> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Serializes key/value pairs as a JSON object, keeping their order.
#[allow(clippy::ptr_arg)]
pub fn ordered_map<S, V>(entries: &Vec<(String, V)>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
}
