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

//! # Application Configuration
//!
//! Defaults, then `TRIPMATE_*` environment variables, then command-line flags.

use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const ENV_MODEL: &str = "TRIPMATE_MODEL";
pub const ENV_LOG_LEVEL: &str = "TRIPMATE_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "TRIPMATE_LOG_FILE";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Model the agents are registered with.
    pub model_name: String,
    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_level: String,
    /// Plain-text log file, appended to, in addition to stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(model) = non_empty(ENV_MODEL) {
            self.model_name = model;
        }
        if let Some(level) = non_empty(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(file) = non_empty(ENV_LOG_FILE) {
            self.log_file = Some(PathBuf::from(file));
        }
        self
    }

    pub fn with_overrides(
        mut self,
        model_name: Option<String>,
        log_level: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(model) = model_name {
            self.model_name = model;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }
}
