// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Settings of the stub backend.

use lumen_rhi::{PhysicalDeviceType, RhiError, RhiResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

use anyhow::Context;

/// What the stub factory does when asked for a kind it does not implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedPolicy {
    /// Log an error and return `RhiError::Unsupported`.
    #[default]
    Report,
    /// Panic with "Not implemented".
    Panic,
}

/// Tunables of a [`StubFactory`](crate::StubFactory).
///
/// Every field has a default, so a settings file only needs to name what it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubFactorySettings {
    /// How many physical devices enumeration reports.
    pub physical_device_count: usize,
    /// The name reported by the stub physical devices.
    pub physical_device_name: String,
    /// The device type reported by the stub physical devices.
    pub physical_device_type: PhysicalDeviceType,
    /// Behaviour when an unsupported kind is requested.
    pub unsupported_policy: UnsupportedPolicy,
}

impl Default for StubFactorySettings {
    fn default() -> Self {
        Self {
            physical_device_count: 1,
            physical_device_name: "UnitTest Physical Device".to_string(),
            physical_device_type: PhysicalDeviceType::Cpu,
            unsupported_policy: UnsupportedPolicy::Report,
        }
    }
}

impl StubFactorySettings {
    /// Parses settings from a JSON document.
    ///
    /// ## Errors
    /// * `RhiError::Settings` - If the document is not valid settings JSON.
    pub fn from_json_str(json: &str) -> RhiResult<Self> {
        serde_json::from_str(json).map_err(|e| RhiError::Settings(e.to_string()))
    }

    /// Reads settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stub settings from '{}'", path.display()))?;
        let settings = Self::from_json_str(&json)
            .with_context(|| format!("Failed to parse stub settings in '{}'", path.display()))?;
        log::debug!("Loaded stub settings from '{}'.", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_expose_a_single_device() {
        let settings = StubFactorySettings::default();
        assert_eq!(settings.physical_device_count, 1);
        assert_eq!(settings.unsupported_policy, UnsupportedPolicy::Report);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings =
            StubFactorySettings::from_json_str(r#"{ "unsupported_policy": "panic" }"#).unwrap();
        assert_eq!(settings.unsupported_policy, UnsupportedPolicy::Panic);
        assert_eq!(settings.physical_device_count, 1);
        assert_eq!(settings.physical_device_name, "UnitTest Physical Device");
    }

    #[test]
    fn invalid_json_is_a_settings_error() {
        let err = StubFactorySettings::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, RhiError::Settings(_)));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result = StubFactorySettings::from_json_str(r#"{ "unsupported_policy": "ignore" }"#);
        assert!(result.is_err());
    }
}
