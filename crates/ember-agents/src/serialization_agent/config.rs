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

use ember_core::scene::SerializationGoal;
use serde::{Deserialize, Serialize};

/// Configuration for the [`SerializationAgent`](super::SerializationAgent).
///
/// Every field has a default, so a config file only needs the keys it changes:
///
/// ```toml
/// default_goal = "human-readable-debug"
/// strict_load = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializationConfig {
    /// Goal used by `save_default`.
    pub default_goal: SerializationGoal,
    /// Refuse loads whose report contains errors, leaving the active scene untouched.
    /// Warnings never cause a refusal.
    pub strict_load: bool,
    /// Pretty-print text encodings.
    pub pretty: bool,
}

impl Default for SerializationConfig {
    fn default() -> Self {
        Self {
            default_goal: SerializationGoal::LongTermStability,
            strict_load: false,
            pretty: true,
        }
    }
}

impl SerializationConfig {
    /// Parses a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(
            SerializationConfig::from_toml_str("").unwrap(),
            SerializationConfig::default()
        );
    }

    #[test]
    fn test_partial_config_overrides_only_given_keys() {
        let config = SerializationConfig::from_toml_str(
            "default_goal = \"smallest-file-size\"\nstrict_load = true\n",
        )
        .unwrap();
        assert_eq!(config.default_goal, SerializationGoal::SmallestFileSize);
        assert!(config.strict_load);
        assert!(config.pretty);
    }

    #[test]
    fn test_unknown_goal_is_rejected() {
        assert!(SerializationConfig::from_toml_str("default_goal = \"fastest\"").is_err());
    }
}
