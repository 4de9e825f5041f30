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

//! Defines the public API for goal-oriented scene saving.
//!
//! Instead of picking a file encoding, callers state their *intent* with a
//! [`SerializationGoal`] and the serialization agent picks the encoding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines the caller's high-level intention for a save operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SerializationGoal {
    /// Prioritizes the fastest possible loading time.
    /// The resulting file is binary and not meant to be read by people.
    FastestLoad,

    /// Prioritizes the smallest possible file size on disk.
    SmallestFileSize,

    /// Prioritizes human-readability for debugging and version control.
    /// The output is a text format that can be inspected and diffed.
    HumanReadableDebug,

    /// Prioritizes long-term stability: a widely supported text format whose
    /// shape depends only on the document schema.
    LongTermStability,
}

impl SerializationGoal {
    /// Every goal, in declaration order.
    pub const ALL: [SerializationGoal; 4] = [
        SerializationGoal::FastestLoad,
        SerializationGoal::SmallestFileSize,
        SerializationGoal::HumanReadableDebug,
        SerializationGoal::LongTermStability,
    ];

    /// The kebab-case name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SerializationGoal::FastestLoad => "fastest-load",
            SerializationGoal::SmallestFileSize => "smallest-file-size",
            SerializationGoal::HumanReadableDebug => "human-readable-debug",
            SerializationGoal::LongTermStability => "long-term-stability",
        }
    }
}

impl fmt::Display for SerializationGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name any [`SerializationGoal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGoalError(pub String);

impl fmt::Display for UnknownGoalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown serialization goal '{}'", self.0)
    }
}

impl std::error::Error for UnknownGoalError {}

impl FromStr for SerializationGoal {
    type Err = UnknownGoalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == s)
            .ok_or_else(|| UnknownGoalError(s.to_string()))
    }
}
