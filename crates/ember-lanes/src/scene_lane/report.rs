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

//! Accumulated diagnostics of a scene load.
//!
//! Component and entity problems never abort a load. They are collected in a
//! [`LoadReport`] returned next to whatever part of the scene could be
//! rebuilt, and the caller decides whether to warn or refuse.

use std::fmt;

use super::CodecError;
use ember_data::scene::Scene;

/// How serious a recorded problem is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Data was skipped but nothing the running build understands was lost.
    Warning,
    /// Data the running build understands was dropped.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// What went wrong with one entity or one of its components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadProblem {
    /// A component fragment failed to decode and was dropped.
    Codec(CodecError),
    /// A `components` key does not name any known kind; the fragment was skipped.
    UnknownComponentKind(String),
    /// The entity has no `name` key.
    MissingEntityName,
    /// An entity-level key holds the wrong type of node.
    InvalidEntityField {
        /// The entity key.
        field: &'static str,
        /// What the schema requires.
        expected: &'static str,
        /// What the document holds instead.
        found: &'static str,
    },
}

impl LoadProblem {
    /// The severity of this problem.
    pub fn severity(&self) -> Severity {
        match self {
            LoadProblem::UnknownComponentKind(_) => Severity::Warning,
            LoadProblem::Codec(_)
            | LoadProblem::MissingEntityName
            | LoadProblem::InvalidEntityField { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for LoadProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadProblem::Codec(err) => write!(f, "{err}; component dropped"),
            LoadProblem::UnknownComponentKind(key) => {
                write!(f, "unknown component kind '{key}'; skipped")
            }
            LoadProblem::MissingEntityName => write!(f, "entity has no 'name'"),
            LoadProblem::InvalidEntityField {
                field,
                expected,
                found,
            } => write!(f, "entity field '{field}' should be {expected}, found {found}"),
        }
    }
}

/// One problem, recorded against the entity it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadIssue {
    /// Position of the entity in the document's top-level sequence.
    pub entity_index: usize,
    /// Display name of the entity (empty if it could not be read).
    pub entity_name: String,
    /// The problem itself.
    pub problem: LoadProblem,
}

impl LoadIssue {
    /// The severity of the underlying problem.
    pub fn severity(&self) -> Severity {
        self.problem.severity()
    }
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: entity #{} '{}': {}",
            self.severity(),
            self.entity_index,
            self.entity_name,
            self.problem
        )
    }
}

/// Every problem met while loading one scene, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadReport {
    issues: Vec<LoadIssue>,
}

impl LoadReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an issue.
    pub fn push(&mut self, issue: LoadIssue) {
        self.issues.push(issue);
    }

    /// All recorded issues.
    pub fn issues(&self) -> &[LoadIssue] {
        &self.issues
    }

    /// Issues of severity [`Severity::Error`].
    pub fn errors(&self) -> impl Iterator<Item = &LoadIssue> + '_ {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
    }

    /// Issues of severity [`Severity::Warning`].
    pub fn warnings(&self) -> impl Iterator<Item = &LoadIssue> + '_ {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
    }

    /// Returns `true` if any data the running build understands was dropped.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Returns `true` if nothing at all was recorded.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of recorded issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns `true` if no issue was recorded.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for issue in &self.issues {
            writeln!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// The result of loading a scene document: the scene that could be rebuilt
/// plus everything that went wrong along the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneLoad {
    /// The reconstructed scene. Entities appear in document order.
    pub scene: Scene,
    /// Problems recorded while rebuilding it.
    pub report: LoadReport,
}
