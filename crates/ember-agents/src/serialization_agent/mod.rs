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

//! The agent responsible for managing scene serialization.
//!
//! This agent is the entry point for every save and load. It holds a registry
//! of [`SerializationStrategy`] lanes keyed by strategy id, picks one from the
//! caller's [`SerializationGoal`] when saving, and reads it back from the file
//! header when loading.

mod config;

pub use config::SerializationConfig;

use ember_core::scene::{SceneFile, SceneFormatError, SerializationGoal};
use ember_data::scene::{Scene, SceneProvider};
use ember_lanes::scene_lane::{
    DeserializationError, DocumentEncoding, DocumentLane, LoadReport, SceneLoad,
    SerializationError, SerializationStrategy,
};
use std::collections::HashMap;
use thiserror::Error;

/// An error that can occur within the `SerializationAgent`.
#[derive(Debug, Error)]
pub enum AgentError {
    /// No registered strategy matches the id in the file header.
    #[error("No serialization strategy registered for '{0}'")]
    StrategyNotFound(String),
    /// The scene file container is invalid or corrupted.
    #[error("Invalid scene file: {0}")]
    InvalidHeader(#[from] SceneFormatError),
    /// The strategy failed to write the scene.
    #[error(transparent)]
    Serialization(#[from] SerializationError),
    /// The payload could not be turned back into a scene.
    #[error(transparent)]
    Deserialization(#[from] DeserializationError),
    /// Strict loading refused a load whose report contains errors.
    #[error("Scene load refused: {} error(s) recorded", .0.errors().count())]
    Rejected(LoadReport),
}

/// The agent responsible for the entire scene serialization process.
pub struct SerializationAgent {
    config: SerializationConfig,
    /// A registry of all available serialization strategies, keyed by their unique ID.
    strategies: HashMap<String, Box<dyn SerializationStrategy>>,
}

impl SerializationAgent {
    /// Creates an agent with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SerializationConfig::default())
    }

    /// Creates an agent and registers one document lane per encoding.
    pub fn with_config(config: SerializationConfig) -> Self {
        let mut agent = Self {
            config,
            strategies: HashMap::new(),
        };
        for encoding in DocumentEncoding::ALL {
            let lane = DocumentLane::new(encoding).with_pretty(agent.config.pretty);
            agent.register(Box::new(lane));
        }
        agent
    }

    /// Registers a strategy, replacing any previous one with the same id.
    pub fn register(&mut self, strategy: Box<dyn SerializationStrategy>) {
        let id = strategy.strategy_id().to_string();
        if self.strategies.insert(id.clone(), strategy).is_some() {
            log::debug!("Replaced serialization strategy '{id}'");
        }
    }

    /// The configuration this agent was built with.
    pub fn config(&self) -> &SerializationConfig {
        &self.config
    }

    /// The encoding chosen for a given goal.
    pub fn encoding_for(goal: SerializationGoal) -> DocumentEncoding {
        match goal {
            SerializationGoal::HumanReadableDebug => DocumentEncoding::Yaml,
            SerializationGoal::LongTermStability => DocumentEncoding::Json,
            SerializationGoal::FastestLoad | SerializationGoal::SmallestFileSize => {
                DocumentEncoding::MessagePack
            }
        }
    }

    fn strategy(&self, id: &str) -> Result<&dyn SerializationStrategy, AgentError> {
        self.strategies
            .get(id)
            .map(Box::as_ref)
            .ok_or_else(|| AgentError::StrategyNotFound(id.to_string()))
    }

    /// Saves a scene with the strategy that best serves `goal`.
    pub fn save_scene(
        &self,
        scene: &Scene,
        goal: SerializationGoal,
    ) -> Result<SceneFile, AgentError> {
        log::debug!("Goal {goal} selects {:?}", Self::encoding_for(goal));
        self.save_scene_as(scene, Self::encoding_for(goal))
    }

    /// Saves a scene in an explicit encoding, bypassing goal selection.
    pub fn save_scene_as(
        &self,
        scene: &Scene,
        encoding: DocumentEncoding,
    ) -> Result<SceneFile, AgentError> {
        let strategy = self.strategy(encoding.strategy_id())?;
        let payload = strategy.serialize(scene)?;
        let file = SceneFile::new(strategy.strategy_id(), payload)?;

        log::info!(
            "Saved scene with {} entities using {} ({} bytes)",
            scene.len(),
            strategy.strategy_id(),
            file.payload.len()
        );
        Ok(file)
    }

    /// Saves a scene with the configured default goal.
    pub fn save_default(&self, scene: &Scene) -> Result<SceneFile, AgentError> {
        self.save_scene(scene, self.config.default_goal)
    }

    /// Rebuilds a scene from a scene file.
    ///
    /// Component-level problems are returned in the report, not as errors.
    pub fn load_scene(&self, file: &SceneFile) -> Result<SceneLoad, AgentError> {
        let strategy_id = file.header.strategy_id_str()?;
        let strategy = self.strategy(strategy_id)?;
        let load = strategy.deserialize(&file.payload)?;

        log::info!(
            "Loaded scene with {} entities using {strategy_id} ({} issue(s))",
            load.scene.len(),
            load.report.len()
        );
        Ok(load)
    }

    /// Saves the provider's active scene.
    pub fn save_active(
        &self,
        provider: &dyn SceneProvider,
        goal: SerializationGoal,
    ) -> Result<SceneFile, AgentError> {
        self.save_scene(provider.active_scene(), goal)
    }

    /// Loads a scene file into the provider's active scene.
    ///
    /// On success the active scene is replaced and the report is returned.
    /// With `strict_load`, a report containing errors is refused and the
    /// active scene is left untouched.
    pub fn load_into(
        &self,
        provider: &mut dyn SceneProvider,
        file: &SceneFile,
    ) -> Result<LoadReport, AgentError> {
        let SceneLoad { scene, report } = self.load_scene(file)?;

        if self.config.strict_load && report.has_errors() {
            log::warn!("Strict load refused scene:\n{report}");
            return Err(AgentError::Rejected(report));
        }

        *provider.active_scene_mut() = scene;
        Ok(report)
    }
}

impl Default for SerializationAgent {
    fn default() -> Self {
        Self::new()
    }
}
