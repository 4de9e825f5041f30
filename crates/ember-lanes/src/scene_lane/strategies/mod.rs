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

//! Defines the abstract contract for serialization strategies and their associated types.
//!
//! The core of this module is the [`SerializationStrategy`] trait, which gives
//! every byte encoding of the scene document one interface, so the
//! `SerializationAgent` can register and dispatch to them polymorphically.

mod document_lane;

pub use document_lane::*;

use super::{MalformedDocument, SceneLoad};
use ember_data::scene::Scene;
use thiserror::Error;

/// An error that can occur during the serialization process.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// The document could not be written in the strategy's encoding.
    #[error("Serialization failed: {0}")]
    ProcessingFailed(String),
}

/// An error that can occur during the deserialization process.
///
/// Both variants are fatal: no partial scene is produced.
#[derive(Debug, Error)]
pub enum DeserializationError {
    /// The bytes are not valid in the strategy's encoding.
    #[error("Deserialization failed: Invalid format - {0}")]
    InvalidFormat(String),
    /// The bytes decode to a document that is not shaped like a scene.
    #[error("Deserialization failed: {0}")]
    Malformed(#[from] MalformedDocument),
}

/// The abstract contract for a scene serialization strategy `Lane`.
///
/// Each implementation represents one way of turning a [`Scene`] into bytes
/// and back.
pub trait SerializationStrategy: Send + Sync {
    /// Returns the unique, versioned string identifier for this strategy.
    ///
    /// This ID is written to the `SceneHeader` and used by the
    /// `SerializationAgent` to find the right strategy when loading.
    /// Example: `"EM_DOCUMENT_RON_V1"`.
    fn strategy_id(&self) -> &'static str;

    /// Serializes the given `Scene` into a byte payload.
    fn serialize(&self, scene: &Scene) -> Result<Vec<u8>, SerializationError>;

    /// Rebuilds a scene from a byte payload.
    ///
    /// Component-level problems do not fail the call; they are returned in
    /// the [`SceneLoad`]'s report.
    fn deserialize(&self, data: &[u8]) -> Result<SceneLoad, DeserializationError>;
}
