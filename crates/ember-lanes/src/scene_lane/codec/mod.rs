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

//! Per-kind component codecs.
//!
//! Each component kind has a fixed set of named fields with a fixed arity.
//! Encoding is total. Decoding validates fields one at a time, in contract
//! order, and stops at the first invalid one; a partially decoded component
//! is never returned.

mod fields;
mod light;
mod material;
mod model;
mod transform;

use ember_core::scene::Document;
use ember_data::ecs::ComponentKind;
use thiserror::Error;

pub(crate) use fields::{scalar_node, vec3_node, FragmentReader};

/// An error raised while decoding a single component fragment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A required key is absent from the fragment (or, for a mesh path, empty).
    #[error("{kind} is missing required field '{field}'")]
    MissingField {
        /// The kind being decoded.
        kind: ComponentKind,
        /// The absent key.
        field: &'static str,
    },
    /// A key is present but its value has the wrong type or arity.
    #[error("{kind} field '{field}' has the wrong type: expected {expected}, found {found}")]
    TypeMismatch {
        /// The kind being decoded.
        kind: ComponentKind,
        /// The offending key, or `<fragment>` when the fragment itself is not a mapping.
        field: &'static str,
        /// What the contract requires.
        expected: &'static str,
        /// What the document holds instead.
        found: String,
    },
}

impl CodecError {
    /// The component kind whose fragment failed to decode.
    pub fn kind(&self) -> ComponentKind {
        match self {
            CodecError::MissingField { kind, .. } | CodecError::TypeMismatch { kind, .. } => *kind,
        }
    }
}

/// Paired encode/decode functions for one component kind.
pub trait ComponentCodec: Sized {
    /// The kind this codec handles.
    const KIND: ComponentKind;

    /// Converts the component into its document fragment. Never fails.
    fn encode(&self) -> Document;

    /// Rebuilds a component from its document fragment.
    fn decode(fragment: &Document) -> Result<Self, CodecError>;
}
