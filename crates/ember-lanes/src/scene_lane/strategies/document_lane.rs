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

//! A serialization strategy that writes the scene document in a tree-shaped encoding.

use super::{DeserializationError, SerializationError, SerializationStrategy};
use crate::scene_lane::{scene_from_document, scene_to_document, SceneLoad};
use ember_core::scene::Document;
use ember_data::scene::Scene;
use std::fmt;

/// The byte encodings a scene document can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentEncoding {
    /// Rusty Object Notation. Readable and diff-friendly.
    Ron,
    /// JSON. Widely supported by external tools.
    Json,
    /// YAML. Block layout, the format of scene files from earlier editor builds.
    Yaml,
    /// MessagePack. Compact binary, quickest to parse.
    MessagePack,
}

impl DocumentEncoding {
    /// Every encoding, in declaration order.
    pub const ALL: [DocumentEncoding; 4] = [
        DocumentEncoding::Ron,
        DocumentEncoding::Json,
        DocumentEncoding::Yaml,
        DocumentEncoding::MessagePack,
    ];

    /// The strategy id written to scene file headers for this encoding.
    pub const fn strategy_id(self) -> &'static str {
        match self {
            DocumentEncoding::Ron => "EM_DOCUMENT_RON_V1",
            DocumentEncoding::Json => "EM_DOCUMENT_JSON_V1",
            DocumentEncoding::Yaml => "EM_DOCUMENT_YAML_V1",
            DocumentEncoding::MessagePack => "EM_DOCUMENT_MSGPACK_V1",
        }
    }

    /// Looks up an encoding by strategy id.
    pub fn from_strategy_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.strategy_id() == id)
    }

    /// Returns `true` for the text encodings.
    pub const fn is_text(self) -> bool {
        match self {
            DocumentEncoding::Ron | DocumentEncoding::Json | DocumentEncoding::Yaml => true,
            DocumentEncoding::MessagePack => false,
        }
    }
}

/// Writes `document` as bytes in `encoding`.
///
/// `pretty` only affects RON and JSON; YAML is always written in block style.
pub fn encode_document(
    document: &Document,
    encoding: DocumentEncoding,
    pretty: bool,
) -> Result<Vec<u8>, SerializationError> {
    match encoding {
        DocumentEncoding::Ron if pretty => {
            let pretty_config = ron::ser::PrettyConfig::default().indentor("  ".to_string());
            ron::ser::to_string_pretty(document, pretty_config)
                .map(String::into_bytes)
                .map_err(processing_failed)
        }
        DocumentEncoding::Ron => ron::ser::to_string(document)
            .map(String::into_bytes)
            .map_err(processing_failed),
        DocumentEncoding::Json if pretty => {
            serde_json::to_vec_pretty(document).map_err(processing_failed)
        }
        DocumentEncoding::Json => serde_json::to_vec(document).map_err(processing_failed),
        DocumentEncoding::Yaml => serde_yaml::to_string(document)
            .map(String::into_bytes)
            .map_err(processing_failed),
        DocumentEncoding::MessagePack => rmp_serde::to_vec(document).map_err(processing_failed),
    }
}

/// Parses bytes written in `encoding` back into a document.
pub fn decode_document(
    data: &[u8],
    encoding: DocumentEncoding,
) -> Result<Document, DeserializationError> {
    match encoding {
        DocumentEncoding::Ron => ron::de::from_bytes(data).map_err(invalid_format),
        DocumentEncoding::Json => serde_json::from_slice(data).map_err(invalid_format),
        DocumentEncoding::Yaml => serde_yaml::from_slice(data).map_err(invalid_format),
        DocumentEncoding::MessagePack => rmp_serde::from_slice(data).map_err(invalid_format),
    }
}

fn processing_failed(err: impl fmt::Display) -> SerializationError {
    SerializationError::ProcessingFailed(err.to_string())
}

fn invalid_format(err: impl fmt::Display) -> DeserializationError {
    DeserializationError::InvalidFormat(err.to_string())
}

/// A serialization strategy built on the stable document representation.
///
/// The scene is first converted to a document by the aggregator, then written
/// in the lane's encoding. Loading reverses both steps.
#[derive(Debug, Clone)]
pub struct DocumentLane {
    encoding: DocumentEncoding,
    pretty: bool,
}

impl DocumentLane {
    /// Creates a lane writing `encoding`, pretty-printed for text encodings.
    pub fn new(encoding: DocumentEncoding) -> Self {
        Self {
            encoding,
            pretty: true,
        }
    }

    /// Sets whether text encodings are pretty-printed.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// The encoding this lane writes.
    pub fn encoding(&self) -> DocumentEncoding {
        self.encoding
    }
}

impl SerializationStrategy for DocumentLane {
    fn strategy_id(&self) -> &'static str {
        self.encoding.strategy_id()
    }

    fn serialize(&self, scene: &Scene) -> Result<Vec<u8>, SerializationError> {
        let document = scene_to_document(scene);
        encode_document(&document, self.encoding, self.pretty)
    }

    fn deserialize(&self, data: &[u8]) -> Result<SceneLoad, DeserializationError> {
        let document = decode_document(data, self.encoding)?;
        Ok(scene_from_document(&document)?)
    }
}
