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

//! The structured document tree used as the serialization medium.
//!
//! A document node is a scalar, an ordered sequence of nodes, or an ordered
//! mapping from string keys to nodes. Any tree-shaped encoding (RON, JSON,
//! MessagePack) can carry it, so the tree itself stays format-agnostic.

/// A node of a structured document.
///
/// Mappings keep insertion order (`serde_json`'s `preserve_order` feature),
/// so encoding the same tree twice always yields the same key order.
pub type Document = serde_json::Value;

/// An ordered mapping from string keys to document nodes.
pub type DocumentMap = serde_json::Map<String, Document>;

/// Returns a short, human-readable name for the shape of a document node.
///
/// Used in diagnostics when a node does not have the expected shape.
pub fn node_kind(node: &Document) -> &'static str {
    match node {
        Document::Null => "null",
        Document::Bool(_) => "boolean",
        Document::Number(_) => "number",
        Document::String(_) => "string",
        Document::Array(_) => "sequence",
        Document::Object(_) => "mapping",
    }
}
