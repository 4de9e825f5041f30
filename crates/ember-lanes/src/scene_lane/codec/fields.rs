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

//! Field-level helpers shared by the codecs.

use super::CodecError;
use ember_core::math::Vec3;
use ember_core::scene::{node_kind, Document, DocumentMap};
use ember_data::ecs::ComponentKind;

const OUT_OF_RANGE: &str = "a number outside the f32 range";

/// Narrows a document number to `f32`. Values that would overflow to infinity are refused.
fn narrow(value: f64) -> Option<f32> {
    let narrowed = value as f32;
    narrowed.is_finite().then_some(narrowed)
}

/// Encodes a scalar. Non-finite values have no document representation and become `null`.
pub(crate) fn scalar_node(value: f32) -> Document {
    serde_json::Number::from_f64(f64::from(value))
        .map(Document::Number)
        .unwrap_or(Document::Null)
}

/// Encodes a vector as a 3-element sequence in (x, y, z) / (R, G, B) order.
pub(crate) fn vec3_node(value: Vec3) -> Document {
    Document::Array(value.to_array().into_iter().map(scalar_node).collect())
}

/// Read access to the fields of one component fragment.
pub(crate) struct FragmentReader<'a> {
    kind: ComponentKind,
    fields: &'a DocumentMap,
}

impl<'a> FragmentReader<'a> {
    /// Checks that `fragment` is a mapping.
    pub(crate) fn new(kind: ComponentKind, fragment: &'a Document) -> Result<Self, CodecError> {
        match fragment {
            Document::Object(fields) => Ok(Self { kind, fields }),
            other => Err(CodecError::TypeMismatch {
                kind,
                field: "<fragment>",
                expected: "a mapping",
                found: node_kind(other).to_string(),
            }),
        }
    }

    fn field(&self, field: &'static str) -> Result<&'a Document, CodecError> {
        self.fields.get(field).ok_or(CodecError::MissingField {
            kind: self.kind,
            field,
        })
    }

    fn mismatch(&self, field: &'static str, expected: &'static str, found: String) -> CodecError {
        CodecError::TypeMismatch {
            kind: self.kind,
            field,
            expected,
            found,
        }
    }

    /// Reads a real scalar. Integers coerce; strings, booleans and nulls do not.
    pub(crate) fn scalar(&self, field: &'static str) -> Result<f32, CodecError> {
        const EXPECTED: &str = "a number";

        let node = self.field(field)?;
        let value = node
            .as_f64()
            .ok_or_else(|| self.mismatch(field, EXPECTED, node_kind(node).to_string()))?;
        narrow(value).ok_or_else(|| self.mismatch(field, EXPECTED, OUT_OF_RANGE.to_string()))
    }

    /// Reads a sequence of exactly three reals.
    pub(crate) fn vec3(&self, field: &'static str) -> Result<Vec3, CodecError> {
        const EXPECTED: &str = "a sequence of 3 numbers";

        let node = self.field(field)?;
        let items = node
            .as_array()
            .ok_or_else(|| self.mismatch(field, EXPECTED, node_kind(node).to_string()))?;
        if items.len() != 3 {
            return Err(self.mismatch(
                field,
                EXPECTED,
                format!("a sequence of {} elements", items.len()),
            ));
        }

        let mut out = [0.0f32; 3];
        for (slot, item) in out.iter_mut().zip(items) {
            let value = item.as_f64().ok_or_else(|| {
                self.mismatch(
                    field,
                    EXPECTED,
                    format!("a sequence containing a {}", node_kind(item)),
                )
            })?;
            *slot = narrow(value).ok_or_else(|| {
                self.mismatch(
                    field,
                    EXPECTED,
                    format!("a sequence containing {OUT_OF_RANGE}"),
                )
            })?;
        }
        Ok(Vec3::from_array(out))
    }

    /// Reads a non-empty string. An empty string counts as a missing field.
    pub(crate) fn non_empty_str(&self, field: &'static str) -> Result<&'a str, CodecError> {
        let node = self.field(field)?;
        match node.as_str() {
            Some("") => Err(CodecError::MissingField {
                kind: self.kind,
                field,
            }),
            Some(s) => Ok(s),
            None => Err(self.mismatch(field, "a string", node_kind(node).to_string())),
        }
    }
}
