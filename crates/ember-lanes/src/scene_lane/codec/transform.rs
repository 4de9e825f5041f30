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

use super::{vec3_node, CodecError, ComponentCodec, FragmentReader};
use ember_core::scene::{Document, DocumentMap};
use ember_data::ecs::{ComponentKind, Transform};

impl ComponentCodec for Transform {
    const KIND: ComponentKind = ComponentKind::Transform;

    fn encode(&self) -> Document {
        let mut fields = DocumentMap::new();
        fields.insert("position".to_string(), vec3_node(self.position));
        fields.insert("rotation".to_string(), vec3_node(self.rotation));
        fields.insert("scale".to_string(), vec3_node(self.scale));
        Document::Object(fields)
    }

    fn decode(fragment: &Document) -> Result<Self, CodecError> {
        let reader = FragmentReader::new(Self::KIND, fragment)?;
        Ok(Transform {
            position: reader.vec3("position")?,
            rotation: reader.vec3("rotation")?,
            scale: reader.vec3("scale")?,
        })
    }
}
