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

//! Material fragment: `{ ambient: [r,g,b], diffuse: [r,g,b], specular: [r,g,b], shininess: f }`.

use super::{scalar_node, vec3_node, CodecError, ComponentCodec, FragmentReader};
use ember_core::scene::{Document, DocumentMap};
use ember_data::ecs::{ComponentKind, Material};

impl ComponentCodec for Material {
    const KIND: ComponentKind = ComponentKind::Material;

    fn encode(&self) -> Document {
        let mut fields = DocumentMap::new();
        fields.insert("ambient".to_string(), vec3_node(self.ambient));
        fields.insert("diffuse".to_string(), vec3_node(self.diffuse));
        fields.insert("specular".to_string(), vec3_node(self.specular));
        fields.insert("shininess".to_string(), scalar_node(self.shininess));
        Document::Object(fields)
    }

    fn decode(fragment: &Document) -> Result<Self, CodecError> {
        let reader = FragmentReader::new(Self::KIND, fragment)?;
        Ok(Material {
            ambient: reader.vec3("ambient")?,
            diffuse: reader.vec3("diffuse")?,
            specular: reader.vec3("specular")?,
            shininess: reader.scalar("shininess")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::math::Vec3;
    use serde_json::json;

    fn brass() -> Material {
        Material::new(
            Vec3::new(0.329412, 0.223529, 0.027451),
            Vec3::new(0.780392, 0.568627, 0.113725),
            Vec3::new(0.992157, 0.941176, 0.807843),
            27.8974,
        )
    }

    #[test]
    fn test_material_round_trip() {
        let material = brass();
        assert_eq!(Material::decode(&material.encode()), Ok(material));
    }

    #[test]
    fn test_material_re_encode_is_idempotent() {
        let encoded = brass().encode();
        let decoded = Material::decode(&encoded).unwrap();
        assert_eq!(decoded.encode(), encoded);
    }

    #[test]
    fn test_material_fragment_layout() {
        let fragment = Material::new(Vec3::new(1.0, 0.5, 0.25), Vec3::ZERO, Vec3::ONE, 8.0).encode();
        assert_eq!(
            fragment,
            json!({
                "ambient": [1.0, 0.5, 0.25],
                "diffuse": [0.0, 0.0, 0.0],
                "specular": [1.0, 1.0, 1.0],
                "shininess": 8.0
            })
        );
        let keys: Vec<&str> = fragment
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["ambient", "diffuse", "specular", "shininess"]);
    }

    #[test]
    fn test_missing_shininess() {
        let fragment = json!({
            "ambient": [0.1, 0.1, 0.1],
            "diffuse": [0.5, 0.5, 0.5],
            "specular": [1.0, 1.0, 1.0]
        });
        assert_eq!(
            Material::decode(&fragment),
            Err(CodecError::MissingField {
                kind: ComponentKind::Material,
                field: "shininess",
            })
        );
    }

    #[test]
    fn test_color_arity_is_checked() {
        for bad in [json!([1.0, 1.0]), json!([1.0, 1.0, 1.0, 1.0])] {
            let fragment = json!({
                "ambient": [0.1, 0.1, 0.1],
                "diffuse": bad,
                "specular": [1.0, 1.0, 1.0],
                "shininess": 4.0
            });
            let err = Material::decode(&fragment).unwrap_err();
            assert!(
                matches!(err, CodecError::TypeMismatch { field: "diffuse", .. }),
                "unexpected error: {err}"
            );
        }
    }

    #[test]
    fn test_first_invalid_field_is_reported() {
        // Both `ambient` and `shininess` are wrong; `ambient` comes first.
        let fragment = json!({
            "ambient": "red",
            "diffuse": [0.5, 0.5, 0.5],
            "specular": [1.0, 1.0, 1.0],
            "shininess": "shiny"
        });
        let err = Material::decode(&fragment).unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { field: "ambient", .. }));
    }

    #[test]
    fn test_string_shininess_is_a_mismatch() {
        let mut fragment = brass().encode();
        fragment["shininess"] = json!("32");
        assert!(matches!(
            Material::decode(&fragment),
            Err(CodecError::TypeMismatch {
                field: "shininess",
                ..
            })
        ));
    }

    #[test]
    fn test_overflowing_shininess_is_refused() {
        let mut fragment = brass().encode();
        fragment["shininess"] = json!(1e39);
        assert!(matches!(
            Material::decode(&fragment),
            Err(CodecError::TypeMismatch {
                field: "shininess",
                ..
            })
        ));
    }
}
