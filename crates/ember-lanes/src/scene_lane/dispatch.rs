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

//! Routes components to their codecs.
//!
//! Both directions are exhaustive `match`es over closed enums with no
//! wildcard arm: adding a component kind does not compile until it is wired
//! to a codec here.

use super::{CodecError, ComponentCodec, LoadProblem};
use ember_core::scene::{Document, DocumentMap};
use ember_data::ecs::{Component, ComponentKind, Entity, Light, Material, Model, Transform};

/// Encodes one component with the codec of its kind.
pub fn encode_component(component: &Component) -> Document {
    match component {
        Component::Transform(transform) => transform.encode(),
        Component::Material(material) => material.encode(),
        Component::Model(model) => model.encode(),
        Component::Light(light) => light.encode(),
    }
}

/// Decodes one fragment with the codec of `kind`.
pub fn decode_component(kind: ComponentKind, fragment: &Document) -> Result<Component, CodecError> {
    match kind {
        ComponentKind::Transform => Transform::decode(fragment).map(Component::from),
        ComponentKind::Material => Material::decode(fragment).map(Component::from),
        ComponentKind::Model => Model::decode(fragment).map(Component::from),
        ComponentKind::Light => Light::decode(fragment).map(Component::from),
    }
}

/// Builds the `components` mapping of an entity.
///
/// One key per occupied slot, in kind ordinal order. Empty slots emit nothing.
pub fn encode_components(entity: &Entity) -> DocumentMap {
    entity
        .components()
        .map(|component| {
            (
                component.kind().name().to_string(),
                encode_component(component),
            )
        })
        .collect()
}

/// Fills `entity` from a `components` mapping.
///
/// Keys are processed in document order. A fragment that fails to decode is
/// dropped and reported; an unknown key is skipped and reported. Neither stops
/// the remaining keys from being processed.
pub fn decode_components(components: &DocumentMap, entity: &mut Entity) -> Vec<LoadProblem> {
    let mut problems = Vec::new();

    for (key, fragment) in components {
        let Some(kind) = ComponentKind::from_name(key) else {
            problems.push(LoadProblem::UnknownComponentKind(key.clone()));
            continue;
        };

        match decode_component(kind, fragment) {
            Ok(component) => {
                entity.insert(component);
            }
            Err(err) => problems.push(LoadProblem::Codec(err)),
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::math::Vec3;
    use serde_json::json;

    fn components_of(value: Document) -> DocumentMap {
        match value {
            Document::Object(map) => map,
            other => panic!("expected a mapping, got {other}"),
        }
    }

    #[test]
    fn test_decode_component_matches_kind() {
        for kind in ComponentKind::ALL {
            let fragment = match kind {
                ComponentKind::Transform => Transform::default().encode(),
                ComponentKind::Material => Material::default().encode(),
                ComponentKind::Model => Model::new("cube.obj").encode(),
                ComponentKind::Light => Light::default().encode(),
            };
            let component = decode_component(kind, &fragment).unwrap();
            assert_eq!(component.kind(), kind);
        }
    }

    #[test]
    fn test_empty_slots_emit_nothing() {
        let entity = Entity::new("Lamp").with(Light::default());
        let map = encode_components(&entity);
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("Light"));
        assert!(!map.contains_key("Material"));
    }

    #[test]
    fn test_encode_order_follows_kind_order() {
        let entity = Entity::new("Prop")
            .with(Light::default())
            .with(Transform::default());
        let keys: Vec<String> = encode_components(&entity).keys().cloned().collect();
        assert_eq!(keys, ["Transform", "Light"]);
    }

    #[test]
    fn test_unknown_kind_is_skipped_not_fatal() {
        let components = components_of(json!({
            "Foo": { "bar": 1 },
            "Transform": { "position": [1, 2, 3], "rotation": [0, 0, 0], "scale": [1, 1, 1] }
        }));
        let mut entity = Entity::new("Thing");

        let problems = decode_components(&components, &mut entity);

        assert_eq!(
            problems,
            vec![LoadProblem::UnknownComponentKind("Foo".to_string())]
        );
        assert_eq!(
            entity.transform().map(|t| t.position),
            Some(Vec3::new(1.0, 2.0, 3.0))
        );
        assert_eq!(entity.component_count(), 1);
    }

    #[test]
    fn test_bad_fragment_is_dropped_and_others_survive() {
        let components = components_of(json!({
            "Material": { "ambient": [0, 0, 0], "diffuse": [0, 0, 0], "specular": [0, 0, 0] },
            "Light": { "position": [0, 1, 0], "color": [1, 1, 1] }
        }));
        let mut entity = Entity::new("Lamp");

        let problems = decode_components(&components, &mut entity);

        assert_eq!(problems.len(), 1);
        assert!(matches!(
            &problems[0],
            LoadProblem::Codec(CodecError::MissingField {
                kind: ComponentKind::Material,
                field: "shininess"
            })
        ));
        assert!(entity.material().is_none());
        assert!(entity.light().is_some());
    }
}
