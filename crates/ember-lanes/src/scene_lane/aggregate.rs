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

//! Converts whole scenes to and from documents.
//!
//! ```text
//! Scene  := sequence<Entity>
//! Entity := { name: string, components: mapping<KindName, Fragment> }
//! ```

use super::{decode_components, encode_components, LoadIssue, LoadProblem, LoadReport, SceneLoad};
use ember_core::scene::{node_kind, Document, DocumentMap};
use ember_data::ecs::Entity;
use ember_data::scene::Scene;
use thiserror::Error;

const NAME_KEY: &str = "name";
const COMPONENTS_KEY: &str = "components";

/// The document is not shaped like a scene at all. Fatal for the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedDocument {
    /// The top-level node is not a sequence.
    #[error("scene document must be a sequence of entities, found a {found}")]
    NotASequence {
        /// Shape of the top-level node.
        found: &'static str,
    },
    /// An entry of the top-level sequence is not a mapping.
    #[error("entity #{index} must be a mapping, found a {found}")]
    EntityNotAMapping {
        /// Position of the entry in the sequence.
        index: usize,
        /// Shape of the entry.
        found: &'static str,
    },
}

/// Converts an entity to its `{ name, components }` mapping.
pub fn entity_to_document(entity: &Entity) -> Document {
    let mut map = DocumentMap::new();
    map.insert(
        NAME_KEY.to_string(),
        Document::String(entity.name().to_string()),
    );
    map.insert(
        COMPONENTS_KEY.to_string(),
        Document::Object(encode_components(entity)),
    );
    Document::Object(map)
}

/// Converts a scene to a document: one entry per entity, in scene order.
pub fn scene_to_document(scene: &Scene) -> Document {
    Document::Array(scene.iter().map(entity_to_document).collect())
}

/// Rebuilds a scene from a document.
///
/// The top-level shape is checked first; if it is not a sequence of mappings
/// nothing is rebuilt. Otherwise every entry yields one entity, in document
/// order, and per-entity problems end up in the returned report.
pub fn scene_from_document(document: &Document) -> Result<SceneLoad, MalformedDocument> {
    let entries = document
        .as_array()
        .ok_or_else(|| MalformedDocument::NotASequence {
            found: node_kind(document),
        })?;

    let mut mappings = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let map = entry
            .as_object()
            .ok_or_else(|| MalformedDocument::EntityNotAMapping {
                index,
                found: node_kind(entry),
            })?;
        mappings.push(map);
    }

    let mut load = SceneLoad::default();
    for (index, map) in mappings.into_iter().enumerate() {
        let entity = entity_from_mapping(index, map, &mut load.report);
        load.scene.push(entity);
    }

    if load.report.is_clean() {
        log::debug!("Rebuilt scene with {} entities", load.scene.len());
    } else {
        log::warn!(
            "Rebuilt scene with {} entities and {} issue(s)",
            load.scene.len(),
            load.report.len()
        );
    }

    Ok(load)
}

fn entity_from_mapping(index: usize, map: &DocumentMap, report: &mut LoadReport) -> Entity {
    let mut problems = Vec::new();
    let mut entity = Entity::default();

    match map.get(NAME_KEY) {
        Some(Document::String(name)) => entity.set_name(name.as_str()),
        Some(other) => problems.push(LoadProblem::InvalidEntityField {
            field: NAME_KEY,
            expected: "a string",
            found: node_kind(other),
        }),
        None => problems.push(LoadProblem::MissingEntityName),
    }

    match map.get(COMPONENTS_KEY) {
        Some(Document::Object(components)) => {
            problems.extend(decode_components(components, &mut entity));
        }
        Some(other) => problems.push(LoadProblem::InvalidEntityField {
            field: COMPONENTS_KEY,
            expected: "a mapping",
            found: node_kind(other),
        }),
        // An entity without components is valid.
        None => {}
    }

    for key in map.keys() {
        if key != NAME_KEY && key != COMPONENTS_KEY {
            log::debug!("Entity #{index}: dropping unrecognised key '{key}'");
        }
    }

    log::debug!(
        "Entity #{index} '{}': {} component(s)",
        entity.name(),
        entity.component_count()
    );

    for problem in problems {
        log::warn!("Entity #{index} '{}': {problem}", entity.name());
        report.push(LoadIssue {
            entity_index: index,
            entity_name: entity.name().to_string(),
            problem,
        });
    }

    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene_lane::{CodecError, Severity};
    use ember_core::math::Vec3;
    use ember_data::ecs::{ComponentKind, Light, Material, Model, Transform};
    use serde_json::json;

    #[test]
    fn test_sun_scenario() {
        // --- 1. SETUP ---
        let mut scene = Scene::new();
        scene.push(Entity::new("Sun").with(Light::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ONE)));

        // --- 2. ACTION ---
        let document = scene_to_document(&scene);

        // --- 3. ASSERTIONS ---
        assert_eq!(
            document,
            json!([{
                "name": "Sun",
                "components": {
                    "Light": { "position": [0.0, 10.0, 0.0], "color": [1.0, 1.0, 1.0] }
                }
            }])
        );

        let load = scene_from_document(&document).unwrap();
        assert!(load.report.is_clean());
        assert_eq!(load.scene.len(), 1);
        let sun = &load.scene.entities()[0];
        assert_eq!(sun.name(), "Sun");
        assert_eq!(sun.light(), Some(&Light::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ONE)));
        for kind in [ComponentKind::Transform, ComponentKind::Material, ComponentKind::Model] {
            assert!(!sun.has(kind), "{kind} slot should be empty");
        }
    }

    #[test]
    fn test_empty_scene() {
        let document = scene_to_document(&Scene::new());
        assert_eq!(document, json!([]));

        let load = scene_from_document(&document).unwrap();
        assert!(load.scene.is_empty());
        assert!(load.report.is_clean());
    }

    #[test]
    fn test_absence_is_preserved() {
        let scene: Scene = [Entity::new("Cube")
            .with(Transform::default())
            .with(Model::new("cube.obj"))]
        .into_iter()
        .collect();

        let document = scene_to_document(&scene);
        assert!(document[0]["components"].get("Material").is_none());

        let load = scene_from_document(&document).unwrap();
        assert!(load.scene.entities()[0].material().is_none());
        assert_eq!(load.scene, scene);
    }

    #[test]
    fn test_entity_order_is_document_order() {
        let document = json!([
            { "name": "Zed", "components": {} },
            { "name": "Alpha", "components": {} },
            { "name": "Mid", "components": {} }
        ]);
        let load = scene_from_document(&document).unwrap();
        let names: Vec<&str> = load.scene.iter().map(Entity::name).collect();
        assert_eq!(names, ["Zed", "Alpha", "Mid"]);
    }

    #[test]
    fn test_top_level_must_be_a_sequence() {
        let err = scene_from_document(&json!({ "name": "Sun" })).unwrap_err();
        assert_eq!(err, MalformedDocument::NotASequence { found: "mapping" });
    }

    #[test]
    fn test_entries_must_be_mappings() {
        let document = json!([{ "name": "Ok", "components": {} }, 42]);
        let err = scene_from_document(&document).unwrap_err();
        assert_eq!(
            err,
            MalformedDocument::EntityNotAMapping {
                index: 1,
                found: "number"
            }
        );
    }

    #[test]
    fn test_partial_load_keeps_going() {
        let document = json!([
            {
                "name": "Broken",
                "components": {
                    "Material": { "ambient": [0, 0, 0], "diffuse": [0, 0, 0], "specular": [0, 0, 0] },
                    "Transform": { "position": [1, 1, 1], "rotation": [0, 0, 0], "scale": [1, 1, 1] }
                }
            },
            {
                "name": "Fine",
                "components": { "Model": { "mesh": "rock.obj" } }
            }
        ]);

        let load = scene_from_document(&document).unwrap();

        assert_eq!(load.scene.len(), 2);
        let broken = &load.scene.entities()[0];
        assert!(broken.material().is_none());
        assert!(broken.transform().is_some());
        assert_eq!(
            load.scene.entities()[1].model(),
            Some(&Model::new("rock.obj"))
        );

        assert_eq!(load.report.len(), 1);
        let issue = &load.report.issues()[0];
        assert_eq!(issue.entity_index, 0);
        assert_eq!(issue.entity_name, "Broken");
        assert_eq!(issue.severity(), Severity::Error);
        assert_eq!(
            issue.problem,
            LoadProblem::Codec(CodecError::MissingField {
                kind: ComponentKind::Material,
                field: "shininess"
            })
        );
    }

    #[test]
    fn test_unknown_kind_beside_transform() {
        let document = json!([{
            "name": "Thing",
            "components": {
                "Foo": {},
                "Transform": { "position": [0, 0, 0], "rotation": [0, 0, 0], "scale": [2, 2, 2] }
            }
        }]);

        let load = scene_from_document(&document).unwrap();

        let thing = &load.scene.entities()[0];
        assert_eq!(thing.transform().map(|t| t.scale), Some(Vec3::splat(2.0)));
        assert!(!load.report.has_errors());
        let warnings: Vec<&LoadIssue> = load.report.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].problem,
            LoadProblem::UnknownComponentKind("Foo".to_string())
        );
    }

    #[test]
    fn test_entity_field_problems_are_recorded() {
        let document = json!([
            { "components": {} },
            { "name": 7 },
            { "name": "Odd", "components": [] }
        ]);

        let load = scene_from_document(&document).unwrap();

        assert_eq!(load.scene.len(), 3);
        assert_eq!(load.scene.entities()[0].name(), "");
        let problems: Vec<&LoadProblem> = load.report.issues().iter().map(|i| &i.problem).collect();
        assert_eq!(
            problems,
            [
                &LoadProblem::MissingEntityName,
                &LoadProblem::InvalidEntityField {
                    field: "name",
                    expected: "a string",
                    found: "number"
                },
                &LoadProblem::InvalidEntityField {
                    field: "components",
                    expected: "a mapping",
                    found: "sequence"
                },
            ]
        );
    }

    #[test]
    fn test_extra_entity_keys_are_dropped() {
        let document = json!([{ "name": "Tagged", "tags": ["a"], "components": {} }]);
        let load = scene_from_document(&document).unwrap();
        assert!(load.report.is_clean());

        let reencoded = scene_to_document(&load.scene);
        assert!(reencoded[0].get("tags").is_none());
    }

    #[test]
    fn test_full_entity_round_trip() {
        let entity = Entity::new("Statue")
            .with(Transform::new(Vec3::new(1.0, 0.0, -4.0), Vec3::new(0.0, 0.5, 0.0), Vec3::ONE))
            .with(Material::default())
            .with(Model::new("statue.obj"))
            .with(Light::white(Vec3::new(0.0, 3.0, 0.0)));
        let scene: Scene = std::iter::once(entity).collect();

        let document = scene_to_document(&scene);
        let load = scene_from_document(&document).unwrap();

        assert_eq!(load.scene, scene);
        assert_eq!(scene_to_document(&load.scene), document);
    }
}
