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

use anyhow::Result;
use ember_agents::serialization_agent::{AgentError, SerializationAgent, SerializationConfig};
use ember_core::math::Vec3;
use ember_core::scene::{SceneFile, SceneFormatError, SerializationGoal};
use ember_data::ecs::{ComponentKind, Entity, Light, Material, Model, Transform};
use ember_data::scene::Scene;
use ember_lanes::scene_lane::{
    scene_to_document, CodecError, DocumentEncoding, LoadProblem, Severity,
};
use serde_json::json;
use std::fs;
use tempfile::tempdir;

// --- Test Setup ---
fn editor_scene() -> Scene {
    [
        Entity::new("Crate")
            .with(Transform::new(
                Vec3::new(2.0, 0.5, -1.0),
                Vec3::new(0.0, 0.785, 0.0),
                Vec3::splat(0.5),
            ))
            .with(Model::new("meshes/crate.obj"))
            .with(Material::new(
                Vec3::splat(0.2),
                Vec3::new(0.6, 0.4, 0.2),
                Vec3::splat(0.3),
                16.0,
            )),
        Entity::new("Sun").with(Light::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(1.0, 1.0, 1.0))),
        Entity::new("Marker").with(Transform::identity()),
    ]
    .into_iter()
    .collect()
}

fn json_file(document: serde_json::Value) -> SceneFile {
    let payload = serde_json::to_vec(&document).unwrap();
    SceneFile::new(DocumentEncoding::Json.strategy_id(), payload).unwrap()
}
// ---

#[test]
fn test_scene_file_round_trip_on_disk() -> Result<()> {
    // --- 1. Setup ---
    let dir = tempdir()?;
    let agent = SerializationAgent::new();
    let source = editor_scene();

    for goal in SerializationGoal::ALL {
        // --- 2. Save to a REAL file and read it back ---
        let path = dir.path().join(format!("{goal}.scene"));
        fs::write(&path, agent.save_scene(&source, goal)?.to_bytes())?;

        let file = SceneFile::from_bytes(&fs::read(&path)?)?;
        let load = agent.load_scene(&file)?;

        // --- 3. Assertions ---
        assert!(load.report.is_clean(), "{goal}: {}", load.report);
        assert_eq!(load.scene, source, "{goal}");
    }
    Ok(())
}

#[test]
fn test_binary_goals_are_smaller_than_pretty_text() -> Result<()> {
    let agent = SerializationAgent::new();
    let scene = editor_scene();

    let text = agent.save_scene(&scene, SerializationGoal::LongTermStability)?;
    let compact = agent.save_scene(&scene, SerializationGoal::SmallestFileSize)?;

    assert!(compact.payload.len() < text.payload.len());
    Ok(())
}

#[test]
fn test_truncated_file_is_rejected_by_the_container() -> Result<()> {
    let agent = SerializationAgent::new();
    let mut bytes = agent
        .save_scene(&editor_scene(), SerializationGoal::FastestLoad)?
        .to_bytes();
    bytes.truncate(bytes.len() - 3);

    assert!(matches!(
        SceneFile::from_bytes(&bytes),
        Err(SceneFormatError::PayloadLengthMismatch { .. })
    ));
    Ok(())
}

#[test]
fn test_sun_light_scenario() -> Result<()> {
    let file = json_file(json!([
        {
            "name": "Sun",
            "components": {
                "Light": { "position": [0.0, 10.0, 0.0], "color": [1.0, 1.0, 1.0] }
            }
        }
    ]));

    let load = SerializationAgent::new().load_scene(&file)?;

    assert!(load.report.is_clean());
    assert_eq!(load.scene.len(), 1);
    let sun = &load.scene.entities()[0];
    assert_eq!(sun.name(), "Sun");
    assert_eq!(sun.component_count(), 1);
    assert_eq!(
        sun.light(),
        Some(&Light::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ONE))
    );
    Ok(())
}

#[test]
fn test_empty_scene_saves_as_empty_sequence() -> Result<()> {
    let agent = SerializationAgent::new();
    let file = agent.save_scene(&Scene::new(), SerializationGoal::LongTermStability)?;

    let payload: serde_json::Value = serde_json::from_slice(&file.payload)?;
    assert_eq!(payload, json!([]));
    assert!(agent.load_scene(&file)?.scene.is_empty());
    Ok(())
}

#[test]
fn test_unknown_kind_beside_valid_transform() -> Result<()> {
    let file = json_file(json!([
        {
            "name": "Prop",
            "components": {
                "Transform": {
                    "position": [1.0, 2.0, 3.0],
                    "rotation": [0.0, 0.0, 0.0],
                    "scale": [1.0, 1.0, 1.0]
                },
                "Foo": { "bar": 1 }
            }
        }
    ]));

    let load = SerializationAgent::new().load_scene(&file)?;

    let prop = &load.scene.entities()[0];
    assert_eq!(
        prop.transform(),
        Some(&Transform::from_position(Vec3::new(1.0, 2.0, 3.0)))
    );
    assert_eq!(prop.component_count(), 1);

    let issues = load.report.issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity(), Severity::Warning);
    assert_eq!(
        issues[0].problem,
        LoadProblem::UnknownComponentKind("Foo".to_string())
    );
    Ok(())
}

#[test]
fn test_missing_shininess_drops_material_only() -> Result<()> {
    let file = json_file(json!([
        {
            "name": "Shiny",
            "components": {
                "Material": {
                    "ambient": [0.1, 0.1, 0.1],
                    "diffuse": [0.7, 0.7, 0.7],
                    "specular": [0.5, 0.5, 0.5]
                },
                "Model": { "mesh": "sphere.obj" }
            }
        }
    ]));

    let load = SerializationAgent::new().load_scene(&file)?;

    let shiny = &load.scene.entities()[0];
    assert!(!shiny.has(ComponentKind::Material));
    assert_eq!(shiny.model(), Some(&Model::new("sphere.obj")));
    assert_eq!(
        load.report.issues()[0].problem,
        LoadProblem::Codec(CodecError::MissingField {
            kind: ComponentKind::Material,
            field: "shininess",
        })
    );
    Ok(())
}

#[test]
fn test_strict_config_refuses_partial_scene() -> Result<()> {
    let config = SerializationConfig::from_toml_str("strict_load = true")?;
    let agent = SerializationAgent::with_config(config);
    let file = json_file(json!([
        { "name": "Broken", "components": { "Light": { "position": [0.0, 1.0] } } }
    ]));

    let mut active = editor_scene();
    let err = agent.load_into(&mut active, &file).unwrap_err();

    assert!(matches!(err, AgentError::Rejected(_)));
    assert_eq!(active, editor_scene());
    Ok(())
}

#[test]
fn test_strict_config_accepts_warnings() -> Result<()> {
    let config = SerializationConfig::from_toml_str("strict_load = true")?;
    let agent = SerializationAgent::with_config(config);
    let file = json_file(json!([
        { "name": "Future", "components": { "ParticleEmitter": {} } }
    ]));

    let mut active = Scene::new();
    let report = agent.load_into(&mut active, &file)?;

    assert!(!report.has_errors());
    assert_eq!(report.warnings().count(), 1);
    assert_eq!(active.find("Future").map(Entity::component_count), Some(0));
    Ok(())
}

#[test]
fn test_malformed_document_is_fatal() {
    let agent = SerializationAgent::new();
    let file = json_file(json!([{ "name": "Ok" }, 42]));

    let mut active = editor_scene();
    let err = agent.load_into(&mut active, &file).unwrap_err();

    assert!(matches!(err, AgentError::Deserialization(_)), "{err}");
    assert_eq!(active, editor_scene());
}

#[test]
fn test_saved_json_matches_document_contract() -> Result<()> {
    let agent = SerializationAgent::new();
    let scene = editor_scene();
    let file = agent.save_scene(&scene, SerializationGoal::LongTermStability)?;

    let payload: serde_json::Value = serde_json::from_slice(&file.payload)?;
    assert_eq!(payload, scene_to_document(&scene));
    assert_eq!(
        payload[0]["components"]["Model"],
        json!({ "mesh": "meshes/crate.obj" })
    );
    assert!(payload[1]["components"].get("Transform").is_none());
    Ok(())
}
