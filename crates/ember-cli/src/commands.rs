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

use anyhow::{Context, Result};
use ember_agents::serialization_agent::{SerializationAgent, SerializationConfig};
use ember_core::scene::SceneFile;
use ember_data::scene::Scene;
use ember_lanes::scene_lane::{scene_to_document, DocumentEncoding, LoadReport};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// Reads the serialization settings, or the defaults if `path` does not exist.
pub fn load_config(path: &Path) -> Result<SerializationConfig> {
    if !path.exists() {
        log::debug!("No '{}' found. Using default configuration.", path.display());
        return Ok(SerializationConfig::default());
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at '{}'", path.display()))?;
    let config = SerializationConfig::from_toml_str(&text)
        .with_context(|| format!("Failed to parse TOML from '{}'", path.display()))?;
    log::info!("Loaded configuration from '{}'", path.display());
    Ok(config)
}

fn read_scene_file(path: &Path) -> Result<SceneFile> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read scene file '{}'", path.display()))?;
    SceneFile::from_bytes(&bytes)
        .with_context(|| format!("'{}' is not a valid scene file", path.display()))
}

fn print_report(path: &Path, report: &LoadReport) {
    if report.is_empty() {
        return;
    }
    eprintln!("{}:", path.display());
    eprintln!("{report}");
}

pub fn check(config: &SerializationConfig, path: &Path) -> Result<ExitCode> {
    let agent = SerializationAgent::with_config(config.clone());
    let file = read_scene_file(path)?;
    let load = agent
        .load_scene(&file)
        .with_context(|| format!("Failed to load '{}'", path.display()))?;

    print_report(path, &load.report);
    let errors = load.report.errors().count();
    let warnings = load.report.warnings().count();
    println!(
        "{}: {} entities, {errors} error(s), {warnings} warning(s)",
        path.display(),
        load.scene.len()
    );

    Ok(if errors > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

pub fn convert(
    config: &SerializationConfig,
    input: &Path,
    output: &Path,
    encoding: DocumentEncoding,
) -> Result<ExitCode> {
    let agent = SerializationAgent::with_config(config.clone());
    let file = read_scene_file(input)?;

    // Goes through the active-scene path so `strict_load` applies.
    let mut scene = Scene::new();
    let report = agent
        .load_into(&mut scene, &file)
        .with_context(|| format!("Failed to load '{}'", input.display()))?;
    print_report(input, &report);

    let converted = agent.save_scene_as(&scene, encoding)?;
    fs::write(output, converted.to_bytes())
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    println!(
        "{} -> {} ({}, {} entities)",
        input.display(),
        output.display(),
        encoding.strategy_id(),
        scene.len()
    );
    Ok(ExitCode::SUCCESS)
}

pub fn dump(config: &SerializationConfig, path: &Path) -> Result<ExitCode> {
    let agent = SerializationAgent::with_config(config.clone());
    let file = read_scene_file(path)?;
    let load = agent
        .load_scene(&file)
        .with_context(|| format!("Failed to load '{}'", path.display()))?;

    print_report(path, &load.report);
    let text = serde_json::to_string_pretty(&scene_to_document(&load.scene))?;
    println!("{text}");
    Ok(ExitCode::SUCCESS)
}
