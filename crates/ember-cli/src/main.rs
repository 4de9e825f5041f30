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

// Inspect and convert Ember scene files.
// Run with: ember-scene <command>

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use ember_agents::serialization_agent::SerializationAgent;
use ember_core::scene::SerializationGoal;
use ember_lanes::scene_lane::DocumentEncoding;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "ember-scene", about = "Inspect and convert Ember scene files", version)]
struct Cli {
    /// Serialization settings. Defaults are used when the file does not exist.
    #[arg(long, global = true, default_value = "Ember.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a scene file and print its load report.
    ///
    /// Exits with a non-zero status when the report contains errors.
    Check {
        /// The scene file to check.
        file: PathBuf,
    },
    /// Load a scene file and save it again with another goal or encoding.
    Convert {
        /// The scene file to read.
        input: PathBuf,
        /// Where to write the converted scene.
        output: PathBuf,
        /// human-readable-debug, long-term-stability, fastest-load or smallest-file-size.
        /// Falls back to the configured default goal.
        #[arg(long)]
        goal: Option<SerializationGoal>,
        /// Write this exact encoding instead of choosing one from a goal.
        #[arg(long, value_enum, conflicts_with = "goal")]
        encoding: Option<EncodingArg>,
    },
    /// Print a scene file as its pretty-printed JSON document.
    Dump {
        /// The scene file to print.
        file: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EncodingArg {
    Ron,
    Json,
    Yaml,
    Msgpack,
}

impl From<EncodingArg> for DocumentEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Ron => DocumentEncoding::Ron,
            EncodingArg::Json => DocumentEncoding::Json,
            EncodingArg::Yaml => DocumentEncoding::Yaml,
            EncodingArg::Msgpack => DocumentEncoding::MessagePack,
        }
    }
}

fn main() -> Result<ExitCode> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = commands::load_config(&cli.config)?;

    match cli.command {
        Command::Check { file } => commands::check(&config, &file),
        Command::Convert {
            input,
            output,
            goal,
            encoding,
        } => {
            let encoding = match encoding {
                Some(arg) => DocumentEncoding::from(arg),
                None => SerializationAgent::encoding_for(goal.unwrap_or(config.default_goal)),
            };
            commands::convert(&config, &input, &output, encoding)
        }
        Command::Dump { file } => commands::dump(&config, &file),
    }
}
