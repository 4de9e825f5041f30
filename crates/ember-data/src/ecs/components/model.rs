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

/// A component that gives an entity a mesh to draw.
///
/// Only the path is stored here. Loading the mesh and uploading its buffers is
/// done by the renderer when it sees the component. There is no default: a
/// model without a mesh path cannot be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Path of the mesh resource, relative to the models directory.
    pub mesh_path: String,
}

impl Model {
    /// Creates a model component referencing `mesh_path`.
    pub fn new(mesh_path: impl Into<String>) -> Self {
        Self {
            mesh_path: mesh_path.into(),
        }
    }
}
