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

use super::Scene;

/// Gives the persistence layer access to the scene currently being edited.
///
/// Implemented by whatever owns the editor's scenes. Only the active scene is
/// exposed; which scene is selected is the owner's business.
pub trait SceneProvider {
    /// The currently selected scene. Read access is enough to save it.
    fn active_scene(&self) -> &Scene;

    /// Mutable access to the currently selected scene, used to load into it.
    fn active_scene_mut(&mut self) -> &mut Scene;
}

impl SceneProvider for Scene {
    fn active_scene(&self) -> &Scene {
        self
    }

    fn active_scene_mut(&mut self) -> &mut Scene {
        self
    }
}
