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

//! Entities and their components.
//!
//! The set of component kinds is closed: [`ComponentKind`] enumerates it and
//! [`Component`] is a tagged union with exactly one variant per kind. An
//! [`Entity`] stores at most one component per kind in a fixed array indexed
//! by the kind's ordinal.

mod component;
mod components;
mod entity;

pub use component::*;
pub use components::*;
pub use entity::*;
