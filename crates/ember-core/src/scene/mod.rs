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

//! Groups the persistence contracts for the logical concept of a "Scene".
//!
//! A scene is an ordered collection of named entities. This module holds the
//! format-agnostic document tree scenes are converted to, the goals a caller
//! can express when saving, and the container every scene file is wrapped in.

mod document;
mod format;
mod serialization;

pub use document::*;
pub use format::*;
pub use serialization::*;
