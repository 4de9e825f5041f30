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

//! Scene persistence.
//!
//! Data flows Scene → aggregator → dispatcher → per-kind codec when saving,
//! and document → aggregator → dispatcher → codec → entity slots when loading.
//! The [`strategies`] module frames the resulting document as bytes.

mod aggregate;
mod codec;
mod dispatch;
mod report;
pub mod strategies;

pub use aggregate::*;
pub use codec::*;
pub use dispatch::*;
pub use report::*;
pub use strategies::*;
