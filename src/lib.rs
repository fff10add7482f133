// Copyright 2024 Saptak Santra
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

//! Netpool - keyed free-list pool for networked spawnable entities
//!
//! Instead of creating and destroying an entity representation on every
//! spawn/despawn message, a [`PoolRegistry`](registry::PoolRegistry) keeps
//! one FIFO queue of idle instances per entity type and recycles them; a
//! [`SpawnInterceptor`](interceptor::SpawnInterceptor) plugs that registry
//! into an external spawn authority's instance-provider contract so the
//! redirection is invisible to the authority.

pub mod config;
pub mod entity;
pub mod error;
pub mod interceptor;
pub mod prelude;
pub mod prototype;
pub mod registry;
pub mod shared;

pub use config::*;
pub use entity::*;
pub use error::*;
pub use interceptor::*;
pub use prototype::*;
pub use registry::*;
pub use shared::*;
