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

//! Error types

use crate::entity::{EntityTypeId, PoolEntryId};
use std::fmt;

/// Pool error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Acquire or release for a type never passed to the registry
    UnregisteredType(EntityTypeId),

    /// Two configs for the same type at registry construction
    DuplicateRegistration(EntityTypeId),

    /// Handle does not resolve to a live pool entry
    StaleHandle(PoolEntryId),

    /// Release of an entry that is already on its idle queue
    AlreadyIdle(PoolEntryId),

    /// Growth denied: the type's configured ceiling is reached
    CapacityExhausted {
        type_id: EntityTypeId,
        capacity: usize,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::UnregisteredType(type_id) => {
                write!(f, "Entity type {type_id} was never registered")
            }
            PoolError::DuplicateRegistration(type_id) => {
                write!(f, "Entity type {type_id} registered more than once")
            }
            PoolError::StaleHandle(handle) => {
                write!(f, "Handle {handle:?} does not resolve to a live entry")
            }
            PoolError::AlreadyIdle(handle) => {
                write!(f, "Entry {handle:?} is already idle (double release)")
            }
            PoolError::CapacityExhausted { type_id, capacity } => {
                write!(f, "Pool for {type_id} exhausted: ceiling is {capacity}")
            }
        }
    }
}

impl std::error::Error for PoolError {}

/// Result type alias
pub type Result<T> = std::result::Result<T, PoolError>;
