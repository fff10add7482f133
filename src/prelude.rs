//! Convenient re-exports of commonly used types.
//!
//! The prelude can be imported with:
//! ```
//! use netpool::prelude::*;
//! ```

pub use crate::config::{PoolConfig, PoolSizing};
pub use glam::{Quat, Vec3};
pub use crate::entity::{ClientId, EntityTypeId, EntryState, PoolEntryId, PooledEntity};
pub use crate::error::{PoolError, Result};
pub use crate::interceptor::{bind_pool, InstanceProvider, SpawnAuthority, SpawnInterceptor};
pub use crate::prototype::EntityPrototype;
pub use crate::registry::PoolRegistry;
pub use crate::shared::SharedPoolRegistry;
