pub use std::result::Result as StdResult;
pub use std::sync::Arc;
pub use std::time::Duration as StdDuration;

pub use anyhow::{anyhow, Context};
pub use async_trait::async_trait;
pub use tracing::{debug, error, info, instrument, warn};

pub type AHashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;
pub type Result<T = (), E = anyhow::Error> = StdResult<T, E>;
