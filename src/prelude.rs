pub use std::sync::Arc;

pub use anyhow::{anyhow, ensure, Context};
pub use tracing::{debug, error, info, instrument, warn};

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
