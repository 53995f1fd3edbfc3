pub use anyhow::{Context, Result, bail, ensure};
pub use log::{debug, info};
