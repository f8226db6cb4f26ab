//! Process-wide [`Resources`] handle
//!
//! Binaries and tests that cannot pass a [`Resources`] around may install one
//! here. Installing again replaces the previous instance; callers already
//! holding an `Arc` keep the old one.

use std::sync::{Arc, PoisonError, RwLock};

use crate::Result;
use crate::resources::Resources;
use crate::tree::ConfigTree;

static INSTANCE: RwLock<Option<Arc<Resources>>> = RwLock::new(None);

/// Build [`Resources`] from `config` and install it.
pub fn from_config(config: &ConfigTree) -> Result<()> {
    install(Resources::new(config)?);
    Ok(())
}

/// Merge `configs` in order, build [`Resources`] and install it.
pub fn from_configs(configs: &[ConfigTree]) -> Result<()> {
    install(Resources::from_configs(configs)?);
    Ok(())
}

/// The installed instance, or `None` before the first successful install.
pub fn get() -> Option<Arc<Resources>> {
    INSTANCE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// The normalized configuration of the installed instance.
pub fn config() -> Option<ConfigTree> {
    get().map(|resources| resources.config().clone())
}

fn install(resources: Resources) {
    let mut instance = INSTANCE.write().unwrap_or_else(PoisonError::into_inner);
    *instance = Some(Arc::new(resources));
}
