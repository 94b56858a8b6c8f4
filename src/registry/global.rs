use std::sync::OnceLock;

use tracing::debug;

use super::{AlreadyInstalled, Registry};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Returns the process-wide registry. Unless [`install`] was called first, this is initialized
/// with [`Registry::defaults`] on first use. It is never dropped.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(|| {
        debug!("initializing global registry with built-in operations");
        Registry::defaults()
    })
}

/// Makes `registry` the process-wide registry returned by [`global`].
///
/// # Errors
/// Returns [`AlreadyInstalled`] if a registry was already installed, or if [`global`] has already
/// been called and initialized the defaults. The registry is immutable from then on.
pub fn install(registry: Registry) -> Result<(), AlreadyInstalled> {
    let entries = registry.len();
    GLOBAL.set(registry).map_err(|_| AlreadyInstalled)?;
    debug!(entries, "installed global registry");
    Ok(())
}
