#[cfg(feature = "registry")]
pub mod fmt;
pub mod panic;
#[cfg(feature = "iter")]
pub mod result;
