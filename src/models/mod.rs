//! Crisp API model types and resource operations.

mod connect;
mod plugin;
mod stars;

pub use connect::*;
pub use plugin::*;
pub use stars::*;
