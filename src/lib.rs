pub mod environment;
pub mod errors;
pub mod models;
pub mod redirect;
pub mod units;

pub use environment::{Environment, Platform};
pub use errors::{Result, StyleToolsError};
pub use models::{Location, StyleValue};
pub use redirect::{redirect, History, LocationSource, MemoryHistory, Redirector};
pub use units::{cached, is_rpx, UnitConfig, UnitConfigBuilder, UnitConverter};

#[cfg(target_arch = "wasm32")]
pub mod wasm;
