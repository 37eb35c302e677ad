//! Converts the custom `rpx` length unit embedded in style strings into the
//! unit appropriate for the current target platform.
//!
//! `rpx` is a responsive-pixel unit authored against a reference viewport
//! width (750 by default). At render time it becomes a viewport-relative
//! `vw` value in browsers, a fixed pixel value on the non-DOM native
//! runtime, and passes through untouched on platforms that handle the unit
//! themselves:
//!
//! ```
//! use style_tools::{Environment, Platform, UnitConverter};
//!
//! let mut converter = UnitConverter::with_environment(&Environment::web());
//! assert_eq!(converter.convert("375rpx", "width", None).to_string(), "50vw");
//! assert_eq!(
//!     converter.convert("375rpx", "width", Some(Platform::Weex)).to_string(),
//!     "375px"
//! );
//! ```

// Declare the submodules
mod cache;
mod config;
mod constants;
mod convert;

pub use cache::{cached, MemoArgs, MemoCache, MEMO_KEY_SEPARATOR};
pub use config::{PixelTransformer, UnitConfig, UnitConfigBuilder};
pub use constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_RPX_COEFFICIENT, DEFAULT_UNIT_PRECISION,
    DEFAULT_VIEWPORT_WIDTH,
};
pub use convert::{is_rpx, UnitConverter};
