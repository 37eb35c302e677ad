//! WebAssembly bindings.
//!
//! The JS side consumes the converter as free functions with ambient
//! settings, so the bindings keep one shared converter per wasm instance.
//! Thread-local to avoid synchronization in wasm's single-threaded world.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::environment::Platform;
use crate::models::StyleValue;
use crate::units::{UnitConfig, UnitConverter};

thread_local! {
    /// Converter shared by all bindings for the lifetime of the instance.
    static CONVERTER: RefCell<UnitConverter> = RefCell::new(UnitConverter::new());
}

fn with_converter<R>(f: impl FnOnce(&mut UnitConverter) -> R) -> R {
    CONVERTER.with(|converter| f(&mut converter.borrow_mut()))
}

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Warn);
}

/// Replaces the shared converter's settings from a JSON snapshot, e.g.
/// `{"rpxCoefficient":2,"viewportWidth":375,"unitPrecision":4}`.
/// Absent fields keep their defaults.
#[wasm_bindgen]
pub fn configure_units(config_json: &str) -> Result<(), JsValue> {
    let config = UnitConfig::from_json(config_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse unit config: {}", e)))?;
    with_converter(|converter| converter.replace_config(config));
    Ok(())
}

/// Converts a style value for `prop`, optionally re-targeting the platform
/// (`"web"`, `"weex"`, or any other identifier) for this and subsequent calls.
#[wasm_bindgen]
pub fn convert_unit(value: &str, prop: &str, platform: Option<String>) -> String {
    let platform = platform.map(|p| Platform::from(p.as_str()));
    with_converter(|converter| converter.convert(value, prop, platform)).to_string()
}

/// Converts a numeric style value. Numeric `lineHeight` comes back as a
/// number; everything else as its converted string form.
#[wasm_bindgen]
pub fn convert_unit_number(value: f64, prop: &str) -> JsValue {
    match with_converter(|converter| converter.convert(value, prop, None)) {
        StyleValue::Number(n) => JsValue::from_f64(n),
        StyleValue::Text(s) => JsValue::from_str(&s),
    }
}

/// Whether the string carries a bare rpx token.
#[wasm_bindgen]
pub fn is_rpx(value: &str) -> bool {
    crate::units::is_rpx(value)
}

#[wasm_bindgen]
pub fn set_rpx(coefficient: f64) {
    with_converter(|converter| converter.set_rpx(coefficient));
}

#[wasm_bindgen]
pub fn get_rpx() -> f64 {
    with_converter(|converter| converter.rpx())
}

#[wasm_bindgen]
pub fn set_viewport_width(width: f64) {
    with_converter(|converter| converter.set_viewport_width(width));
}

#[wasm_bindgen]
pub fn get_viewport_width() -> f64 {
    with_converter(|converter| converter.viewport_width())
}

#[wasm_bindgen]
pub fn set_unit_precision(precision: u32) {
    with_converter(|converter| converter.set_unit_precision(precision));
}
