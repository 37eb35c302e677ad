use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

use super::constants::{DEFAULT_RPX_COEFFICIENT, DEFAULT_UNIT_PRECISION, DEFAULT_VIEWPORT_WIDTH};
use crate::errors::Result;

/// Pluggable strategy turning a parsed rpx value into a pixel-unit string.
///
/// Receives the numeric rpx value and the configured coefficient. The default
/// multiplies them and appends `px`; embedders substitute their own to round
/// to device pixels or emit a different unit.
pub type PixelTransformer = Rc<dyn Fn(f64, f64) -> String>;

fn default_pixel_transformer() -> PixelTransformer {
    Rc::new(|rpx, coefficient| format!("{}px", rpx * coefficient))
}

fn default_rpx_coefficient() -> f64 {
    DEFAULT_RPX_COEFFICIENT
}

fn default_viewport_width() -> f64 {
    DEFAULT_VIEWPORT_WIDTH
}

fn default_unit_precision() -> u32 {
    DEFAULT_UNIT_PRECISION
}

/// Settings governing rpx conversion.
///
/// Constructed explicitly and owned by a converter rather than living in
/// process-wide globals, so tests and embedders can run multiple isolated
/// contexts side by side.
///
/// None of the setters validate their input: a negative viewport width or a
/// zero precision produces garbage output downstream, not an error. That is
/// the caller's responsibility.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitConfig {
    /// How many pixels one rpx maps to on the native runtime.
    #[serde(default = "default_rpx_coefficient")]
    rpx_coefficient: f64,
    /// Reference width the rpx values were authored against.
    #[serde(default = "default_viewport_width")]
    viewport_width: f64,
    /// Decimal places retained when producing vw values.
    #[serde(default = "default_unit_precision")]
    unit_precision: u32,
    /// Not part of JSON snapshots; restored to the default on deserialization.
    #[serde(skip, default = "default_pixel_transformer")]
    pixel_transformer: PixelTransformer,
}

impl Default for UnitConfig {
    fn default() -> Self {
        UnitConfig {
            rpx_coefficient: DEFAULT_RPX_COEFFICIENT,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            unit_precision: DEFAULT_UNIT_PRECISION,
            pixel_transformer: default_pixel_transformer(),
        }
    }
}

impl fmt::Debug for UnitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitConfig")
            .field("rpx_coefficient", &self.rpx_coefficient)
            .field("viewport_width", &self.viewport_width)
            .field("unit_precision", &self.unit_precision)
            .finish_non_exhaustive()
    }
}

impl UnitConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn rpx(&self) -> f64 {
        self.rpx_coefficient
    }

    pub fn set_rpx(&mut self, coefficient: f64) {
        self.rpx_coefficient = coefficient;
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    pub fn unit_precision(&self) -> u32 {
        self.unit_precision
    }

    pub fn set_unit_precision(&mut self, precision: u32) {
        self.unit_precision = precision;
    }

    /// A clone of the pixel transformer currently in effect.
    pub fn pixel_transformer(&self) -> PixelTransformer {
        Rc::clone(&self.pixel_transformer)
    }

    pub fn set_pixel_transformer(&mut self, transformer: PixelTransformer) {
        self.pixel_transformer = transformer;
    }

    /// Parses a configuration snapshot from JSON.
    ///
    /// Absent fields keep their defaults, so a host can send a partial
    /// snapshot like `{"viewportWidth": 375}`. The pixel transformer is not
    /// representable in JSON and comes back as the default.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Emits the numeric settings as a JSON snapshot.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builder for creating a `UnitConfig`.
#[derive(Default)]
pub struct UnitConfigBuilder {
    config: UnitConfig,
}

impl UnitConfigBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the pixel-per-rpx coefficient for the native runtime.
    pub fn set_rpx(mut self, coefficient: f64) -> Self {
        self.config.rpx_coefficient = coefficient;
        self
    }

    /// Sets the reference viewport width for vw conversion.
    pub fn set_viewport_width(mut self, width: f64) -> Self {
        self.config.viewport_width = width;
        self
    }

    // Set decimal places kept on vw values.
    pub fn set_unit_precision(mut self, precision: u32) -> Self {
        self.config.unit_precision = precision;
        self
    }

    /// Sets the strategy producing pixel-unit strings.
    pub fn set_pixel_transformer(mut self, transformer: PixelTransformer) -> Self {
        self.config.pixel_transformer = transformer;
        self
    }

    /// Builds the `UnitConfig`.
    pub fn build(self) -> UnitConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UnitConfig::default();
        assert_eq!(config.rpx(), 1.0);
        assert_eq!(config.viewport_width(), 750.0);
        assert_eq!(config.unit_precision(), 4);
        assert_eq!((config.pixel_transformer())(100.0, 1.0), "100px");
    }

    #[test]
    fn test_builder_chain() {
        let config = UnitConfigBuilder::new()
            .set_rpx(2.0)
            .set_viewport_width(375.0)
            .set_unit_precision(2)
            .build();
        assert_eq!(config.rpx(), 2.0);
        assert_eq!(config.viewport_width(), 375.0);
        assert_eq!(config.unit_precision(), 2);
    }

    #[test]
    fn test_default_transformer_applies_coefficient() {
        let config = UnitConfig::default();
        assert_eq!((config.pixel_transformer())(100.0, 2.0), "200px");
        assert_eq!((config.pixel_transformer())(0.5, 1.0), "0.5px");
    }

    #[test]
    fn test_json_round_trip() {
        let config = UnitConfigBuilder::new()
            .set_rpx(2.0)
            .set_viewport_width(375.0)
            .build();

        let json = config.to_json().unwrap();
        let parsed = UnitConfig::from_json(&json).unwrap();
        assert_eq!(parsed.rpx(), 2.0);
        assert_eq!(parsed.viewport_width(), 375.0);
        assert_eq!(parsed.unit_precision(), 4);
        // Transformer is not serialized; the default comes back.
        assert_eq!((parsed.pixel_transformer())(10.0, 2.0), "20px");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let parsed = UnitConfig::from_json(r#"{"viewportWidth": 375}"#).unwrap();
        assert_eq!(parsed.viewport_width(), 375.0);
        assert_eq!(parsed.rpx(), 1.0);
        assert_eq!(parsed.unit_precision(), 4);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(UnitConfig::from_json("not json").is_err());
    }
}
