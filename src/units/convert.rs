use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};

use super::cache::{MemoArgs, MemoCache};
use super::config::{PixelTransformer, UnitConfig};
use crate::environment::{Environment, Platform};
use crate::models::StyleValue;

lazy_static! {
    /// Matches a numeric literal (integer or decimal) immediately followed by
    /// `rpx`. The leading alternatives consume quoted substrings and
    /// `url(...)` expressions whole, so tokens inside them never reach the
    /// capture group.
    static ref RPX_PATTERN: Regex = Regex::new(
        r#""[^"]+"|'[^']+'|url\([^)]+\)|(\d*\.?\d+)rpx"#
    ).unwrap();
}

/// Property whose numeric values are meaningful without a unit and must not
/// be coerced to strings on the way through the converter.
const LINE_HEIGHT: &str = "lineHeight";

/// Is the string carrying at least one bare rpx token?
///
/// Quoted substrings and `url(...)` expressions are opaque: `"100rpx"` inside
/// quotes does not count.
pub fn is_rpx(value: &str) -> bool {
    RPX_PATTERN
        .captures_iter(value)
        .any(|caps| caps.get(1).is_some())
}

/// Rounds to `precision` decimal places through an intermediate floor at one
/// extra digit, which keeps quotients like 10/7.5 from picking up float
/// drift a single round would introduce.
fn to_fixed(number: f64, precision: u32) -> f64 {
    let multiplier = 10f64.powi(precision as i32 + 1);
    let whole = (number * multiplier).floor();
    (whole / 10.0).round() * 10.0 / multiplier
}

/// Runs `transform` over the numeric part of every bare rpx token in `input`,
/// reproducing quoted and `url(...)` stretches verbatim.
fn replace_rpx_tokens(input: &str, transform: impl Fn(f64) -> String) -> String {
    RPX_PATTERN
        .replace_all(input, |caps: &Captures| match caps.get(1) {
            Some(number) => transform(number.as_str().parse().unwrap_or(0.0)),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Converts rpx tokens in style values for one target platform.
///
/// Owns its settings, its target platform, and its memoization cache. The
/// target platform is sticky: supplying one to [`convert`](Self::convert)
/// re-targets this converter for every subsequent call. Settings mutations
/// invalidate previously memoized results, so a converter never serves a
/// value computed under settings that are no longer in effect.
pub struct UnitConverter {
    config: UnitConfig,
    target_platform: Platform,
    cache: MemoCache<StyleValue>,
    // Stamped into every cache key; bumped whenever settings change.
    generation: u64,
}

impl UnitConverter {
    /// A converter with default settings, targeting the detected environment.
    pub fn new() -> Self {
        Self::with_environment(&Environment::detect())
    }

    /// A converter with default settings, targeting `env`'s default platform.
    pub fn with_environment(env: &Environment) -> Self {
        UnitConverter {
            config: UnitConfig::default(),
            target_platform: env.default_platform(),
            cache: MemoCache::new(),
            generation: 0,
        }
    }

    /// A converter owning `config`, targeting the detected environment.
    pub fn with_config(config: UnitConfig) -> Self {
        UnitConverter {
            config,
            ..Self::new()
        }
    }

    pub fn config(&self) -> &UnitConfig {
        &self.config
    }

    /// Swaps in a whole new configuration.
    pub fn replace_config(&mut self, config: UnitConfig) {
        self.config = config;
        self.touch();
    }

    pub fn target_platform(&self) -> &Platform {
        &self.target_platform
    }

    pub fn set_target_platform(&mut self, platform: Platform) {
        if platform != self.target_platform {
            self.target_platform = platform;
            self.touch();
        }
    }

    pub fn rpx(&self) -> f64 {
        self.config.rpx()
    }

    pub fn set_rpx(&mut self, coefficient: f64) {
        self.config.set_rpx(coefficient);
        self.touch();
    }

    pub fn viewport_width(&self) -> f64 {
        self.config.viewport_width()
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.config.set_viewport_width(width);
        self.touch();
    }

    pub fn set_unit_precision(&mut self, precision: u32) {
        self.config.set_unit_precision(precision);
        self.touch();
    }

    pub fn set_pixel_transformer(&mut self, transformer: PixelTransformer) {
        self.config.set_pixel_transformer(transformer);
        self.touch();
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Converts a style value for `prop`.
    ///
    /// A supplied `platform` re-targets this converter before converting.
    /// Numeric values are coerced to their string form unless `prop` is
    /// `lineHeight`, where a bare number is meaningful and returned as-is.
    /// Values carrying no bare rpx token pass through unchanged. Results are
    /// memoized per argument tuple and current settings.
    pub fn convert(
        &mut self,
        value: impl Into<StyleValue>,
        prop: &str,
        platform: Option<Platform>,
    ) -> StyleValue {
        if let Some(platform) = &platform {
            self.set_target_platform(platform.clone());
        }

        let value = match value.into() {
            StyleValue::Number(n) if prop != LINE_HEIGHT => StyleValue::Text(n.to_string()),
            other => other,
        };

        let key = self.cache_key(&value, prop, platform.as_ref());
        if let Some(hit) = self.cache.get(&key) {
            return hit;
        }

        let result = match value.as_text() {
            Some(text) if is_rpx(text) => StyleValue::Text(self.calc_rpx(text)),
            _ => value,
        };
        self.cache.insert(key, result.clone());
        result
    }

    /// Rewrites every bare rpx token in `input` for the current platform.
    ///
    /// `375rpx` becomes `50vw` on web (viewport width 750) and `375px` on the
    /// native runtime (coefficient 1). Platforms with no defined transform
    /// (Mini-App style targets) get the string back untouched.
    pub fn calc_rpx(&self, input: &str) -> String {
        match &self.target_platform {
            Platform::Web => replace_rpx_tokens(input, |value| {
                let vw = to_fixed(
                    value / (self.config.viewport_width() / 100.0),
                    self.config.unit_precision(),
                );
                format!("{}vw", vw)
            }),
            Platform::Weex => {
                let transformer = self.config.pixel_transformer();
                let coefficient = self.config.rpx();
                replace_rpx_tokens(input, |value| transformer(value, coefficient))
            }
            Platform::Other(name) => {
                debug!("[calc_rpx] No transform for platform {:?}, passing through", name);
                input.to_string()
            }
        }
    }

    fn touch(&mut self) {
        self.generation += 1;
    }

    // Key layout: generation, then the call arguments joined right to left.
    fn cache_key(&self, value: &StyleValue, prop: &str, platform: Option<&Platform>) -> String {
        let args_key = match platform {
            Some(platform) => (value, prop, platform).memo_key(),
            None => (value, prop).memo_key(),
        };
        format!("{}#{}", self.generation, args_key)
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn web_converter() -> UnitConverter {
        UnitConverter::with_environment(&Environment::web())
    }

    fn weex_converter() -> UnitConverter {
        UnitConverter::with_environment(&Environment::weex())
    }

    #[test]
    fn test_is_rpx_matches_bare_tokens_only() {
        assert!(is_rpx("100rpx"));
        assert!(is_rpx("0.5rpx"));
        assert!(is_rpx(".5rpx"));
        assert!(is_rpx("margin: 10rpx 20rpx"));

        // Quoted substrings and url(...) are opaque.
        assert!(!is_rpx("\"100rpx\""));
        assert!(!is_rpx("'100rpx'"));
        assert!(!is_rpx("url(100rpx.png)"));

        assert!(!is_rpx("100px"));
        assert!(!is_rpx("100"));
        assert!(!is_rpx(""));
    }

    #[test]
    fn test_web_converts_to_vw() {
        let mut converter = web_converter();
        assert_eq!(
            converter.convert("100rpx", "width", None),
            StyleValue::Text("13.3333vw".to_string())
        );
        assert_eq!(
            converter.convert("375rpx", "width", None),
            StyleValue::Text("50vw".to_string())
        );
    }

    #[test]
    fn test_weex_converts_to_px() {
        let mut converter = weex_converter();
        assert_eq!(
            converter.convert("100rpx", "width", None),
            StyleValue::Text("100px".to_string())
        );
        assert_eq!(
            converter.convert("0.5rpx", "borderWidth", None),
            StyleValue::Text("0.5px".to_string())
        );
    }

    #[test]
    fn test_unknown_platform_passes_through() {
        init_logs();
        let mut converter = web_converter();
        let result = converter.convert(
            "100rpx",
            "width",
            Some(Platform::Other("wx-miniprogram".to_string())),
        );
        assert_eq!(result, StyleValue::Text("100rpx".to_string()));
    }

    #[test]
    fn test_platform_override_is_sticky() {
        let mut converter = web_converter();
        assert_eq!(
            converter.convert("10rpx", "width", Some(Platform::Weex)),
            StyleValue::Text("10px".to_string())
        );
        // No platform supplied; the override from the previous call holds.
        assert_eq!(
            converter.convert("10rpx", "height", None),
            StyleValue::Text("10px".to_string())
        );
        assert_eq!(converter.target_platform(), &Platform::Weex);
    }

    #[test]
    fn test_numeric_line_height_stays_numeric() {
        let mut converter = web_converter();
        assert_eq!(
            converter.convert(16.0, "lineHeight", None),
            StyleValue::Number(16.0)
        );
        // Other properties coerce numbers to text.
        assert_eq!(
            converter.convert(16.0, "width", None),
            StyleValue::Text("16".to_string())
        );
        // A textual lineHeight still converts.
        assert_eq!(
            converter.convert("32rpx", "lineHeight", Some(Platform::Weex)),
            StyleValue::Text("32px".to_string())
        );
    }

    #[test]
    fn test_non_rpx_values_pass_through() {
        let mut converter = web_converter();
        assert_eq!(
            converter.convert("100px", "width", None),
            StyleValue::Text("100px".to_string())
        );
        assert_eq!(
            converter.convert("auto", "margin", None),
            StyleValue::Text("auto".to_string())
        );
    }

    #[test]
    fn test_multiple_tokens_convert_independently() {
        let mut converter = web_converter();
        assert_eq!(
            converter.convert("margin: 10rpx 20rpx", "margin", None),
            StyleValue::Text("margin: 1.3333vw 2.6667vw".to_string())
        );
    }

    #[test]
    fn test_quoted_and_url_content_reproduced_verbatim() {
        let converter = web_converter();
        assert_eq!(
            converter.calc_rpx("url(100rpx.png) no-repeat 20rpx"),
            "url(100rpx.png) no-repeat 2.6667vw"
        );
        assert_eq!(converter.calc_rpx("\"75rpx\" 75rpx"), "\"75rpx\" 10vw");
    }

    #[test]
    fn test_custom_viewport_and_precision() {
        let mut converter = web_converter();
        converter.set_viewport_width(375.0);
        assert_eq!(
            converter.convert("100rpx", "width", None),
            StyleValue::Text("26.6667vw".to_string())
        );
        converter.set_unit_precision(2);
        assert_eq!(
            converter.convert("100rpx", "width", None),
            StyleValue::Text("26.67vw".to_string())
        );
    }

    #[test]
    fn test_custom_coefficient_and_transformer() {
        let mut converter = weex_converter();
        converter.set_rpx(2.0);
        assert_eq!(
            converter.convert("100rpx", "width", None),
            StyleValue::Text("200px".to_string())
        );

        converter.set_pixel_transformer(Rc::new(|rpx, coefficient| {
            format!("{}wx", (rpx * coefficient).round())
        }));
        assert_eq!(
            converter.convert("100rpx", "width", None),
            StyleValue::Text("200wx".to_string())
        );
    }

    #[test]
    fn test_repeat_calls_hit_the_cache() {
        let calls = Rc::new(Cell::new(0u32));
        let counting: PixelTransformer = {
            let calls = Rc::clone(&calls);
            Rc::new(move |rpx, coefficient| {
                calls.set(calls.get() + 1);
                format!("{}px", rpx * coefficient)
            })
        };

        let mut converter = weex_converter();
        converter.set_pixel_transformer(counting);

        let first = converter.convert("100rpx", "width", None);
        let second = converter.convert("100rpx", "width", None);
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
        assert_eq!(converter.cache_len(), 1);
    }

    #[test]
    fn test_settings_change_invalidates_cached_results() {
        let mut converter = weex_converter();
        assert_eq!(
            converter.convert("100rpx", "width", None),
            StyleValue::Text("100px".to_string())
        );

        // Same arguments, new coefficient: the previously memoized result
        // must not be served.
        converter.set_rpx(2.0);
        assert_eq!(
            converter.convert("100rpx", "width", None),
            StyleValue::Text("200px".to_string())
        );
    }

    #[test]
    fn test_to_fixed_rounds_at_extra_digit() {
        assert_eq!(to_fixed(10.0 / 7.5, 4), 1.3333);
        assert_eq!(to_fixed(20.0 / 7.5, 4), 2.6667);
        assert_eq!(to_fixed(50.0, 4), 50.0);
        assert_eq!(to_fixed(26.666666, 2), 26.67);
    }
}
