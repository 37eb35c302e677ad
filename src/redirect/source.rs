//! Pluggable origins for the raw location string the redirect helper scans.
//!
//! Each platform exposes its current location differently: browsers through
//! the global `location.search`, the non-DOM runtime through the bundle URL
//! it hands the embedder at startup, and every platform through the history
//! object itself. Rather than branching on environment flags, the helper
//! walks an ordered list of sources, each reduced to a single capability.

/// A provider of a raw search string or href to scan for the redirect
/// parameter. Sources are consulted in order; the first one whose string
/// carries the parameter wins.
pub trait LocationSource {
    /// The raw search string or href this source can currently see, if any.
    fn search_or_href(&self) -> Option<String>;
}

/// The full page/bundle URL the native runtime hands the embedder at startup.
#[derive(Debug, Clone)]
pub struct BundleUrlSource {
    href: String,
}

impl BundleUrlSource {
    pub fn new(href: impl Into<String>) -> Self {
        BundleUrlSource { href: href.into() }
    }
}

impl LocationSource for BundleUrlSource {
    fn search_or_href(&self) -> Option<String> {
        if self.href.is_empty() {
            None
        } else {
            Some(self.href.clone())
        }
    }
}

/// The browser global `location.search`, read off `globalThis` through
/// reflection so no DOM binding layer is needed.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowLocationSource;

#[cfg(target_arch = "wasm32")]
impl LocationSource for WindowLocationSource {
    fn search_or_href(&self) -> Option<String> {
        use wasm_bindgen::JsValue;

        let location =
            js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("location")).ok()?;
        let search = js_sys::Reflect::get(&location, &JsValue::from_str("search")).ok()?;
        search.as_string()
    }
}
