//! One-shot startup redirect driven by the `_path` query parameter.
//!
//! In a browser, a URL like `https://example.com?_path=/page1` can steer a
//! single-page application straight to `/page1`. The non-DOM runtime keeps
//! its route state in a memory-backed history and cannot be steered through
//! a URL bar, so the same parameter is read from whatever location string the
//! host exposes and applied as a history replacement before rendering begins.
//!
//! The redirect runs synchronously, once, and is a no-op when the parameter
//! is absent.

// Declare the submodules
mod history;
mod source;

pub use history::{History, MemoryHistory};
pub use source::{BundleUrlSource, LocationSource};
#[cfg(target_arch = "wasm32")]
pub use source::WindowLocationSource;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    /// Extracts the `_path` parameter value, taken verbatim up to the next
    /// `&`, `#`, or end of string. The key is matched case-insensitively.
    static ref TARGET_PATH_PATTERN: Regex = Regex::new(r"(?i)[?&]_path=([^&#]+)").unwrap();
}

/// Extracts the target path from a search string or href, if present.
pub fn target_path(input: &str) -> Option<String> {
    TARGET_PATH_PATTERN
        .captures(input)
        .map(|caps| caps[1].to_string())
}

/// Scans an ordered list of location sources for the `_path` parameter and
/// applies the route replacement to a history.
pub struct Redirector {
    sources: Vec<Box<dyn LocationSource>>,
}

impl Redirector {
    /// A redirector seeded with the platform's default sources: the browser
    /// global location on wasm, nothing elsewhere. Native embedders add the
    /// runtime's bundle URL through [`add_source`](Self::add_source).
    pub fn new() -> Self {
        #[allow(unused_mut)]
        let mut sources: Vec<Box<dyn LocationSource>> = Vec::new();
        #[cfg(target_arch = "wasm32")]
        sources.push(Box::new(WindowLocationSource));
        Redirector { sources }
    }

    /// A redirector with no sources; only the history fallback applies.
    pub fn empty() -> Self {
        Redirector {
            sources: Vec::new(),
        }
    }

    /// Appends a source. Sources are consulted in insertion order, ahead of
    /// the history's own search string.
    pub fn add_source(mut self, source: Box<dyn LocationSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Performs the one-shot redirect against `history`.
    ///
    /// The first source — or, failing all sources, the history's own search
    /// string — that carries `_path` decides the target. On a match, the
    /// history's original search string is appended to the target verbatim,
    /// `_path` parameter included, so every other query parameter survives
    /// the replacement. Without a match this is a no-op.
    pub fn redirect<H: History>(&self, history: &mut H) {
        let target = self
            .sources
            .iter()
            .find_map(|source| source.search_or_href().as_deref().and_then(target_path))
            .or_else(|| target_path(&history.location().search));

        if let Some(path) = target {
            let destination = format!("{}{}", path, history.location().search);
            debug!("[redirect] Replacing active route with {}", destination);
            history.replace(&destination);
        }
    }
}

impl Default for Redirector {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the startup redirect with the platform default sources.
///
/// Intended to be invoked exactly once during application startup, before
/// normal rendering begins.
pub fn redirect<H: History>(history: &mut H) {
    Redirector::new().redirect(history)
}
