//! Host environment detection.
//!
//! The framework runs the same application bundle in a browser (through the
//! wasm build) and in a non-DOM native runtime. Which one we are in is a fact
//! the embedder knows and we do not, so it is modeled as a pair of flags the
//! embedder supplies; `detect()` only covers the case the compilation target
//! gives away for free.

use std::fmt;
use std::str::FromStr;

/// Rendering target a style value is being converted for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// Browser DOM; rpx becomes a viewport-relative unit.
    Web,
    /// Non-DOM native runtime; rpx becomes a fixed pixel unit.
    Weex,
    /// Any other target (Mini-App style runtimes). Values pass through
    /// untouched so the target can apply its own unit handling.
    Other(String),
}

impl From<&str> for Platform {
    fn from(s: &str) -> Self {
        match s {
            "web" => Platform::Web,
            "weex" => Platform::Weex,
            other => Platform::Other(other.to_string()),
        }
    }
}

impl FromStr for Platform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Platform::from(s))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Web => write!(f, "web"),
            Platform::Weex => write!(f, "weex"),
            Platform::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Runtime flags describing the hosting environment.
///
/// Treated as an external collaborator: the embedder constructs the value it
/// knows to be true and passes it in where a default platform is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    /// Running inside a browser-like (DOM) host.
    pub is_web: bool,
    /// Running inside the non-DOM native runtime.
    pub is_weex: bool,
}

impl Environment {
    /// Best-effort detection from the compilation target.
    ///
    /// A wasm build is assumed to be hosted in a browser; native embedders
    /// that are actually the non-DOM runtime should use [`Environment::weex`]
    /// instead.
    pub fn detect() -> Self {
        Environment {
            is_web: cfg!(target_arch = "wasm32"),
            is_weex: false,
        }
    }

    /// A browser environment.
    pub fn web() -> Self {
        Environment {
            is_web: true,
            is_weex: false,
        }
    }

    /// The non-DOM native runtime.
    pub fn weex() -> Self {
        Environment {
            is_web: false,
            is_weex: true,
        }
    }

    /// Neither known environment (Mini-App style hosts).
    pub fn none() -> Self {
        Environment {
            is_web: false,
            is_weex: false,
        }
    }

    /// The platform a converter should target by default in this environment.
    /// Web wins over weex when both flags are set.
    pub fn default_platform(&self) -> Platform {
        if self.is_web {
            Platform::Web
        } else if self.is_weex {
            Platform::Weex
        } else {
            Platform::Other(String::new())
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::detect()
    }
}
