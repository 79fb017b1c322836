//! Structured error types for xlheader.
//!
//! Rendering and resize handling never fail; errors only surface from
//! configuration validation and the JSON / JavaScript boundaries.

/// All errors that can occur while configuring or exporting a row header.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    /// Row height bounds violate `min <= default <= max`.
    #[error("Invalid row height bounds: min={min}, default={default}, max={max}")]
    InvalidHeightBounds { min: f32, default: f32, max: f32 },

    /// Window bounds violate `start <= end`.
    #[error("Invalid row window: start={start} > end={end}")]
    InvalidWindow { start: u32, end: u32 },

    /// Serializing the rendered tree failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// DOM materialisation failed.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HeaderError>;

impl From<String> for HeaderError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for HeaderError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<serde_json::Error> for HeaderError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<HeaderError> for wasm_bindgen::JsValue {
    fn from(e: HeaderError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for HeaderError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        Self::Dom(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}
