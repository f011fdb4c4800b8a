use std::fmt;

/// Failure to obtain a drawing context.
///
/// Every variant is fatal: the context is a startup precondition and is never
/// retried.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DeviceError {
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// No element carries the configured canvas id.
    CanvasNotFound(String),
    /// The element with the configured id is not a `<canvas>`.
    NotACanvas(String),
    /// The canvas cannot produce a WebGL context.
    Unsupported,
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::NoWindow => write!(f, "no global window"),
            DeviceError::NoDocument => write!(f, "window has no document"),
            DeviceError::CanvasNotFound(id) => write!(f, "no element with id `{id}`"),
            DeviceError::NotACanvas(id) => write!(f, "element `{id}` is not a canvas"),
            DeviceError::Unsupported => write!(f, "WebGL is not supported"),
        }
    }
}

impl std::error::Error for DeviceError {}
