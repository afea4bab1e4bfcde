// A tiny error type so we don't rely on anyhow/thiserror.
// Only the window host can fail; the chaos game itself never errors.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Presenting the framebuffer failed
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
