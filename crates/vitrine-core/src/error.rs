/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for vitrine-core.

use thiserror::Error;

/// Errors surfaced by the data-layer collaborators.
///
/// The pipeline treats these as contained failures: a failing product fetch
/// drops one section, a failing page fetch surfaces as a page-level error
/// state. Retry policy belongs to the data layer, not here.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("data backend error: {0}")]
    Backend(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed data: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl DataError {
    /// Create a backend error from any message.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Data(#[from] DataError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
