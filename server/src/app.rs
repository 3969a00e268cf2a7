//! Application shared state.

use std::sync::Arc;

use ab_glyph::FontVec;

use crate::config::ServerConfig;

/// Shared state handed to every request handler.
///
/// Holds only immutable per-process resources: the server configuration
/// and the resolved label font. Each generation request owns its rows,
/// options, and output buffer.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    config: ServerConfig,
    font: FontVec,
}

impl SharedState {
    pub fn new(config: ServerConfig, font: FontVec) -> Self {
        Self {
            inner: Arc::new(SharedStateInner { config, font }),
        }
    }

    pub fn server_port(&self) -> u16 {
        self.inner.config.server_port
    }

    /// The resolved label font, shared across requests.
    pub fn font(&self) -> &FontVec {
        &self.inner.font
    }
}
