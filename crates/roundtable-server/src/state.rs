//! Server state management

use roundtable_core::{RoleRegistry, SamplingParams, SharedClient};
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state
///
/// Everything here is read-only; each request runs its own discussion.
#[derive(Clone)]
pub struct AppState {
    pub client: SharedClient,
    pub roles: Arc<RoleRegistry>,
    pub sampling: SamplingParams,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(client: SharedClient, roles: RoleRegistry, sampling: SamplingParams) -> Self {
        Self {
            client,
            roles: Arc::new(roles),
            sampling,
            static_dir: PathBuf::from("static"),
        }
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }
}
