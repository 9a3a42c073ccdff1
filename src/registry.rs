//! The page registry seam.
//!
//! Each synthesized page becomes one [`PageRequest`]: the served path, the
//! template that renders it, and the context handed to that template.
//! [`RecordingRegistry`] keeps requests in memory so a host can inspect them
//! or write them out as JSON.

use crate::types::PageContext;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One page registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Served path, equal to the page slug
    pub path: String,
    /// Template that renders the page
    pub component: PathBuf,
    pub context: PageContext,
}

/// Turns page descriptions into served routes.
///
/// Registering the same path twice is a caller error and is not checked.
pub trait PageRegistry {
    fn create_page(&mut self, request: PageRequest);
}

/// A registry that records every request in call order.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct RecordingRegistry {
    requests: Vec<PageRequest>,
}

impl RecordingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[PageRequest] {
        &self.requests
    }

    pub fn find(&self, path: &str) -> Option<&PageRequest> {
        self.requests.iter().find(|r| r.path == path)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Pretty-printed JSON array of the recorded requests.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.requests)
    }
}

impl PageRegistry for RecordingRegistry {
    fn create_page(&mut self, request: PageRequest) {
        self.requests.push(request);
    }
}
