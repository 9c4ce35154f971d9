//! Side effects that follow a successful write: marking a cached view stale
//! and sending the browser to it.

use serde::Serialize;
use tracing::info;

/// Terminal navigation. An action that produces one is finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    location: String,
}

impl Redirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Cache and navigation primitives provided by the hosting framework.
pub trait ViewEffects: Send + Sync {
    /// Mark the view at `path` stale so its next render refetches.
    fn revalidate_path(&self, path: &str);

    fn redirect(&self, path: &str) -> Redirect {
        Redirect::to(path)
    }
}

/// Effects for hosts without a view cache: revalidation is only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEffects;

impl ViewEffects for LogEffects {
    fn revalidate_path(&self, path: &str) {
        info!(path, "revalidated view");
    }
}
