//! Load requests and their cancellation tokens.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Identifies one call to
/// [`SceneController::begin_load`](super::SceneController::begin_load).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadId(pub(crate) u64);

/// Handle shared between the controller and an in-flight load.
///
/// The controller cancels the token when it starts a newer load, when
/// [`cancel_load`](super::SceneController::cancel_load) is called, or when
/// it is dropped. Completions for cancelled tokens are ignored, so loaders
/// may keep running, but they can poll [`is_cancelled`](Self::is_cancelled)
/// to stop early.
#[derive(Debug, Clone)]
pub struct LoadToken {
    id: LoadId,
    cancelled: Arc<AtomicBool>,
}

impl LoadToken {
    pub(crate) fn new(id: LoadId) -> Self {
        Self {
            id,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The id to report back in the completion event.
    #[must_use]
    pub fn id(&self) -> LoadId {
        self.id
    }

    /// Whether the controller has abandoned this load.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub(crate) fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

/// What an [`AssetLoader`](crate::scene::AssetLoader) is asked to load.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    /// Resource path of the clock model.
    pub path: String,
    /// Cancellation token; its id tags the completion event.
    pub token: LoadToken,
}
