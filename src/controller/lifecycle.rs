//! Asset-load lifecycle: issuing, cancelling, and completing loads.

use super::load::{LoadId, LoadRequest, LoadToken};
use super::{SceneController, SceneState};
use crate::error::ClockError;
use crate::scene::{AssetLoader, Mechanics, SceneRoot};

impl<M: Mechanics> SceneController<M> {
    /// Issue a load request for the configured asset path.
    ///
    /// Any earlier outstanding request is cancelled. Returns `None` once the
    /// model has loaded; the model is loaded at most once.
    pub fn begin_load(&mut self) -> Option<LoadRequest> {
        let SceneState::Unloaded { pending, .. } = &mut self.state else {
            log::warn!("scene already loaded; ignoring load request");
            return None;
        };
        if let Some(previous) = pending.take() {
            previous.cancel();
        }

        let token = LoadToken::new(LoadId(self.next_load_id));
        self.next_load_id += 1;
        *pending = Some(token.clone());

        let path = self.options.scene.asset_path.clone();
        log::debug!("requesting load {:?} of {path}", token.id());
        Some(LoadRequest { path, token })
    }

    /// Issue a load request and hand it to `loader`. Returns whether a load
    /// was started.
    pub fn start_load<L: AssetLoader>(&mut self, loader: &mut L) -> bool {
        self.begin_load().is_some_and(|request| {
            loader.load(request);
            true
        })
    }

    /// Abandon the outstanding load, if any. A later completion for it is
    /// ignored.
    pub fn cancel_load(&mut self) {
        if let SceneState::Unloaded { pending, .. } = &mut self.state {
            if let Some(token) = pending.take() {
                log::info!("cancelled load {:?}", token.id());
                token.cancel();
            }
        }
    }

    /// Whether a load is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SceneState::Unloaded { pending: Some(_), .. })
    }

    /// Take ownership of `pending` if `load` answers it.
    fn claim(pending: &mut Option<LoadToken>, load: LoadId) -> bool {
        match pending {
            Some(token) if token.id() == load && !token.is_cancelled() => {
                *pending = None;
                true
            }
            _ => false,
        }
    }

    pub(super) fn on_load_complete(&mut self, load: LoadId, root: M::Root) {
        let SceneState::Unloaded {
            pending,
            pending_time_scale,
        } = &mut self.state
        else {
            log::warn!("ignoring load completion {load:?} after load");
            return;
        };
        if !Self::claim(pending, load) {
            log::warn!("ignoring stale load completion {load:?}");
            return;
        }
        let pending_time_scale = *pending_time_scale;

        let mut mechanics = M::bind(&root);
        mechanics.set_time_scale(pending_time_scale);

        if let Some(bounds) = root.bounds() {
            let restriction = bounds.scaled_depth(self.options.scene.depth_scale);
            self.camera.restrict_look_at(restriction);
        }

        self.state = SceneState::Loaded { root, mechanics };
        log::info!("clock model loaded");

        let default_part = self.options.scene.default_part;
        if let Err(e) = self.look_at(default_part) {
            log::warn!("could not frame default part: {e}");
        }
    }

    pub(super) fn on_load_failed(
        &mut self,
        load: LoadId,
        message: String,
    ) -> Result<(), ClockError> {
        let SceneState::Unloaded { pending, .. } = &mut self.state else {
            log::warn!("ignoring load failure {load:?} after load");
            return Ok(());
        };
        if !Self::claim(pending, load) {
            log::warn!("ignoring stale load failure {load:?}");
            return Ok(());
        }
        log::warn!("asset load failed: {message}");
        Err(ClockError::AssetLoad(message))
    }
}
