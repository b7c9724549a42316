//! Detail panel state management
//!
//! Owns the "which channel, if any, is being inspected" lifecycle for one
//! view: a visibility flag plus a snapshot of the selected record. State
//! lives behind a lock so the host view can share the controller as
//! `Arc<ChannelDetailController>` and drive it from event callbacks.

use crate::models::ChannelDetail;
use parking_lot::{Mutex, RwLock};
use tracing::debug;

/// Observable snapshot of the detail panel state
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub visible: bool,
    pub current: ChannelDetail,
}

impl DetailState {
    fn hidden() -> Self {
        Self {
            visible: false,
            current: ChannelDetail::placeholder(),
        }
    }
}

type Observer = Box<dyn Fn(&DetailState) + Send + Sync>;

/// Show/close controller for the channel detail panel
///
/// Two states: hidden (initial) and shown. [`show_detail`] re-snapshots on
/// every call (last write wins); [`close_detail`] is idempotent and always
/// resets the current record to the placeholder.
///
/// [`show_detail`]: ChannelDetailController::show_detail
/// [`close_detail`]: ChannelDetailController::close_detail
pub struct ChannelDetailController {
    state: RwLock<DetailState>,
    observers: Mutex<Vec<Observer>>,
}

impl ChannelDetailController {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(DetailState::hidden()),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot `record` and show the panel.
    ///
    /// The stored copy is independent; later mutation of the caller's record
    /// does not affect the panel.
    pub fn show_detail(&self, record: &ChannelDetail) {
        debug!("ChannelDetailController::show_detail id={}", record.id);

        let snapshot = {
            let mut state = self.state.write();
            state.current = record.clone();
            state.visible = true;
            state.clone()
        };

        self.notify(&snapshot);
    }

    /// Hide the panel and reset the current record to the placeholder.
    pub fn close_detail(&self) {
        debug!("ChannelDetailController::close_detail");

        let snapshot = {
            let mut state = self.state.write();
            *state = DetailState::hidden();
            state.clone()
        };

        self.notify(&snapshot);
    }

    pub fn is_visible(&self) -> bool {
        self.state.read().visible
    }

    /// Clone of the currently displayed record (the placeholder when hidden).
    pub fn current(&self) -> ChannelDetail {
        self.state.read().current.clone()
    }

    pub fn state(&self) -> DetailState {
        self.state.read().clone()
    }

    /// Register an observer invoked with the post-transition snapshot after
    /// every `show_detail` / `close_detail`.
    pub fn on_change<F>(&self, observer: F)
    where
        F: Fn(&DetailState) + Send + Sync + 'static,
    {
        self.observers.lock().push(Box::new(observer));
    }

    fn notify(&self, snapshot: &DetailState) {
        for observer in self.observers.lock().iter() {
            observer(snapshot);
        }
    }
}

impl Default for ChannelDetailController {
    fn default() -> Self {
        Self::new()
    }
}
