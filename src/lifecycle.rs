//! View Lifetime
//!
//! Ties in-flight work to a mounted view. The view owns an `AbortController`;
//! its signal is attached to every request the view sends, and `end` aborts it
//! so pending fetches are cancelled on unmount. Timers and late continuations
//! check `is_alive` before writing state.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use web_sys::{AbortController, AbortSignal};

/// Handle is `Copy`; the controller itself stays on the UI thread
#[derive(Clone, Copy)]
pub struct ViewLifetime {
    controller: StoredValue<Option<AbortController>, LocalStorage>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(e) => {
                web_sys::console::error_1(&format!("[LIFECYCLE] AbortController unavailable: {:?}", e).into());
                None
            }
        };
        Self::with_controller(controller)
    }

    /// Without a controller, requests are not cancellable and liveness
    /// ends only when `end` is called
    fn with_controller(controller: Option<AbortController>) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    /// Signal to attach to requests; `None` once the view has ended
    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller
            .try_with_value(|c| c.as_ref().map(AbortController::signal))
            .flatten()
    }

    pub fn is_alive(&self) -> bool {
        self.controller
            .try_with_value(|c| c.as_ref().map_or(true, |c| !c.signal().aborted()))
            .unwrap_or(false)
    }

    /// Abort pending requests and mark the view as torn down; seen by every copy
    pub fn end(&self) {
        self.controller.try_with_value(|c| {
            if let Some(controller) = c {
                controller.abort();
            }
        });
        self.controller.dispose();
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}
