//! Page-wide side effects held while an overlay is open.

use leptos::prelude::*;

/// The global page state an overlay touches: background scrolling and the Escape key.
pub trait Surface {
    type Listener;

    fn lock_scroll(&self);
    fn unlock_scroll(&self);
    fn on_escape(&self, handler: Box<dyn Fn()>) -> Self::Listener;
    fn remove_listener(&self, listener: Self::Listener);
}

/// Scroll lock and Escape binding, released when dropped.
pub struct OverlayGuard<S: Surface> {
    surface: S,
    listener: Option<S::Listener>,
}

impl<S: Surface> OverlayGuard<S> {
    pub fn acquire(surface: S, on_escape: impl Fn() + 'static) -> Self {
        surface.lock_scroll();
        let listener = surface.on_escape(Box::new(on_escape));
        Self {
            surface,
            listener: Some(listener),
        }
    }
}

impl<S: Surface> Drop for OverlayGuard<S> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.surface.remove_listener(listener);
        }
        self.surface.unlock_scroll();
    }
}

impl<S: Surface> std::fmt::Debug for OverlayGuard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayGuard")
            .field("listening", &self.listener.is_some())
            .finish()
    }
}

/// The browser document.
#[derive(Clone, Copy, Debug, Default)]
pub struct Document;

impl Document {
    fn set_body_overflow(value: &str) {
        let Some(body) = document().body() else {
            return;
        };
        if let Err(error) = body.style().set_property("overflow", value) {
            log::warn!("Could not set body overflow to `{value}': {error:?}");
        }
    }
}

impl Surface for Document {
    type Listener = WindowListenerHandle;

    fn lock_scroll(&self) {
        Self::set_body_overflow("hidden");
    }

    fn unlock_scroll(&self) {
        Self::set_body_overflow("unset");
    }

    fn on_escape(&self, handler: Box<dyn Fn()>) -> WindowListenerHandle {
        window_event_listener(leptos::ev::keydown, move |event| {
            if event.key() == "Escape" {
                handler();
            }
        })
    }

    fn remove_listener(&self, listener: WindowListenerHandle) {
        listener.remove();
    }
}
