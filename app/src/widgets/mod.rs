pub mod carousel;
pub mod modal;
pub mod nav;
pub mod overlay;

use std::time::Duration;

use leptos::prelude::*;

/// Call `tick` every `period` while the current owner is alive. Only runs in the browser.
pub(crate) fn autoplay(period: Duration, tick: impl Fn() + Clone + 'static) {
    Effect::new(move |_| {
        match set_interval_with_handle(tick.clone(), period) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(error) => log::warn!("Could not start timer: {error:?}"),
        }
    });
}
