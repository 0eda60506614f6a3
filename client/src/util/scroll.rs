//! Window scroll subscription shared by the hero image and navigation bar.
//!
//! Scroll events are coalesced to at most one sample per animation frame.
//! The listener lives exactly as long as the component that registered it:
//! it is removed in `on_cleanup`, and a frame that fires after disposal
//! finds its signal gone and does nothing. SSR paths no-op.

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

/// Call `on_sample` with `window.scrollY` for the lifetime of the calling
/// component. The current position is sampled once after mount.
pub fn use_window_scroll<F>(on_sample: F)
where
    F: Fn(f64) + Clone + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        Effect::new({
            let on_sample = on_sample.clone();
            move || on_sample(current_scroll_y())
        });

        let frame_pending = RwSignal::new(false);
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            if frame_pending.try_get_untracked().unwrap_or(true) {
                return;
            }
            frame_pending.set(true);
            let on_sample = on_sample.clone();
            request_animation_frame(move || {
                if frame_pending.try_set(false).is_some() {
                    return;
                }
                on_sample(current_scroll_y());
            });
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_sample;
    }
}

#[cfg(feature = "hydrate")]
fn current_scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}
