use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

/// Tracks the window's vertical scroll offset.
///
/// Each caller gets its own signal and its own listener registration; the
/// listener is removed when the calling component is disposed, after which
/// the returned signal no longer updates. Every scroll event is processed,
/// with no throttling or clamping.
pub fn use_scroll_offset() -> Signal<f64> {
    let (offset, set_offset) = signal(0.0);

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let y = window()
            .scroll_y()
            .expect("should be able to read window scroll offset");
        set_offset.set(y);
    });

    offset.into()
}
