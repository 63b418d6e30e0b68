//! Document-level listeners bound to a scope.

// Only the browser build registers real listeners.
#![cfg_attr(not(all(feature = "web", target_arch = "wasm32")), allow(dead_code))]

/// Owns a registered listener and removes it when dropped.
pub struct ScopedListener {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl ScopedListener {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A guard with nothing to release.
    pub fn inert() -> Self {
        Self { teardown: None }
    }
}

impl Drop for ScopedListener {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

/// Calls `on_outside` for every `mousedown` whose target is not inside
/// `container`. The listener lives as long as the returned guard.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn on_click_outside(
    container: web_sys::Element,
    mut on_outside: impl FnMut() + 'static,
) -> ScopedListener {
    use wasm_bindgen::{JsCast, closure::Closure};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, outside clicks will not close the menu");
        return ScopedListener::inert();
    };

    let callback = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|node| container.contains(Some(&node)));
        if !inside {
            on_outside();
        }
    });

    if let Err(e) =
        document.add_event_listener_with_callback("mousedown", callback.as_ref().unchecked_ref())
    {
        log::warn!("Failed to register outside-click listener: {e:?}");
        return ScopedListener::inert();
    }

    ScopedListener::new(move || {
        if let Err(e) = document
            .remove_event_listener_with_callback("mousedown", callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove outside-click listener: {e:?}");
        }
    })
}
