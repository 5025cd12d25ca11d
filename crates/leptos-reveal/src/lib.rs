//! Leptos Reveal Utilities
//!
//! One-shot scroll reveal for Leptos using IntersectionObserver.
//! A region is marked the first time it crosses the visibility threshold
//! and is never un-marked, even if it leaves and re-enters the viewport.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Fraction of the region that must be visible before it reveals
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport bottom so regions reveal slightly after entering
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Observer configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN,
        }
    }
}

/// Holds the reveal callback until the first intersecting entry.
///
/// Taking the callback out is the only guard: once it has run, every later
/// entry is a no-op.
pub struct RevealGate<F: FnOnce()> {
    pending: Option<F>,
}

impl<F: FnOnce()> RevealGate<F> {
    pub fn new(on_reveal: F) -> Self {
        Self {
            pending: Some(on_reveal),
        }
    }

    /// Feed one observer entry; returns true if this entry revealed the region
    pub fn on_entry(&mut self, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        self.release()
    }

    /// Run the callback now if it has not run yet
    pub fn release(&mut self) -> bool {
        match self.pending.take() {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.pending.is_none()
    }
}

/// Offsets (ms from the trigger) at which each of `count` items is released
pub fn stagger_offsets(count: usize, step_ms: u32) -> Vec<u32> {
    (0..count).map(|index| index as u32 * step_ms).collect()
}

/// Observe `element` and run `on_reveal` the first time it intersects.
///
/// The observer disconnects itself after firing. If the browser has no
/// IntersectionObserver the callback runs immediately so content is not
/// left hidden.
pub fn observe_once<F>(element: &web_sys::Element, options: &RevealOptions, on_reveal: F)
where
    F: FnOnce() + 'static,
{
    let gate = Rc::new(RefCell::new(RevealGate::new(on_reveal)));

    let callback_gate = gate.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if callback_gate.borrow_mut().on_entry(entry.is_intersecting()) {
                    observer.unobserve(&entry.target());
                    observer.disconnect();
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            callback.forget();
        }
        Err(_) => {
            gate.borrow_mut().release();
        }
    }
}

/// Latched visibility signal for a div: false until first reveal, then true forever
pub fn use_reveal(node_ref: NodeRef<Div>, options: RevealOptions) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let mut attached = false;

    Effect::new(move |_| {
        if attached {
            return;
        }
        if let Some(el) = node_ref.get() {
            attached = true;
            observe_once(&el, &options, move || set_revealed.set(true));
        }
    });

    revealed
}

/// Release `count` items one by one, `step_ms` apart, once `trigger` turns true.
///
/// The returned signal holds how many items have been released so far;
/// item `i` is animated when `i < released`.
pub fn use_stagger(trigger: ReadSignal<bool>, count: usize, step_ms: u32) -> ReadSignal<usize> {
    let (released, set_released) = signal(0usize);
    let mut started = false;

    Effect::new(move |_| {
        if started || !trigger.get() {
            return;
        }
        started = true;
        spawn_local(async move {
            let mut elapsed = 0;
            for (index, offset) in stagger_offsets(count, step_ms).into_iter().enumerate() {
                if offset > elapsed {
                    TimeoutFuture::new(offset - elapsed).await;
                    elapsed = offset;
                }
                set_released.set(index + 1);
            }
        });
    });

    released
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_gate_ignores_entries_outside_viewport() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let mut gate = RevealGate::new(move || c.set(c.get() + 1));

        assert!(!gate.on_entry(false));
        assert!(!gate.on_entry(false));
        assert!(!gate.has_fired());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_gate_fires_once_on_reentry() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let mut gate = RevealGate::new(move || c.set(c.get() + 1));

        assert!(gate.on_entry(true));
        // Several intersecting entries in one batch, then leave and re-enter
        assert!(!gate.on_entry(true));
        assert!(!gate.on_entry(false));
        assert!(!gate.on_entry(true));
        assert!(!gate.release());

        assert!(gate.has_fired());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_default_options() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn test_stagger_offsets() {
        assert_eq!(stagger_offsets(5, 100), vec![0, 100, 200, 300, 400]);
        assert!(stagger_offsets(0, 100).is_empty());
    }
}
