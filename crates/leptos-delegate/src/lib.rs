//! Leptos Event Delegation
//!
//! Listeners bound once on a stable root element and routed to the child
//! matching a selector. Children can be replaced wholesale (`innerHTML`)
//! without losing their handlers.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// Delegated listeners attached to one root element.
///
/// Listeners stay bound while this value lives and are removed on drop.
pub struct Delegation {
    root: web_sys::Element,
    listeners: Vec<(&'static str, Listener)>,
}

impl Delegation {
    pub fn new(root: &web_sys::Element) -> Self {
        Self {
            root: root.clone(),
            listeners: Vec::new(),
        }
    }

    /// Bind `event` on the root; `handler` runs with the closest ancestor of
    /// the event target matching `selector`, if that element is inside the root
    pub fn on<F>(mut self, event: &'static str, selector: &'static str, mut handler: F) -> Self
    where
        F: FnMut(web_sys::Event, web_sys::Element) + 'static,
    {
        let root = self.root.clone();
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            if let Some(el) = closest(&root, &ev, selector) {
                handler(ev, el);
            }
        });

        match self
            .root
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
        {
            Ok(()) => self.listeners.push((event, listener)),
            Err(err) => log::warn!("[DELEGATE] Failed to bind {}: {:?}", event, err),
        }
        self
    }

    /// Event types currently bound, in binding order
    pub fn events(&self) -> Vec<&'static str> {
        self.listeners.iter().map(|(event, _)| *event).collect()
    }
}

impl Drop for Delegation {
    fn drop(&mut self) {
        for (event, listener) in self.listeners.drain(..) {
            let _ = self
                .root
                .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }
    }
}

/// Reactive-owner scoped holder for a `Delegation`.
///
/// Create it in a component body; the held listeners are detached when that
/// component is cleaned up, or when a new delegation replaces them.
#[derive(Clone, Copy)]
pub struct DelegationSlot(StoredValue<Option<Delegation>, LocalStorage>);

impl DelegationSlot {
    pub fn new() -> Self {
        Self(StoredValue::new_local(None))
    }

    pub fn set(&self, delegation: Delegation) {
        self.0.set_value(Some(delegation));
    }

    pub fn is_bound(&self) -> bool {
        self.0.with_value(Option::is_some)
    }

    /// Detach the held listeners; no-op once the owner is disposed
    pub fn clear(&self) {
        let _ = self.0.try_set_value(None);
    }
}

impl Default for DelegationSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the element an event acted on: the closest ancestor-or-self of the
/// target matching `selector`, restricted to `root`'s subtree
pub fn closest(
    root: &web_sys::Element,
    event: &web_sys::Event,
    selector: &str,
) -> Option<web_sys::Element> {
    let target = event.target()?;
    // Text nodes (e.g. inside a contenteditable label) start from their parent
    let start = match target.dyn_into::<web_sys::Element>() {
        Ok(el) => el,
        Err(other) => other.dyn_into::<web_sys::Node>().ok()?.parent_element()?,
    };
    let matched = start.closest(selector).ok().flatten()?;
    let node: &web_sys::Node = matched.as_ref();
    root.contains(Some(node)).then_some(matched)
}

/// Read a `data-*` attribute
pub fn data_attr(el: &web_sys::Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{}", name))
}
