//! Todo App Shell
//!
//! Mounts the widget: reuses the page's container element when it exists,
//! otherwise renders one. Once the container is in the DOM the store is
//! attached, the first render runs and the delegated listeners are bound.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_delegate::DelegationSlot;

use crate::bindings;
use crate::config::Config;
use crate::store::TodoStore;
use crate::view::CONTAINER_CLASS;

fn find_container(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

fn mount(store: TodoStore, slot: DelegationSlot, container: web_sys::Element) {
    if let Err(err) = container.class_list().add_1(CONTAINER_CLASS) {
        log::warn!("[APP] Could not tag container: {:?}", err);
    }
    store.attach(container.clone());
    store.render();
    let delegation = bindings::bind(store, &container);
    log::debug!("[APP] Delegating {:?}", delegation.events());
    slot.set(delegation);
    log::info!("[APP] Mounted on #{}", container.id());
}

#[component]
pub fn TodoApp(config: Config) -> impl IntoView {
    let store = TodoStore::new(&config);
    let existing = find_container(&config.container_id);
    let owns_container = existing.is_none();
    let container_ref = NodeRef::<Div>::new();
    let slot = DelegationSlot::new();
    // A reused page container outlives the widget; unbind before it goes
    on_cleanup(move || slot.clear());

    // Runs after the view is in the DOM; reruns once the node ref fills
    Effect::new(move |_| {
        let container: Option<web_sys::Element> = match &existing {
            Some(el) => Some(el.clone()),
            None => container_ref.get().map(Into::into),
        };
        if let Some(container) = container {
            if !slot.is_bound() {
                mount(store, slot, container);
            }
        }
    });

    if owns_container {
        log::debug!("[APP] No #{} in page, creating it", config.container_id);
    }

    let container_id = config.container_id;
    view! {
        {owns_container.then(move || view! {
            <div id=container_id node_ref=container_ref></div>
        })}
    }
}
