//! New Item Form Component
//!
//! Form for creating new items with name and description.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::context::use_items_context;
use crate::lifecycle::ViewLifetime;
use crate::models::{Draft, DraftField};
use crate::store::{
    store_begin_highlight, store_end_highlight, store_prepend_item, store_set_error, ItemsStore,
    CREATE_ERROR, HIGHLIGHT_MS, SCROLL_DELAY_MS,
};

/// Highlight the list for a moment and scroll it into view
fn flash_list(store: ItemsStore, lifetime: ViewLifetime, list_ref: NodeRef<Div>) {
    let generation = store_begin_highlight(&store);

    spawn_local(async move {
        TimeoutFuture::new(SCROLL_DELAY_MS).await;
        if !lifetime.is_alive() {
            return;
        }
        if let Some(list) = list_ref.get_untracked() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            list.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    spawn_local(async move {
        TimeoutFuture::new(HIGHLIGHT_MS).await;
        if lifetime.is_alive() {
            store_end_highlight(&store, generation);
        }
    });
}

/// Form for creating new items; `seed` is the initial and post-create draft
#[component]
pub fn NewItemForm(seed: Draft, list_ref: NodeRef<Div>) -> impl IntoView {
    let ctx = use_items_context();

    let (draft, set_draft) = signal(seed.clone());
    let seed = StoredValue::new(seed);

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(new_item) = draft.get_untracked().submission() else {
            return;
        };
        let ctx = ctx.clone();

        spawn_local(async move {
            let signal = ctx.lifetime.signal();
            let result = ctx.client.create_item(&new_item, signal.as_ref()).await;
            if !ctx.lifetime.is_alive() {
                return;
            }
            match result {
                Ok(created) => {
                    web_sys::console::log_1(&format!("[ITEMS] Created item #{}", created.id).into());
                    store_prepend_item(&ctx.store, created);
                    set_draft.set(seed.get_value());
                    flash_list(ctx.store, ctx.lifetime, list_ref);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[ITEMS] Create failed: {}", e).into());
                    store_set_error(&ctx.store, CREATE_ERROR);
                }
            }
        });
    };

    let update_field = move |field: DraftField, value: String| {
        set_draft.update(|d| d.set(field, value));
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="form-group">
                <label for="name">"Name:"</label>
                <input
                    type="text"
                    id="name"
                    name=DraftField::Name.input_name()
                    required=true
                    placeholder="Enter item name"
                    prop:value=move || draft.get().name
                    on:input=move |ev| update_field(DraftField::Name, event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="description">"Description:"</label>
                <textarea
                    id="description"
                    name=DraftField::Description.input_name()
                    placeholder="Enter item description"
                    prop:value=move || draft.get().description
                    on:input=move |ev| update_field(DraftField::Description, event_target_value(&ev))
                />
            </div>
            <button type="submit">"Add Item"</button>
        </form>
    }
}
