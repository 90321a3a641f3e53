//! Screen Row Component
//!
//! One row of the screens list, dragged by its handle.

use leptos::prelude::*;
use leptos_dragdrop::{
    make_on_dragend, make_on_dragleave, make_on_dragover, make_on_dragstart, make_on_drop, DndCallbacks,
};
use screen_tree::DragState;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::Notice;
use crate::store::store_update_screens;
use crate::tree::DisplayRow;

const INDENT_PX: usize = 32;

#[component]
pub fn ScreenRow(
    row: DisplayRow,
    dnd: DndCallbacks,
    drag: ReadSignal<DragState>,
    editable: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let soft_limit = ctx.config().description.soft_limit;

    let DisplayRow { item, depth, index, has_children } = row;
    let id = item.id.clone();
    let image = item.image.clone();
    let expanded = item.is_expanded;

    let (chars, set_chars) = signal(item.description.chars().count());

    let row_class = {
        let id = id.clone();
        move || {
            let state = drag.get();
            let mut class = String::from("screen-row");
            if state.dragged() == Some(&id) {
                class.push_str(" dragging");
            }
            match state.target() {
                Some(target) if target.index == index && target.is_nested => class.push_str(" drop-nest"),
                Some(target) if target.index == index => class.push_str(" drop-before"),
                _ => {}
            }
            if depth > 0 {
                class.push_str(" nested");
            }
            class
        }
    };

    let toggle = {
        let id = id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            store_update_screens(&store, |screens| screens.toggle_expanded(&id));
        }
    };

    let on_delete = {
        let id = id.clone();
        let image = image.clone();
        Callback::new(move |_| match store_update_screens(&store, |screens| screens.delete(&id)) {
            Ok(_) => {
                if image.starts_with("blob:") {
                    if let Err(err) = web_sys::Url::revoke_object_url(&image) {
                        log::warn!("[SCREENS] could not revoke {}: {:?}", image, err);
                    }
                }
                ctx.notify(Notice::success("Screen deleted"));
            }
            Err(rejected) => ctx.notify(rejected.into()),
        })
    };

    let description = if editable {
        let id = id.clone();
        view! {
            <div class="screen-description">
                <textarea
                    class="description-input"
                    placeholder="What does this screen do?"
                    prop:value=item.description.clone()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_chars.set(value.chars().count());
                        store_update_screens(&store, |screens| screens.set_description(&id, value));
                    }
                />
                <span class=move || {
                    if chars.get() > soft_limit { "char-count over" } else { "char-count" }
                }>
                    {move || format!("{} / {}", chars.get(), soft_limit)}
                </span>
            </div>
        }
        .into_any()
    } else {
        let text = if item.description.trim().is_empty() {
            "No description".to_string()
        } else {
            item.description.clone()
        };
        view! { <p class="screen-description readonly">{text}</p> }.into_any()
    };

    view! {
        <div
            class=row_class
            style=format!("margin-left: {}px;", depth * INDENT_PX)
            on:dragover=make_on_dragover(dnd, index)
            on:dragleave=make_on_dragleave(dnd)
            on:drop=make_on_drop(dnd)
        >
            // Drag starts from the handle only; Firefox blocks textarea selection inside a draggable row
            <span
                class="drag-handle"
                title="Drag to reorder"
                draggable="true"
                on:dragstart=make_on_dragstart(dnd, id.as_str().to_string())
                on:dragend=make_on_dragend(dnd)
            >
                "⋮⋮"
            </span>
            {if has_children {
                view! {
                    <button class="collapse-btn" on:click=toggle>
                        {if expanded { "▼" } else { "▶" }}
                    </button>
                }
                    .into_any()
            } else {
                view! { <span class="collapse-placeholder">"·"</span> }.into_any()
            }}
            <img class="screen-thumb" src=image alt="" draggable="false" />
            {description}
            {editable.then(|| view! {
                <DeleteConfirmButton
                    button_class="delete-btn"
                    confirm_text="Delete screen?"
                    on_confirm=on_delete
                />
            })}
        </div>
    }
}
