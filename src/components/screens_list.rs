//! Screens List Component
//!
//! The reorder/nest list shared by the describe and docs steps.
//! Drag events go through the `screen-tree` reducer; this component only
//! holds the drag state and applies whatever comes back.

use leptos::prelude::*;
use leptos_dragdrop::{DndCallbacks, RowPointer};
use screen_tree::{DragInput, DragState, PointerSample, ScreenId};

use crate::components::ScreenRow;
use crate::context::use_app_context;
use crate::store::{store_reduce_drag, store_screens};
use crate::tree::flatten_tree;

#[component]
pub fn ScreensList(
    /// Whether descriptions can be edited in place
    editable: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let drag = RwSignal::new(DragState::Idle);

    let apply = move |input: DragInput| {
        let zone = ctx.config().dnd;
        let state = drag.get_untracked();
        let reduced = store_reduce_drag(&store, &state, input, &zone);
        if reduced.state != state {
            drag.set(reduced.state);
        }
        if let Some(notice) = reduced.notice {
            ctx.notify(notice);
        }
    };

    let dnd = DndCallbacks {
        on_start: Callback::new(move |id: String| {
            log::debug!("[DND] drag start: {}", id);
            apply(DragInput::Begin(ScreenId::new(id)));
        }),
        on_over: Callback::new(move |pointer: RowPointer| {
            apply(DragInput::Over(PointerSample {
                hovered_index: pointer.index,
                offset_fraction: pointer.offset_fraction,
            }));
        }),
        on_leave: Callback::new(move |_| apply(DragInput::Leave)),
        on_drop: Callback::new(move |_| {
            log::debug!("[DND] drop: target={:?}", drag.get_untracked().target());
            apply(DragInput::Drop);
        }),
        on_end: Callback::new(move |_| apply(DragInput::Cancel)),
    };

    let rows = move || flatten_tree(&store_screens(&store));

    view! {
        <div class="screens-list">
            <p class="screens-hint">
                "Drag a screen to reorder it. Drop it on the right edge of another screen to nest it."
            </p>
            <Show
                when=move || !rows().is_empty()
                fallback=|| view! { <p class="empty">"No screens yet."</p> }
            >
                <For
                    each=rows
                    key=|row| {
                        // Descriptions are left out so typing does not rebuild the row
                        (
                            row.item.id.clone(),
                            row.index,
                            row.depth,
                            row.has_children,
                            row.item.is_expanded,
                            row.item.parent_id.clone(),
                        )
                    }
                    children=move |row| {
                        view! {
                            <ScreenRow row=row dnd=dnd drag=drag.read_only() editable=editable />
                        }
                    }
                />
            </Show>
        </div>
    }
}
