//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for Leptos row lists.
//! Rows report their list index and how far across the row the pointer is;
//! what that means (reorder, nest, reject) is up to the caller.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Transfer type carrying the dragged row id
pub const DND_FORMAT: &str = "text/plain";

/// Pointer position over a row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowPointer {
    /// Index of the hovered row in the caller's list
    pub index: usize,
    /// Horizontal offset within the row, 0.0 (left edge) to 1.0 (right edge)
    pub offset_fraction: f64,
}

/// Drag lifecycle callbacks shared by every row of one list
#[derive(Clone, Copy)]
pub struct DndCallbacks {
    pub on_start: Callback<String>,
    pub on_over: Callback<RowPointer>,
    pub on_leave: Callback<()>,
    pub on_drop: Callback<()>,
    pub on_end: Callback<()>,
}

/// Offset of `client_x` across a box starting at `left` with `width`
pub fn offset_fraction(client_x: f64, left: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    ((client_x - left) / width).clamp(0.0, 1.0)
}

/// Read the pointer position relative to the element the handler is bound to
pub fn row_pointer(ev: &web_sys::DragEvent, index: usize) -> Option<RowPointer> {
    let element = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = element.get_bounding_client_rect();
    Some(RowPointer {
        index,
        offset_fraction: offset_fraction(ev.client_x() as f64, rect.left(), rect.width()),
    })
}

/// Create dragstart handler for a row's drag handle.
///
/// The handle's parent element (the row) is used as the drag image.
pub fn make_on_dragstart(dnd: DndCallbacks, row_id: String) -> impl Fn(web_sys::DragEvent) + Clone + 'static {
    move |ev: web_sys::DragEvent| {
        // Firefox refuses to start a drag without transfer data
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            let row = ev
                .current_target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .and_then(|handle| handle.parent_element());
            if let Some(row) = row {
                dt.set_drag_image(&row, 0, 0);
            }
            if let Err(err) = dt.set_data(DND_FORMAT, &row_id) {
                log::warn!("[DND] could not set transfer data: {:?}", err);
            }
        }
        dnd.on_start.run(row_id.clone());
    }
}

/// Create dragover handler for a row; reports every pointer sample
pub fn make_on_dragover(dnd: DndCallbacks, index: usize) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        // Required for the row to accept a drop
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        if let Some(pointer) = row_pointer(&ev, index) {
            dnd.on_over.run(pointer);
        }
    }
}

/// Create dragleave handler for a row
pub fn make_on_dragleave(dnd: DndCallbacks) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        dnd.on_leave.run(());
    }
}

/// Create drop handler for a row
pub fn make_on_drop(dnd: DndCallbacks) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        dnd.on_drop.run(());
    }
}

/// Create dragend handler; fires on the source row whether or not a drop happened
pub fn make_on_dragend(dnd: DndCallbacks) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        dnd.on_end.run(());
    }
}

/// Files carried by a drop from outside the page
pub fn dropped_files(ev: &web_sys::DragEvent) -> Vec<web_sys::File> {
    let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
        return Vec::new();
    };
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}
