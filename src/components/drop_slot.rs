//! Drop Slot Component
//!
//! A horizontal line between rows marking where a dragged task will land.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_slot_mouseenter, DndSignals};

/// Drop slot shown between rows while dragging
#[component]
pub fn DropSlot(
    dnd: DndSignals,
    /// Slot index: `k` sits just above row `k`
    slot: usize,
) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);

    let slot_class = move || {
        let mut c = String::from("drop-slot");
        if dnd.dragging_read.get().is_none() { c.push_str(" hidden"); }
        if dnd.drop_slot_read.get() == Some(slot) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
