//! Form Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Form-wide values provided via context: the resolved year set and the row
/// id allocator every section draws `<For>` keys from.
#[derive(Clone, Copy)]
pub struct FormContext {
    /// Calendar years covered by the award period, recomputed from the dates
    pub years: Memo<Vec<i32>>,
    next_id: StoredValue<u32>,
}

impl FormContext {
    pub fn new(years: Memo<Vec<i32>>, first_free_id: u32) -> Self {
        Self {
            years,
            next_id: StoredValue::new(first_free_id),
        }
    }

    /// Hand out the next row/entry id.
    pub fn alloc_id(&self) -> u32 {
        let id = self.next_id.get_value();
        self.next_id.update_value(|next| *next += 1);
        id
    }
}
