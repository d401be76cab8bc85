//! JS values kept on the thread that created them.
//!
//! The logger's ports are `Send + Sync`, which a `JsValue` is not. Adapters
//! hold a [`JsHandle`] instead: a plain id into a thread-local table. A handle
//! used from another thread resolves to nothing.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use wasm_bindgen::JsValue;

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

thread_local! {
    static HANDLES: RefCell<HashMap<u32, JsValue>> = RefCell::new(HashMap::new());
}

#[derive(Debug)]
pub struct JsHandle(u32);

impl JsHandle {
    pub fn new(value: JsValue) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        HANDLES.with(|handles| handles.borrow_mut().insert(id, value));
        Self(id)
    }

    /// A clone of the stored value. The table is not borrowed while the
    /// caller uses it, so JS callbacks may register handles of their own.
    pub fn get(&self) -> Option<JsValue> {
        HANDLES
            .try_with(|handles| handles.borrow().get(&self.0).cloned())
            .ok()
            .flatten()
    }
}

impl Drop for JsHandle {
    fn drop(&mut self) {
        let _ = HANDLES.try_with(|handles| {
            if let Ok(mut handles) = handles.try_borrow_mut() {
                handles.remove(&self.0);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn stored() -> usize {
        HANDLES.with(|handles| handles.borrow().len())
    }

    #[wasm_bindgen_test]
    fn test_handle_resolves_to_its_value() {
        let handle = JsHandle::new(JsValue::from_str("channel"));
        assert_eq!(handle.get().and_then(|v| v.as_string()).as_deref(), Some("channel"));
    }

    #[wasm_bindgen_test]
    fn test_drop_releases_the_value() {
        let before = stored();
        let handle = JsHandle::new(JsValue::from(1));
        assert_eq!(stored(), before + 1);
        drop(handle);
        assert_eq!(stored(), before);
    }
}
