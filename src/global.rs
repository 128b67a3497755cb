use wasm_bindgen::prelude::JsValue;
use wasm_bindgen::JsCast;
use web_sys::{self, DedicatedWorkerGlobalScope, Window, WorkerGlobalScope};

/// The scope the module runs in: a dedicated worker or a window.
pub fn get_global_scope() -> Option<JsValue> {
    // Try worker scope first
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Some(JsValue::from(scope));
    }

    // Fallback to window
    web_sys::window().map(JsValue::from)
}

pub fn worker_scope() -> Option<WorkerGlobalScope> {
    get_global_scope()?.dyn_into::<WorkerGlobalScope>().ok()
}

pub fn window() -> Option<Window> {
    get_global_scope()?.dyn_into::<Window>().ok()
}
