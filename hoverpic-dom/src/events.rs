#![cfg(target_arch = "wasm32")]

//! Shim đăng ký sự kiện và dò khả năng DOM của trình duyệt.

use hoverpic_core::EnhanceError;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, EventTarget, HtmlImageElement};

/// Gắn handler vào target, ưu tiên cơ chế chuẩn `addEventListener`.
///
/// Trình duyệt không có cơ chế chuẩn thì gán thẳng thuộc tính `on<event>`;
/// cả hai đều thất bại thì bỏ qua trong im lặng.
pub fn add_event(target: &EventTarget, event_type: &str, handler: &Function) {
    if target
        .add_event_listener_with_callback(event_type, handler)
        .is_ok()
    {
        return;
    }

    let key = JsValue::from_str(&format!("on{event_type}"));
    let _ = Reflect::set(target.as_ref(), &key, handler.as_ref());
}

/// Document có hỗ trợ truy vấn phần tử theo class hay không.
pub fn dom_queries_supported(document: &Document) -> bool {
    Reflect::get(
        document.as_ref(),
        &JsValue::from_str("getElementsByClassName"),
    )
    .map(|value| value.is_function())
    .unwrap_or(false)
}

/// Lấy ảnh phát sinh sự kiện, chấp nhận cả mô hình sự kiện kế thừa.
pub fn event_image(event: &Event) -> Option<HtmlImageElement> {
    event
        .target()
        .or_else(|| event.src_element())
        .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
}

/// Đổi lỗi JS thô thành [`EnhanceError`] mang thông điệp đọc được.
pub fn dom_err(err: JsValue) -> EnhanceError {
    EnhanceError::Dom(format!("{err:?}"))
}
