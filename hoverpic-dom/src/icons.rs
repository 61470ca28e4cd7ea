#![cfg(target_arch = "wasm32")]

//! Nạp icon người đăng thật và phục hồi ảnh giữ chỗ khi tải lỗi.

use hoverpic_core::{DEFERRED_SRC_ATTR, POSTER_ICON_CLASS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlImageElement};

use crate::events;

/// Thay icon giữ chỗ bằng icon thật lấy từ thuộc tính `data-src`.
pub fn load_poster_icons(document: &Document) {
    if !events::dom_queries_supported(document) {
        return;
    }

    let containers = document.get_elements_by_class_name(POSTER_ICON_CLASS);
    for ix in 0..containers.length() {
        let Some(container) = containers.item(ix) else {
            continue;
        };
        let Some(img) = container
            .get_elements_by_tag_name("img")
            .item(0)
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        else {
            continue;
        };
        if img.get_attribute(DEFERRED_SRC_ATTR).is_some() {
            attach_recant_handler(&img);
            swap_deferred_src(&img);
        }
    }
}

/// Hoán đổi `src` hiện tại với URL trì hoãn trong `data-src`.
///
/// Sau hoán đổi, `data-src` giữ URL trước đó để còn đường phục hồi.
pub fn swap_deferred_src(img: &HtmlImageElement) {
    let Some(deferred) = img.get_attribute(DEFERRED_SRC_ATTR) else {
        return;
    };
    let current = img.src();
    img.set_src(&deferred);
    let _ = img.set_attribute(DEFERRED_SRC_ATTR, &current);
}

/// Gắn handler lỗi ảnh quay về ảnh giữ chỗ.
pub fn attach_recant_handler(img: &HtmlImageElement) {
    let handler = Closure::<dyn FnMut(Event)>::new(|event: Event| {
        recant_image(&event);
    });
    events::add_event(img.as_ref(), "error", handler.as_ref().unchecked_ref());
    handler.forget();
}

/// Ảnh thật tải lỗi: trả lại ảnh giữ chỗ và gỡ liên kết bọc quanh.
pub fn recant_image(event: &Event) {
    let Some(img) = events::event_image(event) else {
        return;
    };

    swap_deferred_src(&img);

    // Liên kết chết không được phép tiếp tục bọc ảnh giữ chỗ.
    let Some(link) = img.parent_node() else {
        return;
    };
    if !link.node_name().eq_ignore_ascii_case("a") {
        return;
    }
    let Some(parent) = link.parent_node() else {
        return;
    };
    let _ = parent.insert_before(img.as_ref(), Some(&link));
    let _ = parent.remove_child(&link);
}
