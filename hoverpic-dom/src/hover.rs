#![cfg(target_arch = "wasm32")]

//! Điều khiển hiện, co giãn và ẩn ảnh xem trước theo sự kiện chuột.

use hoverpic_core::{
    fit_preview, EnhanceConfig, NaturalSize, PreviewPlacement, Viewport, PICTURE_CLASS,
    THUMBNAIL_CLASS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement};

use crate::events;

/// Gắn chung một handler chuột cho mọi ảnh thu nhỏ.
///
/// Phải chạy sau lượt dựng ảnh xem trước: handler dựa vào cấu trúc
/// liên kết bao quanh mà lượt dựng tạo ra.
pub fn set_mouse_handlers(document: &Document, config: &EnhanceConfig) {
    if !events::dom_queries_supported(document) {
        return;
    }

    let doc = document.clone();
    let cfg = config.clone();
    let handler = Closure::<dyn FnMut(Event) -> bool>::new(move |event: Event| {
        handle_mouse_event(&doc, &event, &cfg);
        // Trả về false để chặn hành vi mặc định của trình duyệt.
        false
    });

    let thumbnails = document.get_elements_by_class_name(THUMBNAIL_CLASS);
    for ix in 0..thumbnails.length() {
        let Some(thumb) = thumbnails
            .item(ix)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let callback = handler.as_ref().unchecked_ref();
        thumb.set_onmouseover(Some(callback));
        thumb.set_onmouseout(Some(callback));
        thumb.set_onmousedown(Some(callback));
    }
    handler.forget();
}

/// Một sự kiện chuột trên ảnh thu nhỏ: hiện hoặc ẩn ảnh xem trước liền kề.
fn handle_mouse_event(document: &Document, event: &Event, config: &EnhanceConfig) {
    let Some(thumb) = events::event_image(event) else {
        return;
    };

    // Đi lên cấu trúc lượt dựng tạo ra: liên kết -> bài đăng -> timeline.
    let Some(link) = thumb.parent_element() else {
        return;
    };
    let Some(post) = link.parent_element() else {
        return;
    };
    let Some(timeline) = post.parent_element() else {
        return;
    };

    let Some(picture) = post
        .get_elements_by_class_name(PICTURE_CLASS)
        .item(0)
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    else {
        return;
    };

    match event.type_().to_lowercase().as_str() {
        "mouseover" => show_preview(document, &timeline, &picture, config),
        "mouseout" | "mousedown" => hide_preview(&picture),
        _ => {}
    }
}

fn show_preview(
    document: &Document,
    timeline: &Element,
    picture: &HtmlImageElement,
    config: &EnhanceConfig,
) {
    // Hình học đo lại mỗi lần rê chuột: bố cục có thể đã đổi.
    let rect = timeline.get_bounding_client_rect();
    let viewport = Viewport {
        width: rect.right() - rect.left(),
        height: document
            .document_element()
            .map(|root| f64::from(root.client_height()))
            .unwrap_or(0.0),
        top: rect.top(),
    };

    // Phải hiện ảnh trước thì mới đo được kích thước dàn trang của nó.
    if picture.style().set_property("display", "block").is_err() {
        return;
    }

    let natural = NaturalSize {
        width: f64::from(picture.offset_width()),
        height: f64::from(picture.offset_height()),
    };

    apply_placement(picture, fit_preview(natural, viewport, config));
}

fn apply_placement(picture: &HtmlImageElement, placement: PreviewPlacement) {
    let style = picture.style();
    let _ = style.set_property("left", &format!("{}px", placement.left));
    let _ = style.set_property("top", &format!("{}px", placement.top));
    let _ = style.set_property("width", &format!("{}px", placement.width));
    let _ = style.set_property("height", &format!("{}px", placement.height));
}

fn hide_preview(picture: &HtmlImageElement) {
    let _ = picture.style().set_property("display", "none");
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// Cấu trúc sau lượt dựng: timeline > bài đăng > liên kết > ảnh thu nhỏ,
    /// ảnh xem trước là em kế của liên kết.
    fn build_enhanced_post() -> (Element, HtmlElement, HtmlImageElement) {
        let document = document();
        let timeline = document.create_element("div").unwrap();
        timeline
            .set_attribute("style", "width: 700px")
            .unwrap();
        let post = document.create_element("div").unwrap();
        let link = document.create_element("a").unwrap();
        link.set_attribute("href", "https://pic.example.com/a.jpg:large")
            .unwrap();

        let thumb: HtmlElement = document
            .create_element("img")
            .unwrap()
            .dyn_into()
            .unwrap();
        thumb.set_class_name(THUMBNAIL_CLASS);

        let picture: HtmlImageElement = document
            .create_element("img")
            .unwrap()
            .dyn_into()
            .unwrap();
        picture.set_class_name(PICTURE_CLASS);
        picture.style().set_property("display", "none").unwrap();

        link.append_child(&thumb).unwrap();
        post.append_child(&link).unwrap();
        post.append_child(&picture).unwrap();
        timeline.append_child(&post).unwrap();
        document.body().unwrap().append_child(&timeline).unwrap();
        (timeline, thumb, picture)
    }

    fn teardown(timeline: &Element) {
        document().body().unwrap().remove_child(timeline).unwrap();
    }

    #[wasm_bindgen_test]
    fn mouseover_reveals_and_places_preview() {
        let (timeline, thumb, picture) = build_enhanced_post();
        set_mouse_handlers(&document(), &EnhanceConfig::default());

        let event = Event::new("mouseover").unwrap();
        thumb.dispatch_event(&event).unwrap();

        let style = picture.style();
        assert_eq!(style.get_property_value("display").unwrap(), "block");
        assert!(style.get_property_value("left").unwrap().ends_with("px"));
        assert!(style.get_property_value("top").unwrap().ends_with("px"));
        assert!(style.get_property_value("width").unwrap().ends_with("px"));
        assert!(style.get_property_value("height").unwrap().ends_with("px"));

        teardown(&timeline);
    }

    #[wasm_bindgen_test]
    fn mouseout_hides_preview_again() {
        let (timeline, thumb, picture) = build_enhanced_post();
        set_mouse_handlers(&document(), &EnhanceConfig::default());

        thumb
            .dispatch_event(&Event::new("mouseover").unwrap())
            .unwrap();
        thumb
            .dispatch_event(&Event::new("mouseout").unwrap())
            .unwrap();

        assert_eq!(
            picture.style().get_property_value("display").unwrap(),
            "none"
        );

        teardown(&timeline);
    }

    #[wasm_bindgen_test]
    fn mousedown_dismisses_like_mouseout() {
        let (timeline, thumb, picture) = build_enhanced_post();
        set_mouse_handlers(&document(), &EnhanceConfig::default());

        thumb
            .dispatch_event(&Event::new("mouseover").unwrap())
            .unwrap();
        thumb
            .dispatch_event(&Event::new("mousedown").unwrap())
            .unwrap();

        assert_eq!(
            picture.style().get_property_value("display").unwrap(),
            "none"
        );

        teardown(&timeline);
    }

    #[wasm_bindgen_test]
    fn thumbnail_without_preview_stays_idle() {
        let document = document();
        let timeline = document.create_element("div").unwrap();
        let post = document.create_element("div").unwrap();
        let link = document.create_element("a").unwrap();
        let thumb: HtmlElement = document
            .create_element("img")
            .unwrap()
            .dyn_into()
            .unwrap();
        thumb.set_class_name(THUMBNAIL_CLASS);
        link.append_child(&thumb).unwrap();
        post.append_child(&link).unwrap();
        timeline.append_child(&post).unwrap();
        document.body().unwrap().append_child(&timeline).unwrap();

        set_mouse_handlers(&document, &EnhanceConfig::default());

        // Không có ảnh xem trước: handler phải là no-op, không panic.
        thumb
            .dispatch_event(&Event::new("mouseover").unwrap())
            .unwrap();

        document.body().unwrap().remove_child(&timeline).unwrap();
    }
}
