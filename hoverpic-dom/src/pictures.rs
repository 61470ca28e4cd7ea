#![cfg(target_arch = "wasm32")]

//! Dựng ảnh xem trước và liên kết ảnh lớn cho từng ảnh thu nhỏ.

use hoverpic_core::{
    plan_sources, EnhanceConfig, EnhanceError, DEFERRED_SRC_ATTR, PICTURE_CLASS, THUMBNAIL_CLASS,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

use crate::events::{self, dom_err};
use crate::icons;

/// Văn bản thay thế cho ảnh xem trước.
const PICTURE_ALT: &str = "larger picture";

/// Duyệt mọi ảnh thu nhỏ: nạp ảnh thật, chèn ảnh xem trước, bọc liên kết.
///
/// Bề rộng khung timeline đo một lần cho cả lượt dựng; không tìm thấy
/// khung theo selector thì cả lượt là no-op.
pub fn add_pictures(
    document: &Document,
    timeline_selector: &str,
    config: &EnhanceConfig,
) -> Result<(), EnhanceError> {
    if !events::dom_queries_supported(document) {
        return Ok(());
    }

    let Some(timeline) = document
        .query_selector(timeline_selector)
        .map_err(|err| EnhanceError::Dom(format!("Selector không hợp lệ: {err:?}")))?
    else {
        return Ok(());
    };

    let rect = timeline.get_bounding_client_rect();
    let viewport_width = rect.right() - rect.left();

    let thumbnails = document.get_elements_by_class_name(THUMBNAIL_CLASS);
    for ix in 0..thumbnails.length() {
        let Some(thumb) = thumbnails
            .item(ix)
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        else {
            continue;
        };
        build_picture(document, &thumb, viewport_width, config)?;
    }

    Ok(())
}

/// Một ảnh thu nhỏ: đổi về nguồn thật, chèn ảnh xem trước, bọc liên kết.
fn build_picture(
    document: &Document,
    thumb: &HtmlImageElement,
    viewport_width: f64,
    config: &EnhanceConfig,
) -> Result<(), EnhanceError> {
    // Nguồn logic: URL trì hoãn nếu có, không thì src đang hiển thị.
    let deferred = thumb.get_attribute(DEFERRED_SRC_ATTR);
    let thumb_src = match &deferred {
        Some(real) => {
            icons::attach_recant_handler(thumb);
            icons::swap_deferred_src(thumb);
            real.clone()
        }
        None => thumb.src(),
    };

    let plan = plan_sources(&thumb_src, viewport_width, config);

    let picture: HtmlImageElement = document
        .create_element("img")
        .map_err(dom_err)?
        .dyn_into()
        .map_err(|_| EnhanceError::Dom("Phần tử img không đúng kiểu".into()))?;
    picture
        .style()
        .set_property("display", "none")
        .map_err(dom_err)?;

    // Ảnh thu nhỏ vốn dùng ảnh giữ chỗ thì ảnh xem trước cũng cần đường lui:
    // sau lượt hoán đổi, `data-src` của ảnh thu nhỏ đang giữ URL giữ chỗ.
    if deferred.is_some() {
        if let Some(placeholder) = thumb.get_attribute(DEFERRED_SRC_ATTR) {
            picture
                .set_attribute(DEFERRED_SRC_ATTR, &placeholder)
                .map_err(dom_err)?;
            icons::attach_recant_handler(&picture);
        }
    }

    picture.set_src(&plan.preview_src);
    picture.set_class_name(PICTURE_CLASS);
    picture.set_alt(PICTURE_ALT);

    let Some(parent) = thumb.parent_node() else {
        return Ok(());
    };
    parent
        .insert_before(picture.as_ref(), thumb.next_sibling().as_ref())
        .map_err(dom_err)?;

    // Bọc ảnh thu nhỏ trong liên kết tới biến thể lớn hơn.
    let link = document.create_element("a").map_err(dom_err)?;
    link.set_attribute("href", &plan.link_href).map_err(dom_err)?;
    parent
        .insert_before(link.as_ref(), Some(thumb.as_ref()))
        .map_err(dom_err)?;
    link.append_child(thumb.as_ref()).map_err(dom_err)?;

    Ok(())
}
