//! Tầng nâng cấp DOM cho trang timeline: icon thật thay icon giữ chỗ,
//! ảnh xem trước khi rê chuột và liên kết tới ảnh kích thước đầy đủ.

#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod hover;
#[cfg(target_arch = "wasm32")]
mod icons;
#[cfg(target_arch = "wasm32")]
mod pictures;

#[cfg(target_arch = "wasm32")]
mod enhance {
    use hoverpic_core::{EnhanceConfig, EnhanceError};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{console, Document, Window};

    use crate::{events, hover, icons, pictures};

    fn document() -> Result<Document, EnhanceError> {
        let window = web_sys::window().ok_or(EnhanceError::MissingWindow)?;
        window.document().ok_or(EnhanceError::MissingDocument)
    }

    /// Dựng ảnh xem trước rồi mới gắn handler chuột, theo thứ tự phụ thuộc.
    pub fn enhance_document(
        timeline_selector: &str,
        config: &EnhanceConfig,
    ) -> Result<(), EnhanceError> {
        let document = document()?;
        pictures::add_pictures(&document, timeline_selector, config)?;
        hover::set_mouse_handlers(&document, config);
        Ok(())
    }

    /// Nạp icon người đăng thật thay cho icon giữ chỗ.
    pub fn load_poster_icons() -> Result<(), EnhanceError> {
        let document = document()?;
        icons::load_poster_icons(&document);
        Ok(())
    }

    /// Đăng ký hai callback vào sự kiện load của trang.
    ///
    /// Callback thứ nhất dựng ảnh xem trước rồi gắn handler chuột; callback
    /// thứ hai nạp icon người đăng, độc lập với callback đầu.
    pub fn install(timeline_selector: &str, config: EnhanceConfig) -> Result<(), EnhanceError> {
        let window: Window = web_sys::window().ok_or(EnhanceError::MissingWindow)?;

        let selector = timeline_selector.to_owned();
        let cfg = config;
        let build = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = enhance_document(&selector, &cfg) {
                console::error_1(&JsValue::from_str(&err.to_string()));
            }
        });
        events::add_event(window.as_ref(), "load", build.as_ref().unchecked_ref());
        build.forget();

        let posters = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = load_poster_icons() {
                console::error_1(&JsValue::from_str(&err.to_string()));
            }
        });
        events::add_event(window.as_ref(), "load", posters.as_ref().unchecked_ref());
        posters.forget();

        Ok(())
    }

    /// Chạy toàn bộ pipeline ngay, cho trang đã qua sự kiện load.
    pub fn enhance_now(
        timeline_selector: &str,
        config: &EnhanceConfig,
    ) -> Result<(), EnhanceError> {
        enhance_document(timeline_selector, config)?;
        load_poster_icons()
    }
}

#[cfg(target_arch = "wasm32")]
pub use enhance::{enhance_document, enhance_now, install, load_poster_icons};

#[cfg(not(target_arch = "wasm32"))]
mod native_stub {
    use hoverpic_core::{EnhanceConfig, EnhanceError};

    pub fn enhance_document(_: &str, _: &EnhanceConfig) -> Result<(), EnhanceError> {
        Err(EnhanceError::UnsupportedTarget)
    }

    pub fn load_poster_icons() -> Result<(), EnhanceError> {
        Err(EnhanceError::UnsupportedTarget)
    }

    pub fn install(_: &str, _: EnhanceConfig) -> Result<(), EnhanceError> {
        Err(EnhanceError::UnsupportedTarget)
    }

    pub fn enhance_now(_: &str, _: &EnhanceConfig) -> Result<(), EnhanceError> {
        Err(EnhanceError::UnsupportedTarget)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native_stub::{enhance_document, enhance_now, install, load_poster_icons};
