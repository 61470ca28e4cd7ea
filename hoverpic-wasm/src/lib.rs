//! Bridge WASM <-> JavaScript trung lập framework.

use hoverpic_core::{EnhanceConfig, EnhanceError};
use serde::Deserialize;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsEnhanceConfig {
    #[serde(default)]
    narrow_viewport_px: Option<f64>,
    #[serde(default)]
    width_margin: Option<f64>,
    #[serde(default)]
    height_margin: Option<f64>,
}

impl From<JsEnhanceConfig> for EnhanceConfig {
    fn from(cfg: JsEnhanceConfig) -> Self {
        let mut base = EnhanceConfig::default();
        if let Some(px) = cfg.narrow_viewport_px {
            base.narrow_viewport_px = px;
        }
        if let Some(margin) = cfg.width_margin {
            base.width_margin = margin;
        }
        if let Some(margin) = cfg.height_margin {
            base.height_margin = margin;
        }
        base
    }
}

/// Đăng ký pipeline nâng cấp vào sự kiện load của trang.
#[wasm_bindgen]
pub fn install_enhancements(
    timeline_selector: &str,
    config: Option<JsValue>,
) -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let cfg = parse_config(config)?;
    hoverpic_dom::install(timeline_selector, cfg)
        .map_err(|err| JsValue::from_str(&format_enhance_error(err)))
}

/// Chạy pipeline ngay, cho trang nạp module sau sự kiện load.
#[wasm_bindgen]
pub fn enhance_now(timeline_selector: &str, config: Option<JsValue>) -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let cfg = parse_config(config)?;
    hoverpic_dom::enhance_now(timeline_selector, &cfg)
        .map_err(|err| JsValue::from_str(&format_enhance_error(err)))
}

fn parse_config(config: Option<JsValue>) -> Result<EnhanceConfig, JsValue> {
    match config {
        Some(js_cfg) => {
            let cfg: JsEnhanceConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
            Ok(EnhanceConfig::from(cfg))
        }
        None => Ok(EnhanceConfig::default()),
    }
}

fn format_enhance_error(err: EnhanceError) -> String {
    format!("Enhance error: {err}")
}
