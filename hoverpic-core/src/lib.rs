//! Logic lõi chọn biến thể URL ảnh và dựng hình học cho ảnh xem trước.

use serde::{Deserialize, Serialize};

/// Lớp CSS đánh dấu khung chứa icon người đăng.
pub const POSTER_ICON_CLASS: &str = "posterimg";
/// Lớp CSS đánh dấu ảnh thu nhỏ trong timeline.
pub const THUMBNAIL_CLASS: &str = "thumbnail";
/// Lớp CSS gán cho ảnh xem trước được chèn thêm.
pub const PICTURE_CLASS: &str = "picture";
/// Thuộc tính giữ URL thật khi trang dùng ảnh giữ chỗ.
pub const DEFERRED_SRC_ATTR: &str = "data-src";

/// Cấu hình điều chỉnh ngưỡng viewport và lề co giãn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnhanceConfig {
    /// Bề rộng (px) dưới ngưỡng này coi là viewport hẹp.
    pub narrow_viewport_px: f64,
    /// Tỷ lệ bề rộng viewport tối đa cho ảnh xem trước.
    pub width_margin: f64,
    /// Tỷ lệ chiều cao viewport tối đa cho ảnh xem trước.
    pub height_margin: f64,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            narrow_viewport_px: 600.0,
            width_margin: 0.85,
            height_margin: 0.95,
        }
    }
}

/// Các biến thể kích thước mà máy chủ ảnh phục vụ theo hậu tố URL.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SizeVariant {
    Thumb,
    Small,
    Medium,
    Large,
}

impl SizeVariant {
    /// Hậu tố gắn sau URL gốc theo quy ước của máy chủ ảnh.
    pub fn suffix(self) -> &'static str {
        match self {
            SizeVariant::Thumb => ":thumb",
            SizeVariant::Small => ":small",
            SizeVariant::Medium => ":medium",
            SizeVariant::Large => ":large",
        }
    }
}

/// Cặp biến thể được chọn cho một ảnh thu nhỏ.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantPair {
    /// Biến thể cho ảnh xem trước khi rê chuột.
    pub preview: SizeVariant,
    /// Biến thể cho liên kết bọc quanh ảnh thu nhỏ.
    pub link: SizeVariant,
}

/// Chọn cặp biến thể theo bề rộng khung timeline.
pub fn select_variants(viewport_width: f64, config: &EnhanceConfig) -> VariantPair {
    if viewport_width < config.narrow_viewport_px {
        VariantPair {
            preview: SizeVariant::Small,
            link: SizeVariant::Medium,
        }
    } else {
        VariantPair {
            preview: SizeVariant::Medium,
            link: SizeVariant::Large,
        }
    }
}

/// Lấy URL gốc bằng cách cắt từ vị trí xuất hiện đầu tiên của `:thumb`.
pub fn base_url(src: &str) -> &str {
    match src.find(SizeVariant::Thumb.suffix()) {
        Some(pos) => &src[..pos],
        None => src,
    }
}

/// Gắn hậu tố biến thể vào URL gốc.
pub fn variant_url(base: &str, variant: SizeVariant) -> String {
    format!("{base}{}", variant.suffix())
}

/// Hai URL dẫn xuất cho một ảnh thu nhỏ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PicturePlan {
    /// Nguồn của ảnh xem trước được chèn cạnh ảnh thu nhỏ.
    pub preview_src: String,
    /// Đích của liên kết bọc quanh ảnh thu nhỏ.
    pub link_href: String,
}

/// Dựng kế hoạch URL cho một ảnh thu nhỏ theo bề rộng khung timeline.
pub fn plan_sources(thumb_src: &str, viewport_width: f64, config: &EnhanceConfig) -> PicturePlan {
    let base = base_url(thumb_src);
    let pair = select_variants(viewport_width, config);
    PicturePlan {
        preview_src: variant_url(base, pair.preview),
        link_href: variant_url(base, pair.link),
    }
}

/// Khung nhìn đo tại thời điểm tương tác, không cache giữa các lần rê chuột.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    /// Bề rộng hộp bao của khung timeline.
    pub width: f64,
    /// Chiều cao hiển thị của tài liệu.
    pub height: f64,
    /// Mép trên của khung timeline so với viewport.
    pub top: f64,
}

/// Kích thước dàn trang tự nhiên của ảnh sau khi hiển thị.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NaturalSize {
    pub width: f64,
    pub height: f64,
}

/// Vị trí và kích thước cuối cùng (px) của ảnh xem trước.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PreviewPlacement {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Co ảnh xem trước vào viewport rồi tính vị trí đặt.
///
/// Hai lượt co độc lập: trước theo bề rộng, sau theo chiều cao. Lượt sau
/// được phép vượt trần bề rộng của lượt đầu khi ảnh cao hơn là rộng.
pub fn fit_preview(
    natural: NaturalSize,
    viewport: Viewport,
    config: &EnhanceConfig,
) -> PreviewPlacement {
    let mut width = natural.width;
    let mut height = natural.height;

    let max_width = config.width_margin * viewport.width;
    if width > max_width {
        height *= max_width / width;
        width = max_width;
    }

    let max_height = config.height_margin * viewport.height;
    if height > max_height {
        width *= max_height / height;
        height = max_height;
    }

    // Đẩy ảnh về phía phải/giữa viewport để không đè lên ảnh thu nhỏ bên trái.
    let left = f64::min(
        f64::max(0.0, config.width_margin * viewport.width - width),
        0.5 * (viewport.width - width),
    );
    // Canh giữa theo chiều dọc; vị trí tính theo khung timeline nên phải bù
    // phần khung đã nằm trên mép viewport.
    let top = (viewport.height - height) / 2.0 - viewport.top;

    PreviewPlacement {
        left,
        top,
        width,
        height,
    }
}

/// Lỗi chung của tầng nâng cấp DOM.
#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("Môi trường không có window")]
    MissingWindow,
    #[error("Không truy cập được document")]
    MissingDocument,
    #[error("Thao tác DOM thất bại: {0}")]
    Dom(String),
    #[error("Tầng DOM chỉ hỗ trợ biên dịch target wasm32")]
    UnsupportedTarget,
}
