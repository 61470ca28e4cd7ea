use anyhow::Context;
use clap::Parser;
use hoverpic_core::{
    fit_preview, plan_sources, EnhanceConfig, NaturalSize, PicturePlan, PreviewPlacement, Viewport,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "hoverpic-cli",
    about = "Tính biến thể URL và vị trí ảnh xem trước ngoài trình duyệt."
)]
struct Args {
    /// URL ảnh thu nhỏ, có thể kèm hậu tố :thumb.
    #[arg(short, long)]
    thumb_url: String,

    /// Bề rộng khung timeline (px).
    #[arg(long, default_value_t = 800.0)]
    viewport_width: f64,

    /// Chiều cao hiển thị của tài liệu (px).
    #[arg(long, default_value_t = 600.0)]
    viewport_height: f64,

    /// Mép trên của khung timeline so với viewport (px).
    #[arg(long, default_value_t = 0.0)]
    container_top: f64,

    /// Bề rộng tự nhiên của ảnh xem trước (px).
    #[arg(long)]
    natural_width: Option<f64>,

    /// Chiều cao tự nhiên của ảnh xem trước (px).
    #[arg(long)]
    natural_height: Option<f64>,
}

#[derive(Serialize)]
struct Report {
    plan: PicturePlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    placement: Option<PreviewPlacement>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = EnhanceConfig::default();

    let plan = plan_sources(&args.thumb_url, args.viewport_width, &config);

    let placement = match (args.natural_width, args.natural_height) {
        (Some(width), Some(height)) => Some(fit_preview(
            NaturalSize { width, height },
            Viewport {
                width: args.viewport_width,
                height: args.viewport_height,
                top: args.container_top,
            },
            &config,
        )),
        _ => None,
    };

    let report = Report { plan, placement };
    let json = serde_json::to_string_pretty(&report).context("Không serialize được kết quả")?;
    println!("{json}");

    Ok(())
}
