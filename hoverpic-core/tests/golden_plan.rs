use std::fs;

use hoverpic_core::{fit_preview, plan_sources, EnhanceConfig, NaturalSize, Viewport};
use serde_json::{json, Value};

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn load_golden(name: &str) -> Value {
    let text = fs::read_to_string(fixture_path(name)).expect("Không đọc được golden");
    serde_json::from_str(&text).expect("Golden không hợp lệ")
}

#[test]
fn wide_image_plan_matches_golden() {
    let config = EnhanceConfig::default();

    let plan = plan_sources("https://pic.example.com/media/abc.jpg:thumb", 800.0, &config);
    let placement = fit_preview(
        NaturalSize {
            width: 1000.0,
            height: 500.0,
        },
        Viewport {
            width: 800.0,
            height: 600.0,
            top: 0.0,
        },
        &config,
    );

    let actual = json!({ "plan": plan, "placement": placement });
    assert_eq!(actual, load_golden("wide_image_plan.json"));
}

#[test]
fn tall_image_plan_matches_golden() {
    let config = EnhanceConfig::default();

    let plan = plan_sources("https://pic.example.com/media/abc.jpg:thumb", 800.0, &config);
    let placement = fit_preview(
        NaturalSize {
            width: 400.0,
            height: 1000.0,
        },
        Viewport {
            width: 800.0,
            height: 600.0,
            top: 0.0,
        },
        &config,
    );

    let actual = json!({ "plan": plan, "placement": placement });
    assert_eq!(actual, load_golden("tall_image_plan.json"));
}

#[test]
fn narrow_viewport_plan_matches_golden() {
    let config = EnhanceConfig::default();

    let plan = plan_sources("https://pic.example.com/media/abc.jpg:thumb", 599.0, &config);

    let actual = json!({ "plan": plan });
    assert_eq!(actual, load_golden("narrow_viewport_plan.json"));
}
