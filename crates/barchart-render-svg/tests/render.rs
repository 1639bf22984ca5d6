// File: crates/barchart-render-svg/tests/render.rs
// Purpose: SVG structure and PNG rasterization of the built-in team chart.

use barchart_core::{sample, BarChart, ChartConfig};
use barchart_render_svg::{theme, SvgRenderer, Theme};

fn team_chart(config: ChartConfig) -> barchart_core::EncodedChart {
    BarChart::new(config).encode(&sample::teams()).expect("encode")
}

#[test]
fn svg_has_one_rect_per_bar_and_bare_category_ticks() {
    let svg = SvgRenderer::default().render(&team_chart(ChartConfig::default()));

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("width=\"600\" height=\"300\""));
    assert!(svg.contains("transform=\"translate(40,20)\""));
    assert_eq!(svg.matches("class=\"bar\"").count(), 5);
    assert!(svg.contains("<title>New York</title>"));

    // Value axis sits on the bottom edge of the 210px inner region.
    assert!(svg.contains("class=\"axis axis--x\" transform=\"translate(0,210)\""));
    assert!(svg.contains(">100</text>"));

    let y_axis = &svg[svg.find("axis--y").expect("y axis")..];
    assert_eq!(y_axis.matches("class=\"tick\"").count(), 5);
    assert!(!y_axis.contains("<text"));
}

#[test]
fn category_labels_can_be_enabled() {
    let cfg = ChartConfig { category_labels: true, ..ChartConfig::default() };
    let svg = SvgRenderer::default().render(&team_chart(cfg));
    let y_axis = &svg[svg.find("axis--y").expect("y axis")..];
    assert!(y_axis.contains(">Boston</text>"));
}

#[test]
fn dark_theme_changes_fill() {
    let svg = SvgRenderer::new(theme::find("dark")).render(&team_chart(ChartConfig::default()));
    assert!(svg.contains(Theme::dark().bar_fill));
    assert!(!svg.contains(Theme::light().bar_fill));
}

#[test]
fn png_bytes_decode_to_outer_size() {
    let chart = team_chart(ChartConfig::default());
    let bytes = SvgRenderer::default().render_to_png_bytes(&chart).expect("render png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (600, 300));
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);

    // Middle of Boston's bar: bottom band of the inner region, shifted by the margins.
    let boston = &chart.bars[0];
    let px = (chart.config.margins.left + boston.width / 2.0) as u32;
    let py = (chart.config.margins.top + boston.y + boston.height / 2.0) as u32;
    assert_eq!(img.get_pixel(px, py).0, [0x46, 0x82, 0xb4, 255]);
}

#[test]
fn files_are_written_with_parent_dirs() {
    let dir = std::env::temp_dir().join(format!("barchart_render_{}", std::process::id()));
    let chart = team_chart(ChartConfig::default());
    let renderer = SvgRenderer::default();

    let svg_path = dir.join("nested/chart.svg");
    renderer.render_to_svg(&chart, &svg_path).expect("write svg");
    assert!(std::fs::read_to_string(&svg_path).expect("read svg").ends_with("</svg>"));

    let png_path = dir.join("nested/chart.png");
    renderer.render_to_png(&chart, &png_path).expect("write png");
    assert!(std::fs::metadata(&png_path).expect("png exists").len() > 0);

    std::fs::remove_dir_all(&dir).ok();
}
