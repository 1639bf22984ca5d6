// File: crates/barchart-render-svg/src/svg.rs
// Summary: Serializes encoded bars and axes into SVG markup.

use std::fmt::Write as _;

use barchart_core::{AxisDescriptor, AxisOrient, EncodedChart};

use crate::theme::Theme;

/// Tick mark length in pixels.
const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
const TICK_PADDING: f64 = 3.0;

pub fn render_svg(chart: &EncodedChart, theme: &Theme) -> String {
    let cfg = &chart.config;
    let (w, h) = (cfg.outer_width, cfg.outer_height);
    let mut svg = String::new();

    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"chart\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    let _ = write!(svg, "<rect width=\"{w}\" height=\"{h}\" fill=\"{}\"/>", theme.background);
    let _ = write!(
        svg,
        "<g transform=\"translate({},{})\">",
        cfg.margins.left, cfg.margins.top
    );

    for bar in &chart.bars {
        let _ = write!(
            svg,
            "<rect class=\"bar\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"><title>{}</title></rect>",
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            theme.bar_fill,
            escape_xml(&bar.category)
        );
    }

    // Value axis hangs below the inner region.
    write_axis(&mut svg, &chart.value_axis, (0.0, cfg.inner_height()), theme);
    write_axis(&mut svg, &chart.category_axis, (0.0, 0.0), theme);

    svg.push_str("</g></svg>");
    svg
}

fn write_axis(svg: &mut String, axis: &AxisDescriptor, origin: (f64, f64), theme: &Theme) {
    let (r0, r1) = axis.range;
    let class = match axis.orient {
        AxisOrient::Bottom => "axis axis--x",
        AxisOrient::Left => "axis axis--y",
    };
    let _ = write!(
        svg,
        "<g class=\"{class}\" transform=\"translate({},{})\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">",
        origin.0, origin.1, theme.font_family, theme.font_size, theme.tick_label
    );

    let domain = match axis.orient {
        AxisOrient::Bottom => format!("M{r0:.2},{TICK_SIZE}V0H{r1:.2}V{TICK_SIZE}"),
        AxisOrient::Left => format!("M-{TICK_SIZE},{r0:.2}H0V{r1:.2}H-{TICK_SIZE}"),
    };
    let _ = write!(
        svg,
        "<path class=\"domain\" d=\"{domain}\" fill=\"none\" stroke=\"{}\"/>",
        theme.axis_line
    );

    for tick in &axis.ticks {
        let p = tick.position;
        match axis.orient {
            AxisOrient::Bottom => {
                let _ = write!(
                    svg,
                    "<g class=\"tick\" transform=\"translate({p:.2},0)\"><line y2=\"{TICK_SIZE}\" stroke=\"{}\"/>",
                    theme.tick
                );
                if !tick.label.is_empty() {
                    let _ = write!(
                        svg,
                        "<text y=\"{}\" dy=\"0.71em\" text-anchor=\"middle\">{}</text>",
                        TICK_SIZE + TICK_PADDING,
                        escape_xml(&tick.label)
                    );
                }
            }
            AxisOrient::Left => {
                let _ = write!(
                    svg,
                    "<g class=\"tick\" transform=\"translate(0,{p:.2})\"><line x2=\"-{TICK_SIZE}\" stroke=\"{}\"/>",
                    theme.tick
                );
                if !tick.label.is_empty() {
                    let _ = write!(
                        svg,
                        "<text x=\"-{}\" dy=\"0.32em\" text-anchor=\"end\">{}</text>",
                        TICK_SIZE + TICK_PADDING,
                        escape_xml(&tick.label)
                    );
                }
            }
        }
        svg.push_str("</g>");
    }
    svg.push_str("</g>");
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
