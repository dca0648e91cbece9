// Copyright 2025 the Stepline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a small series as step lines into an SVG document on stdout.
//!
//! Shows the full pipeline:
//! - `LinearAxis` maps data values into the plot area,
//! - `StepRenderer` builds and clips the steps,
//! - a `LineSink` turns segments into SVG path commands,
//! - `CrosshairState` picks the item nearest to a pointer position.
//!
//! Run:
//! - `cargo run -p stepline_demos --example step_svg`
//! - `cargo run -p stepline_demos --example step_svg -- horizontal`

use std::fmt::Write as _;

use kurbo::{Line, Point, Rect};
use stepline_geom::Orientation;
use stepline_render::{
    CrosshairState, DrawContext, ItemRecord, ItemRecorder, LinearAxis, LineSink, StepRenderer,
};

/// Collects segments as `M x y L x y` path commands.
#[derive(Debug, Default)]
struct SvgPath {
    data: String,
}

impl LineSink for SvgPath {
    fn draw_line(&mut self, line: Line) {
        let _ = write!(
            self.data,
            "M{:.1} {:.1} L{:.1} {:.1} ",
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        );
    }
}

/// Prints labels and forwards records to a crosshair.
#[derive(Debug)]
struct Annotations {
    crosshair: CrosshairState,
    labels: Vec<String>,
}

impl ItemRecorder for Annotations {
    fn record_item(&mut self, record: &ItemRecord) {
        self.crosshair.record_item(record);
    }

    fn item_label(&mut self, record: &ItemRecord) {
        if record.device.is_nan() {
            return;
        }
        let dy = if record.negative { 12.0 } else { -4.0 };
        self.labels.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="8">{}</text>"#,
            record.device.x,
            record.device.y + dy,
            record.data.y
        ));
    }
}

fn main() {
    let orientation = match std::env::args().nth(1).as_deref() {
        Some("horizontal") => Orientation::Horizontal,
        _ => Orientation::Vertical,
    };

    // The NaN is a missing sample: both steps touching it are skipped.
    let series = [vec![
        (0.0, 1.0),
        (1.0, 3.0),
        (2.0, 3.0),
        (3.0, -1.0),
        (4.0, f64::NAN),
        (5.0, 2.0),
        (6.0, 4.0),
        (7.0, 12.0),
    ]];

    let domain = LinearAxis::new(0.0, 7.0).expect("valid domain interval");
    let range = LinearAxis::new(-2.0, 6.0).expect("valid range interval");
    let area = Rect::new(20.0, 20.0, 320.0, 220.0);

    let mut renderer = StepRenderer::new();
    renderer.add_listener(|change| log::info!("renderer changed: {change:?}"));
    renderer.set_step_point(0.5).expect("0.5 is a valid step point");
    renderer.set_item_labels_visible(true);
    if let Err(err) = renderer.set_step_point(1.5) {
        eprintln!("ignored: {err}");
    }

    let mut path = SvgPath::default();
    let mut annotations = Annotations {
        crosshair: CrosshairState::new(Point::new(150.0, 100.0)),
        labels: Vec::new(),
    };
    let mut ctx = DrawContext {
        dataset: &series[..],
        domain_axis: &domain,
        range_axis: &range,
        area,
        orientation,
        sink: &mut path,
        recorder: &mut annotations,
    };
    let stats = renderer.draw_series(&mut ctx, 0);

    println!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="340" height="240">"#);
    println!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="grey"/>"#,
        area.x0,
        area.y0,
        area.width(),
        area.height()
    );
    println!(
        r#"<path d="{}" fill="none" stroke="black"/>"#,
        path.data.trim_end()
    );
    for label in &annotations.labels {
        println!("{label}");
    }
    if let Some(nearest) = annotations.crosshair.nearest() {
        println!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="3" fill="red"/>"#,
            nearest.device.x, nearest.device.y
        );
    }
    println!("</svg>");

    eprintln!(
        "{} segments, {} items, {} labels (revision {})",
        stats.segments_drawn,
        stats.items_recorded,
        stats.labels_drawn,
        renderer.revision()
    );
}
