//! Bar chart geometry and SVG output.
//!
//! Periods occupy equal-width slots along x. `bar_width` is the fraction
//! of a slot a bar fills. The value axis always includes zero and is padded
//! by 5% of its span on both ends.

use std::fmt::Write;

use crate::format::{escape_xml, nice_ticks, percent_label};
use crate::legend::{Anchor, LegendLocation};

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const RANGE_PADDING: f64 = 0.05;
const TICK_TARGET: usize = 6;
const LEGEND_ROW: f64 = 18.0;
const LEGEND_SWATCH: f64 = 12.0;
const LEGEND_PAD: f64 = 8.0;
const CHAR_WIDTH: f64 = 7.0;

/// One vertical bar (or stacked segment) spanning `[bottom, top]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub slot: usize,
    pub bottom: f64,
    pub top: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// A renderable bar chart. Values are fractions, shown as percents.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub slots: Vec<String>,
    pub bars: Vec<Bar>,
    pub legend: Vec<LegendEntry>,
    pub legend_location: LegendLocation,
    pub bar_width: f64,
    pub width: u32,
    pub height: u32,
}

/// Pixel mapping for one chart.
#[derive(Debug, Clone, Copy)]
struct Frame {
    plot_w: f64,
    plot_h: f64,
    slot_w: f64,
    lo: f64,
    hi: f64,
}

impl Frame {
    fn x_center(&self, slot: usize) -> f64 {
        MARGIN_LEFT + self.slot_w * (slot as f64 + 0.5)
    }

    fn y(&self, value: f64) -> f64 {
        MARGIN_TOP + (self.hi - value) / (self.hi - self.lo) * self.plot_h
    }
}

impl BarChart {
    /// Padded value range, zero included.
    pub fn value_range(&self) -> (f64, f64) {
        let (mut lo, mut hi) = self
            .bars
            .iter()
            .fold((0.0f64, 0.0f64), |(lo, hi), b| {
                (lo.min(b.bottom).min(b.top), hi.max(b.top).max(b.bottom))
            });
        if hi - lo <= 0.0 {
            hi = lo + 0.01;
        }
        let pad = (hi - lo) * RANGE_PADDING;
        lo -= pad;
        hi += pad;
        (lo, hi)
    }

    fn frame(&self) -> Frame {
        let plot_w = (self.width as f64 - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_h = (self.height as f64 - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        let (lo, hi) = self.value_range();
        Frame {
            plot_w,
            plot_h,
            slot_w: plot_w / self.slots.len().max(1) as f64,
            lo,
            hi,
        }
    }

    /// Pixel rectangle `(x, y, width, height)` of a bar.
    pub fn bar_rect(&self, bar: &Bar) -> (f64, f64, f64, f64) {
        let f = self.frame();
        let w = f.slot_w * self.bar_width;
        let x = f.x_center(bar.slot) - w / 2.0;
        let y_top = f.y(bar.top.max(bar.bottom));
        let y_bottom = f.y(bar.top.min(bar.bottom));
        (x, y_top, w, y_bottom - y_top)
    }

    pub fn to_svg(&self) -> String {
        let f = self.frame();
        let mut svg = String::new();

        let _ = writeln!(
            svg,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" style="background:white">"##,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(
            svg,
            r##"  <text x="{:.1}" y="28" font-size="16" font-weight="bold">{}</text>"##,
            MARGIN_LEFT,
            escape_xml(&self.title)
        );

        // y grid and percent ticks
        for tick in nice_ticks(f.lo, f.hi, TICK_TARGET) {
            let y = f.y(tick);
            let _ = writeln!(
                svg,
                r##"  <line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#e5e5e5"/>"##,
                MARGIN_LEFT,
                MARGIN_LEFT + f.plot_w
            );
            let _ = writeln!(
                svg,
                r##"  <text x="{:.1}" y="{:.1}" font-size="11" text-anchor="end">{}</text>"##,
                MARGIN_LEFT - 6.0,
                y + 4.0,
                percent_label(tick)
            );
        }

        for bar in &self.bars {
            let (x, y, w, h) = self.bar_rect(bar);
            let _ = writeln!(
                svg,
                r##"  <rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{}"/>"##,
                escape_xml(&bar.color)
            );
        }

        // zero baseline and axes
        let y0 = f.y(0.0);
        let _ = writeln!(
            svg,
            r##"  <line x1="{:.1}" y1="{y0:.1}" x2="{:.1}" y2="{y0:.1}" stroke="#444"/>"##,
            MARGIN_LEFT,
            MARGIN_LEFT + f.plot_w
        );
        let _ = writeln!(
            svg,
            r##"  <line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" stroke="#444"/>"##,
            MARGIN_TOP,
            MARGIN_TOP + f.plot_h,
            x = MARGIN_LEFT
        );

        // one fixed x tick per period
        let axis_y = MARGIN_TOP + f.plot_h;
        for (slot, label) in self.slots.iter().enumerate() {
            let _ = writeln!(
                svg,
                r##"  <text x="{:.1}" y="{:.1}" font-size="11" text-anchor="middle">{}</text>"##,
                f.x_center(slot),
                axis_y + 16.0,
                escape_xml(label)
            );
        }
        let _ = writeln!(
            svg,
            r##"  <text x="{:.1}" y="{:.1}" font-size="13" text-anchor="middle">{}</text>"##,
            MARGIN_LEFT + f.plot_w / 2.0,
            axis_y + 42.0,
            escape_xml(&self.x_label)
        );

        self.write_legend(&mut svg, &f);
        svg.push_str("</svg>\n");
        svg
    }

    fn write_legend(&self, svg: &mut String, f: &Frame) {
        if self.legend.is_empty() {
            return;
        }
        let longest = self
            .legend
            .iter()
            .map(|e| e.label.chars().count())
            .max()
            .unwrap_or(0);
        let box_w = LEGEND_PAD * 3.0 + LEGEND_SWATCH + longest as f64 * CHAR_WIDTH;
        let box_h = LEGEND_PAD * 2.0 + self.legend.len() as f64 * LEGEND_ROW;

        let (horizontal, vertical) = self.legend_location.anchors();
        let x = match horizontal {
            Anchor::Start => MARGIN_LEFT + LEGEND_PAD,
            Anchor::Middle => MARGIN_LEFT + (f.plot_w - box_w) / 2.0,
            Anchor::End => MARGIN_LEFT + f.plot_w - box_w - LEGEND_PAD,
        };
        let y = match vertical {
            Anchor::Start => MARGIN_TOP + LEGEND_PAD,
            Anchor::Middle => MARGIN_TOP + (f.plot_h - box_h) / 2.0,
            Anchor::End => MARGIN_TOP + f.plot_h - box_h - LEGEND_PAD,
        };

        let _ = writeln!(
            svg,
            r##"  <g class="legend"><rect x="{x:.1}" y="{y:.1}" width="{box_w:.1}" height="{box_h:.1}" fill="white" fill-opacity="0.9" stroke="#ccc"/>"##
        );
        for (i, entry) in self.legend.iter().enumerate() {
            let row_y = y + LEGEND_PAD + i as f64 * LEGEND_ROW;
            let _ = writeln!(
                svg,
                r##"    <rect x="{:.1}" y="{:.1}" width="{s}" height="{s}" fill="{}"/>"##,
                x + LEGEND_PAD,
                row_y + 2.0,
                escape_xml(&entry.color),
                s = LEGEND_SWATCH
            );
            let _ = writeln!(
                svg,
                r##"    <text x="{:.1}" y="{:.1}" font-size="12">{}</text>"##,
                x + LEGEND_PAD * 2.0 + LEGEND_SWATCH,
                row_y + 12.0,
                escape_xml(&entry.label)
            );
        }
        svg.push_str("  </g>\n");
    }
}
