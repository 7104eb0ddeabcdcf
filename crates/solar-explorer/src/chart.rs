//! Radius bar chart
//!
//! Dormant unless activated: the page embeds it only when `chart.enabled` is
//! set, and `/chart.svg` or `solar chart` build it on demand. One bar per
//! record, labeled by name, height equal to radius on a zero-based axis.

use plotters::prelude::*;

use crate::config::ChartConfig;
use crate::error::{Error, Result};
use crate::types::CelestialBody;

/// Fallback for colours that are not `#rrggbb`, `rgb()` or `rgba()`
const DEFAULT_COLOR: RGBAColor = RGBAColor(75, 192, 192, 1.0);

/// A single bar
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    /// Missing radius is drawn as zero
    pub value: f64,
}

/// Bar chart data plus styling
#[derive(Debug, Clone)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    pub config: ChartConfig,
}

impl BarChart {
    /// One bar per record, in record order
    pub fn from_records(records: &[CelestialBody], config: &ChartConfig) -> Self {
        let bars = records
            .iter()
            .map(|body| Bar {
                label: body.name.clone(),
                value: body.radius_km.unwrap_or(0.0).max(0.0),
            })
            .collect();
        Self {
            bars,
            config: config.clone(),
        }
    }

    /// Top of the value axis, with headroom over the tallest bar
    pub fn axis_max(&self) -> f64 {
        let max = self.bars.iter().map(|b| b.value).fold(0.0, f64::max);
        if max > 0.0 {
            max * 1.1
        } else {
            1.0
        }
    }

    /// Self-contained SVG document
    pub fn to_svg(&self) -> Result<String> {
        let fill = parse_color(&self.config.background_color);
        let border = parse_color(&self.config.border_color);
        let last = self.bars.len().saturating_sub(1);
        let name_of = |value: &SegmentValue<usize>| match value {
            SegmentValue::CenterOf(i) => self
                .bars
                .get(*i)
                .map(|bar| bar.label.clone())
                .unwrap_or_default(),
            _ => String::new(),
        };

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.config.width, self.config.height))
                .into_drawing_area();
            root.fill(&WHITE).map_err(chart_error)?;

            let mut chart = ChartBuilder::on(&root)
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(70)
                .build_cartesian_2d((0..last).into_segmented(), 0f64..self.axis_max())
                .map_err(chart_error)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(self.bars.len().max(1))
                .x_label_formatter(&name_of)
                .y_label_formatter(&|v| format!("{:.0}", v))
                .y_desc(self.config.label.as_str())
                .draw()
                .map_err(chart_error)?;

            if !self.bars.is_empty() {
                let values = || self.bars.iter().enumerate().map(|(i, bar)| (i, bar.value));
                chart
                    .draw_series(
                        Histogram::vertical(&chart)
                            .style(fill.filled())
                            .margin(8)
                            .data(values()),
                    )
                    .map_err(chart_error)?
                    .label(self.config.label.clone())
                    .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], fill.filled()));
                chart
                    .draw_series(
                        Histogram::vertical(&chart)
                            .style(border.stroke_width(self.config.border_width))
                            .margin(8)
                            .data(values()),
                    )
                    .map_err(chart_error)?;

                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperRight)
                    .background_style(&WHITE.mix(0.8))
                    .border_style(&BLACK)
                    .draw()
                    .map_err(chart_error)?;
            }

            root.present().map_err(chart_error)?;
        }
        Ok(svg)
    }
}

/// Build the chart for a working set in one call
pub fn generate_chart(records: &[CelestialBody], config: &ChartConfig) -> Result<String> {
    BarChart::from_records(records, config).to_svg()
}

fn chart_error(e: impl std::fmt::Display) -> Error {
    Error::Chart(e.to_string())
}

/// Parse `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`
fn parse_color(text: &str) -> RGBAColor {
    try_parse_color(text.trim()).unwrap_or(DEFAULT_COLOR)
}

fn try_parse_color(text: &str) -> Option<RGBAColor> {
    if let Some(hex) = text.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        return Some(RGBAColor(channel(0)?, channel(2)?, channel(4)?, 1.0));
    }

    let (args, has_alpha) = if let Some(rest) = text.strip_prefix("rgba(") {
        (rest.strip_suffix(')')?, true)
    } else {
        (text.strip_prefix("rgb(")?.strip_suffix(')')?, false)
    };
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != if has_alpha { 4 } else { 3 } {
        return None;
    }
    let r = parts[0].parse().ok()?;
    let g = parts[1].parse().ok()?;
    let b = parts[2].parse().ok()?;
    let a = match parts.get(3) {
        Some(alpha) => alpha.parse::<f64>().ok()?.clamp(0.0, 1.0),
        None => 1.0,
    };
    Some(RGBAColor(r, g, b, a))
}
