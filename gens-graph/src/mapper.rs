//! Mapping of genomic records onto screen pixels.

use serde::{Deserialize, Serialize};

use gens_core::models::{DataRecord, Region, ScreenPoint};
use gens_core::{GensError, Result};

/// Distance from the axis limits at which out-of-range values are drawn.
pub const CAP_MARGIN: f64 = 0.2;

///
/// Vertical axis of one track. `start` and `end` are the values drawn at the
/// top and bottom of the plot; `origin_px` is the pixel row of value zero.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisConfig {
    pub start: f64,
    pub end: f64,
    pub origin_px: f64,
    pub px_per_unit: f64,
}

impl AxisConfig {
    pub fn min(&self) -> f64 {
        self.start.min(self.end)
    }

    pub fn max(&self) -> f64 {
        self.start.max(self.end)
    }

    ///
    /// Pull a value that lies outside the axis back inside it, just short of
    /// the limit it crossed.
    ///
    pub fn cap_value(&self, value: f64) -> f64 {
        if value > self.max() {
            self.max() - CAP_MARGIN
        } else if value < self.min() {
            self.min() + CAP_MARGIN
        } else {
            value
        }
    }

    pub fn to_px(&self, value: f64) -> i64 {
        (self.origin_px - self.px_per_unit * self.cap_value(value)).round() as i64
    }
}

///
/// Map records to screen points. Records share the horizontal mapping
/// `x = x_origin + x_scale * (position - window_start)`; the vertical one
/// comes from `axis`.
///
/// # Arguments
/// - records: records to map
/// - axis: vertical axis of the track
/// - x_origin: pixel column of `window_start`
/// - x_scale: pixels per base pair
/// - window_start: first base pair of the drawn window
///
pub fn map_records(
    records: &[DataRecord],
    axis: &AxisConfig,
    x_origin: f64,
    x_scale: f64,
    window_start: i64,
) -> Vec<ScreenPoint> {
    records
        .iter()
        .map(|record| ScreenPoint {
            x: (x_origin + x_scale * (record.position as i64 - window_start) as f64).round() as i64,
            y: axis.to_px(record.value),
        })
        .collect()
}

///
/// Plot dimensions and axis ranges, in pixels and track units.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotParams {
    pub plot_height: f64,
    pub top_bottom_padding: f64,
    pub baf_y_start: f64,
    pub baf_y_end: f64,
    pub log2_y_start: f64,
    pub log2_y_end: f64,
    pub extra_plot_width: f64,
}

impl Default for PlotParams {
    fn default() -> Self {
        PlotParams {
            plot_height: 180.0,
            top_bottom_padding: 8.0,
            baf_y_start: 1.0,
            baf_y_end: 0.0,
            log2_y_start: 4.0,
            log2_y_end: -4.0,
            extra_plot_width: 0.0,
        }
    }
}

///
/// The two stacked track axes of one graph: BAF on top, log2 ratio below.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphLayout {
    pub baf: AxisConfig,
    pub log2: AxisConfig,
}

impl GraphLayout {
    pub fn new(plot: &PlotParams, y_pos: f64) -> Result<Self> {
        let inner_height = plot.plot_height - 2.0 * plot.top_bottom_padding;
        if inner_height <= 0.0 {
            return Err(GensError::InvalidPlot(format!(
                "plot height {} leaves no room inside padding {}",
                plot.plot_height, plot.top_bottom_padding
            )));
        }

        let baf_range = (plot.baf_y_end - plot.baf_y_start).abs();
        let log2_range = (plot.log2_y_end - plot.log2_y_start).abs();
        if baf_range == 0.0 || log2_range == 0.0 {
            return Err(GensError::InvalidPlot("axis range is empty".to_string()));
        }

        Ok(GraphLayout {
            baf: AxisConfig {
                start: plot.baf_y_start,
                end: plot.baf_y_end,
                origin_px: y_pos + plot.plot_height - plot.top_bottom_padding,
                px_per_unit: inner_height / baf_range,
            },
            log2: AxisConfig {
                start: plot.log2_y_start,
                end: plot.log2_y_end,
                origin_px: y_pos + 1.5 * plot.plot_height,
                px_per_unit: inner_height / log2_range,
            },
        })
    }
}

///
/// Horizontal mapping of a region drawn `x_ampl` pixels wide, widened by
/// `extra_plot_width` pixels on both sides.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub padded_start: i64,
    pub padded_end: i64,
    pub x_origin: f64,
    pub x_scale: f64,
    pub fetch_start: u32,
    pub fetch_end: u32,
}

impl Viewport {
    ///
    /// # Arguments
    /// - region: resolved region
    /// - chrom_size: length of the region's chromosome
    /// - x_pos: pixel column where the region starts
    /// - x_ampl: pixel width of the region
    /// - extra_plot_width: pixels drawn beyond each side of the region
    ///
    pub fn new(region: &Region, chrom_size: u32, x_pos: f64, x_ampl: f64, extra_plot_width: f64) -> Result<Self> {
        if !(x_ampl > 0.0) {
            return Err(GensError::InvalidPlot(format!("plot width must be positive, got {}", x_ampl)));
        }
        if !(extra_plot_width >= 0.0) {
            return Err(GensError::InvalidPlot(format!(
                "extra plot width must not be negative, got {}",
                extra_plot_width
            )));
        }

        let pad_bp = extra_plot_width * region.width() as f64 / x_ampl;
        let padded_start = (region.start as f64 - pad_bp).trunc() as i64;
        let padded_end = (region.end as f64 + pad_bp).trunc() as i64;
        let x_scale = (x_ampl + 2.0 * extra_plot_width) / (padded_end - padded_start) as f64;

        Ok(Viewport {
            padded_start,
            padded_end,
            x_origin: x_pos - extra_plot_width,
            x_scale,
            fetch_start: padded_start.max(0) as u32,
            fetch_end: padded_end.min(chrom_size as i64).max(0) as u32,
        })
    }

    pub fn map(&self, records: &[DataRecord], axis: &AxisConfig) -> Vec<ScreenPoint> {
        map_records(records, axis, self.x_origin, self.x_scale, self.padded_start)
    }
}
