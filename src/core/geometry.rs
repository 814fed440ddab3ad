//! Pixel geometry shared by raster backends.
//!
//! Mirrors how the charting library lays out a category line chart: labels
//! spread evenly across the plot width, values mapped linearly over their
//! finite range, and segments bent by the dataset `tension`.

use crate::error::{ChartError, ChartResult};

/// Drawable rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> ChartResult<Self> {
        if !left.is_finite() || !top.is_finite() {
            return Err(ChartError::InvalidData(
                "plot area origin must be finite".to_owned(),
            ));
        }
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "plot area size must be finite and > 0, got {width}x{height}"
            )));
        }
        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Shrinks the area by the given margins.
    pub fn inset(self, left: f64, top: f64, right: f64, bottom: f64) -> ChartResult<Self> {
        Self::new(
            self.left + left,
            self.top + top,
            self.width - left - right,
            self.height - top - bottom,
        )
    }
}

/// One data sample projected into pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Cubic Bézier piece between two consecutive plot points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub start: (f64, f64),
    pub control1: (f64, f64),
    pub control2: (f64, f64),
    pub end: (f64, f64),
}

/// Finite min/max of `values`, widened when flat.
///
/// A flat series is padded by 5% of its magnitude (or 1 around zero) so the
/// line sits mid-height instead of collapsing the scale.
#[must_use]
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    let mut finite = values.iter().copied().filter(|value| value.is_finite());
    let first = finite.next()?;
    let (min, max) = finite.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    });

    if min == max {
        let offset = if max == 0.0 { 1.0 } else { (max * 0.05).abs() };
        return Some((min - offset, max + offset));
    }
    Some((min, max))
}

/// Projects each value onto the area. Non-finite values yield `None` gaps.
///
/// `category_count` is the number of x slots; values beyond it still get a
/// slot so mismatched inputs degrade instead of vanishing.
#[must_use]
pub fn project_points(
    values: &[f64],
    category_count: usize,
    area: PlotArea,
) -> Vec<Option<PlotPoint>> {
    let Some((min, max)) = value_range(values) else {
        return vec![None; values.len()];
    };
    let slots = category_count.max(values.len());
    let span = max - min;

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            if !value.is_finite() {
                return None;
            }
            Some(PlotPoint {
                index,
                x: category_x(index, slots, area),
                y: area.bottom() - (value - min) / span * area.height,
            })
        })
        .collect()
}

/// X coordinate of category slot `index` out of `slots`.
#[must_use]
pub fn category_x(index: usize, slots: usize, area: PlotArea) -> f64 {
    if slots <= 1 {
        return area.left + area.width / 2.0;
    }
    area.left + area.width * index as f64 / (slots - 1) as f64
}

/// Splits projected points into contiguous runs separated by gaps.
#[must_use]
pub fn split_runs(points: &[Option<PlotPoint>]) -> Vec<Vec<PlotPoint>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for point in points {
        match point {
            Some(point) => current.push(*point),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Bézier segments through one run using the library's tension spline.
///
/// With `tension == 0` the controls coincide with the end points and the
/// result is a polyline.
#[must_use]
pub fn spline_segments(run: &[PlotPoint], tension: f64) -> Vec<CubicSegment> {
    if run.len() < 2 {
        return Vec::new();
    }

    let controls: Vec<((f64, f64), (f64, f64))> = (0..run.len())
        .map(|i| {
            let current = run[i];
            let previous = if i == 0 { current } else { run[i - 1] };
            let next = run.get(i + 1).copied().unwrap_or(current);
            control_points(previous, current, next, tension)
        })
        .collect();

    run.windows(2)
        .zip(controls.windows(2))
        .map(|(pair, control_pair)| CubicSegment {
            start: (pair[0].x, pair[0].y),
            control1: control_pair[0].1,
            control2: control_pair[1].0,
            end: (pair[1].x, pair[1].y),
        })
        .collect()
}

/// Index of the point closest to `(x, y)` within `radius`.
#[must_use]
pub fn hit_test(points: &[PlotPoint], x: f64, y: f64, radius: f64) -> Option<usize> {
    points
        .iter()
        .map(|point| (point.index, (point.x - x).hypot(point.y - y)))
        .filter(|(_, distance)| *distance <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

fn control_points(
    previous: PlotPoint,
    current: PlotPoint,
    next: PlotPoint,
    tension: f64,
) -> ((f64, f64), (f64, f64)) {
    let d01 = (current.x - previous.x).hypot(current.y - previous.y);
    let d12 = (next.x - current.x).hypot(next.y - current.y);
    let total = d01 + d12;

    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };
    let fa = tension * s01;
    let fb = tension * s12;
    let dx = next.x - previous.x;
    let dy = next.y - previous.y;

    (
        (current.x - fa * dx, current.y - fa * dy),
        (current.x + fb * dx, current.y + fb * dy),
    )
}
