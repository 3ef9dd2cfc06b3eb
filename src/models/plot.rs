//! Pixel geometry shared by the chart panels: plot areas, value scales,
//! SVG path builders and the wind direction marker.

use std::fmt::Write;

/// Space reserved around the plot area for axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    /// Panel with hour labels under the x axis.
    pub const LABELLED: Self = Self {
        top: 10.0,
        right: 48.0,
        bottom: 24.0,
        left: 48.0,
    };

    /// Panel with the x ticks hidden. Horizontal margins match `LABELLED`
    /// so category bands line up across stacked panels.
    pub const BARE: Self = Self {
        top: 10.0,
        right: 48.0,
        bottom: 8.0,
        left: 48.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(width: f64, height: f64, margins: &Margins) -> Self {
        Self {
            left: margins.left,
            top: margins.top,
            width: (width - margins.left - margins.right).max(0.0),
            height: (height - margins.top - margins.bottom).max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Centre of the `index`-th of `count` equal category bands.
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        let band = self.width / count.max(1) as f64;
        self.left + band * (index as f64 + 0.5)
    }

    pub fn x_positions(&self, count: usize) -> Vec<f64> {
        (0..count).map(|i| self.x_at(i, count)).collect()
    }

    /// Band under a pointer at `x`, or `None` outside the plot area.
    pub fn index_at(&self, x: f64, count: usize) -> Option<usize> {
        if count == 0 || self.width <= 0.0 || x < self.left || x > self.right() {
            return None;
        }
        let band = self.width / count as f64;
        let index = ((x - self.left) / band).floor() as usize;
        Some(index.min(count - 1))
    }
}

/// Closed value range of an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    /// `[data min - padding, data max + padding]` over the finite values.
    pub fn padded(values: impl IntoIterator<Item = f64>, padding: f64) -> Self {
        match finite_extent(values) {
            Some((min, max)) => Self {
                min: min - padding,
                max: max + padding,
            }
            .widened(),
            None => Self::UNIT,
        }
    }

    /// Data extent stretched to include zero.
    pub fn from_zero(values: impl IntoIterator<Item = f64>) -> Self {
        match finite_extent(values) {
            Some((min, max)) => Self {
                min: min.min(0.0),
                max: max.max(0.0),
            }
            .widened(),
            None => Self::UNIT,
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// `count` evenly spaced values from `min` to `max`.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match count {
            0 => vec![],
            1 => vec![self.min],
            _ => {
                let step = self.span() / (count - 1) as f64;
                (0..count).map(|i| self.min + step * i as f64).collect()
            }
        }
    }

    fn widened(self) -> Self {
        if self.span().abs() < f64::EPSILON {
            Self {
                min: self.min - 1.0,
                max: self.max + 1.0,
            }
        } else {
            self
        }
    }
}

fn finite_extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |extent, v| match extent {
            None => Some((v, v)),
            Some((min, max)) => Some((f64::min(min, v), f64::max(max, v))),
        })
}

/// Maps domain values onto the vertical extent of a plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub domain: Domain,
    top: f64,
    bottom: f64,
}

impl Scale {
    pub fn new(domain: Domain, area: &PlotArea) -> Self {
        Self {
            domain,
            top: area.top,
            bottom: area.bottom(),
        }
    }

    pub fn y(&self, value: f64) -> f64 {
        let ratio = (value - self.domain.min) / self.domain.span();
        self.bottom - ratio * (self.bottom - self.top)
    }
}

/// A plotted sample, remembering which record it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Pairs values with x positions, dropping non-finite samples so the
/// remaining neighbours are joined directly.
pub fn plot_points(values: &[f64], xs: &[f64], scale: &Scale) -> Vec<PlotPoint> {
    values
        .iter()
        .zip(xs)
        .enumerate()
        .filter(|(_, (value, _))| value.is_finite())
        .map(|(index, (&value, &x))| PlotPoint {
            index,
            x,
            y: scale.y(value),
        })
        .collect()
}

/// Smooth curve through the points that never overshoots between samples
/// (monotone in x, Fritsch-Carlson tangents).
pub fn monotone_path(points: &[PlotPoint]) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut path = format!("M {:.2},{:.2}", first.x, first.y);
    match points.len() {
        1 => return path,
        2 => {
            let _ = write!(path, " L {:.2},{:.2}", points[1].x, points[1].y);
            return path;
        }
        _ => {}
    }

    let tangents = monotone_tangents(points);
    for (i, pair) in points.windows(2).enumerate() {
        let (p0, p1) = (pair[0], pair[1]);
        let dx = (p1.x - p0.x) / 3.0;
        let _ = write!(
            path,
            " C {:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            p0.x + dx,
            p0.y + dx * tangents[i],
            p1.x - dx,
            p1.y - dx * tangents[i + 1],
            p1.x,
            p1.y
        );
    }

    path
}

fn monotone_tangents(points: &[PlotPoint]) -> Vec<f64> {
    let n = points.len();
    let slope = |a: &PlotPoint, b: &PlotPoint| {
        let h = b.x - a.x;
        if h == 0.0 { 0.0 } else { (b.y - a.y) / h }
    };

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        let (p0, p1, p2) = (&points[i - 1], &points[i], &points[i + 1]);
        let (h0, h1) = (p1.x - p0.x, p2.x - p1.x);
        let (s0, s1) = (slope(p0, p1), slope(p1, p2));
        let weighted = if h0 + h1 == 0.0 {
            0.0
        } else {
            (s0 * h1 + s1 * h0) / (h0 + h1)
        };
        tangents[i] = (s0.signum() + s1.signum())
            * s0.abs().min(s1.abs()).min(0.5 * weighted.abs());
    }

    let first = slope(&points[0], &points[1]);
    tangents[0] = (3.0 * first - tangents[1]) / 2.0;
    let last = slope(&points[n - 2], &points[n - 1]);
    tangents[n - 1] = (3.0 * last - tangents[n - 2]) / 2.0;

    tangents
}

/// Step outline changing value halfway between samples.
pub fn step_path(points: &[PlotPoint]) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut path = format!("M {:.2},{:.2}", first.x, first.y);
    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let mid = (p0.x + p1.x) / 2.0;
        let _ = write!(path, " H {:.2} V {:.2} H {:.2}", mid, p1.y, p1.x);
    }

    path
}

/// Step outline closed down to `baseline`, for filling.
pub fn step_area_path(points: &[PlotPoint], baseline: f64) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut path = step_path(points);
    let _ = write!(path, " V {:.2} H {:.2} Z", baseline, first.x);

    path
}

/// Scale applied to the wind arrow glyph.
pub const WIND_ARROW_SCALE: f64 = 0.6;

/// Rotation for a wind bearing. The glyph points north-east at rest and
/// bearings name the direction the wind comes from, hence `-45 + 180`.
pub fn wind_arrow_rotation(bearing: f64) -> f64 {
    bearing - 45.0 + 180.0
}

/// Direction marker drawn on every other wind speed sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindArrow {
    pub index: usize,
    pub cx: f64,
    pub cy: f64,
    pub rotation: f64,
}

impl WindArrow {
    /// Marker for the sample at `index`, if one is drawn there.
    ///
    /// Odd indices never get one, and neither do samples where a coordinate
    /// or the bearing is missing, zero or NaN.
    pub fn at(index: usize, cx: Option<f64>, cy: Option<f64>, bearing: Option<f64>) -> Option<Self> {
        if index % 2 > 0 {
            return None;
        }
        let truthy = |v: Option<f64>| v.filter(|v| *v != 0.0 && !v.is_nan());

        Some(Self {
            index,
            cx: truthy(cx)?,
            cy: truthy(cy)?,
            rotation: wind_arrow_rotation(truthy(bearing)?),
        })
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({:.2} {:.2}) rotate({}) scale({})",
            self.cx, self.cy, self.rotation, WIND_ARROW_SCALE
        )
    }
}
