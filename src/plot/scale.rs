//! Axis ranges, data-to-pixel transforms and tick generation

use kurbo::{Affine, Rect};

/// A closed interval on one axis. `min` may be greater than `max` for
/// flipped (screen-space) axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Range { min, max }
    }

    pub const fn size(&self) -> f64 {
        self.max - self.min
    }

    /// Smallest range covering every finite value, or `None` if there is none.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Range> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Range>, v| match acc {
                None => Some(Range::new(v, v)),
                Some(r) => Some(Range::new(r.min.min(v), r.max.max(v))),
            })
    }

    /// Widen the range by `fract` of its size on each side. Degenerate
    /// ranges are widened by at least 0.5, more at magnitudes where 0.5 is
    /// below float resolution, so they still map to a visible band.
    pub fn pad(self, fract: f64) -> Range {
        if self.size() == 0.0 {
            let half = (self.min.abs() * f64::EPSILON * 64.0).max(0.5);
            return Range::new(self.min - half, self.max + half);
        }
        let amount = self.size() * fract;
        Range::new(self.min - amount, self.max + amount)
    }

    pub fn contains(&self, value: f64) -> bool {
        (value >= self.min && value <= self.max) || (value <= self.min && value >= self.max)
    }

    /// Evenly spaced "nice" tick values (steps of 1, 2, 2.5 or 5 times a
    /// power of ten) covering the range, with the decimals needed to print them.
    pub fn nice_ticks(&self, count: u32) -> Ticks {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };

        let step = (hi - lo) / f64::from(count.max(1));
        if !step.is_finite() || step <= 0.0 {
            return Ticks {
                values: vec![lo],
                decimals: 0,
            };
        }

        let k = step.log10().floor();
        let base = step / 10f64.powf(k);
        let nice_base = match base {
            b if b <= 1.0 => 1.0,
            b if b <= 2.0 => 2.0,
            b if b <= 2.5 => 2.5,
            b if b <= 5.0 => 5.0,
            _ => 10.0,
        };
        let step = nice_base * 10f64.powf(k);

        let magnitude = step.log10().floor() as i32;
        let mut decimals = (-magnitude).max(0) as usize;
        if nice_base == 2.5 && magnitude <= 0 {
            decimals += 1;
        }

        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        let p = 10f64.powi(decimals as i32);
        let values = (first..=last)
            .map(|i| ((i as f64 * step) * p).round() / p)
            .collect();

        Ticks { values, decimals }
    }
}

/// Tick positions plus formatting precision
#[derive(Debug, Clone, PartialEq)]
pub struct Ticks {
    pub values: Vec<f64>,
    pub decimals: usize,
}

impl Ticks {
    pub fn label(&self, value: f64) -> String {
        format!("{:.*}", self.decimals, value)
    }
}

/// Affine map from data space to a pixel rectangle, with y growing upwards
/// in data space and downwards on screen.
pub fn data_to_pixels(x: Range, y: Range, rect: Rect) -> Affine {
    let scale_x = rect.width() / x.size();
    let scale_y = -rect.height() / y.size();
    let translate_x = rect.x0 - x.min * scale_x;
    let translate_y = rect.y1 - y.min * scale_y;

    Affine::new([scale_x, 0.0, 0.0, scale_y, translate_x, translate_y])
}
