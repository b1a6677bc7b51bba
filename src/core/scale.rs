use smallvec::SmallVec;

use crate::error::{ViewError, ViewResult};

/// Tick positions for one axis. Ten requested ticks rarely exceed sixteen.
pub type Ticks = SmallVec<[f64; 16]>;

/// Continuous mapping from a data domain to a pixel range.
///
/// A collapsed domain (`start == end`) maps every value to the middle of the
/// range instead of failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ViewResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ViewError::InvalidData("scale domain must be finite".to_owned()));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ViewError::InvalidData("scale range must be finite".to_owned()));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Builds a scale whose domain is the min/max of `values`.
    pub fn from_extent(
        values: impl IntoIterator<Item = f64>,
        range_start: f64,
        range_end: f64,
    ) -> ViewResult<Self> {
        let (min, max) = values
            .into_iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
                (min.min(value), max.max(value))
            });
        if min > max {
            return Err(ViewError::InvalidData(
                "cannot derive scale extent from an empty value set".to_owned(),
            ));
        }
        Self::new(min, max, range_start, range_end)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return (self.range_start + self.range_end) * 0.5;
        }
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 || self.domain_start == self.domain_end {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Round tick values inside the domain, stepping by 1, 2 or 5 times a power of ten.
    #[must_use]
    pub fn ticks(self, count: usize) -> Ticks {
        tick_values(self.domain_start, self.domain_end, count as f64)
    }

    /// Spacing between consecutive values returned by [`LinearScale::ticks`].
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        let (start, stop) = ordered(self.domain_start, self.domain_end);
        if start == stop || count == 0 {
            return 0.0;
        }
        let (_, _, inc) = tick_spec(start, stop, count as f64);
        if inc < 0.0 { -1.0 / inc } else { inc }
    }
}

/// Discrete mapping from categories to evenly spaced bands.
///
/// Padding applies both between bands and at the outer edges, and leftover
/// space is split evenly on both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<f64>,
    starts: Vec<f64>,
    range_start: f64,
    range_end: f64,
    padding: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(
        domain: impl IntoIterator<Item = f64>,
        range_start: f64,
        range_end: f64,
        padding: f64,
    ) -> ViewResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ViewError::InvalidData("band scale range must be finite".to_owned()));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ViewError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }

        let mut unique: Vec<f64> = Vec::new();
        for value in domain {
            if !value.is_finite() {
                return Err(ViewError::InvalidData(
                    "band scale categories must be finite".to_owned(),
                ));
            }
            if !unique.contains(&value) {
                unique.push(value);
            }
        }

        let count = unique.len() as f64;
        let reverse = range_end < range_start;
        let (start, stop) = ordered(range_start, range_end);
        let step = (stop - start) / (count - padding + padding * 2.0).max(1.0);
        let first = start + (stop - start - step * (count - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        let mut starts: Vec<f64> = (0..unique.len())
            .map(|index| first + step * index as f64)
            .collect();
        if reverse {
            starts.reverse();
        }

        Ok(Self {
            domain: unique,
            starts,
            range_start,
            range_end,
            padding,
            step,
            bandwidth,
        })
    }

    #[must_use]
    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Leading edge of the band for `category`, `None` if it is not in the domain.
    #[must_use]
    pub fn position(&self, category: f64) -> Option<f64> {
        self.domain
            .iter()
            .position(|candidate| *candidate == category)
            .map(|index| self.starts[index])
    }

    #[must_use]
    pub fn center(&self, category: f64) -> Option<f64> {
        self.position(category)
            .map(|start| start + self.bandwidth * 0.5)
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

fn tick_values(domain_start: f64, domain_end: f64, count: f64) -> Ticks {
    let mut out = Ticks::new();
    if !(count > 0.0) {
        return out;
    }
    if domain_start == domain_end {
        out.push(domain_start);
        return out;
    }

    let reverse = domain_end < domain_start;
    let (start, stop) = ordered(domain_start, domain_end);
    let (i1, i2, inc) = tick_spec(start, stop, count);
    if !(i2 >= i1) {
        return out;
    }

    let n = (i2 - i1) as usize + 1;
    for index in 0..n {
        let multiple = i1 + index as f64;
        out.push(if inc < 0.0 {
            multiple / -inc
        } else {
            multiple * inc
        });
    }
    if reverse {
        out.reverse();
    }
    out
}

/// Returns `(first_multiple, last_multiple, increment)`.
///
/// A negative increment encodes a fractional step as its reciprocal so tick
/// values can be produced by division and stay exactly representable.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let reciprocal = 10f64.powf(-power) / factor;
        i1 = (start * reciprocal).round();
        i2 = (stop * reciprocal).round();
        if i1 / reciprocal < start {
            i1 += 1.0;
        }
        if i2 / reciprocal > stop {
            i2 -= 1.0;
        }
        inc = -reciprocal;
    } else {
        let increment = 10f64.powf(power) * factor;
        i1 = (start / increment).round();
        i2 = (stop / increment).round();
        if i1 * increment < start {
            i1 += 1.0;
        }
        if i2 * increment > stop {
            i2 -= 1.0;
        }
        inc = increment;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Formats a tick value with just enough decimals for `step`.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, format_tick};

    #[test]
    fn ticks_cover_domain_with_round_steps() {
        let scale = LinearScale::new(46.0, 230.0, 0.0, 510.0).expect("scale");
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first().copied(), Some(60.0));
        assert_eq!(ticks.last().copied(), Some(220.0));
        assert_eq!(scale.tick_step(10), 20.0);
    }

    #[test]
    fn fractional_ticks_divide_by_reciprocal() {
        let scale = LinearScale::new(0.0, 1.0, 0.0, 100.0).expect("scale");
        let ticks = scale.ticks(5);
        assert_eq!(ticks.as_slice(), &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(format_tick(ticks[1], scale.tick_step(5)), "0.2");
    }
}
