//! Immutable numeric intervals.
//!
//! A [`Range`] is a closed interval `[lower, upper]`. It is a `Copy` value:
//! every operation that would change a range returns a new one instead.
//!
//! # Examples
//!
//! ## Containment and Intersection
//!
//! ```rust
//! use spenn::Range;
//!
//! let range = Range::new(2.0, 8.0);
//!
//! assert!(range.contains(2.0));
//! assert!(range.contains(8.0));
//! assert!(!range.contains(8.1));
//!
//! // Touching at a bound counts as intersecting
//! assert!(range.intersects(8.0, 10.0));
//! // An inverted pair is an empty interval
//! assert!(!range.intersects(6.0, 4.0));
//! ```
//!
//! ## Deriving New Ranges
//!
//! ```rust
//! use spenn::Range;
//!
//! let range = Range::new(2.0, 8.0);
//!
//! // Margins are fractions of the length (6.0)
//! let padded = Range::expand(Some(&range), 0.5, 0.25).unwrap();
//! assert_eq!(padded, Range::new(-1.0, 9.5));
//!
//! let shifted = Range::shift(Some(&range), 3.0, true).unwrap();
//! assert_eq!(shifted, Range::new(5.0, 11.0));
//!
//! let merged = Range::combine(Some(range), Some(Range::new(5.0, 12.0)));
//! assert_eq!(merged, Some(Range::new(2.0, 12.0)));
//! ```

use std::fmt;

use num_traits::Float;

use crate::error::{Error, Result};

/// Closed numeric interval `[lower, upper]`.
///
/// # Type Parameters
///
/// - `T`: Bound type (typically `f64` or `f32`)
///
/// # Bound Ordering
///
/// [`Range::new`] stores the bounds exactly as given; keeping
/// `lower <= upper` is up to the caller. [`Range::try_new`] checks it.
///
/// # Absent Ranges
///
/// The associated functions [`expand`](Range::expand),
/// [`shift`](Range::shift), [`scale`](Range::scale) and
/// [`combine`](Range::combine) take their inputs as `Option`, with `None`
/// standing for a missing range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T = f64> {
    lower: T,
    upper: T,
}

impl<T: Float> Range<T> {
    /// Creates a range with the given bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use spenn::Range;
    ///
    /// let range = Range::new(-5.0, 5.0);
    /// assert_eq!(range.length(), 10.0);
    /// ```
    pub const fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// Creates a range, rejecting `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spenn::Range;
    ///
    /// assert!(Range::try_new(1.0, 2.0).is_ok());
    /// assert!(Range::try_new(2.0, 1.0).is_err());
    /// ```
    pub fn try_new(lower: T, upper: T) -> Result<Self>
    where
        T: fmt::Debug,
    {
        if lower > upper {
            return Err(Error::InvalidArgument(format!(
                "require lower ({lower:?}) <= upper ({upper:?})"
            )));
        }
        Ok(Self::new(lower, upper))
    }

    pub fn lower_bound(&self) -> T {
        self.lower
    }

    pub fn upper_bound(&self) -> T {
        self.upper
    }

    /// `upper - lower`.
    pub fn length(&self) -> T {
        self.upper - self.lower
    }

    /// Midpoint of the range.
    pub fn central_value(&self) -> T {
        let two = T::one() + T::one();
        self.lower / two + self.upper / two
    }

    /// Returns `true` if `lower <= value <= upper`.
    pub fn contains(&self, value: T) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Returns `true` if `[lower, upper]` shares at least one point with
    /// this range.
    ///
    /// A pair with `upper < lower` describes an empty interval and never
    /// intersects.
    pub fn intersects(&self, lower: T, upper: T) -> bool {
        lower <= upper && lower <= self.upper && upper >= self.lower
    }

    /// Returns `true` if `other` shares at least one point with this range.
    pub fn intersects_range(&self, other: &Range<T>) -> bool {
        self.intersects(other.lower, other.upper)
    }

    /// Returns the value within the range closest to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spenn::Range;
    ///
    /// let range = Range::new(0.0, 10.0);
    /// assert_eq!(range.constrain(-3.0), 0.0);
    /// assert_eq!(range.constrain(4.0), 4.0);
    /// assert_eq!(range.constrain(12.0), 10.0);
    /// ```
    pub fn constrain(&self, value: T) -> T {
        if self.contains(value) {
            value
        } else if value > self.upper {
            self.upper
        } else if value < self.lower {
            self.lower
        } else {
            // NaN
            value
        }
    }

    /// Returns `true` if both bounds are NaN.
    pub fn is_nan_range(&self) -> bool {
        self.lower.is_nan() && self.upper.is_nan()
    }

    /// Grows the range by a fraction of its length on each side.
    ///
    /// The new bounds are `lower - length * lower_margin` and
    /// `upper + length * upper_margin`. Negative margins pull the bounds
    /// inward; the result is not re-ordered if they cross.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `range` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spenn::Range;
    ///
    /// let range = Range::new(2.0, 8.0);
    /// assert_eq!(Range::expand(Some(&range), 1.0, 1.0), Ok(Range::new(-4.0, 14.0)));
    /// assert!(Range::<f64>::expand(None, 0.1, 0.1).is_err());
    /// ```
    pub fn expand(range: Option<&Range<T>>, lower_margin: T, upper_margin: T) -> Result<Self> {
        let range = range.ok_or_else(|| Error::null_argument("range"))?;
        let length = range.length();
        Ok(Self::new(
            range.lower - length * lower_margin,
            range.upper + length * upper_margin,
        ))
    }

    /// Returns the smallest range that covers `range` and `value`.
    ///
    /// A missing range yields `[value, value]`.
    pub fn expand_to_include(range: Option<&Range<T>>, value: T) -> Self {
        match range {
            None => Self::new(value, value),
            Some(r) if value < r.lower => Self::new(value, r.upper),
            Some(r) if value > r.upper => Self::new(r.lower, value),
            Some(r) => *r,
        }
    }

    /// Translates the range by `delta`.
    ///
    /// With `allow_zero_crossing` each bound simply moves by `delta`.
    /// Without it a bound never changes sign: a positive bound stops at zero
    /// when moving down, a negative bound stops at zero when moving up, and
    /// a bound sitting on zero moves freely.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `base` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spenn::Range;
    ///
    /// let base = Range::new(-5.0, 5.0);
    /// assert_eq!(Range::shift(Some(&base), 10.0, true), Ok(Range::new(5.0, 15.0)));
    /// assert_eq!(Range::shift(Some(&base), -10.0, false), Ok(Range::new(-15.0, 0.0)));
    /// ```
    pub fn shift(base: Option<&Range<T>>, delta: T, allow_zero_crossing: bool) -> Result<Self> {
        let base = base.ok_or_else(|| Error::null_argument("base"))?;
        if allow_zero_crossing {
            return Ok(Self::new(base.lower + delta, base.upper + delta));
        }
        Ok(Self::new(
            shift_no_zero_crossing(base.lower, delta),
            shift_no_zero_crossing(base.upper, delta),
        ))
    }

    /// Multiplies both bounds by `factor`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `base` is `None` or `factor` is
    /// negative.
    pub fn scale(base: Option<&Range<T>>, factor: T) -> Result<Self> {
        let base = base.ok_or_else(|| Error::null_argument("base"))?;
        if factor < T::zero() {
            return Err(Error::InvalidArgument("negative 'factor' argument".to_string()));
        }
        Ok(Self::new(base.lower * factor, base.upper * factor))
    }

    /// Returns the smallest range covering both inputs.
    ///
    /// The inputs need not overlap. If one side is `None` the other is
    /// returned unchanged; if both are `None` so is the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use spenn::Range;
    ///
    /// let r = Range::new(5.0, 10.0);
    /// assert_eq!(Range::combine(None, Some(r)), Some(r));
    /// assert_eq!(Range::<f64>::combine(None, None), None);
    /// ```
    pub fn combine(range1: Option<Range<T>>, range2: Option<Range<T>>) -> Option<Self> {
        match (range1, range2) {
            (None, other) | (other, None) => other,
            (Some(a), Some(b)) => Some(Self::new(a.lower.min(b.lower), a.upper.max(b.upper))),
        }
    }

    /// Like [`combine`](Range::combine), but NaN bounds are ignored.
    ///
    /// A side whose bounds are both NaN counts as missing. Returns `None`
    /// when nothing but NaN remains.
    pub fn combine_ignoring_nan(
        range1: Option<Range<T>>,
        range2: Option<Range<T>>,
    ) -> Option<Self> {
        let range1 = range1.filter(|r| !r.is_nan_range());
        let range2 = range2.filter(|r| !r.is_nan_range());
        match (range1, range2) {
            (None, other) | (other, None) => other,
            (Some(a), Some(b)) => {
                // `Float::min`/`max` return the non-NaN operand.
                let merged = Self::new(a.lower.min(b.lower), a.upper.max(b.upper));
                (!merged.is_nan_range()).then_some(merged)
            }
        }
    }
}

fn shift_no_zero_crossing<T: Float>(value: T, delta: T) -> T {
    if value > T::zero() {
        (value + delta).max(T::zero())
    } else if value < T::zero() {
        (value + delta).min(T::zero())
    } else {
        value + delta
    }
}

impl<T: Float + fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range[{},{}]", self.lower, self.upper)
    }
}
