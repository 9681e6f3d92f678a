//! Sample variants and their axis data

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// One of the five numeric axes a sample may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First axis.
    X,
    /// Second axis.
    Y,
    /// Third axis.
    Z,
    /// Fourth axis.
    U,
    /// Fifth axis.
    W,
}

impl Axis {
    /// All axes, in slot order.
    pub const ALL: [Self; 5] = [Self::X, Self::Y, Self::Z, Self::U, Self::W];

    /// Field name used on the wire and in JSON documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::U => "u",
            Self::W => "w",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Sample discriminant: which variant a record is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKind {
    /// `x`
    Uniaxial,
    /// `x, y`
    Biaxial,
    /// `x, y, z`
    Triaxial,
    /// `x, y, z, u`
    Quadriaxial,
    /// `x, y, z, u, w`
    Quinqueaxial,
}

impl SampleKind {
    /// All variants, ordered by axis count.
    pub const ALL: [Self; 5] = [
        Self::Uniaxial,
        Self::Biaxial,
        Self::Triaxial,
        Self::Quadriaxial,
        Self::Quinqueaxial,
    ];

    /// Discriminant string carried in the envelope `type` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uniaxial => "UniaxialSample",
            Self::Biaxial => "BiaxialSample",
            Self::Triaxial => "TriaxialSample",
            Self::Quadriaxial => "QuadriaxialSample",
            Self::Quinqueaxial => "QuinqueaxialSample",
        }
    }

    /// Number of populated axes.
    #[must_use]
    pub const fn axis_count(self) -> usize {
        self as usize + 1
    }

    /// Axes this variant carries, in slot order.
    #[must_use]
    pub fn axes(self) -> &'static [Axis] {
        &Axis::ALL[..self.axis_count()]
    }

    /// Whether `axis` belongs to this variant.
    #[must_use]
    pub fn carries(self, axis: Axis) -> bool {
        axis.slot() < self.axis_count()
    }
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                tracing::warn!(type_name = s, "rejected unknown sample variant");
                Error::InvalidVariant(s.to_string())
            })
    }
}

/// Axis values of a sample, one variant per [`SampleKind`].
///
/// Each variant holds only the axes its kind prescribes, so an axis outside
/// the variant cannot be set. Values are `Option` because a decoded wire
/// message may omit a prescribed axis; the `f64` constructors always
/// populate every prescribed axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Axes {
    /// `UniaxialSample`
    Uniaxial {
        /// First axis
        x: Option<f64>,
    },
    /// `BiaxialSample`
    Biaxial {
        /// First axis
        x: Option<f64>,
        /// Second axis
        y: Option<f64>,
    },
    /// `TriaxialSample`
    Triaxial {
        /// First axis
        x: Option<f64>,
        /// Second axis
        y: Option<f64>,
        /// Third axis
        z: Option<f64>,
    },
    /// `QuadriaxialSample`
    Quadriaxial {
        /// First axis
        x: Option<f64>,
        /// Second axis
        y: Option<f64>,
        /// Third axis
        z: Option<f64>,
        /// Fourth axis
        u: Option<f64>,
    },
    /// `QuinqueaxialSample`
    Quinqueaxial {
        /// First axis
        x: Option<f64>,
        /// Second axis
        y: Option<f64>,
        /// Third axis
        z: Option<f64>,
        /// Fourth axis
        u: Option<f64>,
        /// Fifth axis
        w: Option<f64>,
    },
}

impl Axes {
    /// Single-axis sample.
    #[must_use]
    pub const fn uniaxial(x: f64) -> Self {
        Self::Uniaxial { x: Some(x) }
    }

    /// Two-axis sample.
    #[must_use]
    pub const fn biaxial(x: f64, y: f64) -> Self {
        Self::Biaxial {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Three-axis sample.
    #[must_use]
    pub const fn triaxial(x: f64, y: f64, z: f64) -> Self {
        Self::Triaxial {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Four-axis sample.
    #[must_use]
    pub const fn quadriaxial(x: f64, y: f64, z: f64, u: f64) -> Self {
        Self::Quadriaxial {
            x: Some(x),
            y: Some(y),
            z: Some(z),
            u: Some(u),
        }
    }

    /// Five-axis sample.
    #[must_use]
    pub const fn quinqueaxial(x: f64, y: f64, z: f64, u: f64, w: f64) -> Self {
        Self::Quinqueaxial {
            x: Some(x),
            y: Some(y),
            z: Some(z),
            u: Some(u),
            w: Some(w),
        }
    }

    /// Build the variant for `kind` from a full `[x, y, z, u, w]` slot array.
    ///
    /// Slots outside the variant are discarded.
    #[must_use]
    pub const fn from_values(kind: SampleKind, values: [Option<f64>; 5]) -> Self {
        let [x, y, z, u, w] = values;
        match kind {
            SampleKind::Uniaxial => Self::Uniaxial { x },
            SampleKind::Biaxial => Self::Biaxial { x, y },
            SampleKind::Triaxial => Self::Triaxial { x, y, z },
            SampleKind::Quadriaxial => Self::Quadriaxial { x, y, z, u },
            SampleKind::Quinqueaxial => Self::Quinqueaxial { x, y, z, u, w },
        }
    }

    /// Discriminant of this variant.
    #[must_use]
    pub const fn kind(&self) -> SampleKind {
        match self {
            Self::Uniaxial { .. } => SampleKind::Uniaxial,
            Self::Biaxial { .. } => SampleKind::Biaxial,
            Self::Triaxial { .. } => SampleKind::Triaxial,
            Self::Quadriaxial { .. } => SampleKind::Quadriaxial,
            Self::Quinqueaxial { .. } => SampleKind::Quinqueaxial,
        }
    }

    /// Full `[x, y, z, u, w]` slot array; slots outside the variant are `None`.
    #[must_use]
    pub const fn values(&self) -> [Option<f64>; 5] {
        match *self {
            Self::Uniaxial { x } => [x, None, None, None, None],
            Self::Biaxial { x, y } => [x, y, None, None, None],
            Self::Triaxial { x, y, z } => [x, y, z, None, None],
            Self::Quadriaxial { x, y, z, u } => [x, y, z, u, None],
            Self::Quinqueaxial { x, y, z, u, w } => [x, y, z, u, w],
        }
    }

    /// Value of `axis`. Always `None` for an axis outside the variant.
    #[must_use]
    pub const fn get(&self, axis: Axis) -> Option<f64> {
        self.values()[axis.slot()]
    }

    /// Prescribed axes with their values, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, Option<f64>)> + '_ {
        let values = self.values();
        self.kind()
            .axes()
            .iter()
            .map(move |&axis| (axis, values[axis.slot()]))
    }

    /// Prescribed axes that are absent (only possible after a lossy decode).
    pub fn missing(&self) -> impl Iterator<Item = Axis> + '_ {
        self.iter()
            .filter(|(_, value)| value.is_none())
            .map(|(axis, _)| axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in SampleKind::ALL {
            assert_eq!(kind.as_str().parse::<SampleKind>().ok(), Some(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_kind_rejects_unknown_name() {
        let err = "HexaxialSample".parse::<SampleKind>().unwrap_err();
        assert!(matches!(err, Error::InvalidVariant(ref name) if name == "HexaxialSample"));
    }

    #[test]
    fn test_kind_match_is_exact() {
        assert!("uniaxialsample".parse::<SampleKind>().is_err());
        assert!(" UniaxialSample".parse::<SampleKind>().is_err());
        assert!("".parse::<SampleKind>().is_err());
    }

    #[test]
    fn test_prescribed_axes_table() {
        assert_eq!(SampleKind::Uniaxial.axes(), [Axis::X]);
        assert_eq!(SampleKind::Biaxial.axes(), [Axis::X, Axis::Y]);
        assert_eq!(SampleKind::Triaxial.axes(), [Axis::X, Axis::Y, Axis::Z]);
        assert_eq!(
            SampleKind::Quadriaxial.axes(),
            [Axis::X, Axis::Y, Axis::Z, Axis::U]
        );
        assert_eq!(SampleKind::Quinqueaxial.axes(), Axis::ALL);
    }

    #[test]
    fn test_from_values_discards_foreign_axes() {
        let axes = Axes::from_values(
            SampleKind::Biaxial,
            [Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)],
        );
        assert_eq!(axes, Axes::biaxial(1.0, 2.0));
        assert_eq!(axes.get(Axis::Z), None);
        assert_eq!(axes.get(Axis::W), None);
    }

    #[test]
    fn test_iter_only_prescribed() {
        let axes = Axes::triaxial(0.1, 0.2, 0.3);
        let names: Vec<&str> = axes.iter().map(|(axis, _)| axis.name()).collect();
        assert_eq!(names, ["x", "y", "z"]);
        assert_eq!(axes.missing().count(), 0);
    }

    #[test]
    fn test_missing_reports_absent_prescribed_axis() {
        let axes = Axes::Quadriaxial {
            x: Some(1.0),
            y: None,
            z: Some(3.0),
            u: None,
        };
        let missing: Vec<Axis> = axes.missing().collect();
        assert_eq!(missing, [Axis::Y, Axis::U]);
    }
}
