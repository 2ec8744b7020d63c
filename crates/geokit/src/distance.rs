//! Unit-aware distances.
//!
//! A [`Distance`] always stores meters. Every accessor divides the stored
//! value by its unit factor directly, never going through another unit.

use crate::{GeoError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A decimal number, optionally negative, followed by an optional unit token.
static DISTANCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<number>-?[0-9]+(?:\.[0-9]+)?)\s*(?P<unit>.*)$").unwrap());

/// Length units a [`Distance`] can be created from and converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    Miles,
    Yards,
    Feet,
    Inches,
    NauticalMiles,
}

impl DistanceUnit {
    /// Every supported unit.
    pub const ALL: [DistanceUnit; 7] = [
        DistanceUnit::Meters,
        DistanceUnit::Kilometers,
        DistanceUnit::Miles,
        DistanceUnit::Yards,
        DistanceUnit::Feet,
        DistanceUnit::Inches,
        DistanceUnit::NauticalMiles,
    ];

    /// Number of meters in one of this unit.
    #[inline]
    pub const fn meters_per_unit(self) -> f64 {
        match self {
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Kilometers => 1000.0,
            DistanceUnit::Miles => 1609.344,
            DistanceUnit::Yards => 0.9144,
            DistanceUnit::Feet => 0.3048,
            DistanceUnit::Inches => 0.0254,
            DistanceUnit::NauticalMiles => 1852.0,
        }
    }

    /// Short symbol used when formatting.
    pub const fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::Yards => "yd",
            DistanceUnit::Feet => "ft",
            DistanceUnit::Inches => "in",
            DistanceUnit::NauticalMiles => "nm",
        }
    }
}

/// Parses a unit token. Tokens are case-sensitive; the empty token means meters.
impl FromStr for DistanceUnit {
    type Err = GeoError;

    fn from_str(token: &str) -> Result<Self> {
        let unit = match token {
            "" | "m" | "meter" | "meters" | "metre" | "metres" => DistanceUnit::Meters,
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                DistanceUnit::Kilometers
            }
            "mi" | "mile" | "miles" => DistanceUnit::Miles,
            "yd" | "yard" | "yards" => DistanceUnit::Yards,
            "ft" | "foot" | "feet" => DistanceUnit::Feet,
            "in" | "inch" | "inches" | "″" => DistanceUnit::Inches,
            "nm" | "nautical" | "nauticalmile" | "nauticalmiles" => DistanceUnit::NauticalMiles,
            other => {
                tracing::debug!(unit = other, "rejected distance unit");
                return Err(GeoError::UnknownUnit(other.to_string()));
            }
        };
        Ok(unit)
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A length, stored in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Distance {
    meters: f64,
}

impl Distance {
    /// Creates a distance from a value and a unit token such as `"km"` or `"feet"`.
    ///
    /// # Example
    /// ```
    /// use geokit::Distance;
    ///
    /// let distance = Distance::new(1.0, "km")?;
    /// assert_eq!(distance.meters(), 1000.0);
    /// assert!(Distance::new(1.0, "foo").is_err());
    /// # Ok::<(), geokit::GeoError>(())
    /// ```
    pub fn new(value: f64, unit: &str) -> Result<Self> {
        Ok(Self::with_unit(value, unit.parse()?))
    }

    /// Creates a distance from a value in the given unit.
    #[inline]
    pub fn with_unit(value: f64, unit: DistanceUnit) -> Self {
        Self::from_meters(value * unit.meters_per_unit())
    }

    /// Creates a distance from meters.
    #[inline]
    pub const fn from_meters(meters: f64) -> Self {
        Self { meters }
    }

    /// Parses strings like `"1000"`, `"1000m"`, `"1.5 km"` or `"-3ft"`.
    ///
    /// The number must come first and may carry a leading `-`. A fraction
    /// needs digits on both sides of the point, so `"+2km"`, `".5km"` and
    /// `"7."` are rejected, as are exponents and surrounding whitespace.
    /// Whitespace between the number and the unit token is allowed.
    pub fn from_string(input: &str) -> Result<Self> {
        let invalid = || {
            tracing::debug!(input, "rejected distance string");
            GeoError::InvalidDistance(input.to_string())
        };

        let captures = DISTANCE_PATTERN.captures(input).ok_or_else(invalid)?;
        let value: f64 = captures["number"].parse().map_err(|_| invalid())?;
        let unit: DistanceUnit = captures["unit"].parse().map_err(|_| invalid())?;

        Ok(Self::with_unit(value, unit))
    }

    /// Converts into the given unit.
    #[inline]
    pub fn to(&self, unit: DistanceUnit) -> f64 {
        match unit {
            DistanceUnit::Meters => self.meters,
            other => self.meters / other.meters_per_unit(),
        }
    }

    /// Length in meters.
    #[inline]
    pub fn meters(&self) -> f64 {
        self.meters
    }

    /// Alias for [`Distance::meters`].
    #[inline]
    pub fn m(&self) -> f64 {
        self.meters()
    }

    /// Length in kilometers.
    #[inline]
    pub fn kilometers(&self) -> f64 {
        self.to(DistanceUnit::Kilometers)
    }

    /// Alias for [`Distance::kilometers`].
    #[inline]
    pub fn km(&self) -> f64 {
        self.kilometers()
    }

    /// Length in statute miles.
    #[inline]
    pub fn miles(&self) -> f64 {
        self.to(DistanceUnit::Miles)
    }

    /// Alias for [`Distance::miles`].
    #[inline]
    pub fn mi(&self) -> f64 {
        self.miles()
    }

    /// Length in yards.
    #[inline]
    pub fn yards(&self) -> f64 {
        self.to(DistanceUnit::Yards)
    }

    /// Alias for [`Distance::yards`].
    #[inline]
    pub fn yd(&self) -> f64 {
        self.yards()
    }

    /// Length in feet.
    #[inline]
    pub fn feet(&self) -> f64 {
        self.to(DistanceUnit::Feet)
    }

    /// Alias for [`Distance::feet`].
    #[inline]
    pub fn ft(&self) -> f64 {
        self.feet()
    }

    /// Length in inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.to(DistanceUnit::Inches)
    }

    /// Alias for [`Distance::inches`].
    #[inline]
    pub fn r#in(&self) -> f64 {
        self.inches()
    }

    /// Nautical miles.
    #[inline]
    pub fn nautical(&self) -> f64 {
        self.to(DistanceUnit::NauticalMiles)
    }

    /// Alias for [`Distance::nautical`].
    #[inline]
    pub fn nm(&self) -> f64 {
        self.nautical()
    }
}

impl FromStr for Distance {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl From<f64> for Distance {
    fn from(meters: f64) -> Self {
        Self::from_meters(meters)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.meters)
    }
}
