//! # Curve Module
//!
//! The evaluation contract shared by every control curve.
//!
//! This module handles:
//! - Validated, immutable curve configuration ([`CurveConfig`])
//! - Dead zone and minimum power composition ([`ControlCurve::get`])
//! - Linear and power-law shapes
//! - Runtime selection between shapes ([`Curve`])
//!
//! ## Evaluation
//!
//! For an input `v` the curve first strips the dead zone and normalizes what
//! is left into an excursion `x`, where `x = 0` at the dead zone edge and
//! `x = 1` at full deflection:
//!
//! `x = (|v| - dead_zone) / (1 - dead_zone)`
//!
//! The shape maps `x` to `t` and the output magnitude
//! blends from the minimum power to the power multiplier:
//!
//! `|output| = minimum_power * (1 - t) + power_multiplier * t`
//!
//! The blend keeps both endpoints exact. Past full deflection (`t > 1`) the
//! equivalent form `minimum_power + (power_multiplier - minimum_power) * t`
//! is used instead, so huge inputs grow to ±infinity rather than NaN.
//!
//! The output takes the sign of `v`. Inputs with `|v| < dead_zone` (and zero)
//! produce exactly 0.0. Inputs beyond ±1.0 are extrapolated, not clamped.

pub mod builder;
pub mod linear;
pub mod power;

use crate::error::{CurveError, CurveField, Result};

use linear::LinearCurve;
use power::PowerCurve;

const UNIT_RANGE: &str = "[0, 1)";
const MULTIPLIER_RANGE: &str = "(0, 1]";

/// Shared parameters of every control curve.
///
/// A `CurveConfig` can only be obtained through validation, so every curve
/// holding one is known to be well formed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveConfig {
    /// Smallest output magnitude past the dead zone (0.0 to <1.0).
    minimum_power: f64,
    /// Input magnitude below which output is zero (0.0 to <1.0).
    dead_zone: f64,
    /// Output magnitude at full deflection (>0.0 to 1.0).
    power_multiplier: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            minimum_power: 0.0,
            dead_zone: 0.0,
            power_multiplier: 1.0,
        }
    }
}

impl CurveConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::OutOfRange`] for the first field outside its
    /// range, checked in the order minimum power, dead zone, power multiplier.
    ///
    /// # Examples
    ///
    /// ```
    /// use control_curves::CurveConfig;
    ///
    /// assert!(CurveConfig::new(0.1, 0.05, 0.8).is_ok());
    /// assert!(CurveConfig::new(1.0, 0.05, 0.8).is_err());
    /// ```
    pub fn new(minimum_power: f64, dead_zone: f64, power_multiplier: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&minimum_power) {
            return Err(CurveError::OutOfRange {
                field: CurveField::MinimumPower,
                value: minimum_power,
                bound: UNIT_RANGE,
            });
        }

        if !(0.0..1.0).contains(&dead_zone) {
            return Err(CurveError::OutOfRange {
                field: CurveField::DeadZone,
                value: dead_zone,
                bound: UNIT_RANGE,
            });
        }

        if !(power_multiplier > 0.0 && power_multiplier <= 1.0) {
            return Err(CurveError::OutOfRange {
                field: CurveField::PowerMultiplier,
                value: power_multiplier,
                bound: MULTIPLIER_RANGE,
            });
        }

        Ok(Self {
            minimum_power,
            dead_zone,
            power_multiplier,
        })
    }

    /// Returns the configured minimum power.
    #[must_use]
    pub fn minimum_power(&self) -> f64 {
        self.minimum_power
    }

    /// Returns the configured dead zone.
    #[must_use]
    pub fn dead_zone(&self) -> f64 {
        self.dead_zone
    }

    /// Returns the configured power multiplier.
    #[must_use]
    pub fn power_multiplier(&self) -> f64 {
        self.power_multiplier
    }
}

pub(crate) mod shape {
    /// Shape function on the normalized excursion past the dead zone.
    ///
    /// Must satisfy `raw(0) == 0` and `raw(1) == 1` and must not apply the
    /// dead zone, minimum power or power multiplier. Only reachable inside
    /// the crate, which also keeps [`ControlCurve`](super::ControlCurve)
    /// sealed to the curves shipped here.
    pub trait Shape {
        fn raw(&self, excursion: f64) -> f64;
    }
}

use shape::Shape;

/// A control curve: dead zone and minimum power around a shape function.
///
/// The composition in [`get`](Self::get) is shared by every curve; the
/// linear or power-law shape underneath is internal. Curves are immutable,
/// so a single instance can be evaluated from many threads at once.
///
/// This trait is sealed: only the curves in this crate implement it. The
/// shape function is not part of the public API:
///
/// ```compile_fail
/// use control_curves::{curves, ControlCurve};
///
/// let curve = curves::simple_linear();
/// let _ = curve.raw(0.5);
/// ```
pub trait ControlCurve: Shape {
    /// Returns the validated configuration of this curve.
    fn config(&self) -> &CurveConfig;

    /// Shapes an input value, usually a joystick or controller axis.
    ///
    /// The result is what should be fed to the motor controller.
    ///
    /// # Examples
    ///
    /// ```
    /// use control_curves::{curves, ControlCurve, CurveBuilder};
    ///
    /// let curve = curves::linear()
    ///     .with_dead_zone(0.1)
    ///     .with_minimum_power(0.2)
    ///     .with_power_multiplier(0.8)
    ///     .build()?;
    ///
    /// assert_eq!(curve.get(0.05), 0.0);
    /// assert_eq!(curve.get(0.1), 0.2);
    /// assert_eq!(curve.get(-1.0), -0.8);
    /// # Ok::<(), control_curves::CurveError>(())
    /// ```
    #[must_use]
    fn get(&self, value: f64) -> f64 {
        let config = self.config();
        let magnitude = value.abs();

        if value == 0.0 || magnitude < config.dead_zone {
            return 0.0;
        }

        let excursion = (magnitude - config.dead_zone) / (1.0 - config.dead_zone);
        let shaped = self.raw(excursion);
        let span = config.power_multiplier - config.minimum_power;
        let output = if shaped <= 1.0 {
            config.minimum_power * (1.0 - shaped) + config.power_multiplier * shaped
        } else if span == 0.0 {
            // flat curve, avoids 0 * inf
            config.minimum_power
        } else {
            config.minimum_power + span * shaped
        };

        if value > 0.0 {
            output
        } else {
            -output
        }
    }

    /// Returns the configured minimum power.
    #[must_use]
    fn minimum_power(&self) -> f64 {
        self.config().minimum_power()
    }

    /// Returns the configured dead zone.
    #[must_use]
    fn dead_zone(&self) -> f64 {
        self.config().dead_zone()
    }

    /// Returns the configured power multiplier.
    #[must_use]
    fn power_multiplier(&self) -> f64 {
        self.config().power_multiplier()
    }

    /// Samples the curve at `steps + 1` evenly spaced inputs from -1.0 to 1.0.
    ///
    /// Returns `(input, output)` pairs, useful for plotting or tuning. A
    /// `steps` of 0 is treated as 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use control_curves::{curves, ControlCurve};
    ///
    /// let points = curves::simple_linear().sample(4);
    /// assert_eq!(points, vec![(-1.0, -1.0), (-0.5, -0.5), (0.0, 0.0), (0.5, 0.5), (1.0, 1.0)]);
    /// ```
    #[must_use]
    fn sample(&self, steps: usize) -> Vec<(f64, f64)> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| {
                let input = -1.0 + 2.0 * (i as f64) / (steps as f64);
                (input, self.get(input))
            })
            .collect()
    }
}

/// A curve whose shape is chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Linear ramp from minimum power to the power multiplier.
    Linear(LinearCurve),
    /// Power-law ramp from minimum power to the power multiplier.
    Power(PowerCurve),
}

impl ControlCurve for Curve {
    fn config(&self) -> &CurveConfig {
        match self {
            Self::Linear(curve) => curve.config(),
            Self::Power(curve) => curve.config(),
        }
    }
}

impl Shape for Curve {
    fn raw(&self, excursion: f64) -> f64 {
        match self {
            Self::Linear(curve) => curve.raw(excursion),
            Self::Power(curve) => curve.raw(excursion),
        }
    }
}

impl From<LinearCurve> for Curve {
    fn from(curve: LinearCurve) -> Self {
        Self::Linear(curve)
    }
}

impl From<PowerCurve> for Curve {
    fn from(curve: PowerCurve) -> Self {
        Self::Power(curve)
    }
}
