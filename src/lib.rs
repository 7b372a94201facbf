//! # Control Curves Library
//!
//! Input shaping for joystick and controller axes.
//!
//! A control curve maps a normalized input (-1.0 to 1.0) to a normalized
//! actuator command. Small inputs inside the dead zone are dropped, the first
//! usable input produces at least the minimum power, and full deflection
//! reaches the power multiplier. Between those points the output follows a
//! linear or power-law shape, giving finer control near center without giving
//! up top speed.
//!
//! ## Usage
//!
//! ```
//! use control_curves::{curves, ControlCurve, CurveBuilder};
//!
//! let drive = curves::power(3)
//!     .with_dead_zone(0.05)
//!     .with_minimum_power(0.1)
//!     .build()?;
//!
//! assert_eq!(drive.get(0.02), 0.0);
//! assert_eq!(drive.get(0.05), 0.1);
//! assert_eq!(drive.get(1.0), 1.0);
//! assert_eq!(drive.get(-1.0), -1.0);
//! # Ok::<(), control_curves::CurveError>(())
//! ```

pub mod config;
pub mod curve;
pub mod curves;
pub mod error;

pub use config::{CurveKind, CurveProfile, CurveSpec};
pub use curve::builder::{CurveBuilder, CurveSettings, CurveWarning};
pub use curve::linear::{LinearCurve, LinearCurveBuilder};
pub use curve::power::{PowerCurve, PowerCurveBuilder};
pub use curve::{ControlCurve, Curve, CurveConfig};
pub use error::{CurveError, CurveField, Result};
