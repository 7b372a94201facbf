//! # Configuration Module
//!
//! Handles loading and validating curve profiles from TOML files.
//!
//! A profile is a set of named curves, one table per curve:
//!
//! ```toml
//! [curves.drive]
//! kind = "power"
//! power = 3
//! minimum_power = 0.05
//! dead_zone = 0.1
//! power_multiplier = 0.8
//!
//! [curves.turn]
//! kind = "linear"
//! dead_zone = 0.1
//! ```
//!
//! Omitted values fall back to the builder defaults: no minimum power, no
//! dead zone and a power multiplier of 1.

use serde::de::Error;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::curve::builder::{CurveBuilder, CurveWarning};
use crate::curve::Curve;
use crate::curves;
use crate::error::{CurveError, Result};

/// A set of named curve definitions
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct CurveProfile {
    #[serde(default)]
    pub curves: BTreeMap<String, CurveSpec>,
}

/// Shape of a configured curve
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Linear,
    Power,
}

/// Definition of a single curve
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CurveSpec {
    pub kind: CurveKind,

    #[serde(default)]
    pub power: Option<i32>,

    #[serde(default = "default_minimum_power")]
    pub minimum_power: f64,

    #[serde(default = "default_dead_zone")]
    pub dead_zone: f64,

    #[serde(default = "default_power_multiplier")]
    pub power_multiplier: f64,
}

// Default value functions
fn default_minimum_power() -> f64 { 0.0 }
fn default_dead_zone() -> f64 { 0.0 }
fn default_power_multiplier() -> f64 { 1.0 }

impl CurveSpec {
    /// Build the curve described by this definition
    ///
    /// Even powers are logged at warn level, as with [`CurveBuilder::build`].
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - A power curve has no `power`
    /// - A linear curve sets `power`
    /// - Any curve parameter is out of range
    ///
    /// # Examples
    ///
    /// ```
    /// use control_curves::{ControlCurve, CurveKind, CurveSpec};
    ///
    /// let spec = CurveSpec {
    ///     kind: CurveKind::Power,
    ///     power: Some(3),
    ///     minimum_power: 0.0,
    ///     dead_zone: 0.0,
    ///     power_multiplier: 1.0,
    /// };
    /// let curve = spec.build()?;
    /// assert!((curve.get(0.5) - 0.125).abs() < 1e-9);
    /// # Ok::<(), control_curves::CurveError>(())
    /// ```
    pub fn build(&self) -> Result<Curve> {
        let (curve, warnings) = self.build_with_warnings()?;
        for warning in &warnings {
            warn!("{}", warning);
        }
        Ok(curve)
    }

    /// Build the curve described by this definition, returning advisories
    /// instead of logging them
    ///
    /// # Errors
    ///
    /// Same as [`CurveSpec::build`]
    pub fn build_with_warnings(&self) -> Result<(Curve, Vec<CurveWarning>)> {
        match (self.kind, self.power) {
            (CurveKind::Linear, None) => self.finish(curves::linear()),
            (CurveKind::Power, Some(power)) => self.finish(curves::power(power)),
            (CurveKind::Linear, Some(_)) => Err(CurveError::Config(
                toml::de::Error::custom("power is only valid for power curves")
            )),
            (CurveKind::Power, None) => Err(CurveError::Config(
                toml::de::Error::custom("power curves require a power")
            )),
        }
    }

    fn finish<B>(&self, builder: B) -> Result<(Curve, Vec<CurveWarning>)>
    where
        B: CurveBuilder,
        B::Curve: Into<Curve>,
    {
        let (curve, warnings) = builder
            .with_minimum_power(self.minimum_power)
            .with_dead_zone(self.dead_zone)
            .with_power_multiplier(self.power_multiplier)
            .build_with_warnings()?;
        Ok((curve.into(), warnings))
    }
}

impl CurveProfile {
    /// Load a curve profile from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the profile file
    ///
    /// # Returns
    ///
    /// * `Result<CurveProfile>` - Loaded and validated profile
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use control_curves::config::CurveProfile;
    ///
    /// let profile = CurveProfile::load("config/curves.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let profile = Self::from_toml_str(&contents)?;
        debug!("Loaded {} curve(s) from {}", profile.curves.len(), path.display());
        Ok(profile)
    }

    /// Parse and validate a curve profile from TOML text
    ///
    /// # Errors
    ///
    /// Returns error if TOML parsing or validation fails
    ///
    /// # Examples
    ///
    /// ```
    /// use control_curves::config::CurveProfile;
    ///
    /// let profile = CurveProfile::from_toml_str(r#"
    /// [curves.turn]
    /// kind = "linear"
    /// dead_zone = 0.1
    /// "#)?;
    /// assert!(profile.curves.contains_key("turn"));
    /// # Ok::<(), control_curves::CurveError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let profile: CurveProfile = toml::from_str(contents)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Build every curve in the profile, keyed by name
    ///
    /// # Errors
    ///
    /// Returns error naming the first curve that fails to build
    pub fn build(&self) -> Result<BTreeMap<String, Curve>> {
        let mut built = BTreeMap::new();
        for (name, spec) in &self.curves {
            let curve = spec.build().map_err(|e| named_error(name, e))?;
            built.insert(name.clone(), curve);
        }
        Ok(built)
    }

    /// Validate profile values
    ///
    /// # Returns
    ///
    /// * `Result<()>` - Ok if every curve builds, Err otherwise
    fn validate(&self) -> Result<()> {
        for (name, spec) in &self.curves {
            if name.trim().is_empty() {
                return Err(CurveError::Config(
                    toml::de::Error::custom("curve name cannot be empty")
                ));
            }

            spec.build_with_warnings().map_err(|e| named_error(name, e))?;
        }

        Ok(())
    }
}

fn named_error(name: &str, error: CurveError) -> CurveError {
    CurveError::Curve {
        name: name.to_string(),
        source: Box::new(error),
    }
}
