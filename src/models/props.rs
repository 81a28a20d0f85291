//! Scalable prop declarations and the computed value sets derived from them.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::ops::Index;

use super::surface::Axis;
use crate::error::ConfigError;

/// The axis a prop asked to be scaled by, as declared.
///
/// Unknown strings are kept rather than rejected while parsing; they fail with
/// [`ConfigError::InvalidAxis`] the first time the prop is computed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScaledBy {
    #[default]
    Width,
    Height,
    Unrecognized(String),
}

impl ScaledBy {
    /// Resolve to a tracked axis.
    pub fn axis(&self, property: &str) -> Result<Axis, ConfigError> {
        match self {
            ScaledBy::Width => Ok(Axis::Width),
            ScaledBy::Height => Ok(Axis::Height),
            ScaledBy::Unrecognized(value) => Err(ConfigError::InvalidAxis {
                property: property.to_string(),
                value: value.clone(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ScaledBy::Width => "width",
            ScaledBy::Height => "height",
            ScaledBy::Unrecognized(value) => value,
        }
    }
}

impl From<Axis> for ScaledBy {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Width => ScaledBy::Width,
            Axis::Height => ScaledBy::Height,
        }
    }
}

impl From<&str> for ScaledBy {
    fn from(value: &str) -> Self {
        match value {
            "width" => ScaledBy::Width,
            "height" => ScaledBy::Height,
            other => ScaledBy::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for ScaledBy {
    fn from(value: String) -> Self {
        ScaledBy::from(value.as_str())
    }
}

impl From<ScaledBy> for String {
    fn from(value: ScaledBy) -> Self {
        match value {
            ScaledBy::Unrecognized(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ScaledBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scalable prop: the output range plus optional per-prop screen bounds.
///
/// ```
/// use scaled_props::models::{Axis, ScalableProp};
///
/// let opacity = ScalableProp::new(0.1, 1.0)
///     .scaled_by(Axis::Height)
///     .with_bounds_override(400.0, 700.0);
/// assert!(opacity.validate("opacity").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalableProp {
    pub min_value: f64,
    pub max_value: f64,
    /// Replaces the provider's lower screen bound for this prop.
    #[serde(
        default,
        rename = "minScreenSizeOverride",
        alias = "minBoundOverride",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_bound_override: Option<f64>,
    /// Replaces the provider's upper screen bound for this prop.
    #[serde(
        default,
        rename = "maxScreenSizeOverride",
        alias = "maxBoundOverride",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_bound_override: Option<f64>,
    #[serde(default)]
    pub scaled_by: ScaledBy,
}

impl ScalableProp {
    /// A width-scaled prop without bound overrides.
    pub fn new(min_value: f64, max_value: f64) -> Self {
        Self {
            min_value,
            max_value,
            min_bound_override: None,
            max_bound_override: None,
            scaled_by: ScaledBy::Width,
        }
    }

    pub fn scaled_by(mut self, scaled_by: impl Into<ScaledBy>) -> Self {
        self.scaled_by = scaled_by.into();
        self
    }

    pub fn with_min_bound_override(mut self, min: f64) -> Self {
        self.min_bound_override = Some(min);
        self
    }

    pub fn with_max_bound_override(mut self, max: f64) -> Self {
        self.max_bound_override = Some(max);
        self
    }

    /// Override both screen bounds.
    pub fn with_bounds_override(self, min: f64, max: f64) -> Self {
        self.with_min_bound_override(min).with_max_bound_override(max)
    }

    /// Definition-time checks: finite numbers and `min_value < max_value`.
    ///
    /// Bounds are not checked here; they may come from the provider and are
    /// resolved when the prop is computed.
    pub fn validate(&self, property: &str) -> Result<(), ConfigError> {
        let numbers = [
            ("minValue", Some(self.min_value)),
            ("maxValue", Some(self.max_value)),
            ("minScreenSizeOverride", self.min_bound_override),
            ("maxScreenSizeOverride", self.max_bound_override),
        ];
        for (field, value) in numbers {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(ConfigError::NonFiniteValue {
                    property: property.to_string(),
                    field,
                });
            }
        }

        if self.min_value >= self.max_value {
            return Err(ConfigError::InvalidValueRange {
                property: property.to_string(),
                min_value: self.min_value,
                max_value: self.max_value,
            });
        }

        Ok(())
    }
}

/// A validated, name-ordered set of scalable props.
///
/// Every prop in the set has passed [`ScalableProp::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScalablePropSet {
    props: BTreeMap<String, ScalableProp>,
}

impl ScalablePropSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add a prop. A prop with the same name is replaced.
    pub fn insert(&mut self, name: impl Into<String>, prop: ScalableProp) -> Result<(), ConfigError> {
        let name = name.into();
        prop.validate(&name)?;
        if self.props.insert(name.clone(), prop).is_some() {
            tracing::debug!(property = %name, "replaced scalable prop definition");
        }
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert).
    ///
    /// ```
    /// use scaled_props::models::{ScalableProp, ScalablePropSet};
    ///
    /// let props = ScalablePropSet::new()
    ///     .with("fontSize", ScalableProp::new(20.0, 40.0))?
    ///     .with("gap", ScalableProp::new(1.0, 4.0))?;
    /// assert_eq!(props.len(), 2);
    /// # Ok::<(), scaled_props::error::ConfigError>(())
    /// ```
    pub fn with(mut self, name: impl Into<String>, prop: ScalableProp) -> Result<Self, ConfigError> {
        self.insert(name, prop)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&ScalableProp> {
        self.props.get(name)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ScalableProp> {
        self.props.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl TryFrom<BTreeMap<String, ScalableProp>> for ScalablePropSet {
    type Error = ConfigError;

    fn try_from(props: BTreeMap<String, ScalableProp>) -> Result<Self, Self::Error> {
        for (name, prop) in &props {
            prop.validate(name)?;
        }
        Ok(Self { props })
    }
}

impl<'a> IntoIterator for &'a ScalablePropSet {
    type Item = (&'a String, &'a ScalableProp);
    type IntoIter = btree_map::Iter<'a, String, ScalableProp>;

    fn into_iter(self) -> Self::IntoIter {
        self.props.iter()
    }
}

/// Computed values, one per declared prop, all from the same surface
/// observation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScaledPropertySet {
    values: BTreeMap<String, f64>,
}

impl ScaledPropertySet {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, f64> {
        self.values
    }
}

impl FromIterator<(String, f64)> for ScaledPropertySet {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Index<&str> for ScaledPropertySet {
    type Output = f64;

    /// Panics when `name` was not declared.
    fn index(&self, name: &str) -> &f64 {
        &self.values[name]
    }
}

/// A consumer's own props, passed through untouched, plus the scaled set.
#[derive(Debug, Clone, PartialEq)]
pub struct WithScaledProps<P> {
    pub props: P,
    pub scaled_props: ScaledPropertySet,
}

impl<P> WithScaledProps<P> {
    pub fn new(props: P, scaled_props: ScaledPropertySet) -> Self {
        Self {
            props,
            scaled_props,
        }
    }

    /// Drop the scaled set and return the original props.
    pub fn into_props(self) -> P {
        self.props
    }
}
