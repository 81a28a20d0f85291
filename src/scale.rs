//! Two-point linear scaling of a prop value against a surface dimension.
//!
//! [`scale`] is the pure interpolation. [`resolve_bounds`] decides which
//! screen bounds apply to a prop and rejects every input that would make the
//! interpolation undefined, so `scale` never divides by zero when reached
//! through [`scale_prop`].
//!
//! # Invariants
//!
//! 1. `scale(Some(lower), ..) == min_value` and `scale(Some(upper), ..) == max_value`.
//! 2. Values below `lower` clamp to `min_value`, above `upper` to `max_value`.
//! 3. A missing measurement (`None`) yields `min_value`.
//! 4. Non-decreasing in `actual` when `min_value <= max_value`.

use crate::error::ConfigError;
use crate::models::{Axis, BoundSide, ScalableProp, SurfaceContext};

/// Map `actual` from `[lower, upper]` onto `[min_value, max_value]`.
///
/// ```
/// use scaled_props::scale::scale;
///
/// assert_eq!(scale(Some(800.0), 400.0, 1200.0, 20.0, 40.0), 30.0);
/// assert_eq!(scale(Some(300.0), 400.0, 1200.0, 20.0, 40.0), 20.0);
/// assert_eq!(scale(None, 400.0, 1200.0, 20.0, 40.0), 20.0);
/// ```
pub fn scale(actual: Option<f64>, lower: f64, upper: f64, min_value: f64, max_value: f64) -> f64 {
    let Some(actual) = actual else {
        return min_value;
    };

    if actual <= lower {
        min_value
    } else if actual >= upper {
        max_value
    } else {
        let value_range = max_value - min_value;
        let size_range = upper - lower;
        let value = min_value + value_range * ((actual - lower) / size_range);
        // rounding can overshoot by an ulp right next to `upper`
        if min_value <= max_value {
            value.clamp(min_value, max_value)
        } else {
            value
        }
    }
}

/// The bounds and measurement a prop is scaled against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBounds {
    pub axis: Axis,
    pub lower: f64,
    pub upper: f64,
    pub actual: Option<f64>,
}

/// Resolve the axis and screen bounds for `prop` against `ctx`.
///
/// Per-prop overrides win over the provider's global bounds for the prop's
/// axis. Fails when the axis is unknown, when either bound is missing, or
/// when the pair is not a finite `lower < upper` range.
pub fn resolve_bounds(
    property: &str,
    prop: &ScalableProp,
    ctx: &SurfaceContext,
) -> Result<ResolvedBounds, ConfigError> {
    let axis = prop.scaled_by.axis(property)?;

    let unresolved = |side| ConfigError::UnresolvedBound {
        property: property.to_string(),
        axis,
        side,
    };
    let lower = prop
        .min_bound_override
        .or(ctx.bounds.min_for(axis))
        .ok_or_else(|| unresolved(BoundSide::Min))?;
    let upper = prop
        .max_bound_override
        .or(ctx.bounds.max_for(axis))
        .ok_or_else(|| unresolved(BoundSide::Max))?;

    // `!(lower < upper)` also catches NaN
    if !(lower.is_finite() && upper.is_finite() && lower < upper) {
        return Err(ConfigError::DegenerateBounds {
            property: property.to_string(),
            axis,
            lower,
            upper,
        });
    }

    Ok(ResolvedBounds {
        axis,
        lower,
        upper,
        actual: ctx.state.dimension(axis),
    })
}

/// Resolve bounds and scale one prop.
pub fn scale_prop(property: &str, prop: &ScalableProp, ctx: &SurfaceContext) -> Result<f64, ConfigError> {
    let bounds = resolve_bounds(property, prop, ctx)?;
    Ok(scale(
        bounds.actual,
        bounds.lower,
        bounds.upper,
        prop.min_value,
        prop.max_value,
    ))
}
