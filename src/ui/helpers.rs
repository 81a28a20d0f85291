//! Formatting helpers for the viewer.

use crate::models::SurfaceState;

/// Format a scaled value with at most three decimals, trimming zeros.
pub fn format_value(value: f64) -> String {
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// "80x24", or "unavailable" when neither dimension is known.
pub fn format_surface(state: &SurfaceState) -> String {
    if state.width.is_none() && state.height.is_none() {
        return "unavailable".to_string();
    }
    format!("{}x{}", format_dimension(state.width), format_dimension(state.height))
}

pub fn format_dimension(value: Option<f64>) -> String {
    value.map(format_value).unwrap_or_else(|| "?".to_string())
}

/// "40..200", with "?" for a missing end.
pub fn format_range(lower: Option<f64>, upper: Option<f64>) -> String {
    format!("{}..{}", format_dimension(lower), format_dimension(upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(30.0), "30");
        assert_eq!(format_value(0.55), "0.55");
        assert_eq!(format_value(1.0 / 3.0), "0.333");
        assert_eq!(format_value(-0.0001), "0");
    }

    #[test]
    fn test_format_surface() {
        assert_eq!(format_surface(&SurfaceState::new(80.0, 24.0)), "80x24");
        assert_eq!(format_surface(&SurfaceState::unavailable()), "unavailable");
        let half = SurfaceState {
            width: Some(80.0),
            height: None,
        };
        assert_eq!(format_surface(&half), "80x?");
    }

    #[test]
    fn test_format_range() {
        assert_eq!(format_range(Some(40.0), None), "40..?");
    }
}
