//! Color theme constants for the viewer.

use ratatui::style::Color;

/// Border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Title and header text
pub const COLOR_HEADER: Color = Color::White;

/// Scaled values
pub const COLOR_VALUE: Color = Color::LightGreen;

/// A value pinned at either end of its range
pub const COLOR_CLAMPED: Color = Color::Gray;

/// Pending deferred refresh indicator
pub const COLOR_PENDING: Color = Color::Yellow;

/// Secondary text
pub const COLOR_DIM: Color = Color::DarkGray;

/// Configuration errors
pub const COLOR_ERROR: Color = Color::Red;
