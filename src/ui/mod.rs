//! UI rendering for the scaled-props viewer.
//!
//! One screen:
//! - Header: surface size, unit, refresh policy, publication counters
//! - Body: one row per declared prop with its range, axis, bounds and
//!   current scaled value (or the error that aborted the last recompute)
//! - Footer: key hints and the log file location

mod helpers;
mod theme;

pub use helpers::{format_dimension, format_range, format_surface, format_value};
pub use theme::{
    COLOR_BORDER, COLOR_CLAMPED, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_PENDING, COLOR_VALUE,
};

use std::path::Path;
use std::time::Duration;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::adapters::SurfaceUnit;
use crate::config::RefreshBehavior;
use crate::error::ConfigError;
use crate::models::{ScalablePropSet, ScaledPropertySet, SurfaceContext};
use crate::scale::resolve_bounds;

/// Everything the viewer draws, borrowed from the app for one frame.
#[derive(Debug, Clone)]
pub struct ViewerView<'a> {
    pub context: SurfaceContext,
    pub unit: SurfaceUnit,
    pub behavior: RefreshBehavior,
    pub interval: Duration,
    pub publications: u64,
    pub recomputes: u64,
    pub pending_refresh: bool,
    pub specs: &'a ScalablePropSet,
    pub scaled: Result<ScaledPropertySet, ConfigError>,
    pub config_source: &'a str,
    pub log_path: Option<&'a Path>,
}

/// Render the viewer.
pub fn render(frame: &mut Frame, view: &ViewerView<'_>) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, view);
    match &view.scaled {
        Ok(scaled) => render_props(frame, body, view, scaled),
        Err(err) => render_error(frame, body, err),
    }
    render_footer(frame, footer, view);
}

fn render_header(frame: &mut Frame, area: Rect, view: &ViewerView<'_>) {
    let unit = match view.unit {
        SurfaceUnit::Cells => "cells",
        SurfaceUnit::Pixels => "px",
    };

    let mut policy = vec![
        Span::styled(view.behavior.as_str(), Style::default().fg(COLOR_HEADER)),
        Span::styled(
            format!(" every {}ms", view.interval.as_millis()),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    if view.pending_refresh {
        policy.push(Span::styled("  refresh pending", Style::default().fg(COLOR_PENDING)));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled("surface ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                format_surface(&view.context.state),
                Style::default().fg(COLOR_VALUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", unit), Style::default().fg(COLOR_DIM)),
            Span::styled(
                format!(
                    "   published {}  recomputed {}",
                    view.publications, view.recomputes
                ),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
        Line::from(policy),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" scaled-props: {} ", view.config_source),
            Style::default().fg(COLOR_HEADER),
        ));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_props(frame: &mut Frame, area: Rect, view: &ViewerView<'_>, scaled: &ScaledPropertySet) {
    let rows = view.specs.iter().map(|(name, prop)| {
        let value = scaled.get(name);
        let (axis, bounds) = match resolve_bounds(name, prop, &view.context) {
            Ok(resolved) => (
                resolved.axis.as_str().to_string(),
                format_range(Some(resolved.lower), Some(resolved.upper)),
            ),
            Err(_) => (prop.scaled_by.as_str().to_string(), "-".to_string()),
        };

        let pinned = value == Some(prop.min_value) || value == Some(prop.max_value);
        let value_style = if pinned {
            Style::default().fg(COLOR_CLAMPED)
        } else {
            Style::default().fg(COLOR_VALUE)
        };

        Row::new(vec![
            Cell::from(name.clone()),
            Cell::from(format_range(Some(prop.min_value), Some(prop.max_value))),
            Cell::from(axis),
            Cell::from(bounds),
            Cell::from(format_dimension(value)).style(value_style),
        ])
    });

    let header = Row::new(vec!["prop", "range", "axis", "bounds", "value"])
        .style(Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(7),
            Constraint::Fill(2),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(format!(" {} props ", view.specs.len())),
    );

    frame.render_widget(table, area);
}

fn render_error(frame: &mut Frame, area: Rect, err: &ConfigError) {
    let lines = vec![
        Line::from(Span::styled(
            err.error_code(),
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(err.user_message()),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_ERROR))
            .title(" configuration error "),
    );
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect, view: &ViewerView<'_>) {
    let mut spans = vec![Span::styled("q/esc quit", Style::default().fg(COLOR_DIM))];
    if let Some(path) = view.log_path {
        spans.push(Span::styled(
            format!("  log {}", path.display()),
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::compute_scaled_props;
    use crate::models::{ScalableProp, SurfaceBounds, SurfaceState};
    use ratatui::{backend::TestBackend, Terminal};

    fn specs() -> ScalablePropSet {
        ScalablePropSet::new()
            .with("padding", ScalableProp::new(0.0, 4.0))
            .unwrap()
            .with("columns", ScalableProp::new(1.0, 4.0))
            .unwrap()
    }

    fn view<'a>(specs: &'a ScalablePropSet, ctx: SurfaceContext) -> ViewerView<'a> {
        ViewerView {
            context: ctx,
            unit: SurfaceUnit::Cells,
            behavior: RefreshBehavior::OnResize,
            interval: Duration::from_millis(200),
            publications: 3,
            recomputes: 4,
            pending_refresh: true,
            specs,
            scaled: compute_scaled_props(specs, &ctx),
            config_source: "built-in",
            log_path: None,
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_props_table() {
        let specs = specs();
        let ctx = SurfaceContext::new(
            SurfaceBounds::new().with_width(40.0, 200.0),
            SurfaceState::new(120.0, 30.0),
        );
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render(f, &view(&specs, ctx))).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("120x30"));
        assert!(text.contains("padding"));
        assert!(text.contains("columns"));
        assert!(text.contains("2.5"));
        assert!(text.contains("refresh pending"));
    }

    #[test]
    fn test_render_config_error() {
        let specs = specs();
        let ctx = SurfaceContext::new(SurfaceBounds::new(), SurfaceState::new(120.0, 30.0));
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render(f, &view(&specs, ctx))).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("E_CFG_UNRESOLVED_BOUND"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let specs = specs();
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        terminal
            .draw(|f| render(f, &view(&specs, SurfaceContext::default())))
            .unwrap();
    }
}
