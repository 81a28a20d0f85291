//! Viewer application state and event loop.
//!
//! `App` owns one publisher and one binder built from a [`ScaleConfig`]. It
//! knows nothing about the real terminal: events come in through
//! [`App::handle_event`], deferred refreshes through [`App::on_deadline`], and
//! the frame is described by [`App::view`]. [`run_viewer`] connects it to
//! crossterm and tokio.

use std::path::PathBuf;
use std::time::Instant;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;

use crate::adapters::{SurfaceUnit, SystemClock, TerminalSampler};
use crate::binder::ScaledPropsBinder;
use crate::config::ScaleConfig;
use crate::publisher::SurfacePublisher;
use crate::terminal::TerminalManager;
use crate::traits::{Clock, SurfaceSampler};
use crate::ui::{self, ViewerView};

/// Viewer state.
#[derive(Debug)]
pub struct App {
    publisher: SurfacePublisher,
    binder: ScaledPropsBinder,
    unit: SurfaceUnit,
    config_source: String,
    log_path: Option<PathBuf>,
    /// Set when something visible changed since the last draw
    pub needs_redraw: bool,
    should_quit: bool,
}

impl App {
    pub fn new(
        config: ScaleConfig,
        config_source: impl Into<String>,
        sampler: impl SurfaceSampler + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        let mut publisher = SurfacePublisher::with_clock(config.provider, sampler, clock);
        let binder = ScaledPropsBinder::attach(config.props, &mut publisher);

        Self {
            publisher,
            binder,
            unit: config.surface_unit,
            config_source: config_source.into(),
            log_path: None,
            needs_redraw: true,
            should_quit: false,
        }
    }

    pub fn with_log_path(mut self, path: Option<PathBuf>) -> Self {
        self.log_path = path;
        self
    }

    /// Mount: activate the publisher.
    pub fn start(&mut self) {
        self.publisher.activate();
        self.mark_dirty();
    }

    /// Unmount: deactivate the publisher, dropping any pending refresh.
    pub fn stop(&mut self) {
        self.publisher.deactivate();
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn publisher(&self) -> &SurfacePublisher {
        &self.publisher
    }

    pub fn binder(&self) -> &ScaledPropsBinder {
        &self.binder
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Resize(columns, rows) => {
                tracing::trace!(columns, rows, "resize event");
                self.publisher.handle_resize();
                // The terminal needs a full redraw at the new size either way.
                self.mark_dirty();
            }
            Event::Key(key) => self.handle_key(key),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            _ => {}
        }
    }

    /// Run a due deferred refresh.
    pub fn on_deadline(&mut self) {
        if self.publisher.poll_timers() {
            self.mark_dirty();
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.publisher.next_deadline()
    }

    /// The frame to draw.
    pub fn view(&self) -> ViewerView<'_> {
        let config = self.publisher.config();
        ViewerView {
            context: self.publisher.context(),
            unit: self.unit,
            behavior: config.refresh_behavior,
            interval: config.refresh_interval(),
            publications: self.publisher.publication_count(),
            recomputes: self.binder.recompute_count(),
            pending_refresh: self.publisher.next_deadline().is_some(),
            specs: self.binder.specs(),
            scaled: self.binder.scaled_props(),
            config_source: &self.config_source,
            log_path: self.log_path.as_deref(),
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

/// Run the interactive viewer until the user quits.
///
/// Must run on a current-thread runtime; the publisher is not `Send`.
pub async fn run_viewer(
    config: ScaleConfig,
    config_source: String,
    log_path: Option<PathBuf>,
) -> Result<()> {
    let sampler = TerminalSampler::with_unit(config.surface_unit);
    let mut app = App::new(config, config_source, sampler, SystemClock).with_log_path(log_path);

    let mut manager = TerminalManager::new()?;
    let mut events = EventStream::new();
    app.start();

    let result = loop {
        if app.needs_redraw {
            if let Err(err) = manager.terminal().draw(|f| ui::render(f, &app.view())) {
                break Err(err.into());
            }
            app.needs_redraw = false;
        }

        if app.should_quit() {
            break Ok(());
        }

        let deadline = app.next_deadline();
        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => app.handle_event(&event),
                Some(Err(err)) => break Err(err.into()),
                None => break Ok(()),
            },
            _ = sleep_until(deadline) => app.on_deadline(),
        }
    };

    app.stop();
    manager.restore();
    tracing::info!(
        publications = app.publisher().publication_count(),
        "viewer exited"
    );
    result
}
