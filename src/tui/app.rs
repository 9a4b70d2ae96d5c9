//! Main TUI application.

use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::{debug, info, warn};

use crate::error::{AppError, UiError};
use crate::provider::PeerSource;
use crate::refresh::RefreshLoop;

use super::event::{ChannelSurface, Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Whether the event loop keeps going after an event.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Main TUI application.
pub struct App {
    source: Box<dyn PeerSource + Send>,
    interval: Duration,
    state: AppState,
}

impl App {
    /// Creates a new App polling `source` every `interval`.
    pub fn new(source: Box<dyn PeerSource + Send>, interval: Duration) -> Self {
        let state = AppState::new(source.describe());
        Self {
            source,
            interval,
            state,
        }
    }

    /// Runs the TUI until Ctrl-C or a fatal refresh error.
    ///
    /// The refresh thread is left running on return; the caller is expected to
    /// exit the process.
    pub fn run(self) -> Result<(), AppError> {
        let App {
            source,
            interval,
            mut state,
        } = self;

        let mut terminal = setup_terminal().map_err(UiError)?;

        let events = EventHandler::new();

        let interrupt_tx = events.sender();
        if let Err(e) = ctrlc::set_handler(move || {
            let _ = interrupt_tx.send(Event::Interrupt);
        }) {
            warn!(error = %e, "failed to install SIGINT handler");
        }

        let refresh_tx = events.sender();
        let surface = ChannelSurface::new(refresh_tx.clone());
        let refresh = RefreshLoop::new(source, surface, interval);
        let spawned = thread::Builder::new()
            .name("refresh".to_string())
            .spawn(move || {
                let err = refresh.run();
                let _ = refresh_tx.send(Event::Fatal(err));
            })
            .map_err(UiError);
        if let Err(e) = spawned {
            let _ = restore_terminal(&mut terminal);
            return Err(e.into());
        }

        let result = event_loop(&mut terminal, &mut state, &events);

        restore_terminal(&mut terminal).map_err(UiError)?;

        result
    }
}

/// Enters raw mode and the alternate screen. Steps already taken are undone
/// if a later one fails.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    undo_on_err(execute!(stdout, EnterAlternateScreen), || {
        let _ = disable_raw_mode();
    })?;
    undo_on_err(Terminal::new(CrosstermBackend::new(stdout)), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Runs `undo` when `result` is an error, then passes `result` through.
fn undo_on_err<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    events: &EventHandler,
) -> Result<(), AppError> {
    terminal.draw(|frame| render(frame, state))?;

    loop {
        // Our own sender lives in `events`, so the channel never closes.
        let Ok(event) = events.next() else {
            return Ok(());
        };
        if step(terminal, state, event)? == Flow::Quit {
            info!("quit requested");
            return Ok(());
        }
    }
}

/// Applies one event. Painting happens only on repaint requests, resizes and
/// selection changes.
fn step<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    event: Event,
) -> Result<Flow, AppError> {
    match event {
        Event::Redraw(grid) => {
            state.apply_grid(grid);
            terminal.draw(|frame| render(frame, state))?;
        }
        Event::Key(key) => match handle_key(state, key) {
            KeyAction::Quit => return Ok(Flow::Quit),
            KeyAction::None => {
                terminal.draw(|frame| render(frame, state))?;
            }
        },
        Event::Resize(width, height) => {
            debug!(width, height, "terminal resized");
            terminal.autoresize()?;
            terminal.draw(|frame| render(frame, state))?;
        }
        Event::Interrupt => return Ok(Flow::Quit),
        Event::Fatal(e) => return Err(AppError::Refresh(e)),
    }
    Ok(Flow::Continue)
}
