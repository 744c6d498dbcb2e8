//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm; the
//! core stays free of terminal types so the same reducer could sit behind
//! any other surface.
//!
//! ## Screen lifecycle
//!
//! The reducer owns *which* screen is active; this module owns the
//! presentation state of that screen (focus, cursors, scroll). Whenever
//! `update()` leaves `app.screen` pointing somewhere new, the old
//! [`ScreenView`] is dropped and a fresh one is mounted; nothing typed or
//! scrolled survives a navigation.
//!
//! ## Error dismissal timers
//!
//! Rejection messages auto-dismiss after a configurable delay. Each
//! rejection spawns a tokio sleep task that posts `Action::DismissError`
//! back through the mpsc channel; the generation tag lets the reducer
//! drop timers that outlived their error.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::form::Field;
use crate::core::screen::ScreenId;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    LoginEvent, LoginForm, RegistrationEvent, RegistrationForm, Storefront, StorefrontEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Presentation state of the active screen. Remounted from scratch on
/// every navigation.
pub enum ScreenView {
    Login(LoginForm),
    Registration(RegistrationForm),
    Main(Storefront),
}

impl ScreenView {
    fn mount(app: &App) -> Self {
        match app.screen {
            ScreenId::Login => ScreenView::Login(LoginForm::new(app.store_name.clone())),
            ScreenId::Registration => ScreenView::Registration(RegistrationForm::new()),
            ScreenId::Main => ScreenView::Main(Storefront::new(
                app.store_name.clone(),
                app.catalog.clone(),
            )),
        }
    }

    fn screen(&self) -> ScreenId {
        match self {
            ScreenView::Login(_) => ScreenId::Login,
            ScreenView::Registration(_) => ScreenId::Registration,
            ScreenView::Main(_) => ScreenId::Main,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub view: ScreenView,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            view: ScreenView::mount(app),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background tasks (dismissal timers)
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        // Push current app state into the active screen's props
        sync_view(&mut tui, &app);

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of screen
            if matches!(event, TuiEvent::ForceQuit) {
                if dispatch(&mut app, &mut tui, Action::Quit, &tx) {
                    should_quit = true;
                }
                continue;
            }

            if let Some(action) = route_event(&mut tui, &event)
                && dispatch(&mut app, &mut tui, action, &tx)
            {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (error dismissal timers)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, action, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Map a terminal event to a core action via the active screen component.
fn route_event(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match &mut tui.view {
        ScreenView::Login(form) => form.handle_event(event).map(|ev| match ev {
            LoginEvent::Edit(field, value) => Action::Edit(field, value),
            LoginEvent::Submit => Action::Submit,
            LoginEvent::SignUp => Action::GoTo(ScreenId::Registration),
            LoginEvent::Quit => Action::Quit,
        }),
        ScreenView::Registration(form) => form.handle_event(event).map(|ev| match ev {
            RegistrationEvent::Edit(field, value) => Action::Edit(field, value),
            RegistrationEvent::Submit => Action::Submit,
            RegistrationEvent::Back => Action::GoTo(ScreenId::Login),
        }),
        ScreenView::Main(store) => store.handle_event(event).map(|ev| match ev {
            StorefrontEvent::Buy(index) => Action::Buy(index),
            StorefrontEvent::LogOff => Action::GoTo(ScreenId::Login),
        }),
    }
}

/// Run an action through the reducer and carry out its effect.
/// Returns `true` when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let effect = update(app, action);

    // The reducer may have switched screens: remount presentation state
    // so the previous screen's cursors and focus are discarded.
    if tui.view.screen() != app.screen {
        tui.view = ScreenView::mount(app);
    }

    match effect {
        Effect::Quit => true,
        Effect::ScheduleErrorDismiss { generation } => {
            spawn_error_dismiss(generation, app.error_timeout_ms, tx.clone());
            false
        }
        Effect::None => false,
    }
}

/// Sync the active screen's props from app state (field echoes and the
/// error line). Runs at the top of every loop iteration.
fn sync_view(tui: &mut TuiState, app: &App) {
    match &mut tui.view {
        ScreenView::Login(form) => {
            form.username.sync(app.form.get(Field::Username));
            form.password.sync(app.form.get(Field::Password));
            form.error = app.error;
        }
        ScreenView::Registration(form) => {
            form.username.sync(app.form.get(Field::Username));
            form.email.sync(app.form.get(Field::Email));
            form.password.sync(app.form.get(Field::Password));
            form.cpf.sync(app.form.get(Field::Cpf));
            form.error = app.error;
        }
        ScreenView::Main(_) => {}
    }
}

/// Schedule the delayed dismissal for the error shown at `generation`.
///
/// Fire-and-forget: if a newer error or a navigation bumped the generation
/// by the time the sleep elapses, the reducer drops the action as stale.
pub fn spawn_error_dismiss(
    generation: u64,
    timeout_ms: u64,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    debug!("Scheduling error dismissal for generation {generation} in {timeout_ms}ms");
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(timeout_ms)).await;
        if tx.send(Action::DismissError { generation }).is_err() {
            warn!("Failed to deliver error dismissal: receiver dropped");
        }
    })
}
