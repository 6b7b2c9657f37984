//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//!  keys ──► FilterBox ──► Action::FilterChanged ──► update() ──► Effect::ScheduleFilter
//!                                                                    │
//!                                                              Debouncer::call
//!                                                                    │ (quiet period)
//!  background tasks ──► mpsc ◄── Action::ApplyFilter ◄───────────────┘
//!                        │
//!                        └──► update()  (LoadFinished, ApplyFilter)
//! ```
//!
//! All state is owned by the loop; background tasks only send actions back.
//!
//! ## Redraw Strategy
//!
//! The loop polls with a short timeout while something is in flight (batch
//! loading or a filter waiting on the debouncer) so results show up
//! promptly, and sleeps longer when idle. It only redraws after an event or
//! an action.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{FetchError, HttpJokeSource, JokeSource, fetch_batch};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::debounce::Debouncer;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{FilterBox, FilterEvent, JokeTableState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const BUSY_POLL: Duration = Duration::from_millis(50);
const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub filter_box: FilterBox,
    pub joke_table: JokeTableState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            filter_box: FilterBox::new(),
            joke_table: JokeTableState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for the filter input
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Build the joke source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn JokeSource> {
    Arc::new(HttpJokeSource::new(config.api_url.clone()).with_timeout(config.request_timeout))
}

/// Everything an `Effect` may need to touch.
struct EffectContext<'a> {
    tx: &'a mpsc::Sender<Action>,
    filter_debouncer: &'a mut Debouncer<String>,
}

/// Run `update` and carry out the resulting effect. Returns true on quit.
fn dispatch(app: &mut App, action: Action, ctx: &mut EffectContext<'_>) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::SpawnFetch => {
            spawn_fetch(app, ctx.tx.clone());
            false
        }
        Effect::ScheduleFilter(text) => {
            debug!("Scheduling filter {:?} in {:?}", text, ctx.filter_debouncer.delay());
            ctx.filter_debouncer.call(text);
            false
        }
        Effect::Quit => true,
    }
}

/// Route one terminal event to the table, the filter box, or the reducer.
/// Returns true on quit.
fn handle_tui_event(
    app: &mut App,
    tui: &mut TuiState,
    event: &TuiEvent,
    ctx: &mut EffectContext<'_>,
) -> bool {
    match event {
        TuiEvent::Resize => false,
        TuiEvent::Quit | TuiEvent::ForceQuit => dispatch(app, Action::Quit, ctx),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::ScrollToTop
        | TuiEvent::ScrollToBottom => {
            tui.joke_table.handle_event(event);
            false
        }
        // The filter input only exists once the jokes are on screen
        _ if app.is_loaded() => match tui.filter_box.handle_event(event) {
            Some(FilterEvent::Changed(text)) => dispatch(app, Action::FilterChanged(text), ctx),
            None => false,
        },
        _ => false,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks and the debouncer
    let (tx, rx) = mpsc::channel();

    let filter_tx = tx.clone();
    let mut filter_debouncer = Debouncer::new(config.filter_debounce, move |text: String| {
        if filter_tx.send(Action::ApplyFilter(text)).is_err() {
            warn!("Failed to send ApplyFilter: receiver dropped");
        }
    });

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut ctx = EffectContext {
        tx: &tx,
        filter_debouncer: &mut filter_debouncer,
    };
    dispatch(&mut app, Action::StartLoad, &mut ctx);

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let busy = app.is_loading() || ctx.filter_debouncer.is_pending();
        let timeout = if busy { BUSY_POLL } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            should_quit |= handle_tui_event(&mut app, &mut tui, &event, &mut ctx);
        }

        if should_quit {
            break;
        }

        // Handle background task actions (batch outcome, debounced filter)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if matches!(action, Action::ApplyFilter(_)) {
                tui.joke_table.scroll_to_top();
            }
            if dispatch(&mut app, action, &mut ctx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ctx.filter_debouncer.cancel();
    ratatui::restore();
    info!("Chuckle shutting down");
    Ok(())
}

/// Run the batch on a background task and send the outcome back as
/// `Action::LoadFinished`. A panicking fetch surfaces as `FetchError::Unknown`.
fn spawn_fetch(app: &App, tx: mpsc::Sender<Action>) {
    info!("Spawning batch fetch of {} jokes", app.joke_count);

    let source = app.source.clone();
    let count = app.joke_count;

    tokio::spawn(async move {
        let batch = tokio::spawn(async move { fetch_batch(source.as_ref(), count).await });
        let outcome = match batch.await {
            Ok(result) => result,
            Err(e) => Err(FetchError::Unknown(e.to_string())),
        };
        if tx.send(Action::LoadFinished(outcome)).is_err() {
            warn!("Failed to send LoadFinished: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Joke;
    use crate::core::state::LoadStatus;
    use crate::test_support::test_app;
    use async_trait::async_trait;

    struct PanickingSource;

    #[async_trait]
    impl JokeSource for PanickingSource {
        fn name(&self) -> &str {
            "panicking"
        }

        async fn fetch_joke(&self) -> Result<Joke, FetchError> {
            panic!("source blew up");
        }
    }

    fn recording_debouncer(tx: &mpsc::Sender<Action>, delay: Duration) -> Debouncer<String> {
        let tx = tx.clone();
        Debouncer::new(delay, move |text: String| {
            let _ = tx.send(Action::ApplyFilter(text));
        })
    }

    fn loaded_app() -> App {
        let mut app = test_app();
        update(&mut app, Action::StartLoad);
        update(
            &mut app,
            Action::LoadFinished(Ok(vec![
                Joke::new("1", "Chuck Norris counted to infinity. Twice."),
                Joke::new("2", "Some jokes are not about Chuck."),
            ])),
        );
        app
    }

    #[tokio::test]
    async fn test_panicking_fetch_reports_unknown_error() {
        let app = App::new(Arc::new(PanickingSource), 2);
        let (tx, rx) = mpsc::channel();

        spawn_fetch(&app, tx);

        let mut received = None;
        for _ in 0..200 {
            if let Ok(action) = rx.try_recv() {
                received = Some(action);
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        match received {
            Some(Action::LoadFinished(Err(FetchError::Unknown(_)))) => {}
            other => panic!("expected LoadFinished(Err(Unknown)), got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_filter_change_goes_through_debouncer() {
        let mut app = loaded_app();
        let (tx, rx) = mpsc::channel();
        let mut debouncer = recording_debouncer(&tx, Duration::from_millis(500));
        let mut ctx = EffectContext {
            tx: &tx,
            filter_debouncer: &mut debouncer,
        };

        let quit = dispatch(&mut app, Action::FilterChanged("Chuck".to_string()), &mut ctx);
        assert!(!quit);
        assert!(ctx.filter_debouncer.is_pending());
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(501)).await;

        assert_eq!(rx.try_recv(), Ok(Action::ApplyFilter("Chuck".to_string())));
        assert!(!ctx.filter_debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_filter_input_ignored_before_load() {
        let mut app = test_app();
        update(&mut app, Action::StartLoad);
        let mut tui = TuiState::new();
        let (tx, rx) = mpsc::channel();
        let mut debouncer = recording_debouncer(&tx, Duration::from_millis(500));
        let mut ctx = EffectContext {
            tx: &tx,
            filter_debouncer: &mut debouncer,
        };

        let quit = handle_tui_event(&mut app, &mut tui, &TuiEvent::InputChar('C'), &mut ctx);

        assert!(!quit);
        assert!(tui.filter_box.buffer.is_empty());
        assert!(app.filter_text.is_empty());
        assert!(!ctx.filter_debouncer.is_pending());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_filter_input_ignored_after_failure() {
        let mut app = test_app();
        update(&mut app, Action::StartLoad);
        update(
            &mut app,
            Action::LoadFinished(Err(FetchError::Network("refused".to_string()))),
        );
        assert!(matches!(app.status, LoadStatus::Failed(_)));
        let mut tui = TuiState::new();
        let (tx, _rx) = mpsc::channel();
        let mut debouncer = recording_debouncer(&tx, Duration::from_millis(500));
        let mut ctx = EffectContext {
            tx: &tx,
            filter_debouncer: &mut debouncer,
        };

        handle_tui_event(&mut app, &mut tui, &TuiEvent::Paste("Chuck".to_string()), &mut ctx);

        assert!(tui.filter_box.buffer.is_empty());
        assert!(app.filter_text.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_filter_input_reaches_app_once_loaded() {
        let mut app = loaded_app();
        let mut tui = TuiState::new();
        let (tx, rx) = mpsc::channel();
        let mut debouncer = recording_debouncer(&tx, Duration::from_millis(500));
        let mut ctx = EffectContext {
            tx: &tx,
            filter_debouncer: &mut debouncer,
        };

        for c in "Chuck".chars() {
            handle_tui_event(&mut app, &mut tui, &TuiEvent::InputChar(c), &mut ctx);
        }

        assert_eq!(tui.filter_box.buffer, "Chuck");
        assert_eq!(app.filter_text, "Chuck");
        assert!(ctx.filter_debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(501)).await;
        assert_eq!(rx.try_recv(), Ok(Action::ApplyFilter("Chuck".to_string())));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_quit_event_stops_loop() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let (tx, _rx) = mpsc::channel();
        let mut debouncer = recording_debouncer(&tx, Duration::from_millis(500));
        let mut ctx = EffectContext {
            tx: &tx,
            filter_debouncer: &mut debouncer,
        };

        assert!(!handle_tui_event(&mut app, &mut tui, &TuiEvent::Resize, &mut ctx));
        assert!(handle_tui_event(&mut app, &mut tui, &TuiEvent::ForceQuit, &mut ctx));
    }
}
