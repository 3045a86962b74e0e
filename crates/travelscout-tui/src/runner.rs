// TUI event loop and terminal management
use crate::{App, InputMode, View};
use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::watch;
use travelscout_core::{CatalogStore, LoadState};

/// Run the widget until the user quits.
///
/// The catalog may still be loading when this starts; searches made before
/// it settles report "still loading" and a failed load shows up in the
/// error area as soon as it happens.
pub async fn run_tui(mut app: App, store: Arc<CatalogStore>, tick_rate: Duration) -> anyhow::Result<()> {
    // A load that settled before we subscribed counts as already seen by the
    // receiver, so apply the current state once up front
    let mut load_state = store.subscribe();
    sync_load_state(&mut app, &mut load_state);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &store, &mut load_state, tick_rate).await;

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &CatalogStore,
    load_state: &mut watch::Receiver<LoadState>,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    loop {
        if load_state.has_changed().unwrap_or(false) {
            sync_load_state(app, load_state);
        }

        terminal.draw(|f| crate::ui::render(f, app))?;

        // Cards are on screen with placeholders; now fill their times
        if app.has_pending_times() {
            app.fill_time_slots(Utc::now());
            continue;
        }

        // Poll on a blocking thread so the catalog load keeps making progress
        let ready = tokio::task::spawn_blocking(move || event::poll(tick_rate)).await??;
        if !ready {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(app, store, key.code);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Surface the latest load state in the app and mark it seen
fn sync_load_state(app: &mut App, load_state: &mut watch::Receiver<LoadState>) {
    let state = load_state.borrow_and_update().clone();
    if let LoadState::Failed(detail) = state {
        app.set_load_failed(detail);
    }
}

fn handle_key(app: &mut App, store: &CatalogStore, code: KeyCode) {
    match app.input_mode {
        InputMode::Searching => match code {
            KeyCode::Enter => {
                app.run_search(store);
                app.enter_normal_mode();
            }
            KeyCode::Char(c) => app.search_input.push(c),
            KeyCode::Backspace => {
                app.search_input.pop();
            }
            KeyCode::Esc => app.enter_normal_mode(),
            _ => {}
        },
        InputMode::EditingContact => match code {
            KeyCode::Enter => app.submit_contact(),
            KeyCode::Tab => app.next_contact_field(),
            KeyCode::Char(c) => app.contact_push(c),
            KeyCode::Backspace => app.contact_pop(),
            KeyCode::Esc => app.enter_normal_mode(),
            _ => {}
        },
        InputMode::Normal => match code {
            KeyCode::Char('q') => app.quit(),
            KeyCode::Char('1') => app.show_view(View::Home),
            KeyCode::Char('2') => app.show_view(View::About),
            KeyCode::Char('3') => app.show_view(View::Contact),
            KeyCode::Char('/') => app.enter_search_mode(),
            KeyCode::Char('x') => app.clear_results(),
            KeyCode::Char('j') | KeyCode::Down => app.next_result(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_result(),
            KeyCode::Enter if app.view == View::Contact => app.enter_contact_mode(),
            KeyCode::Enter if app.view == View::Home => app.run_search(store),
            _ => {}
        },
    }
}
