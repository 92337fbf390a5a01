pub mod render;
pub mod state;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use state::{AppState, FormField, View};
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::client::ApiClient;
use crate::provider::types::Recipe;
use crate::store::RecipeStore;

/// Run the terminal client against the generation service.
pub async fn run_tui(client: ApiClient, store: RecipeStore) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = tui_loop(&mut terminal, client, store).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn tui_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    client: ApiClient,
    store: RecipeStore,
) -> Result<()> {
    let mut state = AppState::new(store);
    // At most one generation is in flight: submit is disabled while loading.
    let (result_tx, mut result_rx) = mpsc::channel::<Result<Recipe, String>>(1);
    let mut spinner_frame: u8 = 0;

    loop {
        terminal.draw(|f| render::draw(f, &state, spinner_frame))?;
        spinner_frame = spinner_frame.wrapping_add(1);

        if let Ok(result) = result_rx.try_recv() {
            state.finish_generation(result);
        }

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && handle_key(key, &mut state, &client, &result_tx)
                {
                    return Ok(());
                }
            }
        }
    }
}

/// Handle one key press. Returns true when the client should quit.
fn handle_key(
    key: KeyEvent,
    state: &mut AppState,
    client: &ApiClient,
    result_tx: &mpsc::Sender<Result<Recipe, String>>,
) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if key.code == KeyCode::Esc {
        // Esc dismisses the error banner first, then navigates.
        if state.store.error.is_some() {
            state.store.error = None;
            return false;
        }
        return match state.view {
            View::Form => true,
            View::Result | View::Saved => {
                state.view = View::Form;
                false
            }
        };
    }

    if key.code == KeyCode::F(2) && state.view != View::Saved {
        state.view = View::Saved;
        state.saved_index = 0;
        return false;
    }

    match state.view {
        View::Form => handle_form_key(key, state, client, result_tx),
        View::Result => match key.code {
            KeyCode::Char('s') => state.save_current(),
            KeyCode::Char('n') => state.view = View::Form,
            _ => {}
        },
        View::Saved => match key.code {
            KeyCode::Up => state.select_prev(),
            KeyCode::Down => state.select_next(),
            KeyCode::Enter => state.open_selected(),
            KeyCode::Char('d') | KeyCode::Delete => state.remove_selected(),
            _ => {}
        },
    }
    false
}

fn handle_form_key(
    key: KeyEvent,
    state: &mut AppState,
    client: &ApiClient,
    result_tx: &mpsc::Sender<Result<Recipe, String>>,
) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => state.next_field(),
        KeyCode::BackTab | KeyCode::Up => state.prev_field(),
        KeyCode::Left if state.focus == FormField::MealType => state.cycle_meal_type(false),
        KeyCode::Right if state.focus == FormField::MealType => state.cycle_meal_type(true),
        KeyCode::Enter => submit(state, client, result_tx),
        KeyCode::Backspace => {
            if let Some(field) = state.active_field() {
                field.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(field) = state.active_field() {
                field.push(c);
            }
        }
        _ => {}
    }
}

/// Kick off one generation request. No cancellation: a hanging provider
/// keeps the loading state up until the response arrives.
fn submit(state: &mut AppState, client: &ApiClient, result_tx: &mpsc::Sender<Result<Recipe, String>>) {
    if !state.can_submit() {
        return;
    }

    state.store.loading = true;
    state.store.error = None;

    let client = client.clone();
    let request = state.request();
    let tx = result_tx.clone();
    tokio::spawn(async move {
        let result = client.generate(&request).await.map_err(|e| e.to_string());
        let _ = tx.send(result).await;
    });
}
