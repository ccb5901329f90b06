use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ledger::Ledger;
use crate::settings::Settings;
use crate::ui::app::{App, EntryForm, InputMode, PendingAction, Screen, ENTRY_FIELDS};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_up};

pub(crate) fn as_tui(ledger: &Ledger, settings: &Settings) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let today = chrono::Local::now().date_naive();
    let mut app = App::new(today, settings.auth.passphrase_sha256.clone());

    let result = run_app(&mut terminal, &mut app, ledger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ledger: &Ledger,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Rows available to the active list, after chrome and fixed panels.
            let h = f.area().height as usize;
            app.visible_rows = match app.screen {
                // 3 chrome + 5 cards + 10 chart + 3 table frame
                Screen::Summary => h.saturating_sub(21),
                // 3 chrome + 3 alert header + 3 table frame
                Screen::Validity => h.saturating_sub(9),
                Screen::Entry => ENTRY_FIELDS.len(),
            }
            .max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Login => handle_login_input(key, app, ledger),
                InputMode::Normal => handle_normal_input(key, app, ledger)?,
                InputMode::Editing => handle_editing_input(key, app),
                InputMode::Command => handle_command_input(key, app, ledger)?,
                InputMode::Search => handle_search_input(key, app),
                InputMode::Confirm => handle_confirm_input(key, app, ledger),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_login_input(key: event::KeyEvent, app: &mut App, ledger: &Ledger) {
    match key.code {
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Enter => {
            let digest = app.passphrase_digest.clone();
            let attempt = std::mem::take(&mut app.login_input);
            if app.session.login(&digest, &attempt) {
                app.login_error.clear();
                app.input_mode = InputMode::Normal;
                app.refresh_all(ledger);
            } else {
                app.login_error = "Wrong passphrase".into();
            }
        }
        KeyCode::Esc => {
            app.login_input.clear();
            app.login_error.clear();
        }
        KeyCode::Backspace => {
            app.login_input.pop();
        }
        KeyCode::Char(c) => {
            app.login_input.push(c);
        }
        _ => {}
    }
}

fn handle_normal_input(key: event::KeyEvent, app: &mut App, ledger: &Ledger) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
            app.screen = Screen::Summary;
            app.search_input.clear();
        }
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.screen == Screen::Entry {
                commands::handle_command("save", app, ledger)?;
            }
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, ledger, Screen::Entry),
        KeyCode::Char('2') => switch_screen(app, ledger, Screen::Summary),
        KeyCode::Char('3') => switch_screen(app, ledger, Screen::Validity),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, ledger, screens[next]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, ledger, screens[prev]);
        }
        KeyCode::Enter => handle_enter(app),
        KeyCode::Esc => handle_escape(app),
        KeyCode::Char('+') | KeyCode::Char('=') => handle_cycle(app, 1),
        KeyCode::Char('-') => handle_cycle(app, -1),
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('D') if app.screen == Screen::Summary => {
            commands::handle_command("delete-expense", app, ledger)?;
        }
        KeyCode::Char('H') => {
            commands::handle_command("prev-month", app, ledger)?;
        }
        KeyCode::Char('L') => {
            commands::handle_command("next-month", app, ledger)?;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_up(app);
            }
        }
        KeyCode::Char('r') => {
            commands::handle_command("refresh", app, ledger)?;
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            let value = std::mem::take(&mut app.command_input);
            app.form.set_field(app.entry_field, value);
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
            app.set_status("Edit cancelled");
        }
        KeyCode::Backspace => {
            app.command_input.pop();
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, ledger: &Ledger) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, ledger)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_search_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.search_input.clear();
            app.apply_filters();
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            // Live search: filter as you type
            app.expense_index = 0;
            app.expense_scroll = 0;
            app.apply_filters();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            // Live search: filter as you type
            app.expense_index = 0;
            app.expense_scroll = 0;
            app.apply_filters();
        }
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, ledger: &Ledger) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.pending_action.take() {
                match action {
                    PendingAction::DeleteExpense { row, invoice_no } => {
                        match ledger.delete_expense(row) {
                            Ok(()) => {
                                app.set_status(format!("Deleted invoice {invoice_no}"));
                                app.refresh_expenses(ledger);
                                if app.expense_index > 0
                                    && app.expense_index >= app.expenses.len()
                                {
                                    app.expense_index = app.expenses.len().saturating_sub(1);
                                }
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, row, "expense delete failed");
                                app.set_status(format!("Could not delete: {e}"));
                            }
                        }
                    }
                }
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        _ => {
            // Any other key = cancel
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, ledger: &Ledger, screen: Screen) {
    app.screen = screen;
    match screen {
        Screen::Entry => {}
        Screen::Summary => app.refresh_expenses(ledger),
        Screen::Validity => app.refresh_validities(ledger),
    }
}

fn handle_enter(app: &mut App) {
    if app.screen != Screen::Entry {
        return;
    }
    if EntryForm::is_select(app.entry_field) {
        app.form.cycle(app.entry_field, 1);
    } else {
        app.command_input = app.form.field_value(app.entry_field);
        app.input_mode = InputMode::Editing;
    }
}

fn handle_escape(app: &mut App) {
    app.status_message.clear();
    if !app.search_input.is_empty() {
        app.search_input.clear();
        app.apply_filters();
    }
}

fn handle_cycle(app: &mut App, delta: i32) {
    if app.screen == Screen::Entry {
        app.form.cycle(app.entry_field, delta);
    }
}

fn handle_move_down(app: &mut App) {
    match app.screen {
        Screen::Entry => {
            if app.entry_field + 1 < ENTRY_FIELDS.len() {
                app.entry_field += 1;
            }
        }
        Screen::Summary => scroll_down(
            &mut app.expense_index,
            &mut app.expense_scroll,
            app.expenses.len(),
            app.visible_rows,
        ),
        Screen::Validity => scroll_down(
            &mut app.validity_index,
            &mut app.validity_scroll,
            app.validities.len(),
            app.visible_rows,
        ),
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Entry => {
            app.entry_field = app.entry_field.saturating_sub(1);
        }
        Screen::Summary => scroll_up(&mut app.expense_index, &mut app.expense_scroll),
        Screen::Validity => scroll_up(&mut app.validity_index, &mut app.validity_scroll),
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Entry => app.entry_field = 0,
        Screen::Summary => {
            app.expense_index = 0;
            app.expense_scroll = 0;
        }
        Screen::Validity => {
            app.validity_index = 0;
            app.validity_scroll = 0;
        }
    }
}

fn handle_goto_bottom(app: &mut App) {
    match app.screen {
        Screen::Entry => app.entry_field = ENTRY_FIELDS.len() - 1,
        Screen::Summary => {
            if !app.expenses.is_empty() {
                app.expense_index = app.expenses.len() - 1;
                let page = app.visible_rows.max(1);
                app.expense_scroll = app.expense_index.saturating_sub(page - 1);
            }
        }
        Screen::Validity => {
            if !app.validities.is_empty() {
                app.validity_index = app.validities.len() - 1;
                let page = app.visible_rows.max(1);
                app.validity_scroll = app.validity_index.saturating_sub(page - 1);
            }
        }
    }
}
