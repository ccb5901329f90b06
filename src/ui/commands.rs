use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode, PendingAction, Screen};
use crate::ledger::Ledger;
use crate::models::{parse_due, DueKind, Validity};
use crate::ui::util::shift_month;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &Ledger) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit FleetTUI", cmd_quit, r);
    register_command!("quit", "Quit FleetTUI", cmd_quit, r);
    register_command!("e", "Go to Add Expense", cmd_entry, r);
    register_command!("entry", "Go to Add Expense", cmd_entry, r);
    register_command!("s", "Go to Summary", cmd_summary, r);
    register_command!("summary", "Go to Summary", cmd_summary, r);
    register_command!("v", "Go to Validity & Alerts", cmd_validity, r);
    register_command!("validity", "Go to Validity & Alerts", cmd_validity, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("save", "Save the expense form", cmd_save, r);
    register_command!("clear", "Clear the expense form", cmd_clear, r);
    register_command!("month", "Set month filter (e.g. :month 2025-06)", cmd_month, r);
    register_command!("m", "Set month filter (e.g. :m 2025-06)", cmd_month, r);
    register_command!("next-month", "Go to next month", cmd_next_month, r);
    register_command!("prev-month", "Go to previous month", cmd_prev_month, r);
    register_command!(
        "search",
        "Search invoices (e.g. :search F-2041)",
        cmd_search,
        r
    );
    register_command!(
        "delete-expense",
        "Delete the selected expense row",
        cmd_delete_expense,
        r
    );
    register_command!(
        "due",
        "Set a due date (e.g. :due insurance 2026-03-01, '-' unsets)",
        cmd_due,
        r
    );
    register_command!(
        "note",
        "Set the note on the selected vehicle",
        cmd_note,
        r
    );
    register_command!(
        "export",
        "Export expenses to CSV (e.g. :export ~/fleet.csv)",
        cmd_export,
        r
    );
    register_command!("refresh", "Reload everything from the store", cmd_refresh, r);
    register_command!("logout", "Lock the session", cmd_logout, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, ledger: &Ledger) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, ledger)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _ledger: &Ledger) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_entry(_args: &str, app: &mut App, _ledger: &Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Entry;
    Ok(())
}

fn cmd_summary(_args: &str, app: &mut App, ledger: &Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Summary;
    app.refresh_expenses(ledger);
    Ok(())
}

fn cmd_validity(_args: &str, app: &mut App, ledger: &Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Validity;
    app.refresh_validities(ledger);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _ledger: &Ledger) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_save(_args: &str, app: &mut App, ledger: &Ledger) -> anyhow::Result<()> {
    match app.form.to_new_expense() {
        Ok(new) => match ledger.append_expense(&new) {
            Ok(()) => {
                app.set_status(format!(
                    "Saved invoice {} for {}",
                    new.invoice_no, new.plate
                ));
                app.reset_form();
                app.refresh_expenses(ledger);
            }
            Err(e) => {
                tracing::warn!(error = %e, "expense append failed");
                app.set_status(format!("Could not save: {e}"));
            }
        },
        Err(message) => app.set_status(message),
    }
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App, _ledger: &Ledger) -> anyhow::Result<()> {
    app.reset_form();
    app.set_status("Form cleared");
    Ok(())
}

fn cmd_month(args: &str, app: &mut App, _ledger: &Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.current_month = None;
        app.apply_filters();
        app.set_status("Showing all time");
        return Ok(());
    }

    // Accept "2025-06", "6", "06" (month in the currently shown year).
    let month = if args.len() <= 2 {
        let year = app.current_month.as_ref().map_or_else(
            || app.today.format("%Y").to_string(),
            |m| m[..4].to_string(),
        );
        format!("{year}-{args:0>2}")
    } else {
        args.to_string()
    };

    if chrono::NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").is_ok() {
        let m = month[..7].to_string();
        app.set_status(format!("Switched to month: {m}"));
        app.current_month = Some(m);
        app.apply_filters();
    } else {
        app.set_status("Invalid month format. Use YYYY-MM (e.g. 2025-06)");
    }

    Ok(())
}

fn cmd_next_month(_args: &str, app: &mut App, _ledger: &Ledger) -> anyhow::Result<()> {
    step_month(app, 1);
    Ok(())
}

fn cmd_prev_month(_args: &str, app: &mut App, _ledger: &Ledger) -> anyhow::Result<()> {
    step_month(app, -1);
    Ok(())
}

fn step_month(app: &mut App, delta: i32) {
    let base = app
        .current_month
        .clone()
        .unwrap_or_else(|| app.today.format("%Y-%m").to_string());
    if let Some(next) = shift_month(&base, delta) {
        app.set_status(format!("Switched to month: {next}"));
        app.current_month = Some(next);
        app.apply_filters();
    }
}

fn cmd_search(args: &str, app: &mut App, _ledger: &Ledger) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.screen = Screen::Summary;
    app.expense_index = 0;
    app.expense_scroll = 0;
    app.apply_filters();
    Ok(())
}

fn cmd_delete_expense(_args: &str, app: &mut App, _ledger: &Ledger) -> anyhow::Result<()> {
    if app.screen != Screen::Summary {
        app.set_status("Select an expense on the Summary screen first");
        return Ok(());
    }
    let Some((row, invoice_no, plate)) = app
        .selected_expense()
        .map(|e| (e.row, e.invoice_no.clone(), e.plate.clone()))
    else {
        app.set_status("No expense selected");
        return Ok(());
    };
    app.confirm_message = format!("Delete invoice {invoice_no} ({plate})?");
    app.pending_action = Some(PendingAction::DeleteExpense { row, invoice_no });
    app.input_mode = InputMode::Confirm;
    Ok(())
}

fn cmd_due(args: &str, app: &mut App, ledger: &Ledger) -> anyhow::Result<()> {
    if app.screen != Screen::Validity {
        app.set_status("Select a vehicle on the Validity screen first");
        return Ok(());
    }
    let mut parts = args.splitn(2, ' ');
    let kind = parts.next().unwrap_or("").trim();
    let date_text = parts.next().unwrap_or("").trim();

    let Some(kind) = DueKind::parse(kind) else {
        app.set_status("Usage: :due <insurance|inspection|tax> <YYYY-MM-DD|->");
        return Ok(());
    };
    let date = if date_text.is_empty() || date_text == "-" {
        None
    } else {
        match parse_due(date_text) {
            Some(d) => Some(d),
            None => {
                app.set_status(format!("'{date_text}' is not a date (use YYYY-MM-DD)"));
                return Ok(());
            }
        }
    };

    let Some(selected) = app.selected_validity() else {
        app.set_status("No vehicle selected");
        return Ok(());
    };
    let mut updated: Validity = selected.clone();
    updated.set_due(kind, date);

    match ledger.upsert_validity(&updated) {
        Ok(()) => {
            app.set_status(match date {
                Some(d) => format!("{} {} due {d}", updated.plate, kind.as_str()),
                None => format!("{} {} unset", updated.plate, kind.as_str()),
            });
            app.refresh_validities(ledger);
        }
        Err(e) => {
            tracing::warn!(error = %e, "validity upsert failed");
            app.set_status(format!("Could not save: {e}"));
        }
    }
    Ok(())
}

fn cmd_note(args: &str, app: &mut App, ledger: &Ledger) -> anyhow::Result<()> {
    if app.screen != Screen::Validity {
        app.set_status("Select a vehicle on the Validity screen first");
        return Ok(());
    }
    let Some(selected) = app.selected_validity() else {
        app.set_status("No vehicle selected");
        return Ok(());
    };
    let mut updated = selected.clone();
    updated.notes = args.to_string();

    match ledger.upsert_validity(&updated) {
        Ok(()) => {
            app.set_status(format!("Note saved for {}", updated.plate));
            app.refresh_validities(ledger);
        }
        Err(e) => {
            tracing::warn!(error = %e, "validity upsert failed");
            app.set_status(format!("Could not save: {e}"));
        }
    }
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, ledger: &Ledger) -> anyhow::Result<()> {
    let month = app.current_month.clone();
    let path = if args.is_empty() {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        let suffix = month.as_deref().unwrap_or("all");
        format!("{home}/fleet-export-{suffix}.csv")
    } else {
        crate::settings::shellexpand(args)
    };

    match ledger.export_csv(&path, month.as_deref()) {
        Ok(0) => app.set_status("Nothing to export"),
        Ok(count) => app.set_status(format!("Exported {count} expenses to {path}")),
        Err(e) => {
            tracing::warn!(error = %e, "export failed");
            app.set_status(format!("Export failed: {e}"));
        }
    }
    Ok(())
}

fn cmd_refresh(_args: &str, app: &mut App, ledger: &Ledger) -> anyhow::Result<()> {
    app.refresh_all(ledger);
    if app.status_message.is_empty() {
        app.set_status("Reloaded from store");
    }
    Ok(())
}

fn cmd_logout(_args: &str, app: &mut App, _ledger: &Ledger) -> anyhow::Result<()> {
    app.session.logout();
    app.input_mode = InputMode::Login;
    app.login_input.clear();
    app.login_error.clear();
    Ok(())
}
