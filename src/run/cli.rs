use anyhow::{Context, Result};
use chrono::Local;

use crate::alerts::{evaluate, AlertLevel, AlertSummary};
use crate::ledger::Ledger;
use crate::models::DueKind;
use crate::report::{self, Summary};
use crate::settings::Settings;
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], ledger: &Ledger, settings: &Settings) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => {
            require_passphrase(settings)?;
            cli_summary(&args[2..], ledger)
        }
        "alerts" | "a" => {
            require_passphrase(settings)?;
            cli_alerts(ledger)
        }
        "export" => {
            require_passphrase(settings)?;
            cli_export(&args[2..], ledger)
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("fleettui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("FleetTUI — fleet expense and compliance tracker");
    println!();
    println!("Usage: fleettui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary [YYYY-MM]             Print the financial summary for a month");
    println!("  alerts                        Print expiring documents per vehicle");
    println!("  export [path]                 Export expenses to CSV");
    println!("    --month <YYYY-MM>           Month to export (default: all)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Non-interactive commands read the passphrase from FLEETTUI_PASS.");
}

/// Scripted runs authenticate through the environment; the same digest
/// guards both surfaces.
fn require_passphrase(settings: &Settings) -> Result<()> {
    let pass = std::env::var("FLEETTUI_PASS")
        .context("FLEETTUI_PASS is not set (required for data commands)")?;
    if !crate::auth::verify(&settings.auth.passphrase_sha256, &pass) {
        anyhow::bail!("Wrong passphrase");
    }
    Ok(())
}

fn cli_summary(args: &[String], ledger: &Ledger) -> Result<()> {
    let month = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .cloned()
        .unwrap_or_else(|| Local::now().format("%Y-%m").to_string());

    let expenses: Vec<_> = ledger
        .expenses()
        .context("reading expenses from the store")?
        .into_iter()
        .filter(|e| report::in_month(e, Some(&month)))
        .collect();
    let summary = Summary::compute(&expenses);

    println!("FleetTUI — {month}");
    println!("{}", "─".repeat(44));
    println!("  Total:        {}", format_amount(summary.total));
    println!("  Invoices:     {}", summary.invoice_count);
    println!("  Needs review: {}", summary.review_count);

    if !summary.by_category.is_empty() {
        println!();
        println!("Spend by category:");
        for (name, amount) in &summary.by_category {
            println!("  {name:<16} {}", format_amount(*amount));
        }
    }

    if !summary.by_plate.is_empty() {
        println!();
        println!("Spend by vehicle:");
        for (plate, amount) in &summary.by_plate {
            println!("  {plate:<16} {}", format_amount(*amount));
        }
    }

    Ok(())
}

fn cli_alerts(ledger: &Ledger) -> Result<()> {
    let today = Local::now().date_naive();
    let validities = ledger
        .validities()
        .context("reading validities from the store")?;
    let summary = AlertSummary::compute(&validities, today);

    if summary.is_clear() {
        println!("All documents current.");
        return Ok(());
    }

    println!(
        "{} expired, {} due within 7 days, {} due within 30 days",
        summary.expired, summary.critical, summary.warning
    );
    println!("{}", "─".repeat(44));

    for v in &validities {
        for kind in DueKind::all() {
            let due = v.due(*kind);
            let label = match evaluate(due, today) {
                AlertLevel::Expired => "EXPIRED",
                AlertLevel::Critical => "due soon",
                AlertLevel::Warning => "upcoming",
                AlertLevel::Ok | AlertLevel::None => continue,
            };
            if let Some(date) = due {
                println!("  {:<10} {:<10} {date}  {label}", v.plate, kind.as_str());
            }
        }
    }

    Ok(())
}

fn cli_export(args: &[String], ledger: &Ledger) -> Result<()> {
    let month = args
        .windows(2)
        .find(|w| w[0] == "--month")
        .map(|w| w[1].clone());

    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| crate::settings::shellexpand(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            let suffix = month.clone().unwrap_or_else(|| "all".into());
            format!("{home}/fleet-export-{suffix}.csv")
        });

    let count = ledger.export_csv(&output_path, month.as_deref())?;
    if count == 0 {
        println!("Nothing to export");
    } else {
        println!("Exported {count} expenses to {output_path}");
    }
    Ok(())
}
