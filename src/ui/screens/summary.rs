use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Metric cards
            Constraint::Length(10), // Spend by category
            Constraint::Min(6),     // Expense table
        ])
        .split(area);

    render_cards(f, chunks[0], app);
    render_category_chart(f, chunks[1], app);
    render_expense_table(f, chunks[2], app);
}

fn render_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_card(
        f,
        cards[0],
        "Total",
        format_amount(app.summary.total),
        theme::ACCENT,
    );
    render_card(
        f,
        cards[1],
        "Invoices",
        app.summary.invoice_count.to_string(),
        theme::TEXT,
    );
    let review_color = if app.summary.review_count > 0 {
        theme::YELLOW
    } else {
        theme::GREEN
    };
    render_card(
        f,
        cards[2],
        "Needs review",
        app.summary.review_count.to_string(),
        review_color,
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: ratatui::style::Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Spend by Category ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if app.summary.by_category.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No expenses for this period",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = app
        .summary
        .by_category
        .iter()
        .take(9)
        .map(|(name, amt)| {
            let val = amt.abs().to_u64().unwrap_or(0);
            let label = truncate(name, 10);
            Bar::default()
                .value(val)
                .label(Line::from(label))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(11)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_expense_table(f: &mut Frame, area: Rect, app: &App) {
    if app.expenses.is_empty() {
        let msg = if !app.search_input.is_empty() {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("No invoices matching '{}'", app.search_input),
                    theme::dim_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Esc to clear the search",
                    theme::dim_style(),
                )),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No invoices for this period",
                    theme::dim_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Add one on the Add Expense tab",
                    theme::dim_style(),
                )),
            ]
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Invoices (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Vehicle", "Category", "Invoice", "Description", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .expenses
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, e)| {
            let is_cursor = i == app.expense_index;

            let amount_str = if e.needs_review() {
                format!("! {}", format_amount(e.amount))
            } else {
                format_amount(e.amount)
            };
            let amount_style = if e.needs_review() {
                Style::default().fg(theme::YELLOW)
            } else {
                Style::default().fg(theme::TEXT)
            };

            let style = if is_cursor {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(e.invoice_date.clone()),
                Cell::from(e.plate.clone()),
                Cell::from(e.category_label().to_string()),
                Cell::from(truncate(&e.invoice_no, 12)),
                Cell::from(truncate(&e.description, 28)),
                Cell::from(Span::styled(amount_str, amount_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Min(16),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(
                    " Invoices ({}) {}",
                    app.expenses.len(),
                    if !app.search_input.is_empty() {
                        format!("search: '{}' ", app.search_input)
                    } else {
                        String::new()
                    }
                ),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}
