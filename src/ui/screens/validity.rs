use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::alerts::{evaluate, AlertLevel};
use crate::models::DueKind;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Alert counts
            Constraint::Min(6),    // Roster table
        ])
        .split(area);

    render_alert_header(f, chunks[0], app);
    render_roster_table(f, chunks[1], app);
}

fn render_alert_header(f: &mut Frame, area: Rect, app: &App) {
    let s = app.alert_summary;
    let line = if s.is_clear() {
        Line::from(Span::styled(
            " All documents current",
            Style::default().fg(theme::GREEN),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                format!(" {} expired ", s.expired),
                theme::alert_style(AlertLevel::Expired),
            ),
            Span::styled("| ", theme::dim_style()),
            Span::styled(
                format!("{} due within 7 days ", s.critical),
                theme::alert_style(AlertLevel::Critical),
            ),
            Span::styled("| ", theme::dim_style()),
            Span::styled(
                format!("{} due within 30 days", s.warning),
                theme::alert_style(AlertLevel::Warning),
            ),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Alerts ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn due_cell(due: Option<NaiveDate>, today: NaiveDate) -> Cell<'static> {
    let level = evaluate(due, today);
    let text = match due {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "—".to_string(),
    };
    Cell::from(Span::styled(text, theme::alert_style(level)))
}

fn render_roster_table(f: &mut Frame, area: Rect, app: &App) {
    let header_cells = ["Vehicle", "Insurance", "Inspection", "Road tax", "Notes"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .validities
        .iter()
        .enumerate()
        .skip(app.validity_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, v)| {
            let is_cursor = i == app.validity_index;
            let style = if is_cursor {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(v.plate.clone()),
                due_cell(v.due(DueKind::Insurance), app.today),
                due_cell(v.due(DueKind::Inspection), app.today),
                due_cell(v.due(DueKind::RoadTax), app.today),
                Cell::from(truncate(&v.notes, 30)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Min(16),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Fleet ({}) ", app.validities.len()),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}
