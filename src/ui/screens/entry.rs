use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, EntryForm, InputMode, ENTRY_FIELDS};
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ENTRY_FIELDS.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(area);

    render_form(f, chunks[0], app);
    render_hints(f, chunks[1], app);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = ENTRY_FIELDS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let is_cursor = i == app.entry_field;
            let editing_here = is_cursor && app.input_mode == InputMode::Editing;

            let value = if editing_here {
                format!("{}▏", app.command_input)
            } else {
                app.form.field_value(i)
            };

            let marker = if is_cursor { "▸ " } else { "  " };
            let label_style = if is_cursor {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::dim_style()
            };
            let value_style = if editing_here {
                Style::default().fg(theme::GREEN)
            } else if value.is_empty() {
                theme::dim_style()
            } else {
                theme::normal_style()
            };
            let shown = if value.is_empty() && !editing_here {
                "—".to_string()
            } else {
                value
            };

            let suffix = if EntryForm::is_select(i) {
                Span::styled("  (+/- to cycle)", theme::dim_style())
            } else {
                Span::raw("")
            };

            Line::from(vec![
                Span::styled(format!("{marker}{label:<14} "), label_style),
                Span::styled(shown, value_style),
                suffix,
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " New Expense ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_hints(f: &mut Frame, area: Rect, _app: &App) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Amount and invoice number are required before saving.",
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            "  Amounts accept the comma decimal form (\"12,50\").",
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            "  Ctrl-s or :save writes the row; the form clears on success.",
            theme::dim_style(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
