use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use nexus_cal::{
    app::AppState,
    ui::{Legend, month_view::NO_HOLIDAYS_LABEL},
};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let lines: Vec<Line> = match &app.screen.legend.legend {
        Some(Legend::Entries(entries)) => entries
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(app.theme.holiday_color(&entry.color_tag))),
                    Span::styled(
                        format!("{:>2}", entry.day),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" - {}", entry.name), Style::default().fg(app.theme.legend_text)),
                ])
            })
            .collect(),
        Some(Legend::NoHolidays) | None => vec![Line::from(Span::styled(
            NO_HOLIDAYS_LABEL,
            Style::default().fg(app.theme.placeholder),
        ))],
    };

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Feriados "));
    f.render_widget(content, area);
}
