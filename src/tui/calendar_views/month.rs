use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use nexus_cal::{app::AppState, ui::DayCell};

const WEEKDAYS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                app.screen.title.clone(),
                Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(
            WEEKDAYS
                .iter()
                .map(|name| Span::styled(format!(" {:<4}", name), Style::default().fg(app.theme.weekday_header)))
                .collect::<Vec<_>>(),
        ),
    ];

    if let Some(layout) = app.layout() {
        for week in layout.weeks() {
            let day_spans: Vec<Span> = week
                .iter()
                .enumerate()
                .map(|(column, cell)| match cell {
                    Some(cell) => day_span(app, cell, column),
                    None => Span::styled("  ·  ", Style::default().fg(app.theme.placeholder)),
                })
                .collect();
            lines.push(Line::from(day_spans));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("h/l", Style::default().fg(Color::Cyan)),
        Span::raw(" = Prev/next month | "),
        Span::styled("1-9 0 - =", Style::default().fg(Color::Cyan)),
        Span::raw(" = Select month | "),
        Span::styled("t", Style::default().fg(Color::Green)),
        Span::raw(" = Today"),
    ]));

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Calendário "));
    f.render_widget(content, area);
}

fn day_span<'a>(app: &AppState, cell: &DayCell, column: usize) -> Span<'a> {
    let text = format!(" {:>2}  ", cell.day);
    let mut style = Style::default();

    if column == 0 || column == 6 {
        style = style.fg(app.theme.weekend);
    }
    if let Some(holiday) = &cell.holiday {
        style = style.fg(app.theme.holiday_color(&holiday.color_tag)).add_modifier(Modifier::UNDERLINED);
    }
    if cell.is_today {
        style = style.fg(app.theme.today).add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    Span::styled(text, style)
}
