use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use nexus_cal::app::AppState;

pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 56.min(area.width);
    let help_height = 20.min(area.height);
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = ratatui::layout::Rect {
        x,
        y,
        width: help_width,
        height: help_height,
    };

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled("nexus-cal Help", Style::default().fg(app.theme.help_title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![Span::styled("Navigation:", Style::default().fg(app.theme.help_section))]),
        Line::from("  h / Left / {   - Previous month"),
        Line::from("  l / Right / }  - Next month"),
        Line::from("  t              - Current month"),
        Line::from("  1..9 0 - =     - Select January..December"),
        Line::from(""),
        Line::from(vec![Span::styled("Commands:", Style::default().fg(app.theme.help_section))]),
        Line::from("  :q             - Quit"),
        Line::from("  :month         - Select month (:month 3, :month março)"),
        Line::from("  :goto          - Jump to month (:goto 2025-12)"),
        Line::from("  :theme         - Change theme (:theme gruvbox)"),
        Line::from("  :export        - Write HTML page (:export cal.html)"),
        Line::from("  :help          - Show this help"),
        Line::from(""),
        Line::from(vec![Span::styled("Legend:", Style::default().fg(app.theme.help_section))]),
        Line::from("  Underlined day - Holiday (coloured by its tag)"),
        Line::from("  Reversed day   - Today"),
        Line::from(""),
    ];

    let visible_lines = help_height.saturating_sub(3) as usize;
    let total_lines = help_text.len();
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.help_scroll.min(max_scroll);

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
