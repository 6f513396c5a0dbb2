//! Amount entry screen

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::App;
use super::layout::centered_rect_fixed;
use super::widgets::CurrencyInput;

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(56, 11, frame.area());
    frame.render_widget(Clear, area);

    let border_color = if app.focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Enter Amount ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Form value
            Constraint::Length(1), // Status
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Help
        ])
        .split(inner);

    let input = CurrencyInput::new(app.field.display())
        .label(&app.label)
        .placeholder("$0.00")
        .focused(app.focused);
    frame.render_widget(input, chunks[1]);

    let value_line = Line::from(vec![
        Span::styled("Form value: ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.form_value().to_string()),
    ]);
    frame.render_widget(Paragraph::new(value_line), chunks[3]);

    if let Some(status) = &app.status {
        frame.render_widget(
            Paragraph::new(status.as_str()).style(Style::default().fg(Color::Green)),
            chunks[4],
        );
    }

    let help = vec![
        Line::from(vec![
            Span::styled("0-9", Style::default().fg(Color::Yellow)),
            Span::raw(" type  "),
            Span::styled("Bksp", Style::default().fg(Color::Yellow)),
            Span::raw(" erase  "),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(" focus/blur"),
        ]),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" save  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" cancel  "),
            Span::styled("^U", Style::default().fg(Color::Yellow)),
            Span::raw(" clear  "),
            Span::styled("^R", Style::default().fg(Color::Yellow)),
            Span::raw(" reset"),
        ]),
    ];
    frame.render_widget(Paragraph::new(help), chunks[6]);
}
