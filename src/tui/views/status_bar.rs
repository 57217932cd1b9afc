//! Status bar view
//!
//! Shows the month, menu depth, selection count and the running total.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let session = &app.session;
    let total = session.projected_total();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.period.long_name()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("│ "),
        Span::styled(
            format!(
                "Depth {}/{}",
                session.depth(),
                session.stack().max_depth()
            ),
            Style::default().fg(Color::White),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("{} selected", session.selections().selected_count()),
            Style::default().fg(Color::LightBlue),
        ),
        Span::raw(" │ "),
        Span::styled("Total: ", Style::default().fg(Color::White)),
        Span::styled(
            total.format_with_symbol(&app.currency_symbol),
            Style::default()
                .fg(if total.is_negative() {
                    Color::Red
                } else {
                    Color::Green
                })
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::styled(
            " │ ? help",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
