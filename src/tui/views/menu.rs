//! Cascading menu boxes
//!
//! Every open frame is drawn, root first, so deeper menus sit on top of the
//! ones they were opened from. Only the top frame shows a cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::review::{EntryKind, EntryView, FrameView};
use crate::tui::app::App;
use crate::tui::layout::cascade_rect;

/// Render every open frame
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let views = app.session.frame_views();
    let max_levels = app.session.stack().max_depth();
    let top_level = views.len().saturating_sub(1);

    for view in &views {
        let rect = cascade_rect(area, view.level, max_levels);
        render_frame(frame, view, rect, view.level == top_level);
    }
}

fn render_frame(frame: &mut Frame, view: &FrameView, area: Rect, active: bool) {
    frame.render_widget(Clear, area);

    let border_color = if active { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(format!(" {} ", view.title))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if view.entries.is_empty() {
        let empty = List::new(vec![ListItem::new(Span::styled(
            "(no transactions)",
            Style::default().fg(Color::DarkGray),
        ))])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view
        .entries
        .iter()
        .map(|entry| ListItem::new(entry_line(entry, active)))
        .collect();

    let mut list = List::new(items).block(block);
    let mut state = ListState::default();
    if active {
        list = list
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        state.select(Some(view.cursor));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn entry_line(entry: &EntryView, active: bool) -> Line<'static> {
    let base = if active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    match entry.kind {
        EntryKind::Submenu => Line::from(Span::styled(
            entry.label.clone(),
            base.add_modifier(Modifier::BOLD),
        )),
        EntryKind::Action => Line::from(Span::styled(
            entry.label.clone(),
            base.fg(if active { Color::Green } else { Color::DarkGray }),
        )),
        EntryKind::ReadOnly => Line::from(Span::styled(format!("    {}", entry.label), base)),
        EntryKind::Checkbox { checked } => {
            let style = if checked && active {
                Style::default().fg(Color::LightBlue)
            } else {
                base
            };
            let mark = if checked { "[x] " } else { "[ ] " };
            Line::from(vec![
                Span::styled(mark, style),
                Span::styled(entry.label.clone(), style),
            ])
        }
    }
}
