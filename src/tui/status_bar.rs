//! Status bar widget for messages and contextual key hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus, Theme};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Renders the message line and the contextual help line.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::with_capacity(2);

        if let Some(error) = &state.error_message {
            lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::styled(error.clone(), Style::default().fg(theme.text)),
            ]));
        } else if !state.status_message.is_empty() {
            lines.push(Line::styled(
                state.status_message.clone(),
                Style::default().fg(theme.success),
            ));
        } else {
            lines.push(Line::styled(
                format!("Data: {}", state.storage.dir().display()),
                Style::default().fg(theme.text_muted),
            ));
        }

        lines.push(Line::styled(
            Self::hints(state),
            Style::default().fg(theme.text_muted),
        ));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.text_muted));
        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn hints(state: &AppState) -> &'static str {
        if state.menu_editor.is_some() {
            "Tab category  a add  d delete  s save  Esc cancel"
        } else if state.focus == Focus::Editor {
            "Tab calendar  ↑/↓ row  ←/→ pick  +/- rows  Enter apply  s save  Esc close"
        } else {
            "↑↓←→ move  Enter select  [ ] month  m menus  e export  q quit"
        }
    }
}
