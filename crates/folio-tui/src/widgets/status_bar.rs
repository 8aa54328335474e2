use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let palette = &app.palette;

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            let section = app.active_section.as_deref().unwrap_or("-");
            format!(
                " {} | {}/{} | filter: {} | theme: {}",
                section,
                app.animator.current(),
                app.page.total_height(),
                app.current_filter().label(),
                app.prefs.theme.as_str(),
            )
        };

        let help_hint = " q:quit j/k:scroll 1-4:goto Tab:filter t:theme c:contact ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(palette.fg).bg(palette.surface),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(palette.surface)),
            Span::styled(
                help_hint,
                Style::default().fg(palette.muted).bg(palette.surface),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
