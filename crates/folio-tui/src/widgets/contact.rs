use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use folio_core::form::Field;

use crate::app::App;

pub struct ContactWidget;

impl ContactWidget {
    /// Render the contact form overlay: three fields with inline errors and
    /// the self-dismissing success panel
    pub fn render(frame: &mut Frame, app: &App) {
        let palette = &app.palette;
        let area = frame.area();

        let width = 52u16.min(area.width.saturating_sub(4));
        let height = 16u16.min(area.height.saturating_sub(2));
        let popup = centered_rect(width, height, area);

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Get in touch ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.surface));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // name
                Constraint::Length(1), // name error
                Constraint::Length(3), // email
                Constraint::Length(1), // email error
                Constraint::Length(3), // message
                Constraint::Length(1), // message error
                Constraint::Length(1), // footer
            ])
            .split(inner);

        for (i, field) in Field::ALL.into_iter().enumerate() {
            Self::render_field(frame, rows[i * 2], app, field);
            Self::render_error(frame, rows[i * 2 + 1], app, field);
        }

        let footer = if app.form.success_visible() {
            Line::from(Span::styled(
                " Message sent, thank you! ",
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                " Tab: next field  Enter: send  Esc: close ",
                Style::default().fg(palette.muted),
            ))
        };
        frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), rows[6]);
    }

    fn render_field(frame: &mut Frame, area: Rect, app: &App, field: Field) {
        let palette = &app.palette;
        let focused = app.form_focus == Some(field);
        let errored = app.form.error_for(field).is_some();

        // Error flag outranks focus, matching the page's red outline
        let border = if errored {
            palette.error
        } else if focused {
            palette.accent
        } else {
            palette.border
        };

        let block = Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut value = app.form.input.field(field).to_string();
        if focused {
            value.push('▏');
        }
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                value,
                Style::default().fg(palette.fg),
            ))),
            inner,
        );
    }

    fn render_error(frame: &mut Frame, area: Rect, app: &App, field: Field) {
        if let Some(message) = app.form.error_for(field) {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!(" {message}"),
                    Style::default().fg(app.palette.error),
                ))),
                area,
            );
        }
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
