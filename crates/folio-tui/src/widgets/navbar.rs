use folio_core::page::Section;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct NavbarWidget;

impl NavbarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let palette = &app.palette;

        // The scrolled style kicks in past the threshold
        let bg = if app.navbar_scrolled {
            palette.navbar_scrolled_bg
        } else {
            palette.navbar_bg
        };

        let mut spans = vec![
            Span::styled(
                format!(" {} ", app.page.title),
                Style::default()
                    .fg(palette.accent)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("≡ ", Style::default().fg(palette.muted).bg(bg)),
        ];

        for (i, section) in app.page.nav_sections().enumerate() {
            let label = section.nav_label.as_deref().unwrap_or(&section.title);
            let active = app.active_section.as_deref() == Some(section.id.as_str());
            let style = if active {
                Style::default()
                    .fg(palette.highlight)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(palette.fg).bg(bg)
            };
            spans.push(Span::styled(format!(" {} {} ", i + 1, label), style));
        }

        // Theme toggle glyph always mirrors the stored preference
        let glyph = format!(" {} ", app.prefs.theme.glyph());
        let pad = area
            .width
            .saturating_sub(spans.iter().map(|s| s.width() as u16).sum::<u16>())
            .saturating_sub(glyph.chars().count() as u16);
        spans.push(Span::styled(
            " ".repeat(pad as usize),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            glyph,
            Style::default().fg(palette.highlight).bg(bg),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);

        if app.menu_open {
            Self::render_menu(frame, area, app);
        }
    }

    /// Hamburger dropdown listing the nav links with their jump keys
    fn render_menu(frame: &mut Frame, navbar_area: Rect, app: &App) {
        let palette = &app.palette;
        let labels: Vec<&Section> = app.page.nav_sections().collect();

        let height = labels.len() as u16 + 2;
        let width = 24u16.min(frame.area().width);
        let area = Rect::new(
            navbar_area.x,
            navbar_area.y + navbar_area.height,
            width,
            height.min(frame.area().height.saturating_sub(navbar_area.height)),
        );

        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = labels
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let label = section.nav_label.as_deref().unwrap_or(&section.title);
                let active = app.active_section.as_deref() == Some(section.id.as_str());
                let style = if active {
                    Style::default()
                        .fg(palette.highlight)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.fg)
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), Style::default().fg(palette.muted)),
                    Span::styled(label.to_string(), style),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
