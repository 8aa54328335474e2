use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use folio_core::page::Card;

use crate::app::App;

pub struct PageWidget;

impl PageWidget {
    /// Render the slice of the virtual page under the viewport. Unrevealed
    /// elements are not drawn at all: that is their pre-animation state.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let palette = &app.palette;
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.bg)),
            area,
        );

        let scale = app.config.ui.units_per_row.max(1) as i64;
        let scroll = app.animator.current() as i64;

        for section in &app.page.sections {
            if !app.is_revealed(&section.id) {
                continue;
            }
            let top_row = (section.top as i64 - scroll) / scale;

            let mut lines: Vec<(i64, Line)> = vec![(
                top_row,
                Line::from(Span::styled(
                    format!("── {} ──", section.title),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )),
            )];
            for (i, paragraph) in section.body.iter().enumerate() {
                lines.push((
                    top_row + 2 + i as i64 * 2,
                    Line::from(Span::styled(
                        paragraph.clone(),
                        Style::default().fg(palette.fg),
                    )),
                ));
            }

            for (row, line) in lines {
                if let Some(rect) = row_rect(area, row) {
                    frame.render_widget(Paragraph::new(line), rect);
                }
            }
        }

        for (index, card) in app.page.cards.iter().enumerate() {
            if card.hidden || !app.is_revealed(&card.id) {
                continue;
            }
            if let Some(rect) = card_rect(area, card, index, &app.page.cards, scroll, scale) {
                Self::render_card(frame, rect, card, app);
            }
        }
    }

    fn render_card(frame: &mut Frame, rect: Rect, card: &Card, app: &App) {
        let palette = &app.palette;
        let block = Block::default()
            .title(format!(" {} ", card.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                card.blurb.clone(),
                Style::default().fg(palette.fg),
            )),
            Line::from(Span::styled(
                format!("#{}", card.category),
                Style::default().fg(palette.muted),
            )),
        ]);
        frame.render_widget(body, inner);
    }
}

/// One text row of the page area, or None when it is scrolled out of view
fn row_rect(area: Rect, row: i64) -> Option<Rect> {
    if row < 0 || row >= area.height as i64 {
        return None;
    }
    Some(Rect::new(
        area.x + 2,
        area.y + row as u16,
        area.width.saturating_sub(4),
        1,
    ))
}

/// Screen rectangle of a card: cards sharing a top edge sit side by side in
/// a two-column grid. Partially visible cards are clipped to the area.
fn card_rect(
    area: Rect,
    card: &Card,
    index: usize,
    cards: &[Card],
    scroll: i64,
    scale: i64,
) -> Option<Rect> {
    let top_row = (card.top as i64 - scroll) / scale;
    let height = ((card.height as i64) / scale).max(3);
    if top_row + height <= 0 || top_row >= area.height as i64 {
        return None;
    }

    let column = cards[..index]
        .iter()
        .filter(|c| c.top == card.top && !c.hidden)
        .count() as u16
        % 2;
    let col_width = area.width.saturating_sub(6) / 2;
    let x = area.x + 2 + column * (col_width + 2);

    let visible_top = top_row.max(0);
    let visible_height = (top_row + height).min(area.height as i64) - visible_top;
    if visible_height <= 0 || col_width < 4 {
        return None;
    }

    Some(Rect::new(
        x,
        area.y + visible_top as u16,
        col_width,
        visible_height as u16,
    ))
}
