use super::constants::{CART_FOOTER_HEIGHT, CART_TITLE, CLEAR_CONTROL, REMOVE_CONTROL};
use super::{is_focused, panel_block, register_control, scroll_offset};
use crate::app::{AppState, Focus};
use crate::cart::Control;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub struct CartRenderer;

impl CartRenderer {
    pub fn render(frame: &mut Frame, app: &mut AppState, area: Rect) {
        let focused = is_focused(app, Focus::Cart);
        let block = panel_block(CART_TITLE, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows_height = inner.height.saturating_sub(CART_FOOTER_HEIGHT);
        let rows_area = Rect::new(inner.x, inner.y, inner.width, rows_height);

        Self::render_rows(frame, app, rows_area, focused);
        Self::render_footer(frame, app, inner, rows_height);
    }

    fn render_rows(frame: &mut Frame, app: &mut AppState, area: Rect, focused: bool) {
        if area.height == 0 {
            return;
        }

        let view = app.controller.view().clone();

        if let Some(text) = view.placeholder {
            frame.render_widget(
                Paragraph::new(text).style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
                area,
            );
            return;
        }

        let label_width = view.rows.iter().map(|r| r.label.width()).max().unwrap_or(0);
        let price_width = view
            .rows
            .iter()
            .map(|r| r.price_text.width())
            .max()
            .unwrap_or(0);

        let height = area.height as usize;
        let offset = scroll_offset(0, app.cart_cursor, height);

        let mut lines = Vec::with_capacity(height);
        let visible = view.rows.iter().enumerate().skip(offset).take(height);
        for (line_no, (index, row)) in visible.enumerate() {
            let label_pad = label_width.saturating_sub(row.label.width());
            let price_pad = price_width.saturating_sub(row.price_text.width());
            let prefix = format!(
                "{}{}  {}{}  ",
                row.label,
                " ".repeat(label_pad),
                " ".repeat(price_pad),
                row.price_text
            );

            let mut style = Style::default();
            if focused && index == app.cart_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let line_area = Rect::new(area.x, area.y + line_no as u16, area.width, 1);
            register_control(app, line_area, &prefix, REMOVE_CONTROL, row.remove.clone());

            lines.push(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(REMOVE_CONTROL, Style::default().fg(Color::Red)),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_footer(frame: &mut Frame, app: &mut AppState, inner: Rect, rows_height: u16) {
        let footer_y = inner.y + rows_height;
        let bottom = inner.y + inner.height;

        if footer_y < bottom {
            let view = app.controller.view();
            let total = Line::from(vec![
                Span::raw("Total: "),
                Span::styled(
                    format!("{} {}", view.currency, view.total_text),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]);
            frame.render_widget(
                Paragraph::new(total),
                Rect::new(inner.x, footer_y, inner.width, 1),
            );
        }

        if footer_y + 1 < bottom {
            let line_area = Rect::new(inner.x, footer_y + 1, inner.width, 1);
            frame.render_widget(
                Paragraph::new(CLEAR_CONTROL).style(Style::default().fg(Color::Yellow)),
                line_area,
            );
            register_control(app, line_area, "", CLEAR_CONTROL, Control::ClearCart);
        }
    }
}
