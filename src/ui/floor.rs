use super::constants::{
    ADD_CONTROL, FLOOR_TITLE, MARK_AVAILABLE, MARK_PRE_BOOKED, MARK_SELECTED, STATUS_AVAILABLE,
    STATUS_PRE_BOOKED, STATUS_SELECTED,
};
use super::{is_focused, panel_block, register_control, scroll_offset};
use crate::app::{AppState, Focus};
use crate::cart::Control;
use crate::model::Booth;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub struct FloorRenderer;

impl FloorRenderer {
    pub fn render(frame: &mut Frame, app: &mut AppState, area: Rect) {
        let focused = is_focused(app, Focus::Floor);
        let block = panel_block(FLOOR_TITLE, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if app.floor.is_empty() {
            frame.render_widget(
                Paragraph::new("No booths on this floor")
                    .style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return;
        }

        let height = inner.height as usize;
        app.floor_offset = scroll_offset(app.floor_offset, app.floor_cursor, height);

        let id_width = app
            .floor
            .booths()
            .iter()
            .map(|b| b.id.as_str().width())
            .max()
            .unwrap_or(0);
        let price_width = app
            .floor
            .booths()
            .iter()
            .map(|b| b.price().to_string().len())
            .max()
            .unwrap_or(0);

        let mut lines = Vec::with_capacity(height);
        let mut controls = Vec::with_capacity(height);

        for (row, index) in (app.floor_offset..app.floor.len()).take(height).enumerate() {
            let Some(booth) = app.floor.get(index) else {
                break;
            };
            let prefix = Self::booth_prefix(booth, &app.config.currency, id_width, price_width);
            let highlighted = focused && index == app.floor_cursor;

            let mut style = Self::booth_style(booth);
            if highlighted {
                style = style.add_modifier(Modifier::REVERSED);
            }

            lines.push(Line::from(vec![
                Span::styled(prefix.clone(), style),
                Span::styled(ADD_CONTROL, Style::default().fg(Color::Yellow)),
            ]));

            let line_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
            controls.push((line_area, prefix, Control::AddBooth(booth.id.clone())));
        }

        frame.render_widget(Paragraph::new(lines), inner);

        for (line_area, prefix, control) in controls {
            register_control(app, line_area, &prefix, ADD_CONTROL, control);
        }
    }

    fn booth_prefix(booth: &Booth, currency: &str, id_width: usize, price_width: usize) -> String {
        let (marker, status) = if booth.pre_booked {
            (MARK_PRE_BOOKED, STATUS_PRE_BOOKED)
        } else if booth.selected {
            (MARK_SELECTED, STATUS_SELECTED)
        } else {
            (MARK_AVAILABLE, STATUS_AVAILABLE)
        };

        let id = booth.id.as_str();
        let pad = id_width.saturating_sub(id.width());
        format!(
            "{marker} Booth {id}{} {currency} {:>price_width$}  {status:<10} ",
            " ".repeat(pad),
            booth.price(),
        )
    }

    fn booth_style(booth: &Booth) -> Style {
        if booth.pre_booked {
            Style::default().fg(Color::DarkGray)
        } else if booth.selected {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }
}
