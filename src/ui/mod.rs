mod cart;
pub mod constants;
mod floor;
mod help;
mod status_line;

#[cfg(test)]
mod tests;

use crate::app::{AppMode, AppState, Focus, HitTarget};
use crate::cart::Control;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use cart::CartRenderer;
use floor::FloorRenderer;
use help::HelpRenderer;
use status_line::StatusLineRenderer;

// Main render function
pub fn render(frame: &mut Frame, app: &mut AppState) {
    let size = frame.area();

    // Controls are re-registered on every draw
    app.hit_targets.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    match app.mode {
        AppMode::Help => HelpRenderer::render(frame, chunks[0]),
        AppMode::Normal => {
            let panels = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(chunks[0]);

            FloorRenderer::render(frame, app, panels[0]);
            CartRenderer::render(frame, app, panels[1]);
        }
    }

    StatusLineRenderer::render(frame, app, chunks[1]);
}

fn panel_block(title: &'static str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
}

fn is_focused(app: &AppState, panel: Focus) -> bool {
    app.mode == AppMode::Normal && app.focus == panel
}

/// Registers a one-line control drawn at `prefix` columns into `line_area`,
/// clipped to the line. Controls that do not fit at all are skipped.
fn register_control(
    app: &mut AppState,
    line_area: Rect,
    prefix: &str,
    label: &str,
    control: Control,
) {
    let offset = prefix.width() as u16;
    let right = line_area.x.saturating_add(line_area.width);
    let x = line_area.x.saturating_add(offset);
    if x >= right {
        return;
    }
    let width = (label.width() as u16).min(right - x);
    app.hit_targets.push(HitTarget {
        area: Rect::new(x, line_area.y, width, 1),
        control,
    });
}

/// First visible row so that `cursor` stays inside a window of `height` rows.
fn scroll_offset(current: usize, cursor: usize, height: usize) -> usize {
    if height == 0 {
        return current;
    }
    if cursor < current {
        cursor
    } else if cursor >= current + height {
        cursor + 1 - height
    } else {
        current
    }
}
