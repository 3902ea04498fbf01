use crate::app::{AppMode, AppState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

// Status line renderer
pub struct StatusLineRenderer;

impl StatusLineRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let (content, style) = Self::get_content_and_style(app);
        frame.render_widget(Paragraph::new(content).style(style), area);
    }

    pub(crate) fn get_content_and_style(app: &AppState) -> (String, Style) {
        match app.mode {
            AppMode::Normal => Self::render_normal_mode(app),
            AppMode::Help => Self::render_help_mode(),
        }
    }

    fn render_normal_mode(app: &AppState) -> (String, Style) {
        if let Some(ref msg) = app.message {
            let style = Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD);
            return (msg.clone(), style);
        }

        let view = app.controller.view();
        let content = format!(
            "booth-cart | {} booths | {} in cart | Total: {} {} | ? help",
            app.floor.len(),
            view.rows.len(),
            view.currency,
            view.total_text
        );
        (content, Style::default().fg(Color::Gray).bg(Color::Black))
    }

    fn render_help_mode() -> (String, Style) {
        let content = String::from("Press ESC or q to close help");
        let style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        (content, style)
    }
}
