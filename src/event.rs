use crate::actions::Action;
use crate::app::{AppMode, AppState};
use crate::cart::Control;
use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

pub fn handle_events(app: &AppState) -> Result<Option<Action>> {
    if event::poll(Duration::from_millis(50))? {
        return Ok(match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            _ => None,
        });
    }
    Ok(None)
}

pub fn handle_key_event(app: &AppState, key: KeyEvent) -> Option<Action> {
    match app.mode {
        AppMode::Normal => handle_normal_mode(key),
        AppMode::Help => handle_help_mode(key),
    }
}

/// Left clicks land on whatever control was drawn under the pointer.
pub fn handle_mouse_event(app: &AppState, mouse: MouseEvent) -> Option<Action> {
    if app.mode != AppMode::Normal {
        return None;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app
            .control_at(mouse.column, mouse.row)
            .cloned()
            .map(Action::Press),
        _ => None,
    }
}

fn handle_normal_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        // Quit
        (Char('q'), KeyModifiers::NONE) => Some(Action::Quit),
        (Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),

        // Movement
        (Char('j'), KeyModifiers::NONE) | (Down, _) => Some(Action::MoveDown),
        (Char('k'), KeyModifiers::NONE) | (Up, _) => Some(Action::MoveUp),
        (Char('g'), KeyModifiers::NONE) | (Home, _) => Some(Action::GoToTop),
        (Char('G'), KeyModifiers::SHIFT) | (End, _) => Some(Action::GoToBottom),
        (Tab, _) | (BackTab, _) => Some(Action::ToggleFocus),

        // Cart
        (Enter, _) | (Char(' '), KeyModifiers::NONE) => Some(Action::Activate),
        (Char('a'), KeyModifiers::NONE) => Some(Action::AddHighlighted),
        (Char('d'), KeyModifiers::NONE) | (Char('x'), KeyModifiers::NONE) | (Delete, _) => {
            Some(Action::RemoveHighlighted)
        }
        (Char('c'), KeyModifiers::NONE) => Some(Action::Press(Control::ClearCart)),

        // Help
        (Char('?'), _) => Some(Action::ShowHelp),

        _ => None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::HitTarget;
    use crate::config::AppConfig;
    use crate::floor::FloorPlan;
    use crate::model::BoothId;
    use ratatui::layout::Rect;

    fn create_test_app() -> AppState {
        AppState::new(AppConfig::default(), FloorPlan::demo())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_normal_mode_keys() {
        let app = create_test_app();
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(handle_key_event(&app, key(KeyCode::Enter)), Some(Action::Activate));
        assert_eq!(handle_key_event(&app, key(KeyCode::Tab)), Some(Action::ToggleFocus));
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('c'))),
            Some(Action::Press(Control::ClearCart))
        );
        assert_eq!(
            handle_key_event(&app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_help_mode_keys() {
        let mut app = create_test_app();
        app.mode = AppMode::Help;
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Some(Action::CloseHelp));
        assert_eq!(handle_key_event(&app, key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_click_dispatches_control_under_pointer() {
        let mut app = create_test_app();
        app.hit_targets.push(HitTarget {
            area: Rect::new(20, 3, 5, 1),
            control: Control::AddBooth(BoothId::from("A2")),
        });

        assert_eq!(
            handle_mouse_event(&app, click(22, 3)),
            Some(Action::Press(Control::AddBooth(BoothId::from("A2"))))
        );
        assert_eq!(handle_mouse_event(&app, click(22, 4)), None);

        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..click(22, 3)
        };
        assert_eq!(handle_mouse_event(&app, release), None);

        app.mode = AppMode::Help;
        assert_eq!(handle_mouse_event(&app, click(22, 3)), None);
    }
}
