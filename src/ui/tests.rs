use super::constants::{ADD_CONTROL, REMOVE_CONTROL};
use super::help::SECTIONS;
use super::status_line::StatusLineRenderer;
use super::{register_control, render, scroll_offset};
use crate::actions::{execute_action, Action};
use crate::app::{AppMode, AppState};
use crate::cart::Control;
use crate::config::AppConfig;
use crate::floor::FloorPlan;
use crate::model::BoothId;
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

fn create_test_app() -> AppState {
    AppState::new(AppConfig::default(), FloorPlan::demo())
}

fn draw(app: &mut AppState, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();
    terminal
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_scroll_offset_keeps_cursor_visible() {
    assert_eq!(scroll_offset(0, 0, 5), 0);
    assert_eq!(scroll_offset(0, 4, 5), 0);
    assert_eq!(scroll_offset(0, 5, 5), 1);
    assert_eq!(scroll_offset(3, 1, 5), 1);
    assert_eq!(scroll_offset(2, 9, 0), 2);
}

#[test]
fn test_register_control_clips_to_line() {
    let mut app = create_test_app();
    let line = Rect::new(10, 4, 12, 1);

    register_control(&mut app, line, "abcdefghij", REMOVE_CONTROL, Control::ClearCart);
    assert_eq!(app.hit_targets[0].area, Rect::new(20, 4, 2, 1));

    register_control(&mut app, line, "abcdefghijklmnop", ADD_CONTROL, Control::ClearCart);
    assert_eq!(app.hit_targets.len(), 1, "fully clipped control is skipped");
}

#[test]
fn test_draw_registers_every_control() {
    let mut app = create_test_app();
    execute_action(Action::Press(Control::AddBooth(BoothId::from("A1"))), &mut app);

    let terminal = draw(&mut app, 90, 16);
    let text = screen_text(&terminal);

    assert!(text.contains("Booth A1"));
    assert!(text.contains("[Remove]"));
    assert!(text.contains("Total: KD 50"));

    let adds = app
        .hit_targets
        .iter()
        .filter(|t| matches!(t.control, Control::AddBooth(_)))
        .count();
    assert_eq!(adds, app.floor.len());
    assert!(app
        .hit_targets
        .iter()
        .any(|t| t.control == Control::RemoveItem(BoothId::from("A1"))));
    assert!(app.hit_targets.iter().any(|t| t.control == Control::ClearCart));
}

#[test]
fn test_clicking_drawn_controls() {
    let mut app = create_test_app();
    draw(&mut app, 90, 16);

    let add_b1 = app
        .hit_targets
        .iter()
        .find(|t| t.control == Control::AddBooth(BoothId::from("B1")))
        .map(|t| t.area)
        .unwrap();
    let control = app.control_at(add_b1.x, add_b1.y).cloned().unwrap();
    execute_action(Action::Press(control), &mut app);
    assert_eq!(app.controller.cart().total(), 30);

    draw(&mut app, 90, 16);
    let clear = app
        .hit_targets
        .iter()
        .find(|t| t.control == Control::ClearCart)
        .map(|t| t.area)
        .unwrap();
    let control = app.control_at(clear.x + 1, clear.y).cloned().unwrap();
    execute_action(Action::Press(control), &mut app);
    assert!(app.controller.cart().is_empty());
}

#[test]
fn test_empty_cart_placeholder_is_drawn() {
    let mut app = create_test_app();
    let terminal = draw(&mut app, 90, 16);
    let text = screen_text(&terminal);

    assert!(text.contains("No booths selected"));
    assert!(text.contains("Total: KD 0"));
}

#[test]
fn test_floor_scrolls_to_cursor() {
    let mut app = create_test_app();
    app.floor_cursor = app.floor.len() - 1;

    // 6 rows leave 3 visible floor lines inside the border.
    draw(&mut app, 90, 6);

    assert_eq!(app.floor_offset, app.floor.len() - 3);
    let last = app.floor.get(app.floor.len() - 1).unwrap().id.clone();
    assert!(app
        .hit_targets
        .iter()
        .any(|t| t.control == Control::AddBooth(last.clone())));
}

#[test]
fn test_help_mode_hides_controls() {
    let mut app = create_test_app();
    app.mode = AppMode::Help;

    let terminal = draw(&mut app, 90, 24);

    assert!(app.hit_targets.is_empty());
    assert!(screen_text(&terminal).contains("booth-cart Help"));
}

#[test]
fn test_status_line_shows_notice_then_summary() {
    let mut app = create_test_app();
    let (content, _) = StatusLineRenderer::get_content_and_style(&app);
    assert_eq!(
        content,
        "booth-cart | 10 booths | 0 in cart | Total: KD 0 | ? help"
    );

    execute_action(Action::Press(Control::AddBooth(BoothId::from("A3"))), &mut app);
    let (content, _) = StatusLineRenderer::get_content_and_style(&app);
    assert_eq!(content, "This booth is pre-booked!");
}

#[test]
fn test_help_sections_not_empty() {
    assert!(!SECTIONS.is_empty());
    for section in SECTIONS {
        assert!(!section.items.is_empty(), "{} has no entries", section.title);
    }
}
