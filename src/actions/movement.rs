use crate::app::{AppState, Focus};

fn focused_len(app: &AppState) -> usize {
    match app.focus {
        Focus::Floor => app.floor.len(),
        Focus::Cart => app.controller.cart().len(),
    }
}

fn focused_cursor(app: &mut AppState) -> &mut usize {
    match app.focus {
        Focus::Floor => &mut app.floor_cursor,
        Focus::Cart => &mut app.cart_cursor,
    }
}

pub fn move_up(app: &mut AppState) {
    let cursor = focused_cursor(app);
    *cursor = cursor.saturating_sub(1);
}

pub fn move_down(app: &mut AppState) {
    let len = focused_len(app);
    let cursor = focused_cursor(app);
    if *cursor + 1 < len {
        *cursor += 1;
    }
}

pub fn go_to_top(app: &mut AppState) {
    *focused_cursor(app) = 0;
}

pub fn go_to_bottom(app: &mut AppState) {
    let last = focused_len(app).saturating_sub(1);
    *focused_cursor(app) = last;
}

pub fn toggle_focus(app: &mut AppState) {
    app.focus = match app.focus {
        Focus::Floor => Focus::Cart,
        Focus::Cart => Focus::Floor,
    };
    app.clamp_cursors();
}
