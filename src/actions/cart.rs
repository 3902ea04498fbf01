use crate::app::{AppState, Focus};
use crate::cart::Control;

/// Runs a control through the cart controller, then surfaces any notices
/// on the status line.
pub fn press(app: &mut AppState, control: &Control) {
    app.clear_message();

    app.controller.dispatch(&mut app.floor, control);

    if let Some(notice) = app.controller.notifier_mut().drain().pop() {
        app.set_message(notice.text());
    }

    app.clamp_cursors();
}

pub fn activate(app: &mut AppState) {
    match app.focus {
        Focus::Floor => add_highlighted(app),
        Focus::Cart => remove_highlighted(app),
    }
}

pub fn add_highlighted(app: &mut AppState) {
    let Some(booth) = app.floor.get(app.floor_cursor) else {
        return;
    };
    let control = Control::AddBooth(booth.id.clone());
    press(app, &control);
}

pub fn remove_highlighted(app: &mut AppState) {
    let Some(row) = app.controller.view().rows.get(app.cart_cursor) else {
        return;
    };
    let control = row.remove.clone();
    press(app, &control);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::toggle_focus;
    use crate::config::AppConfig;
    use crate::floor::{BoothSurface, FloorPlan};
    use crate::model::{Booth, BoothId};

    fn create_test_app() -> AppState {
        let floor = FloorPlan::new(vec![
            Booth::new("A1", Some("50")),
            Booth::new("B2", Some("30")),
            Booth::new("C3", Some("40")).pre_booked(),
        ])
        .unwrap();
        AppState::new(AppConfig::default(), floor)
    }

    #[test]
    fn test_add_highlighted_booth() {
        let mut app = create_test_app();
        add_highlighted(&mut app);

        assert_eq!(app.controller.cart().total(), 50);
        assert!(app.floor.booth("A1").unwrap().selected);
        assert!(app.message.is_none());
    }

    #[test]
    fn test_rejection_reaches_status_line() {
        let mut app = create_test_app();
        app.floor_cursor = 2;
        activate(&mut app);

        assert_eq!(app.message.as_deref(), Some("This booth is pre-booked!"));
        assert!(app.controller.cart().is_empty());

        app.floor_cursor = 0;
        activate(&mut app);
        assert!(app.message.is_none(), "successful add clears the message");
        activate(&mut app);
        assert_eq!(app.message.as_deref(), Some("Booth already selected!"));
    }

    #[test]
    fn test_remove_highlighted_clamps_cursor() {
        let mut app = create_test_app();
        press(&mut app, &Control::AddBooth(BoothId::from("A1")));
        press(&mut app, &Control::AddBooth(BoothId::from("B2")));

        toggle_focus(&mut app);
        app.cart_cursor = 1;
        activate(&mut app);

        assert_eq!(app.controller.cart().len(), 1);
        assert_eq!(app.controller.cart().items()[0].id.as_str(), "A1");
        assert_eq!(app.cart_cursor, 0);
        assert!(!app.floor.booth("B2").unwrap().selected);
    }

    #[test]
    fn test_remove_on_empty_cart_is_no_op() {
        let mut app = create_test_app();
        toggle_focus(&mut app);
        remove_highlighted(&mut app);
        assert!(app.controller.cart().is_empty());
    }

    #[test]
    fn test_clear_control() {
        let mut app = create_test_app();
        press(&mut app, &Control::AddBooth(BoothId::from("A1")));
        press(&mut app, &Control::AddBooth(BoothId::from("B2")));
        press(&mut app, &Control::ClearCart);

        assert!(app.controller.cart().is_empty());
        assert!(app.floor.selected_ids().is_empty());
        assert_eq!(app.cart_cursor, 0);
    }
}
