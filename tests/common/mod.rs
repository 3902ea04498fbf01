#![allow(dead_code)]
use booth_cart::{AppConfig, AppState, Booth, BoothSurface, FloorPlan};
use ratatui::{backend::TestBackend, Terminal};

/// Floor used by the scenario tests: two plain booths, one pre-booked.
pub fn scenario_floor() -> FloorPlan {
    FloorPlan::new(vec![
        Booth::new("A1", Some("50")),
        Booth::new("B2", Some("30")),
        Booth::new("P9", Some("90")).pre_booked(),
    ])
    .unwrap()
}

pub fn create_test_app() -> AppState {
    AppState::new(AppConfig::default(), scenario_floor())
}

/// (id, price) pairs of the cart in order.
pub fn cart_pairs(app: &AppState) -> Vec<(String, u32)> {
    app.controller
        .cart()
        .items()
        .iter()
        .map(|item| (item.id.to_string(), item.price))
        .collect()
}

pub fn is_selected(app: &AppState, id: &str) -> bool {
    app.floor.booth(id).map(|b| b.selected).unwrap_or(false)
}

/// Sum of prices must always match the running total.
pub fn assert_total_consistent(app: &AppState) {
    let sum: u64 = app
        .controller
        .cart()
        .items()
        .iter()
        .map(|item| u64::from(item.price))
        .sum();
    assert_eq!(app.controller.cart().total(), sum);
}

pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
