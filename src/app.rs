use crate::cart::{CartController, Control};
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::floor::FloorPlan;
use crate::parser;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Floor,
    Cart,
}

/// Screen area of a drawn control, refreshed on every draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitTarget {
    pub area: Rect,
    pub control: Control,
}

impl HitTarget {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }
}

pub struct AppState {
    pub running: bool,
    pub mode: AppMode,
    pub focus: Focus,
    pub floor: FloorPlan,
    pub controller: CartController,
    pub config: AppConfig,

    // Highlighted rows
    pub floor_cursor: usize,
    pub cart_cursor: usize,
    pub floor_offset: usize,

    // Message for status line
    pub message: Option<String>,

    pub hit_targets: Vec<HitTarget>,
}

impl AppState {
    pub fn new(config: AppConfig, floor: FloorPlan) -> Self {
        let controller = CartController::new(config.view_labels());

        Self {
            running: true,
            mode: AppMode::Normal,
            focus: Focus::Floor,
            floor,
            controller,
            config,
            floor_cursor: 0,
            cart_cursor: 0,
            floor_offset: 0,
            message: None,
            hit_targets: Vec::new(),
        }
    }

    /// Loads the configured floor file, or the demo floor when none is set.
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let floor = match config.floor_file {
            Some(ref path) => parser::load_floor(path)?,
            None => FloorPlan::demo(),
        };
        Ok(Self::new(config, floor))
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn control_at(&self, column: u16, row: u16) -> Option<&Control> {
        self.hit_targets
            .iter()
            .find(|target| target.contains(column, row))
            .map(|target| &target.control)
    }

    /// Keeps both cursors inside their lists after the cart changes size.
    pub fn clamp_cursors(&mut self) {
        let cart_len = self.controller.cart().len();
        self.cart_cursor = self.cart_cursor.min(cart_len.saturating_sub(1));
        self.floor_cursor = self.floor_cursor.min(self.floor.len().saturating_sub(1));
    }
}
