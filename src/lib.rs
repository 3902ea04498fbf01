pub mod app;
pub mod cart;
pub mod config;
pub mod errors;
pub mod floor;
pub mod logging;
pub mod model;
pub mod parser;
pub mod ui;
pub mod view;

// Internal modules
pub mod actions;
pub mod event;

// Re-export commonly used types
pub use app::{AppMode, AppState, Focus};
pub use cart::{CartController, Control, Notice};
pub use config::AppConfig;
pub use floor::{BoothSurface, FloorPlan};
pub use model::{Booth, BoothId, CartItem};
