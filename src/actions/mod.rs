mod cart;
mod help;
mod movement;

use crate::app::AppState;
use crate::cart::Control;

// Re-export all public functions from submodules
pub use cart::*;
pub use help::*;
pub use movement::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Application control
    Quit,

    // Movement
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    ToggleFocus,

    // Cart
    Activate,
    AddHighlighted,
    RemoveHighlighted,
    Press(Control),

    // Help
    ShowHelp,
    CloseHelp,
}

pub fn execute_action(action: Action, app: &mut AppState) {
    match action {
        Action::Quit => app.running = false,

        // Movement actions
        Action::MoveUp => movement::move_up(app),
        Action::MoveDown => movement::move_down(app),
        Action::GoToTop => movement::go_to_top(app),
        Action::GoToBottom => movement::go_to_bottom(app),
        Action::ToggleFocus => movement::toggle_focus(app),

        // Cart operations
        Action::Activate => cart::activate(app),
        Action::AddHighlighted => cart::add_highlighted(app),
        Action::RemoveHighlighted => cart::remove_highlighted(app),
        Action::Press(control) => cart::press(app, &control),

        // Help
        Action::ShowHelp => help::show_help(app),
        Action::CloseHelp => help::close_help(app),
    }
}
