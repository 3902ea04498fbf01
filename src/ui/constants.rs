// Booth markers on the floor panel
pub const MARK_SELECTED: &str = "[x]";
pub const MARK_AVAILABLE: &str = "[ ]";
pub const MARK_PRE_BOOKED: &str = "[-]";

pub const STATUS_SELECTED: &str = "selected";
pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_PRE_BOOKED: &str = "pre-booked";

// Clickable control labels
pub const ADD_CONTROL: &str = "[Add]";
pub const REMOVE_CONTROL: &str = "[Remove]";
pub const CLEAR_CONTROL: &str = "[Clear cart]";

pub const FLOOR_TITLE: &str = " Floor ";
pub const CART_TITLE: &str = " Cart ";

// Total line plus clear control under the cart rows
pub const CART_FOOTER_HEIGHT: u16 = 2;
