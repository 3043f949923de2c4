pub mod busy;
pub mod markup;
pub mod panels;

pub use busy::{BusyGuard, BusyIndicator};
pub use panels::SessionPanels;
