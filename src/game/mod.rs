//! Game orchestration: turn order, terminal detection, history and clocks.

mod clock;
mod state;
mod status;

pub use clock::{format_time, Clock};
pub use state::{AppliedMove, GameState};
pub use status::TerminalStatus;
