//! Application state module

mod app_state;
mod forms;
mod submissions;

pub use app_state::*;
pub use forms::*;
pub use submissions::*;
