pub mod forms;
pub mod state;

pub use state::app_state::AppState;
