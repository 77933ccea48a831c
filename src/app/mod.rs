mod root;
mod state;

pub(crate) use state::AppState;
pub use state::FormState;

pub use root::App;
