// Library crate - exports the relay router, handlers and upstream clients

pub mod api;
pub mod aster;
pub mod config;
pub mod error;
pub mod llm;
pub mod server;
pub mod state;
pub mod upstream;

// Re-export commonly used types
pub use config::{Args, Config};
pub use error::RelayError;
pub use state::AppState;
