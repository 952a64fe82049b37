// public modules
pub mod app;
pub mod cli;
pub mod error;
pub mod input;
pub mod settings;

// public uses
pub use app::{App, Options};
pub use settings::Settings;
