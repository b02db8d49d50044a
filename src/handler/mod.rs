mod config;
mod console;
mod handler;
mod listener;
mod tests;

pub use config::*;
pub use console::*;
pub use handler::*;
pub use listener::*;
