//! Delivery sinks for the rendered shopping list

pub mod console;
pub mod file;
pub mod telegram;
pub mod composite;

// Re-export for convenience
pub use console::ConsoleSink;
pub use file::FileSink;
pub use telegram::TelegramSink;
pub use composite::CompositeSink;
