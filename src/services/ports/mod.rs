//! Service ports: traits + data contracts.

pub mod config;
pub mod settings;
pub mod sink;

pub use config::ConsoleConfig;
pub use settings::ConsoleSettings;
pub use sink::OutputSink;
