//! Value objects

/// Bot settings
pub mod settings;
/// Message destinations
pub mod target;

pub use settings::BotSettings;
pub use target::MessageTarget;
