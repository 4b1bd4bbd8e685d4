//! Configuration system for hone.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod escalation_config;
pub mod hone_config;
pub mod pattern_config;

pub use escalation_config::EscalationConfig;
pub use hone_config::HoneConfig;
pub use pattern_config::PatternConfig;
