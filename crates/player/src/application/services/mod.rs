//! Application services
//!
//! Services depend on the `Api` wrapper over the outbound port, not on
//! concrete infrastructure implementations.

pub mod quest_service;

pub use quest_service::QuestService;
