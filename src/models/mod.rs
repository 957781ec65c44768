//! Data models for the case-study presentation
//!
//! This module contains the core data structures:
//! - Static record types consumed by the section views
//! - Enums for navigation state

pub mod enums;
pub mod records;

// Re-exports for convenient access
pub use enums::NavigationTab;
pub use records::{
    BusinessRule, DisputeTimeDatum, Kpi, MilestoneDetails, Section, TicketVolumeDatum, UserStory,
};
