//! Shared domain types for the campaign decision pipeline.
//!
//! Free-text inputs (risk tiers, social networks, legacy segment names)
//! are normalized once at the boundary via the `normalize` constructors
//! here; downstream business logic only ever matches on closed enums.

pub mod campaign;
pub mod client;
pub mod csv;
pub mod profile;
pub mod run;
pub mod segment;

pub use campaign::{Campaign, Channel, TemplateId};
pub use client::{ClientRecord, RiskTier, SocialNetwork};
pub use profile::{ActivityFrequency, SocialProfile};
pub use run::{AgentResult, LogEntry, ResultRow, Stage};
pub use segment::{Segment, SegmentCategory};
