//! The campaign decision pipeline: CSV ingestion plus the four-stage
//! profile → segment → campaign → HTML run, sequenced by [`Pipeline`].
//!
//! Every stage except profile synthesis is deterministic; synthesis draws
//! from an injected random source so tests can seed it.

pub mod composer;
pub mod error;
pub mod ingest;
pub mod pipeline;
pub mod profiler;
pub mod segmenter;
pub mod selector;

pub use error::IngestError;
pub use ingest::parse_clients;
pub use pipeline::Pipeline;
