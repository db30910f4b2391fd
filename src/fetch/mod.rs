//! Fetch Module
//!
//! Fetch-and-populate orchestration around the LRU cache, plus the
//! producers it calls on a miss.

mod orchestrator;
mod producer;
pub mod sequence;

pub use orchestrator::{FetchOrchestrator, Resolved};
pub use producer::{IterativeProducer, Producer, RecursiveProducer, RemoteProducer};
