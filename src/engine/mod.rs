//! Calculator engine: the imperative shell around the pure core.
//!
//! This module owns the mutable state the presentation layer reads,
//! driving the pure evaluation functions one input event at a time.
//!
//! # Key Concepts
//!
//! - **Calculator**: The single entry point; dispatches input events
//! - **Snapshot**: Pre-event captures enabling single-step undo
//! - **Memory register**: A numeric accumulator that survives clears
//!
//! The engine is synchronous with no suspension points: every event is
//! handled to completion before the next is accepted. A multi-client
//! front end must add its own mutual exclusion around the engine.

mod machine;
mod memory;
mod snapshot;

pub use machine::Calculator;
pub use memory::MemoryRegister;
pub use snapshot::Snapshot;
