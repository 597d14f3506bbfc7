//! Pre-event snapshots of evaluation state.
//!
//! A snapshot captures the portion of engine state that `undo` restores:
//! the display string and the pending operand/operation pair. The engine
//! pushes one snapshot before processing each input event and pops the
//! most recent on `undo`, giving single-step-back restoration.

use crate::core::BinaryOp;
use serde::{Deserialize, Serialize};

/// Serializable capture of {display, pending operand, pending operation}.
///
/// Memory and history are deliberately not part of a snapshot: undo steps
/// back through evaluation state only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The display string at capture time
    pub display: String,
    /// The captured left-hand operand, if an operation was pending
    pub pending_operand: Option<f64>,
    /// The pending binary operation, if any
    pub pending_op: Option<BinaryOp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_comparable() {
        let snapshot = Snapshot {
            display: "5".to_string(),
            pending_operand: Some(5.0),
            pending_op: Some(BinaryOp::Add),
        };

        assert_eq!(snapshot.clone(), snapshot);
    }

    #[test]
    fn snapshot_serializes_correctly() {
        let snapshot = Snapshot {
            display: "3.5".to_string(),
            pending_operand: None,
            pending_op: None,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: Snapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, deserialized);
    }
}
