//! Timestamp proof operations.
//!
//! Operations are the edges of a timestamp tree: each one maps a message
//! to a new message. Only unary operations (no argument besides the
//! message) live here, together with the tag registry used to decode them.
//!
//! - [`UnaryOp`] is the contract every operation implements. Its provided
//!   [`call`](UnaryOp::call) enforces the message and result limits shared
//!   by all operations.
//! - [`Secp256k1Commitment`] is the tweaked-public-key commitment, tag
//!   `0x09`.
//! - [`OpRegistry`] maps tag bytes back to operation instances.

mod registry;
mod secp256k1;

pub use registry::{DeserializationError, OpRegistry, RegistryError};
pub use secp256k1::Secp256k1Commitment;

use crate::secp256k1::Secp256k1Error;

use std::fmt::Debug;

use tracing::debug;

/// Default upper bound on the length of a message an operation accepts.
///
/// This bounds the memory a verifier needs for any single step of a path.
pub const MAX_MSG_LENGTH: usize = 4096;

/// Default upper bound on the length of an operation's result.
pub const MAX_RESULT_LENGTH: usize = 4096;

/// Raised when an operation cannot be applied to a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MsgValueError {
    #[error("message too long; {len} > {max}")]
    MessageTooLong { len: usize, max: usize },

    #[error("result too long; {len} > {max}")]
    ResultTooLong { len: usize, max: usize },

    /// An empty result would let the commitment graph contain a cycle.
    #[error("operation produced an empty result")]
    EmptyResult,

    #[error(transparent)]
    Commitment(#[from] Secp256k1Error),
}

/// An operation acting on a single message.
pub trait UnaryOp: Debug + Send + Sync {
    /// One-byte tag identifying the operation in serialized proofs.
    fn tag(&self) -> u8;

    /// Stable symbolic name, as printed in human-readable proofs.
    fn tag_name(&self) -> &'static str;

    fn max_msg_length(&self) -> usize {
        MAX_MSG_LENGTH
    }

    fn max_result_length(&self) -> usize {
        MAX_RESULT_LENGTH
    }

    /// The transformation itself, without the shared length checks.
    fn do_op_call(&self, msg: &[u8]) -> Result<Vec<u8>, MsgValueError>;

    /// Applies the operation to `msg`.
    ///
    /// # Errors
    ///
    /// [`MsgValueError`] if the message is too long, if the operation
    /// rejects it, or if the result is empty or too long.
    fn call(&self, msg: &[u8]) -> Result<Vec<u8>, MsgValueError> {
        if msg.len() > self.max_msg_length() {
            debug!(op = self.tag_name(), len = msg.len(), "message exceeds operation limit");

            return Err(MsgValueError::MessageTooLong {
                len: msg.len(),
                max: self.max_msg_length(),
            });
        }

        let result = self.do_op_call(msg).inspect_err(|err| {
            debug!(op = self.tag_name(), %err, "operation rejected message");
        })?;

        if result.is_empty() {
            return Err(MsgValueError::EmptyResult);
        }

        if result.len() > self.max_result_length() {
            return Err(MsgValueError::ResultTooLong {
                len: result.len(),
                max: self.max_result_length(),
            });
        }

        Ok(result)
    }

    /// Writes the operation's serialized form, which is just its tag.
    fn serialize(&self, out: &mut Vec<u8>) {
        out.push(self.tag());
    }
}
