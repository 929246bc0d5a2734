use super::{MsgValueError, UnaryOp};
use crate::secp256k1::commit;

use std::fmt::{Display, Formatter, Result};

/// Maps `P || payload` to `[P + sha256(P || payload)·G]ₓ` for a compressed
/// secp256k1 point `P`.
///
/// The operation is unary rather than taking the point as an argument so
/// that a timestamp covers the point as well as the payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Secp256k1Commitment;

impl Secp256k1Commitment {
    pub const TAG: u8 = 0x09;
    pub const TAG_NAME: &'static str = "secp256k1commitment";
}

impl UnaryOp for Secp256k1Commitment {
    fn tag(&self) -> u8 {
        Self::TAG
    }

    fn tag_name(&self) -> &'static str {
        Self::TAG_NAME
    }

    fn do_op_call(&self, msg: &[u8]) -> std::result::Result<Vec<u8>, MsgValueError> {
        Ok(commit(msg)?.to_vec())
    }
}

impl Display for Secp256k1Commitment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(Self::TAG_NAME)
    }
}
