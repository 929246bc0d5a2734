/// Errors raised while decoding points or computing a commitment.
///
/// Every failure is deterministic in its input; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Secp256k1Error {
    /// The commitment input cannot hold a compressed point.
    #[error("missing secp256k1 point: need at least {expected} bytes, got {actual}")]
    InputTooShort { expected: usize, actual: usize },

    /// Wrong length or unknown prefix byte for a compressed point.
    #[error("incorrectly formatted public key: {0}")]
    InvalidEncoding(&'static str),

    /// The coordinates do not describe a point of the curve.
    #[error("invalid secp256k1 point: {0}")]
    PointNotOnCurve(&'static str),
}
