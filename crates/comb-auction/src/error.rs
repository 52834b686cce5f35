//! Error taxonomy of the selection core.

/// Fatal conditions that abort the whole selection with no partial result.
///
/// The core performs no local recovery: any of these propagates out of the
/// entry point and the caller gets no output at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input batch contained no solutions at all.
    #[error("winner selection requires a non-empty batch of solutions")]
    EmptyBatch,
    /// Summing trade scores exceeded the range of a 256-bit unsigned integer.
    #[error("directed token pair score aggregation overflowed 256 bits")]
    ArithmeticOverflow,
}
