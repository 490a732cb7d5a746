//! Selection error types.

/// Errors that end a selection step without a choice.
///
/// A name that matches nothing is not an error: the menu asks again.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// Input ended before a valid choice was made
    #[error("input closed before a selection was made")]
    InputClosed,

    /// There was nothing to choose from
    #[error("no {0}s to choose from")]
    EmptyListing(&'static str),

    /// Reading input or writing the menu failed
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
