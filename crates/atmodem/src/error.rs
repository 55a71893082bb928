//! The crate error type.
//!
//! Almost nothing in this crate can fail: tokenizers degrade to zero values
//! and semantic parsers default on unrecognized text, because a noisy modem
//! must never wedge the receive path. The two conditions a caller genuinely
//! needs to distinguish are reported here.

use thiserror::Error;

/// A reportable parse failure.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An SMS status token matched none of the defined literals, so the
    /// record's status field was left untouched.
    #[error("unrecognized SMS status literal")]
    InvalidSmsStatus,

    /// A storage report ended before all of its expected lists.
    #[error("storage report ended before its list")]
    MissingStorageList,
}
