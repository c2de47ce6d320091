//! Error type for roster lookups, generation and session updates.

use thiserror::Error;

use crate::model::Variant;

/// Errors raised by the roster core.
///
/// A lookup miss is never an error: [`OccurrenceStore::has_occurred`]
/// returns `Ok(false)` for a well-formed combination with no record. These
/// variants cover malformed input and invalid session transitions only.
///
/// [`OccurrenceStore::has_occurred`]: crate::OccurrenceStore::has_occurred
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Fewer than two member ids were supplied.
    #[error("a combination needs at least 2 members, got {0}")]
    TooFewMembers(usize),
    /// More members than the variant renders.
    #[error("a combination has at most {max} members, got {len}")]
    TooManyMembers {
        /// Number of ids supplied.
        len: usize,
        /// Largest size the variant supports.
        max: usize,
    },
    /// The same id appears twice.
    #[error("duplicate member id {0}")]
    DuplicateMember(usize),
    /// An id does not name a roster entry.
    #[error("member id {id} is outside the roster of {roster}")]
    MemberOutOfRange {
        /// Offending id.
        id: usize,
        /// Roster size N.
        roster: usize,
    },
    /// Generator bounds violate `min <= max <= n`.
    #[error("invalid size range {min}..={max} for a roster of {n}")]
    InvalidSizeRange {
        /// Requested minimum size.
        min: usize,
        /// Requested maximum size.
        max: usize,
        /// Roster size.
        n: usize,
    },
    /// A size that the active variant does not render.
    #[error("size {0} is not rendered by this variant")]
    UnsupportedSize(usize),
    /// Required-member filtering was requested on a variant without it.
    #[error("the {} variant has no required-member filter", .0.as_str())]
    RequiredMembersUnsupported(Variant),
    /// A size bucket already holds as many required members as its size.
    #[error("size {size} bucket already requires {size} members")]
    SelectionFull {
        /// Bucket size, which is also its cap.
        size: usize,
    },
    /// Completion rate requested over an empty universe.
    #[error("completion rate is undefined with zero combinations")]
    EmptyUniverse,
    /// Unrecognised variant name.
    #[error("unknown variant {0:?} (expected \"full\" or \"restricted\")")]
    UnknownVariant(String),
    /// Unrecognised size filter.
    #[error("unknown size filter {0:?} (expected \"all\" or a size)")]
    InvalidSizeFilter(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RosterError>;
