// SPDX-FileCopyrightText: 2026 Jonathan Steele <hello@jonathansteele.net>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors reported while resolving a holiday definition to a date.
///
/// Both kinds are terminal for the definition being resolved: calendar
/// parsing is deterministic, so there is nothing to retry. Batch callers
/// should skip or report the offending record and keep going.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The definition carries neither a complete month/day pair nor a
    /// usable rule note.
    #[error("holiday {name:?} must provide a month/day pair or a rule note")]
    InvalidDefinition {
        /// Display name of the offending holiday.
        name: String,
    },

    /// A rule note was present but could not be interpreted.
    #[error("unparsable rule {note:?}: {reason}")]
    UnparsableRule {
        /// The note as supplied by the catalog.
        note: String,

        /// Which token class was missing.
        reason: UnparsableReason,
    },
}

/// Why a rule note failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnparsableReason {
    /// No full month name was found in the note.
    #[error("no month name found")]
    NoMonth,

    /// No ordinal keyword (last/first/second/third/fourth) was found.
    #[error("no ordinal keyword found")]
    NoOrdinal,
}
