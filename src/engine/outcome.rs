//! Outcome determination for a single review.
//!
//! Two-step protocol: an automatic exact-match check, then (only on a
//! mismatch) a reveal of the expected answer and an explicit yes/no
//! override from the operator, defaulting to no.

/// First-pass judgment of a typed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCheck {
    /// Response equals the expected answer exactly; the review is correct
    /// with no further interaction.
    Match,
    /// Response differs. The caller reveals the expected answer and asks
    /// for a manual override before the outcome is settled.
    Mismatch,
}

/// Compares a typed response against the expected back text. Byte-exact
/// and case-sensitive; no trimming or normalization.
pub fn check_response(expected: &str, response: &str) -> ResponseCheck {
    if response == expected {
        ResponseCheck::Match
    } else {
        ResponseCheck::Mismatch
    }
}
