//! Deterministic stream scoring over the answer log.
//!
//! This is the local fallback for the generator's recommendation
//! endpoint: a plain weight sum with a fixed tie-break and a fixed
//! confidence value. Identical answer sequences always yield identical
//! results.

use crate::domain::foundation::Percentage;

use super::answer::AnsweredQuestion;
use super::question::StreamTag;

/// Confidence reported by the fallback path.
///
/// The weight sum alone carries no calibrated confidence semantics, so
/// a fixed value is reported instead of a computed one.
pub const FALLBACK_SCORE: u8 = 75;

/// Sums each stream's weight across all answers.
pub fn stream_totals(answers: &[AnsweredQuestion]) -> [(StreamTag, u64); 4] {
    let mut totals = StreamTag::PRIORITY.map(|tag| (tag, 0u64));
    for answered in answers {
        for (tag, total) in totals.iter_mut() {
            *total += u64::from(answered.weights.get(*tag));
        }
    }
    totals
}

/// Classifies the answer log into a stream and a confidence score.
///
/// The winning stream is the strictly highest total. Ties resolve by the
/// fixed priority order Science > Commerce > Arts > Vocational: totals
/// are scanned in priority order and a later entry only wins with a
/// strictly greater total.
pub fn aggregate(answers: &[AnsweredQuestion]) -> (StreamTag, Percentage) {
    let totals = stream_totals(answers);

    let mut winner = totals[0];
    for candidate in &totals[1..] {
        if candidate.1 > winner.1 {
            winner = *candidate;
        }
    }

    (winner.0, Percentage::new(FALLBACK_SCORE))
}
