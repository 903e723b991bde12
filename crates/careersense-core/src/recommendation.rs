//! The recommendation bundle produced by one inference run.

use crate::career::Career;
use crate::matching::CareerMatch;

/// Scores strictly below this mark raise a low-performance warning.
pub const LOW_SCORE_THRESHOLD: u8 = 60;

/// Per-subject low-performance flags, each derived independently from its
/// own score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreFlags {
    pub maths: bool,
    pub cs: bool,
    pub english: bool,
}

impl ScoreFlags {
    /// Flag each subject whose score falls below [`LOW_SCORE_THRESHOLD`].
    pub fn from_scores(maths: u8, cs: u8, english: u8) -> Self {
        Self {
            maths: maths < LOW_SCORE_THRESHOLD,
            cs: cs < LOW_SCORE_THRESHOLD,
            english: english < LOW_SCORE_THRESHOLD,
        }
    }

    pub fn any(&self) -> bool {
        self.maths || self.cs || self.english
    }
}

/// Everything one prediction run derives for the user.
///
/// Optional fields encode the silent-ignore cases: a predicted label
/// outside the catalogue leaves `career` as `None` (no description or
/// learning plan), and an interest outside the catalogue leaves
/// `skill_gap` as `None` (no gap section at all).
#[derive(Debug, Clone)]
pub struct Recommendation {
    /// Raw label the classifier produced.
    pub label: String,
    /// Catalogue entry for the label, when it is one of the known ten.
    pub career: Option<Career>,
    pub score_flags: ScoreFlags,
    /// Required skills of the *stated interest* the user does not yet hold.
    /// `None` when the interest is not a known career; `Some(empty)` when
    /// every required skill is already present.
    pub skill_gap: Option<Vec<String>>,
    /// Non-predicted careers with at least two overlapping skills, sorted
    /// descending by match percentage.
    pub alternates: Vec<CareerMatch>,
}

impl Recommendation {
    /// Top alternates for charting, at most `n`, order preserved.
    pub fn top_alternates(&self, n: usize) -> &[CareerMatch] {
        &self.alternates[..self.alternates.len().min(n)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_flag_derives_only_from_its_own_score() {
        let flags = ScoreFlags::from_scores(50, 70, 70);
        assert!(flags.maths && !flags.cs && !flags.english);

        let flags = ScoreFlags::from_scores(70, 59, 70);
        assert!(!flags.maths && flags.cs && !flags.english);

        let flags = ScoreFlags::from_scores(70, 70, 0);
        assert!(!flags.maths && !flags.cs && flags.english);
    }

    #[test]
    fn threshold_is_strict() {
        let flags = ScoreFlags::from_scores(60, 60, 60);
        assert!(!flags.any());
    }

    #[test]
    fn top_alternates_truncates_without_reordering() {
        let rec = Recommendation {
            label: "Data Scientist".into(),
            career: Some(Career::DataScientist),
            score_flags: ScoreFlags::default(),
            skill_gap: Some(vec![]),
            alternates: vec![
                CareerMatch {
                    career: Career::AiEngineer,
                    percent: 100,
                    matched: vec!["Python", "TensorFlow"],
                },
                CareerMatch {
                    career: Career::WebDeveloper,
                    percent: 67,
                    matched: vec!["HTML", "CSS"],
                },
            ],
        };
        assert_eq!(rec.top_alternates(3).len(), 2);
        assert_eq!(rec.top_alternates(1).len(), 1);
        assert_eq!(rec.top_alternates(1)[0].career, Career::AiEngineer);
    }
}
