//! Request-time inference: encode, classify, derive feedback.

use careersense_core::{Career, Recommendation, ScoreFlags, alternate_matches};

use crate::MlError;
use crate::trainer::TrainedModel;

/// The inference pipeline over one loaded model.
///
/// Holds the trained artifacts read-only; [`Pipeline::recommend`] is a
/// pure function of its inputs and those artifacts.
pub struct Pipeline {
    model: TrainedModel,
}

impl Pipeline {
    pub fn new(model: TrainedModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &TrainedModel {
        &self.model
    }

    /// Produce a full recommendation for one user.
    ///
    /// Unknown skill or interest tokens never affect the feature row; an
    /// interest outside the catalogue skips the gap analysis; a predicted
    /// label outside the catalogue skips the detail lookup. None of these
    /// are errors.
    pub fn recommend(
        &self,
        interest: &str,
        skills: &[String],
        maths: u8,
        cs: u8,
        english: u8,
    ) -> Result<Recommendation, MlError> {
        let interest = interest.trim();
        let features = self.model.schema.encode(interest, skills, maths, cs, english);
        let label = self.model.tree.predict(&features)?.to_string();

        let career = Career::from_label(&label);
        let skill_gap = Career::from_label(interest).map(|c| {
            c.required_skills()
                .iter()
                .filter(|req| !skills.iter().any(|s| s == *req))
                .map(|s| s.to_string())
                .collect()
        });
        let alternates = alternate_matches(skills, career);

        tracing::debug!(%label, alternates = alternates.len(), "recommendation computed");

        Ok(Recommendation {
            label,
            career,
            score_flags: ScoreFlags::from_scores(maths, cs, english),
            skill_gap,
            alternates,
        })
    }
}
