//! Multi-label token encoding and the fixed feature-column layout.
//!
//! The feature row is: one 0/1 column per interest vocabulary token, one
//! 0/1 column per skill vocabulary token, then the three raw score
//! columns. Column order is fixed at training time; inference aligns to
//! it exactly. Interests and skills get two *independent* encoders — the
//! vocabularies are distinct and a token never lights a column in the
//! other block.

use serde::{Deserialize, Serialize};

use crate::dataset::TrainingRow;

/// Names of the three numeric score columns, in feature order.
pub const SCORE_COLUMNS: [&str; 3] = ["Maths", "CS", "English"];

/// A fitted multi-label binarizer: a sorted vocabulary and a 0/1
/// transform over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEncoder {
    vocab: Vec<String>,
}

impl TokenEncoder {
    /// Fit a vocabulary from token sets: the sorted, deduplicated union of
    /// all trimmed, non-empty tokens.
    pub fn fit<'a, I, T>(token_sets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = &'a str>,
    {
        let mut vocab: Vec<String> = token_sets
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        vocab.sort();
        vocab.dedup();
        Self { vocab }
    }

    /// 0/1 row over the vocabulary. Tokens outside the vocabulary are
    /// silently dropped; matching is case-sensitive after trimming.
    pub fn transform(&self, tokens: &[String]) -> Vec<f32> {
        let mut row = vec![0.0; self.vocab.len()];
        for token in tokens {
            if let Ok(idx) = self.vocab.binary_search_by(|v| v.as_str().cmp(token.trim())) {
                row[idx] = 1.0;
            }
        }
        row
    }

    pub fn vocab(&self) -> &[String] {
        &self.vocab
    }

    pub fn len(&self) -> usize {
        self.vocab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocab.is_empty()
    }
}

/// The fixed feature layout established at training time: the interest
/// encoder block, the skill encoder block, then the score columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    pub interests: TokenEncoder,
    pub skills: TokenEncoder,
}

impl FeatureSchema {
    /// Fit both encoders from dataset rows. Each row contributes exactly
    /// one interest token and its full skill list.
    pub fn fit(rows: &[TrainingRow]) -> Self {
        let interests = TokenEncoder::fit(rows.iter().map(|r| [r.interest.as_str()]));
        let skills = TokenEncoder::fit(
            rows.iter()
                .map(|r| r.skills.iter().map(String::as_str).collect::<Vec<_>>()),
        );
        Self { interests, skills }
    }

    /// The full ordered column list, score columns last.
    pub fn column_order(&self) -> Vec<String> {
        self.interests
            .vocab()
            .iter()
            .chain(self.skills.vocab())
            .cloned()
            .chain(SCORE_COLUMNS.iter().map(|s| s.to_string()))
            .collect()
    }

    /// Total feature-row width.
    pub fn width(&self) -> usize {
        self.interests.len() + self.skills.len() + SCORE_COLUMNS.len()
    }

    /// Encode one observation into a feature row aligned to
    /// [`FeatureSchema::column_order`]. Pure and deterministic; unknown
    /// tokens never affect the row.
    pub fn encode(
        &self,
        interest: &str,
        skills: &[String],
        maths: u8,
        cs: u8,
        english: u8,
    ) -> Vec<f32> {
        let mut row = Vec::with_capacity(self.width());
        row.extend(self.interests.transform(&[interest.trim().to_string()]));
        row.extend(self.skills.transform(skills));
        row.push(f32::from(maths));
        row.push(f32::from(cs));
        row.push(f32::from(english));
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(interest: &str, skills: &[&str]) -> TrainingRow {
        TrainingRow {
            interest: interest.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            maths: 70,
            cs: 70,
            english: 70,
            career: interest.to_string(),
        }
    }

    fn schema() -> FeatureSchema {
        FeatureSchema::fit(&[
            row("Data Scientist", &["Python", "SQL"]),
            row("Web Developer", &["HTML", "CSS"]),
            row("AI Engineer", &["Python", "TensorFlow"]),
        ])
    }

    #[test]
    fn vocab_is_sorted_and_deduplicated() {
        let enc = TokenEncoder::fit(vec![vec!["SQL", "Python"], vec!["Python", "HTML"]]);
        assert_eq!(enc.vocab(), ["HTML", "Python", "SQL"]);
    }

    #[test]
    fn unknown_tokens_never_affect_the_row() {
        let enc = TokenEncoder::fit(vec![vec!["Python", "SQL"]]);
        let with_unknown =
            enc.transform(&["Python".to_string(), "Basketweaving".to_string()]);
        let without = enc.transform(&["Python".to_string()]);
        assert_eq!(with_unknown, without);
    }

    #[test]
    fn transform_trims_but_is_case_sensitive() {
        let enc = TokenEncoder::fit(vec![vec!["Python"]]);
        assert_eq!(enc.transform(&[" Python ".to_string()]), vec![1.0]);
        assert_eq!(enc.transform(&["python".to_string()]), vec![0.0]);
    }

    #[test]
    fn column_order_ends_with_score_columns() {
        let schema = schema();
        let cols = schema.column_order();
        assert_eq!(cols.len(), schema.width());
        assert_eq!(&cols[cols.len() - 3..], ["Maths", "CS", "English"]);
        // Interest block first, sorted.
        assert_eq!(
            &cols[..3],
            ["AI Engineer", "Data Scientist", "Web Developer"]
        );
    }

    #[test]
    fn interest_does_not_light_skill_columns() {
        // "Python" exists only in the skill vocabulary; an interest of
        // "Python" must not set any skill column.
        let schema = schema();
        let row = schema.encode("Python", &[], 70, 70, 70);
        let zeros = schema.width() - 3;
        assert!(row[..zeros].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn encode_is_deterministic() {
        let schema = schema();
        let skills = vec!["Python".to_string(), "SQL".to_string()];
        let a = schema.encode("Data Scientist", &skills, 50, 70, 80);
        let b = schema.encode("Data Scientist", &skills, 50, 70, 80);
        assert_eq!(a, b);
    }

    #[test]
    fn scores_pass_through_raw() {
        let schema = schema();
        let row = schema.encode("Data Scientist", &[], 50, 70, 80);
        let w = schema.width();
        assert_eq!(&row[w - 3..], [50.0, 70.0, 80.0]);
    }
}
