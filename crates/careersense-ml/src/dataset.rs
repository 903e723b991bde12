//! In-memory training dataset.

/// One labelled dataset row: a stated interest, the user's skills, three
/// subject scores, and the target career label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRow {
    pub interest: String,
    pub skills: Vec<String>,
    pub maths: u8,
    pub cs: u8,
    pub english: u8,
    pub career: String,
}

/// A labelled dataset ready for training.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub rows: Vec<TrainingRow>,
}

impl Dataset {
    pub fn new(rows: Vec<TrainingRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct career labels, sorted. This is the classifier's class order.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.rows.iter().map(|r| r.career.clone()).collect();
        labels.sort();
        labels.dedup();
        labels
    }
}

/// Split a semicolon-delimited skill string into trimmed, non-empty tokens.
///
/// Shared by the dataset loader and the CLI so both sides tokenize
/// identically.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_skills_trims_and_drops_empties() {
        assert_eq!(
            split_skills(" Python ; SQL ;;  ; HTML"),
            vec!["Python", "SQL", "HTML"]
        );
        assert!(split_skills("").is_empty());
        assert!(split_skills(" ; ; ").is_empty());
    }

    #[test]
    fn labels_are_sorted_and_distinct() {
        let rows = vec![
            TrainingRow {
                interest: "Web Developer".into(),
                skills: vec!["HTML".into()],
                maths: 70,
                cs: 70,
                english: 70,
                career: "Web Developer".into(),
            },
            TrainingRow {
                interest: "AI Engineer".into(),
                skills: vec!["Python".into()],
                maths: 80,
                cs: 90,
                english: 60,
                career: "AI Engineer".into(),
            },
            TrainingRow {
                interest: "Web Developer".into(),
                skills: vec!["CSS".into()],
                maths: 60,
                cs: 65,
                english: 70,
                career: "Web Developer".into(),
            },
        ];
        let labels = Dataset::new(rows).labels();
        assert_eq!(labels, vec!["AI Engineer", "Web Developer"]);
    }
}
