//! Skill-overlap scoring against the career catalogue.
//!
//! A match percentage is the share of a career's required skills the user
//! already holds, rounded half-up to an integer. Alternate-career ranking
//! keeps every non-predicted career with at least two overlapping skills,
//! sorted by percentage with catalogue order breaking ties.

use crate::career::Career;

/// Minimum overlapping skills for a career to count as an alternate match.
pub const MIN_OVERLAP: usize = 2;

/// An alternate-career suggestion with its match strength.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerMatch {
    pub career: Career,
    /// Integer percentage in [0, 100].
    pub percent: u8,
    /// The overlapping skills, in required-skill order.
    pub matched: Vec<&'static str>,
}

/// Skills both held by the user and required by the career, in
/// required-skill order.
pub fn skill_overlap(user_skills: &[String], required: &'static [&'static str]) -> Vec<&'static str> {
    required
        .iter()
        .copied()
        .filter(|req| user_skills.iter().any(|s| s == req))
        .collect()
}

/// Overlap count as an integer percentage of the required-skill count,
/// rounded half-up.
pub fn match_percent(overlap: usize, required: usize) -> u8 {
    if required == 0 {
        return 0;
    }
    // Half-up integer rounding; result cannot exceed 100 since
    // overlap <= required.
    ((overlap * 200 + required) / (2 * required)) as u8
}

/// Rank every career other than `predicted` by skill overlap.
///
/// Careers with fewer than [`MIN_OVERLAP`] overlapping skills are dropped.
/// The result is sorted descending by percentage; ties keep catalogue
/// order (the sort is stable and candidates are generated in
/// [`Career::ALL`] order). The full list is returned — chart truncation
/// is a display concern.
pub fn alternate_matches(user_skills: &[String], predicted: Option<Career>) -> Vec<CareerMatch> {
    let mut matches: Vec<CareerMatch> = Career::ALL
        .into_iter()
        .filter(|c| Some(*c) != predicted)
        .filter_map(|career| {
            let required = career.required_skills();
            let matched = skill_overlap(user_skills, required);
            if matched.len() < MIN_OVERLAP {
                return None;
            }
            let percent = match_percent(matched.len(), required.len());
            Some(CareerMatch {
                career,
                percent,
                matched,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.percent.cmp(&a.percent));
    matches
}
