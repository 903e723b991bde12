//! Terminal report rendering.
//!
//! Prints the recommendation as a sectioned card: headline, description,
//! per-subject warnings, skill-gap advice, alternate matches with a bar
//! chart of the top three, and the numbered learning plan. Sections whose
//! data is absent are omitted entirely.

use careersense_core::{LOW_SCORE_THRESHOLD, Recommendation};

/// Alternate matches shown in the bar chart.
const CHART_TOP_N: usize = 3;

/// Bar width, in characters, of a 100% match.
const CHART_FULL_WIDTH: usize = 40;

pub fn print_report(
    recommendation: &Recommendation,
    interest: &str,
    maths: u8,
    cs: u8,
    english: u8,
) {
    println!("=== Suggested Career Path: {} ===", recommendation.label);
    println!();

    if let Some(career) = recommendation.career {
        let info = career.info();
        println!("About {}: {}", career, info.description);
        println!("Learn: {}", info.learning_topics.join(", "));
        println!("Resource: {}", info.resource_url);
        println!();
    }

    print_score_warnings(recommendation, maths, cs, english);
    print_skill_gap(recommendation, interest);
    print_alternates(recommendation);
    print_learning_plan(recommendation);
}

fn print_score_warnings(recommendation: &Recommendation, maths: u8, cs: u8, english: u8) {
    let flags = recommendation.score_flags;
    if !flags.any() {
        return;
    }

    println!("Feedback");
    if flags.maths {
        println!(
            "  Maths marks are low ({maths} < {LOW_SCORE_THRESHOLD}). Work on problem-solving and logical reasoning."
        );
    }
    if flags.cs {
        println!(
            "  CS marks are low ({cs} < {LOW_SCORE_THRESHOLD}). Strengthen your programming and algorithms."
        );
    }
    if flags.english {
        println!(
            "  English marks are low ({english} < {LOW_SCORE_THRESHOLD}). Improve your writing and communication skills."
        );
    }
    println!();
}

fn print_skill_gap(recommendation: &Recommendation, interest: &str) {
    // Unknown interest: no gap section at all.
    let Some(gap) = &recommendation.skill_gap else {
        return;
    };

    if gap.is_empty() {
        println!("You already have strong skills aligned with your interest in {interest}.");
    } else {
        println!("To pursue {interest}, consider learning: {}.", gap.join(", "));
    }
    println!();
}

fn print_alternates(recommendation: &Recommendation) {
    println!("You might also be great at:");
    if recommendation.alternates.is_empty() {
        println!("  No strong alternate matches found — but you're on the right path!");
        println!();
        return;
    }

    for m in &recommendation.alternates {
        println!(
            "  {} — {}% match based on: {}",
            m.career,
            m.percent,
            m.matched.join(", ")
        );
    }
    println!();

    println!("Top alternate career matches:");
    let top = recommendation.top_alternates(CHART_TOP_N);
    let name_width = top
        .iter()
        .map(|m| m.career.label().len())
        .max()
        .unwrap_or(0);
    for m in top {
        println!(
            "  {:<name_width$} {} {}%",
            m.career.label(),
            bar(m.percent),
            m.percent
        );
    }
    println!();
}

fn print_learning_plan(recommendation: &Recommendation) {
    let Some(career) = recommendation.career else {
        return;
    };
    println!("Personalized learning plan for {}:", career);
    for (i, topic) in career.info().learning_topics.iter().enumerate() {
        println!("  {}. {topic}", i + 1);
    }
}

/// A bar scaled so 100% fills [`CHART_FULL_WIDTH`] characters; any
/// non-zero percentage draws at least one.
fn bar(percent: u8) -> String {
    let width = (usize::from(percent) * CHART_FULL_WIDTH).div_ceil(100);
    "#".repeat(width)
}
