pub mod career;
pub mod matching;
pub mod recommendation;

pub use career::{Career, CareerInfo};
pub use matching::{CareerMatch, alternate_matches, match_percent, skill_overlap};
pub use recommendation::{LOW_SCORE_THRESHOLD, Recommendation, ScoreFlags};
