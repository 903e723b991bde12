//! The static career catalogue.
//!
//! Ten careers, each with a required-skill list, a short description, an
//! ordered learning plan, and a resource URL. The catalogue is compiled in,
//! loaded nowhere, and mutated never: every lookup is a `match` over the
//! [`Career`] enum, so adding an eleventh career is a compile error until
//! every table below covers it.

use serde::{Deserialize, Serialize};

/// One of the ten careers the classifier can recommend.
///
/// Variant order is the catalogue order, which is also the tie-break
/// order for alternate-match ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Career {
    AiEngineer,
    DataScientist,
    WebDeveloper,
    AppDeveloper,
    UxDesigner,
    CloudEngineer,
    CybersecurityAnalyst,
    Educator,
    GraphicDesigner,
    GameDeveloper,
}

/// Description, learning plan, and resource link for a career.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerInfo {
    /// One-sentence description of the role.
    pub description: &'static str,
    /// Ordered topics for the numbered learning plan.
    pub learning_topics: &'static [&'static str],
    /// External course/resource URL.
    pub resource_url: &'static str,
}

impl Career {
    /// All careers in catalogue order.
    pub const ALL: [Career; 10] = [
        Career::AiEngineer,
        Career::DataScientist,
        Career::WebDeveloper,
        Career::AppDeveloper,
        Career::UxDesigner,
        Career::CloudEngineer,
        Career::CybersecurityAnalyst,
        Career::Educator,
        Career::GraphicDesigner,
        Career::GameDeveloper,
    ];

    /// Display label, identical to the dataset's career label strings.
    pub fn label(&self) -> &'static str {
        match self {
            Career::AiEngineer => "AI Engineer",
            Career::DataScientist => "Data Scientist",
            Career::WebDeveloper => "Web Developer",
            Career::AppDeveloper => "App Developer",
            Career::UxDesigner => "UX Designer",
            Career::CloudEngineer => "Cloud Engineer",
            Career::CybersecurityAnalyst => "Cybersecurity Analyst",
            Career::Educator => "Educator",
            Career::GraphicDesigner => "Graphic Designer",
            Career::GameDeveloper => "Game Developer",
        }
    }

    /// Resolve a label back to a career.
    ///
    /// Exact, case-sensitive match. Unknown labels return `None` — callers
    /// degrade by omitting the dependent section, they never error.
    pub fn from_label(label: &str) -> Option<Career> {
        Career::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Skills required to pursue this career.
    pub fn required_skills(&self) -> &'static [&'static str] {
        match self {
            Career::AiEngineer => &["Python", "TensorFlow"],
            Career::DataScientist => &["Python", "SQL"],
            Career::WebDeveloper => &["HTML", "CSS", "JavaScript"],
            Career::AppDeveloper => &["Java", "Kotlin"],
            Career::UxDesigner => &["Creativity", "Figma"],
            Career::CloudEngineer => &["AWS", "DevOps"],
            Career::CybersecurityAnalyst => &["Networking", "Linux"],
            Career::Educator => &["Communication", "Patience"],
            Career::GraphicDesigner => &["Photoshop", "Illustrator"],
            Career::GameDeveloper => &["Unity", "C#"],
        }
    }

    /// Description, learning plan, and resource link.
    pub fn info(&self) -> &'static CareerInfo {
        match self {
            Career::AiEngineer => &CareerInfo {
                description: "Designs intelligent systems using machine learning and deep learning.",
                learning_topics: &["Python", "TensorFlow", "Neural Networks"],
                resource_url: "https://www.coursera.org/learn/machine-learning",
            },
            Career::DataScientist => &CareerInfo {
                description: "Analyzes data to extract insights using statistics and programming.",
                learning_topics: &["Python", "SQL", "Pandas"],
                resource_url: "https://www.kaggle.com/learn/data-science",
            },
            Career::WebDeveloper => &CareerInfo {
                description: "Builds and maintains websites and web apps.",
                learning_topics: &["HTML", "CSS", "JavaScript"],
                resource_url: "https://www.freecodecamp.org/learn",
            },
            Career::AppDeveloper => &CareerInfo {
                description: "Creates mobile applications for Android or iOS.",
                learning_topics: &["Java", "Kotlin", "Android Studio"],
                resource_url: "https://developer.android.com/courses",
            },
            Career::UxDesigner => &CareerInfo {
                description: "Designs user-friendly interfaces and experiences.",
                learning_topics: &["Figma", "Creativity", "Design Thinking"],
                resource_url: "https://www.coursera.org/specializations/ux-design",
            },
            Career::CloudEngineer => &CareerInfo {
                description: "Manages cloud infrastructure and services.",
                learning_topics: &["AWS", "DevOps", "Docker"],
                resource_url: "https://www.udemy.com/course/aws-certified-cloud-practitioner/",
            },
            Career::CybersecurityAnalyst => &CareerInfo {
                description: "Protects systems and networks from digital threats.",
                learning_topics: &["Networking", "Linux", "Ethical Hacking"],
                resource_url: "https://www.coursera.org/specializations/ibm-cybersecurity-analyst",
            },
            Career::Educator => &CareerInfo {
                description: "Teaches students in academic or training settings.",
                learning_topics: &["Communication", "Patience", "Teaching Methodology"],
                resource_url: "https://www.coursera.org/learn/learning-how-to-learn",
            },
            Career::GraphicDesigner => &CareerInfo {
                description: "Creates visual designs using digital tools.",
                learning_topics: &["Photoshop", "Illustrator", "Creativity"],
                resource_url: "https://www.udemy.com/course/graphic-design-for-beginners/",
            },
            Career::GameDeveloper => &CareerInfo {
                description: "Develops interactive games using game engines.",
                learning_topics: &["Unity", "C#", "Game Physics"],
                resource_url: "https://learn.unity.com/",
            },
        }
    }
}

impl std::fmt::Display for Career {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for career in Career::ALL {
            assert_eq!(Career::from_label(career.label()), Some(career));
        }
    }

    #[test]
    fn unknown_label_is_none() {
        assert_eq!(Career::from_label("Astronaut"), None);
        // Case-sensitive by contract.
        assert_eq!(Career::from_label("data scientist"), None);
    }

    #[test]
    fn every_career_requires_at_least_two_skills() {
        for career in Career::ALL {
            assert!(
                career.required_skills().len() >= 2,
                "{} has too few required skills",
                career
            );
        }
    }

    #[test]
    fn every_career_has_info() {
        for career in Career::ALL {
            let info = career.info();
            assert!(!info.description.is_empty());
            assert!(!info.learning_topics.is_empty());
            assert!(info.resource_url.starts_with("https://"));
        }
    }
}
