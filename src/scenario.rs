use serde::Serialize;

use crate::error::AppError;

/// Who the description is for. Each scenario selects a fixed instruction
/// template for the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scenario {
    Traveler,
    TourGuide,
    VirtualTour,
    PersonalExploration,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Traveler,
        Scenario::TourGuide,
        Scenario::VirtualTour,
        Scenario::PersonalExploration,
    ];

    pub const DEFAULT: Scenario = Scenario::Traveler;

    pub fn label(self) -> &'static str {
        match self {
            Scenario::Traveler => "Discovering Iconic Landmarks (Traveler)",
            Scenario::TourGuide => "Tour Guide Assistance",
            Scenario::VirtualTour => "Virtual Tours and Educational Resources",
            Scenario::PersonalExploration => "Personal Exploration and Curiosity",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Scenario::Traveler => TRAVELER_PROMPT,
            Scenario::TourGuide => TOUR_GUIDE_PROMPT,
            Scenario::VirtualTour => VIRTUAL_TOUR_PROMPT,
            Scenario::PersonalExploration => PERSONAL_PROMPT,
        }
    }

    pub fn from_label(label: &str) -> Result<Self, AppError> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.label() == label)
            .ok_or_else(|| AppError::UnknownScenario(label.to_string()))
    }
}

const TRAVELER_PROMPT: &str = "\
You are a helpful travel assistant. Analyze the image of the landmark and describe:
- The landmark's name and location
- Why it's famous and its historical or cultural context
- Key visual/architectural features
- Tips for travelers visiting this place
";

const TOUR_GUIDE_PROMPT: &str = "\
You're assisting a professional tour guide. Analyze the landmark image and provide:
- Brief background and facts
- Anecdotes or historical stories related to it
- Architecture style and unique elements
- Talking points to engage tourists
";

const VIRTUAL_TOUR_PROMPT: &str = "\
This is for an educational tour. Based on the image, provide:
- Name and precise location
- Historical, political, or cultural importance
- Architectural overview
- Learning points for students and young learners
";

const PERSONAL_PROMPT: &str = "\
A history and architecture enthusiast wants to know more. From the image, explain:
- The landmark's identity and origin
- Historical timeline and transformation
- Intriguing facts and architectural details
- Local myths or cultural associations
";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_scenario_has_a_distinct_prompt() {
        let prompts: HashSet<&str> = Scenario::ALL.iter().map(|s| s.prompt()).collect();
        assert_eq!(prompts.len(), 4);
        for scenario in Scenario::ALL {
            assert!(!scenario.prompt().trim().is_empty());
        }
    }

    #[test]
    fn test_label_round_trip() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::from_label(scenario.label()).unwrap(), scenario);
        }
    }

    #[test]
    fn test_unknown_label() {
        let err = Scenario::from_label("Space Tourism").unwrap_err();
        assert!(matches!(err, AppError::UnknownScenario(ref l) if l == "Space Tourism"));
    }

    #[test]
    fn test_tour_guide_prompt_mentions_talking_points() {
        assert!(Scenario::TourGuide.prompt().contains("Talking points"));
    }
}
