use serde::{Deserialize, Serialize};

use super::{FloodingSeverity, ScenarioInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Moderate,
}

/// Suggested strategy for a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub strategy: String,
    pub priority: Priority,
    pub rationale: String,
}

struct Rule {
    applies: fn(&ScenarioInput, f64) -> bool,
    strategy: &'static str,
    priority: Priority,
    rationale: &'static str,
}

// Evaluated top-down; the first matching rule wins.
static RULES: [Rule; 4] = [
    Rule {
        applies: severe_flooding,
        strategy: "Rain Garden Network with Green Corridors",
        priority: Priority::High,
        rationale: "Severe flooding with sharply rising rainfall calls for distributed stormwater \
                    retention linked by vegetated corridors.",
    },
    Rule {
        applies: strong_cooling,
        strategy: "Intensive Urban Canopy Enhancement",
        priority: Priority::High,
        rationale: "The projected cooling potential is large and the budget can sustain dense \
                    canopy planting.",
    },
    Rule {
        applies: limited_budget,
        strategy: "Phased Green Corridor Development",
        priority: Priority::Moderate,
        rationale: "A limited budget favours building connected green corridors in phases.",
    },
    Rule {
        applies: always,
        strategy: "Mixed Strategy with Urban Canopy Focus",
        priority: Priority::Moderate,
        rationale: "No single driver dominates; combine canopy expansion with complementary \
                    green infrastructure.",
    },
];

fn severe_flooding(input: &ScenarioInput, _cooling: f64) -> bool {
    input.flooding_severity == FloodingSeverity::High && input.rainfall_change_rate > 10.0
}

fn strong_cooling(input: &ScenarioInput, cooling: f64) -> bool {
    cooling > 3.0 && input.total_budget_cap > 4_000_000.0
}

fn limited_budget(input: &ScenarioInput, _cooling: f64) -> bool {
    input.total_budget_cap < 3_000_000.0
}

fn always(_input: &ScenarioInput, _cooling: f64) -> bool { true }

/// Pick a strategy from the decision table given the inputs and the projected cooling (°C).
pub fn recommend(input: &ScenarioInput, cooling: f64) -> Recommendation {
    let rule = RULES.iter()
        .find(|rule| (rule.applies)(input, cooling))
        .unwrap_or(&RULES[RULES.len() - 1]);

    Recommendation {
        strategy: rule.strategy.to_string(),
        priority: rule.priority,
        rationale: rule.rationale.to_string(),
    }
}
