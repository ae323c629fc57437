use serde::{Deserialize, Serialize};

/// Built-in nutrition axes plotted on the daily radar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fats,
    Sugar,
    Fiber,
    Satiety,
}

impl Nutrient {
    /// Radar order: sector 0 (12 o'clock) first, then clockwise.
    pub const ALL: [Self; 7] = [
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fats,
        Self::Sugar,
        Self::Fiber,
        Self::Satiety,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fats => "fats",
            Self::Sugar => "sugar",
            Self::Fiber => "fiber",
            Self::Satiety => "satiety",
        }
    }

    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Satiety => "%",
            Self::Protein | Self::Carbs | Self::Fats | Self::Sugar | Self::Fiber => "g",
        }
    }

    #[must_use]
    pub const fn default_goal(self) -> f64 {
        match self {
            Self::Calories => 2000.0,
            Self::Protein => 130.0,
            Self::Carbs | Self::Satiety => 100.0,
            Self::Fats => 50.0,
            Self::Sugar => 20.0,
            Self::Fiber => 30.0,
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|nutrient| nutrient.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
