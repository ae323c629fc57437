use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::nutrient::Nutrient;
use crate::core::types::Metric;
use crate::error::{ChartError, ChartResult};

/// Target value for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoal {
    pub name: String,
    pub target: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl NutritionGoal {
    #[must_use]
    pub fn new(name: impl Into<String>, target: f64) -> Self {
        Self {
            name: name.into(),
            target,
            unit: None,
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn default_for(nutrient: Nutrient) -> Self {
        Self::new(nutrient.as_str(), nutrient.default_goal()).with_unit(nutrient.unit())
    }
}

/// Per-metric goals, keyed by metric name.
///
/// Lookups are case-insensitive and ignore surrounding whitespace, so the
/// profile's "Calories" and the dashboard's "calories" address one goal.
/// Iteration follows insertion order.
///
/// Stored targets only need to be finite. Whether a target is usable as a
/// normalization denominator (`> 0`) is checked by [`GoalTable::target_for`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NutritionGoal>", into = "Vec<NutritionGoal>")]
pub struct GoalTable {
    goals: IndexMap<String, NutritionGoal>,
}

fn goal_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl GoalTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default daily goals for every built-in nutrient, in radar order.
    #[must_use]
    pub fn nutrition_defaults() -> Self {
        let goals = Nutrient::ALL
            .into_iter()
            .map(|nutrient| {
                let goal = NutritionGoal::default_for(nutrient);
                (goal_key(&goal.name), goal)
            })
            .collect();
        Self { goals }
    }

    /// Builds a table from a goal list, rejecting duplicate names.
    pub fn from_goals(goals: Vec<NutritionGoal>) -> ChartResult<Self> {
        let mut table = Self::new();
        for goal in goals {
            let name = goal.name.clone();
            if table.insert(goal)?.is_some() {
                return Err(ChartError::InvalidData(format!(
                    "duplicate goal for metric `{name}`"
                )));
            }
        }
        Ok(table)
    }

    /// Builds a table from the positional `Metric` goal list used by the
    /// clients.
    pub fn from_metrics(metrics: Vec<Metric>) -> ChartResult<Self> {
        Self::from_goals(
            metrics
                .into_iter()
                .map(|metric| NutritionGoal::new(metric.name, metric.score))
                .collect(),
        )
    }

    pub fn with_goal(mut self, goal: NutritionGoal) -> ChartResult<Self> {
        self.insert(goal)?;
        Ok(self)
    }

    /// Inserts or replaces a goal, returning the previous one.
    pub fn insert(&mut self, goal: NutritionGoal) -> ChartResult<Option<NutritionGoal>> {
        let key = goal_key(&goal.name);
        if key.is_empty() {
            return Err(ChartError::InvalidData(
                "goal name must not be empty".to_owned(),
            ));
        }
        if !goal.target.is_finite() {
            return Err(ChartError::InvalidGoalScore {
                metric: goal.name,
                score: goal.target,
            });
        }
        Ok(self.goals.insert(key, goal))
    }

    /// Updates the target of an existing goal.
    pub fn set_target(&mut self, name: &str, target: f64) -> ChartResult<()> {
        if !target.is_finite() {
            return Err(ChartError::InvalidGoalScore {
                metric: name.to_owned(),
                score: target,
            });
        }
        let goal = self
            .goals
            .get_mut(&goal_key(name))
            .ok_or_else(|| ChartError::GoalNotFound {
                metric: name.to_owned(),
            })?;
        debug!(metric = name, previous = goal.target, target, "update goal target");
        goal.target = target;
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<NutritionGoal> {
        self.goals.shift_remove(&goal_key(name))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NutritionGoal> {
        self.goals.get(&goal_key(name))
    }

    /// Resolves the normalization denominator for `name`.
    ///
    /// Fails with `GoalNotFound` when the metric has no goal and with
    /// `InvalidGoalScore` when the stored target is not strictly positive.
    pub fn target_for(&self, name: &str) -> ChartResult<f64> {
        let goal = self.get(name).ok_or_else(|| ChartError::GoalNotFound {
            metric: name.to_owned(),
        })?;
        validate_goal_score(&goal.name, goal.target)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NutritionGoal> {
        self.goals.values()
    }

    /// Goal list in the client's positional `Metric` shape.
    #[must_use]
    pub fn to_metrics(&self) -> Vec<Metric> {
        self.iter()
            .map(|goal| Metric::new(goal.name.clone(), goal.target))
            .collect()
    }

    #[must_use]
    pub fn targets(&self) -> IndexMap<String, f64> {
        self.iter()
            .map(|goal| (goal.name.clone(), goal.target))
            .collect()
    }
}

pub(crate) fn validate_goal_score(metric: &str, score: f64) -> ChartResult<f64> {
    if score.is_finite() && score > 0.0 {
        Ok(score)
    } else {
        Err(ChartError::InvalidGoalScore {
            metric: metric.to_owned(),
            score,
        })
    }
}

impl TryFrom<Vec<NutritionGoal>> for GoalTable {
    type Error = ChartError;

    fn try_from(goals: Vec<NutritionGoal>) -> ChartResult<Self> {
        Self::from_goals(goals)
    }
}

impl From<GoalTable> for Vec<NutritionGoal> {
    fn from(table: GoalTable) -> Self {
        table.goals.into_values().collect()
    }
}

/// Goal table shared between a goal editor and chart renders.
///
/// Readers take a [`SharedGoalTable::snapshot`] before computing points so
/// a concurrent edit is seen either entirely or not at all.
#[derive(Debug, Clone, Default)]
pub struct SharedGoalTable {
    inner: Arc<RwLock<GoalTable>>,
}

impl SharedGoalTable {
    #[must_use]
    pub fn new(table: GoalTable) -> Self {
        Self {
            inner: Arc::new(RwLock::new(table)),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> GoalTable {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the whole table and returns the previous one.
    pub fn replace(&self, table: GoalTable) -> GoalTable {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        debug!(goals = table.len(), "replace shared goal table");
        std::mem::replace(&mut *guard, table)
    }

    pub fn set_target(&self, name: &str, target: f64) -> ChartResult<()> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_target(name, target)
    }
}
