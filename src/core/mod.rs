pub mod geometry;
pub mod goals;
pub mod nutrient;
pub mod primitives;
pub mod progress;
pub mod types;

pub use geometry::{
    OverAchievementPolicy, achievement_ratio, calculate_data_points,
    calculate_data_points_aligned, calculate_data_points_with_policy, polar_to_cartesian,
    sector_angle_degrees,
};
pub use goals::{GoalTable, NutritionGoal, SharedGoalTable};
pub use nutrient::Nutrient;
pub use progress::{GoalProgress, ProgressBand, progress_percentage};
pub use types::{Metric, Point, Viewport};
