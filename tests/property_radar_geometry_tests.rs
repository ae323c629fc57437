use nutri_radar::core::{
    GoalTable, Metric, NutritionGoal, OverAchievementPolicy, achievement_ratio,
    calculate_data_points, polar_to_cartesian, sector_angle_degrees,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sector_zero_is_straight_up(
        radius in 0.0f64..10_000.0,
        total in 1usize..64,
        cx in -1_000.0f64..1_000.0,
        cy in -1_000.0f64..1_000.0
    ) {
        let point = polar_to_cartesian(radius, 0, total, cx, cy).expect("point");
        prop_assert!((point.x - cx).abs() <= 1e-9 * radius.max(1.0));
        prop_assert!((point.y - (cy - radius)).abs() <= 1e-9 * radius.max(1.0));
    }

    #[test]
    fn consecutive_sectors_are_evenly_spaced(total in 1usize..128, seed in 0usize..1_000) {
        let index = seed % total;
        let next = (index + 1) % total;
        let step = 360.0 / total as f64;

        let a = sector_angle_degrees(index, total).expect("angle");
        let b = sector_angle_degrees(next, total).expect("angle");
        let delta = (b - a).rem_euclid(360.0);
        let expected = step.rem_euclid(360.0);
        prop_assert!((delta - expected).abs() <= 1e-9);
    }

    #[test]
    fn points_stay_inside_the_outer_ring(
        scores in prop::collection::vec(0.0f64..10_000.0, 0..16),
        max_radius in 1.0f64..500.0
    ) {
        let mut goals = GoalTable::new();
        let metrics: Vec<Metric> = scores
            .iter()
            .enumerate()
            .map(|(i, score)| Metric::new(format!("m{i}"), *score))
            .collect();
        for metric in &metrics {
            goals
                .insert(NutritionGoal::new(metric.name.clone(), 100.0))
                .expect("goal");
        }

        let points = calculate_data_points(&metrics, &goals, max_radius, 0.0, 0.0).expect("points");
        prop_assert_eq!(points.len(), metrics.len());
        for point in points {
            prop_assert!(point.x.hypot(point.y) <= max_radius * (1.0 + 1e-12));
        }
    }

    #[test]
    fn inversion_is_symmetric_around_the_goal(goal in 0.1f64..5_000.0, k in 1.0f64..50.0) {
        let over = Metric::new("calories", goal * k);
        let under = Metric::new("calories", goal / k);

        let over_ratio = achievement_ratio(&over, goal, OverAchievementPolicy::Invert).expect("over");
        let under_ratio = achievement_ratio(&under, goal, OverAchievementPolicy::Invert).expect("under");
        prop_assert!((over_ratio - under_ratio).abs() <= 1e-9);
    }

    #[test]
    fn meeting_the_goal_is_exactly_full_radius(goal in 0.1f64..5_000.0, max_radius in 1.0f64..500.0) {
        let goals = GoalTable::new()
            .with_goal(NutritionGoal::new("fiber", goal))
            .expect("goal");
        let metric = Metric::new("fiber", goal);
        let ratio = achievement_ratio(&metric, goal, OverAchievementPolicy::Invert).expect("ratio");
        prop_assert_eq!(ratio * max_radius, max_radius);

        let points = calculate_data_points(&[metric], &goals, max_radius, 0.0, 0.0).expect("points");
        prop_assert!((points[0].y + max_radius).abs() <= 1e-9 * max_radius);
    }
}
