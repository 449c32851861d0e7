use proptest::prelude::*;

use compquad::math::dataset::doublesdataset::DoublesDataSet;
use compquad::math::dataset::xpoints::{
    check_x_integrity,
    generate_x_points
};
use compquad::math::integration::integrationrule::IntegrationRule;
use compquad::math::integration::integrationside::IntegrationSide;
use compquad::math::integration::integrator::integrate;
use compquad::math::integration::parallelintegrator::{
    integrate_parallel,
    ParallelConfig
};
use compquad::math::ulp::approx_equals_ulps;

fn rule_strategy() -> impl Strategy<Value = IntegrationRule> {
    prop::sample::select(IntegrationRule::ALL.to_vec())
}

fn side_strategy() -> impl Strategy<Value = IntegrationSide> {
    prop::sample::select(IntegrationSide::ALL.to_vec())
}

proptest! {
    #[test]
    fn generated_grids_pass_validation(
        lower in 0.0f64..10.0,
        width in 0.1f64..10.0,
        num_points in 4usize..500,
        half_width_ends in any::<bool>(),
    ) {
        let x = generate_x_points(lower, lower + width, num_points, half_width_ends).unwrap();
        prop_assert_eq!(x.len(), num_points);
        prop_assert!(check_x_integrity(&x, half_width_ends).is_ok());
    }

    #[test]
    fn trapezoidal_ignores_side(
        fx in prop::collection::vec(-100.0f64..100.0, 4..300),
        half_width_ends in any::<bool>(),
    ) {
        let x = generate_x_points(0.0, 1.0, fx.len(), half_width_ends).unwrap();
        let data = DoublesDataSet::new(x, fx, half_width_ends).unwrap();
        prop_assert_eq!(
            integrate(IntegrationRule::Trapezoidal, &data, IntegrationSide::Left),
            integrate(IntegrationRule::Trapezoidal, &data, IntegrationSide::Right)
        );
    }

    #[test]
    fn parallel_agrees_with_sequential(
        fx in prop::collection::vec(0.1f64..10.0, 7..400),
        half_width_ends in any::<bool>(),
        rule in rule_strategy(),
        side in side_strategy(),
        threshold in 1usize..32,
    ) {
        let x = generate_x_points(0.0, 1.0, fx.len(), half_width_ends).unwrap();
        let data = DoublesDataSet::new(x, fx, half_width_ends).unwrap();
        let sequential = integrate(rule, &data, side).unwrap();
        let parallel = integrate_parallel(rule, &data, side, &ParallelConfig::new(threshold)).unwrap();
        prop_assert!(approx_equals_ulps(sequential, parallel, 80.0));
    }

    #[test]
    fn constant_data_integrates_to_its_span(
        value in 0.5f64..5.0,
        num_points in 7usize..200,
        rule in rule_strategy(),
        side in side_strategy(),
    ) {
        let x = generate_x_points(0.0, 2.0, num_points, false).unwrap();
        let data = DoublesDataSet::new(x, vec![value; num_points], false).unwrap();
        let area = integrate(rule, &data, side).unwrap();
        prop_assert!((area - 2.0 * value).abs() < 1e-12);
    }
}
