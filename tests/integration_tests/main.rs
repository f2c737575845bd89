use approx::assert_relative_eq;
use fitting::prelude::*;
use levenberg_marquardt::LevenbergMarquardt;
use shared_test_code::models::{
    double_exponential_model, double_exponential_with_offset, exponential_decay_model,
    exponential_decay_with_offset, gaussian, gaussian_model,
};
use shared_test_code::{add_uniform_noise, linspace};

mod fit_result_tests;
mod plotting;

#[test]
// sanity check the jacobian of the problem against the numerical differentiation
// of the levenberg_marquardt crate. Its first step for a parameter p is ln(1+|p|),
// so the time constants must stay positive after that step.
fn sanity_check_jacobian_of_levenberg_marquardt_problem_is_correct() {
    let x = linspace(0., 12.5, 20);
    let y = x.map(|x| double_exponential_with_offset(x, 2., 4., 2., 4., 0.2));
    let model = double_exponential_model();
    let params = model
        .make_params([
            ("tau1", 2.5),
            ("tau2", 6.),
            ("c1", 4.),
            ("c2", 12.),
            ("offset", 0.6),
        ])
        .unwrap();

    let mut problem = FitProblemBuilder::new(model)
        .independent_variable(x)
        .observations(y)
        .parameters(params)
        .build()
        .expect("Building valid problem should not fail");

    let jacobian_numerical = levenberg_marquardt::differentiate_numerically(&mut problem).unwrap();
    let jacobian_trait = problem.jacobian().unwrap();
    assert_relative_eq!(jacobian_numerical, jacobian_trait, epsilon = 1e-5);
}

#[test]
fn double_exponential_model_is_fitted_correctly_without_noise() {
    let x = linspace(0., 12.5, 1024);
    let (tau1, tau2, c1, c2, offset) = (0.75, 3., 4., 2.5, 1.);
    let y: Vec<f64> = x
        .iter()
        .map(|&x| double_exponential_with_offset(x, tau1, tau2, c1, c2, offset))
        .collect();

    let fitting = Fitting::new(double_exponential_model());
    let outcome = fitting
        .fit(
            x.as_slice(),
            &y,
            [
                ("tau1", 0.5),
                ("tau2", 5.),
                ("c1", 3.),
                ("c2", 3.),
                ("offset", 0.5),
            ],
        )
        .expect("fitting must succeed");

    let params = fitting.get_params(&outcome);
    assert_relative_eq!(params.value("tau1").unwrap(), tau1, epsilon = 1e-5);
    assert_relative_eq!(params.value("tau2").unwrap(), tau2, epsilon = 1e-5);
    assert_relative_eq!(params.value("c1").unwrap(), c1, epsilon = 1e-5);
    assert_relative_eq!(params.value("c2").unwrap(), c2, epsilon = 1e-5);
    assert_relative_eq!(params.value("offset").unwrap(), offset, epsilon = 1e-5);
    assert!(outcome.was_successful());
}

#[test]
fn noisy_exponential_decay_recovers_true_parameters_within_their_errors() {
    let x = linspace(0., 10., 200);
    let (amplitude, tau, offset) = (5., 2., 0.5);
    let y = add_uniform_noise(
        &x.map(|x| exponential_decay_with_offset(x, amplitude, tau, offset)),
        0.05,
        0xdeadbeef,
    );

    let fitting = Fitting::new(exponential_decay_model());
    let outcome = fitting
        .fit(
            x.as_slice(),
            y.as_slice(),
            [("amplitude", 3.), ("tau", 1.), ("offset", 0.)],
        )
        .expect("fitting must succeed");

    for (name, truth) in [("amplitude", amplitude), ("tau", tau), ("offset", offset)] {
        let param = fitting.get_params(&outcome).get(name).unwrap();
        let stderr = param.stderr().expect("standard error must exist");
        assert_relative_eq!(param.value(), truth, epsilon = 0.05);
        // five standard errors is generous, but the noise is not normally distributed
        assert!(
            (param.value() - truth).abs() < 5. * stderr,
            "parameter {} = {} +/- {} is too far from {}",
            name,
            param.value(),
            stderr,
            truth
        );
    }
    let result = fitting.result(&outcome);
    assert!(result.rsquared() > 0.99);
    // uniform noise in [-0.05,0.05] has a variance of 0.05^2/3
    assert_relative_eq!(result.redchi(), 0.05f64.powi(2) / 3., max_relative = 0.3);
}

#[test]
fn gaussian_peak_is_fitted_with_configured_solver() {
    let x = linspace(-5., 5., 101);
    let y = add_uniform_noise(&x.map(|x| gaussian(x, 3., 0.7, 1.2)), 0.01, 42);

    let solver = LevMarSolver::with_solver(
        LevenbergMarquardt::new()
            .with_stepbound(1.)
            .with_patience(1000),
    );
    let fitting = Fitting::with_solver(gaussian_model(), solver);
    let outcome = fitting
        .fit(
            x.as_slice(),
            y.as_slice(),
            [("amplitude", 2.), ("center", 0.), ("sigma", 2.)],
        )
        .expect("fitting must succeed");

    assert_relative_eq!(
        fitting.get_param(&outcome, "amplitude").unwrap(),
        3.,
        epsilon = 0.02
    );
    assert_relative_eq!(
        fitting.get_param(&outcome, "center").unwrap(),
        0.7,
        epsilon = 0.02
    );
    assert_relative_eq!(
        fitting.get_param(&outcome, "sigma").unwrap().abs(),
        1.2,
        epsilon = 0.02
    );
}

#[test]
fn weights_change_the_influence_of_data_points() {
    // two clusters of data that disagree about the offset of a constant model
    let x = [0., 1., 2., 3., 4., 5.];
    let y = [1., 1., 1., 3., 3., 3.];
    let fitting = Fitting::new(Model::new(&["offset"], |_x: f64, offset: f64| offset).unwrap());
    let params = fitting.model().make_params([("offset", 0.)]).unwrap();

    let unweighted = fitting.fit_with(&x, &y, params.clone(), None).unwrap();
    assert_relative_eq!(unweighted.param_value("offset").unwrap(), 2., epsilon = 1e-6);

    // weights multiply the residuals, so the weighted mean uses the squared weights
    let weights = [1., 1., 1., 3., 3., 3.];
    let weighted = fitting
        .fit_with(&x, &y, params, Some(&weights[..]))
        .unwrap();
    assert_relative_eq!(weighted.param_value("offset").unwrap(), 2.8, epsilon = 1e-6);
}

#[test]
fn agreement_of_fitted_value_with_theory() {
    let x = [0., 1., 2., 3.];
    let y = [0., 2.02, 3.98, 6.];
    let fitting = Fitting::new(Model::new(&["slope"], |x: f64, slope: f64| slope * x).unwrap());
    let outcome = fitting.fit(&x, &y, [("slope", 1.)]).unwrap();
    let slope = fitting.get_param(&outcome, "slope").unwrap();
    let agreement = Fitting::conc(slope, 2.).unwrap();
    assert!(agreement > 0.99 && agreement <= 1.);
    assert_eq!(Fitting::conc(2., 2.), Ok(1.));
}
