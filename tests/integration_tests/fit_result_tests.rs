use approx::assert_relative_eq;
use fitting::prelude::*;
use shared_test_code::models::{exponential_decay_model, exponential_decay_with_offset, line_model};
use shared_test_code::{add_uniform_noise, linspace};

fn noisy_decay_outcome() -> FitResult {
    let x = linspace(0., 8., 50);
    let y = add_uniform_noise(&x.map(|x| exponential_decay_with_offset(x, 2., 1.5, 0.3)), 0.02, 7);
    Fitting::new(exponential_decay_model())
        .fit(
            x.as_slice(),
            y.as_slice(),
            [("amplitude", 1.), ("tau", 1.), ("offset", 0.)],
        )
        .expect("fitting must succeed")
}

#[test]
fn linear_example_converges_to_exact_solution() {
    let fitting = Fitting::new(line_model());
    let outcome = fitting
        .fit(&[0., 1., 2., 3.], &[1., 3., 5., 7.], [("a", 1.), ("b", 1.)])
        .expect("fitting must succeed");

    assert_relative_eq!(fitting.get_param(&outcome, "a").unwrap(), 2., epsilon = 1e-6);
    assert_relative_eq!(fitting.get_param(&outcome, "b").unwrap(), 1., epsilon = 1e-6);
    let result = fitting.result(&outcome);
    assert_relative_eq!(result.rsquared(), 1., epsilon = 1e-8);
    assert_relative_eq!(result.chisqr(), 0., epsilon = 1e-10);
    assert_eq!(result.statistics.ndata(), 4);
    assert_eq!(result.statistics.nfree(), 2);
}

#[test]
fn fit_result_values_and_named_values_agree() {
    let outcome = noisy_decay_outcome();
    let params = outcome.params();
    assert_eq!(params.names(), vec!["amplitude", "tau", "offset"]);
    for (param, value) in params.iter().zip(params.values()) {
        assert_eq!(outcome.param_value(param.name()).unwrap(), value);
        assert_eq!(params.valuesdict()[param.name()], value);
    }
}

#[test]
fn correlation_matrix_is_symmetric_with_unit_diagonal() {
    let outcome = noisy_decay_outcome();
    let correlation = outcome
        .correlation_matrix()
        .expect("correlation matrix must exist");
    assert_eq!(correlation.shape(), (3, 3));
    for i in 0..3 {
        assert_relative_eq!(correlation[(i, i)], 1., epsilon = 1e-10);
        for j in 0..3 {
            assert_relative_eq!(correlation[(i, j)], correlation[(j, i)], epsilon = 1e-12);
            assert!(correlation[(i, j)].abs() <= 1. + 1e-10);
        }
    }
}

#[test]
fn eval_reproduces_best_fit_at_data_locations() {
    let outcome = noisy_decay_outcome();
    let x = outcome.independent_variable().clone();
    assert_relative_eq!(&outcome.eval(x.as_slice()), outcome.best_fit(), epsilon = 1e-14);
    let residuals = outcome.residuals();
    assert_relative_eq!(residuals.norm_squared(), outcome.chisqr(), epsilon = 1e-12);
}

#[test]
fn confidence_band_is_narrower_than_noise_for_many_points() {
    let outcome = noisy_decay_outcome();
    let band = outcome.eval_uncertainty(0.68).expect("band must be calculated");
    assert_eq!(band.len(), 50);
    let sigma = outcome.statistics.regression_standard_error();
    assert!(band.iter().all(|&radius| radius > 0. && radius < sigma));
}

#[test]
fn information_criteria_prefer_the_better_model() {
    let x = linspace(0., 8., 50);
    let y = add_uniform_noise(&x.map(|x| exponential_decay_with_offset(x, 2., 1.5, 0.3)), 0.02, 11);
    let decay = Fitting::new(exponential_decay_model())
        .fit(
            x.as_slice(),
            y.as_slice(),
            [("amplitude", 1.), ("tau", 1.), ("offset", 0.)],
        )
        .unwrap();
    let line = Fitting::new(line_model())
        .fit(x.as_slice(), y.as_slice(), [("a", 0.), ("b", 1.)])
        .unwrap();
    assert!(decay.aic() < line.aic());
    assert!(decay.bic() < line.bic());
    assert!(decay.rsquared() > line.rsquared());
}

#[test]
fn fit_report_contains_model_name_and_all_variables() {
    let outcome = noisy_decay_outcome();
    let report = outcome.fit_report();
    assert!(report.contains("Model(exponential decay)"));
    assert!(report.contains("# data points      = 50"));
    assert!(report.contains("# variables        = 3"));
    for name in ["amplitude", "tau", "offset"] {
        assert!(report.contains(&format!("    {}:", name)));
    }
    assert!(report.contains("+/-"));
    assert_eq!(report, format!("{}", outcome));
}
