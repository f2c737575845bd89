use super::*;
use approx::assert_relative_eq;
use nalgebra::DMatrix;

#[test]
#[allow(non_snake_case)]
fn unit_weights_produce_correct_results_when_multiplied_to_matrix_or_vector() {
    let W = Weights::default();
    let v = DVector::from(vec![1., 3., 3., 7.]);
    let A = DMatrix::from_element(4, 4, 2.0);

    assert_eq!(&W * v.clone(), v);
    assert_eq!(&W * A.clone(), A);
    assert!(W.is_size_correct_for_data_length(17));
}

#[test]
#[allow(non_snake_case)]
fn diagonal_weights_produce_correct_results_when_multiplied_to_matrix_or_vector() {
    let diagonal = DVector::from(vec![3., 78., 6., 5.]);
    let D = DMatrix::from_diagonal(&diagonal);
    let W = Weights::diagonal(diagonal);

    let v = DVector::from(vec![1., 3., 3., 7.]);
    let mut A = DMatrix::from_element(4, 2, 0.);
    A.set_column(0, &DVector::from(vec![32., 5., 86., 51.]));
    A.set_column(1, &DVector::from(vec![65., 46., 8., 85.]));

    assert_eq!(&D * &v, &W * v);
    assert_eq!(&D * &A, &W * A);
    assert!(W.is_size_correct_for_data_length(4));
    assert!(!W.is_size_correct_for_data_length(5));
}

#[test]
fn weights_with_nan_are_not_finite() {
    assert!(Weights::Unit.is_finite());
    assert!(Weights::diagonal(DVector::from(vec![1., 2.])).is_finite());
    assert!(!Weights::diagonal(DVector::from(vec![1., f64::NAN])).is_finite());
}

#[test]
fn central_differences_reproduce_the_jacobian_of_a_polynomial() {
    let x = DVector::from(vec![-1., 0., 1., 2.]);
    // f(x) = a*x^2 + b*x + c
    let f = |p: &[f64]| Some(x.map(|x| p[0] * x * x + p[1] * x + p[2]));
    let jacobian = central_difference_jacobian(f, &[1., -2., 3.], &[0, 1, 2]).unwrap();
    let mut expected = DMatrix::zeros(4, 3);
    expected.set_column(0, &x.map(|x| x * x));
    expected.set_column(1, &x);
    expected.set_column(2, &DVector::from_element(4, 1.));
    assert_relative_eq!(jacobian, expected, epsilon = 1e-9);
}

#[test]
fn central_differences_only_calculate_the_requested_columns() {
    let x = DVector::from(vec![1., 2.]);
    let f = |p: &[f64]| Some(x.map(|x| p[0] * x + p[1]));
    let jacobian = central_difference_jacobian(f, &[2., 1.], &[1]).unwrap();
    assert_relative_eq!(jacobian, DMatrix::from_element(2, 1, 1.), epsilon = 1e-9);

    let empty = central_difference_jacobian(f, &[2., 1.], &[]).unwrap();
    assert_eq!(empty.shape(), (2, 0));
}

#[test]
fn central_differences_fail_for_non_finite_function_values() {
    let f = |p: &[f64]| Some(DVector::from_element(2, p[0].ln()));
    assert!(central_difference_jacobian(f, &[0.], &[0]).is_none());
    let g = |_: &[f64]| None;
    assert!(central_difference_jacobian(g, &[1.], &[0]).is_none());
}
