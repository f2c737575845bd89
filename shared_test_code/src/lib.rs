#![warn(missing_docs)]
//! a helper crate which carries common code used by the benchtests and the
//! integration tests.
use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// contains models and the plain functions they are built from
pub mod models;

/// create holding `count` the elements from range [first,last] with linear spacing. (equivalent to matlabs linspace)
pub fn linspace(first: f64, last: f64, count: usize) -> DVector<f64> {
    match count {
        0 => return DVector::zeros(0),
        1 => return DVector::from_element(1, first),
        _ => {}
    }
    let step = (last - first) / (count - 1) as f64;
    DVector::from_fn(count, |n, _| first + step * n as f64)
}

/// add uniformly distributed noise in the interval `[-amplitude, amplitude]` to the data.
/// The noise is reproducible for the same seed.
pub fn add_uniform_noise(data: &DVector<f64>, amplitude: f64, seed: u64) -> DVector<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    data.map(|value| value + rng.gen_range(-amplitude..=amplitude))
}
