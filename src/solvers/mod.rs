/// Contains solvers using the [levenberg-marquardt](https://crates.io/crates/levenberg-marquardt)
/// crate.
///
/// Currently, it only contains the [`levmar`] module which implements the Levenberg-Marquardt
/// algorithm.
pub mod levmar;
