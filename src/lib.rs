#![warn(missing_docs)]
//!
//! # Introduction
//!
//! This crate fits arbitrary scalar model functions to data and plots the result. A model is
//! just a plain Rust function (or closure) `$f(x,p_1,\dots,p_N)$` of the independent variable `$x$`
//! and a number of named parameters `$p_j$`. There is no need to provide derivatives.
//!
//! Consider a data vector `$\vec{y}= (y_1,\dots,y_{N_{data}})^T$`, which
//! is sampled at grid points `$\vec{x}=(x_1,\dots,x_{N_{data}})^T$`, both with `$N_{data}$` elements.
//! The goal is to find the parameters `$\vec{p}$` that minimize the sum of squared residuals
//!
//! ```math
//! \arg\min_{\vec{p}} ||\mathbf{W}(\vec{y}-\vec{f}(\vec{x},\vec{p}))||_2^2,
//! ```
//! where `$\vec{f}(\vec{x},\vec{p})$` is the model evaluated at every grid point and `$\mathbf{W}$`
//! is a diagonal weight matrix that can be set to the identity matrix for unweighted
//! least squares.
//!
//! The minimization is performed by the [levenberg_marquardt](https://crates.io/crates/levenberg-marquardt/)
//! crate, the jacobian of the model is calculated with finite differences. After the fit, the standard
//! errors of the parameters as well as goodness of fit statistics such as `$R^2$`, `$\chi^2$` and
//! the information criteria are available. Plots are rendered with [plotters](https://crates.io/crates/plotters).
//!
//! # Usage and Workflow
//!
//! The simplest way to use this crate is the [Fitting](crate::fitting::Fitting) type.
//! 1. Create a [Model](crate::model::Model) from a function and the names of its parameters.
//! 2. Create a [Fitting](crate::fitting::Fitting) for the model and [fit](crate::fitting::Fitting::fit)
//!    it to the data, starting from initial guesses for every parameter.
//! 3. The fit returns a [FitResult](crate::fit::FitResult), which contains the fitted parameters
//!    and the fit statistics. Pass it to [plot](crate::fitting::Fitting::plot) or
//!    [scatter](crate::fitting::Fitting::scatter) to draw the data together with the best fit.
//!
//! For more control, e.g. over the solver tolerances, cast the fitting problem into a
//! [FitProblem](crate::problem::FitProblem) using the [FitProblemBuilder](crate::problem::FitProblemBuilder)
//! and solve it with a [LevMarSolver](crate::solvers::levmar::LevMarSolver).
//!
//! # Example
//!
//! ```rust
//! use fitting::prelude::*;
//!
//! // a line with slope a and intercept b
//! let model = Model::new(&["a", "b"], |x: f64, a: f64, b: f64| a * x + b).unwrap();
//! let fitting = Fitting::new(model);
//!
//! let x = [0., 1., 2., 3.];
//! let y = [1., 3., 5., 7.];
//! let outcome = fitting
//!     .fit(&x, &y, [("a", 1.), ("b", 1.)])
//!     .expect("fitting a line must succeed");
//!
//! let params = fitting.get_params(&outcome);
//! assert!((params.value("a").unwrap() - 2.).abs() < 1e-6);
//! assert!((params.value("b").unwrap() - 1.).abs() < 1e-6);
//! assert!(fitting.result(&outcome).rsquared() > 0.999999);
//!
//! // plot the data together with the best fit
//! # fn plot(fitting: &Fitting, outcome: &FitResult, x: &[f64], y: &[f64]) {
//! let options = PlotOptions::default().xlabel("x").ylabel("y").grid(true);
//! fitting
//!     .plot(outcome, x, y, &options, "line_fit.png")
//!     .expect("plotting must succeed");
//! # }
//! ```

/// the agreement between an experimental and a theoretical value
pub mod agreement;
/// the result of a fit
pub mod fit;
/// convenience interface for fitting a model to data and plotting the fit
pub mod fitting;
/// code pertaining to building and working with models
pub mod model;
/// helper implementation to make working with model functions more seamless
pub mod model_function;
/// named model parameters
pub mod parameters;
/// plotting the data together with the best fit
pub mod plot;
/// commonly useful imports
pub mod prelude;
/// the least squares problem of fitting a model to data
pub mod problem;
/// solvers for the nonlinear minimization problem
pub mod solvers;
/// statistical information about a fit
pub mod statistics;
/// helper types shared between the modules
pub mod util;
