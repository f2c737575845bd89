use crate::parameters::Parameters;
use crate::problem::FitProblem;
use crate::statistics::{FitStatistics, StatisticsError};
use levenberg_marquardt::MinimizationReport;
use nalgebra::{DMatrix, DVector};
use std::fmt::{self, Write};

mod errors;

pub use errors::FitError;

/// correlations with an absolute value below this are not listed in the fit report
const MIN_REPORTED_CORRELATION: f64 = 0.1;

/// The outcome of a successful fit. It contains the fitting problem after the
/// minimization, the fit statistics and the report of the minimizer, as well as
/// some convenience functions.
///
/// This structure is returned by the [`LevMarSolver::fit`](crate::solvers::levmar::LevMarSolver::fit)
/// and the [`Fitting::fit`](crate::fitting::Fitting::fit) methods and is required for
/// plotting a fit and for querying the fitted parameters.
#[derive(Debug)]
pub struct FitResult {
    /// The final state of the fitting problem after the minimization finished.
    /// Its parameters are the best fit parameters including their standard errors.
    pub problem: FitProblem,

    /// statistical information about the fit
    pub statistics: FitStatistics,

    /// The minimization report of the underlying solver.
    pub minimization_report: MinimizationReport<f64>,

    /// the model evaluated at the data locations with the best fit parameters
    best_fit: DVector<f64>,
}

impl FitResult {
    /// internal helper for constructing an instance. Copies the standard errors from
    /// the statistics into the problem parameters.
    pub(crate) fn new(
        mut problem: FitProblem,
        statistics: FitStatistics,
        minimization_report: MinimizationReport<f64>,
    ) -> Self {
        let standard_errors = statistics.standard_errors();
        let varied = problem.varied_indices().to_vec();
        problem
            .parameters
            .set_stderrs_at(&varied, standard_errors.as_ref().map(|errors| errors.as_slice()));
        let best_fit = problem.model_values();
        Self {
            problem,
            statistics,
            minimization_report,
            best_fit,
        }
    }

    /// the best fit parameters with their standard errors
    pub fn params(&self) -> &Parameters {
        self.problem.parameters()
    }

    /// the best fit value of the parameter with the given name
    pub fn param_value(&self, name: &str) -> Result<f64, FitError> {
        self.params()
            .value(name)
            .ok_or_else(|| FitError::UnknownParameter {
                name: name.to_string(),
            })
    }

    /// the independent variable of the fitted data
    pub fn independent_variable(&self) -> &DVector<f64> {
        self.problem.independent_variable()
    }

    /// the observations the model was fitted to
    pub fn observations(&self) -> &DVector<f64> {
        self.problem.observations()
    }

    /// the model evaluated at the data locations with the best fit parameters
    pub fn best_fit(&self) -> &DVector<f64> {
        &self.best_fit
    }

    /// the unweighted residuals `$\vec{y}-\vec{f}(\vec{x},\vec{p})$` at the best fit parameters
    pub fn residuals(&self) -> DVector<f64> {
        self.observations() - &self.best_fit
    }

    /// the coefficient of determination `$R^2$`
    pub fn rsquared(&self) -> f64 {
        self.statistics.rsquared()
    }

    /// the sum of squared weighted residuals `$\chi^2$`
    pub fn chisqr(&self) -> f64 {
        self.statistics.chisqr()
    }

    /// the reduced `$\chi^2$`
    pub fn redchi(&self) -> f64 {
        self.statistics.reduced_chi2()
    }

    /// the Akaike information criterion
    pub fn aic(&self) -> f64 {
        self.statistics.aic()
    }

    /// the Bayesian information criterion
    pub fn bic(&self) -> f64 {
        self.statistics.bic()
    }

    /// the covariance matrix of the varied parameters
    pub fn covariance_matrix(&self) -> Option<&DMatrix<f64>> {
        self.statistics.covariance_matrix()
    }

    /// the correlation matrix of the varied parameters
    pub fn correlation_matrix(&self) -> Option<DMatrix<f64>> {
        self.statistics.correlation_matrix()
    }

    /// the number of function evaluations of the minimizer
    pub fn nfev(&self) -> usize {
        self.minimization_report.number_of_evaluations
    }

    /// whether the fit was deemed successful by the minimizer
    pub fn was_successful(&self) -> bool {
        self.minimization_report.termination.was_successful()
    }

    /// Evaluate the fitted model at new locations `x`.
    pub fn eval(&self, x: &[f64]) -> DVector<f64> {
        let x = DVector::from_column_slice(x);
        self.problem
            .model()
            .eval_unchecked(&x, &self.params().values())
    }

    /// The radius of the confidence band of the best fit at the data locations, see
    /// [FitStatistics::confidence_band_radius].
    pub fn eval_uncertainty(&self, probability: f64) -> Result<DVector<f64>, StatisticsError> {
        self.statistics.confidence_band_radius(probability)
    }

    /// A human readable report of the fit statistics, the fitted parameters and
    /// the correlations between them.
    pub fn fit_report(&self) -> String {
        let mut report = String::new();
        // writing into a string does not fail
        let _ = self.write_report(&mut report);
        report
    }

    fn write_report(&self, out: &mut impl Write) -> fmt::Result {
        let statistics = &self.statistics;
        writeln!(out, "[[Model]]")?;
        writeln!(
            out,
            "    Model({})",
            self.problem.model().name().unwrap_or("model")
        )?;
        writeln!(out, "[[Fit Statistics]]")?;
        writeln!(out, "    # fitting method   = levenberg-marquardt")?;
        writeln!(out, "    # function evals   = {}", self.nfev())?;
        writeln!(out, "    # data points      = {}", statistics.ndata())?;
        writeln!(out, "    # variables        = {}", statistics.nvarys())?;
        writeln!(out, "    chi-square         = {:.8e}", statistics.chisqr())?;
        writeln!(out, "    reduced chi-square = {:.8e}", statistics.reduced_chi2())?;
        writeln!(out, "    Akaike info crit   = {:.8}", statistics.aic())?;
        writeln!(out, "    Bayesian info crit = {:.8}", statistics.bic())?;
        writeln!(out, "    R-squared          = {:.8}", statistics.rsquared())?;

        writeln!(out, "[[Variables]]")?;
        let name_width = self
            .params()
            .iter()
            .map(|param| param.name().len())
            .max()
            .unwrap_or(0);
        for param in self.params() {
            write!(
                out,
                "    {:<width$} {:.8}",
                format!("{}:", param.name()),
                param.value(),
                width = name_width + 1
            )?;
            match (param.vary(), param.stderr()) {
                (false, _) => writeln!(out, " (fixed)")?,
                (true, None) => writeln!(out, " (init = {})", param.init_value())?,
                (true, Some(stderr)) => {
                    write!(out, " +/- {:.8}", stderr)?;
                    if let Some(relative) = param.relative_error() {
                        write!(out, " ({:.2}%)", 100. * relative)?;
                    }
                    writeln!(out, " (init = {})", param.init_value())?
                }
            }
        }

        let correlations = self.reported_correlations();
        if !correlations.is_empty() {
            writeln!(
                out,
                "[[Correlations]] (unreported correlations are < {:.3})",
                MIN_REPORTED_CORRELATION
            )?;
            for (first, second, correlation) in correlations {
                writeln!(out, "    C({}, {}) = {:+.4}", first, second, correlation)?;
            }
        }
        Ok(())
    }

    /// pairs of varied parameters with correlations above the reporting threshold,
    /// sorted by decreasing absolute correlation
    fn reported_correlations(&self) -> Vec<(&str, &str, f64)> {
        let Some(correlation) = self.correlation_matrix() else {
            return Vec::new();
        };
        let names = self.params().names();
        let varied = self.problem.varied_indices();
        let mut correlations = Vec::new();
        for i in 0..varied.len() {
            for j in (i + 1)..varied.len() {
                let value = correlation[(i, j)];
                if value.abs() >= MIN_REPORTED_CORRELATION {
                    correlations.push((names[varied[i]], names[varied[j]], value));
                }
            }
        }
        correlations.sort_by(|lhs, rhs| rhs.2.abs().total_cmp(&lhs.2.abs()));
        correlations
    }
}

impl fmt::Display for FitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_report(f)
    }
}
