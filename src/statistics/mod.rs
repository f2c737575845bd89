use crate::problem::FitProblem;
use nalgebra::{DMatrix, DVector};
use thiserror::Error as ThisError;


/// Information about an error that occurred during calculation
/// of the fit statistics.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum StatisticsError {
    /// the model produced non-finite values or derivatives at the solution
    #[error("The model could not be evaluated at the best fit parameters.")]
    ModelEvaluation,
    /// the covariance matrix could not be calculated, e.g. because the
    /// jacobian at the solution is rank deficient
    #[error("The covariance matrix of the parameters is not available.")]
    CovarianceUnavailable,
    /// the fit has as many varied parameters as data points
    #[error("The fit has no degrees of freedom left.")]
    NoDegreesOfFreedom,
    /// the probability for a confidence band must lie in the open interval (0,1)
    #[error("Probability {} must be in the open interval (0,1).", probability)]
    InvalidProbability {
        /// the given probability
        probability: f64,
    },
}

/// This structure contains some additional statistical information
/// about the fit, such as errors on the parameters and other useful
/// information to assess the quality of the fit.
///
/// All quantities refer to the *varied* parameters only, in the order in which
/// they appear in the model parameters. The conventions follow the usual
/// least squares statistics, i.e. the sum of squared weighted residuals is
/// `$\chi^2 = \sum_i r_{w,i}^2$` and the covariance matrix is
/// `$C = (J^T J)^{-1} \chi^2_\nu$`, where `$J$` is the jacobian of the
/// weighted residuals and `$\chi^2_\nu$` the reduced `$\chi^2$`.
#[derive(Debug, Clone)]
pub struct FitStatistics {
    ndata: usize,
    nvarys: usize,
    chisqr: f64,
    rsquared: f64,
    /// `None` if `$J^T J$` is not invertible
    covariance_matrix: Option<DMatrix<f64>>,
    /// the weighted residuals `$\vec{r_w} = W (\vec{y} - \vec{f}(\vec{x},\vec{p}))$`
    weighted_residuals: DVector<f64>,
    /// the unweighted jacobian of the model function at the solution
    /// with respect to the varied parameters.
    model_jacobian: DMatrix<f64>,
}

impl FitStatistics {
    /// Calculate the fit statistics from the problem at its current parameters.
    /// The parameters must be the ones after the fit has completed.
    #[allow(non_snake_case)]
    pub(crate) fn try_calculate(problem: &FitProblem) -> Result<Self, StatisticsError> {
        let weighted_residuals = problem
            .weighted_residuals()
            .ok_or(StatisticsError::ModelEvaluation)?;
        let model_jacobian = problem
            .model_jacobian()
            .ok_or(StatisticsError::ModelEvaluation)?;

        let ndata = problem.data_count();
        let nvarys = problem.varied_count();
        let chisqr = weighted_residuals.norm_squared();

        let data = problem.observations();
        let mean = data.mean();
        let total_sum_of_squares = data.map(|y| y - mean).norm_squared();
        let rsquared = 1. - chisqr / total_sum_of_squares.max(f64::MIN_POSITIVE);

        let J = problem.weights() * model_jacobian.clone();
        let reduced_chi2 = chisqr / nfree(ndata, nvarys).max(1) as f64;
        let covariance_matrix = (J.transpose() * J)
            .try_inverse()
            .map(|JTJ_inv| JTJ_inv * reduced_chi2)
            .filter(|cov| cov.iter().all(|c| c.is_finite()));

        Ok(Self {
            ndata,
            nvarys,
            chisqr,
            rsquared,
            covariance_matrix,
            weighted_residuals,
            model_jacobian,
        })
    }

    /// the number of data points
    pub fn ndata(&self) -> usize {
        self.ndata
    }

    /// the number of varied parameters
    pub fn nvarys(&self) -> usize {
        self.nvarys
    }

    /// the degrees of freedom of the fit, which is the number of data points
    /// minus the number of varied parameters.
    pub fn nfree(&self) -> usize {
        nfree(self.ndata, self.nvarys)
    }

    /// the sum of squares of the weighted residuals `$\chi^2$`
    pub fn chisqr(&self) -> f64 {
        self.chisqr
    }

    /// The reduced `$\chi^2_\nu = \chi^2/\nu$`, where `$\nu$` is the number of degrees
    /// of freedom. For a fit without degrees of freedom, this is `$\chi^2$`.
    pub fn reduced_chi2(&self) -> f64 {
        self.chisqr / self.nfree().max(1) as f64
    }

    /// the _regression standard error_ `$\sigma = \sqrt{\chi^2_\nu}$`
    pub fn regression_standard_error(&self) -> f64 {
        self.reduced_chi2().sqrt()
    }

    /// The coefficient of determination
    /// `$R^2 = 1 - \chi^2 / \sum_i (y_i - \bar{y})^2$`.
    pub fn rsquared(&self) -> f64 {
        self.rsquared
    }

    /// The Akaike information criterion `$N \ln(\chi^2/N) + 2 N_{vary}$`.
    pub fn aic(&self) -> f64 {
        self.neg2_log_likelihood() + 2. * self.nvarys as f64
    }

    /// The Bayesian information criterion `$N \ln(\chi^2/N) + \ln(N) N_{vary}$`.
    pub fn bic(&self) -> f64 {
        self.neg2_log_likelihood() + (self.ndata as f64).ln() * self.nvarys as f64
    }

    fn neg2_log_likelihood(&self) -> f64 {
        let ndata = self.ndata as f64;
        ndata * (self.chisqr.max(1e-250) / ndata).ln()
    }

    /// The estimated covariance matrix of the varied parameters, if it could be
    /// calculated.
    /// # Correlation
    /// Note that we can calculate the estimated correlation matrix from
    /// the covariance matrix by dividing each element `$c_{ij}$` by
    /// `$\sqrt{c_{ii} c_{jj}}$`, see [FitStatistics::correlation_matrix].
    pub fn covariance_matrix(&self) -> Option<&DMatrix<f64>> {
        self.covariance_matrix.as_ref()
    }

    /// the estimated correlation matrix of the varied parameters
    pub fn correlation_matrix(&self) -> Option<DMatrix<f64>> {
        let covariance = self.covariance_matrix.as_ref()?;
        let diagonal = covariance.diagonal();
        Some(DMatrix::from_fn(
            covariance.nrows(),
            covariance.ncols(),
            |i, j| covariance[(i, j)] / (diagonal[i] * diagonal[j]).sqrt(),
        ))
    }

    /// The standard errors of the varied parameters, which are the square roots
    /// of the diagonal of the covariance matrix.
    pub fn standard_errors(&self) -> Option<DVector<f64>> {
        self.covariance_matrix
            .as_ref()
            .map(|covariance| covariance.diagonal().map(f64::sqrt))
    }

    /// the weighted residuals `$\vec{r_w} = W (\vec{y} - \vec{f}(\vec{x},\vec{p}))$` at the solution
    pub fn weighted_residuals(&self) -> &DVector<f64> {
        &self.weighted_residuals
    }

    /// Calculate the radius (i.e. half of the width) of the confidence band
    /// of the fitted model at the data locations, for the given probability.
    ///
    /// The radius at `$x_i$` is `$t \sqrt{\vec{g}_i^T C \vec{g}_i}$`, where `$\vec{g}_i$` is
    /// the gradient of the model with respect to the varied parameters at `$x_i$`, `$C$` is the
    /// covariance matrix and `$t$` the quantile of the Student-t distribution with
    /// `$\nu$` degrees of freedom for the two-sided probability.
    ///
    /// # Example
    ///
    /// A `probability` of `0.68` gives approximately the one sigma band,
    /// `0.95` the two sigma band.
    pub fn confidence_band_radius(&self, probability: f64) -> Result<DVector<f64>, StatisticsError> {
        if !(probability > 0. && probability < 1.) {
            return Err(StatisticsError::InvalidProbability { probability });
        }
        let nfree = self.nfree();
        if nfree == 0 {
            return Err(StatisticsError::NoDegreesOfFreedom);
        }
        let covariance = self
            .covariance_matrix
            .as_ref()
            .ok_or(StatisticsError::CovarianceUnavailable)?;

        let t_scale = distrs::StudentsT::ppf((probability + 1.) / 2., nfree as f64);
        let radius = self.model_jacobian.row_iter().map(|gradient| {
            let variance = (&gradient * covariance).dot(&gradient);
            t_scale * variance.max(0.).sqrt()
        });
        Ok(DVector::from_iterator(self.ndata, radius))
    }
}

fn nfree(ndata: usize, nvarys: usize) -> usize {
    ndata.saturating_sub(nvarys)
}
