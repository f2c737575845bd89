
mod detail;

/// This trait allows us to pass scalar model functions `$f(x,p_1,...,p_N)$` in a generic fashion,
/// where
/// * `$x$` is the independent variable, like time, a spatial coordinate and so on,
/// * `$p_j$` are the scalar parameters of the model that are found by the fit.
///
/// The independent variable must always be the first argument. The functions must have at
/// least one parameter argument, i.e. a function `$f(x)$` does not satisfy the trait,
/// but e.g. `$f(x,p_1)$` does.
///
/// # Variadic Functions
/// Since Rust does not have variadic functions or generics, this trait is implemented for all
/// functions `Fn(f64,f64,...)->f64` up to a maximum number of parameter arguments. This maximum
/// number can be found out by checking the blanket implementations.
///
/// ## ArgList : The argument list
/// This type is of no consequence for the user because it will be correctly inferred when
/// passing a function. It reflects the list of parameters `$p_j$`, so that for a function
/// `Fn(f64,f64)->f64` it follows that `ArgList=(f64,)`, while for `Fn(f64,f64,f64)->f64` it
/// is `ArgList=(f64,f64)`.
pub trait ModelFunction<ArgList> {
    /// A common calling interface to evaluate this function by passing a slice of parameter values
    /// that is dispatched to the arguments in order, i.e. `$p_1$`=`params[0]`, ...,
    /// `$p_N$`=`params[N-1]`.
    ///
    /// # Panics
    /// If the slice does not have exactly [`ARGUMENT_COUNT`](ModelFunction::ARGUMENT_COUNT)
    /// elements. The [`Model`](crate::model::Model) makes sure this can not happen
    /// for calls from within this library.
    fn eval(&self, x: f64, params: &[f64]) -> f64;

    /// The number of parameter arguments of the callable. So for a function `$f(x,p_1,...p_N)$`
    /// this is `N`.
    const ARGUMENT_COUNT: usize;
}
