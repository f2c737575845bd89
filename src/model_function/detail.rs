//! This module provides blanket implementations for the ModelFunction trait for all callables
//! `Fn(f64,f64)->f64`
//! `Fn(f64,f64,f64)->f64`
//! `Fn(f64,f64,f64,f64)->f64`
//! ...
//! and so on up to a maximum number of parameters. Currently the maximum number of
//! scalar parameters is 10.

use crate::model_function::ModelFunction;

// hand implemented so the pattern is visible, the rest is generated by the macro below
impl<Func> ModelFunction<(f64,)> for Func
where
    Func: Fn(f64, f64) -> f64,
{
    fn eval(&self, x: f64, params: &[f64]) -> f64 {
        if params.len() != Self::ARGUMENT_COUNT {
            panic!(
                "Model function expected {} arguments but the provided parameter slice has {} elements.",
                Self::ARGUMENT_COUNT,
                params.len()
            );
        }
        (self)(x, params[0])
    }

    const ARGUMENT_COUNT: usize = 1;
}

// the macro can be called with or without trailing comma, i.e.
// count_args!(a,b)==count_args!(a,b,)==2usize
macro_rules! count_args {
    () => {0usize};
    ($_head:tt, $($tail:tt),*) => {1usize + count_args!($($tail,)*)};
    ($_head:tt, $($tail:tt,)*) => {1usize + count_args!($($tail,)*)};
}

macro_rules! model_function_impl_helper ({$(($n:tt, $T:ty)),+} => {
    impl<Func> ModelFunction<($($T,)+)> for Func
    where Func: Fn(f64, $($T,)+) -> f64,
    {
        fn eval(&self, x: f64, params: &[f64]) -> f64 {
            if params.len() != Self::ARGUMENT_COUNT {
                panic!(
                    "Model function expected {} arguments but the provided parameter slice has {} elements.",
                    Self::ARGUMENT_COUNT,
                    params.len()
                );
            }
            (&self)(
            x,
            $(params[$n],)+)
        }

        const ARGUMENT_COUNT: usize = count_args!($($n,)+);
    }
});

// the numbers index into the parameter slice, so keep the sequence increasing
// when extending this list
model_function_impl_helper!((0, f64), (1, f64));
model_function_impl_helper!((0, f64), (1, f64), (2, f64));
model_function_impl_helper!((0, f64), (1, f64), (2, f64), (3, f64));
model_function_impl_helper!((0, f64), (1, f64), (2, f64), (3, f64), (4, f64));
model_function_impl_helper!((0, f64), (1, f64), (2, f64), (3, f64), (4, f64), (5, f64));
model_function_impl_helper!(
    (0, f64),
    (1, f64),
    (2, f64),
    (3, f64),
    (4, f64),
    (5, f64),
    (6, f64)
);
model_function_impl_helper!(
    (0, f64),
    (1, f64),
    (2, f64),
    (3, f64),
    (4, f64),
    (5, f64),
    (6, f64),
    (7, f64)
);
model_function_impl_helper!(
    (0, f64),
    (1, f64),
    (2, f64),
    (3, f64),
    (4, f64),
    (5, f64),
    (6, f64),
    (7, f64),
    (8, f64)
);
model_function_impl_helper!(
    (0, f64),
    (1, f64),
    (2, f64),
    (3, f64),
    (4, f64),
    (5, f64),
    (6, f64),
    (7, f64),
    (8, f64),
    (9, f64)
); //10 parameter arguments
   //if more are implemented, add tests as well
