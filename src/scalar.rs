//! Capability tiers for the component type of a [`Vector2`](crate::Vector2).
//!
//! Every vector operation is gated on the weakest tier that can express it, so
//! asking an integer vector for its `length()` is a compile error rather than a
//! silent truncation.

use num_traits::{ConstOne, ConstZero, Float, FloatConst, Num, Signed};
use std::fmt::Debug;

/// Anything that adds, subtracts, multiplies and compares.
pub trait Scalar: Num + Copy + PartialOrd + ConstZero + ConstOne + Debug {}

/// A [`Scalar`] with a negative unit, needed by the directional constants.
pub trait SignedScalar: Scalar + Signed {
    const NEG_ONE: Self;
}

/// Floating point scalars. Division, roots, trigonometry and rounding live here.
pub trait Real: SignedScalar + Float + FloatConst {
    const HALF: Self;
    const TWO: Self;
    const THREE: Self;
    /// Default tolerance of the approximate comparisons.
    ///
    /// Far looser than any machine epsilon; pass an explicit tolerance for a
    /// genuine closeness check.
    const APPROX_TOLERANCE: Self;
}

macro_rules! scalar {
    ($($t:ty),*) => {
        $(impl Scalar for $t {})*
    };
}

macro_rules! signed {
    ($($t:ty => $neg_one:expr),*) => {
        $(impl SignedScalar for $t {
            const NEG_ONE: Self = $neg_one;
        })*
    };
}

macro_rules! real {
    ($($t:ty),*) => {
        $(impl Real for $t {
            const HALF: Self = 0.5;
            const TWO: Self = 2.0;
            const THREE: Self = 3.0;
            const APPROX_TOLERANCE: Self = 1.5;
        })*
    };
}

scalar!(f32, f64, i32, i64, u32, u64);
signed!(f32 => -1.0, f64 => -1.0, i32 => -1, i64 => -1);
real!(f32, f64);
