use num_traits::Signed;
use std::fmt::{Debug, Display};

/// A trait representing numeric types that can be stored in a [`Matrix`](crate::Matrix).
///
/// `Signed` brings in `Num` (zero, one, the four arithmetic operators and
/// `PartialEq`), `Neg` and `abs`, which covers everything the matrix
/// operations need. `Display` is required for the tab-separated rendering.
pub trait MatrixElement:
    Signed
    + Copy
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
}

macro_rules! impl_matrix_element {
    ($($t:ty)*) => {
        $(impl MatrixElement for $t {})*
    };
}

impl_matrix_element!(i8 i16 i32 i64 i128 isize f32 f64);
