//! Capability traits used by aggregation operators.

/// Additive accumulation, used by [`LazySeq::total`](crate::LazySeq::total).
///
/// `A` is the element type being folded in. Primitive numbers implement this
/// both for owned elements and for references, so `total` works on
/// `vec.iter()` as well as `vec.into_iter()`.
///
/// # Example
///
/// ```
/// use standout_seq::Summable;
///
/// #[derive(Debug, PartialEq)]
/// struct Cents(u64);
///
/// impl Summable for Cents {
///     fn zero() -> Self {
///         Cents(0)
///     }
///
///     fn accumulate(self, item: Cents) -> Self {
///         Cents(self.0 + item.0)
///     }
/// }
///
/// use standout_seq::LazySeq;
/// let total: Cents = vec![Cents(150), Cents(250)].into_iter().total();
/// assert_eq!(total, Cents(400));
/// ```
pub trait Summable<A = Self> {
    /// The additive identity. Returned for an empty sequence.
    fn zero() -> Self;

    /// Adds one element to the running total.
    fn accumulate(self, item: A) -> Self;
}

macro_rules! impl_summable {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Summable for $ty {
                fn zero() -> Self {
                    $zero
                }

                fn accumulate(self, item: $ty) -> Self {
                    self + item
                }
            }

            impl<'a> Summable<&'a $ty> for $ty {
                fn zero() -> Self {
                    $zero
                }

                fn accumulate(self, item: &'a $ty) -> Self {
                    self + *item
                }
            }
        )*
    };
}

impl_summable! {
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    u128 => 0,
    usize => 0,
    f32 => 0.0,
    f64 => 0.0,
}
