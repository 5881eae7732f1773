//! Helper functions (combinators) serving as composition units.

/// Returns the value unchanged.
///
/// The identity function is the unit element of transform composition:
/// `then(identity, f)` and `then(f, identity)` are both equivalent to `f`.
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
///
/// // Replace all elements with zeros
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}
