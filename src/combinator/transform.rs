//! Transform composition, pure and fallible.
//!
//! A transform is any pure `Fn(T) -> R`. Two chaining orders are provided,
//! matching the two conventions of function composition:
//!
//! - [`then`]: data-flow order, `then(f, g)(x) == g(f(x))`
//! - [`compose`]: mathematical order, `compose(f, g)(x) == f(g(x))`
//!
//! Fallible chains are built from stage-tagged transforms returning
//! `Result<R, InvocationError>`; [`fallible`] lifts an ordinary fallible
//! function into that shape and [`try_then`] chains two of them, skipping
//! the second stage when the first fails.

use super::error::{ArityError, InvocationError};

/// Chains two transforms in data-flow order.
///
/// `then(f, g)` applies `f` first, then `g` to its result.
///
/// # Laws
///
/// - **Associativity**: `then(then(f, g), h) == then(f, then(g, h))`
/// - **Identity**: `then(identity, f) == f == then(f, identity)`
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::then;
///
/// let render = |n: i32| n.to_string();
/// let measure = |s: String| s.len();
/// let digits = then(render, measure);
///
/// assert_eq!(digits(129), 3);
/// ```
#[inline]
pub fn then<T, U, V, F, G>(first: F, second: G) -> impl Fn(T) -> V
where
    F: Fn(T) -> U,
    G: Fn(U) -> V,
{
    move |input| second(first(input))
}

/// Chains two transforms in mathematical order.
///
/// `compose(f, g)` applies `g` first, then `f` to its result, following the
/// convention `(f . g)(x) = f(g(x))`.
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::compose;
///
/// let add_one = |n: i32| n + 1;
/// let double = |n: i32| n * 2;
///
/// // compose(f, g)(x) = f(g(x)) = add_one(double(5)) = 11
/// let composed = compose(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
#[inline]
pub fn compose<T, U, V, F, G>(outer: F, inner: G) -> impl Fn(T) -> V
where
    F: Fn(U) -> V,
    G: Fn(T) -> U,
{
    move |input| outer(inner(input))
}

/// Chains a non-empty list of same-type transforms in data-flow order.
///
/// Transforms apply left to right: `then_all(vec![f, g, h])` computes
/// `h(g(f(x)))`. A single operand is the identity composition. Zero
/// operands are rejected with [`ArityError`] at construction time.
///
/// # Errors
///
/// Returns [`ArityError`] if `transforms` is empty.
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::then_all;
///
/// let steps: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 2, |n| n - 3];
/// let chained = then_all(steps).unwrap();
///
/// // ((5 + 1) * 2) - 3 = 9
/// assert_eq!(chained(5), 9);
/// ```
pub fn then_all<T, F>(transforms: Vec<F>) -> Result<impl Fn(T) -> T, ArityError>
where
    F: Fn(T) -> T,
{
    if transforms.is_empty() {
        return Err(ArityError {
            combinator: "then_all",
        });
    }
    Ok(move |input: T| {
        transforms
            .iter()
            .fold(input, |value, transform| transform(value))
    })
}

/// Lifts a fallible function into a stage-tagged transform.
///
/// The returned transform maps any error of the underlying function into an
/// [`InvocationError`] carrying `stage`, so a failure inside a long chain
/// identifies where it originated.
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::fallible;
///
/// let parse = fallible("parse", |s: &str| s.parse::<i32>());
///
/// assert_eq!(parse("42").unwrap(), 42);
/// let error = parse("forty-two").unwrap_err();
/// assert_eq!(error.stage, "parse");
/// ```
pub fn fallible<T, R, E, F>(
    stage: &'static str,
    function: F,
) -> impl Fn(T) -> Result<R, InvocationError>
where
    F: Fn(T) -> Result<R, E>,
    E: std::fmt::Display,
{
    move |input| {
        function(input).map_err(|error| InvocationError {
            stage,
            message: error.to_string(),
        })
    }
}

/// Chains two fallible transforms, short-circuiting on failure.
///
/// `try_then(f, g)` applies `f` first; if it fails, its [`InvocationError`]
/// is returned and `g` is never invoked for that input. Otherwise `g` is
/// applied to the intermediate value.
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::{fallible, try_then};
///
/// let parse = fallible("parse", |s: &str| s.parse::<i32>());
/// let halve = fallible("halve", |n: i32| {
///     if n % 2 == 0 { Ok(n / 2) } else { Err("odd input") }
/// });
/// let chain = try_then(parse, halve);
///
/// assert_eq!(chain("42").unwrap(), 21);
/// assert_eq!(chain("oops").unwrap_err().stage, "parse");
/// assert_eq!(chain("7").unwrap_err().stage, "halve");
/// ```
pub fn try_then<T, U, V, F, G>(first: F, second: G) -> impl Fn(T) -> Result<V, InvocationError>
where
    F: Fn(T) -> Result<U, InvocationError>,
    G: Fn(U) -> Result<V, InvocationError>,
{
    move |input| first(input).and_then(&second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_then_applies_in_declaration_order() {
        let double = |n: i32| n * 2;
        let add_one = |n: i32| n + 1;
        assert_eq!(then(double, add_one)(5), 11);
        assert_eq!(then(add_one, double)(5), 12);
    }

    #[test]
    fn test_compose_is_then_flipped() {
        let double = |n: i32| n * 2;
        let add_one = |n: i32| n + 1;
        assert_eq!(compose(add_one, double)(5), then(double, add_one)(5));
    }

    #[test]
    fn test_try_then_skips_second_stage_on_failure() {
        let probe = Cell::new(0);
        let failing = fallible("first", |_: i32| Err::<i32, _>("boom"));
        let counting = |n: i32| {
            probe.set(probe.get() + 1);
            Ok::<_, InvocationError>(n)
        };
        let chain = try_then(failing, counting);

        let error = chain(1).unwrap_err();
        assert_eq!(error.stage, "first");
        assert_eq!(probe.get(), 0);
    }
}
