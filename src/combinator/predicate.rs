//! Predicate composition with short-circuit evaluation.
//!
//! A predicate is any `Fn(&T) -> bool`. The combinators here build larger
//! predicates out of smaller ones with a defined evaluation order: the left
//! operand always runs first, and the right operand is skipped whenever the
//! left already determines the result.
//!
//! All constructors take their operands by value (`move` capture), so a
//! composed predicate snapshots whatever it closed over at construction
//! time. A later mutation of a captured binding cannot be observed; the
//! borrow checker rejects such programs when the composition is built.

use super::error::ArityError;

/// Composes two predicates with short-circuiting conjunction.
///
/// The returned predicate evaluates `first`; if it returns `false`, the
/// result is `false` and `second` is never invoked. Otherwise the result is
/// whatever `second` returns.
///
/// # Laws
///
/// - `and(p, q)(x) == p(x) && q(x)` for all pure `p`, `q`
/// - `q` is not evaluated when `p(x)` is `false`
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::and;
///
/// let starts_with_a = |name: &&str| name.starts_with('A');
/// let longer_than_three = |name: &&str| name.len() > 3;
/// let condition = and(starts_with_a, longer_than_three);
///
/// assert!(!condition(&"Ana"));
/// assert!(condition(&"Andrew"));
/// ```
///
/// ## Short-circuiting
///
/// ```rust
/// use seqflow::combinator::and;
/// use std::cell::Cell;
///
/// let probe = Cell::new(0);
/// let never_true = |_: &i32| false;
/// let counting = |_: &i32| {
///     probe.set(probe.get() + 1);
///     true
/// };
///
/// let condition = and(never_true, counting);
/// assert!(!condition(&7));
/// assert_eq!(probe.get(), 0); // right operand skipped
/// ```
#[inline]
pub fn and<T, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value| first(value) && second(value)
}

/// Composes two predicates with short-circuiting disjunction.
///
/// The returned predicate evaluates `first`; if it returns `true`, the
/// result is `true` and `second` is never invoked.
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::or;
///
/// let negative = |n: &i32| *n < 0;
/// let huge = |n: &i32| *n > 1_000_000;
/// let out_of_range = or(negative, huge);
///
/// assert!(out_of_range(&-1));
/// assert!(out_of_range(&2_000_000));
/// assert!(!out_of_range(&42));
/// ```
#[inline]
pub fn or<T, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value| first(value) || second(value)
}

/// Negates a predicate.
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::not;
///
/// let even = |n: &i32| n % 2 == 0;
/// let odd = not(even);
///
/// assert!(odd(&3));
/// assert!(!odd(&4));
/// ```
#[inline]
pub fn not<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |value| !predicate(value)
}

/// Composes a non-empty list of predicates with short-circuiting
/// conjunction.
///
/// Operands are evaluated left to right; evaluation stops at the first
/// `false`. A single operand is the identity composition. Zero operands are
/// rejected with [`ArityError`] at construction time.
///
/// # Errors
///
/// Returns [`ArityError`] if `predicates` is empty.
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::and_all;
///
/// let conditions: Vec<fn(&i32) -> bool> =
///     vec![|n| *n > 0, |n| n % 2 == 0, |n| *n < 100];
/// let in_range_even = and_all(conditions).unwrap();
///
/// assert!(in_range_even(&42));
/// assert!(!in_range_even(&-2));
/// assert!(!in_range_even(&7));
/// ```
pub fn and_all<T, P>(predicates: Vec<P>) -> Result<impl Fn(&T) -> bool, ArityError>
where
    P: Fn(&T) -> bool,
{
    if predicates.is_empty() {
        return Err(ArityError {
            combinator: "and_all",
        });
    }
    Ok(move |value: &T| predicates.iter().all(|predicate| predicate(value)))
}

/// Composes a non-empty list of predicates with short-circuiting
/// disjunction.
///
/// Operands are evaluated left to right; evaluation stops at the first
/// `true`.
///
/// # Errors
///
/// Returns [`ArityError`] if `predicates` is empty.
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::or_all;
///
/// let conditions: Vec<fn(&&str) -> bool> =
///     vec![|s| s.is_empty(), |s| s.starts_with('#'), |s| s.starts_with("//")];
/// let skippable = or_all(conditions).unwrap();
///
/// assert!(skippable(&""));
/// assert!(skippable(&"# comment"));
/// assert!(!skippable(&"let x = 1;"));
/// ```
pub fn or_all<T, P>(predicates: Vec<P>) -> Result<impl Fn(&T) -> bool, ArityError>
where
    P: Fn(&T) -> bool,
{
    if predicates.is_empty() {
        return Err(ArityError {
            combinator: "or_all",
        });
    }
    Ok(move |value: &T| predicates.iter().any(|predicate| predicate(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_and_agrees_with_conjunction() {
        let even = |n: &i32| n % 2 == 0;
        let positive = |n: &i32| *n > 0;
        let both = and(even, positive);
        for n in -4..=4 {
            assert_eq!(both(&n), n % 2 == 0 && n > 0);
        }
    }

    #[test]
    fn test_or_skips_right_operand_when_left_true() {
        let probe = Cell::new(0);
        let always = |_: &i32| true;
        let counting = |_: &i32| {
            probe.set(probe.get() + 1);
            false
        };
        let either = or(always, counting);
        assert!(either(&0));
        assert_eq!(probe.get(), 0);
    }

    #[test]
    fn test_and_all_single_operand_is_identity() {
        let only = and_all(vec![|n: &i32| *n > 10]).unwrap();
        assert!(only(&11));
        assert!(!only(&10));
    }

    #[test]
    fn test_or_all_empty_is_arity_error() {
        let empty: Vec<fn(&i32) -> bool> = Vec::new();
        let error = or_all(empty).map(|_| ()).unwrap_err();
        assert_eq!(error.combinator, "or_all");
    }
}
