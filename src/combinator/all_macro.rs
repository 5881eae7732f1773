//! The `all!` macro for variadic predicate conjunction.

/// Composes any number of predicates with short-circuiting conjunction.
///
/// `all!(p, q, r)(x)` is equivalent to `p(x) && q(x) && r(x)`, evaluated
/// left to right with the usual `&&` short-circuit: once an operand returns
/// `false`, later operands are not invoked.
///
/// # Syntax
///
/// - `all!(p)` - Returns `p` unchanged (identity composition)
/// - `all!(p, q)` - Returns `move |x| p(x) && q(x)`
/// - `all!(p, q, r, ...)` - Composes any number of predicates
///
/// There is no zero-operand form; `all!()` fails at macro expansion, making
/// an empty composition a construction-time error.
///
/// # Examples
///
/// ```rust
/// use seqflow::all;
///
/// let positive = |n: &i32| *n > 0;
/// let even = |n: &i32| n % 2 == 0;
/// let small = |n: &i32| *n < 100;
///
/// let wanted = all!(positive, even, small);
/// assert!(wanted(&42));
/// assert!(!wanted(&-2));
/// assert!(!wanted(&200));
/// ```
///
/// ## Short-circuiting
///
/// ```rust
/// use seqflow::all;
/// use std::cell::Cell;
///
/// let probe = Cell::new(0);
/// let gate = |_: &i32| false;
/// let counting = |_: &i32| {
///     probe.set(probe.get() + 1);
///     true
/// };
///
/// let composed = all!(gate, counting);
/// assert!(!composed(&1));
/// assert_eq!(probe.get(), 0);
/// ```
#[macro_export]
macro_rules! all {
    // Single predicate: identity composition
    ($predicate:expr $(,)?) => {
        $predicate
    };

    // Two or more predicates: recursive conjunction
    // all!(p, q, ...) = move |x| p(x) && all!(q, ...)(x)
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::all!($($rest),+);
        move |value| first(value) && rest(value)
    }};
}
