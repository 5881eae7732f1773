//! The `any!` macro for variadic predicate disjunction.

/// Composes any number of predicates with short-circuiting disjunction.
///
/// `any!(p, q, r)(x)` is equivalent to `p(x) || q(x) || r(x)`, evaluated
/// left to right with the usual `||` short-circuit: once an operand returns
/// `true`, later operands are not invoked.
///
/// # Syntax
///
/// - `any!(p)` - Returns `p` unchanged (identity composition)
/// - `any!(p, q)` - Returns `move |x| p(x) || q(x)`
/// - `any!(p, q, r, ...)` - Composes any number of predicates
///
/// There is no zero-operand form; `any!()` fails at macro expansion, making
/// an empty composition a construction-time error.
///
/// # Examples
///
/// ```rust
/// use seqflow::any;
///
/// let blank = |s: &&str| s.trim().is_empty();
/// let comment = |s: &&str| s.trim_start().starts_with('#');
///
/// let skippable = any!(blank, comment);
/// assert!(skippable(&"   "));
/// assert!(skippable(&"# note"));
/// assert!(!skippable(&"value = 3"));
/// ```
#[macro_export]
macro_rules! any {
    // Single predicate: identity composition
    ($predicate:expr $(,)?) => {
        $predicate
    };

    // Two or more predicates: recursive disjunction
    // any!(p, q, ...) = move |x| p(x) || any!(q, ...)(x)
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::any!($($rest),+);
        move |value| first(value) || rest(value)
    }};
}
