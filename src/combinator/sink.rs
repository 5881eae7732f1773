//! Sink chaining with defined execution order.
//!
//! A sink is a function `Fn(&T)` invoked for its externally observable side
//! effect (printing, appending to a collection). Chained sinks execute in
//! declaration order for every element: the first sink runs to completion,
//! side effects included, before the second one starts.

use super::error::InvocationError;

/// Chains two sinks, executing them in declaration order.
///
/// For every element, `first` runs to completion before `second` is
/// invoked.
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::tee;
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// let greet = |name: &&str| log.borrow_mut().push(format!("Hello {name}!"));
/// let wish = |_: &&str| log.borrow_mut().push("Have a nice day".to_string());
///
/// let greeting = tee(greet, wish);
/// greeting(&"Alex");
/// drop(greeting);
///
/// assert_eq!(
///     log.into_inner(),
///     vec!["Hello Alex!".to_string(), "Have a nice day".to_string()]
/// );
/// ```
#[inline]
pub fn tee<T, A, B>(first: A, second: B) -> impl Fn(&T)
where
    A: Fn(&T),
    B: Fn(&T),
{
    move |value| {
        first(value);
        second(value);
    }
}

/// Chains two fallible sinks, skipping the second when the first fails.
///
/// # Errors
///
/// Propagates the first [`InvocationError`] raised by either sink; when
/// `first` fails for an element, `second` is not invoked for that element.
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::{try_tee, InvocationError};
/// use std::cell::Cell;
///
/// let delivered = Cell::new(0);
/// let reject = |_: &i32| {
///     Err(InvocationError { stage: "reject", message: "full".to_string() })
/// };
/// let count = |_: &i32| {
///     delivered.set(delivered.get() + 1);
///     Ok(())
/// };
///
/// let chained = try_tee(reject, count);
/// assert_eq!(chained(&1).unwrap_err().stage, "reject");
/// assert_eq!(delivered.get(), 0); // second sink never ran
/// ```
pub fn try_tee<T, A, B>(first: A, second: B) -> impl Fn(&T) -> Result<(), InvocationError>
where
    A: Fn(&T) -> Result<(), InvocationError>,
    B: Fn(&T) -> Result<(), InvocationError>,
{
    move |value| {
        first(value)?;
        second(value)
    }
}
