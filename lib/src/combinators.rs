//! Free function forms of the combinators.
//!
//! Every combinator here short circuits: a failure is passed through
//! unchanged and no user function is invoked on it. Where several inputs can
//! fail, they are checked left to right and the first failure wins.

use crate::Outcome;

/// Lifts a plain value. Never fails.
pub fn pure<T, E>(value: T) -> Outcome<T, E> {
	Outcome::Success(value)
}

/// Transforms the payload of `with`.
pub fn map<T, U, E, F>(transform: F, with: Outcome<T, E>) -> Outcome<U, E>
where
	F: FnOnce(T) -> U,
{
	apply(pure(transform), with)
}

/// Curried [`map`]: lifts `transform` into a function over outcomes.
pub fn map_curried<T, U, E, F>(transform: F) -> impl Fn(Outcome<T, E>) -> Outcome<U, E>
where
	F: Fn(T) -> U,
{
	move |input| input.map(&transform)
}

/// Applies a wrapped function to a wrapped value.
///
/// `transform` is checked first, so when both have failed its cause is the
/// one returned.
pub fn apply<T, U, E, F>(transform: Outcome<F, E>, with: Outcome<T, E>) -> Outcome<U, E>
where
	F: FnOnce(T) -> U,
{
	match transform {
		Outcome::Success(function) => match with {
			Outcome::Success(value) => Outcome::Success(function(value)),
			Outcome::Failure(cause) => Outcome::Failure(cause),
		},
		Outcome::Failure(cause) => Outcome::Failure(cause),
	}
}

/// Curried [`apply`].
pub fn apply_curried<T, U, E, F>(transform: Outcome<F, E>) -> impl FnOnce(Outcome<T, E>) -> Outcome<U, E>
where
	F: FnOnce(T) -> U,
{
	move |input| apply(transform, input)
}

/// Applies a wrapped two argument function to two wrapped arguments without
/// currying it first.
///
/// Checks `transform`, then `lhs`, then `rhs`, returning the first failure.
pub fn apply2<A, B, C, E, F>(transform: Outcome<F, E>, lhs: Outcome<A, E>, rhs: Outcome<B, E>) -> Outcome<C, E>
where
	F: FnOnce(A, B) -> C,
{
	match transform {
		Outcome::Success(function) => match lhs {
			Outcome::Success(lhs) => match rhs {
				Outcome::Success(rhs) => Outcome::Success(function(lhs, rhs)),
				Outcome::Failure(cause) => Outcome::Failure(cause),
			},
			Outcome::Failure(cause) => Outcome::Failure(cause),
		},
		Outcome::Failure(cause) => Outcome::Failure(cause),
	}
}

/// Flattens one level of nesting.
pub fn concat<T, E>(result: Outcome<Outcome<T, E>, E>) -> Outcome<T, E> {
	result.flatten()
}

/// Chains `transform`, which may itself fail, onto `with`.
pub fn flat_map<T, U, E, F>(transform: F, with: Outcome<T, E>) -> Outcome<U, E>
where
	F: FnOnce(T) -> Outcome<U, E>,
{
	concat(map(transform, with))
}

/// Curried [`flat_map`].
pub fn flat_map_curried<T, U, E, F>(transform: F) -> impl Fn(Outcome<T, E>) -> Outcome<U, E>
where
	F: Fn(T) -> Outcome<U, E>,
{
	move |input| concat(map(&transform, input))
}
