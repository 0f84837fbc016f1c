use super::{Applicative, Functor, Monad};

/// Either a successful value or the cause of a failure.
///
/// An `Outcome` is never modified in place: every combinator consumes its
/// inputs and builds a new `Outcome`. Once a failure is present it is carried
/// through untouched, and no user supplied function is ever called on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E> {
	Success(T),
	Failure(E),
}

impl<T, E> Outcome<T, E> {
	pub fn success(value: T) -> Self {
		Outcome::Success(value)
	}

	pub fn failure(cause: E) -> Self {
		Outcome::Failure(cause)
	}

	pub fn is_success(&self) -> bool {
		matches!(self, Outcome::Success(_))
	}

	pub fn is_failure(&self) -> bool {
		!self.is_success()
	}

	/// The payload, discarding any failure cause.
	pub fn success_value(self) -> Option<T> {
		match self {
			Outcome::Success(value) => Some(value),
			Outcome::Failure(_) => None,
		}
	}

	/// The failure cause, discarding any payload.
	pub fn failure_cause(self) -> Option<E> {
		match self {
			Outcome::Success(_) => None,
			Outcome::Failure(cause) => Some(cause),
		}
	}

	pub fn as_ref(&self) -> Outcome<&T, &E> {
		match self {
			Outcome::Success(value) => Outcome::Success(value),
			Outcome::Failure(cause) => Outcome::Failure(cause),
		}
	}

	/// Transforms the payload of a success. `transform` is not called on a
	/// failure.
	pub fn map<U, F: FnOnce(T) -> U>(self, transform: F) -> Outcome<U, E> {
		match self {
			Outcome::Success(value) => Outcome::Success(transform(value)),
			Outcome::Failure(cause) => Outcome::Failure(cause),
		}
	}

	/// Chains a computation that may itself fail.
	pub fn flat_map<U, F: FnOnce(T) -> Outcome<U, E>>(self, transform: F) -> Outcome<U, E> {
		self.map(transform).flatten()
	}

	pub fn into_result(self) -> Result<T, E> {
		self.into()
	}
}

impl<T, E> Outcome<Outcome<T, E>, E> {
	/// Removes one level of nesting. The outer failure is reported before
	/// the inner one is looked at.
	pub fn flatten(self) -> Outcome<T, E> {
		match self {
			Outcome::Success(inner) => inner,
			Outcome::Failure(cause) => Outcome::Failure(cause),
		}
	}
}

impl<F, E> Outcome<F, E> {
	/// Applies the wrapped function to `value`, allowing
	/// `pure(f).apply(a).apply(b)` chains.
	///
	/// When both sides have failed, the failure of `self` is returned.
	pub fn apply<A, B>(self, value: Outcome<A, E>) -> Outcome<B, E>
	where
		F: FnOnce(A) -> B,
	{
		match self {
			Outcome::Success(function) => match value {
				Outcome::Success(value) => Outcome::Success(function(value)),
				Outcome::Failure(cause) => Outcome::Failure(cause),
			},
			Outcome::Failure(cause) => Outcome::Failure(cause),
		}
	}
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
	fn from(result: Result<T, E>) -> Self {
		match result {
			Ok(value) => Outcome::Success(value),
			Err(cause) => Outcome::Failure(cause),
		}
	}
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
	fn from(outcome: Outcome<T, E>) -> Self {
		match outcome {
			Outcome::Success(value) => Ok(value),
			Outcome::Failure(cause) => Err(cause),
		}
	}
}

impl<A, E> Functor<A> for Outcome<A, E> {
	type Map<B> = Outcome<B, E>;

	fn map<B, F: FnOnce(A) -> B>(self, f: F) -> Self::Map<B> {
		Outcome::map(self, f)
	}
}

impl<A, E> Applicative<A> for Outcome<A, E> {
	type Apply<B> = Outcome<B, E>;

	fn pure(a: A) -> Self {
		Outcome::Success(a)
	}

	fn ap<B, F: FnOnce(A) -> B>(self, f: Self::Apply<F>) -> Self::Apply<B> {
		f.apply(self)
	}
}

impl<A, E> Monad<A> for Outcome<A, E> {
	type Bind<B> = Outcome<B, E>;

	fn bind<B, F: FnOnce(A) -> Self::Bind<B>>(self, f: F) -> Self::Bind<B> {
		self.flat_map(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ret;
	use std::cell::Cell;

	type Checked<T> = Outcome<T, &'static str>;

	#[test]
	fn variants_are_exclusive() {
		let ok: Checked<i32> = Outcome::success(4);
		let bad: Checked<i32> = Outcome::failure("boom");
		assert!(ok.is_success() && !ok.is_failure());
		assert!(bad.is_failure() && !bad.is_success());
		assert_eq!(ok.success_value(), Some(4));
		assert_eq!(ok.failure_cause(), None);
		assert_eq!(bad.failure_cause(), Some("boom"));
	}

	#[test]
	fn map_skips_failures() {
		let calls = Cell::new(0);
		let bad: Checked<i32> = Outcome::Failure("boom");
		let mapped = bad.map(|x| {
			calls.set(calls.get() + 1);
			x + 1
		});
		assert_eq!(mapped, Outcome::Failure("boom"));
		assert_eq!(calls.get(), 0);
	}

	#[test]
	fn flatten_reports_outer_then_inner() {
		let nested: Checked<Checked<i32>> = Outcome::Success(Outcome::Success(7));
		assert_eq!(nested.flatten(), Outcome::Success(7));
		let inner: Checked<Checked<i32>> = Outcome::Success(Outcome::Failure("inner"));
		assert_eq!(inner.flatten(), Outcome::Failure("inner"));
		let outer: Checked<Checked<i32>> = Outcome::Failure("outer");
		assert_eq!(outer.flatten(), Outcome::Failure("outer"));
	}

	#[test]
	fn apply_method_prefers_function_failure() {
		let function: Checked<fn(i32) -> i32> = Outcome::Failure("function");
		assert_eq!(function.apply(Outcome::Failure("value")), Outcome::Failure("function"));
	}

	#[test]
	fn trait_impls_agree_with_inherent_methods() {
		let value: Checked<i32> = ret(20);
		assert_eq!(Functor::map(value, |x| x * 2), Outcome::Success(40));
		assert_eq!(value.ap(Outcome::Success(|x: i32| x + 1)), Outcome::Success(21));
		assert_eq!(
			value.ap(Outcome::<fn(i32) -> i32, _>::Failure("function")),
			Outcome::Failure("function")
		);
		assert_eq!(value.bind(|_| Outcome::Failure::<i32, _>("bound")), Outcome::Failure("bound"));
	}

	#[test]
	fn converts_to_and_from_result() {
		let ok: Checked<u8> = Ok(3).into();
		assert_eq!(ok, Outcome::Success(3));
		assert_eq!(Outcome::<u8, &str>::Failure("no").into_result(), Err("no"));
	}

}
