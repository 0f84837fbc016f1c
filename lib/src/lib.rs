//! Lifting ordinary functions into a context that may have failed.
//!
//! The crate is built around [`Outcome`], a value that is either a
//! [`Success`](Outcome::Success) or a [`Failure`](Outcome::Failure), and a
//! small vocabulary of combinators for working inside it without unwrapping
//! it by hand:
//!
//! - [`pure`] lifts a plain value.
//! - [`map`] and [`map_curried`] transform the payload.
//! - [`apply`], [`apply_curried`] and [`apply2`] feed wrapped arguments to a
//!   wrapped function.
//! - [`concat`] flattens one level of nesting, and [`flat_map`] /
//!   [`flat_map_curried`] chain functions that may themselves fail.
//! - [`curry`] turns a two argument function into a chain of one argument
//!   functions so it can be threaded through `apply`.
//!
//! Rust has no user defined operators, so the applicative `<*>` is spelled
//! `*` on an `Outcome` holding a function, or written literally inside [`ap!`].
//!
//! ```
//! use elevated::*;
//!
//! fn add(lhs: i32, rhs: i32) -> i32 {
//! 	lhs + rhs
//! }
//!
//! let one = fetch::get_number(1, false);
//! let two = fetch::get_number(2, false);
//!
//! assert_eq!(pure(curry(add)) * one * two, Outcome::Success(3));
//! assert_eq!(ap!(pure(curry(add)) <*> one <*> two), Outcome::Success(3));
//! assert_eq!(apply2(pure(add), one, two), Outcome::Success(3));
//! ```

extern crate self as elevated;

mod combinators;
mod curry;
pub mod fetch;
mod ops;
mod outcome;

pub use combinators::*;
pub use curry::*;
pub use elevated_codegen::*;
pub use outcome::*;

/// A container whose payload can be transformed without leaving the
/// container.
pub trait Functor<A> {
	type Map<B>;

	/// Applies `f` to the payload, if there is one.
	fn map<B, F: FnOnce(A) -> B>(self, f: F) -> Self::Map<B>;
}

/// A [`Functor`] that can lift plain values and apply wrapped functions.
pub trait Applicative<A>: Functor<A> + Sized {
	type Apply<B>;

	/// Lifts `a` into the container.
	fn pure(a: A) -> Self;

	/// Applies the wrapped function `f` to the wrapped value `self`.
	fn ap<B, F: FnOnce(A) -> B>(self, f: Self::Apply<F>) -> Self::Apply<B>;
}

/// An [`Applicative`] whose computations can be sequenced.
pub trait Monad<A>: Applicative<A> {
	type Bind<B>;

	/// Feeds the payload to `f` and returns whatever container `f` produced.
	fn bind<B, F: FnOnce(A) -> Self::Bind<B>>(self, f: F) -> Self::Bind<B>;
}

/// Lifts `a` into any [`Applicative`], chosen by inference.
pub fn ret<M: Applicative<A>, A>(a: A) -> M {
	M::pure(a)
}
