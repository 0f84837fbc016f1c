use std::ops::Mul;

use crate::{apply, Outcome};

/// `transform * value` is the applicative `<*>`: it is [`apply`] written
/// infix. `*` associates to the left, so `pure(f) * a * b` is
/// `apply(apply(pure(f), a), b)`.
impl<A, B, E, F> Mul<Outcome<A, E>> for Outcome<F, E>
where
	F: FnOnce(A) -> B,
{
	type Output = Outcome<B, E>;

	fn mul(self, value: Outcome<A, E>) -> Self::Output {
		apply(self, value)
	}
}
