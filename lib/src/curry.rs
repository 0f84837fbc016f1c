/// Converts a two argument function into a function of the first argument
/// that returns a function of the second.
///
/// The first argument is captured before the second is supplied, and the
/// wrapped function only runs once both are known. The inner function can be
/// called repeatedly, which is why `function` and the captured argument are
/// cloned on each call.
///
/// ```
/// use elevated::curry;
///
/// let add = curry(|lhs: i32, rhs: i32| lhs + rhs);
/// let add_two = add(2);
/// assert_eq!(add_two(3), 5);
/// assert_eq!(add_two(40), 42);
/// ```
pub fn curry<'f, A, B, C, F>(function: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C + 'f>
where
	F: Fn(A, B) -> C + Clone + 'f,
	A: Clone + 'f,
{
	move |first: A| -> Box<dyn Fn(B) -> C + 'f> {
		let function = function.clone();
		Box::new(move |second| function(first.clone(), second))
	}
}
