use elevated::fetch::{get_number, FetchError};
use elevated::*;
use std::cell::Cell;

fn add(lhs: i32) -> impl Fn(i32) -> i32 {
	move |rhs| lhs + rhs
}

#[test]
fn ap_matches_operator_chain() {
	let one = get_number(1, false);
	let two = get_number(2, false);
	assert_eq!(ap!(pure(add) <*> one <*> two), pure(add) * one * two);
	assert_eq!(ap!(pure(add) <*> one <*> two), Outcome::Success(3));
}

#[test]
fn ap_accepts_arbitrary_operand_expressions() {
	let sum3 = |a: i32| move |b: i32| move |c: i32| a * 100 + b * 10 + c;
	let result = ap!(pure(sum3) <*> get_number(1, false) <*> pure(2) <*> get_number(1 + 2, false));
	assert_eq!(result, Outcome::Success(123));
}

#[test]
fn ap_reports_leftmost_failure() {
	let transform = Outcome::<fn(i32) -> i32, char>::Failure('f');
	assert_eq!(ap!(transform <*> Outcome::Failure('v')), Outcome::Failure('f'));
	let bad = get_number(1, true);
	assert_eq!(ap!(pure(add) <*> bad <*> get_number(2, false)), Outcome::Failure(FetchError));
}

#[test]
fn do_notation_binds_in_order() {
	let sum = do_notation! {
		let a <- get_number(4, false);
		let b = 5;
		let c <- get_number(a * 2, false);
		pure(a + b + c)
	};
	assert_eq!(sum, Outcome::Success(17));
}

#[test]
fn do_notation_stops_at_first_failure() {
	let reached = Cell::new(false);
	let flag = &reached;
	let sum: Outcome<i32, FetchError> = do_notation! {
		let a <- get_number(1, true);
		let b <- { flag.set(true); get_number(2, false) };
		pure(a + b)
	};
	assert_eq!(sum, Outcome::Failure(FetchError));
	assert!(!reached.get());
}
