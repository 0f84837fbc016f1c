//! A stand-in for a remote number source.

use log::debug;
use thiserror::Error;

use crate::Outcome;

/// Why a number could not be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("the number could not be fetched")]
pub struct FetchError;

/// Pretends to fetch `number` from somewhere that can fail. Fails exactly
/// when `fail` is set.
pub fn get_number(number: i32, fail: bool) -> Outcome<i32, FetchError> {
	debug!("fetching {number} (fail = {fail})");
	if fail {
		Outcome::Failure(FetchError)
	} else {
		Outcome::Success(number)
	}
}
