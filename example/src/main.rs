use elevated::fetch::{get_number, FetchError};
use elevated::*;
use log::LevelFilter;

const LOG_ENV: &str = "ELEVATED_LOG";

fn main() {
	let (level, rejected) = log_level(std::env::var(LOG_ENV).ok().as_deref());
	if let Err(err) = setup_logger(level) {
		eprintln!("could not install logger: {err}");
	}
	if let Some(value) = rejected {
		log::warn!("ignoring {LOG_ENV}={value:?}, using {level}");
	}

	let number_one = get_number(1, false);
	let number_two = get_number(2, false);

	// Nested calls, with `add` curried so it can be applied one argument at a time.
	report("apply", apply(apply(pure(curry(add)), number_one), number_two), number_one, number_two);

	// The same chain with the operator and an `add` that is curried by hand.
	report("operator", pure(add_curried) * number_one * number_two, number_one, number_two);
	report("ap!", ap!(pure(add_curried) <*> number_one <*> number_two), number_one, number_two);

	// No currying at all.
	report("apply2", apply2(pure(add), number_one, number_two), number_one, number_two);

	let missing = get_number(1, true);
	report("operator", pure(add_curried) * missing * number_two, missing, number_two);

	let sum = do_notation! {
		let lhs <- get_number(20, false);
		let rhs <- get_number(22, false);
		pure(lhs + rhs)
	};
	report("do_notation", sum, Outcome::Success(20), Outcome::Success(22));
}

fn add(lhs: i32, rhs: i32) -> i32 {
	lhs + rhs
}

fn add_curried(lhs: i32) -> impl Fn(i32) -> i32 {
	move |rhs| lhs + rhs
}

fn report(
	label: &str,
	result: Outcome<i32, FetchError>,
	lhs: Outcome<i32, FetchError>,
	rhs: Outcome<i32, FetchError>,
) {
	match result {
		Outcome::Success(value) => println!("{label}:\tThe result is {value}"),
		Outcome::Failure(cause) => println!("{label}:\tFailed to add {lhs:?} and {rhs:?}: {cause}"),
	}
}

/// Parses the log level, returning the rejected input when it is not a level.
fn log_level(raw: Option<&str>) -> (LevelFilter, Option<String>) {
	match raw {
		None => (LevelFilter::Info, None),
		Some(raw) => match raw.trim().parse() {
			Ok(level) => (level, None),
			Err(_) => (LevelFilter::Info, Some(raw.to_owned())),
		},
	}
}

fn setup_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!("[{}][{}] {}", record.level(), record.target(), message))
		})
		.level(level)
		.chain(std::io::stdout())
		.apply()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn log_level_defaults_to_info() {
		assert_eq!(log_level(None), (LevelFilter::Info, None));
	}

	#[test]
	fn log_level_parses_known_levels() {
		assert_eq!(log_level(Some("debug")), (LevelFilter::Debug, None));
		assert_eq!(log_level(Some(" OFF ")), (LevelFilter::Off, None));
	}

	#[test]
	fn log_level_rejects_unknown_levels() {
		assert_eq!(log_level(Some("loud")), (LevelFilter::Info, Some("loud".to_owned())));
	}
}
