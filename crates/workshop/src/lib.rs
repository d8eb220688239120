//! Property-testing workshop exercises.
//!
//! Four small functions, each with the generation domain and the property
//! contract it is checked against:
//!
//! - [`sort`]: the output is a non-decreasing permutation of the input.
//! - [`max_below_sum`]: `max < sum` for at least two positive integers.
//! - [`leftpad`]: padding to a width measured in scalar values.
//! - [`Record`]: a JSON-like value that survives its serial form.
//!
//! ```
//! use workshop::{domains, properties, sort};
//! use workshop_check::{Config, Runner};
//!
//! let runner = Runner::new(Config::with_cases(32));
//! runner
//!     .run(&domains::integer_sequences(), |seq| {
//!         properties::sort_contract(sort, seq)
//!     })
//!     .unwrap();
//! ```

pub mod domains;
mod error;
mod leftpad;
pub mod properties;
mod record;
mod sort;
mod sum_max;

pub use error::ParseError;
pub use leftpad::leftpad;
pub use record::Record;
pub use sort::{is_non_decreasing, multiset, same_multiset, sort};
pub use sum_max::{max_and_sum, max_below_sum};
