//! workshop-check - seedable example generation with shrinking.
//!
//! A [`Strategy`] turns a stream of recorded choices from a [`Source`] into
//! a value. The [`Runner`] checks a property against many independently
//! seeded values and, on failure, shrinks the failing choice sequence to a
//! minimal counterexample.
//!
//! ```
//! use workshop_check::{check_assert, integers, vecs, Config, Runner};
//!
//! let runner = Runner::new(Config::with_cases(64));
//! let report = runner
//!     .run(&vecs(integers(1i64, 100), 2, 10), |v| {
//!         check_assert!(v.iter().max() < Some(&v.iter().sum::<i64>()));
//!         Ok(())
//!     })
//!     .unwrap();
//! assert_eq!(report.passed, 64);
//! ```

mod collection;
mod config;
mod macros;
mod num;
mod runner;
mod shrink;
mod source;
mod strategy;
mod text;

pub use collection::{vecs, VecStrategy};
pub use config::{
    Config, ConfigError, DEFAULT_SEED, ENV_CASES, ENV_MAX_REJECTS, ENV_MAX_SHRINK_ITERS, ENV_SEED,
};
pub use num::{
    any_i64, booleans, finite_floats, integers, Booleans, Bounded, FiniteFloats, Integers,
};
pub use runner::{
    assert_property, CheckError, Failure, Report, Runner, TestCaseError, TestCaseResult,
};
pub use source::{case_seed, Source};
pub use strategy::{just, one_of, BoxedStrategy, Just, Map, OneOf, Strategy};
pub use text::{any_char, char_range, text, AnyChar, CharRange, Text};
