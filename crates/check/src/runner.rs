//! Property runner: generates cases, reports the first failure and shrinks
//! it to a minimal counterexample.

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::shrink::Shrinker;
use crate::source::{case_seed, Source};
use crate::strategy::Strategy;

/// Why a single test case did not pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TestCaseError {
    /// The property does not hold for this input.
    #[error("{0}")]
    Fail(String),
    /// The input lies outside the property's domain; draw another one.
    #[error("input rejected: {0}")]
    Reject(String),
}

impl TestCaseError {
    pub fn fail(reason: impl Into<String>) -> Self {
        Self::Fail(reason.into())
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        Self::Reject(reason.into())
    }
}

pub type TestCaseResult = Result<(), TestCaseError>;

/// Summary of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    pub passed: u32,
    pub rejected: u32,
    pub seed: u64,
}

/// A falsified property, shrunk.
#[derive(Debug)]
pub struct Failure<T> {
    pub seed: u64,
    /// Index of the first failing case within the run.
    pub case: u64,
    pub original: T,
    pub minimal: T,
    /// Failure message of the minimal counterexample.
    pub reason: String,
    pub shrink_steps: u32,
    /// Choice buffer of the minimal counterexample; replaying it with
    /// [`Source::replay`] reproduces `minimal`.
    pub choices: Vec<u64>,
}

impl<T: fmt::Debug> fmt::Display for Failure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "minimal counterexample {:?} (seed {:#x}, case {}, {} shrink steps): {}",
            self.minimal, self.seed, self.case, self.shrink_steps, self.reason
        )
    }
}

#[derive(Debug, Error)]
pub enum CheckError<T: fmt::Debug> {
    #[error("property falsified: {0}")]
    Falsified(Box<Failure<T>>),
    #[error("too many rejected inputs: {rejected} rejected, {passed} passed")]
    TooManyRejects { passed: u32, rejected: u32 },
}

impl<T: fmt::Debug> CheckError<T> {
    pub fn failure(&self) -> Option<&Failure<T>> {
        match self {
            Self::Falsified(failure) => Some(failure),
            Self::TooManyRejects { .. } => None,
        }
    }

    pub fn into_failure(self) -> Option<Failure<T>> {
        match self {
            Self::Falsified(failure) => Some(*failure),
            Self::TooManyRejects { .. } => None,
        }
    }
}

pub(crate) enum Outcome {
    Pass,
    Reject(String),
    Fail(String),
}

/// Draws one value from `src` and runs `test` on it. Panics count as
/// failures; their message becomes the failure reason and the panic hook is
/// not invoked for them.
pub(crate) fn execute<S, F>(strategy: &S, test: &F, mut src: Source) -> (Outcome, Vec<u64>)
where
    S: Strategy + ?Sized,
    F: Fn(S::Value) -> TestCaseResult,
{
    let value = strategy.draw(&mut src);
    let outcome = match catch_quietly(|| test(value)) {
        Ok(Ok(())) => Outcome::Pass,
        Ok(Err(TestCaseError::Reject(reason))) => Outcome::Reject(reason),
        Ok(Err(TestCaseError::Fail(reason))) => Outcome::Fail(reason),
        Err(payload) => Outcome::Fail(panic_message(payload.as_ref())),
    };
    (outcome, src.into_choices())
}

thread_local! {
    static QUIET: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// `catch_unwind` that keeps panics on this thread away from the panic hook
/// while `f` runs. The previous hook still sees every other panic.
fn catch_quietly<R>(f: impl FnOnce() -> R) -> std::thread::Result<R> {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !QUIET.with(Cell::get) {
                previous(info);
            }
        }));
    });
    let was_quiet = QUIET.with(|quiet| quiet.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    QUIET.with(|quiet| quiet.set(was_quiet));
    result
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panicked: {msg}")
    } else {
        "panicked".to_owned()
    }
}

pub struct Runner {
    config: Config,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Runner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs `test` against `config.cases` independent values from
    /// `strategy`.
    ///
    /// Every case draws from its own source seeded by [`case_seed`], so
    /// cases never share state and any failure is reproducible from the
    /// run seed alone.
    pub fn run<S, F>(&self, strategy: &S, test: F) -> Result<Report, CheckError<S::Value>>
    where
        S: Strategy + ?Sized,
        F: Fn(S::Value) -> TestCaseResult,
    {
        let seed = self.config.seed;
        debug!(seed, cases = self.config.cases, "starting property run");

        let mut passed = 0u32;
        let mut rejected = 0u32;
        let mut case = 0u64;
        while passed < self.config.cases {
            let src = Source::from_seed(case_seed(seed, case));
            let (outcome, choices) = execute(strategy, &test, src);
            match outcome {
                Outcome::Pass => passed += 1,
                Outcome::Reject(reason) => {
                    rejected += 1;
                    if rejected > self.config.max_global_rejects {
                        warn!(passed, rejected, %reason, "giving up after too many rejected inputs");
                        return Err(CheckError::TooManyRejects { passed, rejected });
                    }
                }
                Outcome::Fail(reason) => {
                    info!(seed, case, %reason, "property falsified, shrinking");
                    return Err(CheckError::Falsified(Box::new(self.shrink(
                        strategy, &test, seed, case, choices, reason,
                    ))));
                }
            }
            case += 1;
        }

        debug!(seed, passed, rejected, "property run passed");
        Ok(Report {
            passed,
            rejected,
            seed,
        })
    }

    fn shrink<S, F>(
        &self,
        strategy: &S,
        test: &F,
        seed: u64,
        case: u64,
        choices: Vec<u64>,
        reason: String,
    ) -> Failure<S::Value>
    where
        S: Strategy + ?Sized,
        F: Fn(S::Value) -> TestCaseResult,
    {
        let original = strategy.draw(&mut Source::replay(choices.clone()));
        let mut shrinker = Shrinker::new(strategy, test, choices, reason, self.config.max_shrink_iters);
        shrinker.run();
        let (choices, reason, shrink_steps) = shrinker.finish();
        let minimal = strategy.draw(&mut Source::replay(choices.clone()));
        info!(seed, case, shrink_steps, minimal = ?minimal, "shrunk counterexample");
        Failure {
            seed,
            case,
            original,
            minimal,
            reason,
            shrink_steps,
            choices,
        }
    }
}

/// Runs `test` with [`Config::from_env`] and panics with the minimal
/// counterexample if the property is falsified.
///
/// # Panics
///
/// On a falsified property, on too many rejected inputs and on a malformed
/// `WORKSHOP_CHECK_*` variable.
#[track_caller]
pub fn assert_property<S, F>(strategy: S, test: F) -> Report
where
    S: Strategy,
    F: Fn(S::Value) -> TestCaseResult,
{
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => panic!("{err}"),
    };
    match Runner::new(config).run(&strategy, test) {
        Ok(report) => report,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::integers;

    #[test]
    fn caught_panics_leave_the_hook_enabled() {
        let err = Runner::new(Config::with_cases(50))
            .run(&integers(0i64, 100), |n| {
                assert!(n < 10, "too big");
                Ok(())
            })
            .unwrap_err();
        assert!(err.failure().is_some());
        assert!(!QUIET.with(Cell::get));
    }

    #[test]
    fn nested_catches_restore_the_outer_state() {
        let outer = catch_quietly(|| {
            let inner = catch_quietly(|| panic!("inner"));
            assert!(inner.is_err());
            QUIET.with(Cell::get)
        });
        assert_eq!(outer.ok(), Some(true));
        assert!(!QUIET.with(Cell::get));
    }

    #[test]
    fn panic_payloads_become_reasons() {
        let payload = catch_quietly(|| panic!("boom {}", 1)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "panicked: boom 1");
    }
}
