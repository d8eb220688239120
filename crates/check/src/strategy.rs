//! The [`Strategy`] trait and its combinators.

use std::fmt;
use std::sync::Arc;

use crate::source::Source;

/// Describes a generation domain: how to turn choices into a value.
///
/// Implementations must map smaller choices to simpler values, because the
/// shrinker only ever makes choices smaller or removes them.
pub trait Strategy {
    type Value: fmt::Debug;

    fn draw(&self, src: &mut Source) -> Self::Value;

    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        U: fmt::Debug,
        F: Fn(Self::Value) -> U,
    {
        Map { inner: self, f }
    }

    fn boxed(self) -> BoxedStrategy<Self::Value>
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxedStrategy(Arc::new(self))
    }
}

impl<S: Strategy + ?Sized> Strategy for &S {
    type Value = S::Value;

    fn draw(&self, src: &mut Source) -> Self::Value {
        (**self).draw(src)
    }
}

/// Applies a function to every drawn value.
#[derive(Clone)]
pub struct Map<S, F> {
    inner: S,
    f: F,
}

impl<S, F, U> Strategy for Map<S, F>
where
    S: Strategy,
    F: Fn(S::Value) -> U,
    U: fmt::Debug,
{
    type Value = U;

    fn draw(&self, src: &mut Source) -> U {
        (self.f)(self.inner.draw(src))
    }
}

/// Type-erased, cheaply cloneable strategy.
pub struct BoxedStrategy<T>(Arc<dyn Strategy<Value = T> + Send + Sync>);

impl<T> Clone for BoxedStrategy<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: fmt::Debug> Strategy for BoxedStrategy<T> {
    type Value = T;

    fn draw(&self, src: &mut Source) -> T {
        self.0.draw(src)
    }
}

/// Always produces a clone of one value.
#[derive(Clone, Debug)]
pub struct Just<T>(pub T);

pub fn just<T: Clone + fmt::Debug>(value: T) -> Just<T> {
    Just(value)
}

impl<T: Clone + fmt::Debug> Strategy for Just<T> {
    type Value = T;

    fn draw(&self, _src: &mut Source) -> T {
        self.0.clone()
    }
}

/// Picks one of several alternatives; earlier alternatives count as simpler.
#[derive(Clone)]
pub struct OneOf<T> {
    options: Vec<BoxedStrategy<T>>,
}

/// Builds a [`OneOf`]. An empty list of alternatives is rejected with `None`.
pub fn one_of<T>(options: Vec<BoxedStrategy<T>>) -> Option<OneOf<T>> {
    if options.is_empty() {
        None
    } else {
        Some(OneOf { options })
    }
}

impl<T: fmt::Debug> Strategy for OneOf<T> {
    type Value = T;

    fn draw(&self, src: &mut Source) -> T {
        let last = (self.options.len() - 1) as u64;
        let idx = src.draw_upto(last) as usize;
        self.options[idx].draw(src)
    }
}

impl<A: Strategy, B: Strategy> Strategy for (A, B) {
    type Value = (A::Value, B::Value);

    fn draw(&self, src: &mut Source) -> Self::Value {
        let a = self.0.draw(src);
        let b = self.1.draw(src);
        (a, b)
    }
}

impl<A: Strategy, B: Strategy, C: Strategy> Strategy for (A, B, C) {
    type Value = (A::Value, B::Value, C::Value);

    fn draw(&self, src: &mut Source) -> Self::Value {
        let a = self.0.draw(src);
        let b = self.1.draw(src);
        let c = self.2.draw(src);
        (a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::{booleans, integers};

    #[test]
    fn map_applies_function() {
        let doubled = integers(0, 10).map(|n| n * 2);
        let mut src = Source::from_seed(3);
        for _ in 0..50 {
            let v = doubled.draw(&mut src);
            assert!(v % 2 == 0 && (0..=20).contains(&v));
        }
    }

    #[test]
    fn one_of_empty_is_none() {
        assert!(one_of::<i64>(Vec::new()).is_none());
    }

    #[test]
    fn one_of_zero_choice_is_first_alternative() {
        let pick = one_of(vec![just("first").boxed(), just("second").boxed()]).unwrap();
        let mut src = Source::replay(vec![]);
        assert_eq!(pick.draw(&mut src), "first");
        let mut src = Source::replay(vec![1]);
        assert_eq!(pick.draw(&mut src), "second");
    }

    #[test]
    fn tuples_draw_left_to_right() {
        let pair = (booleans(), integers(5, 9));
        let mut src = Source::replay(vec![]);
        assert_eq!(pair.draw(&mut src), (false, 5));
    }
}
