//! Composable predicates

use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::sync::Arc;

use shirasu_domain::error::Result;

use crate::di::{Injectable, Injector};

/// An injected boolean predicate over the current event
///
/// `a | b` and `a & b` evaluate both operands concurrently on every
/// match, then combine the results. Neither operator short-circuits, so a
/// predicate with side effects (such as a `command` rule capturing
/// arguments) runs even when the other operand already decides the
/// outcome.
#[derive(Clone)]
pub struct Rule {
    predicate: Injectable<bool>,
}

impl Rule {
    /// Wrap a predicate
    pub fn new(predicate: Injectable<bool>) -> Self {
        Self { predicate }
    }

    /// A rule that always matches
    pub fn always() -> Self {
        Self::new(Injectable::sync(Vec::<String>::new(), |_| Ok(true)))
    }

    /// Evaluate the predicate in `injector`
    pub async fn matches(&self, injector: &Arc<Injector>) -> Result<bool> {
        injector.inject(self.predicate.clone()).call().await
    }

    fn compose(self, other: Rule, op: fn(bool, bool) -> bool) -> Rule {
        Rule::new(Injectable::new(Vec::<String>::new(), move |deps| {
            let (left, right) = (self.clone(), other.clone());
            async move {
                let injector = deps.injector();
                let (l, r) = futures::join!(left.matches(injector), right.matches(injector));
                Ok(op(l?, r?))
            }
        }))
    }
}

impl BitOr for Rule {
    type Output = Rule;

    fn bitor(self, rhs: Rule) -> Rule {
        self.compose(rhs, |l, r| l || r)
    }
}

impl BitAnd for Rule {
    type Output = Rule;

    fn bitand(self, rhs: Rule) -> Rule {
        self.compose(rhs, |l, r| l && r)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("deps", &self.predicate.dependencies())
            .finish()
    }
}
