//! Ordered rule cascade.
//!
//! A cascade is a fixed table of [`Rule`]s folded over a seed state. Every
//! rule whose predicate holds replaces the state with its transform's
//! output, so a later rule always wins over an earlier one touching the
//! same field. Several rules may match the same mode; they fire in table
//! order.

use crate::config::Config;

/// One conditional step of a cascade.
///
/// `when` sees the state produced by the previous rules, so a rule may
/// depend on what ran before it.
pub(crate) struct Rule<I, S> {
    pub(crate) name: &'static str,
    pub(crate) when: fn(&Config, &I, &S) -> bool,
    pub(crate) then: fn(&Config, &I, S) -> S,
}

#[cfg(test)]
impl<I, S> Rule<I, S> {
    /// Applies this rule alone, honoring its predicate.
    pub(crate) fn apply(&self, config: &Config, input: &I, state: S) -> S {
        if (self.when)(config, input, &state) {
            (self.then)(config, input, state)
        } else {
            state
        }
    }
}

/// Folds `seed` through `rules` in order.
pub(crate) fn run<I, S>(
    rules: &[Rule<I, S>],
    config: &Config,
    input: &I,
    seed: S,
    label: &str,
) -> S {
    rules.iter().fold(seed, |state, rule| {
        if (rule.when)(config, input, &state) {
            log::trace!("{}: rule '{}' applies", label, rule.name);
            (rule.then)(config, input, state)
        } else {
            state
        }
    })
}

/// Looks a rule up by name.
#[cfg(test)]
pub(crate) fn find<'a, I, S>(rules: &'a [Rule<I, S>], name: &str) -> Option<&'a Rule<I, S>> {
    rules.iter().find(|rule| rule.name == name)
}

pub(crate) fn always<I, S>(_: &Config, _: &I, _: &S) -> bool {
    true
}
