//! Version selection: intersect the installed versions with every source
//! requirement, then let the user's strategy pick one.

use std::path::Path;

use crate::error::{ResolveError, ResolveResult};
use crate::pragma;
use crate::range::{self, VersionRange, ANY};
use crate::strategy::{Strategy, TieBreak};
use crate::version::SolcVersion;

/// Choose a version for compiling `candidate` under `strategy`.
///
/// Without a candidate the source imposes no constraint.
pub fn resolve(
    installed: &[SolcVersion],
    candidate: Option<&Path>,
    strategy: &Strategy,
) -> ResolveResult<SolcVersion> {
    let rules = match candidate {
        Some(path) => pragma::rules_from_file(path)?,
        None => vec![ANY.to_string()],
    };
    resolve_with_rules(installed, &rules, strategy)
}

/// Choose a version satisfying all of `rules` and then `strategy`.
///
/// Rules are applied in order, each narrowing the set left by the previous
/// one. The first rule that leaves nothing is reported.
pub fn resolve_with_rules(
    installed: &[SolcVersion],
    rules: &[String],
    strategy: &Strategy,
) -> ResolveResult<SolcVersion> {
    let mut remaining = installed.to_vec();
    for rule in rules {
        let range = VersionRange::parse(rule)?;
        remaining = range::filter(&remaining, &range);
        tracing::debug!(%rule, left = remaining.len(), "applied source rule");
        if remaining.is_empty() {
            return Err(ResolveError::NoVersionSatisfiesSource {
                available: names(installed),
                rule: rule.clone(),
            });
        }
    }

    choose_by_strategy(&remaining, strategy)?.ok_or_else(|| {
        ResolveError::NoVersionSatisfiesUser {
            available: names(installed),
            source_rules: rules.to_vec(),
            user_rule: strategy.to_string(),
        }
    })
}

/// Pick the newest or oldest of `versions` within the strategy's range.
pub fn choose_by_strategy(
    versions: &[SolcVersion],
    strategy: &Strategy,
) -> ResolveResult<Option<SolcVersion>> {
    let range = VersionRange::parse(&strategy.range)?;
    let chosen = match strategy.tie_break {
        TieBreak::Newest => range::max_satisfying(versions, &range),
        TieBreak::Oldest => range::min_satisfying(versions, &range),
    };
    tracing::debug!(%strategy, chosen = ?chosen.as_ref().map(ToString::to_string), "applied strategy");
    Ok(chosen)
}

fn names(versions: &[SolcVersion]) -> Vec<String> {
    versions.iter().map(ToString::to_string).collect()
}
