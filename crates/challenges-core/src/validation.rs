//! Validation run on a draft before it is submitted

use std::collections::HashSet;

use crate::{ChallengeConfiguration, ChallengeDraft, CoreError, GoalsConfig};

/// Validate a challenge draft
pub fn validate_draft(draft: &ChallengeDraft) -> Result<(), CoreError> {
    if draft.name.trim().is_empty() {
        return Err(CoreError::Validation("name is required".into()));
    }

    validate_configuration(&draft.configuration)
}

/// Validate the structural invariants of a configuration
pub fn validate_configuration(config: &ChallengeConfiguration) -> Result<(), CoreError> {
    match &config.goals {
        GoalsConfig::Collection { items } => {
            let mut seen = HashSet::new();
            for goal in items {
                if goal.id.is_empty() {
                    return Err(CoreError::Validation("goal id cannot be empty".into()));
                }
                if goal.name.is_empty() {
                    return Err(CoreError::Validation(format!(
                        "goal {} needs a name",
                        goal.id
                    )));
                }
                if !seen.insert(goal.id.as_str()) {
                    return Err(CoreError::Validation(format!(
                        "duplicate goal id: {}",
                        goal.id
                    )));
                }
            }
        }
        GoalsConfig::Cumulative { unit, .. } => {
            if unit.is_empty() {
                return Err(CoreError::Validation(
                    "cumulative goal unit is required".into(),
                ));
            }
        }
    }

    if let Some(tiers) = &config.tiers {
        for (position, tier) in tiers.iter().enumerate() {
            if tier.id.is_empty() {
                return Err(CoreError::Validation("tier id cannot be empty".into()));
            }
            if tier.order as usize != position {
                return Err(CoreError::Validation(format!(
                    "tier {} has order {} at position {}",
                    tier.id, tier.order, position
                )));
            }
        }
    }

    if config
        .qualification_criteria
        .match_rules
        .iter()
        .any(|rule| rule.qso_field.is_empty())
    {
        return Err(CoreError::Validation(
            "match rules must name a QSO field".into(),
        ));
    }

    if let Some(constraints) = &config.time_constraints {
        if constraints.timezone.is_empty() {
            return Err(CoreError::Validation("timezone is required".into()));
        }
    }

    Ok(())
}
