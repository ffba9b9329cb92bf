//! Tiered badges from lifetime figures.
//!
//! Families are independent and each yields at most its highest tier met.
//! Badges are minted fresh on every call; deduplicating against badges
//! already stored is left to the caller.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use foresight_core::config::{BadgeConfig, ThresholdTable};
use foresight_core::models::{Badge, BadgeFamily, BadgeTier, ExpertId, LifetimeAggregate};

/// Award badges for `lifetime`, stamped `awarded_at`.
///
/// Speed is skipped when the expert has never responded.
pub fn award_badges(
    expert_id: &ExpertId,
    lifetime: &LifetimeAggregate,
    config: &BadgeConfig,
    awarded_at: DateTime<Utc>,
) -> Vec<Badge> {
    let candidates = [
        (
            BadgeFamily::Consistency,
            &config.consistency,
            (lifetime.studies_invited > 0).then_some(lifetime.average_consistency),
        ),
        (BadgeFamily::Speed, &config.speed, lifetime.average_response_hours),
        (
            BadgeFamily::Participation,
            &config.participation,
            Some(lifetime.studies_completed as f64),
        ),
    ];

    candidates
        .into_iter()
        .filter_map(|(family, table, value)| {
            let value = value?;
            mint(expert_id, family, table, value, awarded_at)
        })
        .collect()
}

fn mint(
    expert_id: &ExpertId,
    family: BadgeFamily,
    table: &ThresholdTable<BadgeTier>,
    value: f64,
    awarded_at: DateTime<Utc>,
) -> Option<Badge> {
    let tier = table.highest_met(value)?;
    Some(Badge {
        id: Uuid::new_v4().to_string(),
        expert_id: expert_id.clone(),
        family,
        tier,
        earned_value: value,
        awarded_at,
    })
}
