//! Actionable recommendations attached to an expert's study metrics.
//!
//! Examples: "3 relations deviate from the peer mean", "voting was not completed".

use foresight_core::models::{
    QualityFacts, Recommendation, ReliabilityTier, Severity, SubScores, TimeFacts,
};

const LOW_CONSISTENCY: f64 = 60.0;
const LOW_TIMELINESS: f64 = 50.0;
const LOW_PARTICIPATION: f64 = 50.0;
const LOW_COMMUNICATION: f64 = 50.0;
const LOW_CONFIDENCE: f64 = 2.5;
const MANY_OUTLIERS: usize = 3;

/// Everything the rules look at, grouped to keep the signature short.
pub struct RecommendationContext<'a> {
    pub sub_scores: &'a SubScores,
    pub quality: &'a QualityFacts,
    pub time: &'a TimeFacts,
    pub tier: ReliabilityTier,
}

/// Generate recommendations, most severe first.
pub fn generate(ctx: &RecommendationContext<'_>) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if ctx.tier == ReliabilityTier::Unreliable {
        recs.push(Recommendation {
            severity: Severity::Critical,
            message: "overall reliability is unreliable".into(),
            action: "hold back from upcoming panels pending a facilitator review".into(),
        });
    }

    if ctx.time.first_response_at.is_none() {
        recs.push(Recommendation {
            severity: Severity::Critical,
            message: "expert never responded to the invitation".into(),
            action: "confirm contact details before inviting again".into(),
        });
    } else if ctx.time.completed_at.is_none() {
        recs.push(Recommendation {
            severity: Severity::Warning,
            message: "voting was not completed".into(),
            action: "follow up on the open relations before the study closes".into(),
        });
    }

    if ctx.quality.compared_relations > 0 && ctx.sub_scores.consistency < LOW_CONSISTENCY {
        recs.push(Recommendation {
            severity: Severity::Warning,
            message: format!(
                "consistency score is {:.0}, judgments diverge from panel consensus",
                ctx.sub_scores.consistency
            ),
            action: "review divergent relations with the expert".into(),
        });
    }

    if ctx.quality.outlier_count > 0 {
        let severity = if ctx.quality.outlier_count > MANY_OUTLIERS {
            Severity::Warning
        } else {
            Severity::Info
        };
        recs.push(Recommendation {
            severity,
            message: format!(
                "{} relations deviate strongly from the peer mean",
                ctx.quality.outlier_count
            ),
            action: "ask for a written rationale on outlying judgments".into(),
        });
    }

    if ctx.quality.completeness_ratio < 1.0 {
        let severity = if ctx.quality.completeness_ratio < 0.5 {
            Severity::Warning
        } else {
            Severity::Info
        };
        recs.push(Recommendation {
            severity,
            message: format!(
                "only {:.0}% of expected relations were voted",
                ctx.quality.completeness_ratio * 100.0
            ),
            action: "send a reminder listing the missing relations".into(),
        });
    }

    if ctx.sub_scores.timeliness < LOW_TIMELINESS {
        recs.push(Recommendation {
            severity: Severity::Warning,
            message: format!("timeliness score is {:.0}", ctx.sub_scores.timeliness),
            action: "schedule earlier reminders for this expert".into(),
        });
    }

    if ctx.sub_scores.participation < LOW_PARTICIPATION {
        recs.push(Recommendation {
            severity: Severity::Warning,
            message: format!("participation score is {:.0}", ctx.sub_scores.participation),
            action: "check availability before the next invitation".into(),
        });
    }

    if ctx.sub_scores.communication < LOW_COMMUNICATION {
        recs.push(Recommendation {
            severity: Severity::Info,
            message: format!("communication score is {:.0}", ctx.sub_scores.communication),
            action: "agree on a preferred contact channel".into(),
        });
    }

    if let Some(confidence) = ctx.quality.average_confidence {
        if confidence < LOW_CONFIDENCE {
            recs.push(Recommendation {
                severity: Severity::Info,
                message: format!("average self-reported confidence is {confidence:.1} of 5"),
                action: "offer a briefing on the study variables".into(),
            });
        }
    }

    recs.sort_by(|a, b| b.severity.cmp(&a.severity));
    recs
}
