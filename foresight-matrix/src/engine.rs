//! StructuralEngine: matrix → indicators → classification in one call.

use tracing::{debug, instrument};

use foresight_core::errors::MatrixError;
use foresight_core::models::{
    ClassifiedVariable, IndirectClassification, ResultSet, Variable, VoteRecord,
};

use crate::builder::{self, InfluenceMatrix};
use crate::classifier;
use crate::indicators::{self, StructuralIndicators};
use crate::indirect;

/// Full intermediate state of one analysis, for callers that want more
/// than the result set.
#[derive(Debug, Clone)]
pub struct StructuralAnalysis {
    pub matrix: InfluenceMatrix,
    pub indicators: StructuralIndicators,
    pub result: ResultSet,
}

/// Stateless structural analysis engine. Every call reads only its
/// arguments, so one instance can serve concurrent studies.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralEngine;

impl StructuralEngine {
    pub fn new() -> Self {
        Self
    }

    /// Build the matrix, compute indicators, classify, and rank.
    ///
    /// Never fails: empty input yields an empty result and votes naming
    /// unknown variables are dropped.
    pub fn build_and_classify(&self, variables: &[Variable], votes: &[VoteRecord]) -> ResultSet {
        self.analyze(variables, votes).result
    }

    /// The study's variables with `category` set to their computed role.
    pub fn categorize(&self, variables: &[Variable], votes: &[VoteRecord]) -> Vec<Variable> {
        self.build_and_classify(variables, votes).categorize(variables)
    }

    /// Like [`build_and_classify`](Self::build_and_classify) but keeps the
    /// matrix and indicator vectors.
    #[instrument(skip_all, fields(variables = variables.len(), votes = votes.len()))]
    pub fn analyze(&self, variables: &[Variable], votes: &[VoteRecord]) -> StructuralAnalysis {
        let built = builder::build(variables, votes);
        let indicators = indicators::compute(&built.matrix);

        let motricity: Vec<f64> = indicators.motricity.iter().map(|&v| v as f64).collect();
        let dependence: Vec<f64> = indicators.dependence.iter().map(|&v| v as f64).collect();
        let placements = classifier::classify(&motricity, &dependence);

        let classified = variables
            .iter()
            .zip(placements)
            .enumerate()
            .map(|(i, (variable, placement))| ClassifiedVariable {
                variable_id: variable.id.clone(),
                name: variable.name.clone(),
                role: placement.role,
                rank: placement.rank,
                motricity: indicators.motricity[i],
                dependence: indicators.dependence[i],
            })
            .collect();

        let result = ResultSet {
            variables: classified,
            total_votes: built.consumed,
            skipped_votes: built.skipped(),
            motricity_average: indicators.motricity_average(),
            dependence_average: indicators.dependence_average(),
        };

        debug!(
            consumed = result.total_votes,
            skipped = result.skipped_votes,
            motricity_average = result.motricity_average,
            dependence_average = result.dependence_average,
            "structural classification complete"
        );

        StructuralAnalysis {
            matrix: built.matrix,
            indicators,
            result,
        }
    }

    /// Classify on indirect influence: indicators of `matrix^power`.
    #[instrument(skip(self, variables, votes), fields(variables = variables.len()))]
    pub fn classify_indirect(
        &self,
        variables: &[Variable],
        votes: &[VoteRecord],
        power: u32,
    ) -> Result<Vec<IndirectClassification>, MatrixError> {
        let built = builder::build(variables, votes);
        let ind = indirect::indirect_indicators(&built.matrix, power)?;
        let placements = classifier::classify(&ind.motricity, &ind.dependence);

        Ok(variables
            .iter()
            .zip(placements)
            .enumerate()
            .map(|(i, (variable, placement))| IndirectClassification {
                variable_id: variable.id.clone(),
                role: placement.role,
                rank: placement.rank,
                motricity: ind.motricity[i],
                dependence: ind.dependence[i],
            })
            .collect())
    }
}
