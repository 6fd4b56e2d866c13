//! # Rule Matcher — Avaliação de Uma Regra
//!
//! Avalia **uma** [`Rule`] contra **um** conjunto de fatos e produz uma
//! [`Proof`]: o que casou, o que faltou, o que contradiz, e o score.
//!
//! ## Score
//!
//! ```text
//! raw   = |antecedentes ∩ fatos| / |antecedentes|
//! score = raw × 0.1^|exclusões ∩ fatos|
//! ```
//!
//! Cada exclusão observada derruba o score em uma ordem de grandeza. A
//! penalidade é propositalmente íngreme: qualquer regra sem conflitos fica
//! categoricamente acima de qualquer regra com conflitos de mesmo `raw`.
//!
//! | Antecedentes | Casados | Conflitos | Score |
//! |--------------|---------|-----------|-------|
//! | 3 | 3 | 0 | 1.0 |
//! | 3 | 3 | 1 | 0.1 |
//! | 3 | 2 | 0 | 0.667 |
//! | 4 | 1 | 0 | 0.25 |
//! | 3 | 3 | 2 | 0.01 |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{DiseaseId, FactSet, Rule, SymptomId};

/// Fator multiplicativo aplicado por exclusão observada.
pub const CONFLICT_DECAY: f64 = 0.1;

/// Precondição do matcher violada.
///
/// Inalcançável para snapshots construídos por
/// [`KnowledgeBase::new`](crate::core::KnowledgeBase::new), que rejeita
/// regras sem antecedentes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("rule {0} has no antecedents; its score is undefined")]
    EmptyAntecedents(String),
}

/// Registro da avaliação de uma regra contra um conjunto de fatos.
///
/// Usada tanto na agregação (score) quanto na explicação (evidence,
/// missing, conflicts).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proof {
    pub rule_id: String,
    /// Doença concluída pela regra.
    pub conclusion: DiseaseId,
    /// Antecedentes presentes nos fatos, na ordem declarada na regra.
    pub evidence: Vec<SymptomId>,
    /// Antecedentes ausentes, na ordem declarada na regra.
    pub missing: Vec<SymptomId>,
    /// Exclusões presentes nos fatos.
    pub conflicts: Vec<SymptomId>,
    /// Score em [0, 1], já com a penalidade de conflitos.
    pub score: f64,
}

/// Avalia `rule` contra `facts`. Função pura.
///
/// # Erros
///
/// [`DomainError::EmptyAntecedents`] se a regra não tem antecedentes.
pub fn evaluate(rule: &Rule, facts: &FactSet) -> Result<Proof, DomainError> {
    if rule.antecedents.is_empty() {
        return Err(DomainError::EmptyAntecedents(rule.id.clone()));
    }

    let (evidence, missing): (Vec<SymptomId>, Vec<SymptomId>) =
        rule.antecedents.iter().copied().partition(|s| facts.contains(s));
    let conflicts: Vec<SymptomId> = rule
        .exclusions
        .iter()
        .copied()
        .filter(|s| facts.contains(s))
        .collect();

    let raw = evidence.len() as f64 / rule.antecedents.len() as f64;
    let score = raw * CONFLICT_DECAY.powi(conflicts.len() as i32);

    Ok(Proof {
        rule_id: rule.id.clone(),
        conclusion: rule.conclusion.clone(),
        evidence,
        missing,
        conflicts,
        score,
    })
}
