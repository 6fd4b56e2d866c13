//! # Result Aggregator — Melhor Regra por Doença
//!
//! Roda o [matcher](super::matcher) sobre **todas** as regras, descarta
//! provas abaixo do limiar de aceitação e mantém, para cada doença, apenas
//! a prova de maior score.
//!
//! ## Algoritmo
//!
//! ```text
//! para cada regra, na ordem declarada:
//!   prova = evaluate(regra, fatos)
//!   se prova.score <= 0.2: descarta (ruído)
//!   se a doença é desconhecida: descarta
//!   se já existe prova para a doença:
//!     substitui somente se prova.score > existente.score   (estritamente)
//!   senão:
//!     registra a doença (a ordem de primeira aparição é preservada)
//! para cada doença: explicação a partir da prova vencedora
//! ```
//!
//! O desempate "primeira regra vence" depende da ordem de declaração das
//! regras e é o que torna a saída reproduzível.

use std::collections::HashMap;

use crate::core::{FactSet, KnowledgeBase};

use super::explanation::explain;
use super::matcher::{evaluate, Proof};
use super::DiagnosisResult;

/// Limiar de aceitação: provas com `score <= 0.2` são descartadas.
pub const ACCEPTANCE_THRESHOLD: f64 = 0.2;

/// Agrega as provas de todas as regras em um resultado por doença.
///
/// A saída segue a ordem de primeira aparição de cada doença, ainda sem
/// ranking.
pub fn aggregate(kb: &KnowledgeBase, facts: &FactSet) -> Vec<DiagnosisResult> {
    let mut winners: Vec<Proof> = Vec::new();
    let mut by_disease: HashMap<String, usize> = HashMap::new();

    for rule in kb.rules() {
        let proof = match evaluate(rule, facts) {
            Ok(proof) => proof,
            Err(e) => {
                tracing::error!(error = %e, "regra ignorada na inferência");
                continue;
            }
        };

        if proof.score <= ACCEPTANCE_THRESHOLD {
            continue;
        }
        if kb.disease(&proof.conclusion).is_none() {
            tracing::debug!(rule = %proof.rule_id, disease = %proof.conclusion, "conclusão desconhecida");
            continue;
        }

        match by_disease.get(&proof.conclusion).copied() {
            Some(slot) => {
                if proof.score > winners[slot].score {
                    tracing::debug!(
                        disease = %proof.conclusion,
                        replaced = %winners[slot].rule_id,
                        by = %proof.rule_id,
                        "prova substituída por score maior"
                    );
                    winners[slot] = proof;
                }
            }
            None => {
                by_disease.insert(proof.conclusion.clone(), winners.len());
                winners.push(proof);
            }
        }
    }

    winners
        .into_iter()
        .filter_map(|proof| {
            let disease = kb.disease(&proof.conclusion)?;
            Some(DiagnosisResult {
                disease_id: disease.id.clone(),
                disease_name: disease.name.clone(),
                score: proof.score,
                explanation: explain(kb, &proof, &disease.name),
                proof,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SymptomId::{self, *};
    use crate::core::{Disease, KnowledgeBaseData, Rule, Symptom};

    fn facts(ids: &[SymptomId]) -> FactSet {
        ids.iter().copied().collect()
    }

    fn kb_with_rules(rules: Vec<Rule>) -> KnowledgeBase {
        KnowledgeBase::new(KnowledgeBaseData {
            version: "test".to_string(),
            last_updated: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            symptoms: SymptomId::ALL
                .iter()
                .map(|&id| Symptom::new(id, id.as_str(), &[]))
                .collect(),
            diseases: vec![
                Disease::new("flu", "Flu", ""),
                Disease::new("cold", "Cold", ""),
            ],
            rules,
        })
        .unwrap()
    }

    #[test]
    fn keeps_strictly_higher_score_per_disease() {
        let kb = kb_with_rules(vec![
            Rule::new("R7", "flu", &[Fever, Headache, Fatigue], 9),
            Rule::new("R1", "flu", &[Fever, Cough, MuscleAche, Fatigue], 10),
        ]);
        let results = aggregate(&kb, &facts(&[Fever, Cough, MuscleAche, Fatigue]));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].proof.rule_id, "R1");
        assert_eq!(results[0].score, 1.0);
    }

    #[test]
    fn explanation_comes_from_the_winning_proof() {
        let kb = kb_with_rules(vec![
            Rule::new("R7", "flu", &[Fever, Headache, Fatigue], 9),
            Rule::new("R1", "flu", &[Fever, Cough, MuscleAche, Fatigue], 10),
        ]);
        let results = aggregate(&kb, &facts(&[Fever, Cough, MuscleAche, Fatigue]));
        assert!(results[0].explanation.starts_with("Rule R1 fired"));
    }

    #[test]
    fn equal_scores_keep_first_declared_rule() {
        let kb = kb_with_rules(vec![
            Rule::new("RA", "cold", &[RunnyNose, Sneezing], 1),
            Rule::new("RB", "cold", &[SoreThroat, Sneezing], 99),
        ]);
        let results = aggregate(&kb, &facts(&[Sneezing]));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].proof.rule_id, "RA");
    }

    #[test]
    fn score_exactly_at_threshold_is_excluded() {
        let kb = kb_with_rules(vec![Rule::new(
            "R5",
            "flu",
            &[Fever, Cough, Headache, Fatigue, Nausea],
            1,
        )]);
        let results = aggregate(&kb, &facts(&[Fever]));
        assert!(results.is_empty());
    }

    #[test]
    fn score_just_above_threshold_is_kept() {
        let kb = kb_with_rules(vec![Rule::new("R4", "flu", &[Fever, Cough, Headache, Fatigue], 1)]);
        let results = aggregate(&kb, &facts(&[Fever]));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 0.25);
    }

    #[test]
    fn conflicted_rule_falls_below_threshold() {
        let kb = kb_with_rules(vec![
            Rule::new("R2", "cold", &[RunnyNose, SoreThroat, Sneezing], 5).excluding(&[Fever])
        ]);
        let results = aggregate(&kb, &facts(&[RunnyNose, SoreThroat, Sneezing, Fever]));
        assert!(results.is_empty());
    }

    #[test]
    fn output_keeps_first_appearance_order() {
        let kb = kb_with_rules(vec![
            Rule::new("R2", "cold", &[RunnyNose, Sneezing], 5),
            Rule::new("R1", "flu", &[Fever, Cough], 10),
            Rule::new("R3", "cold", &[RunnyNose], 5),
        ]);
        let results = aggregate(&kb, &facts(&[RunnyNose, Sneezing, Fever, Cough]));
        let order: Vec<_> = results.iter().map(|r| r.disease_id.as_str()).collect();
        assert_eq!(order, vec!["cold", "flu"]);
    }
}
