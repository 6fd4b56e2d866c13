//! # Módulo Inference — Motor de Inferência Diagnóstica
//!
//! Este módulo contém o **motor de inferência** do MedLogic: dado um
//! conjunto de sintomas observados, avalia todas as regras da
//! [`KnowledgeBase`] e produz uma lista ranqueada e explicada de doenças
//! candidatas.
//!
//! ## Pipeline
//!
//! | Etapa | Sub-módulo | Resultado |
//! |-------|------------|-----------|
//! | **Matching** | [`matcher`] | Uma [`Proof`] por regra |
//! | **Agregação** | [`aggregator`] | Melhor prova por doença, acima de 0.2 |
//! | **Explicação** | [`explanation`] | Texto narrativo da prova vencedora |
//! | **Ranking** | [`ranking`] | Ordem estável por score decrescente |
//!
//! ## Exemplo
//!
//! ```text
//! Fatos: {headache, fatigue}
//!   R14 tension_headache: 2/2, sem nausea     → 1.000
//!   R7  flu:              2/3 (falta fever)   → 0.667
//!   R4  migraine:         1/3                 → 0.333
//!   ...
//!   R2  cold:             0/3                 → descartada (≤ 0.2)
//! ```
//!
//! Veja [`InferenceEngine`] para o ponto de entrada.

pub mod aggregator;
pub mod explanation;
pub mod matcher;
pub mod ranking;

pub use matcher::{DomainError, Proof};

use serde::{Deserialize, Serialize};

use crate::core::{FactSet, KnowledgeBase};

/// Um diagnóstico candidato — no máximo um por doença em cada chamada.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub disease_id: String,
    pub disease_name: String,
    /// Score da prova vencedora, em (0.2, 1.0].
    pub score: f64,
    /// Justificativa legível gerada a partir de `proof`.
    pub explanation: String,
    /// Prova da regra vencedora.
    pub proof: Proof,
}

impl DiagnosisResult {
    /// Score como porcentagem inteira (ex: `0.667` → `67`).
    pub fn percent(&self) -> u32 {
        (self.score * 100.0).round() as u32
    }
}

/// Motor de inferência — struct sem estado.
///
/// Recebe a KB por referência e não guarda nada entre chamadas: o mesmo
/// snapshot e os mesmos fatos produzem sempre a mesma saída, inclusive
/// textos e ordem. Pode ser chamado de várias threads ao mesmo tempo.
///
/// ## Uso
///
/// ```rust
/// let kb = KnowledgeBase::builtin()?;
/// let facts: FactSet = [SymptomId::Headache, SymptomId::Fatigue].into_iter().collect();
/// for result in InferenceEngine::infer(&kb, &facts) {
///     println!("{} {}% — {}", result.disease_name, result.percent(), result.explanation);
/// }
/// ```
pub struct InferenceEngine;

impl InferenceEngine {
    /// Roda um ciclo completo de inferência sobre o conjunto de fatos.
    ///
    /// Fatos vazios produzem lista vazia. Sintomas que nenhuma regra
    /// referencia são simplesmente ignorados.
    pub fn infer(kb: &KnowledgeBase, facts: &FactSet) -> Vec<DiagnosisResult> {
        let mut results = aggregator::aggregate(kb, facts);
        ranking::rank(&mut results);
        tracing::debug!(
            facts = facts.len(),
            rules = kb.rule_count(),
            results = results.len(),
            "inferência concluída"
        );
        results
    }
}
