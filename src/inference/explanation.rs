//! # Explanation Synthesizer — Justificativa Legível
//!
//! Transforma a [`Proof`] vencedora de uma doença em um texto narrativo,
//! exibido ao usuário e repassado a consumidores de texto (chat, geração
//! de conselhos). A ordem das frases faz parte do contrato observável:
//!
//! ```text
//! 1. Rule R7 fired because you have Fever, Headache.
//! 2. However, typical symptoms like Fatigue are missing.        (se houver faltantes)
//! 3. Warning: Nausea are usually NOT associated with X, ...      (se houver conflitos)
//! ```
//!
//! Labels vêm do catálogo de sintomas. Um sintoma sem label é uma lacuna
//! de dados: o texto usa o identificador cru (`stiff_neck`) e registra um
//! `warn`, sem interromper a explicação.

use crate::core::{KnowledgeBase, SymptomId};

use super::matcher::Proof;

/// Gera a explicação da `proof` para a doença `disease_name`.
pub fn explain(kb: &KnowledgeBase, proof: &Proof, disease_name: &str) -> String {
    let mut sentences = vec![format!(
        "Rule {} fired because you have {}.",
        proof.rule_id,
        labels(kb, &proof.evidence)
    )];

    if !proof.missing.is_empty() {
        sentences.push(format!(
            "However, typical symptoms like {} are missing.",
            labels(kb, &proof.missing)
        ));
    }

    if !proof.conflicts.is_empty() {
        sentences.push(format!(
            "Warning: {} are usually NOT associated with {}, which lowers confidence.",
            labels(kb, &proof.conflicts),
            disease_name
        ));
    }

    sentences.join(" ")
}

/// Junta os labels dos sintomas com `", "`.
fn labels(kb: &KnowledgeBase, ids: &[SymptomId]) -> String {
    ids.iter()
        .map(|&id| match kb.symptom_label(id) {
            Some(label) => label,
            None => {
                tracing::warn!(symptom = %id, "sintoma sem label no catálogo; usando o identificador");
                id.as_str()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
