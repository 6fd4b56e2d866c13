//! Ranking — ordenação estável por score decrescente.
//!
//! Empates preservam a ordem de entrada (ordem em que cada doença apareceu
//! na varredura das regras). A prioridade da regra não é usada como
//! desempate.

use std::cmp::Ordering;

use super::DiagnosisResult;

/// Ordena `results` por score decrescente, in-place.
pub fn rank(results: &mut [DiagnosisResult]) {
    // `sort_by` é estável
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}
