//! # Rule — Regras Diagnósticas Ponderadas
//!
//! Uma [`Rule`] liga um conjunto de **antecedentes** (sintomas exigidos) a
//! uma **conclusão** (doença). **Exclusões** são sintomas cuja presença
//! contradiz a conclusão e derrubam o score da regra.
//!
//! ```text
//! R2: runny_nose + sore_throat + sneezing  ⇒  cold
//!     exclusões: fever
//! ```
//!
//! ## Invariantes (validadas na carga da KB)
//!
//! - `antecedents` nunca é vazio — o score divide por `antecedents.len()`
//! - `antecedents` e `exclusions` não se sobrepõem
//! - `conclusion` referencia uma doença existente
//!
//! ## Prioridade
//!
//! O campo `priority` é informativo: é exibido e serializado, mas **não**
//! participa do score nem do desempate do ranking.

use serde::{Deserialize, Serialize};

use super::disease::DiseaseId;
use super::symptom::SymptomId;

/// Regra diagnóstica imutável.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Identificador único (ex: `"R14"`).
    pub id: String,
    /// Doença concluída quando a regra dispara.
    pub conclusion: DiseaseId,
    /// Sintomas exigidos, na ordem declarada.
    pub antecedents: Vec<SymptomId>,
    /// Sintomas que contradizem a conclusão.
    #[serde(default)]
    pub exclusions: Vec<SymptomId>,
    /// Prioridade clínica (informativa).
    pub priority: i32,
    /// Justificativa em texto livre.
    #[serde(default)]
    pub description: String,
}

impl Rule {
    /// Cria uma regra sem exclusões.
    pub fn new(id: &str, conclusion: &str, antecedents: &[SymptomId], priority: i32) -> Self {
        Self {
            id: id.to_string(),
            conclusion: conclusion.to_string(),
            antecedents: antecedents.to_vec(),
            exclusions: Vec::new(),
            priority,
            description: String::new(),
        }
    }

    /// Builder: define as exclusões da regra.
    pub fn excluding(mut self, exclusions: &[SymptomId]) -> Self {
        self.exclusions = exclusions.to_vec();
        self
    }

    /// Builder: define a descrição da regra.
    pub fn described(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Sintomas que aparecem ao mesmo tempo como antecedente e exclusão.
    ///
    /// Uma regra com sobreposição nunca pode ter score pleno: o sintoma
    /// exigido é também penalizado.
    pub fn overlapping_symptoms(&self) -> Vec<SymptomId> {
        self.antecedents
            .iter()
            .copied()
            .filter(|s| self.exclusions.contains(s))
            .collect()
    }

    /// Todos os sintomas referenciados pela regra (antecedentes e exclusões).
    pub fn referenced_symptoms(&self) -> impl Iterator<Item = SymptomId> + '_ {
        self.antecedents.iter().chain(self.exclusions.iter()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusions_and_description_default_when_absent() {
        let rule: Rule = serde_json::from_str(
            r#"{"id":"R1","conclusion":"flu","antecedents":["fever","cough"],"priority":10}"#,
        )
        .unwrap();
        assert!(rule.exclusions.is_empty());
        assert!(rule.description.is_empty());
        assert_eq!(rule.antecedents, vec![SymptomId::Fever, SymptomId::Cough]);
    }

    #[test]
    fn overlapping_symptoms_reports_shared_ids() {
        let rule = Rule::new("RX", "flu", &[SymptomId::Fever, SymptomId::Cough], 1)
            .excluding(&[SymptomId::Cough, SymptomId::Nausea]);
        assert_eq!(rule.overlapping_symptoms(), vec![SymptomId::Cough]);
    }

    #[test]
    fn referenced_symptoms_chains_antecedents_then_exclusions() {
        let rule = Rule::new("R2", "cold", &[SymptomId::RunnyNose], 5).excluding(&[SymptomId::Fever]);
        let all: Vec<_> = rule.referenced_symptoms().collect();
        assert_eq!(all, vec![SymptomId::RunnyNose, SymptomId::Fever]);
    }
}
