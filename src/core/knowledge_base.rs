//! # KnowledgeBase — Snapshot Imutável do Conhecimento Médico
//!
//! A [`KnowledgeBase`] é o contêiner lido pelo motor de inferência: catálogo
//! de sintomas, catálogo de doenças e conjunto de regras. Um valor desta
//! struct é um **snapshot validado** — uma vez construído, nunca é mutado.
//!
//! ## Validação na Construção
//!
//! Todo caminho de construção passa por [`KnowledgeBase::new`], que rejeita
//! dados inconsistentes com [`KnowledgeBaseError::Integrity`]:
//!
//! | Problema | Por que é fatal |
//! |----------|-----------------|
//! | Regra sem antecedentes | O score divide por `antecedents.len()` |
//! | Sintoma repetido em antecedentes ou exclusões | Contado duas vezes no score |
//! | Antecedente também listado como exclusão | A regra nunca atinge score pleno |
//! | Conclusão sem doença no catálogo | A regra nunca produziria resultado |
//! | IDs duplicados (regra, doença, sintoma) | Agregação e lookup ficam ambíguos |
//!
//! Sintomas referenciados por regras mas ausentes do catálogo **não** são
//! fatais: são reportados por [`lookup_gaps()`](KnowledgeBase::lookup_gaps)
//! e a explicação usa o identificador cru no lugar do label.
//!
//! ## Índices
//!
//! Os índices `symptom_index` e `disease_index` não fazem parte do formato
//! serializado. São reconstruídos em [`rebuild_index()`](KnowledgeBase::rebuild_index)
//! a cada construção, inclusive após desserialização (via `try_from`).
//!
//! ## Exemplo
//!
//! ```rust
//! let kb = KnowledgeBase::builtin()?;
//! assert_eq!(kb.symptom_label(SymptomId::Fever), Some("Fever"));
//! assert_eq!(kb.disease("flu").map(|d| d.name.as_str()), Some("Influenza (Flu)"));
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog;
use super::disease::Disease;
use super::rule::Rule;
use super::symptom::{Symptom, SymptomId};

/// Formato serializado da KB — o mesmo do arquivo `data/kb.json`.
///
/// Não é validado: use [`KnowledgeBase::new`] para obter um snapshot utilizável.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBaseData {
    /// Versão do catálogo (ex: "1.2.0").
    pub version: String,
    /// Data da última atualização do catálogo.
    pub last_updated: NaiveDate,
    pub symptoms: Vec<Symptom>,
    pub diseases: Vec<Disease>,
    pub rules: Vec<Rule>,
}

/// Um problema de integridade encontrado na carga da KB.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntegrityIssue {
    #[error("rule {rule} has no antecedents")]
    EmptyAntecedents { rule: String },

    #[error("rule {rule} lists antecedent {symptom} more than once")]
    DuplicateAntecedent { rule: String, symptom: SymptomId },

    #[error("rule {rule} lists exclusion {symptom} more than once")]
    DuplicateExclusion { rule: String, symptom: SymptomId },

    #[error("rule {rule} both requires and excludes {}", join_ids(.symptoms))]
    OverlappingExclusions { rule: String, symptoms: Vec<SymptomId> },

    #[error("rule {rule} concludes unknown disease {disease}")]
    UnknownConclusion { rule: String, disease: String },

    #[error("duplicate rule id {0}")]
    DuplicateRule(String),

    #[error("duplicate disease id {0}")]
    DuplicateDisease(String),

    #[error("duplicate symptom id {0}")]
    DuplicateSymptom(SymptomId),
}

/// Sintomas que aparecem mais de uma vez, cada um reportado uma única vez.
fn repeated(ids: &[SymptomId]) -> Vec<SymptomId> {
    let mut seen = HashSet::new();
    let mut repeated = Vec::new();
    for &id in ids {
        if !seen.insert(id) && !repeated.contains(&id) {
            repeated.push(id);
        }
    }
    repeated
}

fn join_ids(ids: &[SymptomId]) -> String {
    ids.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
}

/// Falha na construção da KB — fatal para o startup.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KnowledgeBaseError {
    #[error("knowledge base failed integrity validation: {}", IssueList(.0))]
    Integrity(Vec<IntegrityIssue>),
}

impl KnowledgeBaseError {
    /// Lista de problemas encontrados.
    pub fn issues(&self) -> &[IntegrityIssue] {
        match self {
            KnowledgeBaseError::Integrity(issues) => issues,
        }
    }
}

struct IssueList<'a>(&'a [IntegrityIssue]);

impl fmt::Display for IssueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

/// Um sintoma referenciado por uma regra mas sem entrada no catálogo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupGap {
    pub rule: String,
    pub symptom: SymptomId,
}

impl fmt::Display for LookupGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {} references symptom {} with no catalog entry", self.rule, self.symptom)
    }
}

/// Snapshot validado e imutável da base de conhecimento médico.
///
/// No servidor, o snapshot corrente fica em um
/// [`KnowledgeStore`](super::KnowledgeStore) e é compartilhado via `Arc`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "KnowledgeBaseData", into = "KnowledgeBaseData")]
pub struct KnowledgeBase {
    data: KnowledgeBaseData,
    /// Índice: sintoma → posição em `data.symptoms`.
    symptom_index: HashMap<SymptomId, usize>,
    /// Índice: id da doença → posição em `data.diseases`.
    disease_index: HashMap<String, usize>,
}

impl KnowledgeBase {
    /// Valida os dados e constrói o snapshot.
    ///
    /// Todos os problemas encontrados são reportados de uma vez, para que o
    /// operador corrija o arquivo em uma única passada.
    ///
    /// # Erros
    ///
    /// [`KnowledgeBaseError::Integrity`] se [`validate()`](Self::validate)
    /// encontrar qualquer problema.
    pub fn new(data: KnowledgeBaseData) -> Result<Self, KnowledgeBaseError> {
        let issues = Self::validate(&data);
        if !issues.is_empty() {
            return Err(KnowledgeBaseError::Integrity(issues));
        }
        let mut kb = Self {
            data,
            symptom_index: HashMap::new(),
            disease_index: HashMap::new(),
        };
        kb.rebuild_index();
        tracing::debug!(
            version = %kb.data.version,
            symptoms = kb.symptom_count(),
            diseases = kb.disease_count(),
            rules = kb.rule_count(),
            "KB: snapshot construído"
        );
        Ok(kb)
    }

    /// Catálogo médico embutido (versão 1.2.0).
    pub fn builtin() -> Result<Self, KnowledgeBaseError> {
        Self::new(catalog::medical_catalog())
    }

    /// Verifica as invariantes dos dados sem construir o snapshot.
    pub fn validate(data: &KnowledgeBaseData) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        let mut seen_symptoms = HashSet::new();
        for symptom in &data.symptoms {
            if !seen_symptoms.insert(symptom.id) {
                issues.push(IntegrityIssue::DuplicateSymptom(symptom.id));
            }
        }

        let mut diseases = HashSet::new();
        for disease in &data.diseases {
            if !diseases.insert(disease.id.as_str()) {
                issues.push(IntegrityIssue::DuplicateDisease(disease.id.clone()));
            }
        }

        let mut seen_rules = HashSet::new();
        for rule in &data.rules {
            if !seen_rules.insert(rule.id.as_str()) {
                issues.push(IntegrityIssue::DuplicateRule(rule.id.clone()));
            }
            if rule.antecedents.is_empty() {
                issues.push(IntegrityIssue::EmptyAntecedents {
                    rule: rule.id.clone(),
                });
            }
            for symptom in repeated(&rule.antecedents) {
                issues.push(IntegrityIssue::DuplicateAntecedent {
                    rule: rule.id.clone(),
                    symptom,
                });
            }
            for symptom in repeated(&rule.exclusions) {
                issues.push(IntegrityIssue::DuplicateExclusion {
                    rule: rule.id.clone(),
                    symptom,
                });
            }
            let overlap = rule.overlapping_symptoms();
            if !overlap.is_empty() {
                issues.push(IntegrityIssue::OverlappingExclusions {
                    rule: rule.id.clone(),
                    symptoms: overlap,
                });
            }
            if !diseases.contains(rule.conclusion.as_str()) {
                issues.push(IntegrityIssue::UnknownConclusion {
                    rule: rule.id.clone(),
                    disease: rule.conclusion.clone(),
                });
            }
        }

        issues
    }

    /// Reconstrói os índices de lookup a partir dos catálogos.
    fn rebuild_index(&mut self) {
        self.symptom_index = self
            .data
            .symptoms
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id, i))
            .collect();
        self.disease_index = self
            .data
            .diseases
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), i))
            .collect();
    }

    /// Sintomas referenciados por regras que não têm entrada no catálogo.
    ///
    /// Não impede a construção — a explicação substitui o label pelo
    /// identificador cru. O loader registra estes casos como `warn`.
    pub fn lookup_gaps(&self) -> Vec<LookupGap> {
        let mut gaps = Vec::new();
        for rule in &self.data.rules {
            for symptom in rule.referenced_symptoms() {
                let already = gaps
                    .iter()
                    .any(|g: &LookupGap| g.rule == rule.id && g.symptom == symptom);
                if !self.symptom_index.contains_key(&symptom) && !already {
                    gaps.push(LookupGap {
                        rule: rule.id.clone(),
                        symptom,
                    });
                }
            }
        }
        gaps
    }

    /// Label de exibição de um sintoma, se catalogado.
    pub fn symptom_label(&self, id: SymptomId) -> Option<&str> {
        self.symptom_index
            .get(&id)
            .map(|&i| self.data.symptoms[i].label.as_str())
    }

    /// Busca uma doença por id.
    pub fn disease(&self, id: &str) -> Option<&Disease> {
        self.disease_index.get(id).map(|&i| &self.data.diseases[i])
    }

    /// Regras na ordem declarada — a ordem importa para o desempate.
    pub fn rules(&self) -> &[Rule] {
        &self.data.rules
    }

    pub fn version(&self) -> &str {
        &self.data.version
    }

    pub fn last_updated(&self) -> NaiveDate {
        self.data.last_updated
    }

    pub fn symptom_count(&self) -> usize {
        self.data.symptoms.len()
    }

    pub fn disease_count(&self) -> usize {
        self.data.diseases.len()
    }

    pub fn rule_count(&self) -> usize {
        self.data.rules.len()
    }

    /// Formato serializável do snapshot (para o navegador da KB).
    pub fn data(&self) -> &KnowledgeBaseData {
        &self.data
    }
}

impl TryFrom<KnowledgeBaseData> for KnowledgeBase {
    type Error = KnowledgeBaseError;

    fn try_from(data: KnowledgeBaseData) -> Result<Self, Self::Error> {
        KnowledgeBase::new(data)
    }
}

impl From<KnowledgeBase> for KnowledgeBaseData {
    fn from(kb: KnowledgeBase) -> Self {
        kb.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_data() -> KnowledgeBaseData {
        KnowledgeBaseData {
            version: "0.0.1".to_string(),
            last_updated: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            symptoms: vec![
                Symptom::new(SymptomId::Fever, "Fever", &[]),
                Symptom::new(SymptomId::Cough, "Cough", &[]),
            ],
            diseases: vec![Disease::new("flu", "Influenza (Flu)", "")],
            rules: vec![Rule::new("R1", "flu", &[SymptomId::Fever, SymptomId::Cough], 10)],
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert_eq!(kb.version(), "1.2.0");
        assert_eq!(kb.last_updated(), NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
        assert_eq!(kb.symptom_count(), 14);
        assert_eq!(kb.disease_count(), 12);
        assert_eq!(kb.rule_count(), 13);
        assert!(kb.lookup_gaps().is_empty());
    }

    #[test]
    fn builtin_catalog_labels_every_symptom() {
        let kb = KnowledgeBase::builtin().unwrap();
        for id in SymptomId::ALL {
            assert!(kb.symptom_label(id).is_some(), "missing label for {}", id);
        }
        assert_eq!(kb.symptom_label(SymptomId::ShortnessBreath), Some("Shortness of Breath"));
    }

    #[test]
    fn rejects_empty_antecedents() {
        let mut data = tiny_data();
        data.rules.push(Rule::new("R2", "flu", &[], 1));
        let err = KnowledgeBase::new(data).unwrap_err();
        assert_eq!(
            err.issues(),
            &[IntegrityIssue::EmptyAntecedents { rule: "R2".to_string() }]
        );
    }

    #[test]
    fn rejects_unknown_conclusion() {
        let mut data = tiny_data();
        data.rules.push(Rule::new("R9", "measles", &[SymptomId::Fever], 1));
        let err = KnowledgeBase::new(data).unwrap_err();
        assert_eq!(
            err.issues(),
            &[IntegrityIssue::UnknownConclusion {
                rule: "R9".to_string(),
                disease: "measles".to_string(),
            }]
        );
    }

    #[test]
    fn rejects_overlapping_exclusions() {
        let mut data = tiny_data();
        data.rules[0].exclusions = vec![SymptomId::Cough];
        let err = KnowledgeBase::new(data).unwrap_err();
        assert_eq!(
            err.to_string(),
            "knowledge base failed integrity validation: rule R1 both requires and excludes cough"
        );
    }

    #[test]
    fn rejects_repeated_antecedent() {
        let mut data = tiny_data();
        data.rules[0].antecedents = vec![SymptomId::Cough, SymptomId::Fever, SymptomId::Cough];
        let err = KnowledgeBase::new(data).unwrap_err();
        assert_eq!(
            err.issues(),
            &[IntegrityIssue::DuplicateAntecedent {
                rule: "R1".to_string(),
                symptom: SymptomId::Cough,
            }]
        );
        assert_eq!(err.issues()[0].to_string(), "rule R1 lists antecedent cough more than once");
    }

    #[test]
    fn rejects_repeated_exclusion() {
        let mut data = tiny_data();
        data.rules[0].exclusions = vec![SymptomId::Nausea, SymptomId::Nausea, SymptomId::Nausea];
        let err = KnowledgeBase::new(data).unwrap_err();
        assert_eq!(
            err.issues(),
            &[IntegrityIssue::DuplicateExclusion {
                rule: "R1".to_string(),
                symptom: SymptomId::Nausea,
            }]
        );
    }

    #[test]
    fn reports_every_issue_at_once() {
        let mut data = tiny_data();
        data.diseases.push(Disease::new("flu", "Flu again", ""));
        data.rules.push(Rule::new("R1", "cold", &[], 1));
        let err = KnowledgeBase::new(data).unwrap_err();
        assert_eq!(
            err.issues(),
            &[
                IntegrityIssue::DuplicateDisease("flu".to_string()),
                IntegrityIssue::DuplicateRule("R1".to_string()),
                IntegrityIssue::EmptyAntecedents { rule: "R1".to_string() },
                IntegrityIssue::UnknownConclusion {
                    rule: "R1".to_string(),
                    disease: "cold".to_string(),
                },
            ]
        );
    }

    #[test]
    fn missing_symptom_entry_is_a_lookup_gap_not_an_error() {
        let mut data = tiny_data();
        data.symptoms.retain(|s| s.id != SymptomId::Cough);
        let kb = KnowledgeBase::new(data).unwrap();
        assert_eq!(kb.symptom_label(SymptomId::Cough), None);
        assert_eq!(
            kb.lookup_gaps(),
            vec![LookupGap {
                rule: "R1".to_string(),
                symptom: SymptomId::Cough,
            }]
        );
    }

    #[test]
    fn deserialization_runs_validation() {
        let json = r#"{
            "version": "1.0.0",
            "lastUpdated": "2024-05-20",
            "symptoms": [],
            "diseases": [],
            "rules": [{"id": "R1", "conclusion": "flu", "antecedents": ["fever"], "priority": 1}]
        }"#;
        let err = serde_json::from_str::<KnowledgeBase>(json).unwrap_err();
        assert!(err.to_string().contains("concludes unknown disease flu"));
    }

    #[test]
    fn serializes_in_file_format() {
        let kb = KnowledgeBase::new(tiny_data()).unwrap();
        let value = serde_json::to_value(&kb).unwrap();
        assert_eq!(value["lastUpdated"], "2024-01-01");
        assert_eq!(value["rules"][0]["antecedents"][1], "cough");
        let back: KnowledgeBase = serde_json::from_value(value).unwrap();
        assert_eq!(back.data(), kb.data());
    }
}
