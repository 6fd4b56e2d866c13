//! # Symptom — Fatos Observáveis
//!
//! Um [`Symptom`] é a unidade de **evidência** do motor de inferência:
//! cada regra diagnóstica exige (antecedentes) ou contradiz (exclusões)
//! um conjunto de sintomas.
//!
//! ## Conjunto Fechado de Identificadores
//!
//! O identificador [`SymptomId`] é um enum fechado — não uma string livre.
//! Strings desconhecidas são rejeitadas na **fronteira** (CLI, HTTP) via
//! [`FromStr`], nunca dentro do cálculo de score.
//!
//! | Variante | Forma serializada | Label padrão |
//! |----------|-------------------|--------------|
//! | `Fever` | `fever` | Fever |
//! | `Cough` | `cough` | Cough |
//! | `Headache` | `headache` | Headache |
//! | `RunnyNose` | `runny_nose` | Runny Nose |
//! | `SoreThroat` | `sore_throat` | Sore Throat |
//! | `Fatigue` | `fatigue` | Fatigue |
//! | `MuscleAche` | `muscle_ache` | Muscle Ache |
//! | `Sneezing` | `sneezing` | Sneezing |
//! | `ItchyEyes` | `itchy_eyes` | Itchy Eyes |
//! | `Nausea` | `nausea` | Nausea |
//! | `LightSensitivity` | `light_sensitivity` | Light Sensitivity |
//! | `StiffNeck` | `stiff_neck` | Stiff Neck |
//! | `ShortnessBreath` | `shortness_breath` | Shortness of Breath |
//! | `ChestPain` | `chest_pain` | Chest Pain |
//!
//! ## Exemplo
//!
//! ```rust
//! let id: SymptomId = "runny_nose".parse()?;
//! assert_eq!(id, SymptomId::RunnyNose);
//! assert!("dor_de_cabeca".parse::<SymptomId>().is_err());
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conjunto de sintomas observados em uma chamada de inferência.
pub type FactSet = HashSet<SymptomId>;

/// Identificador fechado de um sintoma.
///
/// A forma serializada (JSON, CLI, HTTP) é sempre `snake_case`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomId {
    Fever,
    Cough,
    Headache,
    RunnyNose,
    SoreThroat,
    Fatigue,
    MuscleAche,
    Sneezing,
    ItchyEyes,
    Nausea,
    LightSensitivity,
    StiffNeck,
    ShortnessBreath,
    ChestPain,
}

impl SymptomId {
    /// Todas as variantes, na ordem de declaração do catálogo.
    pub const ALL: [SymptomId; 14] = [
        SymptomId::Fever,
        SymptomId::Cough,
        SymptomId::Headache,
        SymptomId::RunnyNose,
        SymptomId::SoreThroat,
        SymptomId::Fatigue,
        SymptomId::MuscleAche,
        SymptomId::Sneezing,
        SymptomId::ItchyEyes,
        SymptomId::Nausea,
        SymptomId::LightSensitivity,
        SymptomId::StiffNeck,
        SymptomId::ShortnessBreath,
        SymptomId::ChestPain,
    ];

    /// Retorna a forma serializada do identificador (ex: `"runny_nose"`).
    ///
    /// É também o texto usado quando o catálogo não tem label para o
    /// sintoma (ver [`KnowledgeBase::symptom_label`](super::KnowledgeBase::symptom_label)).
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomId::Fever => "fever",
            SymptomId::Cough => "cough",
            SymptomId::Headache => "headache",
            SymptomId::RunnyNose => "runny_nose",
            SymptomId::SoreThroat => "sore_throat",
            SymptomId::Fatigue => "fatigue",
            SymptomId::MuscleAche => "muscle_ache",
            SymptomId::Sneezing => "sneezing",
            SymptomId::ItchyEyes => "itchy_eyes",
            SymptomId::Nausea => "nausea",
            SymptomId::LightSensitivity => "light_sensitivity",
            SymptomId::StiffNeck => "stiff_neck",
            SymptomId::ShortnessBreath => "shortness_breath",
            SymptomId::ChestPain => "chest_pain",
        }
    }
}

impl fmt::Display for SymptomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Erro de parsing: a string não pertence ao conjunto fechado de sintomas.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown symptom identifier: {0}")]
pub struct UnknownSymptom(pub String);

/// Parsing na fronteira — aceita a forma `snake_case`, ignorando
/// espaços nas bordas e diferenças de caixa.
impl FromStr for SymptomId {
    type Err = UnknownSymptom;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SymptomId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| UnknownSymptom(s.to_string()))
    }
}

/// Entrada do catálogo de sintomas.
///
/// Os `synonyms` são metadado de apresentação (ex: para seleção manual
/// ou extração de texto livre feita fora do motor) — o motor de
/// inferência não os consulta.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    /// Identificador fechado.
    pub id: SymptomId,
    /// Nome legível (ex: "Shortness of Breath").
    pub label: String,
    /// Sinônimos em linguagem natural.
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl Symptom {
    pub fn new(id: SymptomId, label: &str, synonyms: &[&str]) -> Self {
        Self {
            id,
            label: label.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_every_variant_from_its_wire_form() {
        for id in SymptomId::ALL {
            assert_eq!(id.as_str().parse::<SymptomId>(), Ok(id));
        }
    }

    #[test]
    fn parse_is_case_and_whitespace_tolerant() {
        assert_eq!(" Stiff_Neck ".parse::<SymptomId>(), Ok(SymptomId::StiffNeck));
    }

    #[test]
    fn parse_rejects_unknown_identifier() {
        let err = "dizziness".parse::<SymptomId>().unwrap_err();
        assert_eq!(err, UnknownSymptom("dizziness".to_string()));
        assert_eq!(err.to_string(), "unknown symptom identifier: dizziness");
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&SymptomId::ShortnessBreath).unwrap();
        assert_eq!(json, "\"shortness_breath\"");
        let back: SymptomId = serde_json::from_str("\"light_sensitivity\"").unwrap();
        assert_eq!(back, SymptomId::LightSensitivity);
    }

    #[test]
    fn serde_rejects_identifier_outside_closed_set() {
        assert!(serde_json::from_str::<SymptomId>("\"rash\"").is_err());
    }
}
