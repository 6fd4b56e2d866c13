//! # Disease — Conclusões Diagnósticas
//!
//! Uma [`Disease`] é o alvo de uma ou mais [`Rule`](super::Rule)s. O motor
//! agrega as provas por `id` de doença e apresenta o `name` ao usuário.

use serde::{Deserialize, Serialize};

/// Identificador de uma doença no catálogo (ex: `"flu"`).
pub type DiseaseId = String;

/// Entrada imutável do catálogo de doenças.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    /// Identificador referenciado por `Rule::conclusion`.
    pub id: DiseaseId,
    /// Nome de exibição (ex: "Influenza (Flu)").
    pub name: String,
    /// Descrição curta, exibida no navegador da KB.
    pub description: String,
}

impl Disease {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}
