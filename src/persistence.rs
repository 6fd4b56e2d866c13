//! # Persistência — Carregamento da KB a partir do Disco
//!
//! Módulo responsável por ler um snapshot da [`KnowledgeBase`] de um
//! arquivo JSON (por padrão `data/kb.json`).
//!
//! ## Formato de Armazenamento
//!
//! ```json
//! {
//!   "version": "1.2.0",
//!   "lastUpdated": "2024-05-20",
//!   "symptoms": [{ "id": "fever", "label": "Fever", "synonyms": ["pyrexia"] }],
//!   "diseases": [{ "id": "flu", "name": "Influenza (Flu)", "description": "..." }],
//!   "rules": [{ "id": "R1", "conclusion": "flu", "antecedents": ["fever"], "priority": 10 }]
//! }
//! ```
//!
//! ## Comportamento
//!
//! - Arquivo inexistente → catálogo embutido ([`KnowledgeBase::builtin`]),
//!   apenas em [`load_kb`]; [`read_kb`] (reload) falha
//! - JSON inválido ou falha de integridade → erro com contexto (fatal no startup)
//! - Sintoma referenciado sem entrada no catálogo → `warn`, carga prossegue
//!
//! O motor nunca escreve a KB de volta: o arquivo é mantido pelo operador.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::{KnowledgeBase, KnowledgeBaseData};

/// Caminho padrão do arquivo da KB (relativo à raiz do projeto).
pub const KB_PATH: &str = "data/kb.json";

/// Carrega a KB de `path`, ou o catálogo embutido se o arquivo não existir.
///
/// # Erros
///
/// Retorna erro se o arquivo existir mas não puder ser lido, não for JSON
/// válido no formato da KB, ou falhar a validação de integridade.
pub fn load_kb(path: &Path) -> Result<KnowledgeBase> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "arquivo da KB não encontrado, usando catálogo embutido");
        return KnowledgeBase::builtin().context("catálogo embutido inválido");
    }
    read_kb(path)
}

/// Lê e valida a KB de `path`, sem fallback.
///
/// Usado no reload: um arquivo que sumiu é erro, não motivo para voltar
/// ao catálogo embutido.
pub fn read_kb(path: &Path) -> Result<KnowledgeBase> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("falha ao ler {}", path.display()))?;
    let data: KnowledgeBaseData = serde_json::from_str(&json)
        .with_context(|| format!("falha ao desserializar {}", path.display()))?;
    let kb = KnowledgeBase::new(data)
        .with_context(|| format!("{} rejeitado na validação", path.display()))?;

    for gap in kb.lookup_gaps() {
        tracing::warn!(
            rule = %gap.rule,
            symptom = %gap.symptom,
            "sintoma referenciado sem entrada no catálogo"
        );
    }
    tracing::info!(
        path = %path.display(),
        version = %kb.version(),
        symptoms = kb.symptom_count(),
        diseases = kb.disease_count(),
        rules = kb.rule_count(),
        "KB carregada do disco"
    );
    Ok(kb)
}
