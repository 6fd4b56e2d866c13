//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Este módulo agrupa os tipos sobre os quais o motor de inferência opera:
//!
//! - [`SymptomId`] / [`Symptom`] — Fatos observáveis (conjunto fechado)
//! - [`Disease`] — Conclusões diagnósticas
//! - [`Rule`] — Regras ponderadas: antecedentes, exclusões, prioridade
//! - [`KnowledgeBase`] — Snapshot validado e imutável dos três catálogos
//! - [`KnowledgeStore`] — Publicação atômica de novos snapshots
//!
//! ## Ciclo de Vida
//!
//! ```text
//! KnowledgeBaseData (JSON ou catálogo embutido)
//!   └── KnowledgeBase::new() ── valida ──► snapshot imutável
//!         └── KnowledgeStore ── Arc ──► InferenceEngine::infer()
//! ```

/// Sub-módulo com [`SymptomId`], [`Symptom`] e [`FactSet`].
pub mod symptom;

/// Sub-módulo com [`Disease`].
pub mod disease;

/// Sub-módulo com [`Rule`].
pub mod rule;

/// Sub-módulo com [`KnowledgeBase`] e os erros de integridade.
pub mod knowledge_base;

/// Catálogo médico embutido.
pub mod catalog;

/// Sub-módulo com [`KnowledgeStore`].
pub mod store;

pub use disease::{Disease, DiseaseId};
pub use knowledge_base::{
    IntegrityIssue, KnowledgeBase, KnowledgeBaseData, KnowledgeBaseError, LookupGap,
};
pub use rule::Rule;
pub use store::KnowledgeStore;
pub use symptom::{FactSet, Symptom, SymptomId, UnknownSymptom};
