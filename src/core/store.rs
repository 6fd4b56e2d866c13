//! # KnowledgeStore — Troca Atômica de Snapshots
//!
//! O motor de inferência só lê snapshots imutáveis. Quando a KB é
//! recarregada (ex: `POST /knowledge/reload`), o novo snapshot é
//! **publicado por troca atômica** do `Arc`:
//!
//! ```text
//! leitor A ── snapshot() ──► Arc<KB v1> ── infer ──► resultados v1
//! reload   ── replace(v2) ─► (lock de escrita só durante a troca)
//! leitor B ── snapshot() ──► Arc<KB v2> ── infer ──► resultados v2
//! ```
//!
//! O lock é mantido apenas para clonar ou trocar o `Arc` — nunca durante
//! a inferência. Uma chamada em andamento continua vendo a versão que
//! obteve, mesmo que uma troca aconteça no meio.

use std::sync::Arc;

use parking_lot::RwLock;

use super::KnowledgeBase;

/// Contêiner do snapshot corrente da KB.
pub struct KnowledgeStore {
    current: RwLock<Arc<KnowledgeBase>>,
}

impl KnowledgeStore {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self {
            current: RwLock::new(Arc::new(kb)),
        }
    }

    /// Snapshot corrente. O chamador pode usá-lo sem segurar nenhum lock.
    pub fn snapshot(&self) -> Arc<KnowledgeBase> {
        self.current.read().clone()
    }

    /// Publica um novo snapshot e retorna o anterior.
    pub fn replace(&self, kb: KnowledgeBase) -> Arc<KnowledgeBase> {
        let next = Arc::new(kb);
        tracing::info!(
            version = %next.version(),
            rules = next.rule_count(),
            "KB: novo snapshot publicado"
        );
        std::mem::replace(&mut *self.current.write(), next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KnowledgeBaseData;

    fn versioned(version: &str) -> KnowledgeBase {
        let mut data: KnowledgeBaseData = KnowledgeBase::builtin().unwrap().data().clone();
        data.version = version.to_string();
        KnowledgeBase::new(data).unwrap()
    }

    #[test]
    fn snapshot_held_across_replace_keeps_old_version() {
        let store = KnowledgeStore::new(versioned("1.0.0"));
        let in_flight = store.snapshot();

        let previous = store.replace(versioned("2.0.0"));

        assert_eq!(in_flight.version(), "1.0.0");
        assert_eq!(previous.version(), "1.0.0");
        assert_eq!(store.snapshot().version(), "2.0.0");
    }
}
