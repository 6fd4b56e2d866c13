//! # Estado da Aplicação Web
//!
//! ```text
//! AppState (clonado por handler)
//!  ├── store: Arc<KnowledgeStore> ── snapshot() ──► Arc<KnowledgeBase>
//!  └── kb_path: Arc<PathBuf>       ── usado por POST /knowledge/reload
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use crate::core::{KnowledgeBase, KnowledgeStore};

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Snapshot corrente da KB, trocado atomicamente no reload.
    pub store: Arc<KnowledgeStore>,
    /// Arquivo relido por `POST /knowledge/reload`.
    pub kb_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(kb: KnowledgeBase, kb_path: PathBuf) -> Self {
        Self {
            store: Arc::new(KnowledgeStore::new(kb)),
            kb_path: Arc::new(kb_path),
        }
    }
}
