//! # Módulo Web — API HTTP do Motor de Inferência
//!
//! Expõe o motor para consumidores externos (interface de chat, geração de
//! texto, seleção manual de sintomas). Construída com **Axum**.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Axum Router (este módulo)                               │
//! │  ├── GET  /status              → JSON: versão e contagens│
//! │  ├── GET  /knowledge           → JSON: snapshot da KB    │
//! │  ├── POST /diagnose            → JSON: ranking           │
//! │  └── POST /knowledge/reload    → JSON: novo snapshot     │
//! ├─────────────────────────────────────────────────────────┤
//! │ CorsLayer permissivo (front-end roda no navegador)      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`errors`] | `ApiError` e o corpo JSON de erro |

pub mod errors;
pub mod handlers;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(handlers::status))
        .route("/knowledge", get(handlers::knowledge))
        .route("/knowledge/reload", post(handlers::reload_knowledge))
        .route("/diagnose", post(handlers::diagnose))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
