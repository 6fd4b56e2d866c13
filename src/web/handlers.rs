//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma
//! rota em [`super::create_router()`].
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `status` | GET | JSON | Versão e contagens do snapshot corrente |
//! | `knowledge` | GET | JSON | Snapshot completo (navegador da KB) |
//! | `diagnose` | POST | JSON | Inferência sobre a lista de sintomas |
//! | `reload_knowledge` | POST | JSON | Relê o arquivo e troca o snapshot |
//!
//! Cada requisição obtém **um** snapshot no início e usa apenas ele até o
//! fim, mesmo que um reload aconteça em paralelo.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};
use super::state::AppState;
use crate::core::{FactSet, KnowledgeBase, KnowledgeBaseData, KnowledgeBaseError, SymptomId};
use crate::inference::{DiagnosisResult, InferenceEngine};
use crate::persistence;

/// Resposta do endpoint `/status`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub version: String,
    pub last_updated: NaiveDate,
    pub symptoms: usize,
    pub diseases: usize,
    pub rules: usize,
}

impl StatusResponse {
    fn of(kb: &KnowledgeBase) -> Self {
        Self {
            version: kb.version().to_string(),
            last_updated: kb.last_updated(),
            symptoms: kb.symptom_count(),
            diseases: kb.disease_count(),
            rules: kb.rule_count(),
        }
    }
}

/// Corpo de `POST /diagnose`.
#[derive(Debug, Deserialize)]
pub struct DiagnoseRequest {
    /// Identificadores em `snake_case` (ex: `"runny_nose"`).
    pub symptoms: Vec<String>,
}

/// Resposta de `POST /diagnose`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnoseResponse {
    /// Versão da KB usada nesta inferência.
    pub version: String,
    /// Resultados ranqueados.
    pub results: Vec<DiagnosisResult>,
}

/// Converte as strings recebidas em um [`FactSet`].
///
/// Todas as strings inválidas são reportadas juntas. Duplicatas colapsam.
pub fn parse_symptoms(raw: &[String]) -> Result<FactSet, ApiError> {
    let mut facts = FactSet::new();
    let mut unknown = Vec::new();
    for s in raw {
        match s.parse::<SymptomId>() {
            Ok(id) => {
                facts.insert(id);
            }
            Err(e) => unknown.push(e.0),
        }
    }
    if unknown.is_empty() {
        Ok(facts)
    } else {
        Err(ApiError::UnknownSymptoms(unknown))
    }
}

/// `GET /status`
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse::of(&state.store.snapshot()))
}

/// `GET /knowledge` — a KB no mesmo formato do arquivo `data/kb.json`.
pub async fn knowledge(State(state): State<AppState>) -> Json<KnowledgeBaseData> {
    Json(state.store.snapshot().data().clone())
}

/// `POST /diagnose`
///
/// Falhas de extração do corpo também saem no formato JSON de erro (400).
pub async fn diagnose(
    State(state): State<AppState>,
    payload: Result<Json<DiagnoseRequest>, JsonRejection>,
) -> ApiResult<Json<DiagnoseResponse>> {
    let Json(req) = payload?;
    let facts = parse_symptoms(&req.symptoms)?;
    let kb = state.store.snapshot();
    let results = InferenceEngine::infer(&kb, &facts);
    tracing::info!(
        symptoms = facts.len(),
        results = results.len(),
        top = results.first().map(|r| r.disease_id.as_str()).unwrap_or("-"),
        "diagnóstico"
    );
    Ok(Json(DiagnoseResponse {
        version: kb.version().to_string(),
        results,
    }))
}

/// `POST /knowledge/reload`
///
/// A leitura do arquivo roda em `spawn_blocking`. Se a nova KB falhar na
/// validação, o snapshot anterior continua ativo e a resposta é 422. Um
/// arquivo ausente é 500: o catálogo embutido só entra no startup.
pub async fn reload_knowledge(State(state): State<AppState>) -> ApiResult<Json<StatusResponse>> {
    let path = state.kb_path.clone();
    let loaded = tokio::task::spawn_blocking(move || persistence::read_kb(&path))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let kb = match loaded {
        Ok(kb) => kb,
        Err(e) => {
            return Err(match e.downcast_ref::<KnowledgeBaseError>() {
                Some(integrity) => ApiError::Integrity(integrity.clone()),
                None => ApiError::Internal(format!("{:#}", e)),
            });
        }
    };

    let response = StatusResponse::of(&kb);
    state.store.replace(kb);
    Ok(Json(response))
}
