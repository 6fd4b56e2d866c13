//! # MedLogic — Motor de Inferência Diagnóstica
//!
//! **Ponto de entrada principal** da aplicação.
//!
//! Recebe um conjunto de sintomas observados, avalia cada regra da base de
//! conhecimento, pontua e filtra as conclusões, e devolve um ranking de
//! doenças candidatas com uma explicação legível para cada uma.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG, padrão info)
//!   ├── Lê a linha de comando (clap)
//!   └── Despacha:
//!       ├── serve    → carrega KB, monta AppState e Router, escuta TCP
//!       ├── diagnose → carrega KB, roda uma inferência, imprime o ranking
//!       └── check    → carrega KB, imprime contagens e lacunas
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Servidor em http://localhost:3000
//! cargo run
//!
//! # Uma inferência no terminal
//! cargo run -- diagnose fever cough muscle_ache
//!
//! # Logs detalhados
//! RUST_LOG=debug cargo run -- diagnose headache fatigue --json
//! ```

/// Módulo `core` — tipos fundamentais: SymptomId, Disease, Rule, KnowledgeBase.
mod core;

/// Módulo `inference` — matcher, agregador, explicações e ranking.
mod inference;

/// Módulo `persistence` — leitura da KB em JSON.
mod persistence;

/// Módulo `config` — linha de comando e variáveis de ambiente.
mod config;

/// Módulo `web` — servidor axum e handlers JSON.
mod web;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, Command};
use crate::inference::InferenceEngine;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().into_command() {
        Command::Serve(args) => serve(&args.addr, &args.kb.kb).await,
        Command::Diagnose { symptoms, json, kb } => diagnose(&symptoms, json, &kb.kb),
        Command::Check { kb } => check(&kb.kb),
    }
}

/// Inicia o servidor HTTP e bloqueia até o processo ser encerrado.
async fn serve(addr: &str, kb_path: &Path) -> Result<()> {
    tracing::info!("🩺 MedLogic — Starting...");

    let kb = persistence::load_kb(kb_path)?;
    let state = AppState::new(kb, kb_path.to_path_buf());
    let app = web::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("falha ao escutar em {}", addr))?;
    tracing::info!("🚀 Server running at http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Roda uma única inferência e imprime o resultado em stdout.
fn diagnose(symptoms: &[String], json: bool, kb_path: &Path) -> Result<()> {
    let facts = web::handlers::parse_symptoms(symptoms)?;
    let kb = persistence::load_kb(kb_path)?;
    let results = InferenceEngine::infer(&kb, &facts);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No disease matched the reported symptoms.");
        return Ok(());
    }
    for (i, r) in results.iter().enumerate() {
        println!("{}. {} ({}%)", i + 1, r.disease_name, r.percent());
        println!("   {}", r.explanation);
    }
    Ok(())
}

/// Valida a KB e imprime um resumo. Falha com a lista de problemas se inválida.
fn check(kb_path: &Path) -> Result<()> {
    let kb = persistence::load_kb(kb_path)?;
    println!(
        "knowledge base {} ({}): {} symptoms, {} diseases, {} rules",
        kb.version(),
        kb.last_updated(),
        kb.symptom_count(),
        kb.disease_count(),
        kb.rule_count()
    );
    for gap in kb.lookup_gaps() {
        println!("warning: {}", gap);
    }
    Ok(())
}
