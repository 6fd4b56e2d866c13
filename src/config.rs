//! # Configuração — Linha de Comando e Variáveis de Ambiente
//!
//! | Comando | Efeito |
//! |---------|--------|
//! | `medlogic serve` | Servidor HTTP (padrão quando nenhum comando é dado) |
//! | `medlogic diagnose fever cough` | Uma inferência, resultado no terminal |
//! | `medlogic check` | Valida o arquivo da KB e mostra contagens |
//!
//! | Opção | Variável | Padrão |
//! |-------|----------|--------|
//! | `--addr` | `MEDLOGIC_ADDR` | `0.0.0.0:3000` |
//! | `--kb` | `MEDLOGIC_KB` | `data/kb.json` |
//!
//! O nível de log vem de `RUST_LOG` (padrão `info`).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::persistence::KB_PATH;

/// Endereço padrão do servidor HTTP.
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// MedLogic — motor de inferência diagnóstica baseado em regras
#[derive(Parser, Debug)]
#[command(name = "medlogic")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Opções de `serve`, aceitas também sem subcomando.
    #[command(flatten)]
    pub serve: ServeArgs,
}

/// Opções comuns a todos os comandos.
#[derive(Args, Debug, Clone)]
pub struct KbArgs {
    /// Arquivo JSON da base de conhecimento (catálogo embutido se ausente)
    #[arg(long, env = "MEDLOGIC_KB", default_value = KB_PATH)]
    pub kb: PathBuf,
}

/// Opções do servidor HTTP.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Endereço de escuta
    #[arg(long, env = "MEDLOGIC_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,

    #[command(flatten)]
    pub kb: KbArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inicia o servidor HTTP
    Serve(ServeArgs),

    /// Roda uma inferência e imprime o ranking
    Diagnose {
        /// Sintomas observados (ex: fever cough muscle_ache)
        #[arg(required = true)]
        symptoms: Vec<String>,

        /// Imprime os resultados como JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        kb: KbArgs,
    },

    /// Valida o arquivo da base de conhecimento
    Check {
        #[command(flatten)]
        kb: KbArgs,
    },
}

impl Cli {
    /// Comando efetivo: sem subcomando, `serve` com as opções de topo.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Serve(self.serve))
    }
}
