//! # Erros de Flexão
//!
//! A maior parte das operações deste crate é total: uma palavra desconhecida
//! simplesmente atravessa as regras e volta inalterada. Só existem erros para
//! **violações de contrato** (ex: pedir o paradigma de algo que não é um
//! infinitivo) e para falhas ao carregar a tabela de verbos.

use std::path::PathBuf;

/// Erros que cruzam a fronteira das funções públicas.
#[derive(Debug, thiserror::Error)]
pub enum InflectError {
    /// O lema não termina em `-ar`, `-er` ou `-ir` (ou não tem radical).
    #[error("lema inválido '{0}': o verbo deve terminar em 'ar', 'er' ou 'ir'")]
    InvalidLemma(String),

    /// A tabela de verbos foi configurada para outro idioma.
    #[error("idioma não suportado: {0}")]
    UnsupportedLanguage(String),

    /// Uma linha do arquivo de verbos tem mais colunas que o formato.
    #[error("linha {line} do arquivo de verbos tem {found} colunas (máximo {expected})")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Falha de leitura do arquivo de verbos.
    #[error("falha ao ler {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuração JSON inválida.
    #[error("configuração inválida: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InflectError>;
