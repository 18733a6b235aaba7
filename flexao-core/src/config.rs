//! Configuração da tabela de verbos.
//!
//! ```json
//! { "language": "pt", "path": "data/meus-verbos.txt" }
//! ```
//!
//! Campos ausentes assumem os padrões: português, [`PT_FORMAT`] e a tabela
//! embutida no binário.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{InflectError, Result};
use crate::tense::PT_FORMAT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerbTableConfig {
    /// Código do idioma da tabela. Só `"pt"` é suportado.
    pub language: String,
    /// Ids de [`crate::tense::TenseSlot`] na ordem das colunas do arquivo.
    pub format: Vec<u8>,
    /// Arquivo de verbos; `None` usa a tabela embutida.
    pub path: Option<PathBuf>,
}

impl Default for VerbTableConfig {
    fn default() -> Self {
        Self {
            language: "pt".to_string(),
            format: PT_FORMAT.to_vec(),
            path: None,
        }
    }
}

impl VerbTableConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| InflectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VerbTableConfig::from_json("{}").unwrap();
        assert_eq!(config, VerbTableConfig::default());
        assert_eq!(config.language, "pt");
        assert_eq!(config.format.len(), 46);
        assert!(config.path.is_none());
    }

    #[test]
    fn test_partial_override() {
        let config = VerbTableConfig::from_json(r#"{"path": "verbos.txt"}"#).unwrap();
        assert_eq!(config.path, Some(PathBuf::from("verbos.txt")));
        assert_eq!(config.format, PT_FORMAT.to_vec());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            VerbTableConfig::from_json("{language: pt}"),
            Err(InflectError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = VerbTableConfig::from_json_file("/nao/existe.json").unwrap_err();
        assert!(matches!(err, InflectError::Io { .. }));
    }
}
