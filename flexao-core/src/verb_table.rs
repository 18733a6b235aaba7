//! # Tabela de Verbos
//!
//! A tabela é a fonte preferida para qualquer forma verbal; as regras de
//! [`crate::verbs`] só entram quando o verbo não tem linha no arquivo.
//!
//! ## Formato do arquivo
//!
//! ```text
//! ;;; comentário
//! abrir,abro,abres,abre,...,abrindo,aberto
//! ```
//!
//! Uma linha por verbo, formas separadas por vírgula na ordem de
//! [`VerbTableConfig::format`], infinitivo primeiro. Células vazias são
//! permitidas (forma desconhecida); linhas mais largas que o formato, não.
//!
//! ## Composição
//!
//! O gerador de reserva é injetado via [`VerbRules`]. [`PortugueseRules`] é o
//! padrão; testes e outros idiomas podem trocar a implementação sem mexer na
//! leitura da tabela.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, error, warn};

use crate::config::VerbTableConfig;
use crate::error::{InflectError, Result};
use crate::tense::{TenseSlot, PT_FORMAT};
use crate::verbs::{self};

const EMBEDDED_VERBS: &str = include_str!("../data/pt-verbs.txt");

/// Par de geradores usado quando o verbo não está na tabela.
pub trait VerbRules: Send + Sync {
    fn find_lemma(&self, verb: &str) -> String;

    /// Formas na ordem de [`PT_FORMAT`].
    fn find_lexeme(&self, lemma: &str) -> Result<Vec<String>>;
}

/// Regras de sufixo do português.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortugueseRules;

impl VerbRules for PortugueseRules {
    fn find_lemma(&self, verb: &str) -> String {
        verbs::find_lemma(verb)
    }

    fn find_lexeme(&self, lemma: &str) -> Result<Vec<String>> {
        verbs::find_lexeme(lemma)
    }
}

/// Operações de consulta sobre formas verbais.
pub trait VerbFormProvider {
    /// Infinitivo de qualquer forma. Nunca falha.
    fn lemma(&self, verb: &str) -> String;

    /// Formas distintas do verbo, na ordem das colunas.
    fn lexeme(&self, verb: &str) -> Result<Vec<String>>;

    /// Forma do verbo num slot; `None` se a célula está vazia ou o slot não
    /// faz parte do formato.
    ///
    /// Um verbo fora da tabela cujo lema não é infinitivo ("xyz") não tem
    /// paradigma: devolve [`InflectError::InvalidLemma`], como [`Self::lexeme`].
    fn conjugate(&self, verb: &str, slot: TenseSlot) -> Result<Option<String>>;

    /// Slots em que a forma aparece no paradigma do seu lema.
    fn tenses(&self, verb: &str) -> Result<Vec<TenseSlot>>;
}

pub struct VerbTable<R = PortugueseRules> {
    format: Vec<u8>,
    rows: HashMap<String, Vec<String>>,
    inverse: HashMap<String, String>,
    rules: R,
}

impl VerbTable<PortugueseRules> {
    /// Carrega a tabela descrita pela configuração (arquivo ou embutida).
    pub fn load(config: &VerbTableConfig) -> Result<Self> {
        match &config.path {
            Some(path) => {
                let file = File::open(path).map_err(|source| InflectError::Io {
                    path: path.clone(),
                    source,
                })?;
                Self::parse(config, BufReader::new(file), path, PortugueseRules)
            }
            None => Self::from_reader(config, EMBEDDED_VERBS.as_bytes()),
        }
    }

    pub fn from_reader(config: &VerbTableConfig, reader: impl BufRead) -> Result<Self> {
        Self::with_rules(config, reader, PortugueseRules)
    }
}

impl<R: VerbRules> VerbTable<R> {
    pub fn with_rules(config: &VerbTableConfig, reader: impl BufRead, rules: R) -> Result<Self> {
        Self::parse(config, reader, Path::new("<embutida>"), rules)
    }

    /// Tabela sem linhas: tudo vem das regras.
    pub fn empty(rules: R) -> Self {
        Self {
            format: PT_FORMAT.to_vec(),
            rows: HashMap::new(),
            inverse: HashMap::new(),
            rules,
        }
    }

    fn parse(
        config: &VerbTableConfig,
        reader: impl BufRead,
        origin: &Path,
        rules: R,
    ) -> Result<Self> {
        if config.language != "pt" {
            return Err(InflectError::UnsupportedLanguage(config.language.clone()));
        }
        let width = config.format.len();
        let mut rows = HashMap::new();
        let mut inverse = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| InflectError::Io {
                path: origin.to_path_buf(),
                source,
            })?;
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }

            let mut forms: Vec<String> = line.split(',').map(|f| f.trim().to_lowercase()).collect();
            if forms.len() > width {
                return Err(InflectError::MalformedRow {
                    line: index + 1,
                    expected: width,
                    found: forms.len(),
                });
            }
            forms.resize(width, String::new());

            let lemma = forms[0].clone();
            if lemma.is_empty() {
                warn!(line = index + 1, "linha sem infinitivo ignorada");
                continue;
            }
            for form in forms.iter().filter(|f| !f.is_empty()) {
                inverse.entry(form.clone()).or_insert_with(|| lemma.clone());
            }
            rows.insert(lemma, forms);
        }

        debug!(verbs = rows.len(), origin = %origin.display(), "tabela de verbos carregada");
        Ok(Self {
            format: config.format.clone(),
            rows,
            inverse,
            rules,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.rows.contains_key(&lemma.to_lowercase())
    }

    /// Linha da tabela com seu formato, ou o lexema gerado (em `PT_FORMAT`).
    fn paradigm(&self, lemma: &str) -> Result<(Cow<'_, [String]>, &[u8])> {
        match self.rows.get(lemma) {
            Some(row) => Ok((Cow::Borrowed(row.as_slice()), self.format.as_slice())),
            None => {
                let format: &'static [u8] = &PT_FORMAT;
                Ok((Cow::Owned(self.rules.find_lexeme(lemma)?), format))
            }
        }
    }
}

impl<R: VerbRules> VerbFormProvider for VerbTable<R> {
    fn lemma(&self, verb: &str) -> String {
        let v = verb.trim().to_lowercase();
        if let Some(lemma) = self.inverse.get(&v) {
            return lemma.clone();
        }
        if self.rows.contains_key(&v) {
            return v;
        }
        self.rules.find_lemma(&v)
    }

    fn lexeme(&self, verb: &str) -> Result<Vec<String>> {
        let lemma = self.lemma(verb);
        let (forms, _) = self.paradigm(&lemma)?;
        let mut seen = HashSet::new();
        Ok(forms
            .iter()
            .filter(|f| !f.is_empty() && seen.insert(f.as_str()))
            .cloned()
            .collect())
    }

    fn conjugate(&self, verb: &str, slot: TenseSlot) -> Result<Option<String>> {
        let Some(id) = slot.id() else {
            return Ok(None);
        };
        let lemma = self.lemma(verb);
        let (forms, format) = self.paradigm(&lemma)?;
        Ok(format
            .iter()
            .position(|&column| column == id)
            .and_then(|i| forms.get(i))
            .filter(|f| !f.is_empty())
            .cloned())
    }

    fn tenses(&self, verb: &str) -> Result<Vec<TenseSlot>> {
        let v = verb.trim().to_lowercase();
        let lemma = self.lemma(&v);
        let (forms, format) = self.paradigm(&lemma)?;
        let mut slots: Vec<TenseSlot> = forms
            .iter()
            .zip(format)
            .filter(|(form, _)| **form == v)
            .filter_map(|(_, &id)| TenseSlot::from_id(id))
            .collect();
        slots.sort();
        slots.dedup();
        Ok(slots)
    }
}

/// Tabela padrão do processo, montada na primeira chamada a partir dos dados
/// embutidos.
pub fn verbs() -> &'static VerbTable {
    static TABLE: OnceLock<VerbTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let config = VerbTableConfig::default();
        VerbTable::from_reader(&config, EMBEDDED_VERBS.as_bytes()).unwrap_or_else(|err| {
            error!(%err, "tabela de verbos embutida inválida; usando só as regras");
            VerbTable::empty(PortugueseRules)
        })
    })
}

pub fn lemma(verb: &str) -> String {
    verbs().lemma(verb)
}

pub fn lexeme(verb: &str) -> Result<Vec<String>> {
    verbs().lexeme(verb)
}

pub fn conjugate(verb: &str, slot: TenseSlot) -> Result<Option<String>> {
    verbs().conjugate(verb, slot)
}

pub fn tenses(verb: &str) -> Result<Vec<TenseSlot>> {
    verbs().tenses(verb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::Number;
    use crate::tense::{Aspect, Mood, Person, Tense};

    fn abrir_table() -> VerbTable {
        let mut forms = verbs::find_lexeme("abrir").unwrap();
        forms[45] = "aberto".to_string();
        let data = format!(";;; teste\n\n{}\nxpto,,,\n", forms.join(","));
        VerbTable::from_reader(&VerbTableConfig::default(), data.as_bytes()).unwrap()
    }

    #[test]
    fn test_table_row_beats_rules() {
        let table = abrir_table();
        assert_eq!(table.len(), 2);
        assert!(table.contains("Abrir"));
        // pelas regras seria "abertar"
        assert_eq!(table.lemma("aberto"), "abrir");
        assert_eq!(
            table.conjugate("abrir", TenseSlot::PAST_PARTICIPLE).unwrap(),
            Some("aberto".to_string())
        );
    }

    #[test]
    fn test_missing_verb_falls_back_to_rules() {
        let table = abrir_table();
        assert_eq!(table.lemma("amava"), "amar");
        let slot = TenseSlot::present(Person::First, Number::Singular);
        assert_eq!(table.conjugate("amar", slot).unwrap(), Some("amo".to_string()));
        assert!(matches!(table.lexeme("xyz"), Err(InflectError::InvalidLemma(_))));
        let conjugated = table.conjugate("xyz", slot);
        assert!(matches!(conjugated, Err(InflectError::InvalidLemma(_))));
    }

    #[test]
    fn test_empty_cell_and_unknown_slot() {
        let table = abrir_table();
        assert_eq!(table.lemma("xpto"), "xpto");
        let slot = TenseSlot::present(Person::First, Number::Singular);
        assert_eq!(table.conjugate("xpto", slot).unwrap(), None);

        let outside = TenseSlot::personal(
            Tense::Future,
            Person::First,
            Number::Singular,
            Mood::Imperative,
            Aspect::Perfective,
        );
        assert_eq!(table.conjugate("abrir", outside).unwrap(), None);
    }

    #[test]
    fn test_lexeme_is_deduplicated() {
        let table = abrir_table();
        let forms = table.lexeme("abre").unwrap();
        assert_eq!(forms[0], "abrir");
        assert!(forms.len() < 46);
        assert!(forms.contains(&"aberto".to_string()));
        let unique: HashSet<_> = forms.iter().collect();
        assert_eq!(unique.len(), forms.len());
    }

    #[test]
    fn test_tenses_lists_every_slot() {
        let table = abrir_table();
        let slots = table.tenses("abre").unwrap();
        assert_eq!(slots.len(), 2);
        assert!(slots.contains(&TenseSlot::present(Person::Third, Number::Singular)));
        assert!(slots.iter().any(|s| s.mood == Mood::Imperative));
        assert_eq!(table.tenses("abrir").unwrap(), vec![TenseSlot::INFINITIVE]);
    }

    #[test]
    fn test_row_wider_than_format_is_rejected() {
        let data = vec!["x"; 47].join(",");
        let err = VerbTable::from_reader(&VerbTableConfig::default(), data.as_bytes()).err();
        assert!(matches!(
            err,
            Some(InflectError::MalformedRow { line: 1, expected: 46, found: 47 })
        ));
    }

    #[test]
    fn test_unsupported_language() {
        let config = VerbTableConfig {
            language: "en".to_string(),
            ..VerbTableConfig::default()
        };
        assert!(matches!(
            VerbTable::from_reader(&config, "".as_bytes()),
            Err(InflectError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let config = VerbTableConfig {
            path: Some("/nao/existe/verbos.txt".into()),
            ..VerbTableConfig::default()
        };
        assert!(matches!(VerbTable::load(&config), Err(InflectError::Io { .. })));
    }

    struct FixedRules;

    impl VerbRules for FixedRules {
        fn find_lemma(&self, _verb: &str) -> String {
            "fixo".to_string()
        }

        fn find_lexeme(&self, lemma: &str) -> Result<Vec<String>> {
            Ok(vec![lemma.to_string()])
        }
    }

    #[test]
    fn test_rules_are_injected() {
        let table = VerbTable::empty(FixedRules);
        assert!(table.is_empty());
        assert_eq!(table.lemma("qualquer"), "fixo");
        assert_eq!(table.lexeme("qualquer").unwrap(), vec!["fixo".to_string()]);
        assert_eq!(
            table.conjugate("qualquer", TenseSlot::INFINITIVE).unwrap(),
            Some("fixo".to_string())
        );
    }

    #[test]
    fn test_irregular_form_gets_its_own_slot() {
        let preterite_3pl = TenseSlot::personal(
            Tense::Past,
            Person::Third,
            Number::Plural,
            Mood::Indicative,
            Aspect::Perfective,
        );
        assert_eq!(lemma("fizeram"), "fazer");
        assert_eq!(tenses("fizeram").unwrap(), vec![preterite_3pl]);
        let participle = conjugate("compor", TenseSlot::PAST_PARTICIPLE).unwrap();
        assert_eq!(participle.as_deref(), Some("composto"));
    }

    #[test]
    fn test_embedded_table() {
        assert!(!verbs().is_empty());
        assert_eq!(lemma("escrito"), "escrever");
        assert_eq!(
            conjugate("escrever", TenseSlot::PAST_PARTICIPLE).unwrap(),
            Some("escrito".to_string())
        );
        assert_eq!(lemma("fazem"), "fazer");
        assert_eq!(lexeme("amar").unwrap()[0], "amar");
        assert!(tenses("falou").unwrap().iter().all(|s| s.tense == Tense::Past));
    }
}
