//! # Categorias Gramaticais
//!
//! Tipos fechados usados por todos os módulos de flexão: gênero, número,
//! tipo de artigo e classe de palavra.
//!
//! ## Gênero ambíguo
//!
//! O classificador de gênero é heurístico. Quando o sufixo não decide, ele
//! devolve **todas** as leituras possíveis em vez de adivinhar:
//!
//! | Tag               | Leitura                     | Exemplo   |
//! |-------------------|-----------------------------|-----------|
//! | `Masculine`       | masculino                   | livro     |
//! | `Feminine`        | feminino                    | casa      |
//! | `Ambiguous`       | masculino ou feminino       | estudante |
//! | `MasculinePlural` | masculino plural            | livros    |
//! | `FemininePlural`  | feminino plural             | casas     |
//! | `AmbiguousPlural` | masculino ou feminino, pl.  | lições    |

use serde::{Deserialize, Serialize};

/// Gênero gramatical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Masculine
    }
}

/// Número gramatical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    Singular,
    Plural,
}

impl Default for Number {
    fn default() -> Self {
        Number::Singular
    }
}

/// Artigo definido (o/a/os/as) ou indefinido (um/uma/uns/umas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleKind {
    Definite,
    Indefinite,
}

impl Default for ArticleKind {
    fn default() -> Self {
        ArticleKind::Indefinite
    }
}

/// Classe de palavra, usada pelo lematizador para escolher a regra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// Etiqueta Penn Treebank abreviada ("NN", "VB", "JJ", "RB").
    pub fn tag(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NN",
            PartOfSpeech::Verb => "VB",
            PartOfSpeech::Adjective => "JJ",
            PartOfSpeech::Adverb => "RB",
        }
    }

    /// Reconhece a etiqueta pelo prefixo ("NNS" → Noun, "VBD" → Verb).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.to_ascii_uppercase();
        if tag.starts_with("NN") {
            Some(PartOfSpeech::Noun)
        } else if tag.starts_with("VB") {
            Some(PartOfSpeech::Verb)
        } else if tag.starts_with("JJ") {
            Some(PartOfSpeech::Adjective)
        } else if tag.starts_with("RB") {
            Some(PartOfSpeech::Adverb)
        } else {
            None
        }
    }
}

/// Concordância de gênero e número exigida por artigos e adjetivos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Agreement {
    pub gender: Gender,
    pub number: Number,
}

impl Agreement {
    pub const fn new(gender: Gender, number: Number) -> Self {
        Self { gender, number }
    }

    pub fn is_plural(&self) -> bool {
        self.number == Number::Plural
    }

    pub fn is_feminine(&self) -> bool {
        self.gender == Gender::Feminine
    }
}

/// Resultado do classificador de gênero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderTag {
    Masculine,
    Feminine,
    /// Masculino ou feminino (ex: "estudante", "legal").
    Ambiguous,
    MasculinePlural,
    FemininePlural,
    /// Plural sem gênero definido (ex: "-ões").
    AmbiguousPlural,
}

impl GenderTag {
    /// Os gêneros admitidos por esta leitura.
    pub fn genders(&self) -> &'static [Gender] {
        match self {
            GenderTag::Masculine | GenderTag::MasculinePlural => &[Gender::Masculine],
            GenderTag::Feminine | GenderTag::FemininePlural => &[Gender::Feminine],
            GenderTag::Ambiguous | GenderTag::AmbiguousPlural => {
                &[Gender::Masculine, Gender::Feminine]
            }
        }
    }

    pub fn is_plural(&self) -> bool {
        matches!(
            self,
            GenderTag::MasculinePlural | GenderTag::FemininePlural | GenderTag::AmbiguousPlural
        )
    }

    /// `true` quando o chamador precisa desambiguar por outro meio.
    pub fn is_ambiguous(&self) -> bool {
        self.genders().len() > 1
    }

    /// Forma compacta no estilo "m", "f", "m,f,p".
    pub fn label(&self) -> &'static str {
        match self {
            GenderTag::Masculine => "m",
            GenderTag::Feminine => "f",
            GenderTag::Ambiguous => "m,f",
            GenderTag::MasculinePlural => "m,p",
            GenderTag::FemininePlural => "f,p",
            GenderTag::AmbiguousPlural => "m,f,p",
        }
    }
}

impl From<Gender> for GenderTag {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Masculine => GenderTag::Masculine,
            Gender::Feminine => GenderTag::Feminine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_tag_genders() {
        assert_eq!(GenderTag::Feminine.genders(), &[Gender::Feminine]);
        assert_eq!(
            GenderTag::AmbiguousPlural.genders(),
            &[Gender::Masculine, Gender::Feminine]
        );
        assert!(GenderTag::Ambiguous.is_ambiguous());
        assert!(!GenderTag::MasculinePlural.is_ambiguous());
        assert!(GenderTag::FemininePlural.is_plural());
        assert!(!GenderTag::Feminine.is_plural());
    }

    #[test]
    fn test_part_of_speech_from_tag() {
        assert_eq!(PartOfSpeech::from_tag("NNS"), Some(PartOfSpeech::Noun));
        assert_eq!(PartOfSpeech::from_tag("vbd"), Some(PartOfSpeech::Verb));
        assert_eq!(PartOfSpeech::from_tag("JJ"), Some(PartOfSpeech::Adjective));
        assert_eq!(PartOfSpeech::from_tag("DT"), None);
        assert_eq!(PartOfSpeech::Adverb.tag(), "RB");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&GenderTag::FemininePlural).unwrap();
        assert_eq!(json, "\"feminine_plural\"");
        let kind: ArticleKind = serde_json::from_str("\"definite\"").unwrap();
        assert_eq!(kind, ArticleKind::Definite);
    }
}
