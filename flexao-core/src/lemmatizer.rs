//! Lematização por classe de palavra.
//!
//! Ponto de entrada para um etiquetador: dada a palavra e sua classe, devolve a
//! forma de dicionário usando a regra da classe.

use crate::adjective::predicative;
use crate::morph::PartOfSpeech;
use crate::noun::singularize;
use crate::verb_table::{verbs, VerbFormProvider};

pub fn lemmatize(word: &str, pos: PartOfSpeech) -> String {
    match pos {
        PartOfSpeech::Noun => singularize(word, None),
        PartOfSpeech::Verb => verbs().lemma(word),
        PartOfSpeech::Adjective => predicative(word),
        PartOfSpeech::Adverb => word.to_lowercase(),
    }
}

/// Como [`lemmatize`], com a classe dada por etiqueta ("NNS", "VBD", "JJ"...).
/// Etiquetas desconhecidas devolvem a palavra em minúsculas.
pub fn lemmatize_tagged(word: &str, tag: &str) -> String {
    match PartOfSpeech::from_tag(tag) {
        Some(pos) => lemmatize(word, pos),
        None => word.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_part_of_speech() {
        assert_eq!(lemmatize("aviões", PartOfSpeech::Noun), "avião");
        assert_eq!(lemmatize("fazem", PartOfSpeech::Verb), "fazer");
        assert_eq!(lemmatize("falou", PartOfSpeech::Verb), "falar");
        assert_eq!(lemmatize("histéricas", PartOfSpeech::Adjective), "histérico");
        assert_eq!(lemmatize("Rapidamente", PartOfSpeech::Adverb), "rapidamente");
    }

    #[test]
    fn test_tagged() {
        assert_eq!(lemmatize_tagged("casas", "NNS"), "casa");
        assert_eq!(lemmatize_tagged("cantava", "VBD"), "cantar");
        assert_eq!(lemmatize_tagged("Que", "IN"), "que");
    }
}
