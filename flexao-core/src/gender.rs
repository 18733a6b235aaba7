//! # Classificador de Gênero
//!
//! Heurística em duas etapas:
//!
//! 1. **Exceções** — palavras que o sufixo classificaria errado
//!    ("problema" termina em "-a" mas é masculino; "mão" termina em "-ão"
//!    mas é feminina).
//! 2. **Sufixos**, nesta prioridade:
//!
//! | Sufixo             | Resultado         |
//! |--------------------|-------------------|
//! | -a, -ade, -ção     | feminino          |
//! | -o, -ote, -or      | masculino         |
//! | -e, -l             | ambíguo (m, f)    |
//! | -ão                | masculino         |
//! | -as                | feminino plural   |
//! | -os                | masculino plural  |
//! | -ões               | ambíguo plural    |
//!
//! Sem regra aplicável o resultado é ambíguo. Um resultado ambíguo não é erro:
//! significa que a desambiguação precisa vir de fora (contexto, dicionário).
//!
//! "-ão" masculino é uma aproximação: boa parte dos substantivos em "-ão" são
//! femininos abstratos ("-ção", "-são") e ficam cobertos pela tabela de
//! exceções ou pela regra de "-ção".

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::morph::{Gender, GenderTag};

const GENDER_EXCEPTIONS: &[(&str, Gender)] = &[
    ("dor", Gender::Feminine),
    ("flor", Gender::Feminine),
    ("cor", Gender::Feminine),
    ("mar", Gender::Masculine),
    ("luz", Gender::Feminine),
    ("paz", Gender::Feminine),
    ("sol", Gender::Masculine),
    ("mel", Gender::Masculine),
    ("calor", Gender::Masculine),
    ("mãe", Gender::Feminine),
    ("pai", Gender::Masculine),
    ("árvore", Gender::Feminine),
    ("noite", Gender::Feminine),
    ("fome", Gender::Feminine),
    ("sede", Gender::Feminine),
    ("voz", Gender::Feminine),
    ("vez", Gender::Feminine),
    ("foto", Gender::Feminine),
    ("mão", Gender::Feminine),
    ("lei", Gender::Feminine),
    ("série", Gender::Feminine),
    ("equipe", Gender::Feminine),
    ("reunião", Gender::Feminine),
    ("sistema", Gender::Masculine),
    ("problema", Gender::Masculine),
    ("análise", Gender::Feminine),
    ("decisão", Gender::Feminine),
    ("ação", Gender::Feminine),
    ("dia", Gender::Masculine),
    ("mapa", Gender::Masculine),
    ("clima", Gender::Masculine),
    ("planeta", Gender::Masculine),
    ("tema", Gender::Masculine),
    ("programa", Gender::Masculine),
    ("idioma", Gender::Masculine),
    ("paixão", Gender::Feminine),
    ("questão", Gender::Feminine),
    ("opinião", Gender::Feminine),
    ("religião", Gender::Feminine),
    ("reflexão", Gender::Feminine),
    ("sugestão", Gender::Feminine),
    ("transgressão", Gender::Feminine),
    ("transmissão", Gender::Feminine),
    ("união", Gender::Feminine),
    ("versão", Gender::Feminine),
    ("visão", Gender::Feminine),
];

/// Sufixos e suas leituras, na ordem de avaliação.
const GENDER_SUFFIXES: &[(&[&str], GenderTag)] = &[
    (&["a", "ade", "ção"], GenderTag::Feminine),
    (&["o", "ote", "or"], GenderTag::Masculine),
    (&["e", "l"], GenderTag::Ambiguous),
    (&["ão"], GenderTag::Masculine),
    (&["as"], GenderTag::FemininePlural),
    (&["os"], GenderTag::MasculinePlural),
    (&["ões"], GenderTag::AmbiguousPlural),
];

fn exceptions() -> &'static HashMap<&'static str, Gender> {
    static TABLE: OnceLock<HashMap<&'static str, Gender>> = OnceLock::new();
    TABLE.get_or_init(|| GENDER_EXCEPTIONS.iter().copied().collect())
}

/// Gênero provável da palavra.
pub fn gender(word: &str) -> GenderTag {
    let w = word.to_lowercase();

    if let Some(&gender) = exceptions().get(w.as_str()) {
        return gender.into();
    }

    GENDER_SUFFIXES
        .iter()
        .find(|(suffixes, _)| suffixes.iter().any(|s| w.ends_with(s)))
        .map(|&(_, tag)| tag)
        .unwrap_or(GenderTag::Ambiguous)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_rules() {
        assert_eq!(gender("casa"), GenderTag::Feminine);
        assert_eq!(gender("cidade"), GenderTag::Feminine);
        assert_eq!(gender("canção"), GenderTag::Feminine);
        assert_eq!(gender("livro"), GenderTag::Masculine);
        assert_eq!(gender("motor"), GenderTag::Masculine);
        assert_eq!(gender("estudante"), GenderTag::Ambiguous);
        assert_eq!(gender("papel"), GenderTag::Ambiguous);
        assert_eq!(gender("limão"), GenderTag::Masculine);
        assert_eq!(gender("casas"), GenderTag::FemininePlural);
        assert_eq!(gender("livros"), GenderTag::MasculinePlural);
        assert_eq!(gender("lições"), GenderTag::AmbiguousPlural);
    }

    #[test]
    fn test_exceptions_beat_suffix_rules() {
        // "-a" diria feminino
        assert_eq!(gender("problema"), GenderTag::Masculine);
        assert_eq!(gender("dia"), GenderTag::Masculine);
        // "-ão" diria masculino
        assert_eq!(gender("mão"), GenderTag::Feminine);
        // "-or" diria masculino
        assert_eq!(gender("flor"), GenderTag::Feminine);
        // "-o" diria masculino
        assert_eq!(gender("foto"), GenderTag::Feminine);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(gender("Problema"), GenderTag::Masculine);
        assert_eq!(gender("CASA"), GenderTag::Feminine);
    }

    #[test]
    fn test_default_is_ambiguous() {
        assert_eq!(gender("xyz"), GenderTag::Ambiguous);
        assert!(gender("jovem").is_ambiguous());
    }
}
