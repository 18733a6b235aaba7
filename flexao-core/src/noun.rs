//! # Plural e Singular de Substantivos
//!
//! Cada direção é uma **cascata de sufixos**: a primeira regra que casa vence.
//! A ordem é parte da correção: sufixos mais específicos vêm antes dos
//! genéricos ("-ões" antes de "-s", "-il" antes de "-l").
//!
//! Antes das regras são consultados, nesta ordem:
//! 1. o mapa `custom` do chamador (chave exata, sem normalização);
//! 2. a tabela de plurais irregulares (após `to_lowercase`).
//!
//! ## Casos com perda
//!
//! `singularize(pluralize(w)) == w` não vale sempre. Terminações como "-is"
//! têm mais de uma origem ("barris" ← "barril", "lápis" ← "lápis") e a regra
//! genérica escolhe uma só. Os pares da tabela irregular, esses sim, sempre
//! voltam ao singular exato.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Pares (singular, plural) que fogem das regras.
pub const PLURAL_IRREGULAR: &[(&str, &str)] = &[
    ("alazão", "alazões"),
    ("alemão", "alemães"),
    ("álcool", "álcoois"),
    ("aldeão", "aldeãos"),
    ("anão", "anões"),
    ("ás", "ases"),
    ("atlas", "atlas"),
    ("avião", "aviões"),
    ("balcão", "balcões"),
    ("cão", "cães"),
    ("capelão", "capelães"),
    ("capitão", "capitães"),
    ("capitã", "capitãs"),
    ("caráter", "caracteres"),
    ("cartão", "cartões"),
    ("cidadão", "cidadãos"),
    ("cônsul", "cônsules"),
    ("cristão", "cristãos"),
    ("dor", "dores"),
    ("escrivão", "escrivães"),
    ("fácil", "fáceis"),
    ("feijão", "feijões"),
    ("frágil", "frágeis"),
    ("gás", "gases"),
    ("gel", "géis"),
    ("grão", "grãos"),
    ("guardião", "guardiães"),
    ("hífen", "hífenes"),
    ("homem", "homens"),
    ("incrível", "incríveis"),
    ("irmão", "irmãos"),
    ("irmã", "irmãs"),
    ("júnior", "juniores"),
    ("lã", "lãs"),
    ("lápis", "lápis"),
    ("leão", "leões"),
    ("mãe", "mães"),
    ("mal", "males"),
    ("mão", "mãos"),
    ("mel", "meles"),
    ("mês", "meses"),
    ("mulher", "mulheres"),
    ("nariz", "narizes"),
    ("olho", "olhos"),
    ("ônibus", "ônibus"),
    ("pão", "pães"),
    ("papagaio", "papagaios"),
    ("patrão", "patrões"),
    ("pé", "pés"),
    ("peixe", "peixes"),
    ("pincel", "pincéis"),
    ("projétil", "projéteis"),
    ("raiz", "raízes"),
    ("rato", "ratos"),
    ("réptil", "répteis"),
    ("rol", "róis"),
    ("sabão", "sabões"),
    ("sangue", "sangues"),
    ("sede", "sedes"),
    ("sênior", "seniores"),
    ("sofá", "sofás"),
    ("tênis", "tênis"),
    ("trem", "trens"),
    ("véu", "véus"),
    ("vírus", "vírus"),
    ("voo", "voos"),
];

/// singular → plural
pub fn plural_irregular() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| PLURAL_IRREGULAR.iter().copied().collect())
}

/// plural → singular, obtido por inversão de [`PLURAL_IRREGULAR`].
pub fn singular_irregular() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        PLURAL_IRREGULAR
            .iter()
            .map(|&(singular, plural)| (plural, singular))
            .collect()
    })
}

const ACCENTED: &str = "áéíóúâêîôûàèìòù";

/// `true` se a palavra tem vogal acentuada (á é í ó ú â ê î ô û à è ì ò ù).
pub fn contains_accent(word: &str) -> bool {
    word.chars().any(|c| ACCENTED.contains(c))
}

/// Remove `n` caracteres (não bytes) do fim da palavra.
pub(crate) fn strip_chars(word: &str, n: usize) -> &str {
    if n == 0 {
        return word;
    }
    match word.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &word[..idx],
        None => "",
    }
}

/// Plural de um substantivo.
pub fn pluralize(word: &str, custom: Option<&HashMap<String, String>>) -> String {
    if let Some(found) = custom.and_then(|c| c.get(word)) {
        return found.clone();
    }
    let w = word.to_lowercase();
    if let Some(plural) = plural_irregular().get(w.as_str()) {
        return plural.to_string();
    }

    if w.ends_with("ão") {
        // "-ão" → "-ães"/"-ãos" ficam na tabela irregular
        format!("{}ões", strip_chars(&w, 2))
    } else if w.ends_with('x') || w.ends_with("us") {
        w
    } else if w.ends_with("el") && !contains_accent(&w) {
        // oxítona: o acento precisa aparecer no plural para manter a tônica
        format!("{}éis", strip_chars(&w, 2))
    } else if w.ends_with("ol") {
        format!("{}óis", strip_chars(&w, 2))
    } else if w.ends_with("il") {
        if contains_accent(&w) {
            format!("{}eis", strip_chars(&w, 2))
        } else {
            format!("{}is", strip_chars(&w, 2))
        }
    } else if w.ends_with('l') {
        format!("{}is", strip_chars(&w, 1))
    } else if w.ends_with("és") || w.ends_with("ês") {
        format!("{}eses", strip_chars(&w, 2))
    } else if w.ends_with('r') || w.ends_with('z') || w.ends_with('s') {
        format!("{}es", w)
    } else if w.ends_with('m') {
        format!("{}ns", strip_chars(&w, 1))
    } else {
        format!("{}s", w)
    }
}

/// Singular de um substantivo.
pub fn singularize(word: &str, custom: Option<&HashMap<String, String>>) -> String {
    if let Some(found) = custom.and_then(|c| c.get(word)) {
        return found.clone();
    }
    let w = word.to_lowercase();
    if let Some(singular) = singular_irregular().get(w.as_str()) {
        return singular.to_string();
    }

    if w.ends_with("ões") || w.ends_with("ães") || w.ends_with("ãos") {
        format!("{}ão", strip_chars(&w, 3))
    } else if w.ends_with('x') || w.ends_with("us") {
        w
    } else if w.ends_with("eis") {
        // "-eis" inteiro sai: "fósseis" → "fóss" + "il"
        if contains_accent(&w) {
            format!("{}il", strip_chars(&w, 3))
        } else {
            format!("{}el", strip_chars(&w, 3))
        }
    } else if w.ends_with("ais") || w.ends_with("uis") {
        format!("{}l", strip_chars(&w, 2))
    } else if w.ends_with("éis") {
        format!("{}el", strip_chars(&w, 3))
    } else if w.ends_with("óis") {
        format!("{}ol", strip_chars(&w, 3))
    } else if w.ends_with("is") {
        format!("{}l", strip_chars(&w, 1))
    } else if w.ends_with("res") {
        strip_chars(&w, 2).to_string()
    } else if w.ends_with("ns") {
        format!("{}m", strip_chars(&w, 2))
    } else if w.ends_with('s') {
        strip_chars(&w, 1).to_string()
    } else {
        w
    }
}
