//! # Artigos
//!
//! Escolhe o artigo pelo gênero e número pedidos:
//!
//! |            | masc. sg | masc. pl | fem. sg | fem. pl |
//! |------------|----------|----------|---------|---------|
//! | Definido   | o        | os       | a       | as      |
//! | Indefinido | um       | uns      | uma     | umas    |
//!
//! A palavra em si **não** é inspecionada: o artigo depende apenas da
//! concordância informada pelo chamador (use [`crate::gender::gender`] antes,
//! se for preciso descobri-la).

use crate::morph::{Agreement, ArticleKind, Gender, Number};

pub const DEFINITE_ARTICLES: [&str; 4] = ["o", "a", "os", "as"];
pub const INDEFINITE_ARTICLES: [&str; 4] = ["um", "uma", "uns", "umas"];

/// Artigo definido (o/a/os/as).
pub fn definite_article(_word: &str, agreement: Agreement) -> &'static str {
    DEFINITE_ARTICLES[slot(agreement)]
}

/// Artigo indefinido (um/uma/uns/umas).
pub fn indefinite_article(_word: &str, agreement: Agreement) -> &'static str {
    INDEFINITE_ARTICLES[slot(agreement)]
}

/// Artigo do tipo pedido para a palavra.
pub fn article(word: &str, kind: ArticleKind, agreement: Agreement) -> &'static str {
    match kind {
        ArticleKind::Definite => definite_article(word, agreement),
        ArticleKind::Indefinite => indefinite_article(word, agreement),
    }
}

/// A palavra precedida do artigo: `referenced("gato", Definite, m.pl)` → "os gato".
pub fn referenced(word: &str, kind: ArticleKind, agreement: Agreement) -> String {
    format!("{} {}", article(word, kind, agreement), word)
}

fn slot(agreement: Agreement) -> usize {
    match (agreement.gender, agreement.number) {
        (Gender::Masculine, Number::Singular) => 0,
        (Gender::Feminine, Number::Singular) => 1,
        (Gender::Masculine, Number::Plural) => 2,
        (Gender::Feminine, Number::Plural) => 3,
    }
}
