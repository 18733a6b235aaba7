//! # Motor Verbal: Lema e Lexema
//!
//! Duas direções sobre o mesmo esquema de 46 colunas ([`PT_FORMAT`]):
//!
//! - [`find_lemma`]: forma flexionada → infinitivo. Nunca falha; na pior das
//!   hipóteses devolve a própria entrada (em minúsculas) com um `warn!`.
//! - [`find_lexeme`]: infinitivo → todas as formas, infinitivo primeiro. Falha
//!   com [`InflectError::InvalidLemma`] se a entrada não tem cara de infinitivo.
//!
//! ## Regras de sufixo
//!
//! A cascata de [`find_lemma`] está ordenada do sufixo mais longo para o mais
//! curto, então nenhuma regra fica escondida atrás de outra. Quando a
//! terminação alvo é ambígua entre 2ª e 3ª conjugação ("-ido", "-em"), o
//! último caractere do radical decide: vogal → "-er", consoante → "-ir".
//!
//! ## Casos com perda
//!
//! Sem dicionário não dá para saber a conjugação de toda forma. As colisões
//! conhecidas:
//!
//! | Forma                        | Resolve para | Ex.                  |
//! |------------------------------|--------------|----------------------|
//! | 1ª sg. presente ("-o")       | "-ar"        | como → comar         |
//! | subjuntivo de "-ar" ("-e")   | "-er"        | ame → amer           |
//! | subjuntivo de "-er/-ir"      | "-ar"        | coma → comar         |
//! | imperfeito de "-ir" ("-ia")  | "-er"        | partia → parter      |
//! | particípio de "-er" ("-ido") | "-ir"        | comido → comir       |
//!
//! [`PT_FORMAT`]: crate::tense::PT_FORMAT

use tracing::warn;

use crate::error::{InflectError, Result};
use crate::irregular::{irregular_lemmas, irregular_paradigms, paradigm_lemmas};
use crate::noun::strip_chars;

/// Conjugação regular, pela terminação do infinitivo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conjugation {
    First,
    Second,
    Third,
}

impl Conjugation {
    pub fn of(lemma: &str) -> Option<Self> {
        if lemma.ends_with("ar") {
            Some(Conjugation::First)
        } else if lemma.ends_with("er") {
            Some(Conjugation::Second)
        } else if lemma.ends_with("ir") {
            Some(Conjugation::Third)
        } else {
            None
        }
    }

    /// Sufixos das 45 colunas após o infinitivo.
    pub fn suffixes(self) -> &'static [&'static str; 45] {
        match self {
            Conjugation::First => &AR_SUFFIXES,
            Conjugation::Second => &ER_SUFFIXES,
            Conjugation::Third => &IR_SUFFIXES,
        }
    }
}

#[rustfmt::skip]
const AR_SUFFIXES: [&str; 45] = [
    "o", "as", "a", "amos", "ais", "am",
    "ei", "aste", "ou", "amos", "astes", "aram",
    "ava", "avas", "ava", "ávamos", "áveis", "avam",
    "arei", "arás", "ará", "aremos", "areis", "arão",
    "e", "es", "e", "emos", "eis", "em",
    "asse", "asses", "asse", "ássemos", "ásseis", "assem",
    "aria", "arias", "aria", "aríamos", "aríeis", "ariam",
    "a", "ando", "ado",
];

#[rustfmt::skip]
const ER_SUFFIXES: [&str; 45] = [
    "o", "es", "e", "emos", "eis", "em",
    "i", "este", "eu", "emos", "estes", "eram",
    "ia", "ias", "ia", "íamos", "íeis", "iam",
    "erei", "erás", "erá", "eremos", "ereis", "erão",
    "a", "as", "a", "amos", "ais", "am",
    "esse", "esses", "esse", "êssemos", "êsseis", "essem",
    "eria", "erias", "eria", "eríamos", "eríeis", "eriam",
    "e", "endo", "ido",
];

#[rustfmt::skip]
const IR_SUFFIXES: [&str; 45] = [
    "o", "es", "e", "imos", "is", "em",
    "i", "iste", "iu", "imos", "istes", "iram",
    "ia", "ias", "ia", "íamos", "íeis", "iam",
    "irei", "irás", "irá", "iremos", "ireis", "irão",
    "a", "as", "a", "amos", "ais", "am",
    "isse", "isses", "isse", "íssemos", "ísseis", "issem",
    "iria", "irias", "iria", "iríamos", "iríeis", "iriam",
    "e", "indo", "ido",
];

/// Terminação de infinitivo que substitui o sufixo casado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ending {
    Fixed(&'static str),
    /// "-er" se o radical termina em vogal, "-ir" caso contrário.
    ErOrIr,
}

const AR: Ending = Ending::Fixed("ar");
const ER: Ending = Ending::Fixed("er");
const IR: Ending = Ending::Fixed("ir");

#[rustfmt::skip]
const LEMMA_RULES: &[(&str, Ending)] = &[
    // subjuntivo imperfeito, condicional
    ("ássemos", AR), ("êssemos", ER), ("íssemos", IR),
    ("aríamos", AR), ("eríamos", ER), ("iríamos", IR),
    ("ávamos", AR),
    ("ásseis", AR), ("êsseis", ER), ("ísseis", IR),
    ("aríeis", AR), ("eríeis", ER), ("iríeis", IR),
    ("aremos", AR), ("eremos", ER), ("iremos", IR),
    ("áveis", AR),
    ("assem", AR), ("essem", ER), ("issem", IR),
    ("asses", AR), ("esses", ER), ("isses", IR),
    ("ariam", AR), ("eriam", ER), ("iriam", IR),
    ("arias", AR), ("erias", ER), ("irias", IR),
    ("areis", AR), ("ereis", ER), ("ireis", IR),
    ("astes", AR), ("estes", ER), ("istes", IR),
    ("íamos", ER),
    ("asse", AR), ("esse", ER), ("isse", IR),
    ("aria", AR), ("eria", ER), ("iria", IR),
    ("arão", AR), ("erão", ER), ("irão", IR),
    ("arás", AR), ("erás", ER), ("irás", IR),
    ("arei", AR), ("erei", ER), ("irei", IR),
    ("avam", AR), ("avas", AR),
    ("aram", AR), ("eram", ER), ("iram", IR),
    ("aste", AR), ("este", ER), ("iste", IR),
    // gerúndio
    ("ando", AR), ("endo", ER), ("indo", IR),
    ("íeis", ER),
    ("amos", AR), ("emos", ER), ("imos", IR),
    ("ava", AR),
    ("ará", AR), ("erá", ER), ("irá", IR),
    // particípio
    ("ado", AR), ("ido", Ending::ErOrIr),
    ("iam", ER), ("ias", ER),
    ("ais", AR), ("eis", ER),
    ("ia", ER),
    ("ou", AR), ("eu", ER), ("iu", IR),
    ("ei", AR),
    ("am", AR), ("em", Ending::ErOrIr),
    ("as", AR), ("is", IR),
    // presente
    ("o", AR), ("a", AR), ("e", ER),
];

const VOWELS: &str = "aeiouáéíóúâêôãõ";

fn is_infinitive(word: &str) -> bool {
    Conjugation::of(word).is_some()
}

/// Infinitivo de uma forma verbal.
pub fn find_lemma(verb: &str) -> String {
    let v = verb.to_lowercase();

    if let Some(lemma) = irregular_lemmas().get(v.as_str()) {
        return lemma.to_string();
    }
    if let Some(lemma) = paradigm_lemmas().get(v.as_str()) {
        return lemma.clone();
    }
    if is_infinitive(&v) {
        return v;
    }

    for &(suffix, ending) in LEMMA_RULES {
        if !v.ends_with(suffix) {
            continue;
        }
        let stem = strip_chars(&v, suffix.chars().count());
        if stem.is_empty() {
            continue;
        }
        let ending = match ending {
            Ending::Fixed(ending) => ending,
            Ending::ErOrIr => match stem.chars().last() {
                Some(c) if VOWELS.contains(c) => "er",
                _ => "ir",
            },
        };
        return format!("{}{}", stem, ending);
    }

    warn!(verb = %v, "forma verbal sem regra aplicável");
    v
}

/// Paradigma completo, na ordem de [`crate::tense::PT_FORMAT`].
pub fn find_lexeme(lemma: &str) -> Result<Vec<String>> {
    let v = lemma.to_lowercase();

    if let Some(forms) = irregular_paradigms().get(&v) {
        return Ok(forms.clone());
    }

    let conjugation = Conjugation::of(&v).ok_or_else(|| InflectError::InvalidLemma(v.clone()))?;
    let root = strip_chars(&v, 2);
    if root.is_empty() {
        return Err(InflectError::InvalidLemma(v));
    }

    let mut forms = Vec::with_capacity(46);
    forms.push(v.clone());
    forms.extend(conjugation.suffixes().iter().map(|suffix| format!("{}{}", root, suffix)));
    Ok(forms)
}
