//! # Concordância de Adjetivos
//!
//! Três transformações:
//!
//! - [`inflect_adjective`]: forma base → forma concordada em gênero e número;
//! - [`attributive`]: mesma direção, variante usada junto ao substantivo
//!   ("os carros **novos**");
//! - [`predicative`]: direção inversa, volta à forma base masculina singular.
//!   É o que o lematizador usa para adjetivos.
//!
//! Em português atributivo e predicativo concordam igual; os nomes só indicam
//! o sentido da transformação. Todas as funções são totais: entrada sem regra
//! aplicável volta em minúsculas, sem alteração.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::morph::{Agreement, Gender, Number};
use crate::noun::strip_chars;

/// Formas de um adjetivo irregular: `[[m.sg, m.pl], [f.sg, f.pl]]`.
type AdjectiveGrid = [[&'static str; 2]; 2];

const IRREGULAR_ADJECTIVES: &[(&str, AdjectiveGrid)] = &[
    ("bom", [["bom", "bons"], ["boa", "boas"]]),
    ("mau", [["mau", "maus"], ["má", "más"]]),
    ("são", [["são", "sãos"], ["sã", "sãs"]]),
    ("fácil", [["fácil", "fáceis"], ["fácil", "fáceis"]]),
    ("difícil", [["difícil", "difíceis"], ["difícil", "difíceis"]]),
    ("útil", [["útil", "úteis"], ["útil", "úteis"]]),
    ("inútil", [["inútil", "inúteis"], ["inútil", "inúteis"]]),
    ("cristão", [["cristão", "cristãos"], ["cristã", "cristãs"]]),
    ("alemão", [["alemão", "alemães"], ["alemã", "alemãs"]]),
];

fn irregular_adjectives() -> &'static HashMap<&'static str, AdjectiveGrid> {
    static TABLE: OnceLock<HashMap<&'static str, AdjectiveGrid>> = OnceLock::new();
    TABLE.get_or_init(|| IRREGULAR_ADJECTIVES.iter().copied().collect())
}

/// Flexiona o adjetivo (forma base masculina singular) para a concordância pedida.
pub fn inflect_adjective(adjective: &str, agreement: Agreement) -> String {
    let w = adjective.to_lowercase();

    if let Some(grid) = irregular_adjectives().get(w.as_str()) {
        let row = match agreement.gender {
            Gender::Masculine => 0,
            Gender::Feminine => 1,
        };
        let col = match agreement.number {
            Number::Singular => 0,
            Number::Plural => 1,
        };
        return grid[row][col].to_string();
    }

    match (agreement.gender, agreement.number) {
        (Gender::Masculine, Number::Singular) => w,
        (Gender::Masculine, Number::Plural) => consonant_plural(&w),
        (Gender::Feminine, Number::Singular) => {
            if w.ends_with('o') {
                format!("{}a", strip_chars(&w, 1))
            } else {
                w
            }
        }
        (Gender::Feminine, Number::Plural) => {
            if w.ends_with('o') {
                format!("{}as", strip_chars(&w, 1))
            } else {
                consonant_plural(&w)
            }
        }
    }
}

/// Plural pelas terminações consonantais, comum aos dois gêneros.
fn consonant_plural(w: &str) -> String {
    if w.ends_with("il") {
        format!("{}is", strip_chars(w, 2))
    } else if w.ends_with('l') {
        format!("{}is", strip_chars(w, 1))
    } else if w.ends_with('m') {
        format!("{}ns", strip_chars(w, 1))
    } else if w.ends_with('r') || w.ends_with('z') {
        format!("{}es", w)
    } else if w.ends_with("ês") {
        format!("{}eses", strip_chars(w, 2))
    } else if w.ends_with('s') {
        w.to_string()
    } else {
        format!("{}s", w)
    }
}

/// Forma atributiva: o adjetivo concordando com o substantivo que acompanha.
pub fn attributive(adjective: &str, agreement: Agreement) -> String {
    let w = adjective.to_lowercase();
    let plural = agreement.is_plural();

    // normal → normais
    if plural && w.ends_with('l') {
        return format!("{}is", strip_chars(&w, 1));
    }
    if plural && w.ends_with("ês") {
        return format!("{}eses", strip_chars(&w, 2));
    }
    if plural && w.ends_with('m') {
        return format!("{}ns", strip_chars(&w, 1));
    }
    if plural && (w.ends_with('r') || w.ends_with('z') || w.ends_with('s')) {
        return format!("{}es", w);
    }
    if plural && (w.ends_with('a') || w.ends_with('e')) {
        return format!("{}s", w);
    }
    if w.ends_with('o') {
        return match (agreement.is_feminine(), plural) {
            (true, true) => format!("{}as", strip_chars(&w, 1)),
            (true, false) => format!("{}a", strip_chars(&w, 1)),
            (false, true) => format!("{}s", w),
            (false, false) => w,
        };
    }
    w
}

/// Forma predicativa (base): histéricas → histérico, ingleses → inglês.
pub fn predicative(adjective: &str) -> String {
    let mut w = adjective.to_lowercase();

    // histéricos → histérico
    if w.ends_with("os") || w.ends_with("as") {
        w.pop();
    }
    if w.ends_with('o') {
        return w;
    }
    // histérica → histérico
    if w.ends_with('a') {
        return format!("{}o", strip_chars(&w, 1));
    }
    // felizes → feliz, ingleses → inglês, interessantes → interessante
    if w.ends_with("es") {
        if w.ends_with("eses") {
            return format!("{}ês", strip_chars(&w, 4));
        }
        if w.ends_with("zes") || w.ends_with("res") {
            return strip_chars(&w, 2).to_string();
        }
        return format!("{}e", strip_chars(&w, 2));
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    const M_SG: Agreement = Agreement::new(Gender::Masculine, Number::Singular);
    const M_PL: Agreement = Agreement::new(Gender::Masculine, Number::Plural);
    const F_SG: Agreement = Agreement::new(Gender::Feminine, Number::Singular);
    const F_PL: Agreement = Agreement::new(Gender::Feminine, Number::Plural);

    #[test]
    fn test_irregular_adjectives() {
        assert_eq!(inflect_adjective("bom", F_PL), "boas");
        assert_eq!(inflect_adjective("mau", F_SG), "má");
        assert_eq!(inflect_adjective("fácil", M_PL), "fáceis");
        assert_eq!(inflect_adjective("são", F_SG), "sã");
        assert_eq!(inflect_adjective("Bom", M_PL), "bons");
    }

    #[test]
    fn test_regular_inflection() {
        assert_eq!(inflect_adjective("alto", M_SG), "alto");
        assert_eq!(inflect_adjective("alto", M_PL), "altos");
        assert_eq!(inflect_adjective("alto", F_SG), "alta");
        assert_eq!(inflect_adjective("alto", F_PL), "altas");
        assert_eq!(inflect_adjective("gentil", M_PL), "gentis");
        assert_eq!(inflect_adjective("azul", F_PL), "azuis");
        assert_eq!(inflect_adjective("comum", M_PL), "comuns");
        assert_eq!(inflect_adjective("feliz", F_PL), "felizes");
        assert_eq!(inflect_adjective("inglês", M_PL), "ingleses");
        assert_eq!(inflect_adjective("simples", M_PL), "simples");
        assert_eq!(inflect_adjective("verde", F_PL), "verdes");
        assert_eq!(inflect_adjective("verde", F_SG), "verde");
    }

    #[test]
    fn test_attributive() {
        assert_eq!(attributive("normal", M_PL), "normais");
        assert_eq!(attributive("inglês", F_PL), "ingleses");
        assert_eq!(attributive("comum", F_PL), "comuns");
        assert_eq!(attributive("feliz", M_PL), "felizes");
        assert_eq!(attributive("verde", F_PL), "verdes");
        assert_eq!(attributive("novo", F_PL), "novas");
        assert_eq!(attributive("novo", F_SG), "nova");
        assert_eq!(attributive("novo", M_PL), "novos");
        assert_eq!(attributive("Novo", M_SG), "novo");
        assert_eq!(attributive("feliz", F_SG), "feliz");
    }

    #[test]
    fn test_predicative() {
        assert_eq!(predicative("histéricos"), "histérico");
        assert_eq!(predicative("histéricas"), "histérico");
        assert_eq!(predicative("histérica"), "histérico");
        assert_eq!(predicative("felizes"), "feliz");
        assert_eq!(predicative("ingleses"), "inglês");
        assert_eq!(predicative("interessantes"), "interessante");
        assert_eq!(predicative("maiores"), "maior");
        assert_eq!(predicative("azul"), "azul");
    }

    #[test]
    fn test_predicative_inverts_attributive() {
        for base in ["alto", "feliz", "inglês", "verde"] {
            for agreement in [M_SG, M_PL, F_SG, F_PL] {
                assert_eq!(predicative(&attributive(base, agreement)), base);
            }
        }
    }
}
