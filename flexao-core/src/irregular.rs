//! # Verbos Irregulares
//!
//! Duas tabelas curadas, ambas parciais (acrescente entradas conforme a
//! necessidade):
//!
//! - [`IRREGULAR_LEMMAS`]: forma flexionada → infinitivo, consultada antes das
//!   regras de sufixo de [`crate::verbs::find_lemma`];
//! - [`IRREGULAR_PARADIGMS`]: infinitivo → paradigma completo, nas mesmas 45
//!   colunas (após o infinitivo) de [`crate::tense::PT_FORMAT`].
//!
//! A família de "pôr" (compor, dispor, propor...) não é listada forma a forma:
//! cada verbo é o paradigma de "pôr" com o prefixo anteposto.
//!
//! [`paradigm_lemmas`] inverte os paradigmas para que toda forma listada neles
//! também resolva para o seu infinitivo. Formas compartilhadas ("fui" em ser e
//! ir) ficam com o primeiro verbo da tabela.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Formas de um verbo, sem o infinitivo, na ordem de `PT_FORMAT[1..]`.
pub type Paradigm = [&'static str; 45];

#[rustfmt::skip]
pub const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    // ser
    ("sou", "ser"), ("és", "ser"), ("é", "ser"), ("somos", "ser"), ("sois", "ser"), ("são", "ser"),
    ("fui", "ser"), ("foi", "ser"), ("fomos", "ser"), ("foram", "ser"),
    ("era", "ser"), ("eras", "ser"), ("éramos", "ser"), ("eram", "ser"),
    ("seja", "ser"), ("sejas", "ser"), ("sejamos", "ser"), ("sejam", "ser"),
    // estar
    ("estou", "estar"), ("estás", "estar"), ("está", "estar"), ("tá", "estar"),
    ("estamos", "estar"), ("estais", "estar"), ("estão", "estar"),
    ("estive", "estar"), ("esteve", "estar"),
    // ter
    ("tenho", "ter"), ("tens", "ter"), ("tem", "ter"), ("temos", "ter"), ("tendes", "ter"), ("têm", "ter"),
    ("tive", "ter"), ("teve", "ter"), ("tinha", "ter"),
    // haver
    ("hei", "haver"), ("hás", "haver"), ("há", "haver"), ("havemos", "haver"), ("hão", "haver"),
    ("houve", "haver"), ("houveram", "haver"),
    // dizer
    ("digo", "dizer"), ("diz", "dizer"), ("dizemos", "dizer"), ("dizeis", "dizer"), ("dizem", "dizer"),
    ("disse", "dizer"), ("dito", "dizer"),
    // fazer
    ("faço", "fazer"), ("faz", "fazer"), ("fazemos", "fazer"), ("fazeis", "fazer"), ("fazem", "fazer"),
    ("fiz", "fazer"), ("fez", "fazer"), ("feito", "fazer"),
    // ir
    ("vou", "ir"), ("vais", "ir"), ("vai", "ir"), ("vamos", "ir"), ("ides", "ir"), ("vão", "ir"),
    // vir
    ("venho", "vir"), ("vens", "vir"), ("vem", "vir"), ("vimos", "vir"), ("vindes", "vir"), ("vêm", "vir"),
    ("vim", "vir"), ("veio", "vir"),
    // ver
    ("vejo", "ver"), ("vês", "ver"), ("vê", "ver"), ("vemos", "ver"), ("vedes", "ver"), ("veem", "ver"),
    ("vi", "ver"), ("viu", "ver"), ("visto", "ver"),
    // dar
    ("dou", "dar"), ("dás", "dar"), ("dá", "dar"), ("damos", "dar"), ("dais", "dar"), ("dão", "dar"),
    ("dei", "dar"), ("deu", "dar"),
    // saber
    ("sei", "saber"), ("sabes", "saber"), ("sabe", "saber"), ("sabemos", "saber"), ("sabeis", "saber"),
    ("sabem", "saber"), ("soube", "saber"),
    // poder
    ("posso", "poder"), ("podes", "poder"), ("pode", "poder"), ("podemos", "poder"), ("podeis", "poder"),
    ("podem", "poder"), ("pude", "poder"), ("pôde", "poder"),
    // querer
    ("quero", "querer"), ("queres", "querer"), ("quer", "querer"), ("queremos", "querer"),
    ("quereis", "querer"), ("querem", "querer"), ("quis", "querer"), ("quiseram", "querer"),
    // pôr
    ("ponho", "pôr"), ("pões", "pôr"), ("põe", "pôr"), ("pomos", "pôr"), ("pondes", "pôr"),
    ("põem", "pôr"), ("pus", "pôr"), ("pôs", "pôr"), ("puseram", "pôr"), ("posto", "pôr"),
    // sair
    ("saio", "sair"), ("sais", "sair"), ("sai", "sair"), ("saímos", "sair"), ("saís", "sair"), ("saem", "sair"),
    // trazer
    ("trago", "trazer"), ("trazes", "trazer"), ("traz", "trazer"), ("trazemos", "trazer"),
    ("trazeis", "trazer"), ("trazem", "trazer"), ("trouxe", "trazer"),
    // cair
    ("caio", "cair"), ("cais", "cair"), ("cai", "cair"), ("caímos", "cair"), ("caís", "cair"), ("caem", "cair"),
    // ler
    ("leio", "ler"), ("lês", "ler"), ("lê", "ler"), ("lemos", "ler"), ("ledes", "ler"), ("leem", "ler"),
];

#[rustfmt::skip]
pub const IRREGULAR_PARADIGMS: &[(&str, Paradigm)] = &[
    ("ser", [
        "sou", "és", "é", "somos", "sois", "são",
        "fui", "foste", "foi", "fomos", "fostes", "foram",
        "era", "eras", "era", "éramos", "éreis", "eram",
        "serei", "serás", "será", "seremos", "sereis", "serão",
        "seja", "sejas", "seja", "sejamos", "sejais", "sejam",
        "fosse", "fosses", "fosse", "fôssemos", "fôsseis", "fossem",
        "seria", "serias", "seria", "seríamos", "seríeis", "seriam",
        "sê", "sendo", "sido",
    ]),
    ("estar", [
        "estou", "estás", "está", "estamos", "estais", "estão",
        "estive", "estiveste", "esteve", "estivemos", "estivestes", "estiveram",
        "estava", "estavas", "estava", "estávamos", "estáveis", "estavam",
        "estarei", "estarás", "estará", "estaremos", "estareis", "estarão",
        "esteja", "estejas", "esteja", "estejamos", "estejais", "estejam",
        "estivesse", "estivesses", "estivesse", "estivéssemos", "estivésseis", "estivessem",
        "estaria", "estarias", "estaria", "estaríamos", "estaríeis", "estariam",
        "está", "estando", "estado",
    ]),
    ("ter", [
        "tenho", "tens", "tem", "temos", "tendes", "têm",
        "tive", "tiveste", "teve", "tivemos", "tivestes", "tiveram",
        "tinha", "tinhas", "tinha", "tínhamos", "tínheis", "tinham",
        "terei", "terás", "terá", "teremos", "tereis", "terão",
        "tenha", "tenhas", "tenha", "tenhamos", "tenhais", "tenham",
        "tivesse", "tivesses", "tivesse", "tivéssemos", "tivésseis", "tivessem",
        "teria", "terias", "teria", "teríamos", "teríeis", "teriam",
        "tem", "tendo", "tido",
    ]),
    ("haver", [
        "hei", "hás", "há", "havemos", "haveis", "hão",
        "houve", "houveste", "houve", "houvemos", "houvestes", "houveram",
        "havia", "havias", "havia", "havíamos", "havíeis", "haviam",
        "haverei", "haverás", "haverá", "haveremos", "havereis", "haverão",
        "haja", "hajas", "haja", "hajamos", "hajais", "hajam",
        "houvesse", "houvesses", "houvesse", "houvéssemos", "houvésseis", "houvessem",
        "haveria", "haverias", "haveria", "haveríamos", "haveríeis", "haveriam",
        "há", "havendo", "havido",
    ]),
    ("ir", [
        "vou", "vais", "vai", "vamos", "ides", "vão",
        "fui", "foste", "foi", "fomos", "fostes", "foram",
        "ia", "ias", "ia", "íamos", "íeis", "iam",
        "irei", "irás", "irá", "iremos", "ireis", "irão",
        "vá", "vás", "vá", "vamos", "vades", "vão",
        "fosse", "fosses", "fosse", "fôssemos", "fôsseis", "fossem",
        "iria", "irias", "iria", "iríamos", "iríeis", "iriam",
        "vai", "indo", "ido",
    ]),
    ("vir", [
        "venho", "vens", "vem", "vimos", "vindes", "vêm",
        "vim", "vieste", "veio", "viemos", "viestes", "vieram",
        "vinha", "vinhas", "vinha", "vínhamos", "vínheis", "vinham",
        "virei", "virás", "virá", "viremos", "vireis", "virão",
        "venha", "venhas", "venha", "venhamos", "venhais", "venham",
        "viesse", "viesses", "viesse", "viéssemos", "viésseis", "viessem",
        "viria", "virias", "viria", "viríamos", "viríeis", "viriam",
        "vem", "vindo", "vindo",
    ]),
    ("fazer", [
        "faço", "fazes", "faz", "fazemos", "fazeis", "fazem",
        "fiz", "fizeste", "fez", "fizemos", "fizestes", "fizeram",
        "fazia", "fazias", "fazia", "fazíamos", "fazíeis", "faziam",
        "farei", "farás", "fará", "faremos", "fareis", "farão",
        "faça", "faças", "faça", "façamos", "façais", "façam",
        "fizesse", "fizesses", "fizesse", "fizéssemos", "fizésseis", "fizessem",
        "faria", "farias", "faria", "faríamos", "faríeis", "fariam",
        "faz", "fazendo", "feito",
    ]),
    ("dizer", [
        "digo", "dizes", "diz", "dizemos", "dizeis", "dizem",
        "disse", "disseste", "disse", "dissemos", "dissestes", "disseram",
        "dizia", "dizias", "dizia", "dizíamos", "dizíeis", "diziam",
        "direi", "dirás", "dirá", "diremos", "direis", "dirão",
        "diga", "digas", "diga", "digamos", "digais", "digam",
        "dissesse", "dissesses", "dissesse", "disséssemos", "dissésseis", "dissessem",
        "diria", "dirias", "diria", "diríamos", "diríeis", "diriam",
        "diz", "dizendo", "dito",
    ]),
    ("poder", [
        "posso", "podes", "pode", "podemos", "podeis", "podem",
        "pude", "pudeste", "pôde", "pudemos", "pudestes", "puderam",
        "podia", "podias", "podia", "podíamos", "podíeis", "podiam",
        "poderei", "poderás", "poderá", "poderemos", "podereis", "poderão",
        "possa", "possas", "possa", "possamos", "possais", "possam",
        "pudesse", "pudesses", "pudesse", "pudéssemos", "pudésseis", "pudessem",
        "poderia", "poderias", "poderia", "poderíamos", "poderíeis", "poderiam",
        "pode", "podendo", "podido",
    ]),
    ("saber", [
        "sei", "sabes", "sabe", "sabemos", "sabeis", "sabem",
        "soube", "soubeste", "soube", "soubemos", "soubestes", "souberam",
        "sabia", "sabias", "sabia", "sabíamos", "sabíeis", "sabiam",
        "saberei", "saberás", "saberá", "saberemos", "sabereis", "saberão",
        "saiba", "saibas", "saiba", "saibamos", "saibais", "saibam",
        "soubesse", "soubesses", "soubesse", "soubéssemos", "soubésseis", "soubessem",
        "saberia", "saberias", "saberia", "saberíamos", "saberíeis", "saberiam",
        "sabe", "sabendo", "sabido",
    ]),
    ("dar", [
        "dou", "dás", "dá", "damos", "dais", "dão",
        "dei", "deste", "deu", "demos", "destes", "deram",
        "dava", "davas", "dava", "dávamos", "dáveis", "davam",
        "darei", "darás", "dará", "daremos", "dareis", "darão",
        "dê", "dês", "dê", "demos", "deis", "deem",
        "desse", "desses", "desse", "déssemos", "désseis", "dessem",
        "daria", "darias", "daria", "daríamos", "daríeis", "dariam",
        "dá", "dando", "dado",
    ]),
    ("ler", [
        "leio", "lês", "lê", "lemos", "ledes", "leem",
        "li", "leste", "leu", "lemos", "lestes", "leram",
        "lia", "lias", "lia", "líamos", "líeis", "liam",
        "lerei", "lerás", "lerá", "leremos", "lereis", "lerão",
        "leia", "leias", "leia", "leiamos", "leiais", "leiam",
        "lesse", "lesses", "lesse", "lêssemos", "lêsseis", "lessem",
        "leria", "lerias", "leria", "leríamos", "leríeis", "leriam",
        "lê", "lendo", "lido",
    ]),
    ("ver", [
        "vejo", "vês", "vê", "vemos", "vedes", "veem",
        "vi", "viste", "viu", "vimos", "vistes", "viram",
        "via", "vias", "via", "víamos", "víeis", "viam",
        "verei", "verás", "verá", "veremos", "vereis", "verão",
        "veja", "vejas", "veja", "vejamos", "vejais", "vejam",
        "visse", "visses", "visse", "víssemos", "vísseis", "vissem",
        "veria", "verias", "veria", "veríamos", "veríeis", "veriam",
        "vê", "vendo", "visto",
    ]),
    ("querer", [
        "quero", "queres", "quer", "queremos", "quereis", "querem",
        "quis", "quiseste", "quis", "quisemos", "quisestes", "quiseram",
        "queria", "querias", "queria", "queríamos", "queríeis", "queriam",
        "quererei", "quererás", "quererá", "quereremos", "querereis", "quererão",
        "queira", "queiras", "queira", "queiramos", "queirais", "queiram",
        "quisesse", "quisesses", "quisesse", "quiséssemos", "quisésseis", "quisessem",
        "quereria", "quererias", "quereria", "quereríamos", "quereríeis", "quereriam",
        "quer", "querendo", "querido",
    ]),
    ("trazer", [
        "trago", "trazes", "traz", "trazemos", "trazeis", "trazem",
        "trouxe", "trouxeste", "trouxe", "trouxemos", "trouxestes", "trouxeram",
        "trazia", "trazias", "trazia", "trazíamos", "trazíeis", "traziam",
        "trarei", "trarás", "trará", "traremos", "trareis", "trarão",
        "traga", "tragas", "traga", "tragamos", "tragais", "tragam",
        "trouxesse", "trouxesses", "trouxesse", "trouxéssemos", "trouxésseis", "trouxessem",
        "traria", "trarias", "traria", "traríamos", "traríeis", "trariam",
        "traz", "trazendo", "trazido",
    ]),
    ("pôr", [
        "ponho", "pões", "põe", "pomos", "pondes", "põem",
        "pus", "puseste", "pôs", "pusemos", "pusestes", "puseram",
        "punha", "punhas", "punha", "púnhamos", "púnheis", "punham",
        "porei", "porás", "porá", "poremos", "poreis", "porão",
        "ponha", "ponhas", "ponha", "ponhamos", "ponhais", "ponham",
        "pusesse", "pusesses", "pusesse", "puséssemos", "pusésseis", "pusessem",
        "poria", "porias", "poria", "poríamos", "poríeis", "poriam",
        "põe", "pondo", "posto",
    ]),
];

/// Prefixos dos derivados de "pôr" (o infinitivo derivado perde o acento).
pub const POR_PREFIXES: &[&str] = &["o", "com", "dis", "pro", "ex", "de", "re", "su"];

/// Tabela forma → infinitivo.
pub fn irregular_lemmas() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| IRREGULAR_LEMMAS.iter().copied().collect())
}

/// Tabela infinitivo → linha completa (infinitivo na coluna 0).
pub fn irregular_paradigms() -> &'static HashMap<String, Vec<String>> {
    static TABLE: OnceLock<HashMap<String, Vec<String>>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table: HashMap<String, Vec<String>> = IRREGULAR_PARADIGMS
            .iter()
            .map(|(lemma, forms)| (lemma.to_string(), row(lemma, "", forms)))
            .collect();

        if let Some((_, por)) = IRREGULAR_PARADIGMS.iter().find(|(lemma, _)| *lemma == "pôr") {
            for prefix in POR_PREFIXES {
                let lemma = format!("{}por", prefix);
                let forms = row(&lemma, prefix, por);
                table.insert(lemma, forms);
            }
        }
        table
    })
}

/// Tabela forma → infinitivo obtida dos paradigmas, na ordem de
/// [`IRREGULAR_PARADIGMS`] seguida dos derivados de "pôr".
pub fn paradigm_lemmas() -> &'static HashMap<String, String> {
    static TABLE: OnceLock<HashMap<String, String>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = HashMap::new();
        let mut add = |lemma: &str, row: Vec<String>| {
            for form in row {
                table.entry(form).or_insert_with(|| lemma.to_string());
            }
        };
        for (lemma, forms) in IRREGULAR_PARADIGMS {
            add(lemma, row(lemma, "", forms));
        }
        if let Some((_, por)) = IRREGULAR_PARADIGMS.iter().find(|(lemma, _)| *lemma == "pôr") {
            for prefix in POR_PREFIXES {
                let lemma = format!("{}por", prefix);
                add(&lemma, row(&lemma, prefix, por));
            }
        }
        table
    })
}

fn row(lemma: &str, prefix: &str, forms: &Paradigm) -> Vec<String> {
    std::iter::once(lemma.to_string())
        .chain(forms.iter().map(|form| format!("{}{}", prefix, form)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tense::PT_FORMAT;

    #[test]
    fn test_lemma_table_has_no_duplicate_keys() {
        assert_eq!(irregular_lemmas().len(), IRREGULAR_LEMMAS.len());
    }

    #[test]
    fn test_paradigm_lemmas_cover_every_form() {
        for (lemma, forms) in irregular_paradigms() {
            for form in forms {
                let found = &paradigm_lemmas()[form];
                let shared = irregular_paradigms()[found].contains(form);
                assert!(found == lemma || shared, "{} → {} ({})", form, found, lemma);
            }
        }
    }

    #[test]
    fn test_shared_forms_keep_first_verb() {
        assert_eq!(paradigm_lemmas()["fui"], "ser");
        assert_eq!(paradigm_lemmas()["fosse"], "ser");
        assert_eq!(paradigm_lemmas()["compõe"], "compor");
        assert_eq!(paradigm_lemmas()["pôr"], "pôr");
    }

    #[test]
    fn test_rows_match_format_width() {
        for (lemma, forms) in irregular_paradigms() {
            assert_eq!(forms.len(), PT_FORMAT.len(), "{}", lemma);
            assert_eq!(&forms[0], lemma);
        }
    }

    #[test]
    fn test_por_family_is_derived() {
        let compor = &irregular_paradigms()["compor"];
        assert_eq!(compor[0], "compor");
        assert_eq!(compor[1], "componho");
        assert_eq!(compor[9], "compôs");
        assert_eq!(compor[45], "composto");
        assert_eq!(irregular_paradigms().len(), IRREGULAR_PARADIGMS.len() + POR_PREFIXES.len());
    }

    #[test]
    fn test_lemma_table_points_to_known_verbs() {
        for lemma in irregular_lemmas().values() {
            assert!(
                crate::verbs::Conjugation::of(lemma).is_some() || *lemma == "pôr",
                "{}",
                lemma
            );
        }
    }
}
