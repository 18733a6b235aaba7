//! # Tempos Verbais e o Esquema de Colunas
//!
//! Cada forma conjugada é identificada por um [`TenseSlot`] (tempo, pessoa,
//! número, modo, aspecto). Os slots têm um **id numérico** num esquema
//! compartilhado entre idiomas; cada idioma declara quais ids usa e em que
//! ordem eles aparecem nas linhas do arquivo de verbos.
//!
//! ## Colunas do português ([`PT_FORMAT`])
//!
//! | Colunas | Ids     | Conteúdo                         | Ex. (amar)   |
//! |---------|---------|----------------------------------|--------------|
//! | 0       | 0       | infinitivo                       | amar         |
//! | 1–6     | 1–6     | presente do indicativo           | amo, amas    |
//! | 7–12    | 34–39   | pretérito perfeito               | amei, amaste |
//! | 13–18   | 17–22   | pretérito imperfeito             | amava        |
//! | 19–24   | 40–45   | futuro do presente               | amarei       |
//! | 25–30   | 55–60   | presente do subjuntivo           | ame, ames    |
//! | 31–36   | 67–72   | imperfeito do subjuntivo         | amasse       |
//! | 37–42   | 46–51   | futuro do pretérito (condicional)| amaria       |
//! | 43      | 52      | imperativo, 2ª pessoa singular   | ama          |
//! | 44      | 8       | gerúndio                         | amando       |
//! | 45      | 24      | particípio                       | amado        |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::morph::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Infinitive,
    Present,
    Past,
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Indicative,
    Imperative,
    Conditional,
    Subjunctive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    Imperfective,
    Perfective,
    Progressive,
}

/// Uma célula do paradigma verbal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TenseSlot {
    pub tense: Tense,
    pub person: Option<Person>,
    pub number: Option<Number>,
    pub mood: Mood,
    pub aspect: Aspect,
}

/// Ordem das colunas nas linhas de verbos do português (46 colunas).
pub const PT_FORMAT: [u8; 46] = [
    0, 1, 2, 3, 4, 5, 6, // infinitivo + presente
    34, 35, 36, 37, 38, 39, // pretérito perfeito
    17, 18, 19, 20, 21, 22, // pretérito imperfeito
    40, 41, 42, 43, 44, 45, // futuro
    55, 56, 57, 58, 59, 60, // presente do subjuntivo
    67, 68, 69, 70, 71, 72, // imperfeito do subjuntivo
    46, 47, 48, 49, 50, 51, // condicional
    52, 8, 24, // imperativo 2sg, gerúndio, particípio
];

const PERSONS: [(Person, Number); 6] = [
    (Person::First, Number::Singular),
    (Person::Second, Number::Singular),
    (Person::Third, Number::Singular),
    (Person::First, Number::Plural),
    (Person::Second, Number::Plural),
    (Person::Third, Number::Plural),
];

impl TenseSlot {
    pub const INFINITIVE: TenseSlot = TenseSlot {
        tense: Tense::Infinitive,
        person: None,
        number: None,
        mood: Mood::Indicative,
        aspect: Aspect::Imperfective,
    };

    pub const GERUND: TenseSlot = TenseSlot {
        tense: Tense::Present,
        person: None,
        number: None,
        mood: Mood::Indicative,
        aspect: Aspect::Progressive,
    };

    pub const PAST_PARTICIPLE: TenseSlot = TenseSlot {
        tense: Tense::Past,
        person: None,
        number: None,
        mood: Mood::Indicative,
        aspect: Aspect::Progressive,
    };

    /// Forma pessoal.
    pub const fn personal(
        tense: Tense,
        person: Person,
        number: Number,
        mood: Mood,
        aspect: Aspect,
    ) -> Self {
        TenseSlot {
            tense,
            person: Some(person),
            number: Some(number),
            mood,
            aspect,
        }
    }

    /// Presente do indicativo, atalho para o caso mais comum.
    pub const fn present(person: Person, number: Number) -> Self {
        Self::personal(Tense::Present, person, number, Mood::Indicative, Aspect::Imperfective)
    }

    /// Slot correspondente a um id do esquema compartilhado.
    pub fn from_id(id: u8) -> Option<Self> {
        let series = |base: u8, tense: Tense, mood: Mood, aspect: Aspect| {
            let offset = id.checked_sub(base)? as usize;
            let &(person, number) = PERSONS.get(offset)?;
            Some(TenseSlot::personal(tense, person, number, mood, aspect))
        };
        match id {
            0 => Some(TenseSlot::INFINITIVE),
            1..=6 => series(1, Tense::Present, Mood::Indicative, Aspect::Imperfective),
            8 => Some(TenseSlot::GERUND),
            17..=22 => series(17, Tense::Past, Mood::Indicative, Aspect::Imperfective),
            24 => Some(TenseSlot::PAST_PARTICIPLE),
            34..=39 => series(34, Tense::Past, Mood::Indicative, Aspect::Perfective),
            40..=45 => series(40, Tense::Future, Mood::Indicative, Aspect::Imperfective),
            46..=51 => series(46, Tense::Present, Mood::Conditional, Aspect::Imperfective),
            52 => Some(TenseSlot::personal(
                Tense::Present,
                Person::Second,
                Number::Singular,
                Mood::Imperative,
                Aspect::Imperfective,
            )),
            55..=60 => series(55, Tense::Present, Mood::Subjunctive, Aspect::Imperfective),
            67..=72 => series(67, Tense::Past, Mood::Subjunctive, Aspect::Imperfective),
            _ => None,
        }
    }

    /// Id no esquema compartilhado; `None` se o slot não existe no catálogo.
    pub fn id(&self) -> Option<u8> {
        (0..=72u8).find(|&id| Self::from_id(id).as_ref() == Some(self))
    }
}

impl fmt::Display for TenseSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} {:?}", self.tense, self.mood, self.aspect)?;
        if let (Some(person), Some(number)) = (self.person, self.number) {
            write!(f, " {:?} {:?}", person, number)?;
        }
        Ok(())
    }
}

/// Erro de [`TenseSlot::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("abreviação de tempo desconhecida: '{0}'")]
pub struct UnknownTenseAlias(pub String);

impl FromStr for TenseSlot {
    type Err = UnknownTenseAlias;

    /// Abreviações: `inf`, `1sg`..`3pl` (presente), `part` (gerúndio),
    /// `1sgp`..`3plp` (imperfeito), `ppart` (particípio).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = match s.trim().to_ascii_lowercase().as_str() {
            "inf" => 0,
            "1sg" => 1,
            "2sg" => 2,
            "3sg" => 3,
            "1pl" => 4,
            "2pl" => 5,
            "3pl" => 6,
            "part" => 8,
            "1sgp" => 17,
            "2sgp" => 18,
            "3sgp" => 19,
            "1plp" => 20,
            "2plp" => 21,
            "3plp" => 22,
            "ppart" => 24,
            _ => return Err(UnknownTenseAlias(s.to_string())),
        };
        TenseSlot::from_id(id).ok_or_else(|| UnknownTenseAlias(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ids_are_all_known() {
        for id in PT_FORMAT {
            assert!(TenseSlot::from_id(id).is_some(), "id {} sem slot", id);
        }
    }

    #[test]
    fn test_format_has_no_duplicates() {
        let mut ids = PT_FORMAT.to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PT_FORMAT.len());
    }

    #[test]
    fn test_id_round_trip() {
        for id in PT_FORMAT {
            let slot = TenseSlot::from_id(id).unwrap();
            assert_eq!(slot.id(), Some(id));
        }
        assert_eq!(TenseSlot::from_id(7), None);
        assert_eq!(TenseSlot::from_id(73), None);
    }

    #[test]
    fn test_aliases() {
        let slot: TenseSlot = "1sg".parse().unwrap();
        assert_eq!(slot, TenseSlot::present(Person::First, Number::Singular));
        let slot: TenseSlot = "ppart".parse().unwrap();
        assert_eq!(slot, TenseSlot::PAST_PARTICIPLE);
        let slot: TenseSlot = "3PLP".parse().unwrap();
        assert_eq!(slot.tense, Tense::Past);
        assert_eq!(slot.aspect, Aspect::Imperfective);
        assert!("xyz".parse::<TenseSlot>().is_err());
    }

    #[test]
    fn test_conditional_is_present_tense_in_conditional_mood() {
        let slot = TenseSlot::from_id(46).unwrap();
        assert_eq!(slot.mood, Mood::Conditional);
        assert_eq!(slot.person, Some(Person::First));
    }
}
