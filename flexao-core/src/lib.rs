//! # flexao-core — Flexão Morfológica do Português
//!
//! Regras de flexão para Português: plural e singular de substantivos,
//! gênero, artigos, concordância de adjetivos e o motor verbal
//! (lema ↔ paradigma).
//!
//! Tudo aqui é função pura sobre tabelas estáticas, exceto a tabela de verbos
//! padrão, carregada uma única vez na primeira consulta. Todas as funções
//! podem ser chamadas de várias threads sem sincronização.
//!
//! ## Camadas
//!
//! 1.  **Tabelas** ([`noun`], [`gender`], [`irregular`]): exceções curadas, sempre
//!     consultadas antes das regras.
//! 2.  **Regras de sufixo**: cascatas em que a primeira regra que casa vence.
//! 3.  **Tabela de verbos** ([`verb_table`]): arquivo de paradigmas com as regras
//!     de [`verbs`] como reserva.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use flexao_core::{gender, pluralize, referenced};
//! use flexao_core::{Agreement, ArticleKind, Gender, GenderTag, Number};
//! use flexao_core::{conjugate, lemma, TenseSlot};
//!
//! assert_eq!(pluralize("cão", None), "cães");
//! assert_eq!(gender("problema"), GenderTag::Masculine);
//!
//! let agreement = Agreement::new(Gender::Feminine, Number::Plural);
//! assert_eq!(referenced("casas", ArticleKind::Definite, agreement), "as casas");
//!
//! assert_eq!(lemma("fazem"), "fazer");
//! let slot: TenseSlot = "1sg".parse().unwrap();
//! assert_eq!(conjugate("amar", slot).unwrap().as_deref(), Some("amo"));
//! ```
//!
//! ## Erros
//!
//! Palavra desconhecida não é erro: volta inalterada. [`InflectError`] só
//! aparece para violações de contrato (paradigma de algo que não é infinitivo)
//! e para problemas ao carregar a tabela de verbos.

pub mod adjective;
pub mod article;
pub mod config;
pub mod error;
pub mod gender;
pub mod irregular;
pub mod lemmatizer;
pub mod morph;
pub mod noun;
pub mod tense;
pub mod verb_table;
pub mod verbs;

pub use adjective::{attributive, inflect_adjective, predicative};
pub use article::{article, definite_article, indefinite_article, referenced};
pub use config::VerbTableConfig;
pub use error::{InflectError, Result};
pub use gender::gender;
pub use lemmatizer::{lemmatize, lemmatize_tagged};
pub use morph::{Agreement, ArticleKind, Gender, GenderTag, Number, PartOfSpeech};
pub use noun::{pluralize, singularize};
pub use tense::{Aspect, Mood, Person, Tense, TenseSlot, PT_FORMAT};
pub use verb_table::{
    conjugate, lemma, lexeme, tenses, verbs, PortugueseRules, VerbFormProvider, VerbRules,
    VerbTable,
};
pub use verbs::{find_lemma, find_lexeme};
