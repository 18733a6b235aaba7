//! Servidor web Axum para consulta interativa das regras de flexão

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use flexao_core::{
    adjective::{attributive, inflect_adjective, predicative},
    article::{article, referenced},
    gender::gender,
    lemmatizer::lemmatize,
    noun::{pluralize, singularize},
    Agreement, ArticleKind, Gender, GenderTag, InflectError, Number, PartOfSpeech, TenseSlot,
    VerbFormProvider, VerbTable, VerbTableConfig,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Estado compartilhado da aplicação
struct AppState {
    verbs: VerbTable,
}

/// Erros das rotas, convertidos em JSON `{"error": ...}`
enum ApiError {
    Inflect(InflectError),
    BadRequest(String),
}

impl From<InflectError> for ApiError {
    fn from(err: InflectError) -> Self {
        ApiError::Inflect(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Inflect(err @ InflectError::InvalidLemma(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            ApiError::Inflect(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[derive(Deserialize)]
struct NounRequest {
    word: String,
    #[serde(default)]
    number: Number,
    #[serde(default)]
    custom: Option<HashMap<String, String>>,
}

#[derive(Serialize)]
struct NounResponse {
    word: String,
    number: Number,
    inflected: String,
}

#[derive(Deserialize)]
struct GenderRequest {
    word: String,
}

#[derive(Serialize)]
struct GenderResponse {
    word: String,
    tag: GenderTag,
    label: &'static str,
    genders: &'static [Gender],
    plural: bool,
}

#[derive(Deserialize)]
struct ArticleRequest {
    word: String,
    #[serde(default)]
    kind: ArticleKind,
    #[serde(default)]
    gender: Gender,
    #[serde(default)]
    number: Number,
}

#[derive(Serialize)]
struct ArticleResponse {
    article: &'static str,
    referenced: String,
}

#[derive(Deserialize)]
struct AdjectiveRequest {
    adjective: String,
    #[serde(default)]
    gender: Gender,
    #[serde(default)]
    number: Number,
}

#[derive(Serialize)]
struct AdjectiveResponse {
    inflected: String,
    attributive: String,
    predicative: String,
}

#[derive(Deserialize)]
struct VerbRequest {
    verb: String,
}

#[derive(Serialize)]
struct VerbResponse {
    verb: String,
    lemma: String,
    lexeme: Vec<String>,
    tenses: Vec<TenseSlot>,
}

/// Tempo pedido por abreviação ("1sg", "ppart") ou pelo slot completo
#[derive(Deserialize)]
#[serde(untagged)]
enum TenseSelector {
    Alias(String),
    Slot(TenseSlot),
}

#[derive(Deserialize)]
struct ConjugateRequest {
    verb: String,
    tense: TenseSelector,
}

#[derive(Serialize)]
struct ConjugateResponse {
    lemma: String,
    tense: TenseSlot,
    form: Option<String>,
}

#[derive(Deserialize)]
struct LemmatizeRequest {
    word: String,
    pos: PartOfSpeech,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("FLEXAO_CONFIG") {
        Ok(path) => VerbTableConfig::from_json_file(&path)
            .with_context(|| format!("lendo configuração {}", path))?,
        Err(_) => VerbTableConfig::default(),
    };
    let verbs = VerbTable::load(&config).context("carregando tabela de verbos")?;
    info!(verbos = verbs.len(), "tabela de verbos pronta");

    let app = router(Arc::new(AppState { verbs }));

    let addr = std::env::var("FLEXAO_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("abrindo {}", addr))?;
    info!("🚀 Servidor de flexão iniciado em http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/noun", post(noun_handler))
        .route("/gender", post(gender_handler))
        .route("/article", post(article_handler))
        .route("/adjective", post(adjective_handler))
        .route("/verb", post(verb_handler))
        .route("/conjugate", post(conjugate_handler))
        .route("/lemmatize", post(lemmatize_handler))
        .layer(cors)
        .with_state(state)
}

/// Retorna a página principal HTML
async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

/// Plural ou singular, conforme o número pedido
async fn noun_handler(Json(req): Json<NounRequest>) -> Json<NounResponse> {
    let custom = req.custom.as_ref();
    let inflected = match req.number {
        Number::Plural => pluralize(&req.word, custom),
        Number::Singular => singularize(&req.word, custom),
    };
    Json(NounResponse {
        word: req.word,
        number: req.number,
        inflected,
    })
}

async fn gender_handler(Json(req): Json<GenderRequest>) -> Json<GenderResponse> {
    let tag = gender(&req.word);
    Json(GenderResponse {
        word: req.word,
        tag,
        label: tag.label(),
        genders: tag.genders(),
        plural: tag.is_plural(),
    })
}

async fn article_handler(Json(req): Json<ArticleRequest>) -> Json<ArticleResponse> {
    let agreement = Agreement::new(req.gender, req.number);
    Json(ArticleResponse {
        article: article(&req.word, req.kind, agreement),
        referenced: referenced(&req.word, req.kind, agreement),
    })
}

async fn adjective_handler(Json(req): Json<AdjectiveRequest>) -> Json<AdjectiveResponse> {
    let agreement = Agreement::new(req.gender, req.number);
    Json(AdjectiveResponse {
        inflected: inflect_adjective(&req.adjective, agreement),
        attributive: attributive(&req.adjective, agreement),
        predicative: predicative(&req.adjective),
    })
}

/// Lema, paradigma e tempos de uma forma verbal
async fn verb_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerbRequest>,
) -> Result<Json<VerbResponse>, ApiError> {
    if req.verb.trim().is_empty() {
        return Err(ApiError::BadRequest("Verbo vazio".to_string()));
    }
    let lemma = state.verbs.lemma(&req.verb);
    let lexeme = state.verbs.lexeme(&req.verb)?;
    let tenses = state.verbs.tenses(&req.verb)?;
    Ok(Json(VerbResponse {
        verb: req.verb,
        lemma,
        lexeme,
        tenses,
    }))
}

async fn conjugate_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConjugateRequest>,
) -> Result<Json<ConjugateResponse>, ApiError> {
    let tense = match req.tense {
        TenseSelector::Slot(slot) => slot,
        TenseSelector::Alias(alias) => alias.parse::<TenseSlot>().map_err(|err| {
            warn!(%err, "tempo inválido");
            ApiError::BadRequest(err.to_string())
        })?,
    };
    let form = state.verbs.conjugate(&req.verb, tense)?;
    Ok(Json(ConjugateResponse {
        lemma: state.verbs.lemma(&req.verb),
        tense,
        form,
    }))
}

async fn lemmatize_handler(Json(req): Json<LemmatizeRequest>) -> impl IntoResponse {
    Json(serde_json::json!({
        "word": req.word,
        "pos": req.pos.tag(),
        "lemma": lemmatize(&req.word, req.pos),
    }))
}
