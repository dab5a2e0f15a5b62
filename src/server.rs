// HTTP routes & panic-safe analyze handler.

use crate::{
    error::AnalyzeError,
    extract,
    llm_client::TextGenerator,
    models::{AnalysisRequest, AnalysisResult},
    prompt_builder::{self, PromptInput},
    topic,
};
use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use futures::FutureExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tera::Tera;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tracing::{debug, error, info};

pub struct AppState {
    tera: Tera,
    generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Result<Self> {
        let tera = prompt_builder::load_templates()?;
        info!("Prompt templates loaded");
        Ok(Self { tera, generator })
    }

    // The inner logic, returning AnalyzeError on failure (no panics).
    async fn handle_analyze(&self, req: AnalysisRequest) -> Result<AnalysisResult, AnalyzeError> {
        let language = req.language();
        info!("Received request for language: {}", language.unwrap_or("<none>"));
        debug!("Code: {}", req.code);
        debug!("Prompt: {}", req.prompt);

        // 1) Topic
        let topic = topic::classify(&req.prompt, Some(&req.code));
        info!("Determined context: {}", topic);

        // 2) Prompt
        let prompt = prompt_builder::render_prompt(
            &self.tera,
            &PromptInput {
                topic,
                language,
                code: &req.code,
                request: &req.prompt,
            },
        )
        .map_err(|e| {
            error!("Failed to render analysis prompt: {:#}", e);
            AnalyzeError::Render(e)
        })?;

        // 3) Call LLM
        let reply = self.generator.generate(&prompt).await.map_err(|e| {
            error!("LLM generation failed: {:#}", e);
            AnalyzeError::Upstream(e)
        })?;
        if reply.trim().is_empty() {
            error!("Empty response from LLM");
            return Err(AnalyzeError::EmptyReply);
        }

        // 4) Extract
        let extracted = extract::extract(&reply, language).map_err(|e| {
            error!("Error parsing response: {}", e.reason);
            debug!("Unparseable response text: {}", e.raw);
            AnalyzeError::Parse(e)
        })?;
        info!("Successfully parsed response");

        Ok(AnalysisResult {
            original: req.code,
            suggested: extracted.code,
            explanation: extracted.explanation,
        })
    }
}

pub async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, AnalyzeError> {
    // Panic-safe wrapper: a panic becomes a 500 instead of a dropped connection.
    let fut = async { state.handle_analyze(req).await };
    match std::panic::AssertUnwindSafe(fut).catch_unwind().await {
        Ok(Ok(result)) => Ok(Json(result)),
        Ok(Err(err)) => Err(err),
        Err(panic) => {
            error!("panic in analyze handler: {:?}", panic);
            Err(AnalyzeError::Internal("handler panic in analyze".to_string()))
        }
    }
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Browser calls are only accepted from `allowed_origin`.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(allowed_origin)
        .with_context(|| format!("invalid allowed origin: {}", allowed_origin))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

pub fn router(state: Arc<AppState>, allowed_origin: &str) -> Result<Router> {
    Ok(Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .layer(cors_layer(allowed_origin)?)
        .with_state(state))
}
