use crate::models::{ChatRequest, ChatResponse};
use crate::services::metrics;
use crate::services::providers::ProviderError;
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, Json};
use service_core::error::AppError;
use std::time::Instant;

pub const NOT_CONFIGURED_MESSAGE: &str = "Server configuration error: API key missing";

/// Relay one message to the upstream provider.
///
/// At most one upstream call is made. Every failure is returned as an
/// [`AppError`] so the caller always gets a JSON body.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let Some(provider) = state.provider.ready() else {
        tracing::warn!("Rejecting chat request: provider not configured");
        return Err(AppError::NotConfigured(NOT_CONFIGURED_MESSAGE.to_string()));
    };

    let request = ChatRequest::from_body(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejecting invalid chat request");
        e
    })?;

    let model = provider.model().to_string();
    let started = Instant::now();

    tracing::debug!(
        model = %model,
        message_len = request.message.len(),
        "Forwarding chat message"
    );

    let result = provider.generate(&request.message).await.and_then(|response| {
        metrics::record_tokens(&model, response.input_tokens, response.output_tokens);
        let finish_reason = response.finish_reason;
        response
            .text
            .map(|reply| (reply, finish_reason))
            .ok_or(ProviderError::EmptyResponse)
    });

    let elapsed = started.elapsed().as_secs_f64();

    match result {
        Ok((reply, finish_reason)) => {
            metrics::record_provider_call(&model, "success", finish_reason.as_str(), elapsed);
            tracing::info!(
                model = %model,
                reply_len = reply.len(),
                finish_reason = finish_reason.as_str(),
                elapsed_secs = elapsed,
                "Chat reply relayed"
            );
            Ok(Json(ChatResponse { reply }))
        }
        Err(e) => {
            metrics::record_provider_call(&model, e.kind(), "error", elapsed);
            tracing::error!(
                model = %model,
                error = %e,
                error_kind = e.kind(),
                elapsed_secs = elapsed,
                "Gemini API error"
            );
            Err(AppError::UpstreamError(anyhow::Error::new(e)))
        }
    }
}
