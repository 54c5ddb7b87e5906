//! Axum route handlers for the LLM-assisted suggestion flows.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::DocumentType;
use crate::state::AppState;
use crate::suggestions::prompts::{
    CALCULATOR_SYSTEM, CALCULATOR_TEMPLATE, ITEM_DESCRIPTION_SYSTEM, ITEM_DESCRIPTION_TEMPLATE,
    TERMS_SYSTEM, TERMS_TEMPLATE,
};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ItemDescriptionRequest {
    pub doc_type: DocumentType,
    pub subject: String,
    pub current_description: String,
}

#[derive(Debug, Serialize)]
pub struct ItemDescriptionResponse {
    pub suggestion: String,
}

#[derive(Debug, Deserialize)]
pub struct TermsSuggestionRequest {
    pub doc_type: DocumentType,
    pub client_name: String,
    pub subject: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TermsSuggestionResponse {
    pub suggested_terms: String,
    pub suggested_payment_method: String,
}

#[derive(Debug, Deserialize)]
pub struct CalculatorRequest {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalculatorResponse {
    /// The arithmetic expression extracted from the query, e.g. `"5 * 50"`.
    /// `"0"` when the query contains no clear operation.
    pub expression: String,
    pub result: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/suggestions/item-description
///
/// Expands a short item description into a detailed professional one,
/// given the document type and subject for context.
pub async fn handle_item_description(
    State(state): State<AppState>,
    Json(request): Json<ItemDescriptionRequest>,
) -> Result<Json<ItemDescriptionResponse>, AppError> {
    if request.current_description.trim().is_empty() {
        return Err(AppError::Validation(
            "current_description cannot be empty".to_string(),
        ));
    }

    let llm = require_llm(&state)?;
    let prompt = build_item_description_prompt(&request);

    let suggestion = llm
        .call_text(&prompt, ITEM_DESCRIPTION_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Item description suggestion failed: {e}")))?;

    Ok(Json(ItemDescriptionResponse { suggestion }))
}

/// POST /api/v1/suggestions/terms
///
/// Suggests terms-and-conditions and a payment-method block for a quote.
pub async fn handle_terms_suggestion(
    State(state): State<AppState>,
    Json(request): Json<TermsSuggestionRequest>,
) -> Result<Json<TermsSuggestionResponse>, AppError> {
    if request.subject.trim().is_empty() {
        return Err(AppError::Validation("subject cannot be empty".to_string()));
    }

    let llm = require_llm(&state)?;
    let prompt = build_terms_prompt(&request);

    let response: TermsSuggestionResponse = llm
        .call_json(&prompt, TERMS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Terms suggestion failed: {e}")))?;

    Ok(Json(response))
}

/// POST /api/v1/suggestions/calculator
///
/// Interprets a natural-language Arabic query ("اجمع 100 و 250") as an
/// arithmetic expression and returns it with its computed result.
pub async fn handle_calculator(
    State(state): State<AppState>,
    Json(request): Json<CalculatorRequest>,
) -> Result<Json<CalculatorResponse>, AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let llm = require_llm(&state)?;
    let prompt = build_calculator_prompt(&request);

    let response: CalculatorResponse = llm
        .call_json(&prompt, CALCULATOR_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Calculator query failed: {e}")))?;

    Ok(Json(response))
}

/// Suggestion routes need an API key; export routes do not. A deployment
/// without the key still serves exports and reports 503 here.
fn require_llm(state: &AppState) -> Result<&LlmClient, AppError> {
    state.llm.as_ref().ok_or_else(|| {
        AppError::SuggestionsUnavailable("ANTHROPIC_API_KEY is not configured".to_string())
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt builders
// ────────────────────────────────────────────────────────────────────────────

fn doc_type_label(doc_type: DocumentType) -> &'static str {
    match doc_type {
        DocumentType::Quote => "quote",
        DocumentType::Estimation => "estimation",
    }
}

pub(crate) fn build_item_description_prompt(request: &ItemDescriptionRequest) -> String {
    ITEM_DESCRIPTION_TEMPLATE
        .replace("{doc_type}", doc_type_label(request.doc_type))
        .replace("{subject}", &request.subject)
        .replace("{current_description}", &request.current_description)
}

pub(crate) fn build_terms_prompt(request: &TermsSuggestionRequest) -> String {
    TERMS_TEMPLATE
        .replace("{doc_type}", doc_type_label(request.doc_type))
        .replace("{client_name}", &request.client_name)
        .replace("{subject}", &request.subject)
}

pub(crate) fn build_calculator_prompt(request: &CalculatorRequest) -> String {
    CALCULATOR_TEMPLATE.replace("{query}", &request.query)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_description_prompt_contains_fields() {
        let request = ItemDescriptionRequest {
            doc_type: DocumentType::Quote,
            subject: "تأسيس كهرباء شقة".to_string(),
            current_description: "سلك 2مم".to_string(),
        };
        let prompt = build_item_description_prompt(&request);
        assert!(prompt.contains("quote"));
        assert!(prompt.contains("تأسيس كهرباء شقة"));
        assert!(prompt.contains("سلك 2مم"));
    }

    #[test]
    fn test_terms_prompt_contains_fields() {
        let request = TermsSuggestionRequest {
            doc_type: DocumentType::Estimation,
            client_name: "شركة النور".to_string(),
            subject: "توريد وتركيب كاميرات".to_string(),
        };
        let prompt = build_terms_prompt(&request);
        assert!(prompt.contains("estimation"));
        assert!(prompt.contains("شركة النور"));
        assert!(prompt.contains("توريد وتركيب كاميرات"));
    }

    #[test]
    fn test_calculator_prompt_contains_query() {
        let request = CalculatorRequest {
            query: "حساب تكلفة 5 لمبات سعر الواحدة 50 جنيه".to_string(),
        };
        let prompt = build_calculator_prompt(&request);
        assert!(prompt.contains("حساب تكلفة 5 لمبات سعر الواحدة 50 جنيه"));
        assert!(!prompt.contains("{query}"));
    }

    #[test]
    fn test_calculator_response_parses_expression_and_result() {
        let json = r#"{"expression":"5 * 50","result":250}"#;
        let response: CalculatorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.expression, "5 * 50");
        assert_eq!(response.result, 250.0);
    }

    #[test]
    fn test_calculator_response_parses_no_operation_fallback() {
        let json = r#"{"expression":"0","result":0}"#;
        let response: CalculatorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.expression, "0");
        assert_eq!(response.result, 0.0);
    }

    #[test]
    fn test_terms_response_round_trips() {
        let json = r#"{"suggested_terms":"شروط","suggested_payment_method":"دفعات"}"#;
        let response: TermsSuggestionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.suggested_terms, "شروط");
        assert_eq!(response.suggested_payment_method, "دفعات");
    }
}
