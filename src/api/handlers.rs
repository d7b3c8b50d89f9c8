//! HTTP request handlers for the expression helper API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use serde_json::{Value, json};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ScriptDefaults;
use crate::context::ScriptContext;
use crate::error::{ExpressionError, ExpressionResult};
use crate::expressions::{ExpressionHelpers, RowTypeSelector};

use super::request::{EvaluationRequest, HelperQuery};
use super::response::{ApiError, ApiErrorResponse, EvaluationResponse, QueryResult};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .with_state(state)
}

/// Handler for POST /evaluate endpoint.
///
/// Accepts a script context with a list of helper queries and returns one
/// result per query. A context without business configuration entries gets
/// the loaded ones.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let EvaluationRequest {
        mut context,
        queries,
    } = request;
    let config = state.config();
    if context.configs.is_empty() {
        context.configs = config.biz_configs().to_vec();
    }

    let start_time = Instant::now();
    match evaluate_queries(&context, &queries, config.defaults()) {
        Ok(results) => {
            let duration_us = start_time.elapsed().as_micros() as u64;
            info!(
                correlation_id = %correlation_id,
                rows_count = context.calculation.rows.len(),
                queries_count = queries.len(),
                duration_us,
                "Evaluation completed successfully"
            );
            let response = EvaluationResponse {
                evaluation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                results,
                duration_us,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Evaluation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Evaluates the queries in order. The first failing query fails the batch.
fn evaluate_queries(
    ctx: &ScriptContext,
    queries: &[HelperQuery],
    defaults: &ScriptDefaults,
) -> ExpressionResult<Vec<QueryResult>> {
    let helpers = ctx.helpers();
    queries
        .iter()
        .enumerate()
        .map(|(index, query)| {
            let step_number = index as u32 + 1;
            Ok(QueryResult {
                op: query.op().to_string(),
                value: evaluate_query(query, step_number, ctx, &helpers, defaults)?,
            })
        })
        .collect()
}

fn evaluate_query(
    query: &HelperQuery,
    step_number: u32,
    ctx: &ScriptContext,
    helpers: &ExpressionHelpers<'_>,
    defaults: &ScriptDefaults,
) -> ExpressionResult<Value> {
    let value = match query {
        HelperQuery::Rows { selector } => json!(helpers.rows.get(&sel(selector))),
        HelperQuery::First { selector } => json!(helpers.rows.first(&sel(selector))),
        HelperQuery::Last { selector } => json!(helpers.rows.last(&sel(selector))),
        HelperQuery::Sum { selector } => json!(helpers.rows.sum(&sel(selector))),
        HelperQuery::Count { selector } => json!(helpers.rows.count(&sel(selector))),
        HelperQuery::AvgPrice {
            selector,
            precision,
        } => {
            let precision = precision.unwrap_or(defaults.rounding_precision);
            json!(helpers.rows.avg_price(&sel(selector), precision))
        }
        HelperQuery::MinPrice { selector } => json!(helpers.rows.min_price(&sel(selector))),
        HelperQuery::MaxPrice { selector } => json!(helpers.rows.max_price(&sel(selector))),
        HelperQuery::Price { selector } => json!(helpers.prices.get(&sel(selector))),
        HelperQuery::EmploymentPrice { selector } => {
            json!(helpers.prices.get_employment(&sel(selector)))
        }
        HelperQuery::CompanyPrice { selector } => {
            json!(helpers.prices.get_company(&sel(selector)))
        }
        HelperQuery::ResolvePrice { selector } => {
            json!(helpers.prices.resolve(&sel(selector), step_number))
        }
        HelperQuery::Round { value, decimals } => json!(helpers.round_opt(*value, *decimals)),
        HelperQuery::PricingPeriodStart { work_start_date } => {
            let start = match work_start_date {
                Some(date) => helpers.pricing_period_start_for(Some(date))?,
                None => helpers.pricing_period_start()?,
            };
            json!(start)
        }
        HelperQuery::ConfigValue { name } => ctx
            .config(name)
            .map(|config| config.data.clone())
            .ok_or_else(|| ExpressionError::ConfigValueNotFound { name: name.clone() })?,
    };

    Ok(value)
}

fn sel(selector: &str) -> RowTypeSelector<'static> {
    RowTypeSelector::from(selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{Calculation, CalculationRowType, Row};
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    fn create_valid_request() -> EvaluationRequest {
        EvaluationRequest {
            context: ScriptContext::new(Calculation::with_rows(vec![
                Row::new(CalculationRowType::HourlySalary)
                    .with_count(40.0)
                    .with_price(20.0),
                Row::new(CalculationRowType::HourlySalary)
                    .with_count(80.0)
                    .with_price(25.0),
                Row::new(CalculationRowType::PhoneBenefit)
                    .with_count(1.0)
                    .with_price(20.0),
            ])),
            queries: vec![
                HelperQuery::Sum {
                    selector: "hourlySalary".to_string(),
                },
                HelperQuery::AvgPrice {
                    selector: "hourlySalary".to_string(),
                    precision: None,
                },
            ],
        }
    }

    async fn post_evaluate(router: Router, body: String) -> axum::response::Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/evaluate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = post_evaluate(router, body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: EvaluationResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.results.len(), 2);
        assert_eq!(result.results[0].op, "sum");
        assert_eq!(result.results[0].value, json!(2800.0));
        assert_eq!(result.results[1].value, json!(23.33));
        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = post_evaluate(router, "{invalid json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_queries_returns_400() {
        let router = create_router(create_test_state());

        let response = post_evaluate(router, r#"{ "context": {} }"#.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert!(
            error.message.contains("missing field"),
            "Expected error message to mention missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_invalid_date_returns_400() {
        let router = create_router(create_test_state());
        let request = EvaluationRequest {
            context: ScriptContext::default(),
            queries: vec![HelperQuery::PricingPeriodStart {
                work_start_date: Some("2024/06/01".to_string()),
            }],
        };

        let response = post_evaluate(router, serde_json::to_string(&request).unwrap()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_DATE");
    }

    #[test]
    fn test_loaded_configs_are_visible() {
        let state = create_test_state();
        let mut ctx = ScriptContext::default();
        ctx.configs = state.config().biz_configs().to_vec();

        let results = evaluate_queries(
            &ctx,
            &[HelperQuery::ConfigValue {
                name: "monthlyDivider".to_string(),
            }],
            state.config().defaults(),
        )
        .unwrap();
        assert_eq!(results[0].value, json!(158));
    }

    #[test]
    fn test_undefined_average_is_null() {
        let ctx = ScriptContext::default();
        let results = evaluate_queries(
            &ctx,
            &[HelperQuery::AvgPrice {
                selector: "hourlySalary".to_string(),
                precision: Some(2),
            }],
            &ScriptDefaults::default(),
        )
        .unwrap();
        assert_eq!(results[0].value, Value::Null);
    }

    #[test]
    fn test_resolve_price_step_follows_query_position() {
        let ctx = ScriptContext::default();
        let queries = vec![
            HelperQuery::Round {
                value: Some(0.125),
                decimals: Some(2),
            },
            HelperQuery::ResolvePrice {
                selector: "hourlySalary".to_string(),
            },
        ];
        let results = evaluate_queries(&ctx, &queries, &ScriptDefaults::default()).unwrap();

        assert_eq!(results[0].value, json!(0.13));
        assert_eq!(results[1].value["source"], "not_found");
        assert_eq!(results[1].value["audit_step"]["step_number"], 2);
    }
}
