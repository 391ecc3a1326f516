use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, HealthResponse, InvokeToolRequest, ToolListResponse};
use crate::services::{CandidatePool, ToolError, ToolRegistry};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<CandidatePool>,
    pub tools: ToolRegistry,
}

/// Configure tool routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/tools", web::get().to(list_tools))
        .route("/tools/{name}", web::post().to(invoke_tool));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        candidates: state.pool.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// List registered tools
///
/// GET /api/v1/tools
async fn list_tools(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ToolListResponse {
        tools: state.tools.specs(),
    })
}

/// Invoke a tool
///
/// POST /api/v1/tools/{name}
///
/// Request body:
/// ```json
/// {
///   "persona_data": {
///     "name": "string",
///     "gender": "male|female",
///     "location": "string",
///     "age": "string"
///   }
/// }
/// ```
///
/// Every matching outcome, including an unrecognised gender, is a 200 with a
/// `message` for the user.
async fn invoke_tool(
    state: web::Data<AppState>,
    name: web::Path<String>,
    req: web::Json<InvokeToolRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for tool {}: {:?}", name, errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let Some(tool) = state.tools.get(&name) else {
        return tool_error(ToolError::NotFound(name.into_inner()));
    };

    tracing::debug!(
        "Invoking {} for gender={:?} location={:?}",
        name,
        req.persona_data.gender,
        req.persona_data.location
    );

    let args = match serde_json::to_value(req.into_inner()) {
        Ok(args) => args,
        Err(e) => return tool_error(ToolError::InvalidArguments(e.to_string())),
    };

    match tool.call(args) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => tool_error(e),
    }
}

fn tool_error(err: ToolError) -> HttpResponse {
    match err {
        ToolError::NotFound(name) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Tool not found".to_string(),
            message: format!("No tool registered under '{}'", name),
            status_code: 404,
        }),
        ToolError::InvalidArguments(message) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid arguments".to_string(),
            message,
            status_code: 400,
        }),
    }
}
