//! HTTP handlers for the form page and its JSON API.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{rejection::FormRejection, rejection::JsonRejection, FromRequest, Request, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};

use crate::application::{
    ClassifyNumberHandler, ClassifyNumberQuery, ComputeArithmeticCommand,
    ComputeArithmeticHandler, CycleStylesHandler, GreetCommand, GreetHandler,
};
use crate::config::FormsConfig;
use crate::domain::foundation::ErrorCode;

use super::dto::{
    ArithmeticRequest, ArithmeticResponse, ClassificationResponse, ClassifyNumberRequest,
    CycleStylesRequest, CycleStylesResponse, ErrorResponse, FormAction, FormSubmission,
    GreetingRequest, GreetingResponse, PaletteResponse,
};
use super::render::{render_page, Outcome, PageSettings};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct FormsAppState {
    cycle_handler: Arc<CycleStylesHandler>,
    compute_handler: Arc<ComputeArithmeticHandler>,
    greet_handler: Arc<GreetHandler>,
    classify_handler: Arc<ClassifyNumberHandler>,
    page: Arc<PageSettings>,
}

impl FormsAppState {
    pub fn new(
        cycle_handler: Arc<CycleStylesHandler>,
        compute_handler: Arc<ComputeArithmeticHandler>,
        greet_handler: Arc<GreetHandler>,
        classify_handler: Arc<ClassifyNumberHandler>,
        page: Arc<PageSettings>,
    ) -> Self {
        Self {
            cycle_handler,
            compute_handler,
            greet_handler,
            classify_handler,
            page,
        }
    }

    /// Wires every handler from the form configuration.
    pub fn from_config(config: &FormsConfig) -> Self {
        Self::new(
            Arc::new(CycleStylesHandler::new(config.max_repeat_count)),
            Arc::new(ComputeArithmeticHandler::new()),
            Arc::new(GreetHandler::new()),
            Arc::new(ClassifyNumberHandler::new()),
            Arc::new(PageSettings {
                title: config.page_title.clone(),
                stylesheet_url: config.stylesheet_url.clone(),
                max_repeat_count: config.max_repeat_count,
            }),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Request extraction
// ════════════════════════════════════════════════════════════════════════════

/// JSON body extractor whose rejections use the API error body.
///
/// Malformed JSON, wrong value types and missing fields all surface as
/// `INVALID_ARGUMENT` with status 400.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected JSON body");
                Err(error_response(
                    ErrorCode::InvalidArgument,
                    format!("Invalid argument: {}", rejection.body_text()),
                ))
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Form page
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Render the empty form page
pub async fn show_page(State(state): State<FormsAppState>) -> Html<String> {
    Html(render_page(&state.page, None))
}

/// POST / - Handle a submission from any form on the page
pub async fn submit_form(
    State(state): State<FormsAppState>,
    form: Result<Form<FormSubmission>, FormRejection>,
) -> Response {
    let submission = match form {
        Ok(Form(submission)) => submission,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected form body");
            let outcome = Outcome::rejected(
                None,
                ErrorCode::InvalidArgument,
                format!("Invalid argument: {}", rejection.body_text()),
            );
            return (
                status_for(ErrorCode::InvalidArgument),
                Html(render_page(&state.page, Some(&outcome))),
            )
                .into_response();
        }
    };

    let outcome = match submission.action() {
        Some(action) => run_action(&state, action, &submission),
        None => {
            tracing::debug!(boton = ?submission.boton, "Form submitted with unknown button");
            Outcome::rejected(
                None,
                ErrorCode::UnknownAction,
                format!(
                    "Unknown form action: {}",
                    submission.boton.as_deref().unwrap_or("(none)")
                ),
            )
        }
    };

    let status = match &outcome {
        Outcome::Rejected { code, .. } => status_for(*code),
        _ => StatusCode::OK,
    };

    (status, Html(render_page(&state.page, Some(&outcome)))).into_response()
}

fn run_action(state: &FormsAppState, action: FormAction, submission: &FormSubmission) -> Outcome {
    let rejected = |code: ErrorCode, message: String| Outcome::rejected(Some(action), code, message);

    match action {
        FormAction::CycleStyles => match submission
            .to_cycle_command()
            .and_then(|cmd| state.cycle_handler.handle(cmd))
        {
            Ok(result) => Outcome::StyledLines(result.lines),
            Err(e) => rejected(e.code(), e.to_string()),
        },
        FormAction::Calculate => match submission
            .to_compute_command()
            .and_then(|cmd| state.compute_handler.handle(cmd))
        {
            Ok(result) => Outcome::Arithmetic(result),
            Err(e) => rejected(e.code(), e.to_string()),
        },
        FormAction::Greet => match submission
            .to_greet_command()
            .and_then(|cmd| state.greet_handler.handle(cmd))
        {
            Ok(greeting) => Outcome::Greeting(greeting),
            Err(e) => rejected(e.code(), e.to_string()),
        },
        FormAction::Classify => match submission.to_classify_query() {
            Ok(query) => Outcome::Classification(state.classify_handler.handle(query)),
            Err(e) => rejected(ErrorCode::InvalidArgument, format!("Invalid argument: {}", e)),
        },
    }
}

// ════════════════════════════════════════════════════════════════════════════
// JSON API
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/styles/palette - List the palette in rotation order
pub async fn get_palette() -> Json<PaletteResponse> {
    Json(PaletteResponse::current())
}

/// POST /api/styles/cycle - Repeat a message with rotating styles
pub async fn cycle_styles(
    State(state): State<FormsAppState>,
    ApiJson(req): ApiJson<CycleStylesRequest>,
) -> Response {
    match state.cycle_handler.handle(req.into()) {
        Ok(result) => {
            let response: CycleStylesResponse = result.lines.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e.code(), e.to_string()),
    }
}

/// POST /api/arithmetic - Compute sum, difference, quotient and product
pub async fn compute_arithmetic(
    State(state): State<FormsAppState>,
    ApiJson(req): ApiJson<ArithmeticRequest>,
) -> Response {
    let result = ComputeArithmeticCommand::from_values(req.a, req.b)
        .and_then(|cmd| state.compute_handler.handle(cmd));

    match result {
        Ok(result) => (StatusCode::OK, Json(ArithmeticResponse::from(result))).into_response(),
        Err(e) => error_response(e.code(), e.to_string()),
    }
}

/// POST /api/greeting - Greet a name
pub async fn greet(
    State(state): State<FormsAppState>,
    ApiJson(req): ApiJson<GreetingRequest>,
) -> Response {
    match state.greet_handler.handle(GreetCommand { name: req.name }) {
        Ok(greeting) => (StatusCode::OK, Json(GreetingResponse::from(greeting))).into_response(),
        Err(e) => error_response(e.code(), e.to_string()),
    }
}

/// POST /api/numbers/classify - Classify an integer by sign and magnitude
pub async fn classify_number(
    State(state): State<FormsAppState>,
    ApiJson(req): ApiJson<ClassifyNumberRequest>,
) -> Json<ClassificationResponse> {
    let classification = state
        .classify_handler
        .handle(ClassifyNumberQuery { value: req.value });
    Json(classification.into())
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidArgument | ErrorCode::UnknownAction => StatusCode::BAD_REQUEST,
        ErrorCode::DivisionByZero => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn error_response(code: ErrorCode, message: String) -> Response {
    (status_for(code), Json(ErrorResponse::new(code, message))).into_response()
}
