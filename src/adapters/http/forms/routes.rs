//! Route configuration for the form page and its JSON API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    classify_number, compute_arithmetic, cycle_styles, get_palette, greet, show_page,
    submit_form, FormsAppState,
};

/// Creates the forms router.
///
/// Routes:
/// - `GET /` - Render the form page
/// - `POST /` - Submit any form on the page (selected by `boton`)
/// - `GET /api/styles/palette` - Palette in rotation order
/// - `POST /api/styles/cycle` - Style cycler
/// - `POST /api/arithmetic` - Calculator
/// - `POST /api/greeting` - Greeter
/// - `POST /api/numbers/classify` - Number classifier
pub fn forms_router() -> Router<FormsAppState> {
    Router::new()
        .route("/", get(show_page).post(submit_form))
        .route("/api/styles/palette", get(get_palette))
        .route("/api/styles/cycle", post(cycle_styles))
        .route("/api/arithmetic", post(compute_arithmetic))
        .route("/api/greeting", post(greet))
        .route("/api/numbers/classify", post(classify_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormsConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        forms_router().with_state(FormsAppState::from_config(&FormsConfig::default()))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn forms_router_serves_page() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("<form method=\"post\">"));
    }

    #[tokio::test]
    async fn submit_cycle_renders_styled_paragraphs() {
        let response = app()
            .oneshot(form_post("boton=Enviar&mensaje=Hola&ciclos=3"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<p class=\"text-primary\">Hola</p>"));
        assert!(html.contains("<p class=\"text-secondary\">Hola</p>"));
        assert!(html.contains("<p class=\"text-warning\">Hola</p>"));
        assert!(!html.contains("<p class=\"text-danger\">Hola</p>"));
    }

    #[tokio::test]
    async fn submit_calculation_by_zero_is_unprocessable() {
        let response = app()
            .oneshot(form_post("boton=Calcular&val1=1&val2=0"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let html = body_string(response).await;
        assert!(html.contains("Division by zero"));
        assert!(!html.contains("<li>División:"));
    }

    #[tokio::test]
    async fn submit_unknown_button_is_bad_request() {
        let response = app().oneshot(form_post("boton=Borrar")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn palette_endpoint_returns_json() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/styles/palette")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["styles"].as_array().unwrap().len(), 9);
        assert_eq!(json["styles"][0]["name"], "primary");
    }
}
