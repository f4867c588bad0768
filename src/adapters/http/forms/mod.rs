//! HTTP adapter for the form page and the JSON API over the same components.

mod dto;
mod handlers;
mod render;
mod routes;

pub use dto::{
    ArithmeticRequest, ArithmeticResponse, ClassificationResponse, ClassifyNumberRequest,
    CycleStylesRequest, CycleStylesResponse, ErrorResponse, FormAction, FormSubmission,
    GreetingRequest, GreetingResponse, HealthResponse, PaletteEntry, PaletteResponse,
    StyledLineResponse,
};
pub use handlers::{ApiJson, FormsAppState};
pub use render::{html_escape, render_page, Outcome, PageSettings};
pub use routes::forms_router;
