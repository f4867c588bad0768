//! HTTP DTOs for the form page and its JSON API.
//!
//! Form submissions arrive as untyped text; the conversions here are where
//! that text becomes typed commands.

use serde::{Deserialize, Serialize};

use crate::application::{
    ClassifyNumberQuery, ComputeArithmeticCommand, CycleStylesCommand, GreetCommand,
};
use crate::domain::arithmetic::{ArithmeticError, ArithmeticResult};
use crate::domain::classification::{Magnitude, NumberClassification, Sign};
use crate::domain::foundation::{
    parse_integer, parse_number, require_field, ErrorCode, ValidationError,
};
use crate::domain::greeting::{Greeting, GreetingError};
use crate::domain::styling::{StyleError, StyleName, StyledLine, PALETTE};

// ════════════════════════════════════════════════════════════════════════════
// Form page
// ════════════════════════════════════════════════════════════════════════════

/// Which form on the page was submitted, chosen by the `boton` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    CycleStyles,
    Calculate,
    Greet,
    Classify,
}

impl FormAction {
    /// Button label that submits this form.
    pub fn button_label(&self) -> &'static str {
        match self {
            FormAction::CycleStyles => "Enviar",
            FormAction::Calculate => "Calcular",
            FormAction::Greet => "Saludar",
            FormAction::Classify => "Clasificar",
        }
    }

    pub fn from_button(label: &str) -> Option<Self> {
        match label.trim() {
            "Enviar" => Some(FormAction::CycleStyles),
            "Calcular" => Some(FormAction::Calculate),
            "Saludar" => Some(FormAction::Greet),
            "Clasificar" => Some(FormAction::Classify),
            _ => None,
        }
    }
}

/// Raw `application/x-www-form-urlencoded` body of `POST /`.
///
/// Only the fields of the submitted form are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSubmission {
    pub boton: Option<String>,
    pub mensaje: Option<String>,
    pub ciclos: Option<String>,
    pub val1: Option<String>,
    pub val2: Option<String>,
    pub nombre: Option<String>,
    pub numero: Option<String>,
}

impl FormSubmission {
    /// Resolves the submitted button, if it names a known form.
    pub fn action(&self) -> Option<FormAction> {
        self.boton.as_deref().and_then(FormAction::from_button)
    }

    pub fn to_cycle_command(&self) -> Result<CycleStylesCommand, StyleError> {
        Ok(CycleStylesCommand {
            message: require_field("mensaje", self.mensaje.as_deref())?.to_string(),
            repeat_count: parse_integer("ciclos", self.ciclos.as_deref())?,
        })
    }

    pub fn to_compute_command(&self) -> Result<ComputeArithmeticCommand, ArithmeticError> {
        Ok(ComputeArithmeticCommand {
            a: parse_number("val1", self.val1.as_deref())?,
            b: parse_number("val2", self.val2.as_deref())?,
        })
    }

    pub fn to_greet_command(&self) -> Result<GreetCommand, GreetingError> {
        Ok(GreetCommand {
            name: require_field("nombre", self.nombre.as_deref())?.to_string(),
        })
    }

    pub fn to_classify_query(&self) -> Result<ClassifyNumberQuery, ValidationError> {
        Ok(ClassifyNumberQuery {
            value: parse_integer("numero", self.numero.as_deref())?,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// JSON request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to cycle a message through the palette.
#[derive(Debug, Clone, Deserialize)]
pub struct CycleStylesRequest {
    #[serde(default)]
    pub message: String,
    pub repeat_count: i64,
}

impl From<CycleStylesRequest> for CycleStylesCommand {
    fn from(req: CycleStylesRequest) -> Self {
        Self {
            message: req.message,
            repeat_count: req.repeat_count,
        }
    }
}

/// Request to compute the four operations.
#[derive(Debug, Clone, Deserialize)]
pub struct ArithmeticRequest {
    pub a: f64,
    pub b: f64,
}

/// Request to greet a name.
#[derive(Debug, Clone, Deserialize)]
pub struct GreetingRequest {
    pub name: String,
}

/// Request to classify an integer.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyNumberRequest {
    pub value: i64,
}

// ════════════════════════════════════════════════════════════════════════════
// JSON response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One palette entry.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteEntry {
    pub index: usize,
    pub name: StyleName,
    pub css_class: &'static str,
}

/// The ordered palette.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteResponse {
    pub styles: Vec<PaletteEntry>,
}

impl PaletteResponse {
    pub fn current() -> Self {
        Self {
            styles: PALETTE
                .iter()
                .map(|style| PaletteEntry {
                    index: style.index(),
                    name: *style,
                    css_class: style.css_class(),
                })
                .collect(),
        }
    }
}

/// One styled line.
#[derive(Debug, Clone, Serialize)]
pub struct StyledLineResponse {
    pub text: String,
    pub style: StyleName,
    pub css_class: &'static str,
}

impl From<StyledLine> for StyledLineResponse {
    fn from(line: StyledLine) -> Self {
        Self {
            css_class: line.style.css_class(),
            style: line.style,
            text: line.text,
        }
    }
}

/// Result of a style cycle.
#[derive(Debug, Clone, Serialize)]
pub struct CycleStylesResponse {
    pub count: usize,
    pub lines: Vec<StyledLineResponse>,
}

impl From<Vec<StyledLine>> for CycleStylesResponse {
    fn from(lines: Vec<StyledLine>) -> Self {
        Self {
            count: lines.len(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// Results of the four operations.
#[derive(Debug, Clone, Serialize)]
pub struct ArithmeticResponse {
    pub sum: f64,
    pub difference: f64,
    pub quotient: f64,
    pub product: f64,
}

impl From<ArithmeticResult> for ArithmeticResponse {
    fn from(result: ArithmeticResult) -> Self {
        Self {
            sum: result.sum,
            difference: result.difference,
            quotient: result.quotient,
            product: result.product,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GreetingResponse {
    pub name: String,
    pub text: String,
}

impl From<Greeting> for GreetingResponse {
    fn from(greeting: Greeting) -> Self {
        Self {
            name: greeting.name,
            text: greeting.text,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResponse {
    pub value: i64,
    pub sign: Sign,
    pub magnitude: Magnitude,
    pub sign_label: &'static str,
    pub magnitude_label: &'static str,
}

impl From<NumberClassification> for ClassificationResponse {
    fn from(c: NumberClassification) -> Self {
        Self {
            value: c.value,
            sign: c.sign,
            magnitude: c.magnitude,
            sign_label: c.sign.label(),
            magnitude_label: c.magnitude.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}
