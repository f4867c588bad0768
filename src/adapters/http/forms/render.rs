//! Server-side HTML rendering of the form page.

use crate::domain::arithmetic::ArithmeticResult;
use crate::domain::classification::NumberClassification;
use crate::domain::foundation::ErrorCode;
use crate::domain::greeting::Greeting;
use crate::domain::styling::StyledLine;

use super::dto::FormAction;

/// Static settings for the rendered page.
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub title: String,
    pub stylesheet_url: String,
    pub max_repeat_count: u32,
}

/// What the last submission produced.
#[derive(Debug, Clone)]
pub enum Outcome {
    StyledLines(Vec<StyledLine>),
    Arithmetic(ArithmeticResult),
    Greeting(Greeting),
    Classification(NumberClassification),
    /// The request was rejected. `action` is None when the button was unknown.
    Rejected {
        action: Option<FormAction>,
        code: ErrorCode,
        message: String,
    },
}

impl Outcome {
    pub fn rejected(action: Option<FormAction>, code: ErrorCode, message: impl Into<String>) -> Self {
        Outcome::Rejected {
            action,
            code,
            message: message.into(),
        }
    }

    fn action(&self) -> Option<FormAction> {
        match self {
            Outcome::StyledLines(_) => Some(FormAction::CycleStyles),
            Outcome::Arithmetic(_) => Some(FormAction::Calculate),
            Outcome::Greeting(_) => Some(FormAction::Greet),
            Outcome::Classification(_) => Some(FormAction::Classify),
            Outcome::Rejected { action, .. } => *action,
        }
    }
}

/// Renders the full page, placing `outcome` under the form that produced it.
pub fn render_page(settings: &PageSettings, outcome: Option<&Outcome>) -> String {
    let for_section = |action: FormAction| outcome.filter(|o| o.action() == Some(action));

    let mut body = String::new();
    if let Some(Outcome::Rejected {
        action: None,
        code,
        message,
    }) = outcome
    {
        body.push_str(&render_alert(*code, message));
    }
    body.push_str(&render_styles_section(settings, for_section(FormAction::CycleStyles)));
    body.push_str(&render_arithmetic_section(for_section(FormAction::Calculate)));
    body.push_str(&render_greeting_section(for_section(FormAction::Greet)));
    body.push_str(&render_classification_section(for_section(FormAction::Classify)));

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link href="{stylesheet}" rel="stylesheet">
    <title>{title}</title>
</head>
<body>
    <div class="container">
        <h1 class="display-3 text-center">{title}</h1>
{body}
    </div>
</body>
</html>"#,
        stylesheet = html_escape(&settings.stylesheet_url),
        title = html_escape(&settings.title),
        body = body
    )
}

fn render_styles_section(settings: &PageSettings, outcome: Option<&Outcome>) -> String {
    let results: String = match outcome {
        Some(Outcome::StyledLines(lines)) => lines
            .iter()
            .map(|line| {
                format!(
                    "        <p class=\"{}\">{}</p>\n",
                    line.style.css_class(),
                    html_escape(&line.text)
                )
            })
            .collect(),
        Some(Outcome::Rejected { code, message, .. }) => render_alert(*code, message),
        _ => String::new(),
    };

    format!(
        r#"        <section id="estilos">
        <h2 class="display-6 text-center">Ejecución de Ciclo Para mostrar un mensaje en varios estilos</h2>
        <form method="post">
            <div class="form-floating mb-3">
                <input type="text" class="form-control" name="mensaje" id="mensaje" placeholder="Coloque su Mensaje Aqui"/>
                <label for="mensaje">Coloque su Mensaje Aqui</label>
            </div>
            <div class="form-floating mb-3">
                <input type="number" class="form-control" name="ciclos" id="ciclos" min="0" max="{max}" placeholder="Coloque un número"/>
                <label for="ciclos">Coloque un número</label>
            </div>
            <div>
                <input type="submit" class="btn btn-primary" name="boton" value="{button}"/>
            </div>
        </form>
{results}        </section>
"#,
        max = settings.max_repeat_count,
        button = FormAction::CycleStyles.button_label(),
        results = results
    )
}

fn render_arithmetic_section(outcome: Option<&Outcome>) -> String {
    let results: String = match outcome {
        Some(Outcome::Arithmetic(r)) => format!(
            r#"        <p>Los números capturados generan los siguientes resultados</p>
        <ul>
            <li>Suma: {}</li>
            <li>Resta: {}</li>
            <li>División: {}</li>
            <li>Multiplicación: {}</li>
        </ul>
"#,
            r.sum, r.difference, r.quotient, r.product
        ),
        Some(Outcome::Rejected { code, message, .. }) => render_alert(*code, message),
        _ => String::new(),
    };

    format!(
        r#"        <section id="calculadora">
        <h2 class="display-5">Segunda Parte de Demostración</h2>
        <form method="post">
            <div class="form-floating mb-3">
                <input type="number" step="any" class="form-control" name="val1" id="val1" placeholder="Escriba el Valor 1"/>
                <label for="val1">Valor 1</label>
            </div>
            <div class="form-floating mb-3">
                <input type="number" step="any" class="form-control" name="val2" id="val2" placeholder="Escriba el Valor 2"/>
                <label for="val2">Valor 2</label>
            </div>
            <div>
                <input type="submit" class="btn btn-primary" name="boton" value="{button}"/>
            </div>
        </form>
{results}        </section>
"#,
        button = FormAction::Calculate.button_label(),
        results = results
    )
}

fn render_greeting_section(outcome: Option<&Outcome>) -> String {
    let results: String = match outcome {
        Some(Outcome::Greeting(greeting)) => {
            format!("        <p>{}</p>\n", html_escape(&greeting.text))
        }
        Some(Outcome::Rejected { code, message, .. }) => render_alert(*code, message),
        _ => String::new(),
    };

    format!(
        r#"        <section id="saludo">
        <h2 class="display-5">Método Post en Formulario</h2>
        <form method="post">
            <div class="form-floating mb-3">
                <input type="text" class="form-control" name="nombre" id="nombre" placeholder="Nombre"/>
                <label for="nombre">Nombre</label>
            </div>
            <div>
                <input type="submit" class="btn btn-primary" name="boton" value="{button}"/>
            </div>
        </form>
{results}        </section>
"#,
        button = FormAction::Greet.button_label(),
        results = results
    )
}

fn render_classification_section(outcome: Option<&Outcome>) -> String {
    let results: String = match outcome {
        Some(Outcome::Classification(c)) => format!(
            "        <p>Respuesta: {}</p>\n        <p>{}</p>\n",
            c.sign.label(),
            c.magnitude.label()
        ),
        Some(Outcome::Rejected { code, message, .. }) => render_alert(*code, message),
        _ => String::new(),
    };

    format!(
        r#"        <section id="clasificacion">
        <h2 class="display-5">Sentencia IF</h2>
        <form method="post">
            <div class="form-floating mb-3">
                <input type="number" class="form-control" name="numero" id="numero" placeholder="Dato"/>
                <label for="numero">Dato</label>
            </div>
            <div>
                <input type="submit" class="btn btn-primary" name="boton" value="{button}"/>
            </div>
        </form>
{results}        </section>
"#,
        button = FormAction::Classify.button_label(),
        results = results
    )
}

fn render_alert(code: ErrorCode, message: &str) -> String {
    format!(
        "        <div class=\"alert alert-danger\" role=\"alert\" data-error-code=\"{}\">{}</div>\n",
        code,
        html_escape(message)
    )
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::styling::StyleName;

    fn settings() -> PageSettings {
        PageSettings {
            title: "Demo".to_string(),
            stylesheet_url: "https://example.com/bootstrap.css".to_string(),
            max_repeat_count: 100,
        }
    }

    #[test]
    fn empty_page_contains_all_four_forms() {
        let html = render_page(&settings(), None);
        assert!(html.contains("value=\"Enviar\""));
        assert!(html.contains("value=\"Calcular\""));
        assert!(html.contains("value=\"Saludar\""));
        assert!(html.contains("value=\"Clasificar\""));
        assert!(!html.contains("alert-danger"));
    }

    #[test]
    fn styled_lines_render_in_order_with_classes() {
        let outcome = Outcome::StyledLines(vec![
            StyledLine::new("Hola", StyleName::Primary),
            StyledLine::new("Hola", StyleName::Secondary),
        ]);
        let html = render_page(&settings(), Some(&outcome));
        let first = html.find("<p class=\"text-primary\">Hola</p>").unwrap();
        let second = html.find("<p class=\"text-secondary\">Hola</p>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn arithmetic_results_render_as_labelled_list() {
        let outcome = Outcome::Arithmetic(ArithmeticResult {
            sum: 15.0,
            difference: 5.0,
            quotient: 2.0,
            product: 50.0,
        });
        let html = render_page(&settings(), Some(&outcome));
        assert!(html.contains("<li>Suma: 15</li>"));
        assert!(html.contains("<li>Resta: 5</li>"));
        assert!(html.contains("<li>División: 2</li>"));
        assert!(html.contains("<li>Multiplicación: 50</li>"));
    }

    #[test]
    fn user_text_is_escaped() {
        let outcome = Outcome::StyledLines(vec![StyledLine::new(
            "<script>alert(1)</script>",
            StyleName::Info,
        )]);
        let html = render_page(&settings(), Some(&outcome));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn rejection_renders_alert_in_its_section() {
        let outcome = Outcome::rejected(
            Some(FormAction::Calculate),
            ErrorCode::DivisionByZero,
            "Division by zero",
        );
        let html = render_page(&settings(), Some(&outcome));
        let section = html.find("id=\"calculadora\"").unwrap();
        let alert = html.find("Division by zero").unwrap();
        assert!(alert > section);
        assert!(html.contains("data-error-code=\"DIVISION_BY_ZERO\""));
        assert!(html.find("id=\"saludo\"").unwrap() > alert);
    }

    #[test]
    fn unknown_action_renders_alert_at_top() {
        let outcome = Outcome::rejected(None, ErrorCode::UnknownAction, "Unknown form action");
        let html = render_page(&settings(), Some(&outcome));
        let alert = html.find("Unknown form action").unwrap();
        assert!(alert < html.find("id=\"estilos\"").unwrap());
    }

    #[test]
    fn html_escape_replaces_special_characters() {
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"x\" 'y'"), "&quot;x&quot; &#39;y&#39;");
    }
}
