//! Arithmetic on path segments and trigonometry on query parameters.

use axum::extract::{Path, Query};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};

const USAGE: &str = "\
Sensorhub

Calculator:
  GET /add/{a}/{b}   GET /sub/{a}/{b}   GET /mul/{a}/{b}   GET /div/{a}/{b}
  GET /trig/{sin|cos|tan}/?angle=<number>&unit=<degree|radian>
Greeting:
  GET /hello/{name}/   GET /hello/?name=<name>
Books:
  GET /books   POST /books (form: author, language, title)   GET|DELETE /books/{id}
Inventory:
  POST /products/add/   POST /storage/{handle}/add/   GET /storage/
Sensor catalog:
  /api/sensors/   /api/sensors/{name}/   /api/sensors/{name}/measurements/   /api/locations/
API documentation: /docs
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    fn label(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
        }
    }

    /// Human-readable result line; division by zero is reported, not computed.
    #[must_use]
    pub fn describe(self, a: f64, b: f64) -> String {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide if b == 0.0 => return "Division result: NaN (division by 0)".to_string(),
            Self::Divide => a / b,
        };
        format!("{} result: {}", self.label(), render_float(result))
    }
}

/// Shortest round-trip digits, always with a decimal point or an exponent:
/// `3.0`, `0.25`, `1e+16`, `1.5e-05`. Exponent form is used outside
/// `1e-4 <= |x| < 1e16`.
fn render_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{x:e}");
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }

    let plain = x.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TrigQuery {
    /// Angle to evaluate
    pub angle: Option<String>,
    /// `degree` or `radian` (default)
    pub unit: Option<String>,
}

/// Evaluate `func` at the given angle. Parameters are checked in the order
/// angle, unit, function.
///
/// # Errors
///
/// `BadRequest` for a missing or non-numeric angle or an unknown unit,
/// `NotFound` for an unknown function.
pub fn evaluate_trig(func: &str, query: &TrigQuery) -> AppResult<String> {
    let angle = query
        .angle
        .as_deref()
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|angle| angle.is_finite())
        .ok_or_else(|| {
            AppError::BadRequest("Invalid query parameter value(s) for 'angle'".to_string())
        })?;

    let radians = match query.unit.as_deref() {
        None | Some("radian") => angle,
        Some("degree") => angle.to_radians(),
        Some(_) => {
            return Err(AppError::BadRequest(
                "Invalid query parameter value for 'unit'".to_string(),
            ));
        }
    };

    match func {
        "sin" => Ok(format!("Sine result: {:.3}", radians.sin())),
        "cos" => Ok(format!("Cosine result: {:.3}", radians.cos())),
        "tan" => Ok(format!("Tangent result: {:.3}", radians.tan())),
        _ => Err(AppError::NotFound(format!("Operation not found: {func}"))),
    }
}

/// Usage summary
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Plain-text usage", body = String)),
    tag = "calculator"
)]
pub async fn index() -> &'static str {
    USAGE
}

/// Add two numbers
#[utoipa::path(
    get,
    path = "/add/{a}/{b}",
    params(("a" = f64, Path), ("b" = f64, Path)),
    responses(
        (status = 200, description = "Result line", body = String),
        (status = 400, description = "Not a number"),
    ),
    tag = "calculator"
)]
pub async fn add(Path((a, b)): Path<(f64, f64)>) -> String {
    Operation::Add.describe(a, b)
}

/// Subtract `b` from `a`
#[utoipa::path(
    get,
    path = "/sub/{a}/{b}",
    params(("a" = f64, Path), ("b" = f64, Path)),
    responses(
        (status = 200, description = "Result line", body = String),
        (status = 400, description = "Not a number"),
    ),
    tag = "calculator"
)]
pub async fn subtract(Path((a, b)): Path<(f64, f64)>) -> String {
    Operation::Subtract.describe(a, b)
}

/// Multiply two numbers
#[utoipa::path(
    get,
    path = "/mul/{a}/{b}",
    params(("a" = f64, Path), ("b" = f64, Path)),
    responses(
        (status = 200, description = "Result line", body = String),
        (status = 400, description = "Not a number"),
    ),
    tag = "calculator"
)]
pub async fn multiply(Path((a, b)): Path<(f64, f64)>) -> String {
    Operation::Multiply.describe(a, b)
}

/// Divide `a` by `b`
#[utoipa::path(
    get,
    path = "/div/{a}/{b}",
    params(("a" = f64, Path), ("b" = f64, Path)),
    responses(
        (status = 200, description = "Result line", body = String),
        (status = 400, description = "Not a number"),
    ),
    tag = "calculator"
)]
pub async fn divide(Path((a, b)): Path<(f64, f64)>) -> String {
    Operation::Divide.describe(a, b)
}

/// Sine, cosine or tangent of an angle
#[utoipa::path(
    get,
    path = "/trig/{func}/",
    params(
        ("func" = String, Path, description = "sin, cos or tan"),
        TrigQuery,
    ),
    responses(
        (status = 200, description = "Result rounded to three decimals", body = String),
        (status = 400, description = "Invalid angle or unit"),
        (status = 404, description = "Unknown function"),
    ),
    tag = "calculator"
)]
pub async fn trig(
    Path(func): Path<String>,
    Query(query): Query<TrigQuery>,
) -> AppResult<String> {
    evaluate_trig(&func, &query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(angle: Option<&str>, unit: Option<&str>) -> TrigQuery {
        TrigQuery {
            angle: angle.map(str::to_string),
            unit: unit.map(str::to_string),
        }
    }

    #[test]
    fn arithmetic_results_are_labelled() {
        assert_eq!(Operation::Add.describe(1.5, 2.0), "Addition result: 3.5");
        assert_eq!(Operation::Subtract.describe(1.0, 3.0), "Subtraction result: -2.0");
        assert_eq!(Operation::Multiply.describe(2.5, 4.0), "Multiplication result: 10.0");
        assert_eq!(Operation::Divide.describe(1.0, 4.0), "Division result: 0.25");
        assert_eq!(Operation::Add.describe(1.0, 2.0), "Addition result: 3.0");
        assert_eq!(Operation::Subtract.describe(5.0, 5.0), "Subtraction result: 0.0");
    }

    #[test]
    fn floats_render_with_point_or_exponent() {
        assert_eq!(render_float(2.0), "2.0");
        assert_eq!(render_float(-0.0), "-0.0");
        assert_eq!(render_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(render_float(1e15), "1000000000000000.0");
        assert_eq!(render_float(1e16), "1e+16");
        assert_eq!(render_float(1.5e-5), "1.5e-05");
        assert_eq!(render_float(0.0001), "0.0001");
        assert_eq!(render_float(-2.5e300), "-2.5e+300");
        assert_eq!(render_float(f64::INFINITY), "inf");
        assert_eq!(render_float(f64::NAN), "nan");
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(
            Operation::Divide.describe(1.0, 0.0),
            "Division result: NaN (division by 0)"
        );
    }

    #[test]
    fn trig_defaults_to_radians() {
        let result = evaluate_trig("cos", &query(Some("0"), None)).unwrap();
        assert_eq!(result, "Cosine result: 1.000");
    }

    #[test]
    fn trig_converts_degrees() {
        let result = evaluate_trig("sin", &query(Some("90"), Some("degree"))).unwrap();
        assert_eq!(result, "Sine result: 1.000");
    }

    #[test]
    fn trig_rejects_bad_angle_before_unit() {
        let err = evaluate_trig("sin", &query(Some("abc"), Some("furlong"))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg.contains("'angle'")));

        let err = evaluate_trig("sin", &query(None, None)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn trig_rejects_unknown_unit() {
        let err = evaluate_trig("tan", &query(Some("1"), Some("gradian"))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg.contains("'unit'")));
    }

    #[test]
    fn unknown_function_is_not_found() {
        let err = evaluate_trig("sec", &query(Some("1"), None)).unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "Operation not found: sec"));
    }
}
