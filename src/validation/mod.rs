//! Validation Module
//!
//! Declarative per-field request validation. A route declares its rules as
//! an ordered array of [`Rule`]s — a field name, a message, and a pure
//! predicate — and calls [`validate`] before doing anything else. Every
//! rule is evaluated (no short-circuiting across fields) and the failures
//! are aggregated into a single `ApiError::Validation`, which renders as
//! HTTP 400 with an `{"errors": [...]}` body.
//!
//! Rules are independent: evaluation order never changes the outcome, only
//! the order failures are reported in.
//!
//! Request bodies enter through the [`JsonBody`] extractor, which maps
//! parse failures into the API's JSON error shape instead of the
//! framework's plain-text rejection.

use std::sync::OnceLock;

use axum::extract::{FromRequest, Request};
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, FieldError};

/// JSON body extractor for request types.
///
/// Wraps `axum::Json` so that an unparseable body answers 400
/// `{"msg": "Invalid request body"}` rather than the framework's
/// plain-text 422. Field-level validation still happens afterwards via
/// [`validate`]; this only covers syntax.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::warn!("rejected request body: {}", rejection.body_text());
                Err(ApiError::MalformedBody)
            }
        }
    }
}

/// A single declarative validation rule for a request type `T`.
///
/// `check` is a pure predicate returning `true` when the field passes.
/// Plain function pointers keep rule arrays `const`-friendly and make it
/// obvious a rule cannot carry hidden state.
pub struct Rule<T> {
    /// Name of the request field this rule covers
    pub param: &'static str,
    /// Message reported when the rule fails
    pub msg: &'static str,
    /// Predicate: `true` means the field is valid
    pub check: fn(&T) -> bool,
}

/// Evaluate every rule against `input`, aggregating failures.
///
/// Returns `Ok(())` when all rules pass, otherwise
/// `Err(ApiError::Validation)` carrying one [`FieldError`] per failed
/// rule, in rule order.
pub fn validate<T>(input: &T, rules: &[Rule<T>]) -> Result<(), ApiError> {
    let errors: Vec<FieldError> = rules
        .iter()
        .filter(|rule| !(rule.check)(input))
        .map(|rule| FieldError {
            msg: rule.msg.to_string(),
            param: Some(rule.param),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

/// Field is present and non-blank
pub fn required(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Field is present (blank allowed)
pub fn exists<T: ?Sized>(value: Option<&T>) -> bool {
    value.is_some()
}

/// Field is present and at least `min` characters long
pub fn min_length(value: Option<&str>, min: usize) -> bool {
    value.is_some_and(|v| v.chars().count() >= min)
}

/// Field is present and formatted like an email address
pub fn is_email(value: Option<&str>) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    value.is_some_and(|v| regex.is_match(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Input {
        name: Option<String>,
        email: Option<String>,
    }

    fn rules() -> [Rule<Input>; 2] {
        [
            Rule {
                param: "name",
                msg: "Name is required",
                check: |i| required(i.name.as_deref()),
            },
            Rule {
                param: "email",
                msg: "Please enter valid email",
                check: |i| is_email(i.email.as_deref()),
            },
        ]
    }

    #[test]
    fn all_failures_are_aggregated_in_rule_order() {
        let err = validate(&Input::default(), &rules()).unwrap_err();
        let ApiError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].param, Some("name"));
        assert_eq!(errors[1].param, Some("email"));
    }

    #[test]
    fn passing_input_yields_ok() {
        let input = Input {
            name: Some("A".to_string()),
            email: Some("a@x.com".to_string()),
        };
        assert!(validate(&input, &rules()).is_ok());
    }

    #[test]
    fn required_rejects_blank() {
        assert!(!required(None));
        assert!(!required(Some("")));
        assert!(!required(Some("   ")));
        assert!(required(Some("x")));
    }

    #[test]
    fn exists_allows_blank() {
        assert!(!exists(None::<&str>));
        assert!(exists(Some("")));
    }

    #[test]
    fn min_length_counts_chars() {
        assert!(!min_length(None, 6));
        assert!(!min_length(Some("short"), 6));
        assert!(min_length(Some("secret1"), 6));
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn json_body_deserializes_valid_input() {
        #[derive(serde::Deserialize)]
        struct Target {
            name: String,
        }

        let request = json_request(r#"{"name": "A"}"#);
        let JsonBody(target) = JsonBody::<Target>::from_request(request, &())
            .await
            .unwrap();
        assert_eq!(target.name, "A");
    }

    #[tokio::test]
    async fn json_body_maps_parse_failure_to_api_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Target {
            #[allow(dead_code)]
            name: Option<String>,
        }

        let request = json_request("{ not json");
        let err = JsonBody::<Target>::from_request(request, &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MalformedBody));
    }

    #[test]
    fn email_format() {
        assert!(is_email(Some("user@example.com")));
        assert!(is_email(Some("test.user+tag@domain.co.uk")));
        assert!(!is_email(Some("invalid.email")));
        assert!(!is_email(Some("@domain.com")));
        assert!(!is_email(Some("user@")));
        assert!(!is_email(None));
    }
}
