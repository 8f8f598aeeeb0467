//! Wire contract and endpoint for the contact form.
//!
//! The shared types compile on every target. The axum endpoint only exists
//! server-side; the browser talks to it through [`send_contact`]. No mail
//! service is wired up yet, so the endpoint validates, logs and answers
//! after a short simulated processing delay.

use serde::{Deserialize, Serialize};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Body of `POST /api/contact`. Absent fields deserialize to empty strings
/// and fail the required-fields check instead of the whole request parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Successful endpoint reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReply {
    pub success: bool,
    pub message: String,
}

/// Error payload for rejected submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Posts the form to the endpoint and parses the reply. Anything that is not
/// a 2xx with a well-formed body comes back as an error; the caller decides
/// how to surface it.
pub async fn send_contact(request: &ContactRequest) -> Result<ContactReply, reqwest::Error> {
    let response = reqwest::Client::new()
        .post(endpoint_url())
        .json(request)
        .send()
        .await?
        .error_for_status()?;
    response.json::<ContactReply>().await
}

/// reqwest only accepts absolute URLs, so browser calls anchor the endpoint
/// to the page origin.
#[cfg(feature = "hydrate")]
fn endpoint_url() -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}{CONTACT_ENDPOINT}")
}

#[cfg(not(feature = "hydrate"))]
fn endpoint_url() -> String {
    CONTACT_ENDPOINT.to_string()
}

#[cfg(feature = "ssr")]
pub use endpoint::{router, submit, validate, ContactRejection};

#[cfg(feature = "ssr")]
mod endpoint {
    use std::sync::LazyLock;
    use std::time::Duration;

    use axum::response::{IntoResponse, Response};
    use axum::routing::post;
    use axum::{Json, Router};
    use http::StatusCode;
    use regex::Regex;
    use thiserror::Error;
    use tracing::{info, warn};

    use super::{ApiError, ContactReply, ContactRequest, SUCCESS_MESSAGE};

    /// Loose shape check only: something, an `@`, something, a dot, something.
    static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email pattern should compile")
    });

    /// Stands in for the latency of a real mail integration.
    const PROCESSING_DELAY: Duration = Duration::from_millis(1000);

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
    pub enum ContactRejection {
        #[error("All fields are required")]
        MissingFields,
        #[error("Invalid email format")]
        InvalidEmail,
        #[error("Internal server error")]
        Internal,
    }

    impl ContactRejection {
        fn status(self) -> StatusCode {
            match self {
                ContactRejection::MissingFields | ContactRejection::InvalidEmail => {
                    StatusCode::BAD_REQUEST
                }
                ContactRejection::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    impl IntoResponse for ContactRejection {
        fn into_response(self) -> Response {
            let body = Json(ApiError { error: self.to_string() });
            (self.status(), body).into_response()
        }
    }

    pub fn validate(request: &ContactRequest) -> Result<(), ContactRejection> {
        if request.name.is_empty() || request.email.is_empty() || request.message.is_empty() {
            return Err(ContactRejection::MissingFields);
        }
        if !EMAIL_RE.is_match(&request.email) {
            return Err(ContactRejection::InvalidEmail);
        }
        Ok(())
    }

    pub async fn submit(
        Json(request): Json<ContactRequest>,
    ) -> Result<Json<ContactReply>, ContactRejection> {
        info!(name = %request.name, email = %request.email, "received contact form data");

        if let Err(rejection) = validate(&request) {
            warn!(%rejection, "contact validation failed");
            return Err(rejection);
        }

        info!("validation passed, processing message");
        tokio::time::sleep(PROCESSING_DELAY).await;
        info!(message_len = request.message.len(), "contact form submission processed");

        Ok(Json(ContactReply {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }))
    }

    pub fn router() -> Router {
        Router::new().route(super::CONTACT_ENDPOINT, post(submit))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn request(name: &str, email: &str, message: &str) -> ContactRequest {
            ContactRequest {
                name: name.to_string(),
                email: email.to_string(),
                message: message.to_string(),
            }
        }

        #[test]
        fn complete_submissions_pass() {
            assert_eq!(validate(&request("Neo", "neo@matrix.io", "wake up")), Ok(()));
        }

        #[test]
        fn any_empty_field_is_missing() {
            let cases = [
                request("", "neo@matrix.io", "wake up"),
                request("Neo", "", "wake up"),
                request("Neo", "neo@matrix.io", ""),
            ];
            for case in cases {
                assert_eq!(validate(&case), Err(ContactRejection::MissingFields));
            }
        }

        #[test]
        fn email_must_look_like_an_address() {
            let bad = ["neo.matrix.io", "neo@matrixio", "neo @matrix.io", "neo@mat rix.io", "@matrix.io"];
            for email in bad {
                assert_eq!(
                    validate(&request("Neo", email, "hi")),
                    Err(ContactRejection::InvalidEmail),
                    "{email}"
                );
            }
            assert_eq!(validate(&request("Neo", "n.e.o@deep.matrix.io", "hi")), Ok(()));
        }

        #[test]
        fn missing_fields_win_over_bad_email() {
            assert_eq!(
                validate(&request("", "not-an-email", "hi")),
                Err(ContactRejection::MissingFields)
            );
        }

        #[test]
        fn rejections_map_to_http_statuses() {
            assert_eq!(ContactRejection::MissingFields.status(), StatusCode::BAD_REQUEST);
            assert_eq!(ContactRejection::InvalidEmail.status(), StatusCode::BAD_REQUEST);
            assert_eq!(ContactRejection::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }

        #[test]
        fn rejection_messages_match_the_wire_contract() {
            assert_eq!(ContactRejection::MissingFields.to_string(), "All fields are required");
            assert_eq!(ContactRejection::InvalidEmail.to_string(), "Invalid email format");
            assert_eq!(ContactRejection::Internal.to_string(), "Internal server error");
        }

        #[test]
        fn absent_body_fields_become_empty_strings() {
            let parsed: ContactRequest = serde_json::from_str(r#"{"name":"Neo"}"#).unwrap();
            assert_eq!(parsed.name, "Neo");
            assert_eq!(parsed.email, "");
            assert_eq!(parsed.message, "");
            assert_eq!(validate(&parsed), Err(ContactRejection::MissingFields));
        }
    }
}
