//! HTTP request/response shapes handed over by a host, and their
//! translation to and from the greeting core.

use crate::core::{GreetingResult, NameInput};
use crate::utils::error::{FunctionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Query parameter the greeting endpoint reads.
pub const NAME_PARAM: &str = "name";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl FromStr for Method {
    type Err = FunctionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            _ => Err(FunctionError::UnsupportedMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    pub const METHOD_NOT_ALLOWED: StatusCode = StatusCode(405);

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    pub fn reason(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            400 => "Bad Request",
            405 => "Method Not Allowed",
            _ => "",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.reason())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub method: Method,
    #[serde(default)]
    pub query: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            query: HashMap::new(),
            body: None,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    pub fn post() -> Self {
        Self::new(Method::Post)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn name_input(&self) -> NameInput {
        NameInput::new(self.query.get(NAME_PARAM).cloned(), self.body.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn method_not_allowed(method: &str) -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            FunctionError::UnsupportedMethod {
                method: method.to_string(),
            }
            .to_string(),
        )
    }
}

impl From<GreetingResult> for HttpResponse {
    fn from(result: GreetingResult) -> Self {
        match result {
            GreetingResult::Ok(text) => HttpResponse::new(StatusCode::OK, text),
            GreetingResult::ValidationError(message) => {
                HttpResponse::new(StatusCode::BAD_REQUEST, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::MISSING_NAME_MESSAGE;

    #[test]
    fn test_method_parsing() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("POST".parse::<Method>().unwrap(), Method::Post);
        assert!("DELETE".parse::<Method>().is_err());
    }

    #[test]
    fn test_name_input_reads_name_param() {
        let request = HttpRequest::get()
            .with_query("name", "Query")
            .with_query("other", "x");
        assert_eq!(request.name_input(), NameInput::new(Some("Query".into()), None));

        let request = HttpRequest::post().with_body("Body");
        assert_eq!(request.name_input(), NameInput::new(None, Some("Body".into())));
    }

    #[test]
    fn test_response_from_result() {
        let ok = HttpResponse::from(GreetingResult::Ok("Hello, x".into()));
        assert_eq!(ok.status, StatusCode::OK);
        assert_eq!(ok.body, "Hello, x");

        let bad = HttpResponse::from(GreetingResult::ValidationError(
            MISSING_NAME_MESSAGE.to_string(),
        ));
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);
        assert_eq!(bad.body, MISSING_NAME_MESSAGE);
        assert_eq!(bad.status.to_string(), "400 Bad Request");
    }

    #[test]
    fn test_unsupported_method_response() {
        let method = "DELETE";
        assert!(method.parse::<Method>().is_err());

        let response = HttpResponse::method_not_allowed(method);
        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.status.to_string(), "405 Method Not Allowed");
        assert!(!response.status.is_success());
        assert_eq!(response.body, "Unsupported HTTP method: DELETE");
    }

    #[test]
    fn test_request_deserializes_without_optional_fields() {
        let request: HttpRequest = serde_json::from_str(r#"{"method":"GET"}"#).unwrap();
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }
}
