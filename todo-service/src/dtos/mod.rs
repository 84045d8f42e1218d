//! Request DTOs for the todo API.

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_request_passes_validation() {
        let req = CreateTodoRequest {
            title: "Buy milk".to_string(),
            description: Some("2%".to_string()),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn empty_title_fails_validation() {
        let req = CreateTodoRequest {
            title: String::new(),
            description: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn description_is_optional() {
        let req: CreateTodoRequest =
            serde_json::from_str(r#"{"title": "Buy milk"}"#).expect("Failed to deserialize");
        assert_eq!(req.title, "Buy milk");
        assert!(req.description.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn missing_title_fails_deserialization() {
        let res = serde_json::from_str::<CreateTodoRequest>(r#"{"description": "2%"}"#);
        assert!(res.is_err());
    }
}
