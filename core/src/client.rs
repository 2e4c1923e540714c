//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each CRUD operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. Every successful response from the server is a
//! 200, so all parsers share one status check.
//!
//! Ids are percent-encoded as a single path segment; the server decodes them.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, Todo, TodoFields};

const OK: u16 = 200;
const NOT_FOUND: u16 = 404;

/// Characters escaped in a path segment (RFC 3986), plus `/` and `%`.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, self.collection_path())
    }

    pub fn build_get_todo(&self, id: &str) -> HttpRequest {
        self.bare(HttpMethod::Get, self.item_path(id))
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, self.collection_path(), input)
    }

    pub fn build_update_todo(&self, id: &str, input: &TodoFields) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, self.item_path(id), input)
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        self.bare(HttpMethod::Delete, self.item_path(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_ok(response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_ok(response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_ok(response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_ok(response)
    }

    /// Returns the todo that was removed.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_ok(response)
    }

    fn collection_path(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, utf8_percent_encode(id, PATH_SEGMENT))
    }

    fn bare(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn parse_ok<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-200 status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        OK => Ok(()),
        NOT_FOUND => Err(ApiError::NotFound),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_targets_root() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_puts_id_in_path() {
        let req = client().build_get_todo("2");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/2");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_sends_camel_case_json() {
        let input = NewTodo {
            id: Some("5".to_string()),
            name: "New Todo".to_string(),
            what_to_do: "This is a new Todo".to_string(),
            completed: true,
        };
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], "5");
        assert_eq!(body["whatToDo"], "This is a new Todo");
        assert_eq!(body["completed"], true);
    }

    #[test]
    fn build_create_todo_omits_missing_id() {
        let input = NewTodo {
            id: None,
            name: "Anonymous".to_string(),
            what_to_do: String::new(),
            completed: false,
        };
        let req = client().build_create_todo(&input).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_todo_sends_every_field() {
        let input = TodoFields {
            name: "updated todo".to_string(),
            what_to_do: "We updated the todo item".to_string(),
            completed: true,
        };
        let req = client().build_update_todo("1", &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/1");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "updated todo");
        assert_eq!(body["whatToDo"], "We updated the todo item");
        assert_eq!(body["completed"], true);
    }

    #[test]
    fn build_get_todo_encodes_reserved_characters() {
        let client = client();
        assert_eq!(client.build_get_todo("a/b").path, "http://localhost:3000/a%2Fb");
        assert_eq!(client.build_get_todo("x?y").path, "http://localhost:3000/x%3Fy");
        assert_eq!(client.build_get_todo("#1").path, "http://localhost:3000/%231");
        assert_eq!(client.build_get_todo("a b").path, "http://localhost:3000/a%20b");
        assert_eq!(client.build_get_todo("50%").path, "http://localhost:3000/50%25");
        assert_eq!(client.build_delete_todo("a/b").path, "http://localhost:3000/a%2Fb");
    }

    #[test]
    fn build_delete_todo_has_no_body() {
        let req = client().build_delete_todo("1");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/1");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let body = r#"[{"id":"1","name":"Test","whatToDo":"Do it","completed":false}]"#;
        let todos = client().parse_list_todos(response(200, body)).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].what_to_do, "Do it");
    }

    #[test]
    fn parse_get_todo_not_found() {
        let err = client().parse_get_todo(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_todo_success() {
        let body = r#"{"id":"1","name":"New","whatToDo":"","completed":true}"#;
        let todo = client().parse_create_todo(response(200, body)).unwrap();
        assert_eq!(todo.name, "New");
        assert!(todo.completed);
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let err = client()
            .parse_create_todo(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_todo_client_error() {
        let err = client()
            .parse_update_todo(response(422, r#"{"error":"missing field `name`"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 422, ref body } if body.contains("name")));
    }

    #[test]
    fn parse_delete_todo_returns_removed() {
        let body = r#"{"id":"1","name":"Gone","whatToDo":"","completed":false}"#;
        let todo = client().parse_delete_todo(response(200, body)).unwrap();
        assert_eq!(todo.id, "1");
    }

    #[test]
    fn parse_delete_todo_not_found() {
        let err = client().parse_delete_todo(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        assert_eq!(client.build_list_todos().path, "http://localhost:3000/");
        assert_eq!(client.build_get_todo("7").path, "http://localhost:3000/7");
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client().parse_list_todos(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
