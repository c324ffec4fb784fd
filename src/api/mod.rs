//! REST client for the student records backend.
//!
//! This module defines the [`Transport`] seam every request goes through,
//! the error type shared by all calls, and [`SchoolApi`], the typed set of
//! operations the view controller uses.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::entities::{Enrollment, Grade, GradeSummary, NewEnrollment, Student, Subject};

pub mod endpoints;
pub mod http;

pub use http::HttpTransport;

/// Submitted form fields, keyed by field name
pub type FormData = BTreeMap<String, String>;

/// Failure of a single API call.
///
/// There is no finer taxonomy: callers only distinguish failure from an
/// empty or absent result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    Decode(String),
}

/// HTTP verbs used against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sends one JSON request and interprets the response.
///
/// Implementations treat any non-2xx status as [`ApiError::Status`] and a
/// 204 as `Ok(None)` without parsing the body. No retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, method: Method, endpoint: &str, body: Option<Value>) -> Result<Option<Value>, ApiError>;
}

/// Typed operations over the REST resources.
#[derive(Clone)]
pub struct SchoolApi {
    transport: Arc<dyn Transport>,
}

impl SchoolApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let value = self.transport.send(Method::Get, endpoint, None).await?;
        decode(value)
    }

    /// Mutations ignore the response body; every mutation is followed by a reload.
    async fn mutate(&self, method: Method, endpoint: &str, body: Option<Value>) -> Result<(), ApiError> {
        self.transport.send(method, endpoint, body).await.map(|_| ())
    }

    // Students
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.fetch(&endpoints::students()).await
    }

    /// Detail fetch; the response nests the student's enrollments.
    pub async fn get_student(&self, id: i64) -> Result<Student, ApiError> {
        self.fetch(&endpoints::student(id)).await
    }

    pub async fn create_student(&self, data: &FormData) -> Result<(), ApiError> {
        self.mutate(Method::Post, &endpoints::students(), Some(form_body(data)))
            .await
    }

    pub async fn update_student(&self, id: i64, data: &FormData) -> Result<(), ApiError> {
        self.mutate(Method::Put, &endpoints::student(id), Some(form_body(data)))
            .await
    }

    pub async fn delete_student(&self, id: i64) -> Result<(), ApiError> {
        self.mutate(Method::Delete, &endpoints::student(id), None).await
    }

    pub async fn grades_summary(&self, student_id: i64) -> Result<Vec<GradeSummary>, ApiError> {
        self.fetch(&endpoints::grades_summary(student_id)).await
    }

    // Subjects
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, ApiError> {
        self.fetch(&endpoints::subjects()).await
    }

    pub async fn get_subject(&self, id: i64) -> Result<Subject, ApiError> {
        self.fetch(&endpoints::subject(id)).await
    }

    pub async fn create_subject(&self, data: &FormData) -> Result<(), ApiError> {
        self.mutate(Method::Post, &endpoints::subjects(), Some(form_body(data)))
            .await
    }

    pub async fn update_subject(&self, id: i64, data: &FormData) -> Result<(), ApiError> {
        self.mutate(Method::Put, &endpoints::subject(id), Some(form_body(data)))
            .await
    }

    pub async fn delete_subject(&self, id: i64) -> Result<(), ApiError> {
        self.mutate(Method::Delete, &endpoints::subject(id), None).await
    }

    // Enrollments
    pub async fn list_enrollments(&self, student_id: Option<i64>) -> Result<Vec<Enrollment>, ApiError> {
        let endpoint = match student_id {
            Some(id) => endpoints::enrollments_for_student(id),
            None => endpoints::enrollments(),
        };
        self.fetch(&endpoint).await
    }

    pub async fn create_enrollment(&self, enrollment: NewEnrollment) -> Result<(), ApiError> {
        let body = serde_json::to_value(enrollment).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.mutate(Method::Post, &endpoints::enrollments(), Some(body)).await
    }

    pub async fn delete_enrollment(&self, id: i64) -> Result<(), ApiError> {
        self.mutate(Method::Delete, &endpoints::enrollment(id), None).await
    }

    // Grades
    pub async fn list_grades(&self, enrollment_id: Option<i64>) -> Result<Vec<Grade>, ApiError> {
        let endpoint = match enrollment_id {
            Some(id) => endpoints::grades_for_enrollment(id),
            None => endpoints::grades(),
        };
        self.fetch(&endpoint).await
    }

    pub async fn get_grade(&self, id: i64) -> Result<Grade, ApiError> {
        self.fetch(&endpoints::grade(id)).await
    }

    pub async fn create_grade(&self, data: &FormData) -> Result<(), ApiError> {
        self.mutate(Method::Post, &endpoints::grades(), Some(form_body(data)))
            .await
    }

    pub async fn update_grade(&self, id: i64, data: &FormData) -> Result<(), ApiError> {
        self.mutate(Method::Put, &endpoints::grade(id), Some(form_body(data)))
            .await
    }

    pub async fn delete_grade(&self, id: i64) -> Result<(), ApiError> {
        self.mutate(Method::Delete, &endpoints::grade(id), None).await
    }
}

/// Form submissions are sent as a flat object of strings.
fn form_body(data: &FormData) -> Value {
    Value::Object(
        data.iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect(),
    )
}

fn decode<T: DeserializeOwned>(value: Option<Value>) -> Result<T, ApiError> {
    let value = value.ok_or_else(|| ApiError::Decode("empty response body".to_string()))?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
