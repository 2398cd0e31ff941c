use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;

/// One listing entry, with every field already formatted for display.
#[derive(Debug, PartialEq)]
pub struct ResponseRow {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub dob: String,
    pub age: String,
}

impl From<&Submission> for ResponseRow {
    fn from(sub: &Submission) -> Self {
        ResponseRow {
            firstname: sub.firstname.clone().unwrap_or_default(),
            lastname: sub.lastname.clone().unwrap_or_default(),
            email: sub.email.clone().unwrap_or_default(),
            dob: sub
                .dob
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            age: sub.age.map(|a| a.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "responses.html")]
pub struct ResponsesTemplate {
    pub rows: Vec<ResponseRow>,
}

impl ResponsesTemplate {
    pub fn new(submissions: &[Submission]) -> Self {
        Self {
            rows: submissions.iter().map(ResponseRow::from).collect(),
        }
    }
}

pub async fn list_page(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let submissions = state.store.find_all().await.map_err(AppError::List)?;
    let html = ResponsesTemplate::new(&submissions).render()?;
    Ok(Html(html))
}
