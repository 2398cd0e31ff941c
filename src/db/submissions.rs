use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewSubmission, Submission};

pub async fn create(pool: &PgPool, submission: &NewSubmission) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO submissions (firstname, lastname, email, dob, age)
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(&submission.firstname)
    .bind(&submission.lastname)
    .bind(&submission.email)
    .bind(submission.dob)
    .bind(submission.age)
    .fetch_one(pool)
    .await
}

/// Every stored submission, in whatever order the table yields them.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "SELECT id, firstname, lastname, email, dob, age, created_at FROM submissions",
    )
    .fetch_all(pool)
    .await
}
