use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A stored form response. `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Submission {
    pub id: Uuid,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub dob: Option<NaiveDate>,
    pub age: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// A decoded form response that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSubmission {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub dob: Option<NaiveDate>,
    pub age: Option<f64>,
}

impl NewSubmission {
    pub fn into_stored(self, id: Uuid, created_at: DateTime<Utc>) -> Submission {
        Submission {
            id,
            firstname: self.firstname,
            lastname: self.lastname,
            email: self.email,
            dob: self.dob,
            age: self.age,
            created_at,
        }
    }
}
