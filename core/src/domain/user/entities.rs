use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, user::value_objects::UpdateUserProfileInput};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub emergency_contact: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        email: String,
        password_hash: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            email,
            password_hash,
            first_name,
            last_name,
            phone: None,
            date_of_birth: None,
            emergency_contact: None,
            age: None,
            gender: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// "first last" with missing parts dropped, empty when neither is set.
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }

    pub fn update(&mut self, input: UpdateUserProfileInput) {
        let (now, _) = generate_timestamp();

        // A combined name wins over the separate parts.
        if let Some(name) = input.name.filter(|n| !n.trim().is_empty()) {
            let mut parts = name.trim().splitn(2, char::is_whitespace);
            self.first_name = parts.next().map(str::to_string);
            self.last_name = parts
                .next()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());
        } else {
            if let Some(first_name) = input.first_name {
                self.first_name = Some(first_name);
            }
            if let Some(last_name) = input.last_name {
                self.last_name = Some(last_name);
            }
        }

        if let Some(phone) = input.phone {
            self.phone = Some(phone);
        }
        if let Some(date_of_birth) = input.date_of_birth {
            self.date_of_birth = Some(date_of_birth);
        }
        if let Some(emergency_contact) = input.emergency_contact {
            self.emergency_contact = Some(emergency_contact);
        }
        if let Some(age) = input.age {
            self.age = Some(age);
        }
        if let Some(gender) = input.gender {
            self.gender = Some(gender);
        }
        self.updated_at = now;
    }
}

/// Profile shape returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub name: String,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub emergency_contact: Option<String>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            name: user.display_name(),
            age: user.age,
            gender: user.gender,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            date_of_birth: user.date_of_birth,
            emergency_contact: user.emergency_contact,
        }
    }
}
