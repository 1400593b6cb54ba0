use crate::{domain::user::entities::User, entity::users};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email.clone(),
            password_hash: model.password_hash.clone(),
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            phone: model.phone.clone(),
            date_of_birth: model.date_of_birth.clone(),
            emergency_contact: model.emergency_contact.clone(),
            age: model.age.clone(),
            gender: model.gender.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}

impl From<User> for users::ActiveModel {
    fn from(user: User) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(user.id),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            phone: Set(user.phone),
            date_of_birth: Set(user.date_of_birth),
            emergency_contact: Set(user.emergency_contact),
            age: Set(user.age),
            gender: Set(user.gender),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn model() -> users::Model {
        let now = Utc::now().fixed_offset();
        users::Model {
            id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            password_hash: "hash".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            phone: Some("555-0100".to_string()),
            date_of_birth: None,
            emergency_contact: None,
            age: None,
            gender: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_model_to_user() {
        let row = model();
        let user = User::from(&row);

        assert_eq!(user.id, row.id);
        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert_eq!(user.phone.as_deref(), Some("555-0100"));
        assert_eq!(user.created_at, row.created_at.to_utc());
    }

    #[test]
    fn test_user_to_active_model_keeps_hash() {
        let user = User::from(model());
        let active = users::ActiveModel::from(user.clone());

        assert_eq!(active.password_hash.unwrap(), "hash");
        assert_eq!(active.email.unwrap(), user.email);
    }
}
