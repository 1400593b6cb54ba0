use uuid::Uuid;

/// Authenticated caller, resolved from a verified access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
}

impl Identity {
    pub fn id(&self) -> Uuid {
        self.user_id
    }
}
