use crate::domain::common::entities::app_errors::CoreError;

/// Turns a policy decision into a `Forbidden` error when it is negative.
pub fn ensure_policy(
    result_has_permission: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    match result_has_permission {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(error_message.to_string())),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_policy_allows_granted() {
        assert_eq!(ensure_policy(Ok(true), "nope"), Ok(()));
    }

    #[test]
    fn test_ensure_policy_rejects_denied() {
        assert_eq!(
            ensure_policy(Ok(false), "not your entry"),
            Err(CoreError::Forbidden("not your entry".to_string()))
        );
    }

    #[test]
    fn test_ensure_policy_propagates_errors() {
        assert_eq!(
            ensure_policy(Err(CoreError::InternalServerError), "x"),
            Err(CoreError::InternalServerError)
        );
    }
}
