use crate::auth::{AuthError, Session};

/// Which user's records a session may report on.
///
/// Admins get exactly what they asked for (`None` = everyone). Employees are
/// pinned to their own id and refused anyone else's.
pub fn resolve_user_filter(
    session: &Session,
    requested: Option<&str>,
) -> Result<Option<String>, AuthError> {
    if !session.is_employee() {
        return Ok(requested.map(str::to_string));
    }

    match requested {
        Some(id) if id != session.user.id => Err(AuthError::AccessDenied(format!(
            "user '{}' cannot view records of '{}'",
            session.user.username, id
        ))),
        _ => Ok(Some(session.user.id.clone())),
    }
}

/// Admins see every profile, employees only their own.
pub fn ensure_can_view_employee(session: &Session, employee_id: &str) -> Result<(), AuthError> {
    if session.is_employee() && session.user.id != employee_id {
        Err(AuthError::AccessDenied(format!(
            "user '{}' cannot view the profile of '{}'",
            session.user.username, employee_id
        )))
    } else {
        Ok(())
    }
}
