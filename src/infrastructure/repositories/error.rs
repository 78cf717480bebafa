use crate::domain::errors::DomainError;

/// SQLite reports constraint failures without the named-constraint detail
/// Postgres gives, so classification goes through the error kind instead.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                return DomainError::Conflict("unique constraint violated".into());
            }
            if db_err.is_foreign_key_violation() {
                return DomainError::Conflict("foreign key constraint violated".into());
            }
            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
