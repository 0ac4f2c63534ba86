use crate::domain::errors::DomainError;

const CNT_ACCOUNT_EMAIL: &str = "accounts_email_key";
const CNT_PROFILE_SLUG: &str = "profiles_slug_key";
const CNT_PROFILE_ACCOUNT: &str = "profiles_account_id_key";
const CNT_PROFILE_ACCOUNT_FK: &str = "profiles_account_id_fkey";
const CNT_PROFILE_BIO_LENGTH: &str = "profiles_bio_length_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ACCOUNT_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_PROFILE_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_PROFILE_ACCOUNT => {
                        DomainError::Conflict("account already has a profile".into())
                    }
                    CNT_PROFILE_ACCOUNT_FK => DomainError::NotFound("account not found".into()),
                    CNT_PROFILE_BIO_LENGTH => {
                        DomainError::Validation("bio exceeds the maximum length".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::error::Error as StdError;

    use sqlx::error::{DatabaseError, ErrorKind};

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("{message}")]
    struct FakeDbError {
        message: String,
        code: Option<&'static str>,
        constraint: Option<&'static str>,
    }

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            &self.message
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            self.code.map(Cow::Borrowed)
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            match self.code {
                Some("23505") => ErrorKind::UniqueViolation,
                Some("23503") => ErrorKind::ForeignKeyViolation,
                Some("23514") => ErrorKind::CheckViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    fn db_error(code: Option<&'static str>, constraint: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError {
            message: "violation".into(),
            code,
            constraint,
        }))
    }

    #[test]
    fn named_constraints_map_to_domain_errors() {
        for constraint in [CNT_PROFILE_SLUG, CNT_ACCOUNT_EMAIL, CNT_PROFILE_ACCOUNT] {
            let err = map_sqlx(db_error(Some("23505"), Some(constraint)));
            assert!(err.is_conflict(), "{constraint} mapped to {err:?}");
        }

        assert!(matches!(
            map_sqlx(db_error(Some("23503"), Some(CNT_PROFILE_ACCOUNT_FK))),
            DomainError::NotFound(_)
        ));
        assert!(matches!(
            map_sqlx(db_error(Some("23514"), Some(CNT_PROFILE_BIO_LENGTH))),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn slug_collision_is_a_conflict() {
        let err = map_sqlx(db_error(Some("23505"), Some("profiles_slug_key")));
        assert!(matches!(err, DomainError::Conflict(ref msg) if msg == "slug already exists"));
    }

    #[test]
    fn unnamed_violations_fall_back_to_sqlstate() {
        assert!(map_sqlx(db_error(Some("23505"), None)).is_conflict());
        assert!(matches!(
            map_sqlx(db_error(Some("23503"), None)),
            DomainError::NotFound(_)
        ));
        assert!(matches!(
            map_sqlx(db_error(Some("23514"), None)),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn unknown_database_errors_are_persistence_errors() {
        assert!(matches!(
            map_sqlx(db_error(Some("40001"), None)),
            DomainError::Persistence(_)
        ));
        assert!(matches!(
            map_sqlx(db_error(None, Some("some_other_constraint"))),
            DomainError::Persistence(_)
        ));
    }

    #[test]
    fn missing_row_is_not_found() {
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::NotFound(_)
        ));
    }

    #[test]
    fn pool_failures_are_persistence_errors() {
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Persistence(_)
        ));
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolClosed),
            DomainError::Persistence(_)
        ));
    }
}
