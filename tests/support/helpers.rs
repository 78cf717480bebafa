// tests/support/helpers.rs
use once_cell::sync::Lazy;
use weblog_core::application::error::ApplicationError;
use weblog_core::domain::errors::DomainError;

static TRACING: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .init();
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

// Validation and friends can surface either directly or wrapped in the
// transparent Domain variant, depending on which layer detected them.

pub fn is_validation(err: &ApplicationError) -> bool {
    matches!(
        err,
        ApplicationError::Validation(_) | ApplicationError::Domain(DomainError::Validation(_))
    )
}

pub fn is_not_found(err: &ApplicationError) -> bool {
    matches!(
        err,
        ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_))
    )
}

pub fn is_conflict(err: &ApplicationError) -> bool {
    matches!(
        err,
        ApplicationError::Conflict(_) | ApplicationError::Domain(DomainError::Conflict(_))
    )
}

pub fn is_forbidden(err: &ApplicationError) -> bool {
    matches!(err, ApplicationError::Forbidden(_))
}
