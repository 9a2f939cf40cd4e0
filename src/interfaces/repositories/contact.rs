use async_trait::async_trait;

use crate::{entities::contact::ContactSubmission, errors::AppError};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn record_submission(&self, submission: &ContactSubmission) -> Result<(), AppError>;
}

/// Records submissions as structured log events; nothing is stored.
#[derive(Clone, Debug, Default)]
pub struct LogContactRepo;

#[async_trait]
impl ContactRepository for LogContactRepo {
    async fn record_submission(&self, submission: &ContactSubmission) -> Result<(), AppError> {
        tracing::info!(
            target: "contact",
            submission_id = %submission.id,
            name = %submission.name,
            email = %submission.email,
            subject = %submission.subject,
            message = %submission.message,
            received_at = %submission.received_at.to_rfc3339(),
            "Contact form submission"
        );
        Ok(())
    }
}
