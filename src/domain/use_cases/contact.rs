use crate::{
    constants::CONTACT_ACKNOWLEDGEMENT,
    entities::contact::{ContactForm, ContactResponse, ContactSubmission},
    errors::AppError,
    repositories::contact::ContactRepository,
};

pub struct ContactHandler<R>
where
    R: ContactRepository,
{
    pub contact_repo: R,
}

impl<R> ContactHandler<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactHandler { contact_repo }
    }

    /// Validates the form, records it and acknowledges.
    pub async fn submit_contact_form(&self, form: ContactForm) -> Result<ContactResponse, AppError> {
        let submission = ContactSubmission::try_from(form)?;

        self.contact_repo.record_submission(&submission).await?;

        Ok(ContactResponse {
            message: CONTACT_ACKNOWLEDGEMENT.to_string(),
            success: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::contact::MockContactRepository;

    #[tokio::test]
    async fn records_valid_submission_once() {
        let mut repo = MockContactRepository::new();
        repo.expect_record_submission()
            .withf(|s| s.email == "ada@example.com" && s.subject == "Hello")
            .times(1)
            .returning(|_| Ok(()));

        let response = ContactHandler::new(repo)
            .submit_contact_form(ContactForm::new("Ada", "ada@example.com", "Hello", "Hi there"))
            .await
            .unwrap();

        assert!(response.success);
        assert!(!response.message.is_empty());
    }

    #[tokio::test]
    async fn invalid_forms_are_not_recorded() {
        let mut repo = MockContactRepository::new();
        repo.expect_record_submission().never();
        let handler = ContactHandler::new(repo);

        let missing = ContactForm {
            email: None,
            ..ContactForm::new("Ada", "", "Hello", "Hi there")
        };
        let err = handler.submit_contact_form(missing).await.unwrap_err();
        assert!(err.to_string().contains("email"));

        let malformed = ContactForm::new("Ada", "not-an-email", "Hello", "Hi there");
        let err = handler.submit_contact_form(malformed).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email format");
    }

    #[tokio::test]
    async fn recording_failures_surface() {
        let mut repo = MockContactRepository::new();
        repo.expect_record_submission()
            .returning(|_| Err(AppError::InternalError("sink unavailable".into())));

        let err = ContactHandler::new(repo)
            .submit_contact_form(ContactForm::new("Ada", "ada@example.com", "Hello", "Hi there"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }
}
