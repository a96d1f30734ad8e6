use mercato_core::email::EmailSender;
use mercato_core::security::CodeGenerator;
use mercato_core::validation::is_valid_email;
use std::sync::Arc;

pub const WELCOME_BODY: &str = "Welcome aboard! Thanks for joining Mercato.";

/// Signup and login flows backed by the email collaborator.
pub struct AccountService {
    email: Arc<dyn EmailSender>,
    codes: Arc<dyn CodeGenerator>,
}

impl AccountService {
    pub fn new(email: Arc<dyn EmailSender>, codes: Arc<dyn CodeGenerator>) -> Self {
        Self { email, codes }
    }

    /// Send the welcome email for a well-formed address. A malformed
    /// address resolves to false without sending anything; the welcome
    /// email has been dispatched by the time the call resolves.
    pub async fn sign_up(
        &self,
        address: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        if !is_valid_email(address) {
            tracing::debug!("rejected malformed signup address");
            return Ok(false);
        }

        self.email.send(address, WELCOME_BODY).await?;
        Ok(true)
    }

    /// Email a fresh one-time login code. The code is generated first and
    /// the message body is its exact decimal rendering; nothing is
    /// persisted.
    pub async fn login(
        &self,
        address: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let code = self.codes.generate_code();
        self.email.send(address, &code.to_string()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mercato_core::email::MockEmailSender;
    use mercato_core::security::FixedCodeGenerator;

    fn service(email: Arc<MockEmailSender>) -> AccountService {
        AccountService::new(email, Arc::new(FixedCodeGenerator(123_456)))
    }

    #[tokio::test]
    async fn test_malformed_address_is_rejected_without_email() {
        let email = Arc::new(MockEmailSender::new());
        let service = service(email.clone());

        let signed_up = service.sign_up("as").await.unwrap();

        assert!(!signed_up);
        assert!(email.sent().is_empty());
    }

    #[tokio::test]
    async fn test_signup_sends_one_welcome_email() {
        let email = Arc::new(MockEmailSender::new());
        let service = service(email.clone());

        let signed_up = service.sign_up("shopper@example.com").await.unwrap();
        assert!(signed_up);

        let sent = email.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].address, "shopper@example.com");
        assert!(sent[0].body.to_lowercase().contains("welcome"));
    }

    #[tokio::test]
    async fn test_login_emails_the_generated_code() {
        let email = Arc::new(MockEmailSender::new());
        let service = service(email.clone());

        service.login("shopper@example.com").await.unwrap();

        let sent = email.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].address, "shopper@example.com");
        assert_eq!(sent[0].body, "123456");
    }

    #[tokio::test]
    async fn test_email_failure_propagates() {
        let service = service(Arc::new(MockEmailSender::failing()));

        assert!(service.sign_up("shopper@example.com").await.is_err());
        assert!(service.login("shopper@example.com").await.is_err());
    }
}
