//! Contact-form mailer.
//!
//! Relays submissions to the configured inbox over SMTP. Implicit TLS on
//! port 465, STARTTLS elsewhere (including plain local test relays).

use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};

#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port.
    pub smtp_port: u16,
    /// SMTP username (optional for local testing).
    pub smtp_user: Option<String>,
    /// SMTP password (optional for local testing).
    pub smtp_pass: Option<String>,
    /// From display name.
    pub from_name: String,
    /// Inbox that receives contact submissions.
    pub recipient: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("failed to build email: {0}")]
    Message(String),

    #[error("failed to send email: {0}")]
    Transport(String),
}

#[derive(Clone)]
pub struct ContactMailer {
    config: MailerConfig,
}

impl ContactMailer {
    pub fn new(config: MailerConfig) -> Self {
        Self { config }
    }

    /// Relay one contact-form submission.
    pub async fn send_contact(
        &self,
        name: &str,
        email: &str,
        subject: Option<&str>,
        message: &str,
    ) -> Result<(), MailerError> {
        let email = self.compose(name, email, subject, message)?;
        let transport = self.build_transport()?;

        transport
            .send(email)
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        Ok(())
    }

    fn compose(
        &self,
        name: &str,
        email: &str,
        subject: Option<&str>,
        message: &str,
    ) -> Result<Message, MailerError> {
        let subject = match subject {
            Some(s) => format!("New Contact Form: {s}"),
            None => "New Contact Form Message".to_string(),
        };
        let body = format!("Name: {name}\nEmail: {email}\nMessage: {message}\n");

        let from_address = self
            .config
            .smtp_user
            .as_deref()
            .unwrap_or("noreply@jaipurtv.in");
        let from = format!("{} <{}>", self.config.from_name, from_address);

        Message::builder()
            .from(
                from.parse()
                    .map_err(|e| MailerError::Message(format!("{e}")))?,
            )
            .reply_to(
                email
                    .parse()
                    .map_err(|e| MailerError::Message(format!("{e}")))?,
            )
            .to(self
                .config
                .recipient
                .parse()
                .map_err(|e| MailerError::Message(format!("{e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| MailerError::Message(e.to_string()))
    }

    fn build_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailerError> {
        let mut builder = if self.config.smtp_port == 465 {
            // Implicit TLS on 465
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)
                .map_err(|e| MailerError::Transport(e.to_string()))?
                .port(465)
        } else {
            // STARTTLS on 587, or plain for local testing
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)
                .map_err(|e| MailerError::Transport(e.to_string()))?
                .port(self.config.smtp_port)
        };

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_pass) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(builder.build())
    }
}

impl std::fmt::Debug for ContactMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactMailer")
            .field("smtp_host", &self.config.smtp_host)
            .field("smtp_port", &self.config.smtp_port)
            .field("recipient", &self.config.recipient)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> MailerConfig {
        MailerConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_user: None,
            smtp_pass: None,
            from_name: "JaipurTV Contact".to_string(),
            recipient: "sameer@jaipurtv.in".to_string(),
        }
    }

    #[test]
    fn composes_a_submission_with_subject() {
        let mailer = ContactMailer::new(test_config());
        let message = mailer
            .compose("Aditi", "aditi@example.com", Some("Collab"), "Hello!")
            .unwrap();
        let rendered = String::from_utf8(message.formatted()).unwrap();
        assert!(rendered.contains("New Contact Form: Collab"));
        assert!(rendered.contains("Name: Aditi"));
    }

    #[test]
    fn falls_back_to_a_generic_subject() {
        let mailer = ContactMailer::new(test_config());
        let message = mailer
            .compose("Aditi", "aditi@example.com", None, "Hello!")
            .unwrap();
        let rendered = String::from_utf8(message.formatted()).unwrap();
        assert!(rendered.contains("New Contact Form Message"));
    }

    #[test]
    fn invalid_submitter_address_is_a_message_error() {
        let mailer = ContactMailer::new(test_config());
        let err = mailer
            .compose("Aditi", "not-an-address", None, "Hello!")
            .unwrap_err();
        assert!(matches!(err, MailerError::Message(_)));
    }

    #[test]
    fn debug_hides_credentials() {
        let mut config = test_config();
        config.smtp_pass = Some("secret".to_string());
        let rendered = format!("{:?}", ContactMailer::new(config));
        assert!(!rendered.contains("secret"));
    }
}
