/// Report mailer — sends a finished report to the candidate over SMTP (STARTTLS).
///
/// Delivery is best-effort: the analyze handler turns any `MailError` into an
/// `emailWarning` on the response instead of failing the request.
use std::time::Duration;

use lettre::{
    address::AddressError,
    message::{
        header::{ContentType, ContentTypeErr},
        Attachment, Mailbox, MultiPart, SinglePart,
    },
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;
use tracing::info;

use crate::config::Config;

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_FROM_NAME: &str = "CV Checker";
const ATTACHMENT_NAME: &str = "report.pdf";
const SEND_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    Address(#[from] AddressError),

    #[error("failed to build email: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("invalid attachment type: {0}")]
    ContentType(#[from] ContentTypeErr),

    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Resolved SMTP settings. Only exists when credentials are configured.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_name: String,
    pub from_email: String,
}

impl SmtpSettings {
    /// `None` when SMTP_USER or SMTP_PASS is missing. The sender address falls back to
    /// the SMTP user.
    pub fn from_config(config: &Config) -> Option<Self> {
        let username = config.smtp_user.clone()?;
        let password = config.smtp_pass.clone()?;
        Some(SmtpSettings {
            host: config
                .smtp_host
                .clone()
                .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            port: config.smtp_port.unwrap_or(DEFAULT_SMTP_PORT),
            from_name: config
                .from_name
                .clone()
                .unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()),
            from_email: config.from_email.clone().unwrap_or_else(|| username.clone()),
            username,
            password,
        })
    }
}

#[derive(Clone)]
pub struct ReportMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl ReportMailer {
    pub fn new(settings: SmtpSettings) -> Result<Self, MailError> {
        let from = Mailbox::new(
            Some(settings.from_name),
            settings.from_email.parse::<Address>()?,
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
            .port(settings.port)
            .credentials(Credentials::new(settings.username, settings.password))
            .timeout(Some(SEND_TIMEOUT))
            .build();
        Ok(Self { transport, from })
    }

    /// Builds the report email: a short plain-text note plus the PDF as `report.pdf`.
    pub fn build_message(&self, to: &str, score: u32, pdf: Vec<u8>) -> Result<Message, MailError> {
        let body = format!("Hello!\nYour CV / JD match report is attached.\nScore: {score}%");
        let attachment =
            Attachment::new(ATTACHMENT_NAME.to_string()).body(pdf, ContentType::parse("application/pdf")?);

        let message = Message::builder()
            .from(self.from.clone())
            .to(to.trim().parse::<Mailbox>()?)
            .subject(format!("Your Job Match Report – {score}%"))
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(body))
                    .singlepart(attachment),
            )?;
        Ok(message)
    }

    pub async fn send_report(&self, to: &str, score: u32, pdf: Vec<u8>) -> Result<(), MailError> {
        let message = self.build_message(to, score, pdf)?;
        self.transport.send(message).await?;
        info!(to = %to, score, "Report emailed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SmtpSettings {
        SmtpSettings {
            host: "127.0.0.1".to_string(),
            port: 25,
            username: "mailer@example.com".to_string(),
            password: "secret".to_string(),
            from_name: "CV Checker".to_string(),
            from_email: "reports@example.com".to_string(),
        }
    }

    #[test]
    fn test_settings_need_credentials() {
        let mut config = Config::from_lookup(|_| None).unwrap();
        assert!(SmtpSettings::from_config(&config).is_none());

        config.smtp_user = Some("mailer@example.com".to_string());
        assert!(SmtpSettings::from_config(&config).is_none());

        config.smtp_pass = Some("secret".to_string());
        let resolved = SmtpSettings::from_config(&config).unwrap();
        assert_eq!(resolved.host, "smtp.gmail.com");
        assert_eq!(resolved.port, 587);
        assert_eq!(resolved.from_name, "CV Checker");
        assert_eq!(resolved.from_email, "mailer@example.com");
    }

    #[test]
    fn test_invalid_sender_is_rejected() {
        let mut bad = settings();
        bad.from_email = "not an address".to_string();
        assert!(matches!(ReportMailer::new(bad), Err(MailError::Address(_))));
    }

    #[tokio::test]
    async fn test_message_carries_pdf_attachment() {
        let mailer = ReportMailer::new(settings()).unwrap();
        let message = mailer
            .build_message("candidate@example.com", 72, b"%PDF-1.4 report".to_vec())
            .unwrap();
        let to: Vec<String> = message.envelope().to().iter().map(|a| a.to_string()).collect();
        assert_eq!(to, vec!["candidate@example.com"]);

        let raw = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(raw.contains("Subject: "));
        assert!(raw.contains("<reports@example.com>"));
        assert!(raw.contains("Score: 72%"));
        assert!(raw.contains("Content-Type: application/pdf"));
        assert!(raw.contains("report.pdf"));
    }

    #[tokio::test]
    async fn test_invalid_recipient_is_rejected() {
        let mailer = ReportMailer::new(settings()).unwrap();
        let err = mailer.build_message("nobody", 10, Vec::new()).unwrap_err();
        assert!(matches!(err, MailError::Address(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_error() {
        // Bind then drop to get a local port with nothing listening.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let mailer = ReportMailer::new(SmtpSettings { port, ..settings() }).unwrap();
        let err = mailer
            .send_report("candidate@example.com", 50, b"%PDF".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, MailError::Smtp(_)));
    }
}
