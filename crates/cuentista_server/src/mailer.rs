//! Fire-and-forget mail notifications.
//!
//! Registration and password-reset flows hand a send off to the mailer and
//! move on; delivery success or failure never reaches the caller. The
//! delivery transport itself is an external concern, so the shipped
//! implementation records the send through structured logging and a test
//! double captures it for assertions.

use async_trait::async_trait;
use cuentista_error::CuentistaResult;
use std::sync::Arc;
use tracing::{info, warn};

/// Outbound notification mail.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send the welcome mail for a fresh registration.
    async fn send_welcome(&self, email: &str, username: &str) -> CuentistaResult<()>;

    /// Send a password-reset mail carrying the reset token.
    async fn send_password_reset(&self, email: &str, token: &str) -> CuentistaResult<()>;
}

/// Mailer that records sends in the log stream.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_welcome(&self, email: &str, username: &str) -> CuentistaResult<()> {
        info!(email, username, "Welcome mail queued");
        Ok(())
    }

    async fn send_password_reset(&self, email: &str, _token: &str) -> CuentistaResult<()> {
        info!(email, "Password reset mail queued");
        Ok(())
    }
}

/// Dispatch a welcome mail without awaiting delivery.
pub fn spawn_welcome(mailer: Arc<dyn Mailer>, email: String, username: String) {
    tokio::spawn(async move {
        if let Err(e) = mailer.send_welcome(&email, &username).await {
            warn!(error = %e, email, "Welcome mail delivery failed");
        }
    });
}

/// Dispatch a password-reset mail without awaiting delivery.
pub fn spawn_password_reset(mailer: Arc<dyn Mailer>, email: String, token: String) {
    tokio::spawn(async move {
        if let Err(e) = mailer.send_password_reset(&email, &token).await {
            warn!(error = %e, email, "Password reset mail delivery failed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send_welcome(&self, email: &str, _username: &str) -> CuentistaResult<()> {
            self.sent.lock().unwrap().push(email.to_string());
            Ok(())
        }

        async fn send_password_reset(&self, email: &str, _token: &str) -> CuentistaResult<()> {
            self.sent.lock().unwrap().push(email.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn welcome_send_is_dispatched() {
        let mailer = Arc::new(RecordingMailer::default());
        spawn_welcome(
            Arc::clone(&mailer) as Arc<dyn Mailer>,
            "familia@example.com".into(),
            "luna".into(),
        );

        // The send is fire-and-forget; give the task a moment to land.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(
            mailer.sent.lock().unwrap().as_slice(),
            ["familia@example.com"]
        );
    }
}
