// src/services/auth.rs

//! Login and logout.

use crate::client::LmsClient;
use crate::endpoints;
use crate::error::{LmsError, Result};
use crate::models::WireConfig;
use crate::transport::Transport;

/// Whether a login response body carries the portal's bad-credentials marker.
pub fn is_login_rejected(body: &str, wire: &WireConfig) -> bool {
    body.contains(&wire.login_failure_marker)
}

impl<T: Transport> LmsClient<T> {
    /// Log into the portal.
    ///
    /// Returns `Ok(false)` when the portal rejects the credentials. Any
    /// status other than 200 is an error.
    pub async fn login(&self, id: &str, password: &str) -> Result<bool> {
        let wire = &self.config.wire;
        let form = vec![
            ("returnURL", wire.return_url.clone()),
            ("challenge", wire.challenge.clone()),
            ("response", wire.response.clone()),
            ("usr_id", id.to_string()),
            ("usr_pwd", password.to_string()),
        ];

        let url = self.config.login_url(endpoints::LOGIN);
        let response = self.transport.post_form(&url, &form).await?;
        if response.status != 200 {
            return Err(LmsError::Status {
                endpoint: endpoints::LOGIN.to_string(),
                status: response.status,
            });
        }

        let accepted = !is_login_rejected(&response.body, wire);
        log::info!(
            "Login for {} {}",
            id,
            if accepted { "accepted" } else { "rejected" }
        );
        Ok(accepted)
    }

    /// Log in, treating rejected credentials as `LmsError::Auth`.
    pub async fn require_login(&self, id: &str, password: &str) -> Result<()> {
        if self.login(id, password).await? {
            Ok(())
        } else {
            Err(LmsError::Auth(format!("credentials rejected for {id}")))
        }
    }

    /// End the server-side session. Only transport failures are reported.
    pub async fn logout(&self) -> Result<()> {
        let url = self.config.url(endpoints::LOGOUT);
        let response = self.transport.get(&url).await?;
        log::debug!("Logout answered with status {}", response.status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_detection() {
        let wire = WireConfig::default();
        let body = "<script>alert('로그인 정보가 일치하지 않습니다.');</script>";
        assert!(is_login_rejected(body, &wire));
        assert!(!is_login_rejected("<html><body>main</body></html>", &wire));
    }
}
