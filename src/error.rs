use thiserror::Error;

/// Everything that can stop an email from landing on the waitlist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitlistError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Could not prepare the request: {0}")]
    Request(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("The waitlist service responded with status {0}")]
    Status(u16),
}

impl WaitlistError {
    /// Short message shown under the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            WaitlistError::InvalidEmail => "Please enter a valid email address.",
            WaitlistError::Request(_) | WaitlistError::Network(_) | WaitlistError::Status(_) => {
                "Something went wrong. Please try again."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_share_a_retry_message() {
        assert_eq!(
            WaitlistError::Status(500).user_message(),
            WaitlistError::Network("offline".into()).user_message()
        );
        assert_ne!(
            WaitlistError::InvalidEmail.user_message(),
            WaitlistError::Status(500).user_message()
        );
    }

    #[test]
    fn display_includes_detail() {
        assert_eq!(
            WaitlistError::Status(429).to_string(),
            "The waitlist service responded with status 429"
        );
    }
}
