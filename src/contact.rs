//! Contact form submission.
//!
//! There is no backend: a valid submission only switches the form into a
//! "thank you" state that resets on its own after a short delay. The delay is
//! a deadline rather than a running timer, so a second submission simply
//! replaces it. Time is always passed in by the caller.

use std::time::{Duration, Instant};
use thiserror::Error;

/// Delay before the confirmation message disappears.
pub const DEFAULT_RESET_AFTER: Duration = Duration::from_millis(3000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Every field is required; the email needs a local part and a domain.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    Submitted { until: Instant },
}

#[derive(Debug, Clone)]
pub struct ContactState {
    submission: Submission,
    reset_after: Duration,
}

impl ContactState {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            submission: Submission::Idle,
            reset_after,
        }
    }

    pub fn submission(&self) -> Submission {
        self.submission
    }

    /// Validate and accept `form`, (re)starting the reset deadline.
    ///
    /// An invalid form leaves the current state untouched.
    pub fn submit(&mut self, form: &ContactForm, now: Instant) -> Result<(), ContactError> {
        form.validate()?;
        if matches!(self.submission, Submission::Submitted { .. }) {
            tracing::debug!("replacing pending confirmation timer");
        }
        self.submission = Submission::Submitted {
            until: now + self.reset_after,
        };
        Ok(())
    }

    /// Drop back to idle once the deadline has passed.
    pub fn poll(&mut self, now: Instant) {
        if let Submission::Submitted { until } = self.submission
            && now >= until
        {
            self.submission = Submission::Idle;
        }
    }

    pub fn is_submitted(&self, now: Instant) -> bool {
        matches!(self.submission, Submission::Submitted { until } if now < until)
    }
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_AFTER)
    }
}
