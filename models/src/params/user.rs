use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Matches the `users.username` column width.
pub const USERNAME_MAX_LEN: usize = 80;

#[derive(Deserialize, Validate, Debug, Default)]
pub struct CreateUserParams {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "All fields are required."),
        custom(function = "validate_username_length")
    )]
    pub username: String,
    #[validate(
        email(message = "Please enter a valid email address."),
        length(max = 120, message = "Email must be at most 120 characters.")
    )]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required."))]
    pub password: String,
}

fn validate_username_length(username: &str) -> Result<(), ValidationError> {
    if username.chars().count() > USERNAME_MAX_LEN {
        return Err(ValidationError::new("length")
            .with_message("Username must be at most 80 characters.".into()));
    }
    Ok(())
}

impl CreateUserParams {
    /// Trims the username and treats a blank email field as absent.
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            email: self
                .email
                .map(|email| email.trim().to_string())
                .filter(|email| !email.is_empty()),
            password: self.password,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct LoginUserParams {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub remember: Option<String>,
}

impl LoginUserParams {
    /// HTML checkboxes submit any non-empty value when ticked.
    pub fn remember(&self) -> bool {
        self.remember.as_deref().is_some_and(|v| !v.is_empty())
    }
}
