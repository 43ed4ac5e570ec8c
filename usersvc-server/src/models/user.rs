//! User record and create payload

use super::ValidationError;

/// Maximum length, in characters, of every user text column.
/// Matches the `VARCHAR(100)` columns of the `users` table.
pub const MAX_FIELD_LEN: usize = 100;

/// A stored user record.
///
/// `id` is assigned by the store at insert time and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// A validated request to create a user. Carries no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
    role: String,
}

impl NewUser {
    /// Validate the three user fields.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 100 characters
    ///
    /// Values are stored exactly as given; trimming is only used for the
    /// emptiness check.
    ///
    /// # Example
    /// ```
    /// use usersvc_server::models::NewUser;
    ///
    /// assert!(NewUser::new("Ada", "ada@example.com", "engineer").is_ok());
    /// assert!(NewUser::new("", "ada@example.com", "engineer").is_err());
    /// assert!(NewUser::new("Ada", "   ", "engineer").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();
        let role = role.into();

        check_field("name", &name)?;
        check_field("email", &email)?;
        check_field("role", &role)?;

        Ok(Self { name, email, role })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

fn check_field(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if value.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }

    Ok(())
}
