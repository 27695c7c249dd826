//! Seller aggregate and its validated inputs.
//!
//! A [`Seller`] is the aggregate root owning zero or more books. Inputs arrive
//! as [`CreateSellerInput`] and [`UpdateSellerInput`], both of which validate
//! on construction. Email format is only checked on create; the update path
//! accepts any replacement email.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::Book;

/// Maximum length, in characters, of any seller text column.
pub const SELLER_FIELD_MAX: usize = 100;

/// Validation failures raised by the seller input constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SellerValidationError {
    /// A required text field was empty once trimmed.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    /// A text field exceeded the column width.
    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
    /// The email did not match `local-part@domain.tld`.
    #[error("invalid email format")]
    InvalidEmail,
}

impl SellerValidationError {
    /// Name of the offending input field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyField { field } | Self::FieldTooLong { field, .. } => field,
            Self::InvalidEmail => "email",
        }
    }

    /// Stable machine-readable reason.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::EmptyField { .. } => "empty_field",
            Self::FieldTooLong { .. } => "field_too_long",
            Self::InvalidEmail => "invalid_email",
        }
    }
}

fn check_length(field: &'static str, value: &str) -> Result<(), SellerValidationError> {
    if value.chars().count() > SELLER_FIELD_MAX {
        return Err(SellerValidationError::FieldTooLong {
            field,
            max: SELLER_FIELD_MAX,
        });
    }
    Ok(())
}

/// Store-assigned seller identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SellerId(i64);

impl SellerId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SellerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A first or last name: non-empty, at most [`SELLER_FIELD_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// Validate `value` as the named field.
    pub fn new(field: &'static str, value: impl Into<String>) -> Result<Self, SellerValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(SellerValidationError::EmptyField { field });
        }
        check_length(field, &value)?;
        Ok(Self(value))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

// `$` anchors at the very end, so a trailing newline is rejected.
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[\w.-]+@[a-zA-Z\d.-]+\.[a-zA-Z]{2,}$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// An email address in `local-part@domain.tld` form.
///
/// # Examples
/// ```
/// use bookshop::domain::EmailAddress;
///
/// assert!(EmailAddress::new("link49@gmail.com").is_ok());
/// assert!(EmailAddress::new("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and wrap an email address.
    pub fn new(value: impl Into<String>) -> Result<Self, SellerValidationError> {
        let value = value.into();
        check_length("email", &value)?;
        if !email_regex().is_match(&value) {
            return Err(SellerValidationError::InvalidEmail);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Seller password, stored verbatim.
///
/// `Debug` output is redacted so the value never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wrap a password, enforcing the column width.
    pub fn new(value: impl Into<String>) -> Result<Self, SellerValidationError> {
        let value = value.into();
        check_length("password", &value)?;
        Ok(Self(value))
    }

    /// Rehydrate a password read back from the store.
    #[must_use]
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    /// Raw password text for persistence adapters.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Validated payload for creating a seller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSellerInput {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub password: Password,
}

impl CreateSellerInput {
    /// Validate raw create fields.
    ///
    /// # Examples
    /// ```
    /// use bookshop::domain::{CreateSellerInput, SellerValidationError};
    ///
    /// let input = CreateSellerInput::try_new("rs", "cr", "link49@gmail.com", "1223");
    /// assert!(input.is_ok());
    ///
    /// let err = CreateSellerInput::try_new("rs", "cr", "not-an-email", "1223").unwrap_err();
    /// assert_eq!(err, SellerValidationError::InvalidEmail);
    /// ```
    pub fn try_new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, SellerValidationError> {
        Ok(Self {
            first_name: PersonName::new("first_name", first_name)?,
            last_name: PersonName::new("last_name", last_name)?,
            email: EmailAddress::new(email)?,
            password: Password::new(password)?,
        })
    }
}

/// Validated replacement values for an existing seller.
///
/// The email is only length-checked; its format is deliberately not
/// re-validated on this path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSellerInput {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: String,
}

impl UpdateSellerInput {
    /// Validate raw update fields.
    pub fn try_new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, SellerValidationError> {
        let email = email.into();
        check_length("email", &email)?;
        Ok(Self {
            first_name: PersonName::new("first_name", first_name)?,
            last_name: PersonName::new("last_name", last_name)?,
            email,
        })
    }
}

/// Persisted seller record.
///
/// ## Invariants
/// - `id` is assigned by the store and never changes.
/// - `password` is only ever set on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seller {
    id: SellerId,
    first_name: String,
    last_name: String,
    email: String,
    password: Password,
}

impl Seller {
    /// Rehydrate a seller from stored values.
    #[must_use]
    pub fn new(
        id: SellerId,
        first_name: String,
        last_name: String,
        email: String,
        password: Password,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            password,
        }
    }

    /// Build the stored record for a freshly created seller.
    #[must_use]
    pub fn from_input(id: SellerId, input: CreateSellerInput) -> Self {
        let CreateSellerInput {
            first_name,
            last_name,
            email,
            password,
        } = input;
        Self::new(
            id,
            first_name.into(),
            last_name.into(),
            email.into(),
            password,
        )
    }

    /// Overwrite the mutable fields in place, leaving id and password alone.
    pub fn apply(&mut self, changes: UpdateSellerInput) {
        self.first_name = changes.first_name.into();
        self.last_name = changes.last_name.into();
        self.email = changes.email;
    }

    #[must_use]
    pub fn id(&self) -> SellerId {
        self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// A seller joined with the books it currently owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerWithBooks {
    pub seller: Seller,
    pub books: Vec<Book>,
}
