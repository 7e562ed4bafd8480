use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Hashing or parsing a stored password hash failed.
    ///
    /// Argon2 errors carry no source chain, so the message is kept as text.
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Signing an access token failed.
    #[error("Failed to encode access token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),
}
