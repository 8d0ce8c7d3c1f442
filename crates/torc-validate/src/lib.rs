//! URL and email address validators.
//!
//! All validators answer with a plain `bool`; malformed input is simply
//! invalid, never an error.

pub mod email;
pub mod url;

pub use email::{is_valid_email, is_valid_email_strict};
pub use url::is_valid_url;
