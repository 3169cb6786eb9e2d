//! External links
//!
//! Project pages, `tel:` and `mailto:` links are handed to the system handler.

use crate::error::{Result, SiteError};
use tracing::{info, warn};

/// `tel:` link for `phone`, keeping only digits and a leading `+`
pub fn tel_link(phone: &str) -> Option<String> {
    let trimmed = phone.trim();
    let mut number: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if number.is_empty() {
        return None;
    }
    if trimmed.starts_with('+') {
        number.insert(0, '+');
    }
    Some(format!("tel:{number}"))
}

/// `mailto:` link for `email`
pub fn mailto_link(email: &str) -> Option<String> {
    let email = email.trim();
    crate::form::is_valid_email(email).then(|| format!("mailto:{email}"))
}

/// Open `url` with the system handler
pub fn open_link(url: &str) -> Result<()> {
    info!("Opening link: {}", url);
    open::that(url).map_err(|e| {
        warn!("Failed to open {}: {}", url, e);
        SiteError::IoError(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_link_strips_formatting() {
        assert_eq!(tel_link("+91 855-190 0826").as_deref(), Some("tel:+918551900826"));
        assert_eq!(tel_link("(555) 0100").as_deref(), Some("tel:5550100"));
        assert_eq!(tel_link("  "), None);
    }

    #[test]
    fn test_mailto_requires_valid_address() {
        assert_eq!(
            mailto_link("hello@example.com").as_deref(),
            Some("mailto:hello@example.com")
        );
        assert_eq!(mailto_link("nope"), None);
    }
}
