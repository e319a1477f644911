use crate::error::{Error, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: RawSiteMeta,
    foundation: Foundation,
    contact: RawContact,
}

#[derive(Debug, Deserialize)]
struct RawSiteMeta {
    domain: String,
    accent_color: String,
    theme_color: String,
}

#[derive(Debug, Deserialize)]
struct RawContact {
    email: String,
    phones: Vec<String>,
    address: String,
    #[serde(default)]
    office_hours: Vec<String>,
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<Site> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<Site> {
    let raw: RawConfig = toml::from_str(content)?;

    let site = SiteMeta {
        domain: validate_nonempty(raw.site.domain, "site.domain")?,
        accent_color: validate_hex_color(raw.site.accent_color, "site.accent_color")?,
        theme_color: validate_hex_color(raw.site.theme_color, "site.theme_color")?,
    };

    let contact = ContactDetails {
        email: validate_email(raw.contact.email, "contact.email")?,
        phones: raw.contact.phones,
        address: validate_nonempty(raw.contact.address, "contact.address")?,
        office_hours: raw.contact.office_hours,
    };

    Ok(Site {
        site,
        foundation: raw.foundation,
        contact,
    })
}

fn validate_nonempty(value: String, field_name: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty value in '{}' field",
            field_name
        )));
    }
    Ok(value)
}

/// Validate a color value of the form #rrggbb.
///
/// Colors flow into inline styles and the theme-color meta tag, so
/// anything that is not a plain hex triplet is rejected up front.
fn validate_hex_color(value: String, field_name: &str) -> Result<String> {
    let ok = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());

    if !ok {
        return Err(Error::ConfigParse(format!(
            "Invalid color in '{}': '{}'. Expected #rrggbb.",
            field_name, value
        )));
    }
    Ok(value)
}

/// Validate a user@host shaped email address.
///
/// This is a structural check only; semantic validation of addresses is
/// out of scope (the address is rendered as a mailto: link, never sent to).
fn validate_email(value: String, field_name: &str) -> Result<String> {
    let Some((user, host)) = value.split_once('@') else {
        return Err(Error::ConfigParse(format!(
            "Invalid email in '{}': '{}' has no '@'",
            field_name, value
        )));
    };

    if user.is_empty() || host.is_empty() || !host.contains('.') {
        return Err(Error::ConfigParse(format!(
            "Invalid email in '{}': '{}'",
            field_name, value
        )));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
[site]
domain = "test.example.org"
accent_color = "#d4af37"
theme_color = "#1e40af"

[foundation]
name = "Test Foundation"
tagline = "Testing for good"
region = "Delta State, Nigeria"

[contact]
email = "hello@example.org"
phones = ["+234 800 000 0000"]
address = "Warri, Delta State"
"##;

    #[test]
    fn parse_minimal_config() {
        let site = parse_site_toml_str(MINIMAL).unwrap();
        assert_eq!(site.foundation.name, "Test Foundation");
        assert_eq!(site.contact.phones.len(), 1);
        assert!(site.contact.office_hours.is_empty());
    }

    #[test]
    fn office_hours_are_optional() {
        let with_hours = format!(
            "{}\noffice_hours = [\"Monday - Friday: 9:00 AM - 5:00 PM\"]\n",
            MINIMAL
        );
        let site = parse_site_toml_str(&with_hours).unwrap();
        assert_eq!(site.contact.office_hours.len(), 1);
    }

    #[test]
    fn rejects_missing_section() {
        let truncated = MINIMAL.replace("[contact]", "[contact_typo]");
        assert!(parse_site_toml_str(&truncated).is_err());
    }

    #[test]
    fn rejects_bad_accent_color() {
        for bad in ["d4af37", "#d4af3", "#d4af3g", "#d4af37aa", "gold"] {
            let toml = MINIMAL.replace("#d4af37", bad);
            let result = parse_site_toml_str(&toml);
            assert!(result.is_err(), "accepted bad color {:?}", bad);
            assert!(
                result.unwrap_err().to_string().contains("site.accent_color"),
                "error for {:?} should name the field",
                bad
            );
        }
    }

    #[test]
    fn rejects_bad_email() {
        for bad in ["hello", "@example.org", "hello@", "hello@localhost"] {
            let toml = MINIMAL.replace("hello@example.org", bad);
            let result = parse_site_toml_str(&toml);
            assert!(result.is_err(), "accepted bad email {:?}", bad);
            assert!(result.unwrap_err().to_string().contains("contact.email"));
        }
    }

    #[test]
    fn rejects_empty_domain() {
        let toml = MINIMAL.replace("test.example.org", "   ");
        let result = parse_site_toml_str(&toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("site.domain"));
    }
}
