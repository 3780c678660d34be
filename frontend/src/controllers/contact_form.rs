//! Client side of the contact form: required-field check before posting,
//! and the banner for the relay's redirect status.

pub const REQUIRED_FIELDS: [&str; 4] = ["full_name", "email", "goal", "message"];

pub const ERROR_BORDER: &str = "#ff0055";
pub const NORMAL_BORDER: &str = "rgba(255, 255, 255, 0.2)";

/// Names of required fields whose trimmed value is empty.
pub fn missing_fields<'a>(values: &[(&'a str, &str)]) -> Vec<&'a str> {
    values
        .iter()
        .filter(|(name, value)| REQUIRED_FIELDS.contains(name) && value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayStatus {
    Empty,
    Success,
    Error,
}

impl RelayStatus {
    pub fn parse(status: &str) -> Option<Self> {
        match status {
            "empty" => Some(RelayStatus::Empty),
            "success" => Some(RelayStatus::Success),
            "error" => Some(RelayStatus::Error),
            _ => None,
        }
    }

    pub fn banner_class(&self) -> &'static str {
        match self {
            RelayStatus::Success => "form-status form-status-success",
            RelayStatus::Empty | RelayStatus::Error => "form-status form-status-error",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RelayStatus::Empty => "Please fill in all required fields.",
            RelayStatus::Success => "Thanks! Your inquiry is on its way, we'll be in touch shortly.",
            RelayStatus::Error => "Something went wrong sending your message. Please try again or email us directly.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_fields_are_reported() {
        let values = [
            ("full_name", "Ada"),
            ("email", "  "),
            ("company", ""),
            ("goal", ""),
            ("message", "Hello"),
        ];
        assert_eq!(missing_fields(&values), vec!["email", "goal"]);
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let values = [
            ("full_name", "Ada"),
            ("email", "ada@example.com"),
            ("company", ""),
            ("goal", "Brand film"),
            ("message", "Hello"),
            ("timeline", ""),
        ];
        assert!(missing_fields(&values).is_empty());
    }

    #[test]
    fn status_query_values_map_to_banners() {
        assert_eq!(RelayStatus::parse("success"), Some(RelayStatus::Success));
        assert_eq!(RelayStatus::parse("bogus"), None);
        assert_eq!(RelayStatus::Error.banner_class(), "form-status form-status-error");
    }
}
