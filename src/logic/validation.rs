//! Form validation
//!
//! Pure checks for the lead edit form and the conversion form.

use crate::api::NewOpportunity;
use crate::model::{ConvertFormState, FieldErrors};

pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Basic address shape: `local@domain.tld`, no whitespace, exactly one `@`
///
/// # Examples
/// ```
/// use sellertui::logic::validation::validate_email;
///
/// assert!(validate_email("ana@acme.com"));
/// assert!(!validate_email("ana.acme.com"));
/// assert!(!validate_email("ana@acme"));
/// assert!(!validate_email("ana @acme.com"));
/// ```
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Some dot inside the domain with text on both sides
    domain
        .char_indices()
        .any(|(idx, c)| c == '.' && idx > 0 && idx + 1 < domain.len())
}

pub fn validate_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Parse the optional amount field
///
/// Empty input is `Ok(None)`; otherwise a finite, non-negative number.
pub fn parse_amount(raw: &str) -> Result<Option<f64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err("Amount must be a valid number".to_string()),
    }
}

/// Validate the conversion form and build the create request
pub fn validate_conversion(form: &ConvertFormState) -> Result<NewOpportunity, FieldErrors> {
    let mut errors = FieldErrors::default();

    if !validate_required(&form.name) {
        errors.name = Some("Opportunity name is required".to_string());
    }
    if form.stage.is_none() {
        errors.stage = Some("Stage is required".to_string());
    }
    if !validate_required(&form.account_name) {
        errors.account_name = Some("Account name is required".to_string());
    }

    let amount = match parse_amount(&form.amount) {
        Ok(amount) => amount,
        Err(msg) => {
            errors.amount = Some(msg);
            None
        }
    };

    match form.stage {
        Some(stage) if errors.is_empty() => Ok(NewOpportunity {
            name: form.name.clone(),
            stage,
            amount,
            account_name: form.account_name.clone(),
            lead_id: form.lead_id.clone(),
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::OpportunityStage;
    use crate::model::ConvertField;

    fn form() -> ConvertFormState {
        ConvertFormState {
            lead_id: "lead-1".to_string(),
            lead_name: "Ana".to_string(),
            name: "Ana Deal".to_string(),
            account_name: "Acme".to_string(),
            stage: Some(OpportunityStage::Prospecting),
            amount: String::new(),
            focus: ConvertField::Name,
            field_errors: FieldErrors::default(),
            converting: false,
            error: None,
        }
    }

    #[test]
    fn test_email_requires_at() {
        assert!(!validate_email("no-at-sign.example.com"));
    }

    #[test]
    fn test_email_rejects_double_at() {
        assert!(!validate_email("a@b@c.com"));
    }

    #[test]
    fn test_email_rejects_dot_at_domain_edges() {
        assert!(!validate_email("a@.com"));
        assert!(!validate_email("a@com."));
        assert!(validate_email("a@mail.co.uk"));
    }

    #[test]
    fn test_email_empty() {
        assert!(!validate_email(""));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(""), Ok(None));
        assert_eq!(parse_amount("  "), Ok(None));
        assert_eq!(parse_amount("5000"), Ok(Some(5000.0)));
        assert_eq!(parse_amount("12.5"), Ok(Some(12.5)));
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("-3").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_conversion_requires_fields() {
        let mut f = form();
        f.name = "   ".to_string();
        f.account_name.clear();
        f.stage = None;

        let errors = validate_conversion(&f).unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.account_name.is_some());
        assert!(errors.stage.is_some());
        assert!(errors.amount.is_none());
    }

    #[test]
    fn test_conversion_bad_amount() {
        let mut f = form();
        f.amount = "lots".to_string();
        let errors = validate_conversion(&f).unwrap_err();
        assert_eq!(errors.amount.as_deref(), Some("Amount must be a valid number"));
    }

    #[test]
    fn test_conversion_without_amount() {
        let draft = validate_conversion(&form()).unwrap();
        assert_eq!(draft.amount, None);
        assert_eq!(draft.lead_id, "lead-1");
    }
}
