use crate::domain::payment::PaymentRequest;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

// Kenyan mobile numbers: +254 or 0 prefix, then a 7xx/1xx block.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\+254|0)[17]\d{8}$").expect("phone regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationProfile {
    Standard,
    /// Invoice-originated payments carry no customer contact details by
    /// construction; empty email/phone are tolerated, non-empty values are
    /// still format-checked.
    InvoiceOriginated,
}

#[derive(Debug)]
pub struct ValidationReport {
    pub ok: bool,
    pub errors: Vec<String>,
}

/// Pure field validation. Every rule is evaluated; the report carries one
/// message per violation so a caller can fix all of them in one pass.
pub fn validate_payment(request: &PaymentRequest, profile: ValidationProfile) -> ValidationReport {
    let mut errors = Vec::new();

    if request.service_id.trim().is_empty() {
        errors.push("serviceId is required".to_string());
    }
    if request.amount <= 0.0 {
        errors.push("amount must be greater than zero".to_string());
    }
    if request.currency.trim().is_empty() {
        errors.push("currency is required".to_string());
    }
    if request.customer_name.trim().is_empty() {
        errors.push("customerName is required".to_string());
    }

    let skip_contact_rules = profile == ValidationProfile::InvoiceOriginated;
    if !(skip_contact_rules && request.customer_email.is_empty())
        && !EMAIL_RE.is_match(&request.customer_email)
    {
        errors.push("customerEmail is not a valid email address".to_string());
    }
    if !(skip_contact_rules && request.customer_phone.is_empty())
        && !PHONE_RE.is_match(&request.customer_phone)
    {
        errors.push("customerPhone is not a valid Kenyan phone number".to_string());
    }

    if request.reference_number.trim().is_empty() {
        errors.push("referenceNumber is required".to_string());
    }

    ValidationReport {
        ok: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> PaymentRequest {
        PaymentRequest {
            service_id: "PASSPORT_RENEWAL".to_string(),
            amount: 4550.0,
            currency: "KES".to_string(),
            customer_name: "John Doe".to_string(),
            customer_email: "john.doe@example.com".to_string(),
            customer_phone: "+254712345678".to_string(),
            description: "Passport renewal fee".to_string(),
            reference_number: "REF-2025-001".to_string(),
        }
    }

    #[test]
    fn accepts_valid_request() {
        let report = validate_payment(&valid_request(), ValidationProfile::Standard);
        assert!(report.ok);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn accepts_local_format_phone() {
        let mut req = valid_request();
        req.customer_phone = "0712345678".to_string();
        assert!(validate_payment(&req, ValidationProfile::Standard).ok);
        req.customer_phone = "0110345678".to_string();
        assert!(validate_payment(&req, ValidationProfile::Standard).ok);
    }

    #[test]
    fn rejects_short_or_foreign_phone() {
        let mut req = valid_request();
        req.customer_phone = "+25571234567".to_string();
        assert!(!validate_payment(&req, ValidationProfile::Standard).ok);
        req.customer_phone = "071234567".to_string();
        assert!(!validate_payment(&req, ValidationProfile::Standard).ok);
    }

    #[test]
    fn invoice_profile_tolerates_empty_contacts_only() {
        let mut req = valid_request();
        req.customer_email = String::new();
        req.customer_phone = String::new();
        assert!(validate_payment(&req, ValidationProfile::InvoiceOriginated).ok);
        assert!(!validate_payment(&req, ValidationProfile::Standard).ok);

        req.customer_email = "not-an-email".to_string();
        let report = validate_payment(&req, ValidationProfile::InvoiceOriginated);
        assert_eq!(
            report.errors,
            vec!["customerEmail is not a valid email address".to_string()]
        );
    }
}
