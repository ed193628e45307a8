use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Services a visitor can tick on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceInterest {
    Seo,
    Ppc,
    Social,
    Content,
    Email,
    Analytics,
}

impl ServiceInterest {
    pub const ALL: [ServiceInterest; 6] = [
        ServiceInterest::Seo,
        ServiceInterest::Ppc,
        ServiceInterest::Social,
        ServiceInterest::Content,
        ServiceInterest::Email,
        ServiceInterest::Analytics,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ServiceInterest::Seo => "seo",
            ServiceInterest::Ppc => "ppc",
            ServiceInterest::Social => "social",
            ServiceInterest::Content => "content",
            ServiceInterest::Email => "email",
            ServiceInterest::Analytics => "analytics",
        }
    }

    /// DOM id of the service's checkbox, prefixed so it never clashes with
    /// the text inputs or the service cards.
    pub fn input_id(self) -> String {
        format!("service-{}", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceInterest::Seo => "Search Engine Optimization",
            ServiceInterest::Ppc => "Pay-Per-Click Advertising",
            ServiceInterest::Social => "Social Media Marketing",
            ServiceInterest::Content => "Content Marketing",
            ServiceInterest::Email => "Email Marketing",
            ServiceInterest::Analytics => "Analytics & Reporting",
        }
    }
}

/// Free-text inputs on the contact form, keyed by their `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Message,
}

impl ContactField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "phone" => Some(ContactField::Phone),
            "company" => Some(ContactField::Company),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Company => "company",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub services: BTreeSet<ServiceInterest>,
    pub message: String,
}

impl ContactRequest {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Company => &mut self.company,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Adds the service if absent, removes it otherwise.
    pub fn toggle_service(&mut self, service: ServiceInterest) {
        if !self.services.remove(&service) {
            self.services.insert(service);
        }
    }

    pub fn is_blank(&self) -> bool {
        *self == ContactRequest::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
}

/// Per-field failures from the latest validation pass. A missing key means
/// the field is currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<ContactField, ValidationError>);

impl ValidationErrors {
    pub fn get(&self, field: ContactField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.keys().copied()
    }

    /// Returns true when an error was present and got removed.
    pub fn clear_field(&mut self, field: ContactField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate(request: &ContactRequest) -> ValidationErrors {
    let mut errors = BTreeMap::new();

    if request.name.trim().is_empty() {
        errors.insert(ContactField::Name, ValidationError::NameRequired);
    }

    if request.email.trim().is_empty() {
        errors.insert(ContactField::Email, ValidationError::EmailRequired);
    } else if !is_valid_email(&request.email) {
        errors.insert(ContactField::Email, ValidationError::EmailInvalid);
    }

    if request.message.trim().is_empty() {
        errors.insert(ContactField::Message, ValidationError::MessageRequired);
    }

    ValidationErrors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_name_is_the_only_error() {
        let errors = validate(&request("", "a@b.com", "hi"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(ContactField::Name), Some(ValidationError::NameRequired));
        assert_eq!(errors.get(ContactField::Name).map(|e| e.to_string()).as_deref(), Some("Name is required"));
    }

    #[test]
    fn malformed_email_is_the_only_error() {
        let errors = validate(&request("Jo", "not-an-email", "hi"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(ContactField::Email), Some(ValidationError::EmailInvalid));
        assert_eq!(errors.get(ContactField::Email).map(|e| e.to_string()).as_deref(), Some("Email is invalid"));
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let errors = validate(&request("   ", " \t ", "\n"));
        assert_eq!(errors.get(ContactField::Name), Some(ValidationError::NameRequired));
        assert_eq!(errors.get(ContactField::Email), Some(ValidationError::EmailRequired));
        assert_eq!(errors.get(ContactField::Message), Some(ValidationError::MessageRequired));
    }

    #[test]
    fn any_non_blank_name_passes() {
        for name in ["J", " Jo ", "Jo Anne", "\u{e9}lise"] {
            let errors = validate(&request(name, "a@b.com", "hi"));
            assert_eq!(errors.get(ContactField::Name), None, "name {name:?}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "plainaddress",
            "no-dot@domain",
            "@b.com",
            "a@.com",
            "a@b.",
            "a@@b.com",
            "a b@c.com",
            "a@b .com",
            " a@b.com",
            "a@b.com ",
            "a@b.c\tom",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be rejected");
            let errors = validate(&request("Jo", email, "hi"));
            assert_eq!(errors.get(ContactField::Email), Some(ValidationError::EmailInvalid), "{email:?}");
        }
    }

    #[test]
    fn accepts_well_formed_addresses() {
        for email in ["a@b.com", "first.last@example.co.uk", "x+tag@sub.domain.io", "a@b.c.d"] {
            assert!(is_valid_email(email), "{email:?} should be accepted");
            assert!(validate(&request("Jo", email, "hi")).is_empty());
        }
    }

    #[test]
    fn optional_fields_are_never_checked() {
        let mut req = request("Jo", "jo@example.com", "hello");
        req.phone = "not a phone".to_string();
        req.company = "   ".to_string();
        req.toggle_service(ServiceInterest::Seo);
        assert!(validate(&req).is_empty());
    }

    #[test]
    fn toggling_a_service_twice_removes_it() {
        let mut req = ContactRequest::default();
        req.toggle_service(ServiceInterest::Ppc);
        req.toggle_service(ServiceInterest::Email);
        assert_eq!(req.services.len(), 2);
        req.toggle_service(ServiceInterest::Ppc);
        assert_eq!(req.services.iter().copied().collect::<Vec<_>>(), vec![ServiceInterest::Email]);
    }

    #[test]
    fn field_names_round_trip_through_form_attributes() {
        for field in [
            ContactField::Name,
            ContactField::Email,
            ContactField::Phone,
            ContactField::Company,
            ContactField::Message,
        ] {
            assert_eq!(ContactField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(ContactField::from_name("services"), None);
    }

    #[test]
    fn checkbox_ids_stay_clear_of_field_ids() {
        let fields = [
            ContactField::Name,
            ContactField::Email,
            ContactField::Phone,
            ContactField::Company,
            ContactField::Message,
        ];
        for service in ServiceInterest::ALL {
            let id = service.input_id();
            assert!(fields.iter().all(|field| field.as_str() != id), "{id} collides");
        }
        assert_eq!(ServiceInterest::Email.input_id(), "service-email");
    }

    #[test]
    fn serialises_services_by_id() {
        let mut req = request("Jo", "jo@example.com", "hi");
        req.toggle_service(ServiceInterest::Analytics);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["services"], serde_json::json!(["analytics"]));
        for service in ServiceInterest::ALL {
            assert_eq!(serde_json::to_value(service).unwrap(), serde_json::json!(service.id()));
        }
    }
}
