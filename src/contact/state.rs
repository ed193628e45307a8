use log::debug;

use super::validation::{validate, ContactField, ContactRequest, ServiceInterest, ValidationErrors};

/// Field values being composed plus the errors from the last validation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    request: ContactRequest,
    errors: ValidationErrors,
}

impl FormState {
    pub fn request(&self) -> &ContactRequest {
        &self.request
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Stores the new value and drops any error shown for that field. The
    /// rest of the form is not re-validated until the next submit.
    pub fn edit(&mut self, field: ContactField, value: String) {
        self.request.set_field(field, value);
        if self.errors.clear_field(field) {
            debug!("cleared {} error after edit", field.as_str());
        }
    }

    pub fn toggle_service(&mut self, service: ServiceInterest) {
        self.request.toggle_service(service);
    }

    /// Replaces the error set wholesale. Returns true when the form passes.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.request);
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.request = ContactRequest::default();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::ValidationError;

    #[test]
    fn editing_an_errored_field_clears_only_that_error() {
        let mut form = FormState::default();
        assert!(!form.validate());
        assert_eq!(form.errors().len(), 3);

        form.edit(ContactField::Name, "J".to_string());
        assert_eq!(form.errors().get(ContactField::Name), None);
        assert_eq!(form.errors().get(ContactField::Email), Some(ValidationError::EmailRequired));
        assert_eq!(form.errors().get(ContactField::Message), Some(ValidationError::MessageRequired));
    }

    #[test]
    fn edits_do_not_revalidate() {
        let mut form = FormState::default();
        form.validate();
        form.edit(ContactField::Email, "still wrong".to_string());
        assert_eq!(form.errors().get(ContactField::Email), None);

        form.validate();
        assert_eq!(form.errors().get(ContactField::Email), Some(ValidationError::EmailInvalid));
    }

    #[test]
    fn validation_recomputes_the_whole_set() {
        let mut form = FormState::default();
        form.edit(ContactField::Name, "Jo".to_string());
        form.edit(ContactField::Email, "jo@example.com".to_string());
        form.validate();
        assert_eq!(form.errors().fields().collect::<Vec<_>>(), vec![ContactField::Message]);

        form.edit(ContactField::Message, "hello".to_string());
        form.edit(ContactField::Name, String::new());
        assert!(!form.validate());
        assert_eq!(form.errors().fields().collect::<Vec<_>>(), vec![ContactField::Name]);
    }

    #[test]
    fn optional_fields_edit_without_touching_errors() {
        let mut form = FormState::default();
        form.validate();
        form.edit(ContactField::Company, "Acme".to_string());
        form.edit(ContactField::Phone, "555".to_string());
        assert_eq!(form.errors().len(), 3);
        assert_eq!(form.request().company, "Acme");
        assert_eq!(form.request().field(ContactField::Phone), "555");
    }

    #[test]
    fn clear_empties_values_and_errors() {
        let mut form = FormState::default();
        form.edit(ContactField::Name, "Jo".to_string());
        form.toggle_service(ServiceInterest::Content);
        form.validate();
        form.clear();
        assert!(form.request().is_blank());
        assert!(form.errors().is_empty());
    }
}
