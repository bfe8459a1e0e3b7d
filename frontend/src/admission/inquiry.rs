use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\+]?[(]?[0-9]{3}[)]?[-\s\.]?[0-9]{3}[-\s\.]?[0-9]{4,6}$").expect("phone pattern")
});

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InquiryField {
    FirstName,
    LastName,
    Email,
    Phone,
    ChildAge,
    Location,
}

impl InquiryField {
    /// The form control name, which is also what the markup labels it.
    pub fn name(self) -> &'static str {
        match self {
            InquiryField::FirstName => "firstName",
            InquiryField::LastName => "lastName",
            InquiryField::Email => "email",
            InquiryField::Phone => "phone",
            InquiryField::ChildAge => "childAge",
            InquiryField::Location => "location",
        }
    }
}

/// Raw values as typed into the booking form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InquiryForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub child_age: String,
    pub location: String,
}

impl InquiryForm {
    pub fn set(&mut self, field: InquiryField, value: String) {
        let slot = match field {
            InquiryField::FirstName => &mut self.first_name,
            InquiryField::LastName => &mut self.last_name,
            InquiryField::Email => &mut self.email,
            InquiryField::Phone => &mut self.phone,
            InquiryField::ChildAge => &mut self.child_age,
            InquiryField::Location => &mut self.location,
        };
        *slot = value;
    }

    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::FirstName => &self.first_name,
            InquiryField::LastName => &self.last_name,
            InquiryField::Email => &self.email,
            InquiryField::Phone => &self.phone,
            InquiryField::ChildAge => &self.child_age,
            InquiryField::Location => &self.location,
        }
    }

    /// Fields worth flagging to the user. Empty fields are left to the
    /// browser's `required` handling.
    pub fn invalid_fields(&self) -> Vec<InquiryField> {
        let mut invalid = Vec::new();
        if !self.email.is_empty() && !validate_email(&self.email) {
            invalid.push(InquiryField::Email);
        }
        if !self.phone.is_empty() && !validate_phone(&self.phone) {
            invalid.push(InquiryField::Phone);
        }
        invalid
    }
}

/// The payload the admissions API accepts.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionInquiry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub location: String,
}

impl From<&InquiryForm> for AdmissionInquiry {
    fn from(form: &InquiryForm) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            // The API calls it age, the form asks for the child's age.
            age: form.child_age.clone(),
            location: form.location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> InquiryForm {
        let mut form = InquiryForm::default();
        form.set(InquiryField::FirstName, "A".into());
        form.set(InquiryField::LastName, "B".into());
        form.set(InquiryField::Email, "a@b.com".into());
        form.set(InquiryField::Phone, "5551234567".into());
        form.set(InquiryField::ChildAge, "10".into());
        form.set(InquiryField::Location, "X".into());
        form
    }

    #[test]
    fn child_age_is_sent_as_age() {
        let inquiry = AdmissionInquiry::from(&sample_form());
        let json = serde_json::to_value(&inquiry).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "A",
                "lastName": "B",
                "email": "a@b.com",
                "phone": "5551234567",
                "age": "10",
                "location": "X"
            })
        );
        assert!(json.get("childAge").is_none());
    }

    #[test]
    fn payload_keys_keep_form_order() {
        let raw = serde_json::to_string(&AdmissionInquiry::from(&sample_form())).unwrap();
        assert_eq!(
            raw,
            r#"{"firstName":"A","lastName":"B","email":"a@b.com","phone":"5551234567","age":"10","location":"X"}"#
        );
    }

    #[test]
    fn email_validation() {
        assert!(validate_email("user@example.com"));
        assert!(!validate_email("user@@example"));
        assert!(!validate_email("user example@mail.com"));
        assert!(!validate_email("user@example"));
    }

    #[test]
    fn phone_validation() {
        assert!(validate_phone("555-123-4567"));
        assert!(validate_phone("(555) 123-4567"));
        assert!(validate_phone("+5551234567"));
        assert!(validate_phone("555.123.456789"));
        assert!(!validate_phone("abc"));
        assert!(!validate_phone("55-123-4567"));
    }

    #[test]
    fn only_filled_in_bad_values_are_flagged() {
        let mut form = InquiryForm::default();
        assert!(form.invalid_fields().is_empty());

        form.set(InquiryField::Email, "nope".into());
        form.set(InquiryField::Phone, "555-123-4567".into());
        assert_eq!(form.invalid_fields(), vec![InquiryField::Email]);

        form.set(InquiryField::Phone, "12".into());
        assert_eq!(form.invalid_fields(), vec![InquiryField::Email, InquiryField::Phone]);
    }
}
