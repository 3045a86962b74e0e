use thiserror::Error;

pub const CONTACT_THANKS: &str = "Thank you for your message! We will get back to you soon.";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    MissingFields { missing: Vec<&'static str> },
}

/// The contact form: all three fields are required
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContactError::MissingFields { missing })
        }
    }

    /// Validate and, on success, clear the form and return the acknowledgement
    pub fn submit(&mut self) -> Result<&'static str, ContactError> {
        self.validate()?;
        self.reset();
        Ok(CONTACT_THANKS)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Where should I go in June?".into(),
        }
    }

    #[test]
    fn test_complete_form_submits_and_resets() {
        let mut form = filled();
        assert_eq!(form.submit(), Ok(CONTACT_THANKS));
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let mut form = filled();
        form.email.clear();
        form.message.clear();

        let err = form.submit().unwrap_err();
        assert_eq!(err, ContactError::MissingFields { missing: vec!["email", "message"] });
        assert_eq!(err.to_string(), "Please fill in all fields.");
        // Nothing is lost on failure
        assert_eq!(form.name, "Ada");
    }
}
