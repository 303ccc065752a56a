//! Contact form state. Submission stays on the client: it is validated,
//! logged and handed back to the caller.

use crate::error::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Company, Field::Message];

    /// Form control `name`/`id` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Company => "Company Name",
            Field::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Company)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

/// A validated, trimmed form snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

impl ContactFormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First failing field in display order.
    pub fn validate(&self) -> Result<(), FormError> {
        for field in Field::ALL {
            if field.is_required() && self.get(field).trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    pub fn submit(&self) -> Result<Submission, FormError> {
        self.validate()?;
        let company = self.company.trim();
        let submission = Submission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
            message: self.message.trim().to_string(),
        };
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            company = submission.company.as_deref().unwrap_or("-"),
            message_len = submission.message.len(),
            "contact form submitted"
        );
        Ok(submission)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactFormState {
        let mut form = ContactFormState::default();
        form.set(Field::Name, "Ada Lovelace");
        form.set(Field::Email, " ada@example.com ");
        form.set(Field::Message, "We need a risk review.");
        form
    }

    #[test]
    fn set_and_get_round_through_fields() {
        let mut form = ContactFormState::default();
        for field in Field::ALL {
            form.set(field, field.key());
        }
        for field in Field::ALL {
            assert_eq!(form.get(field), field.key());
        }
    }

    #[test]
    fn required_fields_reported_in_order() {
        let mut form = ContactFormState::default();
        assert_eq!(form.validate(), Err(FormError::MissingField(Field::Name)));

        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "   ");
        assert_eq!(form.validate(), Err(FormError::MissingField(Field::Message)));
    }

    #[test]
    fn company_is_optional() {
        let submission = filled().submit().unwrap();
        assert_eq!(submission.company, None);
        assert_eq!(submission.email, "ada@example.com");
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["ada", "ada@", "@example.com", "ada@example", "a@b@c.com", "a b@c.com", "a@b.com."] {
            let mut form = filled();
            form.set(Field::Email, bad);
            assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn clear_resets_every_field() {
        let mut form = filled();
        form.set(Field::Company, "Aon");
        form.clear();
        assert_eq!(form, ContactFormState::default());
    }
}
