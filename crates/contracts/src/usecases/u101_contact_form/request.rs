/// One input of the contact form.
///
/// `name()` is the multipart field name the form endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    ReplyTo,
    Message,
}

impl ContactField {
    /// Form order
    pub const ALL: [ContactField; 4] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::ReplyTo,
        ContactField::Message,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::ReplyTo => "_replyto",
            ContactField::Message => "message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::ReplyTo => "Your Email",
            ContactField::Message => "Your Message",
        }
    }

    /// Only the last name may be left blank; the browser enforces the rest.
    pub fn required(&self) -> bool {
        !matches!(self, ContactField::LastName)
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            ContactField::ReplyTo => "email",
            _ => "text",
        }
    }
}

/// Values currently typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub reply_to: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::ReplyTo => &self.reply_to,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::ReplyTo => &mut self.reply_to,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// `(wire name, value)` pairs in form order, ready for multipart encoding
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        ContactField::ALL
            .into_iter()
            .map(move |field| (field.name(), self.get(field)))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, value)| value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            first_name: "Ada".into(),
            last_name: String::new(),
            reply_to: "ada@example.com".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn test_fields_use_wire_names_in_form_order() {
        let form = filled();
        let fields: Vec<_> = form.fields().collect();
        assert_eq!(
            fields,
            vec![
                ("first_name", "Ada"),
                ("last_name", ""),
                ("_replyto", "ada@example.com"),
                ("message", "Hello"),
            ]
        );
    }

    #[test]
    fn test_set_and_get_roundtrip_per_field() {
        let mut form = ContactForm::default();
        form.set(ContactField::ReplyTo, "me@example.com".into());
        assert_eq!(form.get(ContactField::ReplyTo), "me@example.com");
        assert_eq!(form.reply_to, "me@example.com");
        assert!(!form.is_empty());
    }

    #[test]
    fn test_clear_empties_every_field() {
        let mut form = filled();
        form.clear();
        assert!(form.is_empty());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_only_last_name_is_optional() {
        let optional: Vec<_> = ContactField::ALL
            .into_iter()
            .filter(|f| !f.required())
            .collect();
        assert_eq!(optional, vec![ContactField::LastName]);
        assert_eq!(ContactField::ReplyTo.input_type(), "email");
    }
}
