//! Field-level validation rules for the contact form.
//!
//! Rules return i18n keys instead of prose so the messages follow the
//! active interface language.

/// Minimum lengths, matching the form's visible hints.
const MIN_NAME: usize = 2;
const MIN_SUBJECT: usize = 3;
const MIN_MESSAGE: usize = 10;

/// The validated contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Form field name as submitted.
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    /// i18n key of the visible label.
    pub fn label_key(&self) -> &'static str {
        match self {
            ContactField::Name => "contact.name",
            ContactField::Email => "contact.email",
            ContactField::Subject => "contact.subject",
            ContactField::Message => "contact.message",
        }
    }

    /// Check a raw value; `Err` carries the i18n key of the message.
    pub fn validate(&self, value: &str) -> Result<(), &'static str> {
        let value = value.trim();
        match self {
            ContactField::Name => {
                if value.is_empty() {
                    Err("contact.err_name_required")
                } else if value.chars().count() < MIN_NAME {
                    Err("contact.err_name_short")
                } else {
                    Ok(())
                }
            }
            ContactField::Email => {
                if value.is_empty() {
                    Err("contact.err_email_required")
                } else if !email_shape_ok(value) {
                    Err("contact.err_email_invalid")
                } else {
                    Ok(())
                }
            }
            ContactField::Subject => {
                if value.is_empty() {
                    Err("contact.err_subject_required")
                } else if value.chars().count() < MIN_SUBJECT {
                    Err("contact.err_subject_short")
                } else {
                    Ok(())
                }
            }
            ContactField::Message => {
                if value.is_empty() {
                    Err("contact.err_message_required")
                } else if value.chars().count() < MIN_MESSAGE {
                    Err("contact.err_message_short")
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// `local@domain.tld` with no whitespace, one `@`, and a non-empty label
/// on each side of the last dot.
fn email_shape_ok(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules() {
        assert_eq!(
            ContactField::Name.validate("  "),
            Err("contact.err_name_required")
        );
        assert_eq!(ContactField::Name.validate("G"), Err("contact.err_name_short"));
        assert_eq!(ContactField::Name.validate("Gui"), Ok(()));
    }

    #[test]
    fn email_rules() {
        assert_eq!(
            ContactField::Email.validate(""),
            Err("contact.err_email_required")
        );
        for bad in [
            "plain",
            "a b@mail.com",
            "@mail.com",
            "user@mail",
            "user@.com",
            "user@mail.",
            "user@@mail.com",
        ] {
            assert_eq!(
                ContactField::Email.validate(bad),
                Err("contact.err_email_invalid"),
                "{bad} should be rejected"
            );
        }
        assert_eq!(ContactField::Email.validate("user@mail.com"), Ok(()));
        assert_eq!(ContactField::Email.validate("  user@sub.mail.dev  "), Ok(()));
    }

    #[test]
    fn subject_rules() {
        assert_eq!(
            ContactField::Subject.validate(""),
            Err("contact.err_subject_required")
        );
        assert_eq!(
            ContactField::Subject.validate("hi"),
            Err("contact.err_subject_short")
        );
        assert_eq!(ContactField::Subject.validate("Job offer"), Ok(()));
    }

    #[test]
    fn message_rules() {
        assert_eq!(
            ContactField::Message.validate(""),
            Err("contact.err_message_required")
        );
        assert_eq!(
            ContactField::Message.validate("too short"),
            Err("contact.err_message_short")
        );
        assert_eq!(
            ContactField::Message.validate("long enough to pass the check"),
            Ok(())
        );
    }
}
