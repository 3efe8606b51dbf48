use std::sync::OnceLock;

use regex::Regex;

use crate::{
    draft::{CreateDraft, EditDraft},
    field::{Field, ValidationErrors},
    messages,
};

/// Something non-blank, an `@`, something, a `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();

    EMAIL
        .get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
        .is_match(email)
}

fn require(errors: &mut ValidationErrors, field: Field, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    if email.trim().is_empty() {
        errors.insert(Field::Email, messages::EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, messages::EMAIL_INVALID);
    }
}

pub fn validate_create(draft: &CreateDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    require(&mut errors, Field::Name, &draft.name, messages::NAME_REQUIRED);
    check_email(&mut errors, &draft.email);
    require(&mut errors, Field::Phone, &draft.phone, messages::PHONE_REQUIRED);
    require(
        &mut errors,
        Field::JobTitle,
        &draft.job_title,
        messages::JOB_TITLE_REQUIRED,
    );
    require(
        &mut errors,
        Field::Department,
        &draft.department,
        messages::DEPARTMENT_REQUIRED,
    );

    if draft.profile.is_none() {
        errors.insert(Field::Profile, messages::PROFILE_REQUIRED);
    }

    if draft.status.is_none() {
        errors.insert(Field::Status, messages::STATUS_REQUIRED);
    }

    if draft.password.is_empty() {
        errors.insert(Field::Password, messages::PASSWORD_REQUIRED);
    } else if draft.password.encode_utf16().count() < 6 {
        errors.insert(Field::Password, messages::PASSWORD_TOO_SHORT);
    }

    if !draft.password.is_empty() {
        if draft.password_confirmation.is_empty() {
            errors.insert(Field::PasswordConfirmation, messages::CONFIRMATION_REQUIRED);
        } else if draft.password != draft.password_confirmation {
            errors.insert(Field::PasswordConfirmation, messages::PASSWORD_MISMATCH);
        }
    }

    errors
}

/// Phone, job title and department stay optional when editing.
pub fn validate_edit(draft: &EditDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    require(&mut errors, Field::Name, &draft.name, messages::NAME_REQUIRED);
    check_email(&mut errors, &draft.email);

    if draft.profile.is_none() {
        errors.insert(Field::Profile, messages::PROFILE_REQUIRED);
    }

    if draft.status.is_none() {
        errors.insert(Field::Status, messages::STATUS_REQUIRED);
    }

    errors
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::draft::Draft;

    fn valid_create() -> CreateDraft {
        CreateDraft {
            name: "Ana Souza".into(),
            email: "ana@x.io".into(),
            phone: "(21) 99999-9999".into(),
            job_title: "Dev".into(),
            department: "TI".into(),
            password: "secret1".into(),
            password_confirmation: "secret1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_create_draft_has_no_errors() {
        assert!(validate_create(&valid_create()).is_empty());
    }

    #[test]
    fn every_required_text_field_is_flagged() {
        for field in [
            Field::Name,
            Field::Email,
            Field::Phone,
            Field::JobTitle,
            Field::Department,
        ] {
            let mut draft = valid_create();
            draft.set(field, "   ").unwrap();

            let errors = validate_create(&draft);
            assert!(errors.contains(field), "{field} should be required");
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn unset_profile_is_flagged() {
        let mut draft = valid_create();
        draft.profile = None;

        assert_eq!(
            validate_create(&draft).get(Field::Profile),
            Some(messages::PROFILE_REQUIRED)
        );
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("joao.silva@example.com"));
        assert!(!is_valid_email("joao"));
        assert!(!is_valid_email("joao@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("joao@.com"));

        let mut draft = valid_create();
        draft.email = "joao@example".into();
        assert_eq!(
            validate_create(&draft).get(Field::Email),
            Some(messages::EMAIL_INVALID)
        );
    }

    #[test]
    fn short_password() {
        let mut draft = valid_create();
        draft.password = "12345".into();
        draft.password_confirmation = "12345".into();

        let errors = validate_create(&draft);
        assert_eq!(errors.get(Field::Password), Some(messages::PASSWORD_TOO_SHORT));
        assert!(!errors.contains(Field::PasswordConfirmation));
    }

    #[test]
    fn password_length_counts_utf16_units() {
        let mut draft = valid_create();
        // three astral characters are six UTF-16 units
        draft.password = "🔑🔑🔑".into();
        draft.password_confirmation = "🔑🔑🔑".into();

        assert!(!validate_create(&draft).contains(Field::Password));

        draft.password = "ção12".into();
        draft.password_confirmation = "ção12".into();
        assert_eq!(
            validate_create(&draft).get(Field::Password),
            Some(messages::PASSWORD_TOO_SHORT)
        );
    }

    #[test]
    fn missing_password_skips_confirmation() {
        let mut draft = valid_create();
        draft.password.clear();
        draft.password_confirmation.clear();

        let errors = validate_create(&draft);
        assert_eq!(errors.get(Field::Password), Some(messages::PASSWORD_REQUIRED));
        assert!(!errors.contains(Field::PasswordConfirmation));
    }

    #[test]
    fn confirmation_rules() {
        let mut draft = valid_create();
        draft.password_confirmation = "secret2".into();
        assert_eq!(
            validate_create(&draft).get(Field::PasswordConfirmation),
            Some(messages::PASSWORD_MISMATCH)
        );

        draft.password_confirmation.clear();
        assert_eq!(
            validate_create(&draft).get(Field::PasswordConfirmation),
            Some(messages::CONFIRMATION_REQUIRED)
        );
    }

    #[test]
    fn edit_only_requires_identity_fields() {
        let draft = EditDraft {
            name: "Bia".into(),
            email: "bia@x.io".into(),
            status: Some(user_api::models::Status::Inativo),
            profile: Some(user_api::models::Perfil::UsuarioPadrao),
            ..Default::default()
        };
        assert!(validate_edit(&draft).is_empty());

        let errors = validate_edit(&EditDraft::default());
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Email, Field::Profile, Field::Status]
        );
    }
}
