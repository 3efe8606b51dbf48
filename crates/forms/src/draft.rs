use std::str::FromStr;

use thiserror::Error;
use user_api::models::{
    payload::{CreateUserPayload, UpdateUserPayload},
    user::User,
    Perfil, Status,
};

use crate::field::Field;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("`{0}` is not part of this form")]
    UnknownField(Field),

    #[error("`{value}` is not a valid {field}")]
    InvalidChoice { field: Field, value: String },
}

/// Field-by-field access shared by both draft shapes.
pub trait Draft: Default + Clone {
    /// Inputs of this form, in display order.
    const FIELDS: &'static [Field];

    /// Current value rendered as text; choices use their wire name.
    fn value(&self, field: Field) -> Option<String>;

    fn set(&mut self, field: Field, value: &str) -> Result<(), DraftError>;
}

/// Blank selects the empty choice.
fn parse_choice<T: FromStr>(field: Field, value: &str) -> Result<Option<T>, DraftError> {
    let value = value.trim();

    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse()
        .map(Some)
        .map_err(|_| DraftError::InvalidChoice {
            field,
            value: value.to_string(),
        })
}

fn choice_text<T: AsRef<str>>(choice: &Option<T>) -> String {
    choice
        .as_ref()
        .map(|c| c.as_ref().to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    pub department: String,
    pub status: Option<Status>,
    pub profile: Option<Perfil>,
    pub password: String,
    pub password_confirmation: String,
}

impl Default for CreateDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            job_title: String::new(),
            department: String::new(),
            status: Some(Status::Ativo),
            profile: Some(Perfil::UsuarioPadrao),
            password: String::new(),
            password_confirmation: String::new(),
        }
    }
}

impl Draft for CreateDraft {
    const FIELDS: &'static [Field] = &[
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::JobTitle,
        Field::Department,
        Field::Profile,
        Field::Status,
        Field::Password,
        Field::PasswordConfirmation,
    ];

    fn value(&self, field: Field) -> Option<String> {
        let value = match field {
            Field::Name => self.name.clone(),
            Field::Email => self.email.clone(),
            Field::Phone => self.phone.clone(),
            Field::JobTitle => self.job_title.clone(),
            Field::Department => self.department.clone(),
            Field::Profile => choice_text(&self.profile),
            Field::Status => choice_text(&self.status),
            Field::Password => self.password.clone(),
            Field::PasswordConfirmation => self.password_confirmation.clone(),
        };

        Some(value)
    }

    fn set(&mut self, field: Field, value: &str) -> Result<(), DraftError> {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Phone => self.phone = value.to_string(),
            Field::JobTitle => self.job_title = value.to_string(),
            Field::Department => self.department = value.to_string(),
            Field::Profile => self.profile = parse_choice(field, value)?,
            Field::Status => self.status = parse_choice(field, value)?,
            Field::Password => self.password = value.to_string(),
            Field::PasswordConfirmation => self.password_confirmation = value.to_string(),
        }

        Ok(())
    }
}

impl CreateDraft {
    /// Request body for the draft, or `None` while a choice is unset.
    pub fn to_payload(&self) -> Option<CreateUserPayload> {
        Some(CreateUserPayload {
            nome: self.name.clone(),
            login: self.email.clone(),
            senha: self.password.clone(),
            perfil: self.profile?,
            telefone: self.phone.clone(),
            cargo: self.job_title.clone(),
            departamento: self.department.clone(),
            status: self.status?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    pub department: String,
    pub status: Option<Status>,
    pub profile: Option<Perfil>,
}

impl From<&User> for EditDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.nome.clone(),
            email: user.email.clone(),
            phone: user.telefone.clone().unwrap_or_default(),
            job_title: user.cargo.clone().unwrap_or_default(),
            department: user.departamento.clone().unwrap_or_default(),
            status: Some(Status::from(user.ativo)),
            profile: Some(user.known_perfil().unwrap_or_default()),
        }
    }
}

impl Draft for EditDraft {
    const FIELDS: &'static [Field] = &[
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::JobTitle,
        Field::Department,
        Field::Profile,
        Field::Status,
    ];

    fn value(&self, field: Field) -> Option<String> {
        let value = match field {
            Field::Name => self.name.clone(),
            Field::Email => self.email.clone(),
            Field::Phone => self.phone.clone(),
            Field::JobTitle => self.job_title.clone(),
            Field::Department => self.department.clone(),
            Field::Profile => choice_text(&self.profile),
            Field::Status => choice_text(&self.status),
            Field::Password | Field::PasswordConfirmation => return None,
        };

        Some(value)
    }

    fn set(&mut self, field: Field, value: &str) -> Result<(), DraftError> {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Phone => self.phone = value.to_string(),
            Field::JobTitle => self.job_title = value.to_string(),
            Field::Department => self.department = value.to_string(),
            Field::Profile => self.profile = parse_choice(field, value)?,
            Field::Status => self.status = parse_choice(field, value)?,
            Field::Password | Field::PasswordConfirmation => {
                return Err(DraftError::UnknownField(field))
            }
        }

        Ok(())
    }
}

impl EditDraft {
    pub fn to_payload(&self) -> Option<UpdateUserPayload> {
        Some(UpdateUserPayload {
            nome: self.name.clone(),
            email: self.email.clone(),
            telefone: self.phone.clone(),
            cargo: self.job_title.clone(),
            departamento: self.department.clone(),
            perfil: self.profile?,
            ativo: self.status?.is_active(),
        })
    }
}

#[cfg(test)]
mod test {
    use user_api::models::{user::User, Perfil, Status};

    use super::*;

    #[test]
    fn create_defaults() {
        let draft = CreateDraft::default();

        assert_eq!(draft.status, Some(Status::Ativo));
        assert_eq!(draft.profile, Some(Perfil::UsuarioPadrao));
        assert!(draft.password.is_empty());
        assert_eq!(draft.value(Field::Profile).as_deref(), Some("USUARIO_PADRAO"));
    }

    #[test]
    fn set_choices() {
        let mut draft = CreateDraft::default();

        draft.set(Field::Profile, "ADMINISTRADOR_GESTOR").unwrap();
        draft.set(Field::Status, "inativo").unwrap();
        assert_eq!(draft.profile, Some(Perfil::AdministradorGestor));
        assert_eq!(draft.status, Some(Status::Inativo));

        draft.set(Field::Profile, "").unwrap();
        assert_eq!(draft.profile, None);
        assert!(draft.to_payload().is_none());

        let err = draft.set(Field::Status, "banido").unwrap_err();
        assert!(matches!(err, DraftError::InvalidChoice { field: Field::Status, .. }));
    }

    #[test]
    fn create_payload_maps_email_to_login() {
        let mut draft = CreateDraft::default();
        draft.set(Field::Name, "Ana").unwrap();
        draft.set(Field::Email, "ana@x.io").unwrap();
        draft.set(Field::Password, "secret1").unwrap();

        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.login, "ana@x.io");
        assert_eq!(payload.senha, "secret1");
        assert_eq!(payload.status, Status::Ativo);
    }

    #[test]
    fn edit_draft_has_no_password() {
        let mut draft = EditDraft::default();

        assert_eq!(draft.value(Field::Password), None);
        assert_eq!(
            draft.set(Field::PasswordConfirmation, "x"),
            Err(DraftError::UnknownField(Field::PasswordConfirmation))
        );
    }

    #[test]
    fn edit_draft_from_user() {
        let user = User {
            id: 5,
            nome: "Bia".into(),
            login: "bia".into(),
            email: "bia@x.io".into(),
            telefone: Some("21 9999".into()),
            cargo: None,
            departamento: Some("TI".into()),
            perfil: Some("ADMINISTRADOR_GESTOR".into()),
            ativo: false,
            avatar: None,
        };

        let draft = EditDraft::from(&user);

        assert_eq!(draft.name, "Bia");
        assert_eq!(draft.email, "bia@x.io");
        assert_eq!(draft.phone, "21 9999");
        assert_eq!(draft.job_title, "");
        assert_eq!(draft.department, "TI");
        assert_eq!(draft.value(Field::Status).as_deref(), Some("inativo"));
        assert_eq!(draft.profile, Some(Perfil::AdministradorGestor));

        let payload = draft.to_payload().unwrap();
        assert!(!payload.ativo);
    }

    #[test]
    fn edit_draft_defaults_unknown_profile() {
        let user = User::default().perfil(Some("ROOT".into())).ativo(true);
        let draft = EditDraft::from(&user);

        assert_eq!(draft.profile, Some(Perfil::UsuarioPadrao));
        assert_eq!(draft.status, Some(Status::Ativo));
    }
}
