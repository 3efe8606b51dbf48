use std::collections::BTreeMap;

/// Every input a user form can carry. The string form is the key used by the
/// API and by error maps.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum Field {
    #[strum(serialize = "nome")]
    Name,
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "telefone")]
    Phone,
    #[strum(serialize = "cargo")]
    JobTitle,
    #[strum(serialize = "departamento")]
    Department,
    #[strum(serialize = "perfil")]
    Profile,
    #[strum(serialize = "status")]
    Status,
    #[strum(serialize = "senha")]
    Password,
    #[strum(serialize = "confirmarSenha")]
    PasswordConfirmation,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Nome completo",
            Self::Email => "Email",
            Self::Phone => "Telefone",
            Self::JobTitle => "Cargo",
            Self::Department => "Departamento",
            Self::Profile => "Perfil",
            Self::Status => "Status",
            Self::Password => "Senha",
            Self::PasswordConfirmation => "Confirmar senha",
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Profile | Self::Status)
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::PasswordConfirmation)
    }
}

/// Per-field messages, kept in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Drops the message for `field`, returning whether there was one.
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}
