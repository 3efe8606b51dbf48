use std::fmt::Display;

use color_eyre::Result;
use forms::{dialog::Form, Draft, Field};
use inquire::{Password, PasswordDisplayMode, Select, Text};
use strum::IntoEnumIterator;
use user_api::models::{Perfil, Status};

struct Choice {
    label: &'static str,
    value: String,
}

impl Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn choices(field: Field) -> Vec<Choice> {
    match field {
        Field::Profile => Perfil::iter()
            .map(|p| Choice {
                label: p.label(),
                value: p.to_string(),
            })
            .collect(),
        Field::Status => Status::iter()
            .map(|s| Choice {
                label: s.label(),
                value: s.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn placeholder(field: Field) -> Option<&'static str> {
    match field {
        Field::Name => Some("Ex: João da Silva"),
        Field::Email => Some("Ex: joao.silva@example.com"),
        Field::Phone => Some("Ex: (21) 99999-9999"),
        Field::JobTitle => Some("Ex: Desenvolvedor Frontend"),
        Field::Department => Some("Ex: Tecnologia"),
        _ => None,
    }
}

/// Asks for a single field. `None` means the user pressed Esc.
pub(crate) fn prompt_field(field: Field, current: &str, error: Option<&str>) -> Result<Option<String>> {
    let label = format!("{}:", field.label());

    if field.is_choice() {
        let options = choices(field);
        let cursor = options
            .iter()
            .position(|choice| choice.value == current)
            .unwrap_or(0);

        let mut select = Select::new(&label, options).with_starting_cursor(cursor);
        if let Some(error) = error {
            select = select.with_help_message(error);
        }

        return Ok(select.prompt_skippable()?.map(|choice| choice.value));
    }

    if field.is_secret() {
        let mut password = Password::new(&label)
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked);
        if let Some(error) = error {
            password = password.with_help_message(error);
        }

        return Ok(password.prompt_skippable()?);
    }

    let mut text = Text::new(&label);
    if !current.is_empty() {
        text = text.with_default(current);
    } else if let Some(placeholder) = placeholder(field) {
        text = text.with_placeholder(placeholder);
    }
    if let Some(error) = error {
        text = text.with_help_message(error);
    }

    Ok(text.prompt_skippable()?)
}

/// Prompts `fields` in order, pre-filled from the form. Returns `None` as soon
/// as one prompt is cancelled.
pub(crate) fn prompt_fields<D: Draft>(
    form: &Form<D>,
    fields: &[Field],
) -> Result<Option<Vec<(Field, String)>>> {
    let mut answers = Vec::with_capacity(fields.len());

    for field in fields {
        let current = form.draft().value(*field).unwrap_or_default();

        match prompt_field(*field, &current, form.errors().get(*field))? {
            Some(value) => answers.push((*field, value)),
            None => return Ok(None),
        }
    }

    Ok(Some(answers))
}
