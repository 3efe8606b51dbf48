use colored::*;
use forms::{dialog::Form, Draft, Field};
use user_api::models::{user::User, Perfil};

fn profile_label(user: &User) -> String {
    match user.known_perfil() {
        Some(perfil) => perfil.label().to_string(),
        None => user.perfil.clone().unwrap_or_else(|| Perfil::default().label().to_string()),
    }
}

pub(crate) fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("Nenhum usuário cadastrado.");
        return;
    }

    for user in users {
        let status = if user.ativo {
            "ativo".green()
        } else {
            "inativo".red()
        };

        println!(
            "{id:>5}  {name}  <{email}>  {profile}  {status}",
            id = user.id.to_string().bold(),
            name = user.nome,
            email = display_email(user).yellow(),
            profile = profile_label(user),
        );
    }
}

fn display_email(user: &User) -> &str {
    if user.email.is_empty() {
        &user.login
    } else {
        &user.email
    }
}

pub(crate) fn print_user(user: &User) {
    println!("Id: {}", user.id);
    println!("Nome: {}", user.nome);
    println!("Login: {}", user.login);
    println!("Email: {}", display_email(user));
    println!("Telefone: {}", user.telefone.as_deref().unwrap_or("-"));
    println!("Cargo: {}", user.cargo.as_deref().unwrap_or("-"));
    println!("Departamento: {}", user.departamento.as_deref().unwrap_or("-"));
    println!("Perfil: {}", profile_label(user));
    println!("Status: {}", if user.ativo { "ativo" } else { "inativo" });

    if let Some(avatar) = &user.avatar {
        println!("Avatar: {}", shorten(avatar, 48));
    }
}

/// Form recap: every field with its value, the inline error under it, and the
/// form-level error at the bottom.
pub(crate) fn print_form<D: Draft>(form: &Form<D>) {
    println!();

    match form.avatar() {
        Some(avatar) => println!("Avatar: {}", shorten(avatar.as_str(), 48).blue()),
        None => println!("Avatar: [{}]", form.initials().bold()),
    }

    for field in D::FIELDS {
        let value = form.draft().value(*field).unwrap_or_default();
        let value = if field.is_secret() {
            "*".repeat(value.chars().count())
        } else {
            value
        };

        println!("{}: {}", field.label(), value.yellow());

        if let Some(error) = form.errors().get(*field) {
            println!("  {}", error.red());
        }
    }

    if let Some(error) = form.form_error() {
        println!();
        println!("{}", error.red().bold());
    }

    println!();
}

pub(crate) fn shorten(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }

    let head: String = value.chars().take(max).collect();
    format!("{head}…")
}

pub(crate) fn failing_fields<D: Draft>(form: &Form<D>) -> Vec<Field> {
    form.errors().fields().collect()
}
