use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use rpassword::prompt_password;
use shared::AuthController;

use super::Session;

pub async fn login(session: &Session, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => prompt("Email: ")?,
    };
    let password = prompt_password("Password: ").context("failed to read password")?;

    let mut auth = AuthController::new(session.store().clone());
    match auth.login(session.client(), email.trim(), &password).await {
        Ok(user) => {
            println!("Signed in as {} <{}>", user.display_name(), user.email);
            println!("Session stored in {}", session.dir().display());
            Ok(())
        }
        Err(failure) => bail!(failure.message),
    }
}

pub fn logout(session: &Session) -> Result<()> {
    let mut auth = AuthController::new(session.store().clone());
    let was_signed_in = auth.restore().is_authenticated();
    auth.logout();
    if was_signed_in {
        println!("Signed out; removed the session in {}", session.dir().display());
    } else {
        println!("No active session in {}", session.dir().display());
    }
    Ok(())
}

pub fn whoami(session: &Session) -> Result<()> {
    let mut auth = AuthController::new(session.store().clone());
    let Some(user) = auth.restore().user() else {
        bail!("not signed in; run `cauhec login` first");
    };
    println!("{} <{}>", user.display_name(), user.email);
    if let Some(role) = &user.role {
        println!("role: {role}");
    }
    println!("api: {}", session.client().base_url());
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().ok();
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    Ok(input.trim().to_string())
}
