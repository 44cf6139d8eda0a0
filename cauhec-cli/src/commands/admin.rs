//! Commands that change data on the backend.

use anyhow::{Context, Result, bail};
use rpassword::prompt_password;
use shared::View;
use shared::models::{CreateAdminRequest, NewInstitution};
use shared::pages::{ActionError, institutions, profiles};

use super::Session;

fn fail(session: &Session, err: &ActionError) -> Result<()> {
    if let ActionError::Api(_) = err {
        session.ensure_signed_in()?;
    }
    bail!(err.user_message())
}

pub async fn add_institution(session: &Session, institution: &NewInstitution) -> Result<()> {
    let client = session.require(&View::Institutions)?;
    match institutions::add(client, institution).await {
        Ok(added) => {
            println!("Added institution {} ({})", added.name, added.id);
            Ok(())
        }
        Err(err) => fail(session, &err),
    }
}

pub async fn create_admin(
    session: &Session,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<()> {
    let client = session.require(&View::Profiles)?;
    let password = prompt_password("Password for the new admin: ")
        .context("failed to read password")?;
    let request = CreateAdminRequest {
        email,
        password,
        first_name,
        last_name,
    };
    match profiles::create(client, &request).await {
        Ok(created) => {
            println!("Created admin {} ({})", created.person.email, created.id());
            Ok(())
        }
        Err(err) => fail(session, &err),
    }
}

pub async fn delete_profile(session: &Session, id: i64) -> Result<()> {
    let client = session.require(&View::Profiles)?;
    match profiles::delete(client, id).await {
        Ok(()) => {
            println!("Deleted profile {id}");
            Ok(())
        }
        Err(err) => fail(session, &err),
    }
}
