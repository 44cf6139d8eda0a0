//! Read-only listing commands, one per dashboard page.

use anyhow::Result;
use shared::View;
use shared::models::{InstitutionFilter, UserRole};
use shared::pages::{connections, dashboard, institutions, profiles, user_detail, users};

use super::Session;
use super::output::{fields, table};

pub async fn dashboard(session: &Session) -> Result<()> {
    let client = session.require(&View::Dashboard)?;
    let Some(view) = session.settle(dashboard::load(client).await)? else {
        return Ok(());
    };

    let tiles: Vec<Vec<String>> = view
        .tiles
        .iter()
        .map(|tile| vec![tile.title.to_string(), tile.value.clone(), tile.change.clone()])
        .collect();
    println!("{}", table(&["Metric", "Value", "Change"], &tiles));
    println!();

    let months: Vec<Vec<String>> = view
        .chart
        .iter()
        .map(|point| {
            vec![
                point.month.to_string(),
                point.preceptors.to_string(),
                point.students.to_string(),
            ]
        })
        .collect();
    println!("{}", table(&["Month", "Preceptors", "Students"], &months));
    Ok(())
}

pub async fn users(session: &Session, role: UserRole) -> Result<()> {
    let client = session.require(&View::Users)?;
    let Some(rows) = session.settle(users::load(client, role).await)? else {
        return Ok(());
    };
    if rows.is_empty() {
        println!("No {role}s found.");
        return Ok(());
    }

    let affiliation = match role {
        UserRole::Student => "School",
        UserRole::Preceptor => "Location",
    };
    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| {
            vec![
                row.id().to_string(),
                row.person.name,
                row.person.email,
                row.school,
                row.joined,
            ]
        })
        .collect();
    println!("{}", table(&["Id", "Name", "Email", affiliation, "Joined"], &rows));
    Ok(())
}

pub async fn user(session: &Session, id: &str) -> Result<()> {
    let client = session.require(&View::UserDetail { id: id.to_string() })?;
    let Some(view) = session.settle(user_detail::load(client, id).await)? else {
        return Ok(());
    };

    println!("{} <{}>", view.person.name, view.person.email);
    println!(
        "{}",
        fields(&[("Role", view.role.clone()), ("Joined", view.joined.clone())])
    );
    for section in &view.sections {
        println!();
        println!("{}", section.title);
        println!("{}", fields(&section.fields));
    }
    Ok(())
}

pub async fn connections(session: &Session) -> Result<()> {
    let client = session.require(&View::Connections)?;
    let Some(rows) = session.settle(connections::load(client).await)? else {
        return Ok(());
    };
    if rows.is_empty() {
        println!("No connections found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| {
            vec![
                row.id.to_string(),
                row.student.name,
                row.preceptor.name,
                row.status.unwrap_or_else(|| "pending".to_string()),
                row.requested,
                row.connected,
            ]
        })
        .collect();
    println!(
        "{}",
        table(
            &["Id", "Student", "Preceptor", "Status", "Requested", "Connected"],
            &rows
        )
    );
    Ok(())
}

pub async fn institutions(
    session: &Session,
    state: Option<String>,
    kind: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let client = session.require(&View::Institutions)?;
    let filter = InstitutionFilter {
        state: state.unwrap_or_default(),
        kind: kind.unwrap_or_default(),
        search: search.unwrap_or_default(),
    };
    let Some(rows) = session.settle(institutions::load(client, &filter).await)? else {
        return Ok(());
    };
    if rows.is_empty() {
        println!("No institutions found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| vec![row.id.to_string(), row.name, row.kind, row.location, row.added])
        .collect();
    println!(
        "{}",
        table(&["Id", "Name", "Type", "Location", "Added"], &rows)
    );
    Ok(())
}

pub async fn profiles(session: &Session) -> Result<()> {
    let client = session.require(&View::Profiles)?;
    let Some(rows) = session.settle(profiles::load(client).await)? else {
        return Ok(());
    };
    if rows.is_empty() {
        println!("No profiles found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| {
            vec![
                row.id().to_string(),
                row.person.name,
                row.person.email,
                row.role,
                row.created,
            ]
        })
        .collect();
    println!(
        "{}",
        table(&["Id", "Name", "Email", "Role", "Created"], &rows)
    );
    Ok(())
}
