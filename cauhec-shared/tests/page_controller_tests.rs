//! Page loads and mutations end to end.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::Seen;
use shared::models::{CreateAdminRequest, InstitutionFilter, NewInstitution, UserRole};
use shared::pages::{
    ActionError, connections, dashboard, institutions, profiles, user_detail, users,
};
use shared::view::{self, ColorRole};
use shared::{FetchStatus, LoadGeneration};

#[tokio::test]
async fn test_students_scenario() {
    let base = common::serve(common::backend(Seen::default())).await;
    let client = common::signed_in_client(&base);

    let state = users::load(&client, UserRole::Student).await;

    assert_eq!(state.status(), FetchStatus::Ready);
    assert_eq!(state.len(), 1);
    let row = &state.data().unwrap()[0];
    assert_eq!(row.person.name, "Elaina McAdams");
    assert_eq!(row.person.initials, "EM");
    assert_eq!(row.joined, "16/01/2024");
    assert_eq!(row.person.color, view::color_for(12, ColorRole::Student));
}

#[tokio::test]
async fn test_preceptors_tab_can_be_empty() {
    let base = common::serve(common::backend(Seen::default())).await;
    let client = common::signed_in_client(&base);

    let state = users::load(&client, UserRole::Preceptor).await;

    assert_eq!(state.status(), FetchStatus::Ready);
    assert!(state.is_empty());
}

#[tokio::test]
async fn test_list_failure_has_message_and_no_data() {
    let client = common::signed_in_client(&common::unreachable_base_url().await);

    let state = connections::load(&client).await;

    assert_eq!(state.status(), FetchStatus::Error);
    assert!(state.is_empty());
    assert!(!state.is_fallback());
    assert!(
        state
            .error_message()
            .unwrap()
            .starts_with("Failed to load connections")
    );
}

#[tokio::test]
async fn test_connections_map_both_parties() {
    let base = common::serve(common::backend(Seen::default())).await;
    let client = common::signed_in_client(&base);

    let state = connections::load(&client).await;

    let row = &state.data().unwrap()[0];
    assert_eq!(row.student.initials, "OY");
    assert_eq!(row.preceptor.name, "David Smith");
    assert_eq!(row.requested, "14/02/2025");
    assert_eq!(row.connected, "15/02/2025");
}

#[tokio::test]
async fn test_dashboard_ready() {
    let base = common::serve(common::backend(Seen::default())).await;
    let client = common::signed_in_client(&base);

    let state = dashboard::load(&client).await;

    assert_eq!(state.status(), FetchStatus::Ready);
    let view = state.data().unwrap();
    let values: Vec<&str> = view.tiles.iter().map(|tile| tile.value.as_str()).collect();
    assert_eq!(values, ["124", "38", "2,150", "5,230"]);
    let changes: Vec<&str> = view.tiles.iter().map(|tile| tile.change.as_str()).collect();
    assert_eq!(changes, ["+12.5%", "-3.0%", "+0.0%", "+4.2%"]);
    assert_eq!(view.chart.len(), 12);
    assert_eq!(view.chart[3].preceptors, 40);
    assert_eq!(view.chart[4].students, 0);
}

#[tokio::test]
async fn test_dashboard_falls_back_when_chart_fails() {
    let base = common::serve_fixed(
        "/admin/stats",
        StatusCode::OK,
        json!({"status": "success", "data": {"totalStudents": {"count": 7, "change": 1}}}),
    )
    .await;
    let client = common::signed_in_client(&base);

    let state = dashboard::load(&client).await;

    assert_eq!(state.status(), FetchStatus::Error);
    assert!(state.is_fallback());
    let view = state.data().unwrap();
    assert_eq!(view.tiles[3].value, "7");
    assert_eq!(view.chart.len(), 12);
    assert!(view.chart.iter().all(|point| point.students == 0));
}

#[tokio::test]
async fn test_user_detail_loads_record() {
    let seen = Seen::default();
    let base = common::serve(common::backend(seen.clone())).await;
    let client = common::signed_in_client(&base);

    let state = user_detail::load(&client, "12").await;

    assert_eq!(state.status(), FetchStatus::Ready);
    let detail = state.data().unwrap();
    assert_eq!(detail.person.initials, "EM");
    assert_eq!(detail.joined, "16/01/2024");
    assert_eq!(seen.last().unwrap().query.as_deref(), Some("id=12"));
}

#[tokio::test]
async fn test_user_detail_falls_back_to_placeholder() {
    let base = common::serve(common::backend(Seen::default())).await;
    let client = common::signed_in_client(&base);

    let state = user_detail::load(&client, "404").await;

    assert_eq!(state.status(), FetchStatus::Error);
    assert!(state.is_fallback());
    assert_eq!(state.data().unwrap().id(), 404);
    assert!(state.error_message().unwrap().contains("User not found"));
}

#[tokio::test]
async fn test_institutions_load_and_add() {
    let base = common::serve(common::backend(Seen::default())).await;
    let client = common::signed_in_client(&base);

    let state = institutions::load(&client, &InstitutionFilter::default()).await;
    let row = &state.data().unwrap()[0];
    assert_eq!(row.name, "Georgia State University");
    assert_eq!(row.location, "Atlanta, Georgia");

    let added = institutions::add(
        &client,
        &NewInstitution {
            name: "Mercy College".to_string(),
            kind: "College".to_string(),
            state: "New York".to_string(),
            city: "Dobbs Ferry".to_string(),
            address: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(added.initials, "MC");
    assert_eq!(added.added, "01/03/2025");
}

#[tokio::test]
async fn test_profiles_create_and_delete() {
    let seen = Seen::default();
    let base = common::serve(common::backend(seen.clone())).await;
    let client = common::signed_in_client(&base);

    let state = profiles::load(&client).await;
    assert_eq!(state.len(), 2);
    assert_eq!(state.data().unwrap()[1].person.initials, "K");

    let invalid = profiles::create(
        &client,
        &CreateAdminRequest {
            email: "new@cauhec.org".to_string(),
            password: "short".to_string(),
            first_name: None,
            last_name: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(invalid, ActionError::Invalid(_)));
    let before = seen.count();

    let created = profiles::create(
        &client,
        &CreateAdminRequest {
            email: " new@cauhec.org ".to_string(),
            password: "longenough".to_string(),
            first_name: None,
            last_name: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(created.id(), 9);
    assert_eq!(created.person.email, "new@cauhec.org");
    assert_eq!(seen.count(), before + 1);

    profiles::delete(&client, created.id()).await.unwrap();
    assert_eq!(seen.last().unwrap().path, "/admin/profile/9");
}

#[tokio::test]
async fn test_superseded_load_is_discarded() {
    let base = common::serve(common::backend(Seen::default())).await;
    let client = common::signed_in_client(&base);
    let generation = LoadGeneration::default();
    let mut published = None;

    let stale = generation.begin();
    let fresh = generation.begin();
    for (ticket, role) in [(stale, UserRole::Preceptor), (fresh, UserRole::Student)] {
        let state = users::load(&client, role).await;
        if ticket.is_current() {
            published = Some(state);
        }
    }

    assert_eq!(published.unwrap().len(), 1);
}
