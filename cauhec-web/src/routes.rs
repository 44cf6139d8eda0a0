use shared::{GuardDecision, RouteGuard, View};
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;

use crate::api;
use crate::containers::layout::Layout;
use crate::pages::{
    connections::ConnectionsPage, dashboard::DashboardPage, institutions::InstitutionsPage,
    login::LoginPage, not_found::NotFoundPage, profiles::ProfilesPage,
    user_detail::UserDetailPage, users::UsersPage,
};

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Dashboard,
    #[at("/login")]
    Login,
    #[at("/users")]
    Users,
    #[at("/connections")]
    Connections,
    #[at("/institutions")]
    Institutions,
    #[at("/profiles")]
    Profiles,
    #[at("/user/:id")]
    UserDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<&MainRoute> for View {
    fn from(route: &MainRoute) -> Self {
        match route {
            MainRoute::Dashboard => View::Dashboard,
            MainRoute::Login => View::Login,
            MainRoute::Users => View::Users,
            MainRoute::Connections => View::Connections,
            MainRoute::Institutions => View::Institutions,
            MainRoute::Profiles => View::Profiles,
            MainRoute::UserDetail { id } => View::UserDetail { id: id.clone() },
            MainRoute::NotFound => View::NotFound,
        }
    }
}

impl From<View> for MainRoute {
    fn from(view: View) -> Self {
        match view {
            View::Dashboard => MainRoute::Dashboard,
            View::Login => MainRoute::Login,
            View::Users => MainRoute::Users,
            View::Connections => MainRoute::Connections,
            View::Institutions => MainRoute::Institutions,
            View::Profiles => MainRoute::Profiles,
            View::UserDetail { id } => MainRoute::UserDetail { id },
            View::NotFound => MainRoute::NotFound,
        }
    }
}

impl MainRoute {
    /// Sidebar entries, in display order.
    pub fn sidebar() -> impl Iterator<Item = MainRoute> {
        MainRoute::iter().filter(|route| route.nav_icon().is_some())
    }

    pub fn nav_icon(&self) -> Option<IconId> {
        match self {
            MainRoute::Dashboard => Some(IconId::HeroiconsOutlineHome),
            MainRoute::Users => Some(IconId::HeroiconsOutlineUsers),
            MainRoute::Connections => Some(IconId::HeroiconsOutlineLink),
            MainRoute::Institutions => Some(IconId::HeroiconsOutlineBuildingLibrary),
            MainRoute::Profiles => Some(IconId::HeroiconsOutlineUserCircle),
            MainRoute::Login | MainRoute::UserDetail { .. } | MainRoute::NotFound => None,
        }
    }

    /// Whether this sidebar entry should be highlighted while `current` is
    /// on screen. A user profile belongs to the users section.
    pub fn is_active(&self, current: Option<&MainRoute>) -> bool {
        match (self, current) {
            (MainRoute::Users, Some(MainRoute::UserDetail { .. })) => true,
            (route, Some(current)) => route == current,
            (_, None) => false,
        }
    }

    pub fn title(&self) -> &'static str {
        View::from(self).title()
    }
}

/// Renders `route`, checking the stored session first for guarded views.
pub fn switch(route: MainRoute) -> Html {
    let view = View::from(&route);
    if let GuardDecision::Redirect(target) = RouteGuard::new(api::session()).check(&view) {
        return html! { <Redirect<MainRoute> to={MainRoute::from(target)} /> };
    }

    match route {
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Dashboard => html! {
            <Layout title="Dashboard Overview" subtitle="Welcome back! Here's what's happening.">
                <DashboardPage />
            </Layout>
        },
        MainRoute::Users => html! {
            <Layout title="Users" subtitle="Manage students and preceptors">
                <UsersPage />
            </Layout>
        },
        MainRoute::Connections => html! {
            <Layout title="Connections" subtitle="Student and preceptor connections">
                <ConnectionsPage />
            </Layout>
        },
        MainRoute::Institutions => html! {
            <Layout title="Institutions" subtitle="Manage partner institutions and facilities">
                <InstitutionsPage />
            </Layout>
        },
        MainRoute::Profiles => html! {
            <Layout title="Profiles" subtitle="Manage user profiles and credentials">
                <ProfilesPage />
            </Layout>
        },
        MainRoute::UserDetail { id } => html! {
            <Layout title="User Details" subtitle="Profile, school, and status information">
                <UserDetailPage {id} />
            </Layout>
        },
        MainRoute::NotFound => html! { <NotFoundPage /> },
    }
}
