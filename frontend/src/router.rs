use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::guard::{AccessGuard, AccessRequirement},
    pages::{
        admin::AdminPage, dashboard::DashboardPage, home::HomePage, join::JoinPage,
        not_found::NotFoundPage,
    },
    state::session::SessionProvider,
};

pub const ROOT_PATH: &str = "/";
pub const PUBLIC_ENTRY_PATH: &str = "/join";
pub const DASHBOARD_PREFIX: &str = "/dashboard";
pub const ADMIN_PATH: &str = "/admin";
/// Catch-all; matches every path no other route claims.
pub const NOT_FOUND_PATH: &str = "/*any";

/// Query parameter that carries the location a visitor was turned away from.
pub const RETURN_TO_PARAM: &str = "redirect";

pub const STUDENT: &str = "student";
pub const MENTOR: &str = "mentor";

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/join",
    "/dashboard/student",
    "/dashboard/mentor",
    "/admin",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard/student", "/dashboard/mentor", "/admin"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/join"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Title text="MentorHub"/>
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/join" view=JoinPage/>
                    <Route path="/dashboard/student" view=ProtectedStudentDashboard/>
                    <Route path="/dashboard/mentor" view=ProtectedMentorDashboard/>
                    <Route path="/admin" view=ProtectedAdmin/>
                    <Route path=NOT_FOUND_PATH view=NotFoundPage/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedStudentDashboard() -> impl IntoView {
    view! {
        <AccessGuard requirement={AccessRequirement::one_of([STUDENT])}>
            <DashboardPage user_type=STUDENT/>
        </AccessGuard>
    }
}

#[component]
fn ProtectedMentorDashboard() -> impl IntoView {
    view! {
        <AccessGuard requirement={AccessRequirement::one_of([MENTOR])}>
            <DashboardPage user_type=MENTOR/>
        </AccessGuard>
    }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! {
        <AccessGuard requirement={AccessRequirement::RequiresAdministrator}>
            <AdminPage/>
        </AccessGuard>
    }
}
