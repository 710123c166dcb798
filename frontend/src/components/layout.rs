use crate::{
    components::logo::LogoLink,
    router::{ADMIN_PATH, ROOT_PATH},
    state::session::{use_session, Identity},
};
use leptos::*;

#[component]
pub fn DashboardHeader(#[prop(optional, into)] title: Option<String>) -> impl IntoView {
    let (session, _) = use_session();
    let identity = create_memo(move |_| session.get().identity);
    let is_administrator = move || {
        identity
            .get()
            .as_ref()
            .map(|identity| identity.is_administrator)
            .unwrap_or(false)
    };
    let home_href = move || {
        identity
            .get()
            .as_ref()
            .and_then(Identity::dashboard_path)
    };
    let title = title.unwrap_or_else(|| "Dashboard".to_string());

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-4">
                        {move || view! { <LogoLink href=home_href().unwrap_or_else(|| ROOT_PATH.to_string()) compact=true/> }}
                        <h1 class="text-xl font-semibold text-fg">{title}</h1>
                    </div>
                    <div class="flex items-center gap-3">
                        <Show when=is_administrator>
                            <a href=ADMIN_PATH class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Admin"
                            </a>
                        </Show>
                        {move || {
                            identity
                                .get()
                                .map(|identity| {
                                    view! {
                                        <span class="text-sm text-fg">{identity.label().to_string()}</span>
                                        <span class="rounded-full bg-surface px-2 py-0.5 text-xs uppercase tracking-wide text-fg-muted">
                                            {identity.user_type.clone()}
                                        </span>
                                    }
                                })
                        }}
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(#[prop(optional, into)] title: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <DashboardHeader title=title.unwrap_or_else(|| "Dashboard".into())/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status" aria-live="polite">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            <span class="sr-only">"Loading"</span>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Session;
    use crate::test_support::helpers::{administrator, student};
    use crate::test_support::ssr::{render_to_string, render_with_session};

    #[test]
    fn header_shows_identity_and_user_type() {
        let html = render_with_session(Session::authenticated(student()), || {
            view! { <DashboardHeader title="Student dashboard"/> }
        });
        assert!(html.contains("Student dashboard"));
        assert!(html.contains("Sam Student"));
        assert!(html.contains("student"));
        assert!(html.contains("href=\"/dashboard/student\""));
    }

    #[test]
    fn header_shows_admin_link_only_for_administrators() {
        let html = render_with_session(Session::authenticated(administrator()), || {
            view! { <DashboardHeader/> }
        });
        assert!(html.contains("href=\"/admin\""));

        let html = render_with_session(Session::authenticated(student()), || {
            view! { <DashboardHeader/> }
        });
        assert!(!html.contains("href=\"/admin\""));
    }

    #[test]
    fn header_without_identity_links_logo_to_root() {
        let html = render_with_session(Session::anonymous(), || view! { <DashboardHeader/> });
        assert!(html.contains("href=\"/\""));
        assert!(html.contains("Dashboard"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_with_session(Session::authenticated(student()), || {
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("<main"));
    }

    #[test]
    fn spinner_is_marked_as_status() {
        let html = render_to_string(|| view! { <LoadingSpinner/> });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("role=\"status\""));
    }
}
