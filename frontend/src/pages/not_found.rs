use crate::{
    router::ROOT_PATH,
    state::session::{use_session, Identity},
};
use leptos::*;

/// Shown for any path without a route, including dashboards of user types
/// that have no page of their own.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let (session, _) = use_session();
    let dashboard = move || {
        session
            .get()
            .identity
            .as_ref()
            .and_then(Identity::dashboard_path)
    };
    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center px-4">
            <div class="max-w-md w-full space-y-4 text-center">
                <h1 class="text-3xl font-extrabold text-fg">"Page not found"</h1>
                <p class="text-fg-muted">"There is nothing here for your account yet."</p>
                <a href=ROOT_PATH class="inline-block text-sm text-fg-muted hover:text-fg underline">
                    "Back to home"
                </a>
                {move || {
                    dashboard().map(|href| {
                        view! {
                            <p class="text-xs text-fg-muted">
                                "Signed in with a dashboard at "
                                <code>{href}</code>
                            </p>
                        }
                    })
                }}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Session;
    use crate::test_support::ssr::{render_to_string, render_with_session};

    #[test]
    fn offers_a_way_back_home() {
        let html = render_to_string(|| view! { <NotFoundPage/> });
        assert!(html.contains("Page not found"));
        assert!(html.contains("href=\"/\""));
    }

    #[test]
    fn names_the_unrouted_dashboard() {
        let html = render_with_session(
            Session::authenticated(Identity::new("alumni", false)),
            || view! { <NotFoundPage/> },
        );
        assert!(html.contains("&#x2F;dashboard&#x2F;alumni"));
    }
}
