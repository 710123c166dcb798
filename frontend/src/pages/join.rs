use crate::router::{RETURN_TO_PARAM, ROOT_PATH};
use leptos::*;
use leptos_router::use_query_map;

/// Accepts only same-origin absolute paths so the entry flow cannot be used
/// as an open redirect.
pub fn sanitize_return_to(raw: &str) -> Option<String> {
    let value = raw.trim();
    if !value.starts_with('/') || value.starts_with("//") || value.starts_with("/\\") {
        return None;
    }
    if value.chars().any(char::is_control) {
        return None;
    }
    Some(value.to_string())
}

#[component]
pub fn JoinPage() -> impl IntoView {
    let query = use_query_map();
    let return_to = Signal::derive(move || {
        query.with(|params| params.get(RETURN_TO_PARAM).and_then(|raw| sanitize_return_to(raw)))
    });
    view! { <JoinPrompt return_to=return_to/> }
}

#[component]
pub fn JoinPrompt(#[prop(into)] return_to: MaybeSignal<Option<String>>) -> impl IntoView {
    let return_to = Signal::derive(move || return_to.get());
    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center px-4">
            <div class="max-w-md w-full space-y-4 text-center">
                <h1 class="text-3xl font-extrabold text-fg">"Join MentorHub"</h1>
                <p class="text-fg-muted">"Sign in or create an account to continue."</p>
                {move || {
                    return_to
                        .get()
                        .map(|path| {
                            view! {
                                <p class="text-sm text-fg-muted">
                                    "You'll be taken back to "
                                    <code>{path}</code>
                                    " afterwards."
                                </p>
                            }
                        })
                }}
                <a href=ROOT_PATH class="inline-block text-sm text-fg-muted hover:text-fg underline">
                    "Back to home"
                </a>
            </div>
        </div>
    }
}
