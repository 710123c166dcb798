use crate::router::ROOT_PATH;
use leptos::*;

#[component]
pub fn LogoLink(
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let href = href.unwrap_or_else(|| ROOT_PATH.to_string());
    view! {
        <a href=href class="inline-flex items-center gap-2 text-fg hover:text-fg-muted" aria-label="MentorHub home">
            <span class="inline-flex h-8 w-8 items-center justify-center rounded-md bg-action-primary-bg text-action-primary-text font-bold">
                "M"
            </span>
            <Show when=move || !compact>
                <span class="text-xl font-semibold">"MentorHub"</span>
            </Show>
        </a>
    }
}
