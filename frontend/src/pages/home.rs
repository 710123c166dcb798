use crate::{
    api::ApiClient,
    components::{logo::LogoLink, marquee::NewsMarquee},
    router::PUBLIC_ENTRY_PATH,
    state::session::{use_session, Identity},
};
use leptos::*;
use log::warn;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let news = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move {
                api.get_news().await.unwrap_or_else(|err| {
                    warn!("Failed to load news: {}", err);
                    Vec::new()
                })
            }
        },
    );
    let headlines = Signal::derive(move || news.get().unwrap_or_default());

    let (session, _) = use_session();
    let dashboard = move || {
        session
            .get()
            .identity
            .as_ref()
            .and_then(Identity::dashboard_path)
    };

    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto px-4 py-4 sm:px-6 lg:px-8">
                <LogoLink/>
            </div>
            <NewsMarquee items=headlines/>
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        "MentorHub"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Students and mentors, matched and working together."
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center lg:mt-8">
                        <div class="rounded-md shadow">
                            {move || match dashboard() {
                                Some(href) => view! {
                                    <a href=href class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover lg:py-4 lg:text-lg lg:px-10">
                                        "Go to your dashboard"
                                    </a>
                                },
                                None => view! {
                                    <a href=PUBLIC_ENTRY_PATH class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover lg:py-4 lg:text-lg lg:px-10">
                                        "Join"
                                    </a>
                                },
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
