use crate::api::NewsItem;
use leptos::*;

pub const DEFAULT_SECONDS_PER_ITEM: f64 = 8.0;
pub const MIN_DURATION_SECS: f64 = 10.0;

/// One full pass of the track takes longer the more headlines it carries.
pub fn marquee_duration_secs(item_count: usize, seconds_per_item: f64) -> f64 {
    let per_item = if seconds_per_item.is_finite() && seconds_per_item > 0.0 {
        seconds_per_item
    } else {
        DEFAULT_SECONDS_PER_ITEM
    };
    (item_count.max(1) as f64 * per_item).max(MIN_DURATION_SECS)
}

fn render_item(item: NewsItem, hidden: bool) -> View {
    let date = item
        .published_on
        .map(|date| date.format("%Y-%m-%d").to_string());
    let headline = match item.href {
        Some(href) => view! {
            <a href=href class="font-medium text-fg hover:underline" tabindex=hidden.then_some("-1")>
                {item.headline}
            </a>
        }
        .into_view(),
        None => view! { <span class="font-medium text-fg">{item.headline}</span> }.into_view(),
    };
    view! {
        <li class="flex items-center gap-2 px-6 whitespace-nowrap">
            {date.map(|date| view! { <time class="text-xs text-fg-muted" datetime=date.clone()>{date}</time> })}
            {headline}
        </li>
    }
    .into_view()
}

#[component]
pub fn NewsMarquee(
    #[prop(into)] items: MaybeSignal<Vec<NewsItem>>,
    #[prop(optional)] seconds_per_item: Option<f64>,
) -> impl IntoView {
    let per_item = seconds_per_item.unwrap_or(DEFAULT_SECONDS_PER_ITEM);
    let items = Signal::derive(move || items.get());
    let has_items = move || items.with(|items| !items.is_empty());
    let style = move || {
        format!(
            "animation-duration: {:.1}s",
            marquee_duration_secs(items.with(Vec::len), per_item)
        )
    };

    view! {
        <Show when=has_items>
            <section class="overflow-hidden border-y border-border bg-surface-elevated py-2" aria-label="News">
                <div class="flex w-max animate-marquee hover:[animation-play-state:paused]" style=style>
                    <ul class="flex">
                        {move || items.get().into_iter().map(|item| render_item(item, false)).collect_view()}
                    </ul>
                    // Second copy keeps the loop seamless; screen readers skip it.
                    <ul class="flex" aria-hidden="true">
                        {move || items.get().into_iter().map(|item| render_item(item, true)).collect_view()}
                    </ul>
                </div>
            </section>
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    fn news() -> Vec<NewsItem> {
        vec![
            NewsItem {
                headline: "Spring cohort opens".into(),
                href: Some("/join".into()),
                published_on: NaiveDate::from_ymd_opt(2026, 3, 1),
            },
            NewsItem {
                headline: "Mentor meetup on Friday".into(),
                href: None,
                published_on: None,
            },
        ]
    }

    #[test]
    fn renders_nothing_without_items() {
        let html = render_to_string(|| view! { <NewsMarquee items={Vec::<NewsItem>::new()}/> });
        assert!(!html.contains("animate-marquee"));
    }

    #[test]
    fn renders_each_headline_twice_for_the_loop() {
        let html = render_to_string(|| view! { <NewsMarquee items=news()/> });
        assert_eq!(html.matches("Spring cohort opens").count(), 2);
        assert_eq!(html.matches("Mentor meetup on Friday").count(), 2);
        assert!(html.contains("aria-hidden=\"true\""));
        assert!(html.contains("2026-03-01"));
        assert!(html.contains("href=\"/join\""));
    }

    #[test]
    fn animation_duration_follows_item_count() {
        let html =
            render_to_string(|| view! { <NewsMarquee items=news() seconds_per_item=6.0/> });
        assert!(html.contains("animation-duration: 12.0s"));
    }
}
