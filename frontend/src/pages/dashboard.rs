use crate::{
    components::layout::Layout,
    router::{MENTOR, STUDENT},
    state::session::{use_session, Identity},
};
use leptos::*;

fn dashboard_title(user_type: &str) -> String {
    match user_type {
        STUDENT => "Student dashboard".to_string(),
        MENTOR => "Mentor dashboard".to_string(),
        other => format!("{} dashboard", other),
    }
}

fn dashboard_summary(user_type: &str) -> &'static str {
    match user_type {
        STUDENT => "Track your sessions, goals and the mentors you work with.",
        MENTOR => "See your mentees, upcoming sessions and open requests.",
        _ => "Your activity at a glance.",
    }
}

#[component]
pub fn DashboardPage(user_type: &'static str) -> impl IntoView {
    let (session, _) = use_session();
    let greeting = move || {
        session
            .get()
            .identity
            .as_ref()
            .map(Identity::label)
            .map(|name| format!("Welcome back, {}", name))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <Layout title=dashboard_title(user_type)>
            <div class="space-y-6">
                <div>
                    <h2 class="text-2xl font-bold text-fg">{greeting}</h2>
                    <p class="mt-1 text-sm text-fg-muted">{dashboard_summary(user_type)}</p>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_follow_user_type() {
        assert_eq!(dashboard_title("student"), "Student dashboard");
        assert_eq!(dashboard_title("mentor"), "Mentor dashboard");
        assert_eq!(dashboard_title("alumni"), "alumni dashboard");
    }
}
