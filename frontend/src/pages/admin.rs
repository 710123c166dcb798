use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <Layout title="Administration">
            <div class="bg-surface-elevated shadow rounded-lg p-6">
                <h2 class="text-lg font-medium text-fg mb-2">"Administration"</h2>
                <p class="text-sm text-fg-muted">
                    "Manage cohorts, mentor assignments and published news."
                </p>
            </div>
        </Layout>
    }
}
