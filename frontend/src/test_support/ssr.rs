use crate::state::session::Session;
use leptos::*;

/// Renders a view to HTML inside a throwaway reactive runtime. Resources are
/// not fetched, so pages that load data render their empty state.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let runtime = create_runtime();
    let html = view().into_view().render_to_string().to_string();
    runtime.dispose();
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Like [`render_to_string`], with `session` provided as the session context.
pub fn render_with_session<F, N>(session: Session, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        super::helpers::provide_session(session);
        view()
    })
}
