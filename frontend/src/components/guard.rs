use std::collections::BTreeSet;

use crate::{
    components::layout::LoadingSpinner,
    router::{PUBLIC_ENTRY_PATH, RETURN_TO_PARAM, ROOT_PATH},
    state::session::{use_session, Identity, Session},
    utils::navigation,
};
use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions, RouterContext};
use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Entry in a legacy allow-list that stands for the administrator capability
/// rather than a user type.
pub const ADMIN_MARKER: &str = "admin";

const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// What an identity must satisfy to see a guarded view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AccessRequirement {
    /// Any signed-in identity.
    #[default]
    Unrestricted,
    RequiresAdministrator,
    /// The identity's user type must be one of these. An empty set restricts
    /// nothing.
    RequiresOneOf(BTreeSet<String>),
}

impl AccessRequirement {
    pub fn one_of<I, S>(user_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: BTreeSet<String> = user_types.into_iter().map(Into::into).collect();
        if allowed.is_empty() {
            Self::Unrestricted
        } else {
            Self::RequiresOneOf(allowed)
        }
    }

    /// Builds a requirement from a plain allow-list in which [`ADMIN_MARKER`]
    /// selects the administrator check.
    pub fn from_allowed_user_types<I, S>(allowed: Option<I>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(allowed) = allowed else {
            return Self::Unrestricted;
        };
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        if allowed.iter().any(|user_type| user_type == ADMIN_MARKER) {
            Self::RequiresAdministrator
        } else {
            Self::one_of(allowed)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub path: String,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
    /// Location to come back to once the destination flow completes.
    pub return_to: Option<String>,
}

impl NavigationTarget {
    pub fn replace(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            replace: true,
            return_to: None,
        }
    }

    pub fn with_return_to(mut self, return_to: Option<&str>) -> Self {
        self.return_to = return_to
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        self
    }

    pub fn href(&self) -> String {
        match &self.return_to {
            Some(from) => format!(
                "{}?{}={}",
                self.path,
                RETURN_TO_PARAM,
                utf8_percent_encode(from, QUERY_VALUE)
            ),
            None => self.path.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    ShowLoading,
    Redirect(NavigationTarget),
    ShowChildren,
}

fn home_of(identity: &Identity) -> NavigationTarget {
    NavigationTarget::replace(
        identity
            .dashboard_path()
            .unwrap_or_else(|| ROOT_PATH.to_string()),
    )
}

/// Decides what a guarded view shows for the given session. Checks run in
/// priority order: loading, missing identity, administrator, allow-list.
pub fn evaluate_access(
    session: &Session,
    requirement: &AccessRequirement,
    origin: Option<&str>,
) -> RenderOutcome {
    if session.loading {
        return RenderOutcome::ShowLoading;
    }
    let Some(identity) = session.identity.as_ref() else {
        return RenderOutcome::Redirect(
            NavigationTarget::replace(PUBLIC_ENTRY_PATH).with_return_to(origin),
        );
    };
    match requirement {
        AccessRequirement::RequiresAdministrator if !identity.is_administrator => {
            RenderOutcome::Redirect(home_of(identity))
        }
        AccessRequirement::RequiresOneOf(allowed)
            if !allowed.is_empty() && !allowed.contains(identity.normalized_user_type()) =>
        {
            RenderOutcome::Redirect(home_of(identity))
        }
        _ => RenderOutcome::ShowChildren,
    }
}

/// Returns the redirect that still has to be performed, or `None` when the
/// outcome is not a redirect or the same target was already dispatched.
pub fn pending_redirect<'a>(
    last: Option<&NavigationTarget>,
    outcome: &'a RenderOutcome,
) -> Option<&'a NavigationTarget> {
    match outcome {
        RenderOutcome::Redirect(target) if last != Some(target) => Some(target),
        _ => None,
    }
}

/// Hands `target` to the router's navigate function, or to `fallback` when no
/// router is mounted.
pub fn dispatch_redirect<N, F>(target: &NavigationTarget, navigate: Option<&N>, fallback: F)
where
    N: Fn(&str, NavigateOptions),
    F: FnOnce(&NavigationTarget),
{
    debug!("access guard redirecting to {}", target.href());
    match navigate {
        Some(navigate) => navigate(
            &target.href(),
            NavigateOptions {
                replace: target.replace,
                ..Default::default()
            },
        ),
        None => fallback(target),
    }
}

#[component]
pub fn AccessGuard(
    #[prop(optional)] requirement: AccessRequirement,
    /// Location reported to the entry flow; defaults to the current path and query.
    #[prop(optional, into)]
    origin: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let (session, _) = use_session();
    let in_router = use_context::<RouterContext>().is_some();
    let location = in_router.then(use_location);
    let origin = create_memo(move |_| {
        origin.clone().or_else(|| match &location {
            Some(location) => Some(navigation::path_with_search(
                &location.pathname.get(),
                &location.search.get(),
            )),
            None => navigation::current_path(),
        })
    });
    let outcome = create_memo(move |_| {
        session.with(|state| {
            origin.with(|origin| evaluate_access(state, &requirement, origin.as_deref()))
        })
    });

    let navigate = in_router.then(use_navigate);
    create_effect(move |last: Option<Option<NavigationTarget>>| {
        let last = last.flatten();
        let outcome = outcome.get();
        if let Some(target) = pending_redirect(last.as_ref(), &outcome) {
            dispatch_redirect(target, navigate.as_ref(), navigation::assign_location);
        }
        match outcome {
            RenderOutcome::Redirect(target) => Some(target),
            _ => None,
        }
    });

    view! {
        {move || match outcome.get() {
            RenderOutcome::ShowLoading => view! { <LoadingSpinner/> }.into_view(),
            RenderOutcome::Redirect(_) => ().into_view(),
            RenderOutcome::ShowChildren => children().into_view(),
        }}
    }
}
