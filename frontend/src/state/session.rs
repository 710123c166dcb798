use crate::{
    api::{ApiClient, IdentityResponse},
    router::DASHBOARD_PREFIX,
};
use leptos::*;
use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

pub type SessionContext = (ReadSignal<Session>, WriteSignal<Session>);

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_type: String,
    pub is_administrator: bool,
    pub display_name: Option<String>,
}

impl Identity {
    pub fn new(user_type: impl Into<String>, is_administrator: bool) -> Self {
        Self {
            user_type: normalize_user_type(user_type.into()),
            is_administrator,
            display_name: None,
        }
    }

    /// User type with surrounding whitespace ignored; the form every
    /// comparison and path uses.
    pub fn normalized_user_type(&self) -> &str {
        self.user_type.trim()
    }

    /// The identity's own landing page, or `None` when its user type is blank.
    pub fn dashboard_path(&self) -> Option<String> {
        let user_type = self.normalized_user_type();
        if user_type.is_empty() {
            return None;
        }
        Some(format!(
            "{}/{}",
            DASHBOARD_PREFIX,
            utf8_percent_encode(user_type, PATH_SEGMENT)
        ))
    }

    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.user_type)
    }
}

fn normalize_user_type(user_type: String) -> String {
    let trimmed = user_type.trim();
    if trimmed.len() == user_type.len() {
        user_type
    } else {
        trimmed.to_string()
    }
}

impl From<IdentityResponse> for Identity {
    fn from(response: IdentityResponse) -> Self {
        Self {
            user_type: normalize_user_type(response.user_type),
            is_administrator: response.is_administrator,
            display_name: response.display_name,
        }
    }
}

/// Externally owned authentication state. Starts loading and settles once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub loading: bool,
    pub identity: Option<Identity>,
}

impl Session {
    pub fn pending() -> Self {
        Self {
            loading: true,
            identity: None,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            loading: false,
            identity: Some(identity),
        }
    }

    /// Leaves the loading state. Returns `false` and changes nothing if the
    /// session was already settled.
    pub fn settle(&mut self, identity: Option<Identity>) -> bool {
        if !self.loading {
            warn!("ignoring attempt to settle an already settled session");
            return false;
        }
        self.loading = false;
        self.identity = identity;
        true
    }
}

fn create_session_context() -> SessionContext {
    let (session, set_session) = create_signal(Session::pending());

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(async move {
        settle_from_api(&api_client, set_session).await;
    });

    (session, set_session)
}

/// Asks the API who is signed in. Any failure counts as "nobody".
pub async fn resolve_identity(api_client: &ApiClient) -> Option<Identity> {
    match api_client.get_me().await {
        Ok(response) => Some(Identity::from(response)),
        Err(err) if err.is_unauthorized() => {
            debug!("no active session");
            None
        }
        Err(err) => {
            warn!("failed to resolve session: {}", err);
            None
        }
    }
}

pub async fn settle_from_api(api_client: &ApiClient, set_session: WriteSignal<Session>) {
    let identity = resolve_identity(api_client).await;
    set_session.update(|state| {
        state.settle(identity);
    });
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(Session::anonymous()))
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    async fn settle_against(status: u16, body: serde_json::Value) -> Session {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/auth/me");
                then.status(status).json_body(body);
            })
            .await;

        let runtime = create_runtime();
        let (session, set_session) = create_signal(Session::pending());
        let api = ApiClient::new_with_base_url(server.url("/api"));
        settle_from_api(&api, set_session).await;
        let snapshot = session.get_untracked();
        runtime.dispose();
        snapshot
    }

    #[tokio::test]
    async fn signed_in_identity_settles_the_session() {
        let session = settle_against(
            200,
            json!({
                "id": "u1",
                "user_type": " student",
                "is_administrator": false,
                "display_name": "Sam Student"
            }),
        )
        .await;

        assert!(!session.loading);
        let identity = session.identity.expect("identity");
        assert_eq!(identity.user_type, "student");
        assert_eq!(identity.label(), "Sam Student");
    }

    #[tokio::test]
    async fn unauthorized_settles_anonymous() {
        let session = settle_against(
            401,
            json!({ "error": "unauthorized", "code": "UNAUTHORIZED" }),
        )
        .await;
        assert_eq!(session, Session::anonymous());
    }

    #[tokio::test]
    async fn server_failure_settles_anonymous() {
        let session =
            settle_against(500, json!({ "error": "boom", "code": "INTERNAL" })).await;
        assert_eq!(session, Session::anonymous());
    }

    #[tokio::test]
    async fn resolve_identity_keeps_administrator_flag() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/auth/me");
                then.status(200).json_body(json!({
                    "id": "u9",
                    "user_type": "mentor",
                    "is_administrator": true
                }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let identity = resolve_identity(&api).await.expect("identity");
        assert!(identity.is_administrator);
        assert_eq!(identity.dashboard_path().as_deref(), Some("/dashboard/mentor"));
    }
}
