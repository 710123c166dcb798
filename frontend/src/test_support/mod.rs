#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::session::{Identity, Session, SessionContext};
    use leptos::*;

    pub fn student() -> Identity {
        Identity {
            user_type: "student".into(),
            is_administrator: false,
            display_name: Some("Sam Student".into()),
        }
    }

    pub fn mentor() -> Identity {
        Identity {
            user_type: "mentor".into(),
            is_administrator: false,
            display_name: Some("Morgan Mentor".into()),
        }
    }

    pub fn administrator() -> Identity {
        Identity {
            user_type: "mentor".into(),
            is_administrator: true,
            display_name: Some("Avery Admin".into()),
        }
    }

    pub fn provide_session(session: Session) -> SessionContext {
        let ctx = create_signal(session);
        provide_context::<SessionContext>(ctx);
        ctx
    }
}
