//! Global session context and provider

use crate::client::set_auth_token;
use crate::session::storage;
use ris_http::types::TokenPair;
use std::rc::Rc;
use yew::prelude::*;

/// An authenticated session: the token pair persisted in localStorage
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

impl Session {
    /// Whether this session counts as authenticated
    ///
    /// Presence of a non-empty access token is the entire check; expiry is
    /// only discovered when a protected request is rejected.
    pub fn is_valid(&self) -> bool {
        !self.access_token.is_empty()
    }
}

/// Session context data
#[derive(Clone, Debug, PartialEq)]
pub struct SessionContextData {
    pub session: Option<Session>,
    /// Set when the server rejected the stored credential mid-session
    pub expired: bool,
}

/// Session context actions
pub enum SessionAction {
    /// A fresh token pair from a successful login
    Login(TokenPair),
    /// User-initiated logout
    Logout,
    /// The server rejected the stored credential
    Expired,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionContextData>;

impl SessionContextData {
    /// Rebuild from whatever tokens localStorage holds
    pub fn restore() -> Self {
        let session = storage::stored_session();
        if let Some(session) = &session {
            let _ = set_auth_token(Some(&session.access_token));
        }
        Self {
            session,
            expired: false,
        }
    }

    /// Whether a valid session is active
    pub fn is_authenticated(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_valid)
    }

    fn next(&self, action: &SessionAction) -> Self {
        match action {
            SessionAction::Login(pair) => Self {
                session: Some(Session {
                    access_token: pair.access.clone(),
                    refresh_token: Some(pair.refresh.clone()),
                }),
                expired: false,
            },
            SessionAction::Logout => Self {
                session: None,
                expired: false,
            },
            SessionAction::Expired => Self {
                session: None,
                expired: true,
            },
        }
    }
}

impl Reducible for SessionContextData {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match &action {
            SessionAction::Login(pair) => {
                let _ = set_auth_token(Some(&pair.access));
                storage::store_tokens(pair);
            }
            SessionAction::Logout | SessionAction::Expired => {
                let _ = set_auth_token(None);
                // Only the access credential is revoked; the refresh token
                // stays in storage.
                storage::clear_access_token();
            }
        }

        Rc::new(self.next(&action))
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionContextData::restore);

    // Wire up the global expiry handler so a rejected credential anywhere
    // clears the session
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let session = session.clone();
            super::error_handler::set_session_expired_callback(Rc::new(move || {
                session.dispatch(SessionAction::Expired);
            }));

            move || {
                super::error_handler::clear_session_expired_callback();
            }
        });
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to check if a valid session is active
#[hook]
pub fn use_is_authenticated() -> bool {
    let session = use_session();
    session.is_authenticated()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> TokenPair {
        TokenPair {
            access: "access-123".into(),
            refresh: "refresh-456".into(),
        }
    }

    #[test]
    fn login_activates_the_session() {
        let state = SessionContextData {
            session: None,
            expired: true,
        };

        let next = state.next(&SessionAction::Login(pair()));
        assert!(next.is_authenticated());
        assert!(!next.expired);

        let session = next.session.unwrap();
        assert_eq!(session.access_token, "access-123");
        assert_eq!(session.refresh_token.as_deref(), Some("refresh-456"));
    }

    #[test]
    fn logout_invalidates_the_session() {
        let state = SessionContextData {
            session: None,
            expired: false,
        }
        .next(&SessionAction::Login(pair()));

        let next = state.next(&SessionAction::Logout);
        assert!(!next.is_authenticated());
        assert!(next.session.is_none());
        assert!(!next.expired);
    }

    #[test]
    fn expiry_invalidates_and_flags_the_session() {
        let state = SessionContextData {
            session: None,
            expired: false,
        }
        .next(&SessionAction::Login(pair()));

        let next = state.next(&SessionAction::Expired);
        assert!(!next.is_authenticated());
        assert!(next.expired);
    }

    #[test]
    fn empty_access_token_is_not_a_valid_session() {
        let session = Session {
            access_token: String::new(),
            refresh_token: Some("refresh-456".into()),
        };
        assert!(!session.is_valid());

        let state = SessionContextData {
            session: Some(session),
            expired: false,
        };
        assert!(!state.is_authenticated());
    }
}
