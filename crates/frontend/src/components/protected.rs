//! Route guard for screens that require a session

use crate::app::Route;
use crate::session::use_session;
use yew::prelude::*;
use yew_router::prelude::*;

/// Protected route props
#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

/// Renders its children only behind a valid session; otherwise bounces to
/// the login screen
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let session = use_session();

    if session.is_authenticated() {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}
