//! Application shell: providers, router, route table

use crate::components::{ProtectedRoute, ToastProvider};
use crate::pages::{HomePage, LoginPage, SignupPage};
use crate::session::SessionProvider;
use yew::prelude::*;
use yew_router::prelude::*;

/// Application routes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/home")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Root | Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Home => html! {
            <ProtectedRoute>
                <HomePage />
            </ProtectedRoute>
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(RisApp)]
pub fn ris_app() -> Html {
    html! {
        <SessionProvider>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </SessionProvider>
    }
}

#[function_component(NotFoundPage)]
fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="bg-white shadow-lg rounded-lg p-8 max-w-md w-full text-center">
                <h1 class="text-2xl font-bold text-gray-900 mb-2">{"Page not found"}</h1>
                <p class="text-gray-600 mb-6">{"The page you're looking for doesn't exist."}</p>
                <Link<Route> to={Route::Login} classes="text-blue-600 hover:text-blue-700 font-medium">
                    {"Back to login"}
                </Link<Route>>
            </div>
        </div>
    }
}
