//! Login screen

use crate::app::Route;
use crate::components::use_toast;
use crate::services::AuthApiService;
use crate::client::ClientError;
use crate::session::{SessionAction, use_session};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

fn login_error_message(error: &ClientError) -> String {
    match error {
        ClientError::Request(_) => "An error occurred! Please try again.".to_string(),
        _ => format!(
            "Error: {}",
            error.detail().unwrap_or_else(|| "Login failed!".to_string())
        ),
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);

    let session = use_session();
    let toast = use_toast();
    let navigator = use_navigator()
        .expect("Navigator not found. Make sure the page is rendered inside a BrowserRouter");

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let session = session.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            loading.set(true);

            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let loading = loading.clone();
            let session = session.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match AuthApiService::new().login(email_value, password_value).await {
                    Ok(pair) => {
                        session.dispatch(SessionAction::Login(pair));
                        toast.success("Login successful!");
                        navigator.push(&Route::Home);
                    }
                    Err(error) => {
                        toast.error(login_error_message(&error));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_signup_redirect = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Signup))
    };

    html! {
        <div class="min-h-screen w-full flex">
            <div class="hidden md:flex md:w-1/2 bg-gradient-to-br from-blue-700 to-indigo-900 flex-col justify-evenly items-center p-10">
                <p class="text-white text-2xl font-bold tracking-wide">{"RADIOLOGY INFORMATION SYSTEM"}</p>
                <div class="text-center">
                    <p class="text-white text-xl">{"Welcome!"}</p>
                    <p class="text-blue-200 text-sm mt-2">{"Enter your personal details to start your journey with us"}</p>
                </div>
                <button
                    class="px-10 py-2 border border-white rounded-full text-white font-semibold hover:bg-white hover:text-blue-800 transition-colors"
                    onclick={on_signup_redirect}
                >
                    {"SIGN UP"}
                </button>
            </div>

            <div class="w-full md:w-1/2 flex flex-col items-center justify-evenly bg-gray-900 p-10">
                <p class="text-white text-3xl font-bold">{"SIGN IN"}</p>

                if session.expired {
                    <div class="w-full max-w-sm bg-amber-500/20 border border-amber-500/40 rounded-lg p-3 text-center">
                        <p class="text-amber-200 text-sm">{"Your session has expired. Please log in again."}</p>
                    </div>
                }

                <form class="w-full flex flex-col items-center gap-4" onsubmit={on_submit}>
                    <input
                        class="w-full max-w-sm px-4 py-3 rounded-lg bg-white/10 border border-white/20 text-white placeholder-white/50 focus:outline-none focus:border-blue-400"
                        type="email"
                        placeholder="Email"
                        value={(*email).clone()}
                        oninput={on_email_input}
                        required=true
                    />
                    <input
                        class="w-full max-w-sm px-4 py-3 rounded-lg bg-white/10 border border-white/20 text-white placeholder-white/50 focus:outline-none focus:border-blue-400"
                        type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        required=true
                    />
                    <div class="w-full max-w-sm flex justify-between text-sm text-white/70">
                        <label class="flex items-center gap-1 cursor-pointer">
                            <input type="checkbox" />
                            {"Remember me"}
                        </label>
                        <p class="cursor-pointer">{"Forgot password?"}</p>
                    </div>
                    <button
                        class="w-full max-w-sm py-3 rounded-lg bg-blue-600 hover:bg-blue-700 text-white font-semibold transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                        type="submit"
                        disabled={*loading}
                    >
                        { if *loading { "Loading..." } else { "LOGIN" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn server_detail_is_surfaced() {
        let error = ClientError::from_status(
            StatusCode::UNAUTHORIZED,
            r#"{"detail":"No active account found with the given credentials"}"#.into(),
        );
        assert_eq!(
            login_error_message(&error),
            "Error: No active account found with the given credentials"
        );
    }

    #[test]
    fn plain_error_bodies_fall_back_to_the_generic_message() {
        let error = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "oops".into());
        assert_eq!(login_error_message(&error), "Error: Login failed!");
    }
}
