//! Signup screen

use crate::app::Route;
use crate::components::use_toast;
use crate::services::AuthApiService;
use crate::client::ClientError;
use crate::validation::{RegistrationForm, validate_registration};
use ris_http::types::RegisterRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

fn signup_error_message(error: &ClientError) -> String {
    match error {
        ClientError::Request(_) => "An error occurred. Please try again.".to_string(),
        _ => error
            .detail()
            .unwrap_or_else(|| "Signup failed. Please try again.".to_string()),
    }
}

fn text_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let phone_number = use_state(String::new);
    let address = use_state(String::new);
    let password = use_state(String::new);
    let verify_password = use_state(String::new);
    let loading = use_state(|| false);

    let toast = use_toast();
    let navigator = use_navigator()
        .expect("Navigator not found. Make sure the page is rendered inside a BrowserRouter");

    let on_submit = {
        let full_name = full_name.clone();
        let email = email.clone();
        let phone_number = phone_number.clone();
        let address = address.clone();
        let password = password.clone();
        let verify_password = verify_password.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            // Local checks first; nothing goes on the wire until they pass
            let form = RegistrationForm {
                email: &email,
                phone_number: &phone_number,
                password: &password,
                verify_password: &verify_password,
            };
            if let Err(error) = validate_registration(&form) {
                toast.error(error.to_string());
                return;
            }

            loading.set(true);

            let request = RegisterRequest {
                full_name: (*full_name).clone(),
                email: (*email).clone(),
                phone_number: (*phone_number).clone(),
                address: (*address).clone(),
                password: (*password).clone(),
            };
            let loading = loading.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match AuthApiService::new().register(request).await {
                    Ok(_) => {
                        toast.success("Signup successful!");
                        navigator.push(&Route::Login);
                    }
                    Err(error) => {
                        log::error!("Signup error: {error}");
                        toast.error(signup_error_message(&error));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_login_redirect = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Login))
    };

    let input_class = "w-full max-w-sm px-4 py-3 rounded-lg bg-white/10 border border-white/20 \
                       text-white placeholder-white/50 focus:outline-none focus:border-blue-400";

    html! {
        <div class="min-h-screen w-full flex">
            <div class="hidden md:flex md:w-1/2 bg-gradient-to-br from-blue-700 to-indigo-900 flex-col justify-evenly items-center p-10">
                <p class="text-white text-2xl font-bold tracking-wide">{"RADIOLOGY INFORMATION SYSTEM"}</p>
                <div class="text-center">
                    <p class="text-white text-xl">{"Welcome back!"}</p>
                    <p class="text-blue-200 text-sm mt-2">{"Already have an account? Enter your credentials to login"}</p>
                </div>
                <button
                    class="px-10 py-2 border border-white rounded-full text-white font-semibold hover:bg-white hover:text-blue-800 transition-colors"
                    onclick={on_login_redirect}
                >
                    {"SIGN IN"}
                </button>
            </div>

            <div class="w-full md:w-1/2 flex flex-col items-center justify-evenly bg-gray-900 p-10">
                <p class="text-white text-3xl font-bold">{"SIGN UP"}</p>
                <form class="w-full flex flex-col items-center gap-4" onsubmit={on_submit}>
                    <input
                        class={input_class}
                        type="text"
                        placeholder="Full name"
                        value={(*full_name).clone()}
                        oninput={text_input(&full_name)}
                        required=true
                    />
                    <input
                        class={input_class}
                        type="email"
                        placeholder="Email"
                        value={(*email).clone()}
                        oninput={text_input(&email)}
                        required=true
                    />
                    <input
                        class={input_class}
                        type="tel"
                        placeholder="Phone"
                        value={(*phone_number).clone()}
                        oninput={text_input(&phone_number)}
                        required=true
                    />
                    <input
                        class={input_class}
                        type="text"
                        placeholder="Address"
                        value={(*address).clone()}
                        oninput={text_input(&address)}
                        required=true
                    />
                    <input
                        class={input_class}
                        type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={text_input(&password)}
                        required=true
                    />
                    <input
                        class={input_class}
                        type="password"
                        placeholder="Verify password"
                        value={(*verify_password).clone()}
                        oninput={text_input(&verify_password)}
                        required=true
                    />
                    <button
                        class="w-full max-w-sm py-3 rounded-lg bg-blue-600 hover:bg-blue-700 text-white font-semibold transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                        type="submit"
                        disabled={*loading}
                    >
                        { if *loading { "Loading..." } else { "SIGN UP" } }
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
    fn server_detail_is_preferred() {
        let error = ClientError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"detail":"Email already registered"}"#.into(),
        );
        assert_eq!(signup_error_message(&error), "Email already registered");
    }

    #[test]
    fn plain_error_bodies_fall_back_to_the_generic_message() {
        let error = ClientError::from_status(StatusCode::BAD_REQUEST, "nope".into());
        assert_eq!(
            signup_error_message(&error),
            "Signup failed. Please try again."
        );
    }
}
