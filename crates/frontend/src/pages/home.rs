//! Home screen: profile view and edit

use crate::app::Route;
use crate::components::{LoadingSpinner, use_toast};
use crate::config::UiConfig;
use crate::services::ProfileService;
use crate::session::error_messages::profile_load_error;
use crate::session::{SessionAction, use_session};
use gloo_file::File as GlooFile;
use gloo_file::futures::read_as_bytes;
use ris_http::types::{Profile, ProfileUpdate, UploadFile};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Editable copy of the profile fields
#[derive(Clone, PartialEq, Default)]
struct ProfileForm {
    full_name: String,
    email: String,
    phone_number: String,
    address: String,
}

impl ProfileForm {
    fn from_profile(profile: &Profile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            email: profile.email.clone(),
            phone_number: profile.phone_number.clone(),
            address: profile.address.clone(),
        }
    }
}

fn form_input(
    form: &UseStateHandle<ProfileForm>,
    apply: fn(&mut ProfileForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

fn field_row(
    label: &str,
    input_type: &str,
    value: &str,
    edit_mode: bool,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div>
            <label class="text-gray-700 font-medium">{label}</label>
            if edit_mode {
                <input
                    type={input_type.to_string()}
                    value={value.to_string()}
                    oninput={oninput}
                    class="w-full p-2 mt-1 border border-gray-300 rounded-md"
                />
            } else {
                <p class="text-gray-900">{value}</p>
            }
        </div>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let profile = use_state(|| Option::<Profile>::None);
    let form = use_state(ProfileForm::default);
    let picked_file = use_state(|| Option::<web_sys::File>::None);
    let preview_url = use_state(|| Option::<String>::None);
    let edit_mode = use_state(|| false);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let session = use_session();
    let toast = use_toast();
    let navigator = use_navigator()
        .expect("Navigator not found. Make sure the page is rendered inside a BrowserRouter");

    // Fetch the profile once on mount
    {
        let profile = profile.clone();
        let form = form.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ProfileService::new().fetch().await {
                    Ok(fetched) => {
                        form.set(ProfileForm::from_profile(&fetched));
                        profile.set(Some(fetched));
                    }
                    Err(err) => {
                        log::error!("Error fetching profile data: {err}");
                        error.set(Some(profile_load_error(&err)));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_edit = {
        let profile = profile.clone();
        let form = form.clone();
        let picked_file = picked_file.clone();
        let preview_url = preview_url.clone();
        let edit_mode = edit_mode.clone();

        Callback::from(move |_| {
            if let Some(current) = (*profile).as_ref() {
                form.set(ProfileForm::from_profile(current));
            }
            picked_file.set(None);
            preview_url.set(None);
            edit_mode.set(true);
        })
    };

    let on_cancel = {
        let profile = profile.clone();
        let form = form.clone();
        let picked_file = picked_file.clone();
        let preview_url = preview_url.clone();
        let edit_mode = edit_mode.clone();

        Callback::from(move |_| {
            if let Some(current) = (*profile).as_ref() {
                form.set(ProfileForm::from_profile(current));
            }
            picked_file.set(None);
            preview_url.set(None);
            edit_mode.set(false);
        })
    };

    // Preview the replacement image locally before any upload happens
    let on_image_change = {
        let picked_file = picked_file.clone();
        let preview_url = preview_url.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                preview_url.set(Some(url));
            }
            picked_file.set(Some(file));
        })
    };

    let on_submit = {
        let profile = profile.clone();
        let form = form.clone();
        let picked_file = picked_file.clone();
        let preview_url = preview_url.clone();
        let edit_mode = edit_mode.clone();
        let saving = saving.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            saving.set(true);

            let fields = (*form).clone();
            let file = (*picked_file).clone();
            let profile = profile.clone();
            let form = form.clone();
            let picked_file = picked_file.clone();
            let preview_url = preview_url.clone();
            let edit_mode = edit_mode.clone();
            let saving = saving.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let profile_picture = match file {
                    Some(file) => {
                        let file_name = file.name();
                        let mime_type = file.type_();
                        match read_as_bytes(&GlooFile::from(file)).await {
                            Ok(bytes) => Some(UploadFile {
                                file_name,
                                mime_type,
                                bytes,
                            }),
                            Err(err) => {
                                log::error!("Error reading profile image: {err}");
                                toast.error("Failed to read the selected image.");
                                saving.set(false);
                                return;
                            }
                        }
                    }
                    None => None,
                };

                let update = ProfileUpdate {
                    full_name: fields.full_name,
                    email: fields.email,
                    phone_number: fields.phone_number,
                    address: fields.address,
                    profile_picture,
                };

                match ProfileService::new().update(update).await {
                    Ok(updated) => {
                        form.set(ProfileForm::from_profile(&updated));
                        profile.set(Some(updated));
                        picked_file.set(None);
                        preview_url.set(None);
                        edit_mode.set(false);
                        toast.success("Profile updated successfully!");
                    }
                    Err(err) => {
                        // Stay in edit mode so the entered data survives a retry
                        log::error!("Error updating profile: {err}");
                        toast.error("Failed to update profile. Please try again.");
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            session.dispatch(SessionAction::Logout);
            navigator.push(&Route::Login);
        })
    };

    if *loading {
        return html! {
            <div class="min-h-screen flex items-center justify-center">
                <LoadingSpinner text={Some("Loading...".to_string())} />
            </div>
        };
    }

    if let Some(message) = (*error).as_ref() {
        return html! {
            <div class="min-h-screen flex items-center justify-center text-red-500">
                {message}
            </div>
        };
    }

    let avatar = (*preview_url)
        .clone()
        .or_else(|| {
            (*profile)
                .as_ref()
                .and_then(|profile| profile.profile_image.clone())
        })
        .unwrap_or_else(|| UiConfig::PLACEHOLDER_AVATAR.to_string());

    html! {
        <div class="w-full h-screen flex">
            <div class="w-48 h-full flex flex-col justify-between items-center bg-gray-900 py-8">
                <p class="text-white text-2xl font-bold">{"RIS"}</p>
                <div class="w-full">
                    <div class="w-full px-6 py-3 bg-blue-600 text-white text-sm font-medium">{"Profile"}</div>
                </div>
                <button class="text-sm text-white cursor-pointer hover:text-blue-300" onclick={on_logout}>
                    {"LOG OUT"}
                </button>
            </div>

            <div class="flex-1 h-full flex items-center justify-center bg-gray-100 py-10 overflow-y-auto">
                <div class="bg-white shadow-lg rounded-lg p-8 max-w-md w-full">
                    <form onsubmit={on_submit}>
                        <div class="flex flex-col items-center">
                            <img
                                src={avatar}
                                alt="Profile"
                                class="w-32 h-32 rounded-full object-cover mb-4"
                            />
                            if *edit_mode {
                                <input
                                    type="file"
                                    accept="image/*"
                                    onchange={on_image_change}
                                    class="text-sm text-gray-500 mb-4"
                                />
                            }
                        </div>

                        <div class="space-y-4">
                            { field_row("Full Name", "text", &form.full_name, *edit_mode,
                                form_input(&form, |f, v| f.full_name = v)) }
                            { field_row("Email", "email", &form.email, *edit_mode,
                                form_input(&form, |f, v| f.email = v)) }
                            { field_row("Phone", "text", &form.phone_number, *edit_mode,
                                form_input(&form, |f, v| f.phone_number = v)) }
                            { field_row("Address", "text", &form.address, *edit_mode,
                                form_input(&form, |f, v| f.address = v)) }
                        </div>

                        <div class="mt-8">
                            if *edit_mode {
                                <div class="flex justify-between">
                                    <button
                                        type="button"
                                        class="py-2 px-4 bg-gray-400 text-white rounded-lg"
                                        onclick={on_cancel}
                                    >
                                        {"Cancel"}
                                    </button>
                                    <button
                                        type="submit"
                                        class="py-2 px-4 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition-colors disabled:opacity-50"
                                        disabled={*saving}
                                    >
                                        { if *saving { "Saving..." } else { "Save Changes" } }
                                    </button>
                                </div>
                            } else {
                                <button
                                    type="button"
                                    class="w-full py-2 px-4 bg-blue-500 text-white font-semibold rounded-lg hover:bg-blue-600 transition-colors"
                                    onclick={on_edit}
                                >
                                    {"Edit Profile"}
                                </button>
                            }
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
