use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::models::Credentials;

#[derive(Properties, PartialEq)]
pub struct RegisterPageProps {
    pub api: ApiClient,
    pub on_registered: Callback<()>,
}

/// Registration form. On failure the user stays here with a visible message;
/// only success navigates away.
#[function_component(RegisterPage)]
pub fn register_page(props: &RegisterPageProps) -> Html {
    let username = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let api = props.api.clone();
        let on_registered = props.on_registered.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username_val = username.trim().to_string();
            let password_val = (*password).clone();

            if username_val.is_empty() || password_val.is_empty() {
                error.set(Some("Username and password are required.".to_string()));
                return;
            }

            error.set(None);
            loading.set(true);

            let api = api.clone();
            let error = error.clone();
            let loading = loading.clone();
            let on_registered = on_registered.clone();
            spawn_local(async move {
                let credentials = Credentials {
                    username: username_val,
                    password: password_val,
                };
                match api.register(&credentials).await {
                    Ok(()) => on_registered.emit(()),
                    Err(_) => {
                        error.set(Some(
                            "Registration failed. Username may be taken.".to_string(),
                        ));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto bg-white rounded-lg shadow-md p-8 mt-10">
            <h2 class="text-2xl font-bold mb-6 text-center">{"Register"}</h2>
            { if let Some(msg) = &*error {
                html! { <p class="text-red-500 mb-4">{ msg.clone() }</p> }
            } else {
                html! {}
            }}
            <form onsubmit={on_submit}>
                <div class="mb-4">
                    <label class="block text-gray-700 mb-2">{"Username"}</label>
                    <input
                        type="text"
                        class="w-full px-3 py-2 border rounded-lg"
                        value={(*username).clone()}
                        oninput={{
                            let username = username.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                username.set(input.value());
                            })
                        }}
                        required={true}
                    />
                </div>
                <div class="mb-6">
                    <label class="block text-gray-700 mb-2">{"Password"}</label>
                    <input
                        type="password"
                        class="w-full px-3 py-2 border rounded-lg"
                        value={(*password).clone()}
                        oninput={{
                            let password = password.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                password.set(input.value());
                            })
                        }}
                        required={true}
                    />
                </div>
                <button
                    type="submit"
                    class="w-full bg-gray-900 text-white py-2 rounded-lg hover:bg-black"
                    disabled={*loading}
                >
                    { if *loading { "Registering..." } else { "Register" } }
                </button>
            </form>
        </div>
    }
}
