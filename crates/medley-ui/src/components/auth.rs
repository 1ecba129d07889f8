//! Password prompt gating upload and edit features.

use crate::app::api::ApiCtx;
use crate::app::hooks::use_lock;
use crate::core::auth::AuthState;
use crate::core::store::AppStore;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(AuthPrompt)]
pub(crate) fn auth_prompt() -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let dispatch = Dispatch::<AppStore>::new();
    let password = use_state(String::new);
    let error = use_state(|| None as Option<String>);
    let lock = use_lock();

    let on_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let submit = {
        let password = password.clone();
        let error = error.clone();
        let lock = lock.clone();
        let client = Rc::clone(&ctx.client);
        Callback::from(move |_: MouseEvent| {
            let value = (*password).clone();
            if value.trim().is_empty() {
                error.set(Some("enter the library password".to_string()));
                return;
            }
            let error = error.clone();
            let dispatch = dispatch.clone();
            let client = Rc::clone(&client);
            lock.run(async move {
                match client.check_auth(&value).await {
                    Ok(result) if result.authorized => {
                        error.set(None);
                        dispatch.reduce_mut(|store| {
                            store.auth.state = AuthState::Password(value);
                        });
                    }
                    Ok(_) => error.set(Some("password not accepted".to_string())),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <fieldset class="auth">
            <legend>{"library password"}</legend>
            <input
                type="password"
                placeholder="password"
                disabled={lock.locked()}
                oninput={on_input}
            />
            <button disabled={lock.locked()} onclick={submit}>{"unlock"}</button>
            {if let Some(message) = &*error {
                html! { <p class="error-text">{message}</p> }
            } else {
                html! {}
            }}
        </fieldset>
    }
}
