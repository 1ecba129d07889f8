//! Upload form for adding media to the library.

use crate::app::api::ApiCtx;
use crate::app::hooks::use_lock;
use crate::core::logic::{format_size, validate_upload};
use crate::core::store::AppStore;
use crate::features::library::state::update_item;
use std::rc::Rc;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;
use yewdux::prelude::Dispatch;

/// Props for [`MediaUploader`].
#[derive(Properties, PartialEq)]
pub(crate) struct UploaderProps {
    /// Upload quota in bytes reported by the service.
    pub(crate) limit: u64,
}

#[function_component(MediaUploader)]
pub(crate) fn media_uploader(props: &UploaderProps) -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let dispatch = Dispatch::<AppStore>::new();
    let file = use_state(|| None as Option<File>);
    let error = use_state(|| None as Option<String>);
    let lock = use_lock();

    let on_pick = {
        let file = file.clone();
        Callback::from(move |e: Event| {
            let picked = e
                .target_dyn_into::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            file.set(picked);
        })
    };

    let upload = {
        let file = file.clone();
        let error = error.clone();
        let lock = lock.clone();
        let limit = props.limit;
        let client = Rc::clone(&ctx.client);
        Callback::from(move |_: MouseEvent| {
            let size = (*file).as_ref().map(|picked| picked.size() as u64);
            if let Err(err) = validate_upload(size, limit) {
                error.set(Some(err.message()));
                return;
            }
            let Some(picked) = (*file).clone() else {
                return;
            };
            let error = error.clone();
            let file = file.clone();
            let dispatch = dispatch.clone();
            let client = Rc::clone(&client);
            lock.run(async move {
                match client.upload_media(picked, None).await {
                    Ok(row) => {
                        error.set(None);
                        file.set(None);
                        dispatch.reduce_mut(|store| update_item(&mut store.library, row));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <fieldset class="uploader">
            <legend>{"upload"}</legend>
            <input type="file" disabled={lock.locked()} onchange={on_pick} />
            <button disabled={lock.locked()} onclick={upload}>{"upload"}</button>
            <p class="muted">{format!("limit {}", format_size(props.limit))}</p>
            {if let Some(message) = &*error {
                html! { <p class="error-text">{message}</p> }
            } else {
                html! {}
            }}
        </fieldset>
    }
}
