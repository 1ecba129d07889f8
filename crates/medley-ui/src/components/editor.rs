//! Editing controls for the selected media item.

use crate::app::api::ApiCtx;
use crate::app::hooks::use_lock;
use crate::core::store::AppStore;
use crate::features::library::actions::MediaAction;
use crate::features::library::api::perform_action;
use crate::features::library::state::{MediaRow, remove_item, update_item};
use gloo::dialogs::confirm;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

/// Props for [`MediaEditor`].
#[derive(Properties, PartialEq)]
pub(crate) struct EditorProps {
    /// The currently selected item.
    pub(crate) selected: MediaRow,
}

#[function_component(MediaEditor)]
pub(crate) fn media_editor(props: &EditorProps) -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let dispatch = Dispatch::<AppStore>::new();
    let name = use_state(|| props.selected.name.clone());
    let error = use_state(|| None as Option<String>);
    let lock = use_lock();

    // Reset the draft name when the selection moves to another item.
    {
        let name = name.clone();
        let current = props.selected.name.clone();
        use_effect_with_deps(
            move |_| {
                name.set(current);
                || ()
            },
            props.selected.id.clone(),
        );
    }

    let on_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let save = {
        let name = name.clone();
        let error = error.clone();
        let lock = lock.clone();
        let id = props.selected.id.clone();
        let client = Rc::clone(&ctx.client);
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            let value = name.trim().to_string();
            if value.is_empty() {
                error.set(Some("name cannot be empty".to_string()));
                return;
            }
            let error = error.clone();
            let id = id.clone();
            let client = Rc::clone(&client);
            let dispatch = dispatch.clone();
            lock.run(async move {
                match perform_action(&client, &id, MediaAction::Rename(value)).await {
                    Ok(Some(row)) => {
                        error.set(None);
                        dispatch.reduce_mut(|store| update_item(&mut store.library, row));
                    }
                    Ok(None) => {}
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let delete = {
        let error = error.clone();
        let lock = lock.clone();
        let id = props.selected.id.clone();
        let display = props.selected.name.clone();
        let client = Rc::clone(&ctx.client);
        Callback::from(move |_: MouseEvent| {
            if !confirm(&format!("Delete {display} from the library?")) {
                return;
            }
            let error = error.clone();
            let id = id.clone();
            let client = Rc::clone(&client);
            let dispatch = dispatch.clone();
            lock.run(async move {
                match perform_action(&client, &id, MediaAction::Delete).await {
                    Ok(_) => {
                        error.set(None);
                        dispatch.reduce_mut(|store| remove_item(&mut store.library, &id));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <fieldset class="editor">
            <legend>{&props.selected.name}</legend>
            <img
                class="preview"
                src={props.selected.thumbnail.clone()}
                alt={props.selected.name.clone()}
            />
            <p class="muted">
                {props.selected.kind.label()}
                {" · "}
                {props.selected.size_label()}
                {if let Some(date) = &props.selected.uploaded {
                    html! { <>{" · "}{date}</> }
                } else {
                    html! {}
                }}
            </p>
            <label class="stack">
                <span>{"name"}</span>
                <input value={(*name).clone()} disabled={lock.locked()} oninput={on_input} />
            </label>
            <div class="actions">
                <button disabled={lock.locked()} onclick={save}>{"save"}</button>
                {if ctx.danger {
                    html! {
                        <button class="danger" disabled={lock.locked()} onclick={delete}>
                            {"delete"}
                        </button>
                    }
                } else {
                    html! {}
                }}
            </div>
            {if let Some(message) = &*error {
                html! { <p class="error-text">{message}</p> }
            } else {
                html! {}
            }}
        </fieldset>
    }
}
