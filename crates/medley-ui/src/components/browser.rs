//! Library grid: browse, search, and select media items.

use crate::app::api::ApiCtx;
use crate::app::hooks::use_lock;
use crate::core::store::AppStore;
use crate::features::library::state::{MediaRow, set_items, set_selected};
use gloo::console;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

/// Props for [`LibraryBrowser`].
#[derive(Properties, PartialEq)]
pub(crate) struct BrowserProps {
    /// Media rows in service order.
    pub(crate) items: Vec<MediaRow>,
    /// Currently selected media id.
    pub(crate) selected_id: Option<String>,
    /// Re-fetch the full library (items and quota).
    pub(crate) on_refresh: Callback<()>,
}

#[function_component(LibraryBrowser)]
pub(crate) fn library_browser(props: &BrowserProps) -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let dispatch = Dispatch::<AppStore>::new();
    let query = use_state(String::new);
    let lock = use_lock();

    let on_query = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };

    let search = {
        let query = query.clone();
        let lock = lock.clone();
        let client = Rc::clone(&ctx.client);
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            let term = query.trim().to_string();
            let search = if term.is_empty() { None } else { Some(term) };
            let client = Rc::clone(&client);
            let dispatch = dispatch.clone();
            lock.run(async move {
                match client.search_library(search).await {
                    Ok(list) => dispatch.reduce_mut(|store| set_items(&mut store.library, list)),
                    Err(err) => console::warn!("library search failed:", err.to_string()),
                }
            });
        })
    };

    let rows = props
        .items
        .iter()
        .map(|item| {
            let select = {
                let dispatch = dispatch.clone();
                let id = item.id.clone();
                Callback::from(move |_: MouseEvent| {
                    let id = id.clone();
                    dispatch.reduce_mut(move |store| {
                        set_selected(&mut store.library, Some(id));
                    });
                })
            };
            let is_selected = props.selected_id.as_deref() == Some(item.id.as_str());
            html! {
                <li
                    key={item.id.clone()}
                    class={classes!("media-card", is_selected.then_some("selected"))}
                    onclick={select}
                >
                    <img src={item.thumbnail.clone()} alt={item.name.clone()} loading="lazy" />
                    <span class="name">{&item.name}</span>
                    <span class="muted">
                        {item.kind.label()}
                        {" · "}
                        {item.size_label()}
                    </span>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <section class="browser">
            <div class="toolbar">
                <input placeholder="search the library" oninput={on_query} />
                <button disabled={lock.locked()} onclick={search}>{"search"}</button>
                <button onclick={{
                    let on_refresh = props.on_refresh.clone();
                    Callback::from(move |_| on_refresh.emit(()))
                }}>{"refresh"}</button>
            </div>
            {if props.items.is_empty() {
                html! { <p class="muted">{"library is empty"}</p> }
            } else {
                html! { <ul class="media-grid">{rows}</ul> }
            }}
        </section>
    }
}
