//! App shell wiring the store, services, and component tree together.

use crate::app::api::ApiCtx;
use crate::app::preferences::{api_base_url, danger_enabled};
use crate::components::auth::AuthPrompt;
use crate::components::browser::LibraryBrowser;
use crate::components::editor::MediaEditor;
use crate::components::uploader::MediaUploader;
use crate::core::store::AppStore;
use crate::features::library::state::{
    select_items, select_selected, set_items, set_size_limit, sync_selection,
};
use gloo::console;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
pub(crate) mod hooks;
mod preferences;

#[function_component(MedleyApp)]
pub(crate) fn medley_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url(), danger_enabled()), ());

    let authorized = use_selector(|store: &AppStore| store.auth.authorized());
    let auth_state = use_selector(|store: &AppStore| store.auth.state.clone());
    let items = use_selector(|store: &AppStore| select_items(&store.library));
    let selected = use_selector(|store: &AppStore| select_selected(&store.library));
    let selected_id = use_selector(|store: &AppStore| store.library.selected_id.clone());
    let size_limit = use_selector(|store: &AppStore| store.library.size_limit);

    let refresh = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        Callback::from(move |()| {
            let client = Rc::clone(&api_ctx.client);
            let items_dispatch = dispatch.clone();
            yew::platform::spawn_local(async move {
                match client.search_library(None).await {
                    Ok(list) => {
                        items_dispatch.reduce_mut(|store| set_items(&mut store.library, list));
                    }
                    Err(err) => console::warn!("library refresh failed:", err.to_string()),
                }
            });
            let client = Rc::clone(&api_ctx.client);
            let limit_dispatch = dispatch.clone();
            yew::platform::spawn_local(async move {
                match client.fetch_size_limit().await {
                    Ok(limit) => {
                        limit_dispatch.reduce_mut(|store| set_size_limit(&mut store.library, limit));
                    }
                    Err(err) => console::warn!("size limit fetch failed:", err.to_string()),
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |_| {
                refresh.emit(());
                || ()
            },
            (),
        );
    }

    // Keep the client's password header in step with the store.
    {
        let api_ctx = (*api_ctx).clone();
        use_effect_with_deps(
            move |auth_state| {
                api_ctx.client.set_auth((**auth_state).clone());
                || ()
            },
            auth_state,
        );
    }

    // Selection must always reference a live item; re-sync whenever the
    // list or the selection changes.
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                dispatch.reduce_mut(|store| sync_selection(&mut store.library));
                || ()
            },
            ((*items).clone(), (*selected_id).clone()),
        );
    }

    let selected_view = (*selected).clone();
    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <div class="controls">
                {if *authorized {
                    html! {}
                } else {
                    html! { <AuthPrompt /> }
                }}
                {if let Some(item) = selected_view {
                    html! { <MediaEditor selected={item} /> }
                } else {
                    html! { <fieldset><legend>{"nothing selected"}</legend></fieldset> }
                }}
                {if *authorized {
                    html! { <MediaUploader limit={*size_limit} /> }
                } else {
                    html! {}
                }}
            </div>
            <LibraryBrowser
                items={(*items).clone()}
                selected_id={(*selected_id).clone()}
                on_refresh={refresh}
            />
        </ContextProvider<ApiCtx>>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<MedleyApp>::with_root(root).render();
    } else {
        yew::Renderer::<MedleyApp>::new().render();
    }
}
