use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn TopHeader(on_toggle_sidebar: Callback<()>) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let user_label = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_default()
        })
    };

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    view! {
        <header class="top-header">
            <button class="top-header__toggle" on:click=move |_| on_toggle_sidebar.run(()) title="Toggle menu">
                "☰"
            </button>
            <span class="top-header__brand">"GasDesk"</span>
            <div class="top-header__spacer"></div>
            <span class="top-header__user">{user_label}</span>
            <button class="top-header__logout" on:click=logout title="Sign out">
                {icon("log-out")}
                " Sign out"
            </button>
        </header>
    }
}
