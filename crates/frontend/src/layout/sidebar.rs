//! Sidebar navigation. Entries the current user cannot open are hidden.

use contracts::system::access::evaluate;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::screens::Screen;
use crate::shared::icons::icon;
use crate::system::auth::context::use_claims;

fn nav_item(screen: Screen, active_path: Memo<String>) -> impl IntoView {
    let is_active = move || {
        let path = active_path.get();
        match screen {
            Screen::Dashboard => path == "/",
            _ => path.starts_with(screen.path()),
        }
    };

    view! {
        <A href=screen.path()>
            <div class="app-sidebar__item" class:app-sidebar__item--active=is_active>
                {icon(screen.icon())}
                <span class="app-sidebar__label">{screen.label()}</span>
            </div>
        </A>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let claims = use_claims();
    let location = use_location();
    let active_path = Memo::new(move |_| location.pathname.get());

    let visible = move |admin_section: bool| {
        let claims = claims.get();
        Screen::ALL
            .into_iter()
            .filter(|screen| screen.is_admin_section() == admin_section)
            .filter(|screen| evaluate(&claims, &screen.requirement()).is_allowed())
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="app-sidebar__content">
            {move || visible(false).into_iter().map(|screen| nav_item(screen, active_path)).collect_view()}
            {move || {
                let settings = visible(true);
                (!settings.is_empty()).then(|| view! {
                    <div class="app-sidebar__group-label">"Settings"</div>
                    {settings.into_iter().map(|screen| nav_item(screen, active_path)).collect_view()}
                })
            }}
        </nav>
    }
}
