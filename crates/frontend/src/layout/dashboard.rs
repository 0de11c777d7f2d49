use contracts::system::access::evaluate;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::screens::Screen;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::system::auth::context::{use_auth, use_claims};

/// Landing page: shortcuts to the screens the user can open.
#[component]
pub fn DashboardHome() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let claims = use_claims();

    let greeting = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| format!("Welcome, {}", u.display_name()))
                .unwrap_or_default()
        })
    };

    let shortcuts = move || {
        let claims = claims.get();
        Screen::ALL
            .into_iter()
            .filter(|screen| *screen != Screen::Dashboard)
            .filter(|screen| evaluate(&claims, &screen.requirement()).is_allowed())
            .map(|screen| {
                view! {
                    <A href=screen.path()>
                        <div class="card">
                            {icon(screen.icon())}
                            <span class="card__title">{screen.label()}</span>
                        </div>
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="dashboard--home" title="Dashboard" icon_name="home">
            <p class="page__subtitle">{greeting}</p>
            <div class="card-grid">{shortcuts}</div>
        </PageFrame>
    }
}
