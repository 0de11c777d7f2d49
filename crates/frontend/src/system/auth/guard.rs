use contracts::system::access::{evaluate, AccessDecision, AccessRequirement};
use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::{use_auth, use_claims};

pub const LOGIN_PATH: &str = "/login";
pub const ACCESS_DENIED_PATH: &str = "/access-denied";

/// Renders `children` only when the current claims satisfy `requirement`;
/// otherwise redirects to login or to the access-denied page.
///
/// The decision is recomputed when the claims change (login, logout,
/// 401) and never on a timer.
#[component]
pub fn RequireAccess(
    #[prop(optional)] requirement: AccessRequirement,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let claims = use_claims();
    let requirement = StoredValue::new(requirement);

    let decision = Memo::new(move |_| {
        let claims = claims.get();
        requirement.with_value(|requirement| evaluate(&claims, requirement))
    });

    move || {
        if auth_state.with(|s| s.restoring) {
            return view! { <div class="page-loading">"Restoring session..."</div> }.into_any();
        }
        match decision.get() {
            AccessDecision::Render => children().into_any(),
            AccessDecision::RedirectToLogin => {
                log::debug!("not signed in, redirecting to {}", LOGIN_PATH);
                view! { <Redirect path=LOGIN_PATH /> }.into_any()
            }
            AccessDecision::RedirectToDenied => {
                log::debug!("access denied for {:?}", requirement.get_value());
                view! { <Redirect path=ACCESS_DENIED_PATH /> }.into_any()
            }
        }
    }
}
