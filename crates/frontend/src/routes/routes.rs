use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use super::screens::Screen;
use crate::domain::consumers::ui::list::ConsumerListPage;
use crate::domain::delivery_persons::ui::list::DeliveryPersonListPage;
use crate::domain::delivery_routes::ui::list::DeliveryRouteListPage;
use crate::layout::{DashboardHome, MainLayout};
use crate::system::auth::guard::RequireAccess;
use crate::system::pages::access_denied::AccessDeniedPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::roles::ui::list::RoleListPage;
use crate::system::users::ui::list::UserListPage;

/// Every page under the shell is wrapped in its screen's gate. The shell
/// itself only requires a signed-in user.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/access-denied") view=AccessDeniedPage />
                <ParentRoute
                    path=path!("/")
                    view=|| view! {
                        <RequireAccess>
                            <MainLayout />
                        </RequireAccess>
                    }
                >
                    <Route
                        path=path!("")
                        view=|| view! {
                            <RequireAccess requirement=Screen::Dashboard.requirement()>
                                <DashboardHome />
                            </RequireAccess>
                        }
                    />
                    <Route
                        path=path!("consumers")
                        view=|| view! {
                            <RequireAccess requirement=Screen::Consumers.requirement()>
                                <ConsumerListPage />
                            </RequireAccess>
                        }
                    />
                    <Route
                        path=path!("routes")
                        view=|| view! {
                            <RequireAccess requirement=Screen::DeliveryRoutes.requirement()>
                                <DeliveryRouteListPage />
                            </RequireAccess>
                        }
                    />
                    <Route
                        path=path!("delivery-persons")
                        view=|| view! {
                            <RequireAccess requirement=Screen::DeliveryPersons.requirement()>
                                <DeliveryPersonListPage />
                            </RequireAccess>
                        }
                    />
                    <Route
                        path=path!("users")
                        view=|| view! {
                            <RequireAccess requirement=Screen::Users.requirement()>
                                <UserListPage />
                            </RequireAccess>
                        }
                    />
                    <Route
                        path=path!("roles")
                        view=|| view! {
                            <RequireAccess requirement=Screen::Roles.requirement()>
                                <RoleListPage />
                            </RequireAccess>
                        }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
