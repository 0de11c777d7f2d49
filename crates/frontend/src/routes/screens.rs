//! Navigation targets and the access each one requires.
//!
//! The router and the sidebar read requirements from here, so a menu entry
//! is shown exactly when its page would render.

use contracts::system::access::{AccessRequirement, Permission};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Consumers,
    DeliveryRoutes,
    DeliveryPersons,
    Users,
    Roles,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Dashboard,
        Screen::Consumers,
        Screen::DeliveryRoutes,
        Screen::DeliveryPersons,
        Screen::Users,
        Screen::Roles,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Screen::Dashboard => "/",
            Screen::Consumers => "/consumers",
            Screen::DeliveryRoutes => "/routes",
            Screen::DeliveryPersons => "/delivery-persons",
            Screen::Users => "/users",
            Screen::Roles => "/roles",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Consumers => "Consumers",
            Screen::DeliveryRoutes => "Routes",
            Screen::DeliveryPersons => "Delivery persons",
            Screen::Users => "Users",
            Screen::Roles => "Roles & permissions",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Screen::Dashboard => "home",
            Screen::Consumers => "consumers",
            Screen::DeliveryRoutes => "routes",
            Screen::DeliveryPersons => "delivery",
            Screen::Users => "users",
            Screen::Roles => "shield",
        }
    }

    /// Settings screens are grouped separately in the sidebar.
    pub fn is_admin_section(self) -> bool {
        matches!(self, Screen::Users | Screen::Roles)
    }

    pub fn requirement(self) -> AccessRequirement {
        match self {
            Screen::Dashboard => AccessRequirement::authenticated(),
            Screen::Consumers => AccessRequirement::permission("consumers", "view"),
            Screen::DeliveryRoutes => AccessRequirement::permission("routes", "view"),
            Screen::DeliveryPersons => AccessRequirement::any_of(vec![
                Permission::new("delivery_persons", "view"),
                Permission::new("routes", "change"),
            ]),
            Screen::Users => {
                AccessRequirement::roles(["admin", "manager"]).with_permission("users", "view")
            }
            Screen::Roles => AccessRequirement::all_of(vec![
                Permission::new("roles", "view"),
                Permission::new("users", "view"),
            ]),
        }
    }
}
