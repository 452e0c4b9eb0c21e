use yew::prelude::*;

use crate::models::{Role, Route};

/// Menu entries for a role
pub fn nav_items(role: Role) -> Vec<(&'static str, Route)> {
    match role {
        Role::LogisticPerson => vec![
            ("View Shipment", Route::ShipmentList),
            ("Create Shipment", Route::CreateShipment),
            ("Assign Shipment", Route::AssignShipmentList),
        ],
        Role::Munshi => vec![("View Shipment", Route::MunshiShipments)],
        Role::SecurityGuard => vec![("View Shipment", Route::SecurityShipments)],
    }
}

#[derive(Properties, PartialEq)]
pub struct DrawerProps {
    pub role: Role,
    pub current: Route,
    pub open: bool,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(Drawer)]
pub fn drawer(props: &DrawerProps) -> Html {
    if !props.open {
        return html! {};
    }

    html! {
        <div class="drawer-backdrop" onclick={props.on_close.reform(|_| ())}>
            <nav class="drawer" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="drawer-header">
                    <h2 class="drawer-title">{"Shipment App"}</h2>
                    <span class="drawer-role">{props.role.label()}</span>
                </div>

                { for nav_items(props.role).into_iter().map(|(label, route)| {
                    let active = props.current == route;
                    let on_click = {
                        let on_navigate = props.on_navigate.clone();
                        let on_close = props.on_close.clone();
                        Callback::from(move |_| {
                            on_close.emit(());
                            on_navigate.emit(route.clone());
                        })
                    };
                    html! {
                        <button class={classes!("nav-item", active.then_some("active"))} onclick={on_click}>
                            {label}
                        </button>
                    }
                })}

                <div class="drawer-footer">
                    <button class="btn-logout" onclick={props.on_logout.reform(|_| ())}>
                        {"Logout"}
                    </button>
                </div>
            </nav>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_entry_is_allowed_for_its_role() {
        for role in Role::ALL {
            let items = nav_items(role);
            assert!(!items.is_empty());
            for (_, route) in items {
                assert!(route.allows(role), "{:?} cannot open {:?}", role, route);
            }
        }
    }
}
