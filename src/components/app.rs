// ============================================================================
// APP - Navigation root: session guard, route switch, shared context
// ============================================================================

use yew::prelude::*;

use super::{AssignTransport, AssignTruck, CreateShipment, Drawer, ListMode, LoginScreen, ShipmentList, Toast};
use crate::hooks::{use_session, use_toast, Toaster, UseSessionHandle};
use crate::models::{Route, Session};

fn screen(route: &Route, session: Session) -> Html {
    if let Some(mode) = ListMode::for_route(route) {
        // Keyed so each list screen keeps its own paging state
        return html! { <ShipmentList key={route.path()} {session} {mode} /> };
    }
    match route {
        Route::CreateShipment => html! { <CreateShipment {session} /> },
        Route::AssignTransport { shipment_id } => html! {
            <AssignTransport key={shipment_id.clone()} {session} shipment_id={shipment_id.clone()} />
        },
        Route::AssignTruck { shipment_id } => html! {
            <AssignTruck key={shipment_id.clone()} {session} shipment_id={shipment_id.clone()} />
        },
        _ => html! {},
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let toast = use_toast();
    let handle = use_session(toast.toaster.clone());
    let drawer_open = use_state(|| false);

    let toggle_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.set(!*drawer_open))
    };
    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_| drawer_open.set(false))
    };
    let on_logout = {
        let logout = handle.logout.clone();
        let drawer_open = drawer_open.clone();
        Callback::from(move |_| {
            drawer_open.set(false);
            logout.emit(());
        })
    };

    let body = match (&handle.route, handle.session.clone()) {
        (Route::Login, _) | (_, None) => html! {
            <LoginScreen on_login={handle.login.clone()} loading={handle.logging_in} />
        },
        (route, Some(session)) => {
            let role = session.role;
            html! {
                <>
                    <header class="app-header">
                        <button class="btn-menu" onclick={toggle_drawer}>{"☰"}</button>
                        <h1 class="app-title">{route.title()}</h1>
                    </header>
                    <Drawer
                        {role}
                        current={route.clone()}
                        open={*drawer_open}
                        on_navigate={handle.navigate.clone()}
                        {on_logout}
                        on_close={close_drawer}
                    />
                    <main class="app-main">{screen(route, session)}</main>
                </>
            }
        }
    };

    html! {
        <ContextProvider<Toaster> context={toast.toaster.clone()}>
            <ContextProvider<UseSessionHandle> context={handle.clone()}>
                <div class="app">
                    {body}
                    <Toast message={toast.current.clone()} on_dismiss={toast.dismiss.clone()} />
                </div>
            </ContextProvider<UseSessionHandle>>
        </ContextProvider<Toaster>>
    }
}
