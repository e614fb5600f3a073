use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::Navbar;
use crate::pages::{DashboardPage, LoginPage, RegisterPage};
use crate::session::Session;

#[derive(Clone, Copy, PartialEq)]
pub enum Page {
    Login,
    Register,
    Dashboard,
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_state(Session::load);
    let page = {
        let authenticated = session.is_authenticated();
        use_state(move || {
            if authenticated {
                Page::Dashboard
            } else {
                Page::Login
            }
        })
    };

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    let on_authenticated = {
        let session = session.clone();
        let page = page.clone();
        Callback::from(move |token: String| {
            let mut next = (*session).clone();
            next.store(token);
            session.set(next);
            page.set(Page::Dashboard);
        })
    };

    let on_registered = {
        let page = page.clone();
        Callback::from(move |_| page.set(Page::Login))
    };

    // shared by the logout button and the 401 path
    let on_logout = {
        let session = session.clone();
        let page = page.clone();
        Callback::from(move |_: ()| {
            let mut next = (*session).clone();
            next.clear();
            session.set(next);
            page.set(Page::Login);
        })
    };

    let api = ApiClient::new((*session).clone());

    let content = match *page {
        Page::Login => html! {
            <LoginPage api={api.clone()} on_authenticated={on_authenticated} />
        },
        Page::Register => html! {
            <RegisterPage api={api.clone()} on_registered={on_registered} />
        },
        Page::Dashboard => html! {
            <DashboardPage api={api.clone()} on_unauthorized={on_logout.clone()} />
        },
    };

    html! {
        <div class="min-h-screen bg-gray-100">
            <Navbar
                authenticated={session.is_authenticated()}
                on_navigate={on_navigate}
                on_logout={on_logout.clone()}
            />
            <main class="py-8">
                { content }
            </main>
        </div>
    }
}
