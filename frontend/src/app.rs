//! Root component: picks the page for the current location.
//!
//! Navigation inside the app uses `history.pushState`; back/forward buttons
//! are followed through a `popstate` listener held for the app's lifetime.

use common::config::AdminConfig;
use common::routes::AppRoute;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::{html, Callback, Component, Context, Html, Properties};

use crate::components::brand::BrandPage;
use crate::layout::admin_layout::AdminLayout;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AdminConfig,
}

pub enum Msg {
    Navigate(AppRoute),
    LocationChanged,
}

pub struct App {
    route: AppRoute,
    popstate: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            link.send_message(Msg::LocationChanged);
        });
        let listening = web_sys::window()
            .map(|w| {
                w.add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
                    .is_ok()
            })
            .unwrap_or(false);
        if !listening {
            warn!("back/forward navigation will not be followed");
        }

        Self {
            route: current_route(),
            popstate: listening.then_some(popstate),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let next = match msg {
            Msg::Navigate(route) => {
                push_path(route.path());
                route
            }
            Msg::LocationChanged => current_route(),
        };
        if next == self.route {
            return false;
        }
        debug!("route {:?} -> {:?}", self.route, next);
        self.route = next;
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(Msg::Navigate);
        let config = ctx.props().config.clone();

        if self.route.is_admin() {
            let page = match self.route {
                AppRoute::Brand => html! { <BrandPage {config} /> },
                _ => placeholder("Categories", "Category management is served by another module.", None),
            };
            return html! {
                <AdminLayout active={self.route} {on_navigate}>
                    { page }
                </AdminLayout>
            };
        }

        match self.route {
            AppRoute::SignIn => placeholder("Sign in", "Sign in to manage brands.", Some(on_navigate)),
            AppRoute::SignUp => placeholder("Sign up", "Create an account to manage brands.", Some(on_navigate)),
            _ => placeholder("Not found", "This page does not exist.", Some(on_navigate)),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(closure)) = (web_sys::window(), self.popstate.take()) {
            window
                .remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                .ok();
        }
    }
}

fn placeholder(title: &str, text: &str, on_navigate: Option<Callback<AppRoute>>) -> Html {
    let link = on_navigate.map(|navigate| {
        let onclick = navigate.reform(|e: web_sys::MouseEvent| {
            e.prevent_default();
            AppRoute::Brand
        });
        html! { <a href={AppRoute::Brand.path()} {onclick}>{ "Go to brands" }</a> }
    });

    html! {
        <div class="placeholder" style="padding:24px;">
            <h2>{ title }</h2>
            <p>{ text }</p>
            { link.unwrap_or_default() }
        </div>
    }
}

fn current_route() -> AppRoute {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| AppRoute::recognize(&path))
        .unwrap_or(AppRoute::NotFound)
}

fn push_path(path: &str) {
    let pushed = web_sys::window()
        .and_then(|w| w.history().ok())
        .map(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)));
    if !matches!(pushed, Some(Ok(()))) {
        warn!("could not push {} onto the history", path);
    }
}
