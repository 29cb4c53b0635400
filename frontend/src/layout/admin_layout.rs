use common::routes::{AppRoute, ADMIN_LINKS};
use yew::{classes, html, Callback, Children, Component, Context, Html, MouseEvent, Properties};

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub active: AppRoute,
    pub on_navigate: Callback<AppRoute>,
    pub children: Children,
}

/// Sidebar with the admin links next to the routed page.
pub struct AdminLayout;

impl Component for AdminLayout {
    type Message = ();
    type Properties = AdminLayoutProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AdminLayout
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let links = ADMIN_LINKS.iter().map(|link| {
            let route = AppRoute::recognize(link.path);
            let onclick = props.on_navigate.reform(move |e: MouseEvent| {
                e.prevent_default();
                route
            });
            html! {
                <li>
                    <a
                        href={link.path}
                        class={classes!("nav-link", (route == props.active).then_some("active"))}
                        {onclick}
                    >
                        { link.content }
                    </a>
                </li>
            }
        });

        html! {
            <div class="admin-layout" style="display:grid;grid-template-columns:220px 1fr;min-height:100vh;">
                <nav class="sidebar" style="background:#001529;padding:16px;">
                    <ul style="list-style:none;padding:0;margin:0;display:flex;flex-direction:column;gap:8px;">
                        { for links }
                    </ul>
                </nav>
                <main style="padding:24px;background:#fff;">
                    { for props.children.iter() }
                </main>
            </div>
        }
    }
}
