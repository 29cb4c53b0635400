//! Brand admin page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! On first render the page dispatches the initial list request; every later
//! request is triggered from `update` in response to a user action.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::BrandPageProps;
pub use state::BrandPage;

impl Component for BrandPage {
    type Message = Msg;
    type Properties = BrandPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        BrandPage::new(&ctx.props().config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let ticket = self.controller.mount();
            update::dispatch_fetch(self, ctx, ticket);
        }
    }
}
