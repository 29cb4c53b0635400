use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, Properties};

/// Dialog shown over the page while `open` is true.
pub struct Modal {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: String,
    /// Disables both buttons while a save is in flight.
    #[prop_or_default]
    pub busy: bool,
    pub on_ok: Callback<()>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for Modal {
    type Message = ();
    type Properties = ModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("modal-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let title_id = format!("{}-title", self.id);
        let on_ok = props.on_ok.reform(|_| ());
        let on_cancel = props.on_cancel.reform(|_| ());
        let on_close = props.on_cancel.reform(|_| ());

        html! {
            <div class="modal-backdrop" style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.45);z-index:9999;display:flex;align-items:center;justify-content:center;">
                <div
                    id={self.id.clone()}
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={title_id.clone()}
                    style="background:#fff;border-radius:8px;min-width:420px;padding:24px;position:relative;"
                >
                    <button
                        class="modal-close"
                        disabled={props.busy}
                        onclick={on_close}
                        style="position:absolute;top:12px;right:16px;background:none;border:none;font-size:1.2rem;cursor:pointer;"
                    >
                        { "✕" }
                    </button>
                    <h3 id={title_id}>{ props.title.clone() }</h3>
                    { props.children.clone() }
                    <div class="modal-footer" style="display:flex;justify-content:flex-end;gap:8px;margin-top:16px;">
                        <button class="btn" disabled={props.busy} onclick={on_cancel}>{ "Cancel" }</button>
                        <button class="btn btn-primary" disabled={props.busy} onclick={on_ok}>
                            { if props.busy { "Saving..." } else { "OK" } }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
