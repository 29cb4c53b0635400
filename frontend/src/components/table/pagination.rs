use num_format::{Locale, ToFormattedString};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Values reported by the pagination control, as loosely as a generic table
/// component reports them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageChange {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current: u32,
    pub page_size: u32,
    pub total: u64,
    pub page_count: u64,
    pub page_size_options: Vec<u32>,
    pub on_change: Callback<PageChange>,
}

pub struct Pagination;

impl Component for Pagination {
    type Message = ();
    type Properties = PaginationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Pagination
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let current = props.current;
        let page_size = props.page_size;

        let go_to = |page: u32| {
            props.on_change.reform(move |_: MouseEvent| PageChange {
                page: Some(page),
                page_size: Some(page_size),
            })
        };
        // Changing the size starts over from the first page.
        let on_size = props.on_change.reform(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            PageChange {
                page: Some(1),
                page_size: select.value().parse().ok(),
            }
        });

        let has_prev = current > 1;
        let has_next = u64::from(current) < props.page_count;

        html! {
            <div class="pagination" style="display:flex;align-items:center;justify-content:flex-end;gap:8px;margin-top:12px;">
                <span class="total">{ format!("Total {}", props.total.to_formatted_string(&Locale::en)) }</span>
                <button disabled={!has_prev} onclick={go_to(current.saturating_sub(1).max(1))}>{ "‹" }</button>
                <span>{ format!("Page {} of {}", current, props.page_count) }</span>
                <button disabled={!has_next} onclick={go_to(current + 1)}>{ "›" }</button>
                <select onchange={on_size}>
                    { for props.page_size_options.iter().map(|size| html! {
                        <option value={size.to_string()} selected={*size == page_size}>
                            { format!("{} / page", size) }
                        </option>
                    }) }
                </select>
            </div>
        }
    }
}
