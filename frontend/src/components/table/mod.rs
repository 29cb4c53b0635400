//! Paginated table of brands.
//!
//! The table owns no data: it renders whatever page the parent passes in and
//! reports row actions and pagination changes through callbacks.

mod pagination;

use common::model::brand::{BrandId, BrandRecord};
use yew::{html, Callback, Component, Context, Html, Properties};

pub use pagination::{PageChange, Pagination};

#[derive(Properties, PartialEq)]
pub struct BrandTableProps {
    pub records: Vec<BrandRecord>,
    pub current: u32,
    pub page_size: u32,
    pub total: u64,
    pub page_count: u64,
    pub page_size_options: Vec<u32>,
    #[prop_or_default]
    pub loading: bool,
    pub on_edit: Callback<BrandId>,
    pub on_delete: Callback<BrandId>,
    pub on_next: Callback<BrandId>,
    pub on_change: Callback<PageChange>,
}

pub struct BrandTable;

const COLUMNS: [&str; 4] = ["Brand Name", "Description", "Category ID", "Actions"];

impl Component for BrandTable {
    type Message = ();
    type Properties = BrandTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BrandTable
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let body = if props.records.is_empty() {
            html! {
                <tr>
                    <td colspan={COLUMNS.len().to_string()} class="empty" style="text-align:center;color:#999;padding:16px;">
                        { if props.loading { "Loading..." } else { "No data" } }
                    </td>
                </tr>
            }
        } else {
            props.records.iter().map(|record| row(record, props)).collect::<Html>()
        };

        html! {
            <div class="global-table">
                <table style={format!("width:100%;border-collapse:collapse;opacity:{};", if props.loading { "0.6" } else { "1" })}>
                    <thead>
                        <tr>
                            { for COLUMNS.iter().map(|title| html! { <th style="text-align:left;padding:8px;border-bottom:1px solid #eee;">{ *title }</th> }) }
                        </tr>
                    </thead>
                    <tbody>{ body }</tbody>
                </table>
                <Pagination
                    current={props.current}
                    page_size={props.page_size}
                    total={props.total}
                    page_count={props.page_count}
                    page_size_options={props.page_size_options.clone()}
                    on_change={props.on_change.clone()}
                />
            </div>
        }
    }
}

fn row(record: &BrandRecord, props: &BrandTableProps) -> Html {
    let id = record.id;
    let on_edit = props.on_edit.reform(move |_| id);
    let on_delete = props.on_delete.reform(move |_| id);
    let on_next = props.on_next.reform(move |_| id);

    html! {
        <tr key={id}>
            <td style="padding:8px;">{ record.name.clone() }</td>
            <td style="padding:8px;">{ record.description.clone() }</td>
            <td style="padding:8px;">{ record.category_id }</td>
            <td style="padding:8px;">
                <div class="actions" style="display:flex;gap:8px;">
                    <button style="background-color:#BC8E5B;color:white;" onclick={on_edit}>{ "Edit" }</button>
                    <button class="bg-red-500 text-white" onclick={on_delete}>{ "Delete" }</button>
                    <button onclick={on_next}>{ "Next" }</button>
                </div>
            </td>
        </tr>
    }
}
