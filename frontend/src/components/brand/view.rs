//! View rendering for the brand page.
//!
//! Layout: a toolbar with the "Add Brand" button and the search box, the
//! paginated table, and the add/edit modal with its three required fields
//! and an optional image upload.

use common::editor::Field;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{input_value, selected_file};
use super::messages::Msg;
use super::state::BrandPage;
use crate::components::modal::Modal;
use crate::components::table::BrandTable;

pub fn view(component: &BrandPage, ctx: &Context<BrandPage>) -> Html {
    let link = ctx.link();
    html! {
        <>
            { build_toolbar(component, link) }
            { build_table(component, link) }
            { build_modal(component, link) }
        </>
    }
}

fn build_toolbar(component: &BrandPage, link: &Scope<BrandPage>) -> Html {
    html! {
        <div class="flex items-center gap-2 mb-4" style="display:flex;align-items:center;gap:8px;margin-bottom:16px;">
            <button class="w-[120px] btn btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                { "Add Brand" }
            </button>
            <input
                class="w-[250px]"
                placeholder="Search brand..."
                value={component.controller.params().search.clone()}
                oninput={link.callback(|e: InputEvent| Msg::Search(input_value(e)))}
            />
        </div>
    }
}

fn build_table(component: &BrandPage, link: &Scope<BrandPage>) -> Html {
    let controller = &component.controller;
    let params = controller.params();
    html! {
        <BrandTable
            records={controller.records().to_vec()}
            current={params.page}
            page_size={params.limit}
            total={controller.total()}
            page_count={controller.page_count()}
            page_size_options={controller.page_size_options().to_vec()}
            loading={controller.is_loading()}
            on_edit={link.callback(Msg::OpenEdit)}
            on_delete={link.callback(Msg::Delete)}
            on_next={link.callback(Msg::Next)}
            on_change={link.callback(Msg::ChangePage)}
        />
    }
}

fn build_modal(component: &BrandPage, link: &Scope<BrandPage>) -> Html {
    let editor = &component.editor;
    let attachment = editor
        .attachment()
        .map(|file| html! { <span class="file-name" style="margin-left:8px;">{ file.name() }</span> })
        .unwrap_or_default();

    html! {
        <Modal
            open={editor.is_open()}
            title={editor.title().to_string()}
            busy={editor.is_busy()}
            on_ok={link.callback(|_| Msg::Submit)}
            on_cancel={link.callback(|_| Msg::CancelEdit)}
        >
            <form onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Submit })}>
                { form_item(component, link, Field::Name, "Brand Name") }
                { form_item(component, link, Field::Description, "Description") }
                { form_item(component, link, Field::CategoryId, "Category ID") }
                <div class="form-item">
                    <label class="upload btn">
                        { "Click to Upload" }
                        <input
                            type="file"
                            name="file"
                            disabled={component.editor.is_busy()}
                            style="display:none;"
                            ref={component.file_input_ref.clone()}
                            onchange={link.callback(|e: Event| Msg::FileSelected(selected_file(e)))}
                        />
                    </label>
                    { attachment }
                </div>
                // Lets Enter submit the form.
                <button type="submit" style="display:none;" />
            </form>
        </Modal>
    }
}

fn form_item(component: &BrandPage, link: &Scope<BrandPage>, field: Field, label: &str) -> Html {
    let editor = &component.editor;
    let error = editor.errors().get(field);
    let input_id = format!("brand-{:?}", field).to_lowercase();

    html! {
        <div class="form-item" style="margin-bottom:12px;">
            <label for={input_id.clone()} style="display:block;margin-bottom:4px;">
                <span style="color:#ff4d4f;">{ "* " }</span>{ label }
            </label>
            <input
                id={input_id}
                class={classes!("input", error.map(|_| "input-error"))}
                value={editor.form().get(field).to_string()}
                disabled={editor.is_busy()}
                oninput={link.callback(move |e: InputEvent| Msg::EditField(field, input_value(e)))}
            />
            {
                match error {
                    Some(message) => html! { <div class="form-error" style="color:#ff4d4f;font-size:12px;">{ message }</div> },
                    None => html! {},
                }
            }
        </div>
    }
}
