//! Update function for the brand page.
//!
//! Elm-style: `update` receives the current state and a `Msg`, mutates the
//! state, may spawn a backend call whose result comes back as another `Msg`,
//! and returns whether the view should re-render.
//!
//! Key behaviors
//! - Search and pagination edits go through the list controller, which hands
//!   out a ticket per change; late responses to superseded tickets are dropped.
//! - Submitting the modal sends a create or an update, then refetches the list.
//! - Deleting from the table refetches only when the backend confirms.
//! - Save and delete failures surface as toasts; list failures only log.

use common::controller::{Applied, DeleteOutcome, ListTicket};
use common::editor::{SubmitError, SubmitOutcome};
use common::workflow::{fetch_page, remove, save};
use log::{debug, info};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{show_toast, Notice};
use super::messages::Msg;
use super::state::BrandPage;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` from spawned requests.
/// - Returns `true` to re-render the view, `false` when only side effects occur.
pub fn update(component: &mut BrandPage, ctx: &Context<BrandPage>, msg: Msg) -> bool {
    match msg {
        Msg::Search(text) => {
            if let Some(ticket) = component.controller.set_search(&text) {
                dispatch_fetch(component, ctx, ticket);
            }
            true
        }
        Msg::ChangePage(change) => {
            if let Some(ticket) = component
                .controller
                .change_page(change.page, change.page_size)
            {
                dispatch_fetch(component, ctx, ticket);
            }
            true
        }
        Msg::Fetched(response) => match component.controller.apply(response) {
            Applied::Updated => true,
            // The previous page stays; the spinner goes away.
            Applied::Failed(_) => true,
            Applied::Stale => false,
        },
        Msg::OpenCreate => {
            component.reset_file_input();
            component.editor.open_create();
            true
        }
        Msg::OpenEdit(id) => {
            let record = component
                .controller
                .records()
                .iter()
                .find(|r| r.id == id)
                .cloned();
            match record {
                Some(record) => {
                    component.reset_file_input();
                    component.editor.open_edit(&record);
                    true
                }
                None => {
                    debug!("brand {} is no longer on the current page", id);
                    false
                }
            }
        }
        Msg::CancelEdit => {
            component.editor.cancel();
            component.reset_file_input();
            true
        }
        Msg::EditField(field, value) => {
            component.editor.set_field(field, value);
            true
        }
        Msg::FileSelected(file) => {
            match file {
                Some(file) => component.editor.attach(file),
                None => component.editor.clear_attachment(),
            }
            true
        }
        Msg::Submit => match component.editor.submit() {
            Ok(request) => {
                let service = component.service.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = save(service.as_ref(), request).await;
                    link.send_message(Msg::Submitted(result));
                });
                true
            }
            // Field messages are rendered under the inputs.
            Err(SubmitError::Invalid(_)) => true,
            Err(err) => {
                debug!("ignoring submit: {}", err);
                false
            }
        },
        Msg::Submitted(result) => {
            match component.editor.on_submitted(result) {
                SubmitOutcome::Saved { created } => {
                    debug!("brand {}", if created { "created" } else { "updated" });
                    component.reset_file_input();
                    let ticket = component.controller.refresh();
                    dispatch_fetch(component, ctx, ticket);
                }
                SubmitOutcome::Failed(message) => {
                    component.reset_file_input();
                    show_toast(&message, Notice::Error);
                }
            }
            true
        }
        Msg::Delete(id) => {
            let service = component.service.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = remove(service.as_ref(), id).await;
                link.send_message(Msg::Deleted(result));
            });
            false
        }
        Msg::Deleted(result) => match component.controller.on_deleted(result) {
            DeleteOutcome::Deleted { refetch } => {
                show_toast("Brand successfully deleted!", Notice::Success);
                dispatch_fetch(component, ctx, refetch);
                true
            }
            DeleteOutcome::Failed(_) => {
                show_toast("Failed to delete brand. Try again.", Notice::Error);
                false
            }
        },
        Msg::Next(id) => {
            info!("Navigating to sub-category with ID: {}", id);
            false
        }
    }
}

/// Runs a list request and feeds the response back as `Msg::Fetched`.
pub fn dispatch_fetch(component: &BrandPage, ctx: &Context<BrandPage>, ticket: ListTicket) {
    let service = component.service.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let response = fetch_page(service.as_ref(), ticket).await;
        link.send_message(Msg::Fetched(response));
    });
}
