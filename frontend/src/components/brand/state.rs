//! Component state of the brand page.
//!
//! The list and the modal each live in their own state machine from
//! `common`; this struct only adds what the browser needs on top of them: the
//! HTTP service shared with spawned tasks and a reference to the file input.

use std::rc::Rc;

use common::config::AdminConfig;
use common::controller::ListController;
use common::editor::RecordEditor;
use common::model::query::QueryParams;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::service::brand::HttpBrandService;
use crate::service::credentials::LocalStorageCredentials;

pub type Service = HttpBrandService<LocalStorageCredentials>;

pub struct BrandPage {
    /// Query params, current page and total.
    pub controller: ListController,

    /// Add/edit modal, including the file picked for upload.
    pub editor: RecordEditor<File>,

    /// Shared with every spawned request.
    pub service: Rc<Service>,

    /// The `<input type="file">` inside the modal.
    pub file_input_ref: NodeRef,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl BrandPage {
    pub fn new(config: &AdminConfig) -> Self {
        let credentials = LocalStorageCredentials::new(config.token_storage_key.clone());
        Self {
            controller: ListController::new(QueryParams::with_limit(config.default_limit)),
            editor: RecordEditor::new(),
            service: Rc::new(HttpBrandService::new(config.api_base_url.clone(), credentials)),
            file_input_ref: NodeRef::default(),
            loaded: false,
        }
    }

    /// Empties the file input so the same file can be picked again after a
    /// submit or cancel.
    pub fn reset_file_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}
