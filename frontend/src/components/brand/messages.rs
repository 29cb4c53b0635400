use common::controller::ListResponse;
use common::editor::Field;
use common::error::ServiceResult;
use common::model::brand::{BrandId, BrandRecord};

use crate::components::table::PageChange;

pub enum Msg {
    Search(String),
    ChangePage(PageChange),
    Fetched(ListResponse),
    OpenCreate,
    OpenEdit(BrandId),
    CancelEdit,
    EditField(Field, String),
    FileSelected(Option<web_sys::File>),
    Submit,
    Submitted(ServiceResult<BrandRecord>),
    Delete(BrandId),
    Deleted(ServiceResult<()>),
    Next(BrandId),
}
