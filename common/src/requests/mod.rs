use crate::model::brand::{BrandFields, BrandId};

/// Which backend call a submitted form turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(BrandId),
}

/// A validated form, ready to be sent as multipart.
#[derive(Debug)]
pub struct SubmitRequest<A> {
    pub target: SubmitTarget,
    pub fields: BrandFields,
    pub attachment: Option<A>,
}
