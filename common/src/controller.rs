//! List, search and pagination state of the brand page.
//!
//! The controller never performs I/O. Every change of the query params hands
//! out a [`ListTicket`]; the caller runs the fetch and feeds the outcome back
//! through [`ListController::apply`]. Tickets carry a sequence number so a
//! response that arrives after a newer request was dispatched is dropped
//! instead of overwriting fresher data.

use log::{debug, warn};

use crate::error::{ServiceError, ServiceResult};
use crate::model::brand::BrandRecord;
use crate::model::page::BrandPage;
use crate::model::query::{PAGE_SIZE_OPTIONS, QueryParams};

/// A list request the caller must dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct ListTicket {
    pub seq: u64,
    pub params: QueryParams,
}

/// Outcome of a dispatched [`ListTicket`].
#[derive(Debug)]
pub struct ListResponse {
    pub seq: u64,
    pub result: ServiceResult<BrandPage>,
}

#[derive(Debug, PartialEq)]
pub enum Applied {
    /// Records and total were replaced.
    Updated,
    /// A newer request was dispatched meanwhile; nothing changed.
    Stale,
    /// The latest request failed; the previous page is still shown.
    Failed(ServiceError),
}

#[derive(Debug, PartialEq)]
pub enum DeleteOutcome {
    Deleted { refetch: ListTicket },
    Failed(ServiceError),
}

pub struct ListController {
    params: QueryParams,
    default_limit: u32,
    records: Vec<BrandRecord>,
    total: u64,
    latest_seq: u64,
    settled_seq: u64,
}

impl ListController {
    /// The starting `limit` doubles as the page size restored when a
    /// pagination event carries none.
    pub fn new(params: QueryParams) -> Self {
        Self {
            default_limit: params.limit,
            params,
            records: Vec::new(),
            total: 0,
            latest_seq: 0,
            settled_seq: 0,
        }
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn records(&self) -> &[BrandRecord] {
        &self.records
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// True while the most recent request has not come back.
    pub fn is_loading(&self) -> bool {
        self.settled_seq < self.latest_seq
    }

    pub fn page_count(&self) -> u64 {
        let limit = u64::from(self.params.limit.max(1));
        self.total.div_ceil(limit).max(1)
    }

    pub fn page_size_options(&self) -> &'static [u32] {
        &PAGE_SIZE_OPTIONS
    }

    /// First fetch after the page is shown.
    pub fn mount(&mut self) -> ListTicket {
        self.refresh()
    }

    /// Fetches the current params again, e.g. after a create or delete.
    pub fn refresh(&mut self) -> ListTicket {
        self.latest_seq += 1;
        debug!("dispatching brand list #{} {:?}", self.latest_seq, self.params);
        ListTicket {
            seq: self.latest_seq,
            params: self.params.clone(),
        }
    }

    pub fn set_search(&mut self, text: &str) -> Option<ListTicket> {
        let next = self.params.searched(text);
        self.replace_params(next)
    }

    /// Pagination-control event. Missing values fall back to page 1 and the
    /// default page size.
    pub fn change_page(&mut self, page: Option<u32>, page_size: Option<u32>) -> Option<ListTicket> {
        let next = self.params.paginated(page, page_size, self.default_limit);
        self.replace_params(next)
    }

    pub fn apply(&mut self, response: ListResponse) -> Applied {
        if response.seq != self.latest_seq {
            debug!(
                "dropping brand list #{} superseded by #{}",
                response.seq, self.latest_seq
            );
            return Applied::Stale;
        }
        self.settled_seq = response.seq;

        match response.result {
            Ok(page) => {
                self.records = page.records;
                self.total = page.total;
                Applied::Updated
            }
            Err(err) => {
                warn!("Error fetching brands: {}", err);
                Applied::Failed(err)
            }
        }
    }

    /// Outcome of a delete issued from the table. Only a success refetches.
    pub fn on_deleted(&mut self, result: ServiceResult<()>) -> DeleteOutcome {
        match result {
            Ok(()) => DeleteOutcome::Deleted {
                refetch: self.refresh(),
            },
            Err(err) => {
                warn!("Error deleting brand: {}", err);
                DeleteOutcome::Failed(err)
            }
        }
    }

    fn replace_params(&mut self, next: QueryParams) -> Option<ListTicket> {
        if next == self.params {
            return None;
        }
        self.params = next;
        Some(self.refresh())
    }
}

impl Default for ListController {
    fn default() -> Self {
        Self::new(QueryParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{brand, page};
    use rstest::{fixture, rstest};

    #[fixture]
    fn controller() -> ListController {
        ListController::default()
    }

    fn ok(ticket: &ListTicket, page: BrandPage) -> ListResponse {
        ListResponse {
            seq: ticket.seq,
            result: Ok(page),
        }
    }

    #[rstest]
    fn initial_load_shows_server_page(mut controller: ListController) {
        let ticket = controller.mount();
        assert_eq!(
            ticket.params,
            QueryParams {
                search: String::new(),
                page: 1,
                limit: 2
            }
        );
        assert!(controller.is_loading());

        let applied = controller.apply(ok(&ticket, page(vec![brand(1, "Nike")], 1)));

        assert_eq!(applied, Applied::Updated);
        assert_eq!(controller.records().len(), 1);
        assert_eq!(controller.records()[0].name, "Nike");
        assert_eq!(controller.total(), 1);
        assert!(!controller.is_loading());
    }

    #[rstest]
    fn each_change_issues_exactly_one_ticket(mut controller: ListController) {
        let first = controller.set_search("N").expect("search changed");
        let second = controller.set_search("Ni").expect("search changed");
        let third = controller.change_page(Some(2), Some(5)).expect("page changed");

        assert_eq!(first.seq + 1, second.seq);
        assert_eq!(second.seq + 1, third.seq);
        assert_eq!(third.params.page, 2);
        assert_eq!(third.params.limit, 5);
    }

    #[rstest]
    fn unchanged_params_issue_no_ticket(mut controller: ListController) {
        controller.set_search("Nik");

        assert_eq!(controller.set_search("Nik"), None);
        assert_eq!(controller.change_page(Some(1), Some(2)), None);
    }

    #[rstest]
    fn search_resets_page_to_first(mut controller: ListController) {
        controller.change_page(Some(4), Some(2));

        let ticket = controller.set_search("Nik").unwrap();

        assert_eq!(ticket.params.page, 1);
        assert_eq!(controller.params().page, 1);
    }

    #[rstest]
    fn missing_page_size_restores_the_configured_limit() {
        let mut controller = ListController::new(QueryParams::with_limit(5));
        controller.change_page(Some(1), Some(10));

        let ticket = controller.change_page(Some(2), None).unwrap();

        assert_eq!((ticket.params.page, ticket.params.limit), (2, 5));
        assert_eq!(controller.params().limit, 5);
    }

    #[rstest]
    fn out_of_order_response_is_discarded(mut controller: ListController) {
        let slow = controller.set_search("N").unwrap();
        let fast = controller.set_search("Nik").unwrap();

        assert_eq!(
            controller.apply(ok(&fast, page(vec![brand(1, "Nike")], 1))),
            Applied::Updated
        );
        assert_eq!(
            controller.apply(ok(&slow, page(vec![brand(1, "Nike"), brand(2, "New Balance")], 2))),
            Applied::Stale
        );

        assert_eq!(controller.total(), 1);
        assert_eq!(controller.records()[0].name, "Nike");
    }

    #[rstest]
    fn failure_keeps_previous_page(mut controller: ListController) {
        let first = controller.mount();
        controller.apply(ok(&first, page(vec![brand(1, "Nike")], 1)));

        let second = controller.change_page(Some(2), None).unwrap();
        let applied = controller.apply(ListResponse {
            seq: second.seq,
            result: Err(ServiceError::Network("offline".to_string())),
        });

        assert!(matches!(applied, Applied::Failed(ServiceError::Network(_))));
        assert_eq!(controller.records().len(), 1);
        assert_eq!(controller.total(), 1);
        assert!(!controller.is_loading());
    }

    #[rstest]
    fn successful_delete_refetches_once(mut controller: ListController) {
        controller.mount();
        controller.set_search("Nik");

        match controller.on_deleted(Ok(())) {
            DeleteOutcome::Deleted { refetch } => {
                assert_eq!(refetch.params, controller.params().clone());
                assert_eq!(refetch.seq, 3);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[rstest]
    fn failed_delete_does_not_refetch(mut controller: ListController) {
        let ticket = controller.mount();
        controller.apply(ok(&ticket, page(vec![brand(7, "Adidas")], 1)));

        let outcome = controller.on_deleted(Err(ServiceError::NotFound("7".to_string())));

        assert!(matches!(outcome, DeleteOutcome::Failed(ServiceError::NotFound(_))));
        assert!(!controller.is_loading());
        assert_eq!(controller.records()[0].id, 7);
    }

    #[rstest]
    #[case(0, 2, 1)]
    #[case(1, 2, 1)]
    #[case(5, 2, 3)]
    #[case(10, 5, 2)]
    fn page_count_rounds_up(#[case] total: u64, #[case] limit: u32, #[case] pages: u64) {
        let mut controller = ListController::new(QueryParams::with_limit(limit));
        let ticket = controller.mount();
        controller.apply(ok(&ticket, page(Vec::new(), total)));

        assert_eq!(controller.page_count(), pages);
    }
}
