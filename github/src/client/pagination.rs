use serde::{Deserialize, Serialize};

/// Paging options accepted by list endpoints.
///
/// GitHub defaults to 30 results per page, with a maximum of 100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub per_page: Option<u8>,
    pub page: Option<u32>,
}

impl Pagination {
    pub fn new(per_page: u8, page: u32) -> Self {
        Self {
            per_page: Some(per_page),
            page: Some(page),
        }
    }
}
