//! Reviews Data

use crate::domain::reviews::records::ReviewUuid;

/// New Review Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub uuid: ReviewUuid,
    pub rating: u8,
    pub comment: String,
}
