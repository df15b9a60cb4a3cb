//! Inquiry store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;

use riverstone_core::InquiryId;
use riverstone_core::inquiry::{Inquiry, NewInquiry};

/// In-memory store of recorded inquiries, keyed by server-assigned id.
#[derive(Debug, Default)]
pub struct InquiryStore {
    inquiries: RwLock<HashMap<InquiryId, Inquiry>>,
}

impl InquiryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an inquiry from an accepted submission.
    pub fn create(&self, new: NewInquiry) -> Inquiry {
        let inquiry = Inquiry::create(InquiryId::generate(), new, Utc::now());
        self.inquiries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(inquiry.id.clone(), inquiry.clone());
        inquiry
    }

    /// Look up an inquiry by id.
    #[must_use]
    pub fn get(&self, id: &InquiryId) -> Option<Inquiry> {
        self.inquiries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }
}
