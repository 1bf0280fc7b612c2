use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{LoanId, LoanType};

/// all events that can be emitted by a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    LoanCreated {
        loan_id: LoanId,
        amount: f64,
        interest_rate: f64,
        loan_type: LoanType,
        start_date: NaiveDate,
    },

    // schedule events
    PaymentPlanGenerated {
        loan_id: LoanId,
        periods: u32,
        payment: f64,
        final_balance: f64,
    },
    PlanSummarized {
        loan_id: LoanId,
        total_payments: f64,
        financing_cost: f64,
    },

    // solver events
    AprSolved {
        loan_id: LoanId,
        apr: f64,
        diff: f64,
        iterations: u32,
    },
    AprNotConverged {
        loan_id: LoanId,
        apr: f64,
        diff: f64,
        iterations: u32,
        threshold: f64,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_event_store_drain() {
        let loan_id = Uuid::new_v4();
        let mut store = EventStore::new();

        store.emit(Event::AprSolved {
            loan_id,
            apr: 0.05,
            diff: 0.001,
            iterations: 10,
        });
        assert_eq!(store.events().len(), 1);

        let drained = store.take_events();
        assert_eq!(drained.len(), 1);
        assert!(store.events().is_empty());
    }
}
