use std::sync::atomic::{AtomicU64, Ordering};

/// Progress of a view's main fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

/// Tags one in-flight fetch. Tickets are unique for the life of the page, so a
/// response can never be mistaken for one issued by another view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Tracks the latest fetch a view started. Only the response for that fetch may
/// update the view; responses to superseded fetches are dropped.
#[derive(Debug, Default)]
pub struct FetchSequencer {
    latest: Option<Ticket>,
}

impl FetchSequencer {
    pub fn issue(&mut self) -> Ticket {
        let ticket = Ticket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed));
        self.latest = Some(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest == Some(ticket)
    }
}
