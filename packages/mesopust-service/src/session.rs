//! Search state for one input box, guarded against out-of-order completions.
//!
//! Each submission takes the next sequence number. When a search finishes it commits only if no
//! newer submission has been issued in the meantime, so a slow search for an older keystroke can
//! never overwrite the results of a newer one. [`MesopustService::search`] on its own has no such
//! guard: callers that store its results directly keep whichever call finishes last.
//!
//! Meant for embedders that keep one live result list per input box. The stateless
//! `/v1/search` route does not hold a session; HTTP clients sequence their own requests.

use std::sync::{
	Arc, Mutex,
	atomic::{AtomicU64, Ordering},
};

use crate::{MesopustService, SearchItem, SearchRequest, SearchResponse};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
	/// Sequence number of the committed search; zero before the first commit.
	pub sequence: u64,
	pub query: String,
	pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	Committed { sequence: u64, response: SearchResponse },
	Superseded { sequence: u64, latest: u64 },
}

pub struct SearchSession {
	service: Arc<MesopustService>,
	issued: AtomicU64,
	state: Mutex<SessionState>,
}
impl SearchSession {
	pub fn new(service: Arc<MesopustService>) -> Self {
		Self { service, issued: AtomicU64::new(0), state: Mutex::new(SessionState::default()) }
	}

	pub async fn submit(&self, query: impl Into<String>) -> SubmitOutcome {
		let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
		let response = self.service.search(SearchRequest { query: query.into() }).await;
		let mut state = self.state.lock().unwrap_or_else(|err| err.into_inner());
		let latest = self.issued.load(Ordering::SeqCst);

		if sequence != latest {
			tracing::debug!(sequence, latest, "Dropping superseded search results.");

			return SubmitOutcome::Superseded { sequence, latest };
		}

		*state = SessionState {
			sequence,
			query: response.query.clone(),
			items: response.items.clone(),
		};

		SubmitOutcome::Committed { sequence, response }
	}

	pub fn snapshot(&self) -> SessionState {
		self.state.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}
}
