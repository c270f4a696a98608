//! Один запрос за раз
//!
//! Every cart and order endpoint answers with the whole collection, so a
//! reply that lands after a newer one would bring back stale rows. Controllers
//! therefore run at most one request at a time.

use leptos::prelude::*;

/// Marks `in_flight` and returns `true`, or returns `false` when a request is
/// already running and the caller must drop the action.
pub fn begin_request(in_flight: RwSignal<bool>) -> bool {
    if in_flight.get_untracked() {
        log::debug!("Request already in flight, action ignored");
        return false;
    }
    in_flight.set(true);
    true
}
