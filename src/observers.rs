use tracing::info;

use crate::{book::Book, ledger::UserId};

/// Trait for observing successful lends
pub trait LendObserver {
    /// Called after `book` has been recorded in the ledger of `user`
    fn on_lend(&self, user: UserId, book: &Book);
}

/// Logs every lend through `tracing`
#[derive(Debug)]
pub struct LendLogger;

impl LendObserver for LendLogger {
    fn on_lend(&self, user: UserId, book: &Book) {
        info!(user, id = book.id(), title = book.title(), "book lent");
    }
}
