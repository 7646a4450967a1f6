//! pocketbook-core: Domain types and the page loader for the Pocketbook client

pub mod account;
pub mod attachment;
pub mod filter;
pub mod goal;
pub mod loader;
pub mod page;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use attachment::Attachment;
pub use filter::TransactionFilter;
pub use goal::Goal;
pub use loader::{
    LoaderEvent, NEAR_BOTTOM_THRESHOLD, PageLoader, PageRequest, Phase, Resolution, near_bottom,
};
pub use page::{Page, PageCursor};
pub use transaction::{PaymentItem, Transaction, TransactionKind};
