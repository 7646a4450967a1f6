//! pocketbook-api: session, REST client, and per-resource services for the
//! Pocketbook API

pub mod client;
pub mod envelope;
pub mod error;
pub mod listing;
pub mod services;
pub mod session;

pub use client::ApiClient;
pub use envelope::Envelope;
pub use error::{ApiError, FieldErrors};
pub use listing::{PageSource, PagedList};
pub use services::accounts::{AccountPatch, AccountService, NewAccount};
pub use services::attachments::AttachmentService;
pub use services::auth::AuthService;
pub use services::goals::{GoalPatch, GoalService, NewGoal};
pub use services::payments::{
    NewPayment, NewPaymentItem, PaymentItemsSource, PaymentPatch, PaymentService,
};
pub use services::reports::{KindTotal, ReportService, ReportSummary};
pub use services::transactions::TransactionService;
pub use session::{Session, SessionStore, User};
