pub mod client_list;
pub mod error_banner;
pub mod forms;
pub mod header;
pub mod summary_table;
pub mod transactions;

pub use client_list::ClientList;
pub use error_banner::ErrorBanner;
pub use forms::ClientEditForm;
pub use header::Header;
pub use summary_table::SummaryTable;
