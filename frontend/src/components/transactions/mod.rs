pub mod table_pagination;
pub mod transaction_filters;
pub mod transaction_form;
pub mod transaction_list;
pub mod transaction_table;

pub use table_pagination::TablePagination;
pub use transaction_filters::TransactionFilters;
pub use transaction_form::TransactionForm;
pub use transaction_list::TransactionsPage;
pub use transaction_table::TransactionTable;
