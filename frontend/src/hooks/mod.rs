pub mod use_notifications;
pub mod use_transaction_view;
