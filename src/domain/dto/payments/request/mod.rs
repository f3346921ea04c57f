pub mod payment_notification;

pub use payment_notification::PaymentNotification;
