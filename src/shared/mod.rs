pub mod notification_payload;
