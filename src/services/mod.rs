pub mod contact;
pub mod mailer;
