pub mod app_error;
pub mod current_user;
pub mod handler_404;
