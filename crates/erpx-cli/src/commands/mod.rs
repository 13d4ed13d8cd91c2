pub mod dispatch;
pub mod recommend;
pub mod schema;
pub mod status;
pub mod template;
pub mod validate;
