pub mod msg;
pub mod svc;
