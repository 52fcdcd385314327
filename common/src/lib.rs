pub mod config;
pub mod db;

// user id validation
//
// uids arrive in a proxy header, so we check them before they reach the
// database and the logs
pub const USER_REGEX: &str = r"^[a-zA-Z0-9_.@-]{1,64}$";
