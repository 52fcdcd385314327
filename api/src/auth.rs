use serde::{Deserialize, Serialize};

use crate::endpoint;

// messages

// report the uid that the server authenticated this request as
//
// the webapp uses this to decide whether to render the page at all; an
// Unauthorized error means there is no session
endpoint!(GetCurrentUser);

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GetCurrentUserReq {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GetCurrentUserResp {
    pub uid: String,
}
