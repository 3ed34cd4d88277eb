//! Request/response envelopes for in-process API calls.
//!
//! Every data-access operation takes an `ApiRequest<M>` and answers with an
//! `ApiResponse<M>`, so callers and implementations agree on one calling
//! convention regardless of the message carried.

use serde::{Deserialize, Serialize};

/// Envelope around an API request message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRequest<M> {
    msg: M,
}

impl<M> ApiRequest<M> {
    pub fn new(msg: M) -> Self {
        Self { msg }
    }

    pub fn msg(&self) -> &M {
        &self.msg
    }

    pub fn into_msg(self) -> M {
        self.msg
    }
}

impl<M: Default> Default for ApiRequest<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}

/// Envelope around an API response message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<M> {
    msg: M,
}

impl<M> ApiResponse<M> {
    pub fn new(msg: M) -> Self {
        Self { msg }
    }

    pub fn msg(&self) -> &M {
        &self.msg
    }

    pub fn into_msg(self) -> M {
        self.msg
    }
}
