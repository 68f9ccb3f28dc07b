use crate::object_url::ObjectUrl;
use crate::request::OperationRequest;
use crate::state::RunId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand the request to the document processor.
    Dispatch {
        run_id: RunId,
        request: OperationRequest,
    },
    /// Revoke an object reference the state no longer owns.
    Release(ObjectUrl),
    /// Show a blocking, already localized message.
    Alert(String),
}
