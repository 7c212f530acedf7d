use crate::{error, id, response, service, store};

/// Success message returned with the 200 status.
const DELETED: &str = "User is deleted successfully";

/// Generic message returned when the removal fails.
const DELETE_FAILED: &str = "Error deleting user. Please try again later.";

/// Delete operation: remove the record at `id`, unconditionally.
///
/// There is no existence check; deleting an id that is not in the store
/// succeeds, matching the store's delete semantics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteUser {
    /// The record id from the addressing context.
    pub id: Option<String>,
}

/// delete operation with validated input
#[derive(Clone, Debug, PartialEq)]
struct DeleteUserInput {
    id: String,
}

impl TryFrom<DeleteUser> for DeleteUserInput {
    type Error = error::ValidationError;

    fn try_from(delete_user: DeleteUser) -> Result<Self, Self::Error> {
        match delete_user.id {
            Some(id) if !id.is_empty() => Ok(Self { id }),
            _ => Err(error::ValidationError::MissingId),
        }
    }
}

impl DeleteUser {
    /// Execute the delete operation.
    pub async fn send<S: store::Store, G: id::IdGenerator>(
        self,
        service: &service::UserRecordService<S, G>,
    ) -> response::Response {
        let input: DeleteUserInput = match self.try_into() {
            Ok(input) => input,
            Err(error) => return response::Response::message(400, &error.to_string()),
        };
        match service.store().delete(service.collection(), &input.id).await {
            Ok(()) => response::Response::message(200, DELETED),
            Err(error) => {
                tracing::error!(error = %error, "error deleting user");
                response::Response::message(500, DELETE_FAILED)
            }
        }
    }
}
