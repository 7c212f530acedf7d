use crate::{error, id, record, response, service, store};

/// Success message returned with the 200 status.
const UPDATED: &str = "User is updated successfully";

/// Generic message returned when the overwrite fails.
const UPDATE_FAILED: &str = "Error updating user. Please try again later.";

/// Update operation: overwrite the full field set of the record at `id`.
///
/// Partial updates are not supported; the id and all five payload fields are
/// required, and a missing id is reported with the same message as a missing
/// field. The store call does not check that the record exists first, so the
/// operation carries the store's upsert semantics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateUser {
    /// The record id from the addressing context.
    pub id: Option<String>,
    /// The raw request body.
    pub payload: record::UserPayload,
}

/// update operation with validated input
#[derive(Clone, Debug, PartialEq)]
struct UpdateUserInput {
    id: String,
    fields: record::UserFields,
}

impl TryFrom<UpdateUser> for UpdateUserInput {
    type Error = error::ValidationError;

    fn try_from(update_user: UpdateUser) -> Result<Self, Self::Error> {
        let id = match update_user.id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(error::ValidationError::MissingFields),
        };
        let fields = update_user.payload.try_into()?;
        Ok(Self { id, fields })
    }
}

impl UpdateUser {
    /// Execute the update operation.
    pub async fn send<S: store::Store, G: id::IdGenerator>(
        self,
        service: &service::UserRecordService<S, G>,
    ) -> response::Response {
        let input: UpdateUserInput = match self.try_into() {
            Ok(input) => input,
            Err(error) => return response::Response::message(400, &error.to_string()),
        };
        match service
            .store()
            .update(service.collection(), &input.id, &input.fields)
            .await
        {
            Ok(()) => response::Response::message(200, UPDATED),
            Err(error) => {
                tracing::error!(error = %error, "error updating user");
                response::Response::message(500, UPDATE_FAILED)
            }
        }
    }
}
