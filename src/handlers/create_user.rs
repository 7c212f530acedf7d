use crate::{error, id, record, response, service, store};

/// Success message returned with the 201 status.
const CREATED: &str = "User is created successfully";

/// Generic message returned when the insert fails.
const CREATE_FAILED: &str = "Error creating user. Please try again later.";

/// Create operation: insert a new user record with a generated id.
///
/// All five payload fields are required and must be non-empty; otherwise the
/// operation returns 400 without touching the store. The id comes from the
/// service's generator and the insert is unconditional, with no check for a
/// colliding id.
///
/// ```rust
/// use user_record_service::{handlers, record, service, store};
///
/// # async fn example() {
/// let service = service::UserRecordService::new(store::memory::MemoryStore::new(), "UsersDB");
/// let create = handlers::create_user::CreateUser {
///     payload: record::UserPayload {
///         first_name: Some("John".to_string()),
///         last_name: Some("Doe".to_string()),
///         email: Some("john@example.com".to_string()),
///         phone_number: Some("555-0100".to_string()),
///         password: Some("hunter2".to_string()),
///     },
/// };
/// assert_eq!(create.send(&service).await.status_code, 201);
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateUser {
    /// The raw request body.
    pub payload: record::UserPayload,
}

/// create operation with validated input
#[derive(Clone, Debug, PartialEq)]
struct CreateUserInput {
    fields: record::UserFields,
}

impl TryFrom<CreateUser> for CreateUserInput {
    type Error = error::ValidationError;

    fn try_from(create_user: CreateUser) -> Result<Self, Self::Error> {
        let fields = create_user.payload.try_into()?;
        Ok(Self { fields })
    }
}

impl CreateUser {
    /// Execute the create operation.
    pub async fn send<S: store::Store, G: id::IdGenerator>(
        self,
        service: &service::UserRecordService<S, G>,
    ) -> response::Response {
        let input: CreateUserInput = match self.try_into() {
            Ok(input) => input,
            Err(error) => return response::Response::message(400, &error.to_string()),
        };
        let record = record::UserRecord::new(service.generate_id(), input.fields);
        match service.store().put(service.collection(), record).await {
            Ok(()) => response::Response::message(201, CREATED),
            Err(error) => {
                tracing::error!(error = %error, "error creating user");
                response::Response::message(500, CREATE_FAILED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::tests::{FailingStore, FixedIds, full_fields, full_payload};
    use crate::store::{Store, memory};

    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::valid(
        CreateUser {
            payload: full_payload(),
        },
        Ok(CreateUserInput {
            fields: full_fields(),
        })
    )]
    #[case::missing_field(
        CreateUser {
            payload: record::UserPayload {
                email: None,
                ..full_payload()
            },
        },
        Err(error::ValidationError::MissingFields)
    )]
    #[case::empty_field(
        CreateUser {
            payload: record::UserPayload {
                phone_number: Some(String::new()),
                ..full_payload()
            },
        },
        Err(error::ValidationError::MissingFields)
    )]
    fn test_create_user_validation(
        #[case] args: CreateUser,
        #[case] expected: Result<CreateUserInput, error::ValidationError>,
    ) {
        let actual: Result<CreateUserInput, error::ValidationError> = args.try_into();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_persists_record_with_generated_id() {
        let service = service::UserRecordService::with_generator(
            memory::MemoryStore::new(),
            "UsersDB",
            FixedIds("nYrL3w9q"),
        );
        let response = CreateUser {
            payload: full_payload(),
        }
        .send(&service)
        .await;
        assert_eq!(response.status_code, 201);
        assert_eq!(
            response.body,
            json!({ "message": "User is created successfully" })
        );
        let records = service.store().scan("UsersDB").await.unwrap();
        assert_eq!(
            records,
            vec![record::UserRecord::new("nYrL3w9q".to_string(), full_fields())]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_invalid_payload_leaves_store_unchanged() {
        let service = service::UserRecordService::new(memory::MemoryStore::new(), "UsersDB");
        let response = CreateUser {
            payload: record::UserPayload {
                password: None,
                ..full_payload()
            },
        }
        .send(&service)
        .await;
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, json!({ "message": "Missing required fields" }));
        assert!(service.store().scan("UsersDB").await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_store_failure_is_generic() {
        let service = service::UserRecordService::new(FailingStore, "UsersDB");
        let response = CreateUser {
            payload: full_payload(),
        }
        .send(&service)
        .await;
        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body,
            json!({ "message": "Error creating user. Please try again later." })
        );
    }
}
