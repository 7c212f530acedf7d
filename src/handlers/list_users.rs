use crate::{id, response, service, store};

use serde_json::json;

/// Generic message returned when the scan fails.
const FETCH_FAILED: &str = "Error fetching users. Please try again later.";

/// List operation: return every user record in the collection.
///
/// Takes no input. The body on success is `{ "users": [...] }`, in whatever
/// order the store's scan returns; scans carry no ordering guarantee.
///
/// ```rust
/// use user_record_service::{handlers, service, store};
///
/// # async fn example() {
/// let service = service::UserRecordService::new(store::memory::MemoryStore::new(), "UsersDB");
/// let response = handlers::list_users::ListUsers.send(&service).await;
/// assert_eq!(response.status_code, 200);
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ListUsers;

impl ListUsers {
    /// Execute the list operation.
    pub async fn send<S: store::Store, G: id::IdGenerator>(
        self,
        service: &service::UserRecordService<S, G>,
    ) -> response::Response {
        match service.store().scan(service.collection()).await {
            Ok(users) => response::Response::new(200, json!({ "users": users })),
            Err(error) => {
                tracing::error!(error = %error, "error fetching users");
                response::Response::message(500, FETCH_FAILED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::tests::{FailingStore, FixedIds, full_payload};
    use crate::{handlers, store::memory};

    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn test_list_empty_store() {
        let service = service::UserRecordService::new(memory::MemoryStore::new(), "UsersDB");
        let response = ListUsers.send(&service).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, json!({ "users": [] }));
    }

    #[rstest]
    #[tokio::test]
    async fn test_list_returns_stored_records() {
        let service = service::UserRecordService::with_generator(
            memory::MemoryStore::new(),
            "UsersDB",
            FixedIds("nYrL3w9q"),
        );
        let created = handlers::create_user::CreateUser {
            payload: full_payload(),
        }
        .send(&service)
        .await;
        assert_eq!(created.status_code, 201);

        let response = ListUsers.send(&service).await;
        assert_eq!(response.status_code, 200);
        let expected = json!({
            "users": [{
                "id": "nYrL3w9q",
                "firstName": "A",
                "lastName": "B",
                "email": "a@b.com",
                "phoneNumber": "123",
                "password": "pw",
            }],
        });
        assert_eq!(response.body, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn test_list_store_failure_is_generic() {
        let service = service::UserRecordService::new(FailingStore, "UsersDB");
        let response = ListUsers.send(&service).await;
        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body,
            json!({ "message": "Error fetching users. Please try again later." })
        );
    }
}
