use serde_json::{Value, json};

/// An HTTP-style response: a status code plus a JSON body.
///
/// The service is framework-agnostic; routing and serialization middleware are
/// supplied externally, so this pair is the whole of the response contract.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    /// HTTP status code (200, 201, 400, or 500).
    pub status_code: u16,
    /// JSON document returned to the caller.
    pub body: Value,
}

impl Response {
    /// A response with an arbitrary JSON body.
    pub fn new(status_code: u16, body: Value) -> Self {
        Self { status_code, body }
    }

    /// A response whose body is a single `message` field.
    pub fn message(status_code: u16, message: &str) -> Self {
        Self::new(status_code, json!({ "message": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::created(
        Response::message(201, "User is created successfully"),
        201,
        json!({ "message": "User is created successfully" })
    )]
    #[case::bad_request(
        Response::message(400, "User ID is required"),
        400,
        json!({ "message": "User ID is required" })
    )]
    fn test_message_response(
        #[case] response: Response,
        #[case] expected_status: u16,
        #[case] expected_body: Value,
    ) {
        assert_eq!(response.status_code, expected_status);
        assert_eq!(response.body, expected_body);
    }
}
