use crate::{error, record, store};

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, types};
use serde_dynamo::{from_items, to_attribute_value, to_item};
use std::collections;

/// Attribute name of the primary key.
const KEY_ATTRIBUTE: &str = "id";

/// Full-field overwrite expression applied by the update operation.
const UPDATE_EXPRESSION: &str = "SET #firstName = :firstName, #lastName = :lastName, \
    #email = :email, #phoneNumber = :phoneNumber, #password = :password";

/// [`store::Store`] implementation over a DynamoDB table.
///
/// The collection name passed to each operation is the table name. The client
/// handle is process-wide and stateless from the service's perspective;
/// timeouts, retries, and connection management belong to the SDK, not here.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use user_record_service::store;
///
/// let client = Client::from_conf(aws_sdk_dynamodb::config::Config::builder().build());
/// let store = store::dynamodb::DynamoStore::new(client);
/// ```
#[derive(Clone, Debug)]
pub struct DynamoStore {
    client: Client,
}

impl DynamoStore {
    /// Wrap a DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn update_expression_names() -> collections::HashMap<String, String> {
    ["firstName", "lastName", "email", "phoneNumber", "password"]
        .into_iter()
        .map(|name| (format!("#{name}"), name.to_string()))
        .collect()
}

fn update_expression_values(
    fields: &record::UserFields,
) -> Result<collections::HashMap<String, types::AttributeValue>, error::StoreError> {
    let pairs = [
        (":firstName", &fields.first_name),
        (":lastName", &fields.last_name),
        (":email", &fields.email),
        (":phoneNumber", &fields.phone_number),
        (":password", &fields.password),
    ];
    let mut values = collections::HashMap::with_capacity(pairs.len());
    for (placeholder, field) in pairs {
        let value: types::AttributeValue =
            to_attribute_value(field).map_err(error::StoreError::new)?;
        values.insert(placeholder.to_string(), value);
    }
    Ok(values)
}

fn key_map(
    key: &str,
) -> Result<collections::HashMap<String, types::AttributeValue>, error::StoreError> {
    let value: types::AttributeValue = to_attribute_value(key).map_err(error::StoreError::new)?;
    Ok(collections::HashMap::from([(
        KEY_ATTRIBUTE.to_string(),
        value,
    )]))
}

#[async_trait]
impl store::Store for DynamoStore {
    async fn scan(
        &self,
        collection: &str,
    ) -> Result<Vec<record::UserRecord>, error::StoreError> {
        let mut paginator = self
            .client
            .scan()
            .table_name(collection)
            .into_paginator()
            .send();
        let mut items = Vec::new();
        while let Some(page) = paginator.next().await {
            let page = page.map_err(error::StoreError::new)?;
            items.extend(page.items.unwrap_or_default());
        }
        let records = from_items(items).map_err(error::StoreError::new)?;
        Ok(records)
    }

    async fn put(
        &self,
        collection: &str,
        record: record::UserRecord,
    ) -> Result<(), error::StoreError> {
        let item: collections::HashMap<String, types::AttributeValue> =
            to_item(record).map_err(error::StoreError::new)?;
        self.client
            .put_item()
            .table_name(collection)
            .set_item(Some(item))
            .send()
            .await
            .map_err(error::StoreError::new)?;
        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        key: &str,
        fields: &record::UserFields,
    ) -> Result<(), error::StoreError> {
        self.client
            .update_item()
            .table_name(collection)
            .set_key(Some(key_map(key)?))
            .update_expression(UPDATE_EXPRESSION)
            .set_expression_attribute_names(Some(update_expression_names()))
            .set_expression_attribute_values(Some(update_expression_values(fields)?))
            .send()
            .await
            .map_err(error::StoreError::new)?;
        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<(), error::StoreError> {
        self.client
            .delete_item()
            .table_name(collection)
            .set_key(Some(key_map(key)?))
            .send()
            .await
            .map_err(error::StoreError::new)?;
        Ok(())
    }
}
