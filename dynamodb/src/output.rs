/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct BatchGetItemOutput {
    #[serde(rename = "Responses")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub responses:
        std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>>>,
    #[serde(rename = "UnprocessedKeys")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub unprocessed_keys:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::KeysAndAttributes>>,
    #[serde(rename = "ConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub consumed_capacity: std::option::Option<std::vec::Vec<crate::model::ConsumedCapacity>>,
}
impl BatchGetItemOutput {
    /// Creates a new builder-style object to manufacture [`BatchGetItemOutput`](crate::output::BatchGetItemOutput)
    pub fn builder() -> crate::output::batch_get_item_output::Builder {
        crate::output::batch_get_item_output::Builder::default()
    }
}
/// See [`BatchGetItemOutput`](crate::output::BatchGetItemOutput)
pub mod batch_get_item_output {
    /// A builder for [`BatchGetItemOutput`](crate::output::BatchGetItemOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        responses:
            std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>>>,
        unprocessed_keys:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::KeysAndAttributes>>,
        consumed_capacity: std::option::Option<std::vec::Vec<crate::model::ConsumedCapacity>>,
    }
    impl Builder {
        pub fn responses(
            mut self,
            k: impl Into<std::string::String>,
            v:
                impl Into<std::vec::Vec<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>>,
        ) -> Self {
            let mut hash_map = self.responses.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.responses = Some(hash_map);
            self
        }
        pub fn set_responses(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>>>,
        ) -> Self {
            self.responses = inp;
            self
        }
        pub fn unprocessed_keys(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::KeysAndAttributes>,
        ) -> Self {
            let mut hash_map = self.unprocessed_keys.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.unprocessed_keys = Some(hash_map);
            self
        }
        pub fn set_unprocessed_keys(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::KeysAndAttributes>>,
        ) -> Self {
            self.unprocessed_keys = inp;
            self
        }
        pub fn consumed_capacity(mut self, inp: impl Into<crate::model::ConsumedCapacity>) -> Self {
            let mut v = self.consumed_capacity.unwrap_or_default();
            v.push(inp.into());
            self.consumed_capacity = Some(v);
            self
        }
        pub fn set_consumed_capacity(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::ConsumedCapacity>>,
        ) -> Self {
            self.consumed_capacity = inp;
            self
        }
        /// Consumes the builder and constructs a [`BatchGetItemOutput`](crate::output::BatchGetItemOutput)
        pub fn build(self) -> crate::output::BatchGetItemOutput {
            crate::output::BatchGetItemOutput {
                responses: self.responses,
                unprocessed_keys: self.unprocessed_keys,
                consumed_capacity: self.consumed_capacity,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct BatchWriteItemOutput {
    /// Requests that were not processed, in the same form as `RequestItems`. Resend them in a later call.
    #[serde(rename = "UnprocessedItems")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub unprocessed_items:
        std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<crate::model::WriteRequest>>>,
    #[serde(rename = "ItemCollectionMetrics")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item_collection_metrics:
        std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<crate::model::ItemCollectionMetrics>>>,
    #[serde(rename = "ConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub consumed_capacity: std::option::Option<std::vec::Vec<crate::model::ConsumedCapacity>>,
}
impl BatchWriteItemOutput {
    /// Creates a new builder-style object to manufacture [`BatchWriteItemOutput`](crate::output::BatchWriteItemOutput)
    pub fn builder() -> crate::output::batch_write_item_output::Builder {
        crate::output::batch_write_item_output::Builder::default()
    }
}
/// See [`BatchWriteItemOutput`](crate::output::BatchWriteItemOutput)
pub mod batch_write_item_output {
    /// A builder for [`BatchWriteItemOutput`](crate::output::BatchWriteItemOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        unprocessed_items:
            std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<crate::model::WriteRequest>>>,
        item_collection_metrics:
            std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<crate::model::ItemCollectionMetrics>>>,
        consumed_capacity: std::option::Option<std::vec::Vec<crate::model::ConsumedCapacity>>,
    }
    impl Builder {
        /// Requests that were not processed, in the same form as `RequestItems`. Resend them in a later call.
        pub fn unprocessed_items(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<crate::model::WriteRequest>>,
        ) -> Self {
            let mut hash_map = self.unprocessed_items.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.unprocessed_items = Some(hash_map);
            self
        }
        pub fn set_unprocessed_items(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<crate::model::WriteRequest>>>,
        ) -> Self {
            self.unprocessed_items = inp;
            self
        }
        pub fn item_collection_metrics(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<crate::model::ItemCollectionMetrics>>,
        ) -> Self {
            let mut hash_map = self.item_collection_metrics.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.item_collection_metrics = Some(hash_map);
            self
        }
        pub fn set_item_collection_metrics(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<crate::model::ItemCollectionMetrics>>>,
        ) -> Self {
            self.item_collection_metrics = inp;
            self
        }
        pub fn consumed_capacity(mut self, inp: impl Into<crate::model::ConsumedCapacity>) -> Self {
            let mut v = self.consumed_capacity.unwrap_or_default();
            v.push(inp.into());
            self.consumed_capacity = Some(v);
            self
        }
        pub fn set_consumed_capacity(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::ConsumedCapacity>>,
        ) -> Self {
            self.consumed_capacity = inp;
            self
        }
        /// Consumes the builder and constructs a [`BatchWriteItemOutput`](crate::output::BatchWriteItemOutput)
        pub fn build(self) -> crate::output::BatchWriteItemOutput {
            crate::output::BatchWriteItemOutput {
                unprocessed_items: self.unprocessed_items,
                item_collection_metrics: self.item_collection_metrics,
                consumed_capacity: self.consumed_capacity,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct CreateTableOutput {
    #[serde(rename = "TableDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_description: std::option::Option<crate::model::TableDescription>,
}
impl CreateTableOutput {
    /// Creates a new builder-style object to manufacture [`CreateTableOutput`](crate::output::CreateTableOutput)
    pub fn builder() -> crate::output::create_table_output::Builder {
        crate::output::create_table_output::Builder::default()
    }
}
/// See [`CreateTableOutput`](crate::output::CreateTableOutput)
pub mod create_table_output {
    /// A builder for [`CreateTableOutput`](crate::output::CreateTableOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_description: std::option::Option<crate::model::TableDescription>,
    }
    impl Builder {
        pub fn table_description(mut self, inp: crate::model::TableDescription) -> Self {
            self.table_description = Some(inp);
            self
        }
        pub fn set_table_description(
            mut self,
            inp: std::option::Option<crate::model::TableDescription>,
        ) -> Self {
            self.table_description = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateTableOutput`](crate::output::CreateTableOutput)
        pub fn build(self) -> crate::output::CreateTableOutput {
            crate::output::CreateTableOutput {
                table_description: self.table_description,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct DeleteItemOutput {
    #[serde(rename = "Attributes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attributes:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "ConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub consumed_capacity: std::option::Option<crate::model::ConsumedCapacity>,
    #[serde(rename = "ItemCollectionMetrics")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item_collection_metrics: std::option::Option<crate::model::ItemCollectionMetrics>,
}
impl DeleteItemOutput {
    /// Creates a new builder-style object to manufacture [`DeleteItemOutput`](crate::output::DeleteItemOutput)
    pub fn builder() -> crate::output::delete_item_output::Builder {
        crate::output::delete_item_output::Builder::default()
    }
}
/// See [`DeleteItemOutput`](crate::output::DeleteItemOutput)
pub mod delete_item_output {
    /// A builder for [`DeleteItemOutput`](crate::output::DeleteItemOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        attributes:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        consumed_capacity: std::option::Option<crate::model::ConsumedCapacity>,
        item_collection_metrics: std::option::Option<crate::model::ItemCollectionMetrics>,
    }
    impl Builder {
        pub fn attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        pub fn set_attributes(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.attributes = inp;
            self
        }
        pub fn consumed_capacity(mut self, inp: crate::model::ConsumedCapacity) -> Self {
            self.consumed_capacity = Some(inp);
            self
        }
        pub fn set_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ConsumedCapacity>,
        ) -> Self {
            self.consumed_capacity = inp;
            self
        }
        pub fn item_collection_metrics(mut self, inp: crate::model::ItemCollectionMetrics) -> Self {
            self.item_collection_metrics = Some(inp);
            self
        }
        pub fn set_item_collection_metrics(
            mut self,
            inp: std::option::Option<crate::model::ItemCollectionMetrics>,
        ) -> Self {
            self.item_collection_metrics = inp;
            self
        }
        /// Consumes the builder and constructs a [`DeleteItemOutput`](crate::output::DeleteItemOutput)
        pub fn build(self) -> crate::output::DeleteItemOutput {
            crate::output::DeleteItemOutput {
                attributes: self.attributes,
                consumed_capacity: self.consumed_capacity,
                item_collection_metrics: self.item_collection_metrics,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct DeleteTableOutput {
    #[serde(rename = "TableDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_description: std::option::Option<crate::model::TableDescription>,
}
impl DeleteTableOutput {
    /// Creates a new builder-style object to manufacture [`DeleteTableOutput`](crate::output::DeleteTableOutput)
    pub fn builder() -> crate::output::delete_table_output::Builder {
        crate::output::delete_table_output::Builder::default()
    }
}
/// See [`DeleteTableOutput`](crate::output::DeleteTableOutput)
pub mod delete_table_output {
    /// A builder for [`DeleteTableOutput`](crate::output::DeleteTableOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_description: std::option::Option<crate::model::TableDescription>,
    }
    impl Builder {
        pub fn table_description(mut self, inp: crate::model::TableDescription) -> Self {
            self.table_description = Some(inp);
            self
        }
        pub fn set_table_description(
            mut self,
            inp: std::option::Option<crate::model::TableDescription>,
        ) -> Self {
            self.table_description = inp;
            self
        }
        /// Consumes the builder and constructs a [`DeleteTableOutput`](crate::output::DeleteTableOutput)
        pub fn build(self) -> crate::output::DeleteTableOutput {
            crate::output::DeleteTableOutput {
                table_description: self.table_description,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct DescribeTableOutput {
    #[serde(rename = "Table")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table: std::option::Option<crate::model::TableDescription>,
}
impl DescribeTableOutput {
    /// Creates a new builder-style object to manufacture [`DescribeTableOutput`](crate::output::DescribeTableOutput)
    pub fn builder() -> crate::output::describe_table_output::Builder {
        crate::output::describe_table_output::Builder::default()
    }
}
/// See [`DescribeTableOutput`](crate::output::DescribeTableOutput)
pub mod describe_table_output {
    /// A builder for [`DescribeTableOutput`](crate::output::DescribeTableOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table: std::option::Option<crate::model::TableDescription>,
    }
    impl Builder {
        pub fn table(mut self, inp: crate::model::TableDescription) -> Self {
            self.table = Some(inp);
            self
        }
        pub fn set_table(
            mut self,
            inp: std::option::Option<crate::model::TableDescription>,
        ) -> Self {
            self.table = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeTableOutput`](crate::output::DescribeTableOutput)
        pub fn build(self) -> crate::output::DescribeTableOutput {
            crate::output::DescribeTableOutput {
                table: self.table,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct DescribeLimitsOutput {
    #[serde(rename = "AccountMaxReadCapacityUnits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub account_max_read_capacity_units: std::option::Option<i64>,
    #[serde(rename = "AccountMaxWriteCapacityUnits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub account_max_write_capacity_units: std::option::Option<i64>,
    #[serde(rename = "TableMaxReadCapacityUnits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_max_read_capacity_units: std::option::Option<i64>,
    #[serde(rename = "TableMaxWriteCapacityUnits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_max_write_capacity_units: std::option::Option<i64>,
}
impl DescribeLimitsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeLimitsOutput`](crate::output::DescribeLimitsOutput)
    pub fn builder() -> crate::output::describe_limits_output::Builder {
        crate::output::describe_limits_output::Builder::default()
    }
}
/// See [`DescribeLimitsOutput`](crate::output::DescribeLimitsOutput)
pub mod describe_limits_output {
    /// A builder for [`DescribeLimitsOutput`](crate::output::DescribeLimitsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        account_max_read_capacity_units: std::option::Option<i64>,
        account_max_write_capacity_units: std::option::Option<i64>,
        table_max_read_capacity_units: std::option::Option<i64>,
        table_max_write_capacity_units: std::option::Option<i64>,
    }
    impl Builder {
        pub fn account_max_read_capacity_units(mut self, inp: i64) -> Self {
            self.account_max_read_capacity_units = Some(inp);
            self
        }
        pub fn set_account_max_read_capacity_units(
            mut self,
            inp: std::option::Option<i64>,
        ) -> Self {
            self.account_max_read_capacity_units = inp;
            self
        }
        pub fn account_max_write_capacity_units(mut self, inp: i64) -> Self {
            self.account_max_write_capacity_units = Some(inp);
            self
        }
        pub fn set_account_max_write_capacity_units(
            mut self,
            inp: std::option::Option<i64>,
        ) -> Self {
            self.account_max_write_capacity_units = inp;
            self
        }
        pub fn table_max_read_capacity_units(mut self, inp: i64) -> Self {
            self.table_max_read_capacity_units = Some(inp);
            self
        }
        pub fn set_table_max_read_capacity_units(mut self, inp: std::option::Option<i64>) -> Self {
            self.table_max_read_capacity_units = inp;
            self
        }
        pub fn table_max_write_capacity_units(mut self, inp: i64) -> Self {
            self.table_max_write_capacity_units = Some(inp);
            self
        }
        pub fn set_table_max_write_capacity_units(mut self, inp: std::option::Option<i64>) -> Self {
            self.table_max_write_capacity_units = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeLimitsOutput`](crate::output::DescribeLimitsOutput)
        pub fn build(self) -> crate::output::DescribeLimitsOutput {
            crate::output::DescribeLimitsOutput {
                account_max_read_capacity_units: self.account_max_read_capacity_units,
                account_max_write_capacity_units: self.account_max_write_capacity_units,
                table_max_read_capacity_units: self.table_max_read_capacity_units,
                table_max_write_capacity_units: self.table_max_write_capacity_units,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct DescribeTimeToLiveOutput {
    #[serde(rename = "TimeToLiveDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_to_live_description: std::option::Option<crate::model::TimeToLiveDescription>,
}
impl DescribeTimeToLiveOutput {
    /// Creates a new builder-style object to manufacture [`DescribeTimeToLiveOutput`](crate::output::DescribeTimeToLiveOutput)
    pub fn builder() -> crate::output::describe_time_to_live_output::Builder {
        crate::output::describe_time_to_live_output::Builder::default()
    }
}
/// See [`DescribeTimeToLiveOutput`](crate::output::DescribeTimeToLiveOutput)
pub mod describe_time_to_live_output {
    /// A builder for [`DescribeTimeToLiveOutput`](crate::output::DescribeTimeToLiveOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        time_to_live_description: std::option::Option<crate::model::TimeToLiveDescription>,
    }
    impl Builder {
        pub fn time_to_live_description(
            mut self,
            inp: crate::model::TimeToLiveDescription,
        ) -> Self {
            self.time_to_live_description = Some(inp);
            self
        }
        pub fn set_time_to_live_description(
            mut self,
            inp: std::option::Option<crate::model::TimeToLiveDescription>,
        ) -> Self {
            self.time_to_live_description = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeTimeToLiveOutput`](crate::output::DescribeTimeToLiveOutput)
        pub fn build(self) -> crate::output::DescribeTimeToLiveOutput {
            crate::output::DescribeTimeToLiveOutput {
                time_to_live_description: self.time_to_live_description,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct GetItemOutput {
    #[serde(rename = "Item")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "ConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub consumed_capacity: std::option::Option<crate::model::ConsumedCapacity>,
}
impl GetItemOutput {
    /// Creates a new builder-style object to manufacture [`GetItemOutput`](crate::output::GetItemOutput)
    pub fn builder() -> crate::output::get_item_output::Builder {
        crate::output::get_item_output::Builder::default()
    }
}
/// See [`GetItemOutput`](crate::output::GetItemOutput)
pub mod get_item_output {
    /// A builder for [`GetItemOutput`](crate::output::GetItemOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        item:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        consumed_capacity: std::option::Option<crate::model::ConsumedCapacity>,
    }
    impl Builder {
        pub fn item(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.item.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.item = Some(hash_map);
            self
        }
        pub fn set_item(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.item = inp;
            self
        }
        pub fn consumed_capacity(mut self, inp: crate::model::ConsumedCapacity) -> Self {
            self.consumed_capacity = Some(inp);
            self
        }
        pub fn set_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ConsumedCapacity>,
        ) -> Self {
            self.consumed_capacity = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetItemOutput`](crate::output::GetItemOutput)
        pub fn build(self) -> crate::output::GetItemOutput {
            crate::output::GetItemOutput {
                item: self.item,
                consumed_capacity: self.consumed_capacity,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct ListTablesOutput {
    #[serde(rename = "TableNames")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_names: std::option::Option<std::vec::Vec<std::string::String>>,
    /// The name of the last table in the current page of results. Absent when there are no more pages.
    #[serde(rename = "LastEvaluatedTableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_evaluated_table_name: std::option::Option<std::string::String>,
}
impl ListTablesOutput {
    /// Creates a new builder-style object to manufacture [`ListTablesOutput`](crate::output::ListTablesOutput)
    pub fn builder() -> crate::output::list_tables_output::Builder {
        crate::output::list_tables_output::Builder::default()
    }
}
/// See [`ListTablesOutput`](crate::output::ListTablesOutput)
pub mod list_tables_output {
    /// A builder for [`ListTablesOutput`](crate::output::ListTablesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_names: std::option::Option<std::vec::Vec<std::string::String>>,
        last_evaluated_table_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn table_names(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.table_names.unwrap_or_default();
            v.push(inp.into());
            self.table_names = Some(v);
            self
        }
        pub fn set_table_names(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.table_names = inp;
            self
        }
        /// The name of the last table in the current page of results. Absent when there are no more pages.
        pub fn last_evaluated_table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.last_evaluated_table_name = Some(inp.into());
            self
        }
        pub fn set_last_evaluated_table_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.last_evaluated_table_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListTablesOutput`](crate::output::ListTablesOutput)
        pub fn build(self) -> crate::output::ListTablesOutput {
            crate::output::ListTablesOutput {
                table_names: self.table_names,
                last_evaluated_table_name: self.last_evaluated_table_name,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct PutItemOutput {
    #[serde(rename = "Attributes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attributes:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "ConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub consumed_capacity: std::option::Option<crate::model::ConsumedCapacity>,
    #[serde(rename = "ItemCollectionMetrics")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item_collection_metrics: std::option::Option<crate::model::ItemCollectionMetrics>,
}
impl PutItemOutput {
    /// Creates a new builder-style object to manufacture [`PutItemOutput`](crate::output::PutItemOutput)
    pub fn builder() -> crate::output::put_item_output::Builder {
        crate::output::put_item_output::Builder::default()
    }
}
/// See [`PutItemOutput`](crate::output::PutItemOutput)
pub mod put_item_output {
    /// A builder for [`PutItemOutput`](crate::output::PutItemOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        attributes:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        consumed_capacity: std::option::Option<crate::model::ConsumedCapacity>,
        item_collection_metrics: std::option::Option<crate::model::ItemCollectionMetrics>,
    }
    impl Builder {
        pub fn attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        pub fn set_attributes(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.attributes = inp;
            self
        }
        pub fn consumed_capacity(mut self, inp: crate::model::ConsumedCapacity) -> Self {
            self.consumed_capacity = Some(inp);
            self
        }
        pub fn set_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ConsumedCapacity>,
        ) -> Self {
            self.consumed_capacity = inp;
            self
        }
        pub fn item_collection_metrics(mut self, inp: crate::model::ItemCollectionMetrics) -> Self {
            self.item_collection_metrics = Some(inp);
            self
        }
        pub fn set_item_collection_metrics(
            mut self,
            inp: std::option::Option<crate::model::ItemCollectionMetrics>,
        ) -> Self {
            self.item_collection_metrics = inp;
            self
        }
        /// Consumes the builder and constructs a [`PutItemOutput`](crate::output::PutItemOutput)
        pub fn build(self) -> crate::output::PutItemOutput {
            crate::output::PutItemOutput {
                attributes: self.attributes,
                consumed_capacity: self.consumed_capacity,
                item_collection_metrics: self.item_collection_metrics,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct QueryOutput {
    #[serde(rename = "Items")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub items:
        std::option::Option<std::vec::Vec<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>>,
    #[serde(rename = "Count")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub count: std::option::Option<i32>,
    #[serde(rename = "ScannedCount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scanned_count: std::option::Option<i32>,
    #[serde(rename = "LastEvaluatedKey")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_evaluated_key:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "ConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub consumed_capacity: std::option::Option<crate::model::ConsumedCapacity>,
}
impl QueryOutput {
    /// Creates a new builder-style object to manufacture [`QueryOutput`](crate::output::QueryOutput)
    pub fn builder() -> crate::output::query_output::Builder {
        crate::output::query_output::Builder::default()
    }
}
/// See [`QueryOutput`](crate::output::QueryOutput)
pub mod query_output {
    /// A builder for [`QueryOutput`](crate::output::QueryOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        items:
            std::option::Option<std::vec::Vec<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>>,
        count: std::option::Option<i32>,
        scanned_count: std::option::Option<i32>,
        last_evaluated_key:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        consumed_capacity: std::option::Option<crate::model::ConsumedCapacity>,
    }
    impl Builder {
        pub fn items(
            mut self,
            inp: impl Into<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            let mut v = self.items.unwrap_or_default();
            v.push(inp.into());
            self.items = Some(v);
            self
        }
        pub fn set_items(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>>,
        ) -> Self {
            self.items = inp;
            self
        }
        pub fn count(mut self, inp: i32) -> Self {
            self.count = Some(inp);
            self
        }
        pub fn set_count(mut self, inp: std::option::Option<i32>) -> Self {
            self.count = inp;
            self
        }
        pub fn scanned_count(mut self, inp: i32) -> Self {
            self.scanned_count = Some(inp);
            self
        }
        pub fn set_scanned_count(mut self, inp: std::option::Option<i32>) -> Self {
            self.scanned_count = inp;
            self
        }
        pub fn last_evaluated_key(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.last_evaluated_key.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.last_evaluated_key = Some(hash_map);
            self
        }
        pub fn set_last_evaluated_key(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.last_evaluated_key = inp;
            self
        }
        pub fn consumed_capacity(mut self, inp: crate::model::ConsumedCapacity) -> Self {
            self.consumed_capacity = Some(inp);
            self
        }
        pub fn set_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ConsumedCapacity>,
        ) -> Self {
            self.consumed_capacity = inp;
            self
        }
        /// Consumes the builder and constructs a [`QueryOutput`](crate::output::QueryOutput)
        pub fn build(self) -> crate::output::QueryOutput {
            crate::output::QueryOutput {
                items: self.items,
                count: self.count,
                scanned_count: self.scanned_count,
                last_evaluated_key: self.last_evaluated_key,
                consumed_capacity: self.consumed_capacity,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct ScanOutput {
    #[serde(rename = "Items")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub items:
        std::option::Option<std::vec::Vec<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>>,
    #[serde(rename = "Count")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub count: std::option::Option<i32>,
    #[serde(rename = "ScannedCount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scanned_count: std::option::Option<i32>,
    #[serde(rename = "LastEvaluatedKey")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_evaluated_key:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "ConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub consumed_capacity: std::option::Option<crate::model::ConsumedCapacity>,
}
impl ScanOutput {
    /// Creates a new builder-style object to manufacture [`ScanOutput`](crate::output::ScanOutput)
    pub fn builder() -> crate::output::scan_output::Builder {
        crate::output::scan_output::Builder::default()
    }
}
/// See [`ScanOutput`](crate::output::ScanOutput)
pub mod scan_output {
    /// A builder for [`ScanOutput`](crate::output::ScanOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        items:
            std::option::Option<std::vec::Vec<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>>,
        count: std::option::Option<i32>,
        scanned_count: std::option::Option<i32>,
        last_evaluated_key:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        consumed_capacity: std::option::Option<crate::model::ConsumedCapacity>,
    }
    impl Builder {
        pub fn items(
            mut self,
            inp: impl Into<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            let mut v = self.items.unwrap_or_default();
            v.push(inp.into());
            self.items = Some(v);
            self
        }
        pub fn set_items(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>>,
        ) -> Self {
            self.items = inp;
            self
        }
        pub fn count(mut self, inp: i32) -> Self {
            self.count = Some(inp);
            self
        }
        pub fn set_count(mut self, inp: std::option::Option<i32>) -> Self {
            self.count = inp;
            self
        }
        pub fn scanned_count(mut self, inp: i32) -> Self {
            self.scanned_count = Some(inp);
            self
        }
        pub fn set_scanned_count(mut self, inp: std::option::Option<i32>) -> Self {
            self.scanned_count = inp;
            self
        }
        pub fn last_evaluated_key(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.last_evaluated_key.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.last_evaluated_key = Some(hash_map);
            self
        }
        pub fn set_last_evaluated_key(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.last_evaluated_key = inp;
            self
        }
        pub fn consumed_capacity(mut self, inp: crate::model::ConsumedCapacity) -> Self {
            self.consumed_capacity = Some(inp);
            self
        }
        pub fn set_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ConsumedCapacity>,
        ) -> Self {
            self.consumed_capacity = inp;
            self
        }
        /// Consumes the builder and constructs a [`ScanOutput`](crate::output::ScanOutput)
        pub fn build(self) -> crate::output::ScanOutput {
            crate::output::ScanOutput {
                items: self.items,
                count: self.count,
                scanned_count: self.scanned_count,
                last_evaluated_key: self.last_evaluated_key,
                consumed_capacity: self.consumed_capacity,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct TransactGetItemsOutput {
    #[serde(rename = "ConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub consumed_capacity: std::option::Option<std::vec::Vec<crate::model::ConsumedCapacity>>,
    #[serde(rename = "Responses")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub responses: std::option::Option<std::vec::Vec<crate::model::ItemResponse>>,
}
impl TransactGetItemsOutput {
    /// Creates a new builder-style object to manufacture [`TransactGetItemsOutput`](crate::output::TransactGetItemsOutput)
    pub fn builder() -> crate::output::transact_get_items_output::Builder {
        crate::output::transact_get_items_output::Builder::default()
    }
}
/// See [`TransactGetItemsOutput`](crate::output::TransactGetItemsOutput)
pub mod transact_get_items_output {
    /// A builder for [`TransactGetItemsOutput`](crate::output::TransactGetItemsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        consumed_capacity: std::option::Option<std::vec::Vec<crate::model::ConsumedCapacity>>,
        responses: std::option::Option<std::vec::Vec<crate::model::ItemResponse>>,
    }
    impl Builder {
        pub fn consumed_capacity(mut self, inp: impl Into<crate::model::ConsumedCapacity>) -> Self {
            let mut v = self.consumed_capacity.unwrap_or_default();
            v.push(inp.into());
            self.consumed_capacity = Some(v);
            self
        }
        pub fn set_consumed_capacity(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::ConsumedCapacity>>,
        ) -> Self {
            self.consumed_capacity = inp;
            self
        }
        pub fn responses(mut self, inp: impl Into<crate::model::ItemResponse>) -> Self {
            let mut v = self.responses.unwrap_or_default();
            v.push(inp.into());
            self.responses = Some(v);
            self
        }
        pub fn set_responses(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::ItemResponse>>,
        ) -> Self {
            self.responses = inp;
            self
        }
        /// Consumes the builder and constructs a [`TransactGetItemsOutput`](crate::output::TransactGetItemsOutput)
        pub fn build(self) -> crate::output::TransactGetItemsOutput {
            crate::output::TransactGetItemsOutput {
                consumed_capacity: self.consumed_capacity,
                responses: self.responses,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct TransactWriteItemsOutput {
    #[serde(rename = "ConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub consumed_capacity: std::option::Option<std::vec::Vec<crate::model::ConsumedCapacity>>,
    #[serde(rename = "ItemCollectionMetrics")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item_collection_metrics:
        std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<crate::model::ItemCollectionMetrics>>>,
}
impl TransactWriteItemsOutput {
    /// Creates a new builder-style object to manufacture [`TransactWriteItemsOutput`](crate::output::TransactWriteItemsOutput)
    pub fn builder() -> crate::output::transact_write_items_output::Builder {
        crate::output::transact_write_items_output::Builder::default()
    }
}
/// See [`TransactWriteItemsOutput`](crate::output::TransactWriteItemsOutput)
pub mod transact_write_items_output {
    /// A builder for [`TransactWriteItemsOutput`](crate::output::TransactWriteItemsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        consumed_capacity: std::option::Option<std::vec::Vec<crate::model::ConsumedCapacity>>,
        item_collection_metrics:
            std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<crate::model::ItemCollectionMetrics>>>,
    }
    impl Builder {
        pub fn consumed_capacity(mut self, inp: impl Into<crate::model::ConsumedCapacity>) -> Self {
            let mut v = self.consumed_capacity.unwrap_or_default();
            v.push(inp.into());
            self.consumed_capacity = Some(v);
            self
        }
        pub fn set_consumed_capacity(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::ConsumedCapacity>>,
        ) -> Self {
            self.consumed_capacity = inp;
            self
        }
        pub fn item_collection_metrics(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<crate::model::ItemCollectionMetrics>>,
        ) -> Self {
            let mut hash_map = self.item_collection_metrics.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.item_collection_metrics = Some(hash_map);
            self
        }
        pub fn set_item_collection_metrics(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<crate::model::ItemCollectionMetrics>>>,
        ) -> Self {
            self.item_collection_metrics = inp;
            self
        }
        /// Consumes the builder and constructs a [`TransactWriteItemsOutput`](crate::output::TransactWriteItemsOutput)
        pub fn build(self) -> crate::output::TransactWriteItemsOutput {
            crate::output::TransactWriteItemsOutput {
                consumed_capacity: self.consumed_capacity,
                item_collection_metrics: self.item_collection_metrics,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct UpdateItemOutput {
    #[serde(rename = "Attributes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attributes:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "ConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub consumed_capacity: std::option::Option<crate::model::ConsumedCapacity>,
    #[serde(rename = "ItemCollectionMetrics")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item_collection_metrics: std::option::Option<crate::model::ItemCollectionMetrics>,
}
impl UpdateItemOutput {
    /// Creates a new builder-style object to manufacture [`UpdateItemOutput`](crate::output::UpdateItemOutput)
    pub fn builder() -> crate::output::update_item_output::Builder {
        crate::output::update_item_output::Builder::default()
    }
}
/// See [`UpdateItemOutput`](crate::output::UpdateItemOutput)
pub mod update_item_output {
    /// A builder for [`UpdateItemOutput`](crate::output::UpdateItemOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        attributes:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        consumed_capacity: std::option::Option<crate::model::ConsumedCapacity>,
        item_collection_metrics: std::option::Option<crate::model::ItemCollectionMetrics>,
    }
    impl Builder {
        pub fn attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        pub fn set_attributes(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.attributes = inp;
            self
        }
        pub fn consumed_capacity(mut self, inp: crate::model::ConsumedCapacity) -> Self {
            self.consumed_capacity = Some(inp);
            self
        }
        pub fn set_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ConsumedCapacity>,
        ) -> Self {
            self.consumed_capacity = inp;
            self
        }
        pub fn item_collection_metrics(mut self, inp: crate::model::ItemCollectionMetrics) -> Self {
            self.item_collection_metrics = Some(inp);
            self
        }
        pub fn set_item_collection_metrics(
            mut self,
            inp: std::option::Option<crate::model::ItemCollectionMetrics>,
        ) -> Self {
            self.item_collection_metrics = inp;
            self
        }
        /// Consumes the builder and constructs a [`UpdateItemOutput`](crate::output::UpdateItemOutput)
        pub fn build(self) -> crate::output::UpdateItemOutput {
            crate::output::UpdateItemOutput {
                attributes: self.attributes,
                consumed_capacity: self.consumed_capacity,
                item_collection_metrics: self.item_collection_metrics,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct UpdateTableOutput {
    #[serde(rename = "TableDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_description: std::option::Option<crate::model::TableDescription>,
}
impl UpdateTableOutput {
    /// Creates a new builder-style object to manufacture [`UpdateTableOutput`](crate::output::UpdateTableOutput)
    pub fn builder() -> crate::output::update_table_output::Builder {
        crate::output::update_table_output::Builder::default()
    }
}
/// See [`UpdateTableOutput`](crate::output::UpdateTableOutput)
pub mod update_table_output {
    /// A builder for [`UpdateTableOutput`](crate::output::UpdateTableOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_description: std::option::Option<crate::model::TableDescription>,
    }
    impl Builder {
        pub fn table_description(mut self, inp: crate::model::TableDescription) -> Self {
            self.table_description = Some(inp);
            self
        }
        pub fn set_table_description(
            mut self,
            inp: std::option::Option<crate::model::TableDescription>,
        ) -> Self {
            self.table_description = inp;
            self
        }
        /// Consumes the builder and constructs a [`UpdateTableOutput`](crate::output::UpdateTableOutput)
        pub fn build(self) -> crate::output::UpdateTableOutput {
            crate::output::UpdateTableOutput {
                table_description: self.table_description,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct UpdateTimeToLiveOutput {
    #[serde(rename = "TimeToLiveSpecification")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_to_live_specification: std::option::Option<crate::model::TimeToLiveSpecification>,
}
impl UpdateTimeToLiveOutput {
    /// Creates a new builder-style object to manufacture [`UpdateTimeToLiveOutput`](crate::output::UpdateTimeToLiveOutput)
    pub fn builder() -> crate::output::update_time_to_live_output::Builder {
        crate::output::update_time_to_live_output::Builder::default()
    }
}
/// See [`UpdateTimeToLiveOutput`](crate::output::UpdateTimeToLiveOutput)
pub mod update_time_to_live_output {
    /// A builder for [`UpdateTimeToLiveOutput`](crate::output::UpdateTimeToLiveOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        time_to_live_specification: std::option::Option<crate::model::TimeToLiveSpecification>,
    }
    impl Builder {
        pub fn time_to_live_specification(
            mut self,
            inp: crate::model::TimeToLiveSpecification,
        ) -> Self {
            self.time_to_live_specification = Some(inp);
            self
        }
        pub fn set_time_to_live_specification(
            mut self,
            inp: std::option::Option<crate::model::TimeToLiveSpecification>,
        ) -> Self {
            self.time_to_live_specification = inp;
            self
        }
        /// Consumes the builder and constructs a [`UpdateTimeToLiveOutput`](crate::output::UpdateTimeToLiveOutput)
        pub fn build(self) -> crate::output::UpdateTimeToLiveOutput {
            crate::output::UpdateTimeToLiveOutput {
                time_to_live_specification: self.time_to_live_specification,
            }
        }
    }
}
