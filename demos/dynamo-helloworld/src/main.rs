/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::process;
use std::time::Duration;

use dynamodb::model::AttributeValue;
use dynamodb::{Endpoint, Region};
use dynamodb_test_utils::{TableFixture, WaitConfig};
use http::Uri;
use structopt::StructOpt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
struct Opt {
    /// The region. Falls back to `AWS_REGION` when unset
    #[structopt(short, long)]
    region: Option<String>,

    /// The table name
    #[structopt(short, long, default_value = "helloworld")]
    table: String,

    /// The name of the hash key attribute
    #[structopt(short, long, default_value = "id")]
    key: String,

    /// Send requests to this endpoint instead, eg. `http://localhost:8000` for DynamoDB Local
    #[structopt(short, long)]
    endpoint: Option<String>,

    /// Delete the table before exiting
    #[structopt(long)]
    cleanup: bool,

    /// Activate verbose mode
    #[structopt(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let opt = Opt::from_args();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if opt.verbose { "debug" } else { "info" })
    });
    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    if opt.verbose {
        println!("DynamoDB client version: {}\n", dynamodb::PKG_VERSION);
        println!("Table: {}", opt.table);
        println!("Key:   {}\n", opt.key);
    }

    let mut config = dynamodb::Config::builder();
    if let Some(region) = &opt.region {
        config = config.region(Region::new(region.clone()));
    }
    if let Some(endpoint) = &opt.endpoint {
        let uri = match endpoint.parse::<Uri>() {
            Ok(uri) => uri,
            Err(e) => {
                println!("Invalid endpoint {}: {}", endpoint, e);
                process::exit(1);
            }
        };
        config = config.endpoint_resolver(Endpoint::immutable(uri));
    }
    let client = dynamodb::Client::from_conf(config.build());

    let fixture = TableFixture::new(&opt.table, &opt.key);
    let wait = WaitConfig::new(60, Duration::from_secs(1));
    if let Err(e) = fixture.ensure(&client, &wait).await {
        println!("Got an error creating table {}:", opt.table);
        println!("{:?}", e);
        process::exit(1);
    }

    let key = AttributeValue::S("hello".to_string());
    if let Err(e) = client
        .put_item()
        .table_name(&opt.table)
        .item(&opt.key, key.clone())
        .item("greeting", AttributeValue::S("world".to_string()))
        .item("visits", AttributeValue::N("1".to_string()))
        .send()
        .await
    {
        println!("Got an error adding the item:");
        println!("{:?}", e);
        process::exit(1);
    }

    match client
        .get_item()
        .table_name(&opt.table)
        .key(&opt.key, key)
        .consistent_read(true)
        .send()
        .await
    {
        Ok(resp) => match resp.item {
            Some(item) => println!("Read back item: {:#?}", item),
            None => println!("The item was not found"),
        },
        Err(e) => {
            println!("Got an error reading the item:");
            println!("{:?}", e);
            process::exit(1);
        }
    }

    match client.list_tables().send().await {
        Ok(resp) => println!("Tables: {:?}", resp.table_names.unwrap_or_default()),
        Err(e) => println!("Got an error listing tables: {:?}", e),
    }

    if opt.cleanup {
        if let Err(e) = fixture.teardown(&client, &wait).await {
            println!("Got an error deleting table {}: {:?}", opt.table, e);
            process::exit(1);
        }
        println!("Deleted table {}", opt.table);
    }
}
