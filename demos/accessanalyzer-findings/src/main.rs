/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::process;

use accessanalyzer::model::{Criterion, FindingStatus, OrderBy, SortCriteria, Type};
use accessanalyzer::{Client, Region, SdkError};
use structopt::StructOpt;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
struct Opt {
    /// The region. Falls back to `AWS_REGION` when unset
    #[structopt(short, long)]
    region: Option<String>,

    /// Only list analyzers of this type (ACCOUNT or ORGANIZATION)
    #[structopt(short = "t", long = "type")]
    analyzer_type: Option<String>,

    /// Include archived findings as well as active ones
    #[structopt(short, long)]
    archived: bool,

    /// Activate verbose mode
    #[structopt(short, long)]
    verbose: bool,
}

async fn analyzer_arns(
    client: &Client,
    analyzer_type: Option<Type>,
) -> Result<Vec<(String, String)>, SdkError<accessanalyzer::error::ListAnalyzersError>> {
    let mut arns = vec![];
    let mut next_token = None;
    loop {
        let page = client
            .list_analyzers()
            .set_type(analyzer_type.clone())
            .set_next_token(next_token)
            .send()
            .await?;
        for analyzer in page.analyzers.unwrap_or_default() {
            if let (Some(name), Some(arn)) = (analyzer.name, analyzer.arn) {
                arns.push((name, arn));
            }
        }
        next_token = page.next_token;
        if next_token.is_none() {
            return Ok(arns);
        }
    }
}

#[tokio::main]
async fn main() {
    let opt = Opt::from_args();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if opt.verbose { "debug" } else { "info" })
    });
    SubscriberBuilder::default().with_env_filter(filter).init();

    if opt.verbose {
        println!(
            "Access Analyzer client version: {}\n",
            accessanalyzer::PKG_VERSION
        );
    }

    let mut config = accessanalyzer::Config::builder();
    if let Some(region) = &opt.region {
        config = config.region(Region::new(region.clone()));
    }
    let client = Client::from_conf(config.build());

    let analyzer_type = opt.analyzer_type.as_deref().map(Type::from);
    let analyzers = match analyzer_arns(&client, analyzer_type).await {
        Ok(analyzers) => analyzers,
        Err(e) => {
            println!("Got an error listing analyzers:");
            println!("{}", e);
            process::exit(1);
        }
    };
    if analyzers.is_empty() {
        println!("No analyzers found");
        return;
    }

    let mut statuses = Criterion::builder().eq(FindingStatus::Active.as_str());
    if opt.archived {
        statuses = statuses.eq(FindingStatus::Archived.as_str());
    }
    let statuses = statuses.build();

    for (name, arn) in analyzers {
        println!("Analyzer {}", name);
        let mut next_token = None;
        loop {
            let page = match client
                .list_findings()
                .analyzer_arn(&arn)
                .filter("status", statuses.clone())
                .sort(
                    SortCriteria::builder()
                        .attribute_name("UpdatedAt")
                        .order_by(OrderBy::Desc)
                        .build(),
                )
                .set_next_token(next_token)
                .send()
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    println!("Got an error listing findings for {}:", name);
                    println!("{}", e);
                    process::exit(1);
                }
            };
            for finding in page.findings.unwrap_or_default() {
                println!(
                    "  {} {} {} public={}",
                    finding.id.unwrap_or_default(),
                    finding
                        .resource_type
                        .as_ref()
                        .map(|t| t.as_str())
                        .unwrap_or("-"),
                    finding.resource.unwrap_or_default(),
                    finding.is_public.unwrap_or_default()
                );
            }
            next_token = page.next_token;
            if next_token.is_none() {
                break;
            }
        }
    }
}
