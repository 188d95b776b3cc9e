// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::Result;
use clap::{Parser, Subcommand};
use contracts_search::models::statistics::Statistics;
use contracts_search::services::config::ClientConfig;
use contracts_search::services::logging::init_tracing;
use contracts_search::services::page::{load_contract_page, load_search_page};
use contracts_search::services::params::{
    QueryParams, PAGE_KEY, QUERY_KEY, SORT_DIRECTION_KEY, SORT_FIELD_KEY,
};
use contracts_search::services::search::SearchClient;
use contracts_search::services::statistics::{StatisticsCache, StatisticsClient};
use contracts_search::services::transport::{HttpTransport, ReqwestTransport};
use contracts_search::VERSION;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "contracts-search", version = VERSION, about = "Search public procurement contracts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search contracts. Values are validated like URL parameters: anything
    /// invalid falls back to its default.
    Search {
        #[arg(long)]
        query: Option<String>,
        /// id, publicationDate, signingDate or price
        #[arg(long)]
        sort_field: Option<String>,
        /// ascending or descending
        #[arg(long)]
        sort_direction: Option<String>,
        #[arg(long)]
        page: Option<String>,
        /// Filter such as minPrice=100000 or contracting=Lisboa (repeatable)
        #[arg(long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,
    },
    /// Search with a raw URL query string, e.g. "query=obras&page=2"
    UrlSearch { query_string: String },
    /// Show a single contract
    Contract { id: String },
    /// Show rolling spend statistics
    Statistics,
}

struct Clients {
    search: SearchClient,
    statistics: StatisticsClient,
    cache: StatisticsCache,
}

impl Clients {
    fn new(config: ClientConfig) -> Result<Self> {
        let cache = StatisticsCache::new(config.statistics_ttl);
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(config)?);

        Ok(Self {
            search: SearchClient::new(transport.clone()),
            statistics: StatisticsClient::new(transport),
            cache,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = ClientConfig::from_env()?;
    info!(
        backend = %config.backend_url,
        api_prefix = %config.api_prefix,
        "contracts-search v{}",
        VERSION
    );

    let clients = Clients::new(config)?;

    // Ctrl-C aborts an in-flight search instead of killing the process mid-write
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    match cli.command {
        Command::Search {
            query,
            sort_field,
            sort_direction,
            page,
            filters,
        } => {
            let params = search_params(query, sort_field, sort_direction, page, filters);
            let page = load_search_page(
                &params,
                &clients.search,
                &clients.statistics,
                &clients.cache,
                Some(&cancel),
            )
            .await;
            print_json(&page)?;
        }
        Command::UrlSearch { query_string } => {
            let params = QueryParams::parse(&query_string);
            let page = load_search_page(
                &params,
                &clients.search,
                &clients.statistics,
                &clients.cache,
                Some(&cancel),
            )
            .await;
            print_json(&page)?;
        }
        Command::Contract { id } => {
            let page = load_contract_page(&id, &clients.search).await;
            print_json(&page)?;
        }
        Command::Statistics => {
            let statistics: Statistics = clients.statistics.fetch_cached(&clients.cache).await;
            print_json(&statistics)?;
        }
    }

    Ok(())
}

/// Collect the flag values into the same flat parameter bag a URL would give
fn search_params(
    query: Option<String>,
    sort_field: Option<String>,
    sort_direction: Option<String>,
    page: Option<String>,
    filters: Vec<String>,
) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();

    let named = [
        (QUERY_KEY, query),
        (SORT_FIELD_KEY, sort_field),
        (SORT_DIRECTION_KEY, sort_direction),
        (PAGE_KEY, page),
    ];
    for (key, value) in named {
        if let Some(value) = value {
            params.insert(key.to_string(), value);
        }
    }

    for filter in filters {
        match filter.split_once('=') {
            Some((key, value)) => {
                params.insert(key.to_string(), value.to_string());
            }
            None => warn!(filter = %filter, "Ignoring filter without '='"),
        }
    }

    params
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
