// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use contracts_search::models::statistics::Statistics;
use contracts_search::services::config::ClientConfig;
use contracts_search::services::error::{ClientError, INVALID_RESPONSE_MESSAGE};
use contracts_search::services::page::{load_contract_page, load_search_page};
use contracts_search::services::params::QueryParams;
use contracts_search::services::search::SearchClient;
use contracts_search::services::statistics::{StatisticsCache, StatisticsClient};
use contracts_search::services::transport::{HttpTransport, ReqwestTransport};
use contracts_search::models::search::SearchRequest;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

// End-to-end tests against an in-process fake backend speaking the real wire
// format over HTTP. No external services needed.

async fn search_handler(Json(body): Json<Value>) -> Response {
    let query = body["query"].as_str().unwrap_or_default().to_string();
    match query.as_str() {
        "missing" => (StatusCode::NOT_FOUND, Json(json!({"message": "not found"}))).into_response(),
        "garbage" => (StatusCode::OK, "this is not json").into_response(),
        "crash" => (StatusCode::INTERNAL_SERVER_ERROR, "<h1>500</h1>").into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({})).into_response()
        }
        _ => {
            let page = body["page"].as_u64().unwrap_or(1);
            Json(json!({
                "contracts": [{
                    "id": 4242,
                    "publicationDate": "2024-02-29",
                    "objectBriefDescription": format!("Contrato de {}", query),
                    "contracted": [{"id": 1, "nif": "500100200", "description": "Obras SA"}],
                    "matchingRanges": {
                        "objectBriefDescription": [{"start": 12, "end": 12 + query.len()}]
                    },
                    // Echo the request so tests can check what crossed the wire
                    "observations": body.to_string()
                }],
                "total": 1,
                "page": page,
                "totalPages": 1,
                "elapsedMillis": 2,
                "hitsPerPage": 20
            }))
            .into_response()
        }
    }
}

async fn statistics_handler() -> Json<Value> {
    Json(json!({
        "totalSpentLast365Days": 123456789,
        "contractsLast365Days": 321,
        "totalSpentLast30Days": 45678,
        "contractsLast30Days": 21,
        "totalSpentLast7Days": 999,
        "contractsLast7Days": 3
    }))
}

async fn slow_statistics_handler() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    statistics_handler().await
}

async fn contract_handler(Path(id): Path<u64>) -> Response {
    if id == 404 {
        return (StatusCode::NOT_FOUND, Json(json!({"message": "Contract not found"}))).into_response();
    }
    Json(json!({
        "id": id,
        "publicationDate": "2023-11-20",
        "signingDate": null,
        "ccp": true,
        "initialContractualPrice": 1999900,
        "cpv": {"code": "45000000-7", "designation": "Obras de construção"}
    }))
    .into_response()
}

async fn start_backend(slow_statistics: bool) -> SocketAddr {
    let statistics_route = if slow_statistics {
        get(slow_statistics_handler)
    } else {
        get(statistics_handler)
    };

    let app = Router::new()
        .route("/api/search", post(search_handler))
        .route("/api/statistics", statistics_route)
        .route("/api/contract/{id}", get(contract_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

struct Clients {
    search: SearchClient,
    statistics: StatisticsClient,
    cache: StatisticsCache,
}

fn clients_for(addr: SocketAddr) -> Clients {
    let mut config = ClientConfig::new(url::Url::parse(&format!("http://{}", addr)).unwrap());
    config.request_timeout = Duration::from_secs(1);

    let cache = StatisticsCache::new(config.statistics_ttl);
    let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(config).unwrap());
    Clients {
        search: SearchClient::new(transport.clone()),
        statistics: StatisticsClient::new(transport),
        cache,
    }
}

#[tokio::test]
async fn test_search_round_trip() {
    let clients = clients_for(start_backend(false).await);
    let params = QueryParams::parse("query=obras&sortField=price&sortDirection=ascending&page=3&minId=10&minPrice=abc");

    let page = load_search_page(
        &params,
        &clients.search,
        &clients.statistics,
        &clients.cache,
        None,
    )
    .await;

    assert!(page.error.is_none(), "unexpected error: {:?}", page.error);
    assert_eq!(page.search_response.page, 3);
    assert_eq!(page.statistics.contracts_last_365_days, 321);

    let hit = &page.search_response.contracts[0];
    assert_eq!(hit.contract.id, 4242);
    assert_eq!(hit.contract.contracted[0].description, "Obras SA");
    assert_eq!(hit.ranges_for("objectBriefDescription")[0].end, 17);

    let sent: Value = serde_json::from_str(hit.contract.observations.as_deref().unwrap()).unwrap();
    assert_eq!(
        sent,
        json!({
            "query": "obras",
            "sort": {"field": "price", "direction": "ascending"},
            "filters": {"minId": 10},
            "page": 3
        })
    );
}

#[tokio::test]
async fn test_error_message_from_backend() {
    let clients = clients_for(start_backend(false).await);

    let error = clients
        .search
        .search(&SearchRequest::new("missing"), None)
        .await
        .unwrap_err();

    assert_eq!(
        error,
        ClientError::Transport {
            message: "not found".to_string(),
            status: Some(404)
        }
    );
}

#[tokio::test]
async fn test_non_json_bodies() {
    let clients = clients_for(start_backend(false).await);

    let garbage = clients
        .search
        .search(&SearchRequest::new("garbage"), None)
        .await
        .unwrap_err();
    assert_eq!(garbage.to_string(), INVALID_RESPONSE_MESSAGE);

    let crash = clients
        .search
        .search(&SearchRequest::new("crash"), None)
        .await
        .unwrap_err();
    assert_eq!(crash.to_string(), "Unknown error");
    assert_eq!(crash.status(), Some(500));
}

#[tokio::test]
async fn test_cancel_in_flight_search() {
    let clients = clients_for(start_backend(false).await);
    let token = CancellationToken::new();
    let canceller = {
        let token = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            token.cancel();
        })
    };

    let result = clients
        .search
        .search(&SearchRequest::new("slow"), Some(&token))
        .await;
    canceller.await.unwrap();

    assert_eq!(result.unwrap_err(), ClientError::Cancelled);
}

#[tokio::test]
async fn test_timeout_surfaces_as_transport_error() {
    let clients = clients_for(start_backend(false).await);

    let error = clients
        .search
        .search(&SearchRequest::new("slow"), None)
        .await
        .unwrap_err();

    assert!(!error.is_cancelled());
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn test_hung_statistics_do_not_block_page() {
    let clients = clients_for(start_backend(true).await);

    let page = tokio::time::timeout(
        Duration::from_secs(4),
        load_search_page(
            &QueryParams::parse("query=energia"),
            &clients.search,
            &clients.statistics,
            &clients.cache,
            None,
        ),
    )
    .await
    .expect("page load should finish once the request timeout fires");

    assert!(page.error.is_none());
    assert_eq!(page.search_response.total, 1);
    assert_eq!(page.statistics, Statistics::default());
}

#[tokio::test]
async fn test_statistics_cached_between_calls() {
    let clients = clients_for(start_backend(false).await);

    let first = clients.statistics.fetch_cached(&clients.cache).await;
    let second = clients.statistics.fetch_cached(&clients.cache).await;

    assert_eq!(first.total_spent_last_365_days, 123456789);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_contract_lookup() {
    let clients = clients_for(start_backend(false).await);

    let found = load_contract_page("77", &clients.search).await;
    let contract = found.contract.expect("contract should load");
    assert_eq!(contract.id, 77);
    assert_eq!(contract.initial_contractual_price.cents(), 1999900);
    assert_eq!(contract.cpv.code, "45000000-7");
    assert!(contract.signing_date.is_none());

    let missing = load_contract_page("404", &clients.search).await;
    assert!(missing.contract.is_none());
    assert_eq!(missing.error.as_deref(), Some("Contract not found"));

    let invalid = load_contract_page("not-an-id", &clients.search).await;
    assert!(invalid.contract.is_none());
    assert!(invalid.error.is_none());
}
