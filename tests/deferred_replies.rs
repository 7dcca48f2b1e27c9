//! Slash commands acknowledge first and answer through the deferred response,
//! checked against a local stand-in for the Discord HTTP API.
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use serenity::http::{Http, HttpBuilder};
use serenity::model::application::CommandInteraction;
use serenity::model::id::{ApplicationId, UserId};
use std::sync::{Arc, Mutex};
use wagerbot::error::WagerError;
use wagerbot::interactions::util::deferred_reply;
use wagerbot::ledger::memory::RevisionCheck;
use wagerbot::ledger::{Ledger, MemoryLedgerStore};
use wagerbot::services::wager::place_wager;
use wagerbot::services::{BalanceService, ConsistencyPolicy, SilentNotifier, WelcomeGrant};

const PLAYER: u64 = 42;

#[derive(Debug, Clone)]
struct Call {
    method: Method,
    path: String,
    body: Value,
}

type Calls = Arc<Mutex<Vec<Call>>>;

async fn record(State(calls): State<Calls>, method: Method, uri: Uri, body: Bytes) -> Response {
    let path = uri.path().to_string();
    let no_content = path.ends_with("/callback") || method == Method::DELETE;
    calls.lock().unwrap().push(Call {
        method,
        path,
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });
    if no_content {
        StatusCode::NO_CONTENT.into_response()
    } else {
        axum::Json(json!({})).into_response()
    }
}

async fn discord_stand_in() -> (Http, Calls) {
    let calls = Calls::default();
    let app = Router::new().fallback(record).with_state(calls.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let http = HttpBuilder::new("test-token")
        .proxy(format!("http://{addr}"))
        .ratelimiter_disabled(true)
        .application_id(ApplicationId::new(200))
        .build();
    (http, calls)
}

fn slash_command(name: &str) -> CommandInteraction {
    serde_json::from_value(json!({
        "id": "100",
        "application_id": "200",
        "type": 2,
        "data": { "id": "300", "name": name, "type": 1 },
        "channel_id": "400",
        "user": { "id": PLAYER.to_string(), "username": "player", "avatar": null },
        "token": "tok",
        "version": 1,
        "app_permissions": "0",
        "locale": "en-US",
        "entitlements": [],
        "attachment_size_limit": 8388608
    }))
    .unwrap()
}

fn calls_so_far(calls: &Calls) -> Vec<Call> {
    calls.lock().unwrap().clone()
}

#[tokio::test]
async fn command_work_starts_after_the_acknowledgement() {
    let (http, calls) = discord_stand_in().await;
    let interaction = slash_command("bal");

    deferred_reply(&http, &interaction, "bal", async {
        let seen = calls_so_far(&calls);
        assert_eq!(seen.len(), 1, "only the defer may precede the work: {seen:?}");
        assert!(seen[0].path.ends_with("/interactions/100/tok/callback"));
        Ok("💰 **player**, your balance is **100** coins.".to_string())
    })
    .await;

    let seen = calls_so_far(&calls);
    assert_eq!(seen.len(), 2, "{seen:?}");
    assert_eq!(seen[0].method, Method::POST);
    assert_eq!(seen[0].body["type"], json!(5));
    assert_ne!(seen[0].body["data"]["flags"], json!(64), "the deferred answer is public");

    assert_eq!(seen[1].method, Method::PATCH);
    assert!(seen[1].path.ends_with("/webhooks/200/tok/messages/@original"));
    assert_eq!(
        seen[1].body["content"],
        json!("💰 **player**, your balance is **100** coins.")
    );
}

#[tokio::test]
async fn rejected_wager_is_answered_to_the_caller_only() {
    let (http, calls) = discord_stand_in().await;
    let interaction = slash_command("coinflip");

    let mut ledger = Ledger::new();
    ledger.apply_delta(UserId::new(PLAYER), 100);
    let store = Arc::new(MemoryLedgerStore::with_ledger(ledger, RevisionCheck::Enforce));
    let balances = BalanceService::new(
        store.clone(),
        Arc::new(SilentNotifier),
        ConsistencyPolicy::Serialized,
        WelcomeGrant::default(),
    );

    deferred_reply(&http, &interaction, "coinflip", async {
        place_wager(&balances, UserId::new(PLAYER), 500)
            .await
            .map(|_| "placed".to_string())
            .map_err(|e| e.to_string())
    })
    .await;

    let seen = calls_so_far(&calls);
    assert_eq!(seen.len(), 3, "{seen:?}");
    assert!(seen[0].path.ends_with("/callback"));
    // The public "thinking" placeholder is removed before the private answer.
    assert_eq!(seen[1].method, Method::DELETE);
    assert!(seen[1].path.ends_with("/messages/@original"));
    assert_eq!(seen[2].method, Method::POST);
    assert!(seen[2].path.ends_with("/webhooks/200/tok"));
    assert_eq!(seen[2].body["flags"], json!(64));
    assert_eq!(
        seen[2].body["content"],
        json!(WagerError::Insufficient { amount: 500, balance: 100 }.to_string())
    );

    assert_eq!(store.ledger().balance(UserId::new(PLAYER)), Some(100));
    assert_eq!(store.version(), 0);
}
