use async_trait::async_trait;
use serenity::model::id::UserId;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Barrier;
use wagerbot::error::{AccessError, LedgerError, Rejection, WagerError};
use wagerbot::ledger::memory::RevisionCheck;
use wagerbot::ledger::{Ledger, LedgerSnapshot, LedgerStore, MemoryLedgerStore, RevisionToken, WriteStatus};
use wagerbot::services::wager::{Adjustment, adjust, gift, place_wager, settle};
use wagerbot::services::{BalanceService, ConsistencyPolicy, SilentNotifier, WelcomeGrant};

const PLAYER: u64 = 42;
const OTHER: u64 = 77;
const OWNER: u64 = 1;

fn service(store: Arc<dyn LedgerStore>, policy: ConsistencyPolicy) -> BalanceService {
    BalanceService::new(store, Arc::new(SilentNotifier), policy, WelcomeGrant::default())
}

fn seeded(balance: i64) -> Ledger {
    let mut ledger = Ledger::new();
    ledger.apply_delta(UserId::new(PLAYER), balance);
    ledger
}

#[tokio::test]
async fn wager_then_payout_nets_multiplier_minus_one() {
    for (amount, multiplier) in [(1, 2), (250, 0), (400, 1), (1_000, 5), (999, 2)] {
        let store = Arc::new(MemoryLedgerStore::with_ledger(seeded(1_000), RevisionCheck::Enforce));
        let balances = service(store.clone(), ConsistencyPolicy::Serialized);
        let user = UserId::new(PLAYER);

        let wager = place_wager(&balances, user, amount).await.expect("valid wager");
        settle(&balances, &wager, multiplier).await;

        let expected = 1_000 + (multiplier - 1) * amount;
        assert_eq!(store.ledger().balance(user), Some(expected), "amount {amount} x{multiplier}");
    }
}

#[tokio::test]
async fn rejected_wagers_leave_the_ledger_untouched() {
    let store = Arc::new(MemoryLedgerStore::with_ledger(seeded(500), RevisionCheck::Enforce));
    let balances = service(store.clone(), ConsistencyPolicy::Serialized);
    let user = UserId::new(PLAYER);

    assert_eq!(place_wager(&balances, user, 0).await, Err(WagerError::NonPositive));
    assert_eq!(place_wager(&balances, user, -20).await, Err(WagerError::NonPositive));
    assert_eq!(
        place_wager(&balances, user, 501).await,
        Err(WagerError::Insufficient { amount: 501, balance: 500 })
    );
    assert_eq!(store.ledger().balance(user), Some(500));
    assert_eq!(store.version(), 0, "no write may happen on a rejected wager");
}

#[tokio::test]
async fn balances_never_go_negative() {
    let store = Arc::new(MemoryLedgerStore::with_ledger(seeded(100), RevisionCheck::Enforce));
    let balances = service(store.clone(), ConsistencyPolicy::Serialized);
    assert_eq!(balances.update_balance(UserId::new(PLAYER), -5_000).await, 0);
    assert_eq!(store.ledger().balance(UserId::new(PLAYER)), Some(0));
}

#[tokio::test]
async fn gift_checks_recipient_before_balance() {
    let store = Arc::new(MemoryLedgerStore::with_ledger(seeded(300), RevisionCheck::Enforce));
    let balances = service(store.clone(), ConsistencyPolicy::Serialized);
    let (giver, friend) = (UserId::new(PLAYER), UserId::new(OTHER));

    assert_eq!(gift(&balances, giver, giver, false, 10).await, Err(WagerError::SelfGift));
    // Self-gift wins even when the amount is also invalid.
    assert_eq!(gift(&balances, giver, giver, false, -1).await, Err(WagerError::SelfGift));
    assert_eq!(gift(&balances, giver, friend, true, 10).await, Err(WagerError::BotRecipient));
    assert_eq!(
        gift(&balances, giver, friend, false, 301).await,
        Err(WagerError::Insufficient { amount: 301, balance: 300 })
    );

    assert_eq!(gift(&balances, giver, friend, false, 120).await, Ok(180));
    let ledger = store.ledger();
    assert_eq!(ledger.balance(giver), Some(180));
    assert_eq!(ledger.balance(friend), Some(120));
}

#[tokio::test]
async fn only_the_owner_can_adjust_balances() {
    let store = Arc::new(MemoryLedgerStore::with_ledger(seeded(50), RevisionCheck::Enforce));
    let balances = service(store.clone(), ConsistencyPolicy::Serialized);
    let owner = UserId::new(OWNER);
    let target = UserId::new(PLAYER);

    let denied = adjust(&balances, owner, UserId::new(OTHER), target, 10, Adjustment::Add).await;
    assert_eq!(denied, Err(Rejection::Access(AccessError::NotOwner)));

    let zero = adjust(&balances, owner, UserId::new(OWNER), target, 0, Adjustment::Add).await;
    assert_eq!(zero, Err(Rejection::Wager(WagerError::NonPositive)));

    assert_eq!(adjust(&balances, owner, UserId::new(OWNER), target, 25, Adjustment::Add).await, Ok(75));
    assert_eq!(adjust(&balances, owner, UserId::new(OWNER), target, 500, Adjustment::Remove).await, Ok(0));
}

#[tokio::test(start_paused = true)]
async fn new_player_gets_the_grant_once_after_the_delay() {
    let store = Arc::new(MemoryLedgerStore::new());
    let balances = service(store.clone(), ConsistencyPolicy::Serialized);
    let user = UserId::new(PLAYER);

    let grant = balances.ensure_new_player(user).await.expect("first contact registers");
    assert_eq!(store.ledger().balance(user), Some(0));
    assert_eq!(balances.get_balance(user).await, 0);

    tokio::time::sleep(Duration::from_secs(59)).await;
    assert_eq!(store.ledger().balance(user), Some(0));

    assert_eq!(grant.await.expect("grant task"), 2_000);
    assert_eq!(balances.get_balance(user).await, 2_000);

    // Already known: no second registration and no second grant.
    assert!(balances.ensure_new_player(user).await.is_none());
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(store.ledger().balance(user), Some(2_000));
}

#[tokio::test(start_paused = true)]
async fn first_balance_read_registers_the_player() {
    let store = Arc::new(MemoryLedgerStore::new());
    let balances = service(store.clone(), ConsistencyPolicy::Serialized);
    let user = UserId::new(OTHER);

    assert_eq!(balances.get_balance(user).await, 0);
    assert!(store.ledger().contains(user));

    tokio::time::sleep(Duration::from_secs(61)).await;
    assert_eq!(balances.get_balance(user).await, 2_000);
}

/// Holds every read until two readers have arrived, so both cycles see the
/// same revision before either writes.
struct LockstepStore {
    inner: MemoryLedgerStore,
    barrier: Barrier,
}

#[async_trait]
impl LedgerStore for LockstepStore {
    async fn read(&self) -> Result<LedgerSnapshot, LedgerError> {
        let snapshot = self.inner.read().await?;
        self.barrier.wait().await;
        Ok(snapshot)
    }

    async fn write(
        &self,
        ledger: &Ledger,
        revision: Option<&RevisionToken>,
    ) -> Result<WriteStatus, LedgerError> {
        self.inner.write(ledger, revision).await
    }
}

#[tokio::test]
async fn unsynchronized_updates_can_lose_a_write() {
    let store = Arc::new(LockstepStore {
        inner: MemoryLedgerStore::with_ledger(seeded(1_000), RevisionCheck::Ignore),
        barrier: Barrier::new(2),
    });
    let balances = service(store.clone(), ConsistencyPolicy::Unsynchronized);
    let user = UserId::new(PLAYER);

    let (a, b) = tokio::join!(
        balances.update_balance(user, 10),
        balances.update_balance(user, 20)
    );
    assert_eq!((a, b), (1_010, 1_020));

    let final_balance = store.inner.ledger().balance(user);
    assert_ne!(final_balance, Some(1_030));
    assert!(matches!(final_balance, Some(1_010) | Some(1_020)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn serialized_updates_are_never_lost() {
    let store = Arc::new(MemoryLedgerStore::with_ledger(seeded(0), RevisionCheck::Enforce));
    let balances = service(store.clone(), ConsistencyPolicy::Serialized);
    let user = UserId::new(PLAYER);

    let tasks: Vec<_> = (0..50)
        .map(|i| {
            let balances = balances.clone();
            let other = UserId::new(1_000 + i);
            tokio::spawn(async move {
                balances.update_balance(user, 10).await;
                balances.update_balance(other, 1).await;
            })
        })
        .collect();
    for task in tasks {
        task.await.expect("update task");
    }

    let ledger = store.ledger();
    assert_eq!(ledger.balance(user), Some(500));
    assert_eq!(ledger.len(), 51);
    assert_eq!(store.version(), 100);
}

/// Yields before every read so overlapping cycles interleave on one thread.
struct YieldingStore(MemoryLedgerStore);

#[async_trait]
impl LedgerStore for YieldingStore {
    async fn read(&self) -> Result<LedgerSnapshot, LedgerError> {
        tokio::task::yield_now().await;
        self.0.read().await
    }

    async fn write(
        &self,
        ledger: &Ledger,
        revision: Option<&RevisionToken>,
    ) -> Result<WriteStatus, LedgerError> {
        self.0.write(ledger, revision).await
    }
}

#[tokio::test]
async fn serialized_wagers_cannot_spend_a_balance_twice() {
    let store = Arc::new(YieldingStore(MemoryLedgerStore::with_ledger(seeded(100), RevisionCheck::Enforce)));
    let balances = service(store.clone(), ConsistencyPolicy::Serialized);
    let user = UserId::new(PLAYER);

    let (a, b) = tokio::join!(place_wager(&balances, user, 100), place_wager(&balances, user, 100));
    let outcomes = [a, b];
    let placed: Vec<_> = outcomes.iter().filter_map(|r| r.as_ref().ok()).collect();
    assert_eq!(placed.len(), 1, "only one stake fits a 100 bankroll: {outcomes:?}");
    assert!(outcomes.contains(&Err(WagerError::Insufficient { amount: 100, balance: 0 })));

    settle(&balances, placed[0], 2).await;
    assert_eq!(store.0.ledger().balance(user), Some(200));
}

#[tokio::test]
async fn serialized_gift_and_wager_cannot_share_a_balance() {
    let store = Arc::new(YieldingStore(MemoryLedgerStore::with_ledger(seeded(100), RevisionCheck::Enforce)));
    let balances = service(store.clone(), ConsistencyPolicy::Serialized);
    let (giver, friend) = (UserId::new(PLAYER), UserId::new(OTHER));

    let (sent, staked) = tokio::join!(
        gift(&balances, giver, friend, false, 100),
        place_wager(&balances, giver, 100)
    );
    assert!(sent.is_ok() != staked.is_ok(), "gift {sent:?}, wager {staked:?}");

    let ledger = store.0.ledger();
    assert_eq!(ledger.balance(giver), Some(0));
    let friend_balance = if sent.is_ok() { Some(100) } else { Some(0) };
    assert_eq!(ledger.balance(friend).or(Some(0)), friend_balance);
}
