use actor_framework::{ActorEntity, EntityStore, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Bin {
    id: u32,
    label: String,
    units: u32,
}

#[derive(Debug)]
struct BinCreate {
    label: String,
    units: u32,
}

#[derive(Debug)]
struct BinUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum BinAction {
    Take(u32),
}

#[derive(Debug)]
enum BinStoreAction {
    /// Take from several bins, all or nothing.
    TakeAll(Vec<(u32, u32)>),
    FirstNonEmpty,
    /// Top up the bin with this label, or open a new one.
    Fill(String, u32),
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum BinError {
    #[error("bin {0} is short")]
    Short(u32),
    #[error("bin {0} missing")]
    Missing(u32),
}

#[async_trait]
impl ActorEntity for Bin {
    type Id = u32;
    type Create = BinCreate;
    type Update = BinUpdate;
    type Action = BinAction;
    type ActionResult = u32;
    type StoreAction = BinStoreAction;
    type StoreActionResult = Option<u32>;
    type Context = ();
    type Error = BinError;

    fn from_create_params(id: u32, params: BinCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            label: params.label,
            units: params.units,
        })
    }

    async fn on_update(&mut self, update: BinUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            self.label = label;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: BinAction, _ctx: &()) -> Result<u32, Self::Error> {
        match action {
            BinAction::Take(n) if n <= self.units => {
                self.units -= n;
                Ok(self.units)
            }
            BinAction::Take(_) => Err(BinError::Short(self.id)),
        }
    }

    async fn handle_store_action(
        store: &mut EntityStore<Self>,
        action: BinStoreAction,
        _ctx: &(),
    ) -> Result<Option<u32>, Self::Error> {
        match action {
            BinStoreAction::TakeAll(takes) => {
                for (id, n) in &takes {
                    let bin = store.get(id).ok_or(BinError::Missing(*id))?;
                    if bin.units < *n {
                        return Err(BinError::Short(*id));
                    }
                }
                for (id, n) in takes {
                    if let Some(bin) = store.get_mut(&id) {
                        bin.units -= n;
                    }
                }
                Ok(None)
            }
            BinStoreAction::FirstNonEmpty => Ok(store
                .values()
                .find(|bin| bin.units > 0)
                .map(|bin| bin.id)),
            BinStoreAction::Fill(label, units) => {
                if let Some((_, bin)) = store.iter_mut().find(|(_, bin)| bin.label == label) {
                    bin.units += units;
                    return Ok(Some(bin.id));
                }
                store
                    .insert_new(|id| Ok(Bin { id, label, units }))
                    .map(Some)
            }
        }
    }
}

async fn units(client: &actor_framework::ResourceClient<Bin>, id: u32) -> u32 {
    client.get(id).await.unwrap().unwrap().units
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    let id = client
        .create(BinCreate {
            label: "flour".into(),
            units: 5,
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    let left = client.perform_action(id, BinAction::Take(2)).await.unwrap();
    assert_eq!(left, 3);

    let err = client
        .perform_action(id, BinAction::Take(9))
        .await
        .unwrap_err();
    assert_eq!(err.downcast_entity::<BinError>().unwrap(), BinError::Short(1));
    assert_eq!(units(&client, id).await, 3);

    let updated = client
        .update(
            id,
            BinUpdate {
                label: Some("rye".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "rye");

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert!(matches!(
        client.delete(id).await,
        Err(FrameworkError::NotFound(missing)) if missing == "1"
    ));
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    for label in ["a", "b", "c"] {
        client
            .create(BinCreate {
                label: label.into(),
                units: 0,
            })
            .await
            .unwrap();
    }
    let ids: Vec<u32> = client.list().await.unwrap().iter().map(|b: &Bin| b.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_store_action_is_all_or_nothing() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    let a = client
        .create(BinCreate {
            label: "a".into(),
            units: 10,
        })
        .await
        .unwrap();
    let b = client
        .create(BinCreate {
            label: "b".into(),
            units: 1,
        })
        .await
        .unwrap();

    let err = client
        .perform_store_action(BinStoreAction::TakeAll(vec![(a, 4), (b, 2)]))
        .await
        .unwrap_err();
    assert_eq!(err.downcast_entity::<BinError>().unwrap(), BinError::Short(b));
    assert_eq!(units(&client, a).await, 10);
    assert_eq!(units(&client, b).await, 1);

    client
        .perform_store_action(BinStoreAction::TakeAll(vec![(a, 4), (b, 1)]))
        .await
        .unwrap();
    assert_eq!(units(&client, a).await, 6);
    assert_eq!(units(&client, b).await, 0);

    let first = client
        .perform_store_action(BinStoreAction::FirstNonEmpty)
        .await
        .unwrap();
    assert_eq!(first, Some(a));
}

#[tokio::test]
async fn test_store_action_inserts_share_the_id_sequence() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    let a = client
        .create(BinCreate {
            label: "flour".into(),
            units: 1,
        })
        .await
        .unwrap();
    let topped = client
        .perform_store_action(BinStoreAction::Fill("flour".into(), 2))
        .await
        .unwrap();
    assert_eq!(topped, Some(a));
    assert_eq!(units(&client, a).await, 3);

    let opened = client
        .perform_store_action(BinStoreAction::Fill("rice".into(), 4))
        .await
        .unwrap();
    assert_eq!(opened, Some(2));

    let next = client
        .create(BinCreate {
            label: "oats".into(),
            units: 0,
        })
        .await
        .unwrap();
    assert_eq!(next, 3);
}

#[tokio::test]
async fn test_concurrent_store_actions_never_oversell() {
    let (actor, client) = ResourceActor::new(64);
    tokio::spawn(actor.run(()));

    let id = client
        .create(BinCreate {
            label: "eggs".into(),
            units: 7,
        })
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .perform_store_action(BinStoreAction::TakeAll(vec![(id, 1)]))
                .await
        }));
    }

    let mut ok = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            ok += 1;
        }
    }
    assert_eq!(ok, 7);
    assert_eq!(units(&client, id).await, 0);
}

#[tokio::test]
async fn test_client_fails_after_actor_stops() {
    let (actor, client) = ResourceActor::<Bin>::new(1);
    drop(actor);
    assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
}
