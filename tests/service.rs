//! Resource-service behavior against the in-memory stores.

use airport_registry::{
    mapper, AirportRepresentation, AirportService, AppError, LinkBuilder, MemoryAirportStore,
    MemoryTerminalStore, Terminal, TerminalStore,
};
use std::sync::Arc;

const BASE: &str = "http://api.test";

fn repr(code: &str, terminal_id: Option<i64>) -> AirportRepresentation {
    AirportRepresentation {
        code: code.into(),
        name: format!("{code} International"),
        city: "Testville".into(),
        country: "Testland".into(),
        terminal_id,
    }
}

fn terminal(id: i64) -> Terminal {
    Terminal {
        id,
        name: format!("Terminal {id}"),
    }
}

async fn service_with(terminals: &[Terminal]) -> AirportService {
    let airports = Arc::new(MemoryAirportStore::new());
    let terminal_store = Arc::new(MemoryTerminalStore::new());
    for t in terminals {
        terminal_store.save(t.clone()).await.unwrap();
    }
    AirportService::new(airports, terminal_store, LinkBuilder::new(BASE))
}

fn assert_not_found(err: AppError, resource: &str, id: &str) {
    match err {
        AppError::NotFound {
            resource: r,
            id: i,
        } => {
            assert_eq!(r, resource);
            assert_eq!(i, id);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn get_of_absent_code_is_not_found() {
    let service = service_with(&[]).await;
    let err = service.get("LHR").await.unwrap_err();
    assert_not_found(err, "airport", "LHR");
}

#[tokio::test]
async fn create_then_get_preserves_all_fields() {
    let service = service_with(&[terminal(1)]).await;
    let r = repr("JFK", Some(1));
    service.create(&r).await.unwrap();

    let fetched = service.get("JFK").await.unwrap();
    assert_eq!(fetched.data, r);
    assert_eq!(fetched.link("self"), Some("http://api.test/airports/JFK"));
    assert_eq!(fetched.link("airports"), Some("http://api.test/airports"));
}

#[tokio::test]
async fn create_returns_only_a_self_link() {
    let service = service_with(&[]).await;
    let created = service.create(&repr("JFK", None)).await.unwrap();
    assert_eq!(created.links.len(), 1);
    assert_eq!(created.link("self"), Some("http://api.test/airports/JFK"));
}

// Pins the create/update asymmetry: create saves a dangling terminal
// reference without complaint, only update validates it.
#[tokio::test]
async fn create_does_not_validate_the_terminal_reference() {
    let service = service_with(&[]).await;
    let created = service.create(&repr("JFK", Some(999))).await.unwrap();
    assert_eq!(created.data.terminal_id, Some(999));
    assert_eq!(service.get("JFK").await.unwrap().data.terminal_id, Some(999));
}

#[tokio::test]
async fn create_with_the_same_code_overwrites() {
    let service = service_with(&[]).await;
    service.create(&repr("JFK", None)).await.unwrap();
    let mut renamed = repr("JFK", None);
    renamed.name = "Idlewild".into();
    service.create(&renamed).await.unwrap();

    let fetched = service.get("JFK").await.unwrap();
    assert_eq!(fetched.data.name, "Idlewild");
    assert_eq!(service.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_rejects_an_empty_code() {
    let service = service_with(&[]).await;
    let err = service.create(&repr("", None)).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[tokio::test]
async fn update_reassigns_the_terminal_and_nothing_else() {
    let service = service_with(&[terminal(1), terminal(2)]).await;
    service.create(&repr("JFK", Some(1))).await.unwrap();

    let mut incoming = repr("JFK", Some(2));
    incoming.name = "Should Not Apply".into();
    let updated = service.update("JFK", &incoming).await.unwrap();
    assert_eq!(updated.data.terminal_id, Some(2));
    assert_eq!(updated.links.len(), 1);
    assert_eq!(updated.link("self"), Some("http://api.test/airports/JFK"));

    let fetched = service.get("JFK").await.unwrap();
    assert_eq!(fetched.data.terminal_id, Some(2));
    assert_eq!(fetched.data.name, "JFK International");
}

#[tokio::test]
async fn update_with_dangling_terminal_fails_and_writes_nothing() {
    let service = service_with(&[terminal(1)]).await;
    service.create(&repr("JFK", Some(1))).await.unwrap();

    let err = service.update("JFK", &repr("JFK", Some(999))).await.unwrap_err();
    assert_not_found(err, "terminal", "999");
    assert_eq!(service.get("JFK").await.unwrap().data.terminal_id, Some(1));
}

// Airport existence is reported before terminal existence.
#[tokio::test]
async fn update_of_absent_airport_wins_over_absent_terminal() {
    let service = service_with(&[]).await;
    let err = service.update("LHR", &repr("LHR", Some(999))).await.unwrap_err();
    assert_not_found(err, "airport", "LHR");
}

#[tokio::test]
async fn update_without_a_terminal_id_is_rejected_before_writing() {
    let service = service_with(&[terminal(1)]).await;
    service.create(&repr("JFK", Some(1))).await.unwrap();

    let err = service.update("JFK", &repr("JFK", None)).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(service.get("JFK").await.unwrap().data.terminal_id, Some(1));
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let service = service_with(&[]).await;
    service.create(&repr("JFK", None)).await.unwrap();
    service.delete("JFK").await.unwrap();
    let err = service.get("JFK").await.unwrap_err();
    assert_not_found(err, "airport", "JFK");
}

#[tokio::test]
async fn delete_of_absent_code_is_an_error_not_a_noop() {
    let service = service_with(&[]).await;
    let err = service.delete("JFK").await.unwrap_err();
    assert_not_found(err, "airport", "JFK");
}

#[tokio::test]
async fn list_links_every_item_to_itself_and_the_collection() {
    let service = service_with(&[]).await;
    service.create(&repr("JFK", None)).await.unwrap();
    service.create(&repr("LHR", None)).await.unwrap();

    let all = service.list().await.unwrap();
    assert_eq!(all.len(), 2);
    for item in &all {
        let expected = format!("http://api.test/airports/{}", item.data.code);
        assert_eq!(item.link("self"), Some(expected.as_str()));
        assert_eq!(item.link("airports"), Some("http://api.test/airports"));
    }
}

#[tokio::test]
async fn mapper_round_trip_is_lossless() {
    let r = repr("JFK", Some(4));
    assert_eq!(mapper::to_representation(&mapper::to_entity(&r)), r);
}
