//! QdrantVectorStore against a live server (QDRANT_HOST, default localhost:6334).
//!
//! Run with: cargo test -p tutor-server --features qdrant -- --ignored

#![cfg(feature = "qdrant")]

use memory_core::{decode_turn, encode_turn, now_secs, Role, Turn, VectorStore};
use qdrant_client::qdrant::{CreateCollectionBuilder, Distance, VectorParamsBuilder};
use qdrant_client::Qdrant;
use tutor_server::memory_qdrant::{QdrantConfig, QdrantVectorStore};

fn qdrant_url() -> String {
    std::env::var("QDRANT_HOST").unwrap_or_else(|_| "http://localhost:6334".to_string())
}

/// A collection created without payload indexes still supports ordered listing.
#[tokio::test]
#[ignore]
async fn test_existing_collection_without_indexes_can_be_listed() {
    let collection = format!("chat_history_plain_{}", std::process::id());
    let client = Qdrant::from_url(&qdrant_url()).build().unwrap();
    client
        .create_collection(
            CreateCollectionBuilder::new(&collection)
                .vectors_config(VectorParamsBuilder::new(2, Distance::Cosine)),
        )
        .await
        .unwrap();

    let config = QdrantConfig {
        url: qdrant_url(),
        api_key: None,
        collection: collection.clone(),
        embedding_dim: 2,
    };
    let store = QdrantVectorStore::connect(&config).await.unwrap();

    let now = now_secs();
    let turn = Turn::new("alice", Role::User, "What is recursion?", vec![1.0, 0.0], now);
    store.upsert(encode_turn(&turn)).await.unwrap();
    let listed = store.scroll(20, None).await;

    client.delete_collection(collection.as_str()).await.unwrap();

    let turns: Vec<Turn> = listed.unwrap().into_iter().filter_map(decode_turn).collect();
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].content, "What is recursion?");
}
