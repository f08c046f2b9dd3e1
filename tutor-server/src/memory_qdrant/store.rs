//! QdrantVectorStore: VectorStore over a Qdrant collection.

use async_trait::async_trait;
use memory_core::{
    RecordFilter, ScoredRecord, VectorRecord, VectorStore, FIELD_TIMESTAMP, FIELD_USER_ID,
};
use qdrant_client::qdrant::{
    CreateCollectionBuilder, CreateFieldIndexCollectionBuilder, DeletePointsBuilder, Direction,
    Distance, FieldType, OrderByBuilder, PointStruct, ScrollPointsBuilder, SearchPointsBuilder,
    UpsertPointsBuilder, VectorParamsBuilder,
};
use qdrant_client::Qdrant;
use tracing::{debug, info, instrument};

use super::config::QdrantConfig;
use super::convert::{from_retrieved, from_scored, to_qdrant_filter, to_qdrant_payload};

/// Payload indexes required on every collection this store uses.
pub(crate) const PAYLOAD_INDEXES: [(&str, FieldType); 2] = [
    (FIELD_USER_ID, FieldType::Keyword),
    (FIELD_TIMESTAMP, FieldType::Float),
];

pub struct QdrantVectorStore {
    client: Qdrant,
    collection: String,
}

impl QdrantVectorStore {
    /// Connects and makes sure the collection and its payload indexes exist.
    #[instrument(skip(config), fields(url = %config.url, collection = %config.collection))]
    pub async fn connect(config: &QdrantConfig) -> Result<Self, anyhow::Error> {
        let mut builder = Qdrant::from_url(&config.url);
        if let Some(key) = &config.api_key {
            builder = builder.api_key(key.clone());
        }
        let client = builder.build()?;
        let store = Self {
            client,
            collection: config.collection.clone(),
        };
        store.ensure_collection(config.embedding_dim).await?;
        Ok(store)
    }

    async fn ensure_collection(&self, embedding_dim: u64) -> Result<(), anyhow::Error> {
        if self.client.collection_exists(self.collection.clone()).await? {
            debug!(collection = %self.collection, "Qdrant collection exists");
        } else {
            self.client
                .create_collection(
                    CreateCollectionBuilder::new(&self.collection)
                        .vectors_config(VectorParamsBuilder::new(embedding_dim, Distance::Cosine)),
                )
                .await?;
            info!(collection = %self.collection, embedding_dim, "Created Qdrant collection");
        }

        // Collections created elsewhere may lack them; scroll's order_by needs the
        // timestamp range index. Creating an existing index is a no-op.
        for (field, field_type) in PAYLOAD_INDEXES {
            self.client
                .create_field_index(
                    CreateFieldIndexCollectionBuilder::new(&self.collection, field, field_type)
                        .wait(true),
                )
                .await?;
            debug!(collection = %self.collection, field, "Payload index ensured");
        }
        Ok(())
    }
}

#[async_trait]
impl VectorStore for QdrantVectorStore {
    async fn upsert(&self, record: VectorRecord) -> Result<(), anyhow::Error> {
        let point = PointStruct::new(record.id, record.vector, to_qdrant_payload(&record.payload));
        self.client
            .upsert_points(UpsertPointsBuilder::new(&self.collection, vec![point]).wait(true))
            .await?;
        Ok(())
    }

    async fn search(
        &self,
        query: &[f32],
        limit: usize,
        score_threshold: f32,
        filter: Option<&RecordFilter>,
    ) -> Result<Vec<ScoredRecord>, anyhow::Error> {
        let mut request = SearchPointsBuilder::new(&self.collection, query.to_vec(), limit as u64)
            .score_threshold(score_threshold)
            .with_payload(true)
            .with_vectors(true);
        if let Some(filter) = filter {
            request = request.filter(to_qdrant_filter(filter));
        }

        let response = self.client.search_points(request).await?;
        Ok(response
            .result
            .into_iter()
            .filter_map(from_scored)
            .map(|(score, record)| ScoredRecord { score, record })
            .collect())
    }

    /// Lists records newest first (ordered by the `timestamp` payload index).
    async fn scroll(
        &self,
        limit: usize,
        filter: Option<&RecordFilter>,
    ) -> Result<Vec<VectorRecord>, anyhow::Error> {
        let mut request = ScrollPointsBuilder::new(&self.collection)
            .limit(limit as u32)
            .with_payload(true)
            .with_vectors(true)
            .order_by(OrderByBuilder::new(FIELD_TIMESTAMP).direction(Direction::Desc as i32));
        if let Some(filter) = filter {
            request = request.filter(to_qdrant_filter(filter));
        }

        let response = self.client.scroll(request).await?;
        Ok(response.result.into_iter().filter_map(from_retrieved).collect())
    }

    async fn delete(&self, filter: &RecordFilter) -> Result<(), anyhow::Error> {
        self.client
            .delete_points(
                DeletePointsBuilder::new(&self.collection)
                    .points(to_qdrant_filter(filter))
                    .wait(true),
            )
            .await?;
        Ok(())
    }
}
