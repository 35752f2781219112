//! GraphQL anime service: declarative schema mapping over the shared
//! store, with a GraphiQL page on GET.

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, EmptySubscription, Object, Result as GqlResult, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tracing::debug;

use catalog_core::Anime;

use crate::storage::CatalogStore;

/// Shared anime store available to every resolver.
pub type AnimeStore = Arc<CatalogStore<Anime>>;

/// Schema type for the anime service.
pub type AnimeSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// GraphQL object wrapping a stored [`Anime`] record.
pub struct AnimeNode(Anime);

#[Object(name = "Anime")]
impl AnimeNode {
    async fn id(&self) -> u32 {
        self.0.id
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn genre(&self) -> &str {
        &self.0.genre
    }

    /// Episode count.
    async fn episodes(&self) -> u32 {
        self.0.episodes
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get all anime.
    async fn anime_list(&self, ctx: &Context<'_>) -> GqlResult<Vec<AnimeNode>> {
        let store = ctx.data::<AnimeStore>()?;
        let list = store.list();
        debug!(count = list.len(), "returning anime list");
        Ok(list.into_iter().map(AnimeNode).collect())
    }

    /// Get anime by ID.
    async fn anime(&self, ctx: &Context<'_>, id: u32) -> GqlResult<AnimeNode> {
        let store = ctx.data::<AnimeStore>()?;
        store
            .get(id)
            .map(AnimeNode)
            .map_err(|err| async_graphql::Error::new(err.to_string()))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a new anime.
    async fn add_anime(
        &self,
        ctx: &Context<'_>,
        title: String,
        genre: String,
        episodes: u32,
    ) -> GqlResult<AnimeNode> {
        let store = ctx.data::<AnimeStore>()?;
        let created = store
            .create(Anime {
                id: 0,
                title,
                genre,
                episodes,
            })
            .map_err(|err| async_graphql::Error::new(err.to_string()))?;
        debug!(id = created.id, "created anime");
        Ok(AnimeNode(created))
    }
}

/// Builds the anime schema with the store attached as context data.
#[must_use]
pub fn build_schema(store: AnimeStore) -> AnimeSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

async fn graphql_handler(
    State(schema): State<AnimeSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Builds the anime service router: GraphiQL on GET, queries on POST.
pub fn router(store: AnimeStore) -> Router {
    let schema = build_schema(store);
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .with_state(schema)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::storage::seed::sample_anime;

    use super::*;

    fn schema() -> AnimeSchema {
        build_schema(Arc::new(sample_anime()))
    }

    #[tokio::test]
    async fn anime_list_returns_all_seeded_entries() {
        let response = schema().execute("{ animeList { id title episodes } }").await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().unwrap();
        let list = data["animeList"].as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().filter(|a| a["title"] == "Attack on Titan").count(), 1);
    }

    #[tokio::test]
    async fn anime_by_id_returns_the_record() {
        let response = schema()
            .execute(r#"{ anime(id: 2) { title genre episodes } }"#)
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().unwrap();
        assert_eq!(data["anime"]["title"], "Demon Slayer");
        assert_eq!(data["anime"]["episodes"], 55);
    }

    #[tokio::test]
    async fn anime_missing_id_errors_naming_the_id() {
        let response = schema().execute(r#"{ anime(id: 99) { title } }"#).await;
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("99"));
    }

    #[tokio::test]
    async fn add_anime_assigns_next_id() {
        let store = Arc::new(sample_anime());
        let schema = build_schema(Arc::clone(&store));

        let response = schema
            .execute(
                r#"mutation {
                    addAnime(title: "Frieren", genre: "Adventure, Fantasy", episodes: 28) {
                        id
                        title
                    }
                }"#,
            )
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().unwrap();
        assert_eq!(data["addAnime"], json!({"id": 3, "title": "Frieren"}));
        assert_eq!(store.get(3).unwrap().title, "Frieren");
    }

    #[tokio::test]
    async fn add_anime_empty_title_errors_without_allocation() {
        let store = Arc::new(sample_anime());
        let schema = build_schema(Arc::clone(&store));

        let response = schema
            .execute(r#"mutation { addAnime(title: "", genre: "x", episodes: 1) { id } }"#)
            .await;
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("title is required"));
        assert_eq!(store.next_id(), 3);
    }
}
