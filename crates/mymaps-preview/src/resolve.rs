//! Route resolution against the document store.
//!
//! Each eligible route costs exactly one store call: a direct fetch for posts,
//! a single-result query for profiles and places.

use crate::model::{PlacePreview, PostPreview, UserPreview, Visibility};
use crate::route::PreviewRoute;
use crate::store::{self, DocumentStore, Lookup, StructuredQuery};

/// Data needed to render a preview page.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedPreview {
    Post { id: String, post: PostPreview },
    Profile { username: String, user: UserPreview },
    Place { place_id: String, place: PlacePreview },
}

/// Resolve a route into preview data.
pub async fn resolve(store: &dyn DocumentStore, route: &PreviewRoute) -> Lookup<ResolvedPreview> {
    match route {
        PreviewRoute::Post { id } => resolve_post(store, id).await.map(|post| {
            ResolvedPreview::Post {
                id: id.clone(),
                post,
            }
        }),
        PreviewRoute::Profile { username } => {
            resolve_profile(store, username).await.map(|user| ResolvedPreview::Profile {
                username: username.clone(),
                user,
            })
        }
        PreviewRoute::Place { place_id } => {
            resolve_place(store, place_id).await.map(|place| ResolvedPreview::Place {
                place_id: place_id.clone(),
                place,
            })
        }
    }
}

/// Fetch a post by id. Only public posts are previewed; followers-only,
/// private and unmarked posts resolve to `Missing`.
async fn resolve_post(store: &dyn DocumentStore, id: &str) -> Lookup<PostPreview> {
    Lookup::from(store.get_document(store::POSTS, id).await)
        .map(|doc| PostPreview::from_document(&doc))
        .filter(|post| {
            let public = post.visibility.is_public();
            if !public {
                tracing::debug!(id = %id, visibility = ?post.visibility, "post is not public");
            }
            public
        })
}

/// Find a user by their username (a secondary key).
async fn resolve_profile(store: &dyn DocumentStore, username: &str) -> Lookup<UserPreview> {
    let query = profile_query(username);
    first_result(store.run_query(&query).await).map(|doc| UserPreview::from_document(&doc))
}

/// Derive a place from any one of its public posts.
async fn resolve_place(store: &dyn DocumentStore, place_id: &str) -> Lookup<PlacePreview> {
    let query = place_query(place_id);
    first_result(store.run_query(&query).await)
        .map(|doc| PostPreview::from_document(&doc))
        .filter(|post| post.visibility.is_public())
        .map(PlacePreview::from)
}

pub fn profile_query(username: &str) -> StructuredQuery {
    StructuredQuery::collection(store::USERS)
        .where_equal("username", username)
        .limit(1)
}

/// Equality filters only: adding an ordering would need a composite index.
pub fn place_query(place_id: &str) -> StructuredQuery {
    StructuredQuery::collection(store::POSTS)
        .where_equal("placeId", place_id)
        .where_equal("visibility", Visibility::PUBLIC)
        .limit(1)
}

fn first_result<T>(result: Result<Vec<T>, crate::error::StoreError>) -> Lookup<T> {
    Lookup::from(result.map(|docs| docs.into_iter().next()))
}
