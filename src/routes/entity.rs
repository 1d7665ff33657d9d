//! CRUD routes for one entity: `GET /{plural}`, `GET|DELETE /{singular}/:id`, `POST /{singular}`.

use crate::handlers::entity::{create, delete, list, read};
use crate::models::Entity;
use crate::routes::RouteRegistry;

pub fn entity_routes<E: Entity>(registry: RouteRegistry) -> RouteRegistry {
    let collection = format!("/{}", E::COLLECTION);
    let item = format!("/{}/:id", E::NAME);
    let singular = format!("/{}", E::NAME);
    registry
        .get(&collection, list::<E>)
        .get(&item, read::<E>)
        .delete(&item, delete::<E>)
        .post(&singular, create::<E>)
}
