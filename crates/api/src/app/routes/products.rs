use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use storefront_core::ProductId;
use storefront_products::{NewProduct, Page, Product, ProductPatch};

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::extract::{ApiPath, ApiQuery};
use crate::app::services::AppServices;
use crate::validation::Validated;

type ApiResult<T> = Result<T, ApiError>;

pub fn router() -> Router {
    // Static segments are registered ahead of `/:id` so they never read as ids.
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route("/stats", get(product_stats))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(query): ApiQuery<dto::ListProductsQuery>,
) -> ApiResult<Json<Page<Product>>> {
    let page = services.products_page(query.category.as_deref(), query.page_params())?;
    Ok(Json(page))
}

pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(query): ApiQuery<dto::SearchQuery>,
) -> ApiResult<Json<Vec<Product>>> {
    Ok(Json(services.products_search(query.q.as_deref())?))
}

pub async fn product_stats(
    Extension(services): Extension<Arc<AppServices>>,
) -> ApiResult<Json<BTreeMap<String, usize>>> {
    Ok(Json(services.products_stats()?))
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Json<Product>> {
    let id: ProductId = id.parse()?;
    Ok(Json(services.products_get(&id)?))
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Validated(input): Validated<NewProduct>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let product = services.products_create(input)?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    ApiPath(id): ApiPath<String>,
    Validated(patch): Validated<ProductPatch>,
) -> ApiResult<Json<Product>> {
    let id: ProductId = id.parse()?;
    Ok(Json(services.products_update(&id, patch)?))
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<StatusCode> {
    let id: ProductId = id.parse()?;
    services.products_delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
