use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Simple Inventory API",
        version = "0.1.0",
        description = r#"
# Simple Inventory API

CRUD over grocery products held in memory. Ids are assigned by the server on
create and never reused. Everything is lost when the process restarts.

## Status codes

- `200` list or single product
- `201` product created, `Location` points at the new product
- `204` product replaced or deleted
- `400` body id differs from route id, negative price/quantity, malformed JSON
- `404` no product with that id
"#
    ),
    paths(
        crate::handlers::products::list_products,
        crate::handlers::products::get_product,
        crate::handlers::products::create_product,
        crate::handlers::products::update_product,
        crate::handlers::products::delete_product,
    ),
    components(schemas(
        crate::models::product::Product,
        crate::models::product::ProductInput,
        crate::models::product::ProductUpdate,
        crate::errors::ErrorResponse,
    )),
    tags(
        (name = "products", description = "Product inventory endpoints")
    )
)]
pub struct ApiDoc;

/// Route prefix the handler annotations are written against
const DOCUMENTED_PREFIX: &str = "/api/products";

/// OpenAPI document with product paths mounted under `api_prefix`
pub fn openapi_for_prefix(api_prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if api_prefix != DOCUMENTED_PREFIX {
        let paths = std::mem::take(&mut doc.paths.paths);
        for (path, item) in paths {
            let path = match path.strip_prefix(DOCUMENTED_PREFIX) {
                Some(rest) => format!("{}{}", api_prefix, rest),
                None => path,
            };
            doc.paths.paths.insert(path, item);
        }
    }
    doc
}

/// Swagger UI at `/swagger-ui`, document at `/api-docs/openapi.json`
pub fn swagger_ui(api_prefix: &str) -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi_for_prefix(api_prefix))
}
