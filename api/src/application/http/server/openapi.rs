use crate::application::http::recommendation::router::RecommendationApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nutriplan API"
    ),
    tags(
        (name = "recommendation", description = "Diet and workout recommendations")
    )
)]
pub struct ApiDoc;

pub fn api_doc() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi().merge_from(RecommendationApiDoc::openapi())
}
