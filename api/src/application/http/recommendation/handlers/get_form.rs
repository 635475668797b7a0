use axum::response::Html;

const FORM_PAGE: &str = include_str!("../../../../../static/index.html");

#[utoipa::path(
    get,
    path = "/",
    tag = "recommendation",
    summary = "Profile form",
    responses(
        (status = 200, description = "HTML form posting to /recommend", content_type = "text/html", body = String)
    )
)]
pub async fn get_form() -> Html<&'static str> {
    Html(FORM_PAGE)
}
