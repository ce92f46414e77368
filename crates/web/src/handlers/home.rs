use axum::response::Html;

use crate::views;

pub async fn home() -> Html<String> {
    views::home_page()
}
