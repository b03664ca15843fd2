use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::viewer::command::add_author_cmd::{AddAuthorCommand, AddAuthorCommandRequest, AddAuthorCommandResponse};
use crate::viewer::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::viewer::command::cancel_cmd::{CancelCommand, CancelCommandRequest, CancelCommandResponse};
use crate::viewer::command::get_author_cmd::{GetAuthorCommand, GetAuthorCommandRequest, GetAuthorCommandResponse};
use crate::viewer::command::get_view_cmd::{GetViewCommand, GetViewCommandRequest};
use crate::viewer::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::viewer::command::select_tab_cmd::{SelectTabCommand, SelectTabCommandRequest, SelectTabCommandResponse};
use crate::viewer::dto::ViewSnapshot;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/view", get(get_view))
        .route("/view/tab", put(select_tab))
        .route("/view/search", put(search_books))
        .route("/view/cancel", post(cancel))
        .route("/authors", post(add_author))
        .route("/authors/:id", get(find_author_by_id))
        .route("/books", post(add_book))
        .with_state(state)
}

pub(crate) async fn get_view(
    State(state): State<AppState>) -> Result<Json<ViewSnapshot>, ServerError> {
    let res = GetViewCommand::new(state.viewer).execute(GetViewCommandRequest {}).await?;
    Ok(Json(res))
}

pub(crate) async fn select_tab(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<SelectTabCommandResponse>, ServerError> {
    let req: SelectTabCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = SelectTabCommand::new(state.viewer).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn search_books(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let req: SearchBooksCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = SearchBooksCommand::new(state.viewer).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn cancel(
    State(state): State<AppState>) -> Result<Json<CancelCommandResponse>, ServerError> {
    let res = CancelCommand::new(state.viewer).execute(CancelCommandRequest {}).await?;
    Ok(Json(res))
}

pub(crate) async fn add_author(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddAuthorCommandResponse>, ServerError> {
    let req: AddAuthorCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddAuthorCommand::new(state.viewer).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_author_by_id(
    State(state): State<AppState>,
    Path(author_id): Path<i64>) -> Result<Json<GetAuthorCommandResponse>, ServerError> {
    let req = GetAuthorCommandRequest { author_id };
    let res = GetAuthorCommand::new(state.viewer).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.viewer).execute(req).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use crate::core::controller::AppState;
    use crate::utils::testing::loaded_viewer;
    use crate::viewer::controller::router;

    async fn app() -> Router {
        router(AppState::new(loaded_viewer().await))
    }

    async fn call(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        let req = match body {
            Some(body) => req.body(Body::from(body.to_string())),
            None => req.body(Body::empty()),
        }.expect("should build request");
        let res = app.oneshot(req).await.expect("should respond");
        let status = res.status();
        let bytes = hyper::body::to_bytes(res.into_body()).await.expect("should read body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_should_get_view() {
        let (status, view) = call(app().await, Method::GET, "/view", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("books", view["activeTab"]);
        assert_eq!(8, view["booksCount"]);
        assert_eq!(false, view["loading"]);
    }

    #[tokio::test]
    async fn test_should_search_and_wait() {
        let (status, res) = call(app().await, Method::PUT, "/view/search",
                                 Some(json!({"term": "dune", "wait": true}))).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(2, res["view"]["booksCount"]);
        assert_eq!("Unknown Author", res["view"]["books"][0]["authorName"]);
    }

    #[tokio::test]
    async fn test_should_select_tab() {
        let (status, res) = call(app().await, Method::PUT, "/view/tab", Some(json!({"tab": "add-author"}))).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("add-author", res["view"]["activeTab"]);
    }

    #[tokio::test]
    async fn test_should_cancel_form() {
        let app = app().await;
        call(app.clone(), Method::PUT, "/view/tab", Some(json!({"tab": "add-book"}))).await;
        let (status, res) = call(app, Method::POST, "/view/cancel", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("books", res["activeTab"]);
    }

    #[tokio::test]
    async fn test_should_add_author_and_find_it() {
        let app = app().await;
        let (status, res) = call(app.clone(), Method::POST, "/authors", Some(json!({"name": "N. K. Jemisin"}))).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(6, res["author"]["id"]);
        assert_eq!("authors", res["activeTab"]);

        let (status, res) = call(app, Method::GET, "/authors/6", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("N. K. Jemisin", res["author"]["name"]);
        assert_eq!(0, res["author"]["bookCount"]);
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let (status, res) = call(app().await, Method::POST, "/books",
                                 Some(json!({"title": "Children of Dune", "authorId": 2, "publishedYear": 1976}))).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(9, res["book"]["id"]);
        assert_eq!("No description available.", res["book"]["description"]);
    }

    #[tokio::test]
    async fn test_should_reject_bad_requests() {
        let app = app().await;
        let (status, _) = call(app.clone(), Method::POST, "/authors", Some(json!({"name": " "}))).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = call(app.clone(), Method::POST, "/books", Some(json!({"title": "No author"}))).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = call(app, Method::PUT, "/view/tab", Some(json!({"tab": "settings"}))).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }

    #[tokio::test]
    async fn test_should_not_find_missing_author() {
        let (status, _) = call(app().await, Method::GET, "/authors/9999", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
    }
}
