use std::sync::Arc;
use axum::http::StatusCode;
use crate::core::command::CommandError;
use crate::viewer::domain::ViewerService;

#[derive(Clone)]
pub struct AppState {
    pub viewer: Arc<dyn ViewerService>,
}

impl AppState {
    pub fn new(viewer: Arc<dyn ViewerService>) -> AppState {
        AppState {
            viewer,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Other { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_command_errors_to_status() {
        let (status, _) = ServerError::from(CommandError::not_found("missing"));
        assert_eq!(StatusCode::NOT_FOUND, status);
        let (status, _) = ServerError::from(CommandError::validation("blank"));
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = ServerError::from(CommandError::Other { message: "x".to_string(), reason_code: None });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
    }
}
