/// Body of `GET /server-status`.
pub const SERVER_UP: &str = "Server is up!";

/// Liveness. Touches nothing, so it answers even when every upstream is down.
pub async fn server_status() -> &'static str {
    SERVER_UP
}
