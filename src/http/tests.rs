use crate::app_context;
use crate::cli::tests::fake_args;
use crate::http::router;
use axum_test::TestServer;

pub fn test_server() -> TestServer {
    let args = fake_args();
    let app_context = app_context::init(&args);
    let router = router::new(app_context);
    TestServer::new(router).expect("Failed to run test server.")
}
