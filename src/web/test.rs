use poem::test::TestClient;
use poem::Endpoint;

use crate::inference::pipeline::tests::test_pipeline;
use crate::prelude::*;
use crate::web::create_app;

pub fn create_test_client() -> TestClient<impl Endpoint> {
    TestClient::new(create_app(Arc::new(test_pipeline())))
}
