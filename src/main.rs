use std::collections::HashMap;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::info;

use blog_service::config::Config;
use blog_service::post::post_store::DynamoPostStore;
use blog_service::router::index::handle;
use blog_service::router::model::{ApiRequest, ApiResponse};
use blog_service::uploader::object_store::S3ObjectStore;
use blog_service::AppState;

/// Local development dispatcher: translates plain HTTP into the
/// structured request contract and writes the structured response back.
/// In production that translation is the hosting platform's job.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().expect("Missing required configuration");
    let aws_config = aws_config::load_from_env().await;
    let state = web::Data::new(AppState::new(
        Arc::new(DynamoPostStore::new(
            aws_sdk_dynamodb::Client::new(&aws_config),
            config.table_name,
        )),
        Arc::new(S3ObjectStore::new(
            aws_sdk_s3::Client::new(&aws_config),
            config.bucket_name,
        )),
        config.base_url,
    ));

    info!("Starting dispatcher on http://localhost:8000");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .route("/blog", web::get().to(list_posts))
            .route("/blog", web::post().to(create_post))
            .route("/blog/{id}", web::get().to(get_post))
            .default_service(web::to(unmatched))
    })
    .bind(("localhost", 8000))?
    .run()
    .await
}

async fn list_posts(state: web::Data<AppState>) -> HttpResponse {
    let request = ApiRequest {
        resource: "/blog".to_string(),
        http_method: "GET".to_string(),
        path_parameters: None,
        body: None,
    };
    to_http_response(handle(state.get_ref(), request).await)
}

async fn get_post(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let mut params = HashMap::new();
    params.insert("id".to_string(), path.into_inner());
    let request = ApiRequest {
        resource: "/blog/{id}".to_string(),
        http_method: "GET".to_string(),
        path_parameters: Some(params),
        body: None,
    };
    to_http_response(handle(state.get_ref(), request).await)
}

async fn create_post(state: web::Data<AppState>, body: String) -> HttpResponse {
    let request = ApiRequest {
        resource: "/blog".to_string(),
        http_method: "POST".to_string(),
        path_parameters: None,
        body: Some(body),
    };
    to_http_response(handle(state.get_ref(), request).await)
}

/// Everything else flows through the same dispatch and gets the
/// structured 404.
async fn unmatched(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let request = ApiRequest {
        resource: req.path().to_string(),
        http_method: req.method().to_string(),
        path_parameters: None,
        body: None,
    };
    to_http_response(handle(state.get_ref(), request).await)
}

fn to_http_response(response: ApiResponse) -> HttpResponse {
    let status = StatusCode::from_u16(response.status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut builder = HttpResponse::build(status);
    for (name, value) in &response.headers {
        builder.insert_header((name.as_str(), value.as_str()));
    }
    builder.body(response.body)
}
