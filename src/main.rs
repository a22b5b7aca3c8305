//! 계정 인증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결을 설정하고 JWT 인증 기반의 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use account_service::config::ServerConfig;
use account_service::db::Database;
use account_service::repositories::users::user_repo::{UserRepository, UserStore};
use account_service::routes::configure_all_routes;
use account_service::services::auth::{
    AuthService, GoogleAuthService, PasswordResetService, PasswordService, TokenService,
};
use account_service::services::mail::{MailSender, Mailer};
use account_service::services::users::user_service::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("계정 인증 서비스 시작중...");

    // 데이터베이스 연결
    let database = Database::new().await.expect("데이터베이스 연결 실패");
    info!("MongoDB 연결 성공");

    // 리포지토리 및 서비스 구성
    let user_repo = Arc::new(UserRepository::new(&database));

    user_repo
        .create_indexes()
        .await
        .expect("인덱스 생성 실패");

    let user_repo: Arc<dyn UserStore> = user_repo;

    let token_service = Arc::new(TokenService::new());
    let password_service = Arc::new(PasswordService::new().expect("비밀번호 해시 설정 실패"));
    let mailer: Arc<dyn MailSender> =
        Arc::new(Mailer::new().expect("SMTP 설정 실패"));

    let auth_service = web::Data::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&token_service),
        Arc::clone(&password_service),
    ));
    let google_service = web::Data::new(GoogleAuthService::new(Arc::clone(&user_repo)));
    let reset_service = web::Data::new(PasswordResetService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_service),
        mailer,
    ));
    let user_service = web::Data::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_service),
    ));
    let token_service_data = web::Data::from(token_service);

    info!("모든 서비스가 성공적으로 초기화되었습니다");

    // HTTP 서버 시작
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("서버가 http://{} 에서 실행중입니다", bind_address);
    info!("Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 서비스 주입
            .app_data(auth_service.clone())
            .app_data(google_service.clone())
            .app_data(reset_service.clone())
            .app_data(user_service.clone())
            .app_data(token_service_data.clone())
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS 설정입니다.
/// 리프레시 토큰 쿠키 전달을 위해 자격 증명을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin(&ServerConfig::frontend_url())
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
