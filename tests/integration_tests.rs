//! Integration tests for the View Arquitetura site
//!
//! These tests start the real router on an ephemeral port and drive it over
//! HTTP, covering locale routing, catalog lookups and the contact form.

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::{redirect, Client, StatusCode};
use tokio::net::TcpListener;

use view_arquitetura::catalog::ContentCatalog;
use view_arquitetura::config::Config;
use view_arquitetura::i18n::Locale;
use view_arquitetura::server::{router, AppState};

// ==================== Test Helpers ====================

/// Config with a short submission delay so contact tests stay fast
fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        contact_submit_delay: Duration::from_millis(10),
        ..Config::default()
    }
}

/// Spawn the site on 127.0.0.1:0 and return its address
async fn spawn_site(config: Config) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let app = router(AppState::new(config, ContentCatalog::load()));

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    addr
}

fn client() -> Client {
    Client::builder()
        .redirect(redirect::Policy::none())
        .build()
        .expect("Failed to build client")
}

async fn get(addr: SocketAddr, path: &str) -> (StatusCode, String) {
    let response = client()
        .get(format!("http://{}{}", addr, path))
        .send()
        .await
        .expect("Request failed");
    let status = response.status();
    (status, response.text().await.expect("Failed to read body"))
}

// ==================== Locale Routing Tests ====================

#[tokio::test]
async fn test_root_redirects_to_negotiated_locale() {
    let addr = spawn_site(create_test_config()).await;

    let response = client()
        .get(format!("http://{}/", addr))
        .header("Accept-Language", "en-US,en;q=0.9,pt;q=0.5")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/en");
}

#[tokio::test]
async fn test_root_without_header_uses_default_locale() {
    let config = Config {
        default_locale: Locale::En,
        ..create_test_config()
    };
    let addr = spawn_site(config).await;

    let response = client().get(format!("http://{}/", addr)).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/en");
}

#[tokio::test]
async fn test_same_page_in_both_locales() {
    let addr = spawn_site(create_test_config()).await;

    let (pt_status, pt) = get(addr, "/pt/studio").await;
    let (en_status, en) = get(addr, "/en/studio").await;

    assert_eq!(pt_status, StatusCode::OK);
    assert_eq!(en_status, StatusCode::OK);
    assert!(pt.contains("Nossa História"));
    assert!(en.contains("Our Story"));
    assert!(pt.contains(r#"href="/en/studio""#));
    assert!(en.contains(r#"href="/pt/studio""#));
}

#[tokio::test]
async fn test_every_page_renders() {
    let addr = spawn_site(create_test_config()).await;

    for locale in ["pt", "en"] {
        for page in ["", "/projects", "/projects/praca-das-aguas", "/process", "/studio", "/contact"] {
            let (status, body) = get(addr, &format!("/{}{}", locale, page)).await;
            assert_eq!(status, StatusCode::OK, "/{}{}", locale, page);
            assert!(body.starts_with("<!DOCTYPE html>"));
        }
    }
}

#[tokio::test]
async fn test_locale_home_with_trailing_slash_redirects() {
    let addr = spawn_site(create_test_config()).await;

    for (path, expected) in [("/pt/", "/pt"), ("/en/", "/en"), ("/en/projects/", "/en/projects")] {
        let response = client()
            .get(format!("http://{}{}", addr, path))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT, "{}", path);
        assert_eq!(response.headers()["location"], expected);
    }
}

#[tokio::test]
async fn test_trailing_slash_keeps_query() {
    let addr = spawn_site(create_test_config()).await;

    let response = client()
        .get(format!("http://{}/en/projects/?category=comercial", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()["location"], "/en/projects?category=comercial");
}

#[tokio::test]
async fn test_trailing_slash_followed_lands_on_page() {
    let addr = spawn_site(create_test_config()).await;

    let response = Client::new()
        .get(format!("http://{}/pt/", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("Construímos"));
}

// ==================== Not Found Tests ====================

#[tokio::test]
async fn test_unknown_project_slug_is_404() {
    let addr = spawn_site(create_test_config()).await;

    let (status, body) = get(addr, "/en/projects/casa-inexistente").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn test_unknown_locale_is_404_in_default_locale() {
    let addr = spawn_site(create_test_config()).await;

    let (status, body) = get(addr, "/fr/projects").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Página não encontrada"));
}

#[tokio::test]
async fn test_unknown_path_with_trailing_slash_is_404() {
    let addr = spawn_site(create_test_config()).await;

    let (status, body) = get(addr, "/en/blog/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn test_unknown_path_is_404_in_request_locale() {
    let addr = spawn_site(create_test_config()).await;

    let (status, body) = get(addr, "/en/blog/latest").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
    assert!(body.contains(r#"<a href="/en">Back to home</a>"#));
}

// ==================== Project Tests ====================

#[tokio::test]
async fn test_project_detail_is_localized() {
    let addr = spawn_site(create_test_config()).await;

    let (_, en) = get(addr, "/en/projects/casa-mirante").await;
    let (_, pt) = get(addr, "/pt/projects/casa-mirante").await;

    assert!(en.contains("<h1>Viewpoint House</h1>"));
    assert!(pt.contains("<h1>Casa Mirante</h1>"));
}

#[tokio::test]
async fn test_project_gallery_query() {
    let addr = spawn_site(create_test_config()).await;

    let (status, body) = get(addr, "/en/projects/casa-mirante?image=2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("3 / 4"));

    let (status, body) = get(addr, "/en/projects/casa-mirante?image=banana").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("1 / 4"));
}

#[tokio::test]
async fn test_projects_category_filter() {
    let addr = spawn_site(create_test_config()).await;

    let (_, residential) = get(addr, "/en/projects?category=residencial").await;
    assert!(residential.contains("Viewpoint House"));
    assert!(residential.contains("Serra Residence"));
    assert!(!residential.contains("Horizon Building"));

    let (status, unknown) = get(addr, "/en/projects?category=industrial").await;
    assert_eq!(status, StatusCode::OK);
    assert!(unknown.contains("No projects in this category."));

    let (_, all) = get(addr, "/en/projects").await;
    assert!(all.contains("Horizon Building"));
    assert!(all.contains("Waters Square"));
}

#[tokio::test]
async fn test_repeated_query_keys_still_render_page() {
    let addr = spawn_site(create_test_config()).await;

    let (status, listing) = get(addr, "/en/projects?category=residencial&category=comercial").await;
    assert_eq!(status, StatusCode::OK);
    assert!(listing.contains("Horizon Building"));
    assert!(listing.contains("Viewpoint House"));

    let (status, detail) = get(addr, "/en/projects/casa-mirante?image=1&image=2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(detail.contains("1 / 4"));
}

// ==================== Contact Form Tests ====================

#[tokio::test]
async fn test_contact_submission_succeeds() {
    let addr = spawn_site(create_test_config()).await;

    let response = client()
        .post(format!("http://{}/en/contact", addr))
        .form(&[
            ("name", "Maria Souza"),
            ("email", "maria@example.com"),
            ("phone", ""),
            ("projectType", "residential"),
            ("message", "A weekend house near Itu."),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Message Sent!"));
    assert!(!body.contains("<form"));
}

#[tokio::test]
async fn test_contact_blank_fields_rejected() {
    let addr = spawn_site(create_test_config()).await;

    let response = client()
        .post(format!("http://{}/pt/contact", addr))
        .form(&[("name", "Maria"), ("email", ""), ("message", "Olá")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.text().await.unwrap();
    assert!(body.contains("Preencha os campos obrigatórios:"));
    assert!(body.contains("<li>Email</li><li>Tipo de Projeto</li>"));
    assert!(body.contains(r#"value="Maria""#));
}

// ==================== Health Tests ====================

#[tokio::test]
async fn test_health_endpoint() {
    let addr = spawn_site(create_test_config()).await;

    let (status, body) = get(addr, "/health").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}
