use super::*;

// =============================================================
// bytes_to_hex
// =============================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_pads_low_bytes() {
    assert_eq!(bytes_to_hex(&[0x0a, 0x00]), "0a00");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================
// Token and ticket generation
// =============================================================

#[test]
fn session_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn ws_ticket_is_32_hex_chars() {
    let ticket = generate_ws_ticket();
    assert_eq!(ticket.len(), 32);
    assert!(ticket.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn tokens_do_not_repeat() {
    assert_ne!(generate_token(), generate_token());
    assert_ne!(generate_ws_ticket(), generate_ws_ticket());
}

// =============================================================
// Colors and viewer projection
// =============================================================

#[test]
fn pick_color_is_a_hex_color() {
    let color = pick_color();
    assert!(color.starts_with('#'));
    assert_eq!(color.len(), 7);
}

#[test]
fn session_visitor_projects_to_viewer() {
    let visitor = SessionVisitor {
        id: Uuid::nil(),
        name: "Ada".to_owned(),
        color: "#e07a5f".to_owned(),
        guest: true,
    };
    let viewer = visitor.to_viewer();
    assert_eq!(viewer.id, Uuid::nil().to_string());
    assert_eq!(viewer.name, "Ada");
    assert!(viewer.guest);
}

// =============================================================
// Live database round trips
// =============================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;

    async fn pool() -> sqlx::PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL for live tests");
        crate::db::init_pool(&url).await.expect("pool")
    }

    #[tokio::test]
    async fn session_round_trip() {
        let pool = pool().await;
        let visitor_id = create_guest_visitor(&pool, "Test Guest").await.expect("visitor");
        let token = create_session(&pool, visitor_id).await.expect("session");

        let visitor = validate_session(&pool, &token)
            .await
            .expect("validate")
            .expect("visitor present");
        assert_eq!(visitor.id, visitor_id);
        assert!(visitor.guest);

        delete_session(&pool, &token).await.expect("delete");
        assert!(validate_session(&pool, &token).await.expect("validate").is_none());
    }

    #[tokio::test]
    async fn ws_ticket_is_single_use() {
        let pool = pool().await;
        let visitor_id = create_guest_visitor(&pool, "Test Guest").await.expect("visitor");
        let ticket = create_ws_ticket(&pool, visitor_id).await.expect("ticket");

        let first = consume_ws_ticket(&pool, &ticket).await.expect("consume");
        assert_eq!(first, Some(visitor_id));

        let second = consume_ws_ticket(&pool, &ticket).await.expect("consume again");
        assert_eq!(second, None);
    }
}
