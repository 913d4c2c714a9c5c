use super::*;

#[test]
fn api_url_joins_origin_and_path() {
    assert_eq!(api_url("/grupos"), "http://localhost:8000/grupos");
}

#[test]
fn api_url_keeps_nested_paths_intact() {
    assert_eq!(
        api_url("/grupos/3/eventos"),
        "http://localhost:8000/grupos/3/eventos"
    );
}

#[test]
fn ws_url_rewrites_http_scheme_to_ws() {
    assert_eq!(
        ws_url("/chat/ws-evento/7"),
        "ws://localhost:8000/chat/ws-evento/7"
    );
}
