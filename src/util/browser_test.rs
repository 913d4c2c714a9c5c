#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn alert_is_noop_but_callable() {
    alert("hola");
}

#[test]
fn clear_session_artifacts_is_noop_but_callable() {
    clear_session_artifacts();
}
