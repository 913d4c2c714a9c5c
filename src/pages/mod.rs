//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod amigos;
pub mod chat;
pub mod chat_eventos;
pub mod home;
pub mod informacion;
pub mod mi_perfil;
pub mod principal;
pub mod ver_perfil;
