//! REST API helpers for communicating with the backend.
//!
//! Browser build (csr): real HTTP calls via `gloo-net`, always with
//! credentials so the session cookie travels along.
//! Native build (tests): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a failed fetch
//! degrades to a redirect, an empty list, or an error banner. Endpoints that
//! report business errors through FastAPI's `detail` field have that detail
//! surfaced as the error string.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    EventMessage, EventParticipant, Friend, FriendMessage, FriendRequest, GoogleLogin, Group,
    GroupEvents, JoinOutcome, MyEvent, NewEvent, PublicProfile, RatingsSummary, SessionUser,
};
#[cfg(feature = "csr")]
use serde::Deserialize;

#[cfg(feature = "csr")]
use super::base::api_url;

#[cfg(any(test, feature = "csr"))]
fn group_events_endpoint(group_id: i64) -> String {
    format!("/grupos/{group_id}/eventos")
}

#[cfg(any(test, feature = "csr"))]
fn event_participants_endpoint(event_id: i64) -> String {
    format!("/eventos/{event_id}/participantes")
}

#[cfg(any(test, feature = "csr"))]
fn join_event_endpoint(event_id: i64) -> String {
    format!("/eventos/{event_id}/unirse")
}

#[cfg(any(test, feature = "csr"))]
fn respond_request_endpoint(request_id: i64) -> String {
    format!("/amistad/responder/{request_id}")
}

#[cfg(any(test, feature = "csr"))]
fn cancel_request_endpoint(destinatario_id: &str) -> String {
    format!("/amistad/cancelar/{destinatario_id}")
}

#[cfg(any(test, feature = "csr"))]
fn remove_friend_endpoint(google_id: &str) -> String {
    format!("/amistad/eliminar/{google_id}")
}

#[cfg(any(test, feature = "csr"))]
fn accept_request_endpoint(solicitante_id: &str) -> String {
    format!("/amistad/aceptar/{solicitante_id}")
}

#[cfg(any(test, feature = "csr"))]
fn friendship_state_endpoint(user_id: &str) -> String {
    format!("/amistad/estado/{user_id}")
}

#[cfg(any(test, feature = "csr"))]
fn chat_history_endpoint(otro_id: &str) -> String {
    format!("/chat/historial/{otro_id}")
}

#[cfg(any(test, feature = "csr"))]
fn event_chat_history_endpoint(event_id: i64) -> String {
    format!("/chat/historial-evento/{event_id}")
}

#[cfg(any(test, feature = "csr"))]
fn public_profile_endpoint(user_id: &str) -> String {
    format!("/usuarios/{user_id}")
}

#[cfg(any(test, feature = "csr"))]
fn ratings_endpoint(user_id: &str) -> String {
    format!("/calificaciones/{user_id}")
}

#[cfg(any(test, feature = "csr"))]
fn respond_estado(accept: bool) -> &'static str {
    if accept { "aceptada" } else { "rechazada" }
}

#[cfg(any(test, feature = "csr"))]
fn failed_message(operation: &str, status: u16) -> String {
    format!("{operation} failed: {status}")
}

/// Pull the `detail` field out of a FastAPI error response, falling back to
/// the generic failure message when the body is not in that shape.
#[cfg(feature = "csr")]
async fn error_detail(resp: gloo_net::http::Response, operation: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: String,
    }
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => failed_message(operation, status),
    }
}

/// Fetch the authenticated user from `/profile`.
/// Returns `None` if not authenticated or outside the browser.
pub async fn fetch_profile() -> Option<SessionUser> {
    #[cfg(feature = "csr")]
    {
        #[derive(serde::Deserialize)]
        struct ProfileResponse {
            user: SessionUser,
        }
        let resp = gloo_net::http::Request::get(&api_url("/profile"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ProfileResponse>().await.ok().map(|body| body.user)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Exchange a Google credential for a session via `POST /auth/google`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the
/// credential.
pub async fn login_google(id_token: &str) -> Result<GoogleLogin, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "id_token": id_token });
        let resp = gloo_net::http::Request::post(&api_url("/auth/google"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(resp, "google login").await);
        }
        resp.json::<GoogleLogin>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id_token;
        Err("not available outside the browser".to_owned())
    }
}

/// End the session by calling `POST /logout`.
pub async fn logout() {
    #[cfg(feature = "csr")]
    {
        let _ = gloo_net::http::Request::post(&api_url("/logout"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
    }
}

/// Fetch the sport group catalog from `/grupos`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_groups() -> Result<Vec<Group>, String> {
    #[cfg(feature = "csr")]
    {
        #[derive(serde::Deserialize)]
        struct GroupsResponse {
            grupos: Vec<Group>,
        }
        let resp = gloo_net::http::Request::get(&api_url("/grupos"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("group list", resp.status()));
        }
        let body: GroupsResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.grupos)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the upcoming events of a group from `/grupos/{group_id}/eventos`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_group_events(group_id: i64) -> Result<GroupEvents, String> {
    #[cfg(feature = "csr")]
    {
        let url = api_url(&group_events_endpoint(group_id));
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("event list", resp.status()));
        }
        resp.json::<GroupEvents>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = group_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the enrolled participants of an event from
/// `/eventos/{event_id}/participantes`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_event_participants(event_id: i64) -> Result<Vec<EventParticipant>, String> {
    #[cfg(feature = "csr")]
    {
        #[derive(serde::Deserialize)]
        struct ParticipantsResponse {
            participantes: Vec<EventParticipant>,
        }
        let url = api_url(&event_participants_endpoint(event_id));
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("participant list", resp.status()));
        }
        let body: ParticipantsResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.participantes)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = event_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Join an event via `POST /eventos/{event_id}/unirse`.
///
/// # Errors
///
/// Returns the server's `detail` message when the join is rejected (already
/// enrolled, event full), or a generic message on transport failure.
pub async fn join_event(event_id: i64) -> Result<JoinOutcome, String> {
    #[cfg(feature = "csr")]
    {
        let url = api_url(&join_event_endpoint(event_id));
        let resp = gloo_net::http::Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(resp, "join event").await);
        }
        resp.json::<JoinOutcome>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = event_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Create an event via `POST /eventos`.
///
/// # Errors
///
/// Returns the server's `detail` message when the event is rejected, or a
/// generic message on transport failure.
pub async fn create_event(event: &NewEvent) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&api_url("/eventos"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(event)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(resp, "event creation").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = event;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the session user's hosted and joined events from `/mis-eventos`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_my_events() -> Result<Vec<MyEvent>, String> {
    #[cfg(feature = "csr")]
    {
        #[derive(serde::Deserialize)]
        struct MyEventsResponse {
            eventos: Vec<MyEvent>,
        }
        let resp = gloo_net::http::Request::get(&api_url("/mis-eventos"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("my events", resp.status()));
        }
        let body: MyEventsResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.eventos)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

#[cfg(feature = "csr")]
#[derive(Debug, Deserialize)]
struct RequestsResponse {
    solicitudes: Vec<FriendRequest>,
}

/// Fetch the confirmed friend list from `/amistad/lista`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_friends() -> Result<Vec<Friend>, String> {
    #[cfg(feature = "csr")]
    {
        #[derive(serde::Deserialize)]
        struct FriendsResponse {
            amigos: Vec<Friend>,
        }
        let resp = gloo_net::http::Request::get(&api_url("/amistad/lista"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("friend list", resp.status()));
        }
        let body: FriendsResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.amigos)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch pending requests sent to the session user from `/amistad/solicitudes`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_friend_requests() -> Result<Vec<FriendRequest>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&api_url("/amistad/solicitudes"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("request list", resp.status()));
        }
        let body: RequestsResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.solicitudes)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch pending requests the session user has sent from `/amistad/enviadas`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_sent_requests() -> Result<Vec<FriendRequest>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&api_url("/amistad/enviadas"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("sent request list", resp.status()));
        }
        let body: RequestsResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.solicitudes)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Accept or reject a received request via `POST /amistad/responder/{id}`.
///
/// # Errors
///
/// Returns the server's `detail` message or a generic failure string.
pub async fn respond_friend_request(request_id: i64, accept: bool) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "estado": respond_estado(accept) });
        let url = api_url(&respond_request_endpoint(request_id));
        let resp = gloo_net::http::Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(resp, "request response").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (request_id, accept);
        Err("not available outside the browser".to_owned())
    }
}

/// Withdraw a sent request via `DELETE /amistad/cancelar/{destinatario_id}`.
///
/// # Errors
///
/// Returns the server's `detail` message or a generic failure string.
pub async fn cancel_friend_request(destinatario_id: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = api_url(&cancel_request_endpoint(destinatario_id));
        let resp = gloo_net::http::Request::delete(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(resp, "request cancel").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = destinatario_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Remove a confirmed friend via `DELETE /amistad/eliminar/{google_id}`.
///
/// # Errors
///
/// Returns the server's `detail` message or a generic failure string.
pub async fn remove_friend(google_id: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = api_url(&remove_friend_endpoint(google_id));
        let resp = gloo_net::http::Request::delete(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(resp, "friend removal").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = google_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Send a friendship request via `POST /amistad/solicitar`.
///
/// # Errors
///
/// Returns the server's `detail` message (duplicate request, self request)
/// or a generic failure string.
pub async fn send_friend_request(destinatario_id: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "destinatario_id": destinatario_id });
        let resp = gloo_net::http::Request::post(&api_url("/amistad/solicitar"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(resp, "friend request").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = destinatario_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Accept a request coming from a specific user via
/// `POST /amistad/aceptar/{solicitante_id}`. Used by the profile viewer,
/// which knows the counterpart user rather than the request id.
///
/// # Errors
///
/// Returns the server's `detail` message or a generic failure string.
pub async fn accept_friend_request_from(solicitante_id: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = api_url(&accept_request_endpoint(solicitante_id));
        let resp = gloo_net::http::Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(resp, "request accept").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = solicitante_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the friendship state with another user from `/amistad/estado/{id}`.
/// Returns the raw `estado` string, or `None` on any failure.
pub async fn fetch_friendship_state(user_id: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        #[derive(serde::Deserialize)]
        struct StateResponse {
            estado: String,
        }
        let url = api_url(&friendship_state_endpoint(user_id));
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<StateResponse>().await.ok().map(|body| body.estado)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user_id;
        None
    }
}

/// Fetch the direct-message history with a friend from
/// `/chat/historial/{otro_id}`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_chat_history(otro_id: &str) -> Result<Vec<FriendMessage>, String> {
    #[cfg(feature = "csr")]
    {
        #[derive(serde::Deserialize)]
        struct HistoryResponse {
            mensajes: Vec<FriendMessage>,
        }
        let url = api_url(&chat_history_endpoint(otro_id));
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("chat history", resp.status()));
        }
        let body: HistoryResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.mensajes)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = otro_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Send a direct message via `POST /chat/enviar`.
///
/// # Errors
///
/// Returns the server's `detail` message or a generic failure string.
pub async fn send_friend_message(destinatario_id: &str, mensaje: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({
            "destinatario_id": destinatario_id,
            "mensaje": mensaje,
        });
        let resp = gloo_net::http::Request::post(&api_url("/chat/enviar"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(resp, "message send").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (destinatario_id, mensaje);
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the chat history of an event from `/chat/historial-evento/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_event_chat_history(event_id: i64) -> Result<Vec<EventMessage>, String> {
    #[cfg(feature = "csr")]
    {
        #[derive(serde::Deserialize)]
        struct HistoryResponse {
            mensajes: Vec<EventMessage>,
        }
        let url = api_url(&event_chat_history_endpoint(event_id));
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("event chat history", resp.status()));
        }
        let body: HistoryResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.mensajes)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = event_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch another user's public profile from `/usuarios/{id}`.
/// Returns `None` on any failure.
pub async fn fetch_public_profile(user_id: &str) -> Option<PublicProfile> {
    #[cfg(feature = "csr")]
    {
        #[derive(serde::Deserialize)]
        struct ProfileResponse {
            user: PublicProfile,
        }
        let url = api_url(&public_profile_endpoint(user_id));
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ProfileResponse>().await.ok().map(|body| body.user)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user_id;
        None
    }
}

/// Fetch the ratings received by a user from `/calificaciones/{id}`.
/// Returns `None` on any failure.
pub async fn fetch_ratings(user_id: &str) -> Option<RatingsSummary> {
    #[cfg(feature = "csr")]
    {
        let url = api_url(&ratings_endpoint(user_id));
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<RatingsSummary>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user_id;
        None
    }
}

/// Save the editable profile fields via `POST /profile/update`.
///
/// # Errors
///
/// Returns the server's `detail` message or a generic failure string.
pub async fn update_profile(telefono: &str, region: &str, comuna: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({
            "telefono": telefono,
            "region": region,
            "comuna": comuna,
        });
        let resp = gloo_net::http::Request::post(&api_url("/profile/update"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(resp, "profile update").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (telefono, region, comuna);
        Err("not available outside the browser".to_owned())
    }
}

/// Upload a profile photo via `POST /profile/upload-photo` (multipart field
/// `"file"`). Returns the stored photo URL when the server echoes one.
///
/// # Errors
///
/// Returns an error string if the upload fails.
#[cfg(feature = "csr")]
pub async fn upload_profile_photo(file: &web_sys::File) -> Result<Option<String>, String> {
    let form =
        web_sys::FormData::new().map_err(|_| "form data unavailable".to_owned())?;
    form.append_with_blob("file", file)
        .map_err(|_| "could not attach file".to_owned())?;
    let resp = gloo_net::http::Request::post(&api_url("/profile/upload-photo"))
        .credentials(web_sys::RequestCredentials::Include)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_detail(resp, "photo upload").await);
    }
    #[derive(serde::Deserialize)]
    struct UploadResponse {
        #[serde(default)]
        url: Option<String>,
    }
    let body: UploadResponse = resp.json().await.map_err(|e| e.to_string())?;
    Ok(body.url)
}

/// Fetch the stored profile photo URL from `/profile/foto`.
pub async fn fetch_profile_photo() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        fetch_profile_value("/profile/foto", "foto_perfil").await
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch the stored phone number from `/profile/telefono`.
pub async fn fetch_profile_phone() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        fetch_profile_value("/profile/telefono", "telefono").await
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch the stored home region from `/profile/region`.
pub async fn fetch_profile_region() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        fetch_profile_value("/profile/region", "region").await
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch the stored home comuna from `/profile/comuna`.
pub async fn fetch_profile_comuna() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        fetch_profile_value("/profile/comuna", "comuna").await
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch one profile field endpoint and pull a string value out of its body.
/// Missing or null fields come back as `None` like a failed request does.
#[cfg(feature = "csr")]
async fn fetch_profile_value(path: &str, key: &str) -> Option<String> {
    let resp = gloo_net::http::Request::get(&api_url(path))
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await
        .ok()?;
    if !resp.ok() {
        return None;
    }
    let body: serde_json::Value = resp.json().await.ok()?;
    body.get(key)?.as_str().map(ToOwned::to_owned)
}
