//! Wire DTOs for the backend HTTP/WebSocket boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror backend payload keys (Spanish where the
//! server speaks Spanish) so serde stays lossless and call sites remain
//! schema-driven. Parsing of timestamps into calendar types happens at the
//! display layer, not here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated user as returned by `/profile` and `/auth/google`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Google account identifier, used as the user id everywhere.
    pub id: String,
    /// Account email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar URL, if the account has one.
    pub picture: Option<String>,
}

/// Response to the Google credential exchange at `POST /auth/google`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoogleLogin {
    /// Success marker.
    #[serde(default)]
    pub ok: bool,
    /// Whether this account was just created, which routes to profile setup.
    #[serde(rename = "firstLogin", default)]
    pub first_login: bool,
    /// The signed-in user.
    pub user: SessionUser,
}

/// A sport group from the static catalog at `/grupos`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Group identifier.
    pub id: i64,
    /// Group name (e.g. `"Fútbol"`).
    pub nombre: String,
    /// Short description shown on the group card.
    #[serde(default)]
    pub descripcion: String,
}

/// An event as listed under a group by `/grupos/:id/eventos`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupEvent {
    /// Event identifier.
    pub evento_id: i64,
    /// Event name.
    pub nombre: String,
    /// Long-form description.
    #[serde(default)]
    pub descripcion: String,
    /// Start timestamp as an ISO-8601 string.
    pub fecha_hora: String,
    /// Venue name.
    pub lugar: String,
    /// Entry price; zero means free.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub precio: i64,
    /// Comma-joined participant names as the server renders them.
    #[serde(default)]
    pub participantes: String,
    /// Venue latitude.
    pub latitud: f64,
    /// Venue longitude.
    pub longitud: f64,
}

/// Envelope returned by `/grupos/:id/eventos`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupEvents {
    /// Group display name for the list header.
    #[serde(default)]
    pub grupo_nombre: String,
    /// Upcoming events in the group.
    pub eventos: Vec<GroupEvent>,
}

/// An event the session user hosts or participates in, from `/mis-eventos`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MyEvent {
    /// Event identifier.
    pub evento_id: i64,
    /// Event name.
    pub nombre: String,
    /// Start timestamp as an ISO-8601 string.
    pub fecha_hora: String,
    /// Long-form description.
    #[serde(default)]
    pub descripcion: String,
    /// Relationship to the event: `"anfitrion"` or `"participante"`.
    pub tipo: String,
    /// Venue name.
    pub lugar: String,
    /// Venue latitude.
    pub latitud: f64,
    /// Venue longitude.
    pub longitud: f64,
    /// Entry price; zero means free.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub precio: i64,
    /// Current number of enrolled participants.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub inscritos: i64,
    /// Participant cap.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub max_participantes: i64,
}

/// Payload for creating an event via `POST /eventos`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    /// Event name.
    pub nombre: String,
    /// Long-form description.
    pub descripcion: String,
    /// Start timestamp in `datetime-local` form (`YYYY-MM-DDTHH:MM`).
    pub fecha_hora: String,
    /// Venue name.
    pub lugar: String,
    /// Participant cap.
    pub max_participantes: i64,
    /// Group the event belongs to.
    pub grupo_id: i64,
    /// Entry price; zero means free.
    pub precio: i64,
    /// Venue latitude.
    pub latitud: f64,
    /// Venue longitude.
    pub longitud: f64,
}

/// Result of joining an event via `POST /eventos/:id/unirse`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JoinOutcome {
    /// Human-readable outcome shown to the user.
    pub message: String,
    /// Enrollment count after the join.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub participantes_actuales: i64,
    /// Participant cap.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub max_participantes: i64,
}

/// A participant entry from `/eventos/:id/participantes`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventParticipant {
    /// Google account identifier.
    pub google_id: String,
    /// Display name.
    pub nombre: String,
    /// Avatar URL, if any.
    #[serde(default)]
    pub foto_perfil: Option<String>,
}

/// A confirmed friend from `/amistad/lista`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    /// Google account identifier.
    pub google_id: String,
    /// Display name.
    pub nombre: String,
    /// Avatar URL, if any.
    #[serde(default)]
    pub foto_perfil: Option<String>,
}

/// A friendship request row from `/amistad/solicitudes` or `/amistad/enviadas`.
///
/// The server fills the name/photo pair for whichever side the caller is not;
/// both pairs stay optional here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FriendRequest {
    /// Request identifier.
    pub id: i64,
    /// Sender's Google account identifier.
    pub solicitante_id: String,
    /// Recipient's Google account identifier.
    pub destinatario_id: String,
    /// Request status as stored server-side (e.g. `"pendiente"`).
    pub estado: String,
    /// Creation timestamp as an ISO-8601 string.
    pub fecha_solicitud: String,
    /// Sender display name, when the caller is the recipient.
    #[serde(default)]
    pub nombre_solicitante: Option<String>,
    /// Sender avatar URL, when the caller is the recipient.
    #[serde(default)]
    pub foto_solicitante: Option<String>,
    /// Recipient display name, when the caller is the sender.
    #[serde(default)]
    pub nombre_destinatario: Option<String>,
    /// Recipient avatar URL, when the caller is the sender.
    #[serde(default)]
    pub foto_destinatario: Option<String>,
}

/// A direct message from `/chat/historial/:otro_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FriendMessage {
    /// Sender's Google account identifier.
    pub remitente_id: String,
    /// Recipient's Google account identifier.
    pub destinatario_id: String,
    /// Message body.
    pub mensaje: String,
    /// Send timestamp as an ISO-8601 string.
    pub fecha_envio: String,
}

/// An event chat message, from history or a live WebSocket frame.
///
/// History rows omit `evento_id`; live frames include it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventMessage {
    /// Event the message belongs to, present on live frames only.
    #[serde(default)]
    pub evento_id: Option<i64>,
    /// Sender's Google account identifier.
    pub remitente_id: String,
    /// Message body.
    pub mensaje: String,
    /// Send timestamp as an ISO-8601 string.
    pub fecha_envio: String,
}

/// Another user's public profile from `/usuarios/:id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublicProfile {
    /// Display name.
    pub nombre: String,
    /// Account email.
    pub email: String,
    /// Avatar URL, if any.
    #[serde(default)]
    pub foto_perfil: Option<String>,
    /// Home region.
    #[serde(default)]
    pub region: Option<String>,
    /// Home comuna.
    #[serde(default)]
    pub comuna: Option<String>,
    /// Age in years.
    #[serde(default)]
    pub edad: Option<i64>,
    /// Favorite sport.
    #[serde(default)]
    pub deporte_favorito: Option<String>,
    /// Free-form self description.
    #[serde(default)]
    pub descripcion: Option<String>,
    /// Registration timestamp as an ISO-8601 string.
    #[serde(default)]
    pub fecha_registro: Option<String>,
    /// University or institute.
    #[serde(default)]
    pub universidad_o_instituto: Option<String>,
    /// Degree or career.
    #[serde(default)]
    pub carrera: Option<String>,
}

/// A single rating left for a user after an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Rating identifier.
    pub id: i64,
    /// Star count, 1 to 5.
    pub estrellas: i64,
    /// Optional free-form comment.
    #[serde(default)]
    pub comentario: Option<String>,
    /// Creation timestamp as an ISO-8601 string.
    pub fecha_calificacion: String,
    /// Event the rating refers to.
    pub evento_id: i64,
    /// Rater display name.
    pub evaluador_nombre: String,
    /// Rater avatar URL, if any.
    #[serde(default)]
    pub evaluador_foto: Option<String>,
}

/// Aggregate ratings for a user from `/calificaciones/:id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingsSummary {
    /// Success marker.
    #[serde(default)]
    pub ok: bool,
    /// User the ratings refer to.
    pub evaluado_id: String,
    /// Average star count across all ratings.
    pub promedio: f64,
    /// Number of ratings received.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub total_calificaciones: i64,
    /// Individual ratings, newest first as the server orders them.
    #[serde(default)]
    pub calificaciones: Vec<Rating>,
}

/// Deserialize an `i64` from a JSON number that may arrive as a float.
///
/// Numeric database columns cross the JSON boundary as either form depending
/// on the column type, so integral fields accept both.
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
