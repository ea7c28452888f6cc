use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use super::chat_models::ChatMessage;
use crate::{
    error::{AppError, Result},
    middleware::Caller,
    state::AppState,
    views::View,
};

/// General chat room page
#[utoipa::path(
    get,
    path = "/comunicacion/chat",
    responses(
        (status = 200, description = "Chat page"),
        (status = 303, description = "Not logged in, redirected to login")
    ),
    tag = "chat",
    security(("bearer_auth" = []))
)]
pub async fn chat_page(
    State(state): State<AppState>,
    Caller(caller): Caller,
) -> Result<Html<String>> {
    let view = View::new("chat.html", "Chat General")
        .with("current_username", caller.username())?;

    state.renderer.render(&view)
}

/// Chat page scoped to one maintenance ticket
#[utoipa::path(
    get,
    path = "/comunicacion/chat/ticket/{ticket_id}",
    params(
        ("ticket_id" = i64, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket chat page"),
        (status = 303, description = "Not logged in, redirected to login"),
        (status = 404, description = "Ticket no encontrado")
    ),
    tag = "chat",
    security(("bearer_auth" = []))
)]
pub async fn ticket_chat_page(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(ticket_id): Path<i64>,
) -> Result<Response> {
    let Some(ticket) = state.ticket_repository.find_by_id(ticket_id).await? else {
        return Ok((StatusCode::NOT_FOUND, "Ticket no encontrado").into_response());
    };

    let view = View::new("chat_ticket.html", format!("Chat - Ticket #{}", ticket_id))
        .with("ticket", ticket)?
        .with("current_username", caller.username())?;

    Ok(state.renderer.render(&view)?.into_response())
}

/// Recent chat history of a ticket, oldest first
#[utoipa::path(
    get,
    path = "/comunicacion/api/chat/ticket/{ticket_id}/mensajes",
    params(
        ("ticket_id" = i64, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Chat history", body = Vec<ChatMessage>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Ticket no encontrado")
    ),
    tag = "chat",
    security(("bearer_auth" = []))
)]
pub async fn ticket_chat_history(
    State(state): State<AppState>,
    Path(ticket_id): Path<i64>,
) -> Result<Json<Vec<ChatMessage>>> {
    state
        .ticket_repository
        .find_by_id(ticket_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ticket no encontrado".to_string()))?;

    let messages = state
        .chat_repository
        .find_by_ticket(ticket_id, state.config.chat_history_limit)
        .await?;

    Ok(Json(messages))
}
