//! Axum web server with WebSocket streaming for playback.

use std::net::SocketAddr;
use std::sync::Arc;

use algolab_steps::{AlgorithmInput, AlgorithmKind, Step, Trace};
use algolab_structures::{ListOp, QueueOp, StackOp};
use axum::{
    extract::{
        rejection::JsonRejection,
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::error::RecvError;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

use crate::config::VisConfig;
use crate::error::{Error, Result};
use crate::events::{Direction, Frame, RandomFrame, WsCommand, WsEvent};
use crate::lab::Lab;
use crate::player::Player;
use crate::playback::{PlaybackSpeed, PlaybackStatus};
use crate::workbench::{StructureKind, StructureView};

type AppState = Arc<Lab>;

/// JSON body whose rejection is reported through [`crate::Error`].
type JsonBody<T> = std::result::Result<Json<T>, JsonRejection>;

/// Visualization server.
pub struct VisServer {
    lab: AppState,
}

impl VisServer {
    /// Serve an existing lab.
    pub fn new(lab: Lab) -> Self {
        Self { lab: Arc::new(lab) }
    }

    /// Build a lab preloaded at the configured speed.
    pub fn from_config(config: &VisConfig) -> Result<Self> {
        Ok(Self::new(Lab::new(config.speed)?))
    }

    pub fn lab(&self) -> Arc<Lab> {
        self.lab.clone()
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            // Algorithm playback
            .route("/api/algorithms", get(algorithms_handler))
            .route("/api/algorithms/{kind}/generate", post(generate_handler))
            .route("/api/algorithms/{kind}/random", post(random_handler))
            .route("/api/algorithms/{kind}/steps", get(steps_handler))
            .route(
                "/api/algorithms/{kind}/step",
                get(current_step_handler).post(step_handler),
            )
            .route("/api/algorithms/{kind}/playback", get(playback_status_handler))
            .route("/api/algorithms/{kind}/play", post(play_handler))
            .route("/api/algorithms/{kind}/pause", post(pause_handler))
            .route("/api/algorithms/{kind}/rewind", post(rewind_handler))
            .route("/api/algorithms/{kind}/seek", post(seek_handler))
            .route("/api/algorithms/{kind}/speed", post(speed_handler))
            .route("/api/algorithms/{kind}/ws", get(ws_handler))
            // Structure workbench
            .route("/api/structures/stack", get(stack_view_handler).post(stack_handler))
            .route("/api/structures/queue", get(queue_view_handler).post(queue_handler))
            .route("/api/structures/list", get(list_view_handler).post(list_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.lab.clone())
    }

    /// Run the server on `addr`.
    pub async fn serve(self, addr: SocketAddr) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("AlgoLab server running on http://{}", listener.local_addr()?);
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

async fn health_handler() -> &'static str {
    "OK"
}

/// Catalogue entry.
#[derive(Debug, Serialize)]
struct AlgorithmSummary {
    kind: AlgorithmKind,
    title: &'static str,
    total_steps: usize,
}

async fn algorithms_handler(State(lab): State<AppState>) -> Result<Json<Vec<AlgorithmSummary>>> {
    let mut summaries = Vec::new();
    for kind in lab.kinds() {
        let status = lab.player(kind)?.status().await;
        summaries.push(AlgorithmSummary {
            kind,
            title: kind.title(),
            total_steps: status.total_steps,
        });
    }
    Ok(Json(summaries))
}

async fn generate_handler(
    State(lab): State<AppState>,
    Path(slug): Path<String>,
    body: JsonBody<AlgorithmInput>,
) -> Result<Json<Frame>> {
    let kind = parse_kind(&slug)?;
    let Json(input) = body?;
    Ok(Json(lab.generate(kind, &input).await?))
}

async fn random_handler(
    State(lab): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<RandomFrame>> {
    Ok(Json(lab.randomize(parse_kind(&slug)?).await?))
}

fn parse_kind(slug: &str) -> Result<AlgorithmKind> {
    slug.parse().map_err(Error::UnknownAlgorithm)
}

async fn steps_handler(
    State(lab): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Trace>> {
    Ok(Json(lab.player_by_slug(&slug)?.trace().await))
}

async fn current_step_handler(
    State(lab): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Step>> {
    Ok(Json(lab.player_by_slug(&slug)?.current_step().await))
}

async fn playback_status_handler(
    State(lab): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PlaybackStatus>> {
    Ok(Json(lab.player_by_slug(&slug)?.status().await))
}

async fn play_handler(
    State(lab): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Frame>> {
    Ok(Json(lab.player_by_slug(&slug)?.play().await))
}

async fn pause_handler(
    State(lab): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Frame>> {
    Ok(Json(lab.player_by_slug(&slug)?.pause().await))
}

async fn rewind_handler(
    State(lab): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Frame>> {
    Ok(Json(lab.player_by_slug(&slug)?.rewind().await))
}

#[derive(Debug, Deserialize)]
struct StepRequest {
    direction: Direction,
}

async fn step_handler(
    State(lab): State<AppState>,
    Path(slug): Path<String>,
    body: JsonBody<StepRequest>,
) -> Result<Json<Frame>> {
    let Json(req) = body?;
    Ok(Json(lab.player_by_slug(&slug)?.step(req.direction).await))
}

#[derive(Debug, Deserialize)]
struct SeekRequest {
    index: usize,
}

async fn seek_handler(
    State(lab): State<AppState>,
    Path(slug): Path<String>,
    body: JsonBody<SeekRequest>,
) -> Result<Json<Frame>> {
    let Json(req) = body?;
    Ok(Json(lab.player_by_slug(&slug)?.seek(req.index).await))
}

#[derive(Debug, Deserialize)]
struct SpeedRequest {
    speed: PlaybackSpeed,
}

async fn speed_handler(
    State(lab): State<AppState>,
    Path(slug): Path<String>,
    body: JsonBody<SpeedRequest>,
) -> Result<Json<Frame>> {
    let Json(req) = body?;
    Ok(Json(lab.player_by_slug(&slug)?.set_speed(req.speed).await))
}

async fn stack_view_handler(State(lab): State<AppState>) -> Json<StructureView> {
    Json(lab.workbench().lock().await.view(StructureKind::Stack))
}

async fn stack_handler(
    State(lab): State<AppState>,
    body: JsonBody<StackOp<i64>>,
) -> Result<Json<StructureView>> {
    let Json(op) = body?;
    Ok(Json(lab.workbench().lock().await.apply_stack(op)))
}

async fn queue_view_handler(State(lab): State<AppState>) -> Json<StructureView> {
    Json(lab.workbench().lock().await.view(StructureKind::Queue))
}

async fn queue_handler(
    State(lab): State<AppState>,
    body: JsonBody<QueueOp<i64>>,
) -> Result<Json<StructureView>> {
    let Json(op) = body?;
    Ok(Json(lab.workbench().lock().await.apply_queue(op)))
}

async fn list_view_handler(State(lab): State<AppState>) -> Json<StructureView> {
    Json(lab.workbench().lock().await.view(StructureKind::List))
}

async fn list_handler(
    State(lab): State<AppState>,
    body: JsonBody<ListOp<i64>>,
) -> Result<Json<StructureView>> {
    let Json(op) = body?;
    Ok(Json(lab.workbench().lock().await.apply_list(op)?))
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(lab): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let player = lab.player_by_slug(&slug)?.clone();
    Ok(ws.on_upgrade(move |socket| handle_ws(socket, player)))
}

/// Stream every frame of `player` and apply incoming commands.
async fn handle_ws(mut socket: WebSocket, player: Player) {
    let mut frames = player.subscribe();
    debug!("WebSocket client connected");

    if let Err(e) = send_event(&mut socket, WsEvent::Frame(player.frame().await)).await {
        warn!("Failed to send initial frame: {}", e);
        return;
    }

    loop {
        tokio::select! {
            frame = frames.recv() => {
                match frame {
                    Ok(frame) => {
                        if let Err(e) = send_event(&mut socket, WsEvent::Frame(frame)).await {
                            warn!("Failed to send frame: {}", e);
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        debug!("WebSocket client lagged by {} frames", skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(reply) = handle_text(&player, text.as_str()).await {
                            if let Err(e) = send_event(&mut socket, reply).await {
                                warn!("Failed to send error: {}", e);
                                break;
                            }
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        debug!("WebSocket client disconnected");
                        break;
                    }
                    Some(Err(e)) => {
                        warn!("WebSocket error: {}", e);
                        break;
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Apply one text message from a client.
///
/// Commands publish their frame through the player's subscription, so only
/// an unparseable message produces a direct reply.
async fn handle_text(player: &Player, text: &str) -> Option<WsEvent> {
    match serde_json::from_str::<WsCommand>(text) {
        Ok(cmd) => {
            apply_command(player, cmd).await;
            None
        }
        Err(e) => {
            debug!("Rejected WebSocket message: {}", e);
            Some(WsEvent::Error {
                message: e.to_string(),
            })
        }
    }
}

async fn apply_command(player: &Player, cmd: WsCommand) {
    match cmd {
        WsCommand::Play => player.play().await,
        WsCommand::Pause => player.pause().await,
        WsCommand::Rewind => player.rewind().await,
        WsCommand::Forward => player.step_forward().await,
        WsCommand::Backward => player.step_backward().await,
        WsCommand::Seek { index } => player.seek(index).await,
        WsCommand::Speed { speed } => player.set_speed(speed).await,
    };
}

async fn send_event(socket: &mut WebSocket, event: WsEvent) -> std::result::Result<(), axum::Error> {
    let json = serde_json::to_string(&event).map_err(axum::Error::new)?;
    socket.send(Message::Text(json.into())).await
}
