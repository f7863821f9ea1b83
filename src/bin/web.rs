//! Single binary web server: league snapshot in memory, rendered tables via REST, static front-end from /static.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! LEAGUE_DATA points at an optional JSON snapshot loaded at startup.

use actix_files::Files;
use actix_web::{
    get, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::NaiveDate;
use league_portal::{
    availability_for, category_ranking, player_dashboard, render_match_table, submit_availability,
    CategoryId, LeagueSnapshot, PlayerId, PortalConfig, PortalError, SnapshotPayload,
    TournamentId, WeeklyAvailability,
};
use league_portal::logic::{history_matches, pending_matches, NO_HISTORY_MESSAGE, NO_PENDING_MESSAGE};
use serde::Deserialize;
use std::sync::RwLock;

/// In-memory league data, replaced wholesale by `PUT /api/league`.
type AppState = Data<RwLock<LeagueSnapshot>>;
type Config = Data<PortalConfig>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segment: category id (e.g. /api/categories/{id}/ranking)
#[derive(Deserialize)]
struct CategoryPath {
    id: CategoryId,
}

/// Path segment: player id (e.g. /api/players/{id}/matches)
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

#[derive(Deserialize)]
struct RankingQuery {
    tournament_id: TournamentId,
    #[serde(default)]
    highlight: Option<PlayerId>,
}

#[derive(Deserialize)]
struct TournamentQuery {
    tournament_id: TournamentId,
}

#[derive(Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum MatchView {
    #[default]
    Pending,
    History,
}

#[derive(Deserialize)]
struct MatchesQuery {
    #[serde(default)]
    view: MatchView,
}

#[derive(Deserialize)]
struct AvailabilityBody {
    week_start: NaiveDate,
    #[serde(default)]
    slots: Vec<league_portal::AvailabilitySlot>,
    #[serde(default)]
    note: Option<String>,
}

#[derive(Deserialize)]
struct WeekQuery {
    week_start: NaiveDate,
}

fn error_response(e: &PortalError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        PortalError::InvalidAvailability(_) => HttpResponse::BadRequest().json(body),
        _ => HttpResponse::NotFound().json(body),
    }
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": "lock error" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-portal",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Replace the league snapshot (players, matches, categories, tournaments, metadata).
#[put("/api/league")]
async fn api_put_league(state: AppState, body: Json<SnapshotPayload>) -> HttpResponse {
    let snapshot = LeagueSnapshot::from_payload(body.into_inner());
    let (players, matches) = (snapshot.players.len(), snapshot.matches.len());
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    *g = snapshot;
    log::info!("League snapshot replaced: {} player(s), {} match(es)", players, matches);
    HttpResponse::Ok().json(serde_json::json!({ "players": players, "matches": matches }))
}

/// Ranking table of a category for one tournament.
#[get("/api/categories/{id}/ranking")]
async fn api_ranking(
    state: AppState,
    config: Config,
    path: Path<CategoryPath>,
    query: Query<RankingQuery>,
) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match category_ranking(&g, path.id, query.tournament_id, query.highlight, &config.points) {
        Ok(table) => HttpResponse::Ok().json(table),
        Err(e) => error_response(&e),
    }
}

/// Same ranking as CSV.
#[get("/api/categories/{id}/ranking.csv")]
async fn api_ranking_csv(
    state: AppState,
    config: Config,
    path: Path<CategoryPath>,
    query: Query<TournamentQuery>,
) -> HttpResponse {
    let table = {
        let g = match state.read() {
            Ok(guard) => guard,
            Err(_) => return lock_error(),
        };
        match category_ranking(&g, path.id, query.tournament_id, None, &config.points) {
            Ok(table) => table,
            Err(e) => return error_response(&e),
        }
    };
    let mut buf = Vec::new();
    if let Err(e) = table.write_csv(&mut buf) {
        log::error!("CSV export failed: {}", e);
        return HttpResponse::InternalServerError().json(serde_json::json!({ "error": "CSV export failed" }));
    }
    HttpResponse::Ok().content_type("text/csv; charset=utf-8").body(buf)
}

/// A player's pending or history matches.
#[get("/api/players/{id}/matches")]
async fn api_player_matches(
    state: AppState,
    config: Config,
    path: Path<PlayerPath>,
    query: Query<MatchesQuery>,
) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.player(path.id).is_none() {
        return error_response(&PortalError::PlayerNotFound(path.id));
    }
    let own = g.matches_of_player(path.id);
    let table = match query.view {
        MatchView::Pending => {
            render_match_table(&pending_matches(&own), &g, &config.points, NO_PENDING_MESSAGE)
        }
        MatchView::History => {
            render_match_table(&history_matches(&own), &g, &config.points, NO_HISTORY_MESSAGE)
        }
    };
    HttpResponse::Ok().json(table)
}

#[get("/api/players/{id}/dashboard")]
async fn api_player_dashboard(
    state: AppState,
    config: Config,
    path: Path<PlayerPath>,
    query: Query<TournamentQuery>,
) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match player_dashboard(&g, path.id, query.tournament_id, &config.points) {
        Ok(dashboard) => HttpResponse::Ok().json(dashboard),
        Err(e) => error_response(&e),
    }
}

/// Submit weekly availability (replaces an earlier submission for the same week).
#[put("/api/players/{id}/availability")]
async fn api_put_availability(
    state: AppState,
    path: Path<PlayerPath>,
    body: Json<AvailabilityBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let body = body.into_inner();
    let submission = WeeklyAvailability {
        player_id: path.id,
        week_start: body.week_start,
        slots: body.slots,
        note: body.note,
    };
    match submit_availability(&mut g, submission.clone()) {
        Ok(()) => HttpResponse::Ok().json(submission),
        Err(e) => error_response(&e),
    }
}

#[get("/api/players/{id}/availability")]
async fn api_get_availability(
    state: AppState,
    path: Path<PlayerPath>,
    query: Query<WeekQuery>,
) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match availability_for(&g, path.id, query.week_start) {
        Some(a) => HttpResponse::Ok().json(a),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No availability for this week" })),
    }
}

/// Load the startup snapshot from LEAGUE_DATA, or start empty.
fn initial_snapshot(config: &PortalConfig) -> LeagueSnapshot {
    let Some(path) = config.data_file.as_ref() else {
        return LeagueSnapshot::new();
    };
    let payload = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str::<SnapshotPayload>(&raw).map_err(|e| e.to_string()));
    match payload {
        Ok(payload) => {
            log::info!("Loaded league data from {}", path.display());
            LeagueSnapshot::from_payload(payload)
        }
        Err(e) => {
            log::warn!("Could not load league data from {}: {}", path.display(), e);
            LeagueSnapshot::new()
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = PortalConfig::from_env();
    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(initial_snapshot(&config)));
    let config = Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(config.clone())
            .service(api_health)
            .service(favicon)
            .service(api_put_league)
            .service(api_ranking_csv)
            .service(api_ranking)
            .service(api_player_matches)
            .service(api_player_dashboard)
            .service(api_put_availability)
            .service(api_get_availability)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}
