//! HTTP dashboard API for barnsense.
//!
//! Serves the simulated barn fleet as JSON: per-barn readings, computed
//! heat maps (optionally seeded for reproducible output), the weekly
//! trend series, and a health check. The fleet lives in memory; barns can
//! be added but nothing persists across restarts.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::Deserialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use barnsense_core::{
    Barn, HeatMap, Sensor, SensorStatus, VentStatus, build_barn_scene, sample_fleet, sample_trend,
};

/// Shared server state.
struct AppState {
    fleet: Mutex<Vec<Barn>>,
}

#[derive(Deserialize)]
struct HeatMapParams {
    /// Override the barn's base reading, ppm.
    base: Option<f64>,
    /// Seed for reproducible jitter. Unseeded output differs per request.
    seed: Option<u64>,
    /// Include the full scene description in the response.
    scene: Option<bool>,
}

#[derive(Deserialize)]
struct AddBarnRequest {
    name: Option<String>,
    target_temp: Option<f64>,
}

/// Resolve a path segment to a barn: a UUID or a 1-based fleet index.
fn resolve_barn<'a>(fleet: &'a [Barn], key: &str) -> Option<&'a Barn> {
    if let Ok(id) = key.parse::<Uuid>() {
        return fleet.iter().find(|b| b.id == id);
    }
    let index: usize = key.parse().ok()?;
    (1..=fleet.len()).contains(&index).then(|| &fleet[index - 1])
}

fn barn_json(barn: &Barn) -> serde_json::Value {
    serde_json::json!({
        "id": barn.id,
        "name": barn.name,
        "image_url": barn.image_url,
        "current_temp": barn.current_temp,
        "target_temp": barn.target_temp,
        "humidity": barn.humidity,
        "ammonia_ppm": barn.ammonia_ppm,
        "vent": barn.vent,
        "band": barn.band(),
        "sensors": barn.sensors,
    })
}

async fn handle_index(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let fleet = state.fleet.lock().await;
    let n_barns = fleet.len();
    drop(fleet);

    Json(serde_json::json!({
        "name": "barnsense server",
        "version": barnsense_core::VERSION,
        "barns": n_barns,
        "endpoints": {
            "/": "This API index",
            "/barns": { "method": "GET", "description": "List the fleet with safety bands" },
            "/barns/{id}": "Single barn by UUID or 1-based index",
            "/barns/{id}/heatmap": {
                "method": "GET",
                "description": "Computed 5x5x3 heat map for a barn",
                "params": {
                    "base": "Override base reading in ppm",
                    "seed": "u64 seed for reproducible jitter",
                    "scene": "true to include the renderable scene description",
                }
            },
            "/trend": "Weekly safe/warning/critical trend series",
            "/health": "Health check",
        },
        "examples": {
            "fleet": "/barns",
            "worst_barn_heatmap": "/barns/4/heatmap?seed=42",
            "custom_reading": "/barns/1/heatmap?base=80&scene=true",
        }
    }))
}

async fn handle_barns(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let fleet = state.fleet.lock().await;
    let barns: Vec<serde_json::Value> = fleet.iter().map(barn_json).collect();
    Json(serde_json::json!({ "barns": barns, "total": barns.len() }))
}

async fn handle_barn(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    let fleet = state.fleet.lock().await;
    match resolve_barn(&fleet, &key) {
        Some(barn) => (StatusCode::OK, Json(barn_json(barn))),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": format!("Unknown barn: {key}. Use /barns to list the fleet."),
            })),
        ),
    }
}

async fn handle_heatmap(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Query(params): Query<HeatMapParams>,
) -> (StatusCode, Json<serde_json::Value>) {
    let fleet = state.fleet.lock().await;
    let Some(barn) = resolve_barn(&fleet, &key) else {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": format!("Unknown barn: {key}. Use /barns to list the fleet."),
            })),
        );
    };

    let base = params.base.unwrap_or(barn.ammonia_ppm as f64);
    let barn_name = barn.name.clone();
    drop(fleet);

    let map = match params.seed {
        Some(seed) => HeatMap::seeded(base, seed),
        None => HeatMap::generate(base, &mut rand::rng()),
    };
    let map = match map {
        Ok(map) => map,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            );
        }
    };

    let summary = map.summary();
    let scene = params
        .scene
        .unwrap_or(false)
        .then(|| build_barn_scene(&map));

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "barn": barn_name,
            "base_ppm": base,
            "seed": params.seed,
            "summary": summary,
            "zones": map.zones,
            "scene": scene,
        })),
    )
}

async fn handle_add_barn(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddBarnRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut fleet = state.fleet.lock().await;
    let target = req.target_temp.unwrap_or(25.0);
    let name = match req.name.filter(|n| !n.is_empty()) {
        Some(name) => name,
        None => format!("Barn {}", fleet.len() + 1),
    };

    // New barns start quiet: vent off, nominal humidity, trace ammonia.
    let barn = Barn {
        id: Uuid::new_v4(),
        name,
        image_url: format!("barn{}", fleet.len() + 1),
        current_temp: target,
        target_temp: target,
        humidity: 50,
        ammonia_ppm: 5,
        vent: VentStatus::Off,
        sensors: vec![
            Sensor::new("Sensor 1", SensorStatus::On, 16),
            Sensor::new("Sensor 2", SensorStatus::Off, 0),
        ],
    };
    let body = barn_json(&barn);
    fleet.push(barn);

    (StatusCode::CREATED, Json(body))
}

async fn handle_trend() -> Json<serde_json::Value> {
    let trend = sample_trend();
    Json(serde_json::json!({ "readings": trend, "total": trend.len() }))
}

async fn handle_health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let fleet = state.fleet.lock().await;
    let critical = fleet
        .iter()
        .filter(|b| b.band() == barnsense_core::SafetyBand::Critical)
        .count();
    Json(serde_json::json!({
        "status": if critical == 0 { "healthy" } else { "attention" },
        "barns": fleet.len(),
        "critical_barns": critical,
    }))
}

/// Build the axum router.
fn build_router(fleet: Vec<Barn>) -> Router {
    let state = Arc::new(AppState {
        fleet: Mutex::new(fleet),
    });

    Router::new()
        .route("/", get(handle_index))
        .route("/barns", get(handle_barns).post(handle_add_barn))
        .route("/barns/{key}", get(handle_barn))
        .route("/barns/{key}/heatmap", get(handle_heatmap))
        .route("/trend", get(handle_trend))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Run the HTTP dashboard server with the sample fleet.
pub async fn run_server(host: &str, port: u16) -> std::io::Result<()> {
    run_server_with(sample_fleet(), host, port).await
}

/// Run the HTTP dashboard server with an explicit fleet.
pub async fn run_server_with(fleet: Vec<Barn>, host: &str, port: u16) -> std::io::Result<()> {
    let app = build_router(fleet);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(std::io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_barn_by_index() {
        let fleet = sample_fleet();
        assert_eq!(resolve_barn(&fleet, "1").unwrap().name, "Barn 1");
        assert_eq!(resolve_barn(&fleet, "5").unwrap().name, "Barn 5");
        assert!(resolve_barn(&fleet, "0").is_none());
        assert!(resolve_barn(&fleet, "6").is_none());
    }

    #[test]
    fn resolve_barn_by_uuid() {
        let fleet = sample_fleet();
        let id = fleet[2].id.to_string();
        assert_eq!(resolve_barn(&fleet, &id).unwrap().name, "Barn 3");
        let stray = Uuid::new_v4().to_string();
        assert!(resolve_barn(&fleet, &stray).is_none());
    }

    #[test]
    fn resolve_barn_rejects_garbage() {
        let fleet = sample_fleet();
        assert!(resolve_barn(&fleet, "barn-one").is_none());
        assert!(resolve_barn(&fleet, "").is_none());
        assert!(resolve_barn(&fleet, "-1").is_none());
    }

    #[test]
    fn barn_json_carries_band() {
        let fleet = sample_fleet();
        let v = barn_json(&fleet[3]); // Barn 4, 65 ppm
        assert_eq!(v["band"], "critical");
        assert_eq!(v["ammonia_ppm"], 65);
        assert_eq!(v["sensors"].as_array().unwrap().len(), 2);
    }
}
