use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use catalog::{Area, CardSets, Neighborhood};
use formats::{RegionFile, RegionFileError};
use layers::ViewMode;
use map::{Command, MapProps, RegionMap};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_fixture_dir);
    info!(dir = %data_dir.display(), "loading map data");

    match run(&data_dir) {
        Ok(()) => {}
        Err(e) => {
            tracing::error!(error = %e, "viewer failed");
            std::process::exit(1);
        }
    }
}

fn default_fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn run(dir: &Path) -> Result<(), Box<dyn Error>> {
    let mut region_map = build_map(dir, ViewMode::Areas)?;

    // The fetch is synchronous here; the ticket dance still exercises the
    // same lifecycle the browser host uses.
    let ticket = region_map.begin_load();
    let result = read_region_file(&dir.join("neighborhoods.geojson"));
    if let Err(e) = &result {
        warn!(error = %e, "polygon asset failed to load; rendering an empty map");
    }
    region_map.finish_load(ticket, result);

    info!(
        regions = region_map.regions().features.len(),
        labels = region_map.labels().len(),
        "map ready"
    );
    report_commands(&mut region_map);

    // A short pointer script against the first rendered region.
    let first_key = region_map
        .regions()
        .features
        .first()
        .map(|f| f.region_key.clone());
    if let Some(key) = first_key {
        region_map.on_pointer_move(Some(&key));
        region_map.on_click(Some(&key));
        match region_map.panel() {
            Some(panel) => info!(region = %key, title = %panel.title(), "panel open"),
            None => info!(region = %key, "selected; no card data for panel"),
        }
        report_commands(&mut region_map);

        region_map.on_click(None);
        info!(idle = region_map.interaction().is_idle(), "background click");
        report_commands(&mut region_map);
    }

    Ok(())
}

fn build_map(dir: &Path, mode: ViewMode) -> Result<RegionMap, Box<dyn Error>> {
    let areas: Vec<Area> = serde_json::from_str(&fs::read_to_string(dir.join("areas.json"))?)?;
    let neighborhoods: Vec<Neighborhood> =
        serde_json::from_str(&fs::read_to_string(dir.join("neighborhoods.json"))?)?;

    let mut props = MapProps::new(mode, areas, neighborhoods);
    // Card data is optional: the map renders without it, panels just stay
    // empty.
    match fs::read_to_string(dir.join("cards.json")) {
        Ok(payload) => props.cards = serde_json::from_str::<CardSets>(&payload)?,
        Err(e) => warn!(error = %e, "no card data; info panels will be empty"),
    }
    Ok(RegionMap::new(props))
}

fn read_region_file(path: &Path) -> Result<Vec<formats::RawRegionFeature>, RegionFileError> {
    let payload = fs::read_to_string(path).map_err(|e| RegionFileError::Io(e.to_string()))?;
    let file = RegionFile::from_geojson_str(&payload)?;
    if file.skipped > 0 {
        warn!(skipped = file.skipped, "asset rows off contract");
    }
    Ok(file.features)
}

fn report_commands(region_map: &mut RegionMap) {
    for command in region_map.drain_commands() {
        match command {
            Command::FitViewport(fit) => info!(
                min_lng = fit.bounds.min.lng,
                min_lat = fit.bounds.min.lat,
                max_lng = fit.bounds.max.lng,
                max_lat = fit.bounds.max.lat,
                padding_px = fit.options.padding_px,
                "fit viewport"
            ),
            Command::SetCursor(cursor) => info!(?cursor, "cursor"),
            Command::Notify(n) => info!(?n, "notify host"),
        }
    }
}
