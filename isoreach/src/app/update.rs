use geojson::{FeatureCollection, JsonObject};
use isoreach_core::{
    containment::mark_containment,
    model::{points_from_collection, Point},
    reachability::{aggregate, RangeFilter},
    util::bbox::feature_collection_bbox,
};
use itertools::Itertools;

use super::{
    demo_layers::{
        FIT_PADDING, POLYGON_SOURCE, REACHABLE_LAYER, ROUTE_SOURCE, SOURCES_SOURCE,
        TARGETS_SOURCE, UNREACHABLE_LAYER,
    },
    AppError, AppEvent, AppState, DatasetConfig, DemoState, Effect,
};
use crate::{client::GeoService, render::MapRenderer};

/// shown when the route service finds no path between the markers
pub const NO_ROUTE_MESSAGE: &str = "no route found";

/// applies one event and performs its requests and map updates.
///
/// failures never escape: they are logged, recorded in [`AppState::error`]
/// and shown on the map. events are handled one at a time, so the map
/// always reflects the latest event.
pub async fn update<S, R>(
    mut state: AppState,
    event: &AppEvent,
    service: &S,
    renderer: &mut R,
) -> AppState
where
    S: GeoService,
    R: MapRenderer,
{
    renderer.set_progress(true);
    let result = handle(&mut state, event, service, renderer).await;
    renderer.set_progress(false);
    match result {
        Ok(()) => state.error = None,
        Err(e) => {
            log::error!("{} demo failed handling {event:?}: {e}", state.demo.name());
            let message = e.to_string();
            if let Err(render_error) = renderer.show_message(&message) {
                log::error!("could not display error message: {render_error}");
            }
            state.message = Some(message.clone());
            state.error = Some(message);
        }
    }
    state
}

/// loads the map, then applies each event in order.
///
/// # Returns
///
/// the final state along with the error message of every event that failed
pub async fn run_events<S, R>(
    mut state: AppState,
    events: &[AppEvent],
    service: &S,
    renderer: &mut R,
) -> (AppState, Vec<String>)
where
    S: GeoService,
    R: MapRenderer,
{
    let mut failures = vec![];
    let load = if state.loaded {
        None
    } else {
        Some(&AppEvent::Load)
    };
    let script = events.iter().filter(|e| **e != AppEvent::Load);
    for event in load.into_iter().chain(script) {
        state = update(state, event, service, renderer).await;
        if let Some(error) = &state.error {
            failures.push(error.clone());
        }
    }
    log::info!(
        "{} demo handled {} events with {} failures",
        state.demo.name(),
        events.len(),
        failures.len()
    );
    (state, failures)
}

async fn handle<S, R>(
    state: &mut AppState,
    event: &AppEvent,
    service: &S,
    renderer: &mut R,
) -> Result<(), AppError>
where
    S: GeoService,
    R: MapRenderer,
{
    let effect = state.apply(event)?;
    if state.message.take().is_some() {
        renderer.clear_message()?;
    }
    match effect {
        Effect::Load => {
            for layer in state.demo.layers() {
                renderer.add_layer(layer)?;
            }
            refresh(state, true, service, renderer).await
        }
        Effect::Request { reload_datasets } => {
            refresh(state, reload_datasets, service, renderer).await
        }
        Effect::Filter => match &state.demo {
            DemoState::TravelTimes { minutes, .. } => apply_range(*minutes, renderer),
            other => Err(AppError::InvalidEvent(format!(
                "the {} demo has no travel time range",
                other.name()
            ))),
        },
    }
}

/// requests the demo data and pushes it to the map
async fn refresh<S, R>(
    state: &mut AppState,
    reload_datasets: bool,
    service: &S,
    renderer: &mut R,
) -> Result<(), AppError>
where
    S: GeoService,
    R: MapRenderer,
{
    match &mut state.demo {
        DemoState::Polygon { markers, options }
        | DemoState::PolygonIntersection { markers, options } => {
            let polygons = service.polygons(markers, options).await?;
            show(POLYGON_SOURCE, polygons, true, renderer)
        }
        DemoState::Route {
            source,
            target,
            options,
        } => {
            let routes = service
                .routes(
                    std::slice::from_ref(source),
                    std::slice::from_ref(target),
                    options,
                )
                .await?;
            match routes.into_iter().next() {
                Some(route) => show(ROUTE_SOURCE, route, true, renderer),
                None => {
                    log::info!("no route between '{}' and '{}'", source.id, target.id);
                    renderer.set_source_data(ROUTE_SOURCE, empty_collection())?;
                    renderer.show_message(NO_ROUTE_MESSAGE)?;
                    state.message = Some(NO_ROUTE_MESSAGE.to_string());
                    Ok(())
                }
            }
        }
        DemoState::TravelTimes {
            options,
            minutes,
            sources,
            targets,
        } => {
            if reload_datasets || sources.is_empty() {
                let (s, t) = load_datasets(&state.datasets, service).await?;
                *sources = s;
                *targets = t;
                renderer.set_source_data(SOURCES_SOURCE, point_collection(sources))?;
            }
            let records = service.reachability(sources, targets, options).await?;
            let aggregation = aggregate(targets, &records, options.unreachable_sentinel())?;
            if RangeFilter::from_minutes(*minutes).is_within(aggregation.sentinel()) {
                return Err(AppError::InvalidEvent(format!(
                    "a {minutes} minute range would show unreached targets, search cutoff is {} s",
                    options.max_edge_weight
                )));
            }
            let n_reached = targets
                .iter()
                .filter(|t| aggregation.is_reached(&t.id))
                .count();
            log::info!("{n_reached} of {} targets reached", targets.len());
            show(
                TARGETS_SOURCE,
                aggregation.to_feature_collection(targets),
                reload_datasets,
                renderer,
            )?;
            apply_range(*minutes, renderer)
        }
        DemoState::PolygonFiltering {
            options,
            sources,
            targets,
            ..
        } => {
            if reload_datasets || sources.is_empty() {
                let (s, t) = load_datasets(&state.datasets, service).await?;
                *sources = s;
                *targets = t;
                renderer.set_source_data(SOURCES_SOURCE, point_collection(sources))?;
            }
            let polygons = service.polygons(sources, options).await?;
            let marked = mark_containment(targets, &polygons)?;
            renderer.set_source_data(POLYGON_SOURCE, polygons)?;
            show(TARGETS_SOURCE, marked, reload_datasets, renderer)
        }
    }
}

/// publishes a source, optionally fitting the viewport to it
fn show<R: MapRenderer>(
    source: &str,
    data: FeatureCollection,
    fit: bool,
    renderer: &mut R,
) -> Result<(), AppError> {
    let bounds = if fit {
        feature_collection_bbox(&data)?
    } else {
        None
    };
    renderer.set_source_data(source, data)?;
    if let Some(bounds) = bounds {
        renderer.fit_bounds(bounds, FIT_PADDING)?;
    }
    Ok(())
}

fn apply_range<R: MapRenderer>(minutes: u32, renderer: &mut R) -> Result<(), AppError> {
    let range = RangeFilter::from_minutes(minutes);
    renderer.set_filter(REACHABLE_LAYER, range.reachable_filter())?;
    renderer.set_filter(UNREACHABLE_LAYER, range.unreachable_filter())?;
    Ok(())
}

async fn load_datasets<S: GeoService>(
    datasets: &DatasetConfig,
    service: &S,
) -> Result<(Vec<Point>, Vec<Point>), AppError> {
    let sources = points_from_collection(&service.fetch_dataset(&datasets.sources_url).await?)?;
    let targets = points_from_collection(&service.fetch_dataset(&datasets.targets_url).await?)?;
    log::info!(
        "loaded {} sources and {} targets",
        sources.len(),
        targets.len()
    );
    Ok((sources, targets))
}

fn point_collection(points: &[Point]) -> FeatureCollection {
    let features = points
        .iter()
        .map(|p| {
            let mut properties = JsonObject::new();
            properties.insert(String::from("id"), p.id.clone().into());
            p.to_feature(properties)
        })
        .collect_vec();
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn empty_collection() -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: vec![],
        foreign_members: None,
    }
}
