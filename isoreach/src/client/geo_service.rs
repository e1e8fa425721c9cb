use geojson::FeatureCollection;
use isoreach_core::model::{Point, TravelRecord};

use super::{ClientError, PolygonOptions, ReachabilityOptions, RouteOptions};

/// the remote operations the demos depend on. implemented by
/// [`super::TargomoClient`]; the app is generic over it so event handling can
/// run without a network.
#[allow(async_fn_in_trait)]
pub trait GeoService {
    /// isochrone polygons around the sources, one band per travel edge weight
    async fn polygons(
        &self,
        sources: &[Point],
        options: &PolygonOptions,
    ) -> Result<FeatureCollection, ClientError>;

    /// routes from each source to each target. empty when no route exists.
    async fn routes(
        &self,
        sources: &[Point],
        targets: &[Point],
        options: &RouteOptions,
    ) -> Result<Vec<FeatureCollection>, ClientError>;

    /// travel time records for the targets, possibly several per target
    async fn reachability(
        &self,
        sources: &[Point],
        targets: &[Point],
        options: &ReachabilityOptions,
    ) -> Result<Vec<TravelRecord>, ClientError>;

    /// a static GeoJSON point dataset
    async fn fetch_dataset(&self, url: &str) -> Result<FeatureCollection, ClientError>;
}
