use super::{AppError, AppEvent, DatasetConfig, DemoState, MAX_RANGE_MINUTES};

/// what [`super::update`] must do after an event has been applied to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// add the demo layers, load datasets and run the first request
    Load,
    /// re-run the demo request, optionally re-downloading the datasets first
    Request { reload_datasets: bool },
    /// only the layer filters changed
    Filter,
}

/// everything the demos used to keep in globals
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub demo: DemoState,
    pub datasets: DatasetConfig,
    pub loaded: bool,
    /// message currently shown on the map
    pub message: Option<String>,
    /// the failure of the most recent event, if it failed
    pub error: Option<String>,
}

impl AppState {
    pub fn new(demo: DemoState, datasets: DatasetConfig) -> AppState {
        AppState {
            demo,
            datasets,
            loaded: false,
            message: None,
            error: None,
        }
    }

    /// applies the event to the demo markers and options.
    ///
    /// # Returns
    ///
    /// the follow-up work for the event, or an error if the event does not
    /// apply to this demo
    pub fn apply(&mut self, event: &AppEvent) -> Result<Effect, AppError> {
        if !self.loaded && *event != AppEvent::Load {
            return Err(AppError::InvalidEvent(format!(
                "{event:?} received before the map loaded"
            )));
        }
        let name = self.demo.name();
        match event {
            AppEvent::Load if self.loaded => Err(AppError::InvalidEvent(String::from(
                "the map has already loaded",
            ))),
            AppEvent::Load => {
                if let Some(minutes) = self.demo.range_minutes() {
                    validate_range(minutes)?;
                }
                self.loaded = true;
                Ok(Effect::Load)
            }
            AppEvent::MarkerMoved { index, lng, lat } => {
                validate_lng_lat(*lng, *lat)?;
                let marker = match &mut self.demo {
                    DemoState::Polygon { markers, .. }
                    | DemoState::PolygonIntersection { markers, .. } => markers.get_mut(*index),
                    DemoState::Route { source, .. } if *index == 0 => Some(source),
                    DemoState::Route { target, .. } if *index == 1 => Some(target),
                    DemoState::Route { .. } => None,
                    DemoState::TravelTimes { .. } | DemoState::PolygonFiltering { .. } => {
                        return Err(AppError::InvalidEvent(format!(
                            "the {name} demo has no markers"
                        )))
                    }
                };
                let marker = marker.ok_or_else(|| {
                    AppError::InvalidEvent(format!("the {name} demo has no marker {index}"))
                })?;
                *marker = marker.moved_to(*lng, *lat);
                log::debug!("marker '{}' moved to [{lng}, {lat}]", marker.id);
                Ok(Effect::Request {
                    reload_datasets: false,
                })
            }
            AppEvent::TravelTypeSelected { travel_type } => {
                log::info!("travel type updated to {travel_type}");
                match &mut self.demo {
                    DemoState::Polygon { options, .. }
                    | DemoState::PolygonIntersection { options, .. }
                    | DemoState::PolygonFiltering { options, .. } => {
                        options.travel_type = *travel_type;
                        Ok(Effect::Request {
                            reload_datasets: false,
                        })
                    }
                    DemoState::Route { options, .. } => {
                        options.travel_type = *travel_type;
                        Ok(Effect::Request {
                            reload_datasets: false,
                        })
                    }
                    DemoState::TravelTimes { options, .. } => {
                        options.travel_type = *travel_type;
                        Ok(Effect::Request {
                            reload_datasets: true,
                        })
                    }
                }
            }
            AppEvent::IntersectionModeSelected { mode } => match &mut self.demo {
                DemoState::PolygonIntersection { options, .. } => {
                    log::info!("intersection mode updated to {mode}");
                    options.intersection_mode = *mode;
                    Ok(Effect::Request {
                        reload_datasets: false,
                    })
                }
                _ => Err(AppError::InvalidEvent(format!(
                    "the {name} demo has no intersection mode"
                ))),
            },
            AppEvent::RangeSelected { minutes } => {
                validate_range(*minutes)?;
                match &mut self.demo {
                    DemoState::TravelTimes { minutes: m, .. } => {
                        *m = *minutes;
                        Ok(Effect::Filter)
                    }
                    DemoState::PolygonFiltering {
                        minutes: m,
                        options,
                        ..
                    } => {
                        *m = *minutes;
                        options.travel_edge_weights = vec![minutes * 60];
                        Ok(Effect::Request {
                            reload_datasets: false,
                        })
                    }
                    _ => Err(AppError::InvalidEvent(format!(
                        "the {name} demo has no travel time range"
                    ))),
                }
            }
        }
    }
}

/// ranges are capped at the reachability search cutoff, so the unreached
/// sentinel always falls in the unreachable layer
fn validate_range(minutes: u32) -> Result<(), AppError> {
    if (1..=MAX_RANGE_MINUTES).contains(&minutes) {
        Ok(())
    } else {
        Err(AppError::InvalidEvent(format!(
            "range of {minutes} minutes is outside [1,{MAX_RANGE_MINUTES}]"
        )))
    }
}

fn validate_lng_lat(lng: f64, lat: f64) -> Result<(), AppError> {
    if !(-180.0..=180.0).contains(&lng) || !(-90.0..=90.0).contains(&lat) {
        Err(AppError::InvalidEvent(format!(
            "marker location [{lng}, {lat}] is not a valid WGS84 coordinate"
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppState, Effect};
    use crate::app::{AppError, AppEvent, DatasetConfig, DemoState};
    use isoreach_core::model::{IntersectionMode, Point, TravelType};

    fn loaded(demo: DemoState) -> AppState {
        let mut state = AppState::new(demo, DatasetConfig::default());
        assert_eq!(state.apply(&AppEvent::Load).unwrap(), Effect::Load);
        state
    }

    #[test]
    fn test_events_before_load_are_rejected() {
        let mut state = AppState::new(
            DemoState::polygon(13.37, 52.51, TravelType::Bike),
            DatasetConfig::default(),
        );
        let result = state.apply(&AppEvent::TravelTypeSelected {
            travel_type: TravelType::Walk,
        });
        assert!(matches!(result, Err(AppError::InvalidEvent(_))));
    }

    #[test]
    fn test_route_marker_indices() {
        let mut state = loaded(DemoState::route(
            (4.33, 50.84),
            (4.39, 50.84),
            TravelType::Bike,
        ));
        state
            .apply(&AppEvent::MarkerMoved {
                index: 1,
                lng: 4.40,
                lat: 50.85,
            })
            .unwrap();
        match &state.demo {
            DemoState::Route { source, target, .. } => {
                assert_eq!(source, &Point::new("source", 4.33, 50.84));
                assert_eq!(target, &Point::new("target", 4.40, 50.85));
            }
            other => panic!("unexpected demo {other:?}"),
        }
        let result = state.apply(&AppEvent::MarkerMoved {
            index: 2,
            lng: 0.0,
            lat: 0.0,
        });
        assert!(matches!(result, Err(AppError::InvalidEvent(_))));
    }

    #[test]
    fn test_marker_out_of_range_coordinate() {
        let mut state = loaded(DemoState::polygon(13.37, 52.51, TravelType::Bike));
        let result = state.apply(&AppEvent::MarkerMoved {
            index: 0,
            lng: 13.0,
            lat: 95.0,
        });
        assert!(matches!(result, Err(AppError::InvalidEvent(_))));
    }

    #[test]
    fn test_range_updates_polygon_filtering_band() {
        let mut state = loaded(DemoState::polygon_filtering(30));
        let effect = state.apply(&AppEvent::RangeSelected { minutes: 12 }).unwrap();
        assert_eq!(
            effect,
            Effect::Request {
                reload_datasets: false
            }
        );
        match &state.demo {
            DemoState::PolygonFiltering {
                options, minutes, ..
            } => {
                assert_eq!(*minutes, 12);
                assert_eq!(options.travel_edge_weights, vec![720]);
            }
            other => panic!("unexpected demo {other:?}"),
        }
    }

    #[test]
    fn test_range_bounds() {
        let mut state = loaded(DemoState::travel_times(30, TravelType::Walk));
        for minutes in [0, 31, u32::MAX] {
            let result = state.apply(&AppEvent::RangeSelected { minutes });
            assert!(matches!(result, Err(AppError::InvalidEvent(_))));
        }
        assert_eq!(
            state.apply(&AppEvent::RangeSelected { minutes: 30 }).unwrap(),
            Effect::Filter
        );

        let mut state = AppState::new(DemoState::polygon_filtering(45), DatasetConfig::default());
        let result = state.apply(&AppEvent::Load);
        assert!(matches!(result, Err(AppError::InvalidEvent(_))));
        assert!(!state.loaded);
    }

    #[test]
    fn test_intersection_mode_only_for_several_sources() {
        let mut state = loaded(DemoState::polygon(13.37, 52.51, TravelType::Bike));
        let result = state.apply(&AppEvent::IntersectionModeSelected {
            mode: IntersectionMode::Average,
        });
        assert!(matches!(result, Err(AppError::InvalidEvent(_))));

        let mut state = loaded(DemoState::polygon_intersection(
            &[(13.40, 52.51), (13.37, 52.50)],
            TravelType::Walk,
            IntersectionMode::Union,
        ));
        state
            .apply(&AppEvent::IntersectionModeSelected {
                mode: IntersectionMode::Average,
            })
            .unwrap();
        match &state.demo {
            DemoState::PolygonIntersection { options, .. } => {
                assert_eq!(options.intersection_mode, IntersectionMode::Average)
            }
            other => panic!("unexpected demo {other:?}"),
        }
    }

    #[test]
    fn test_travel_type_reloads_travel_time_datasets() {
        let mut state = loaded(DemoState::travel_times(30, TravelType::Walk));
        let effect = state
            .apply(&AppEvent::TravelTypeSelected {
                travel_type: TravelType::Bike,
            })
            .unwrap();
        assert_eq!(
            effect,
            Effect::Request {
                reload_datasets: true
            }
        );
        assert_eq!(
            state.apply(&AppEvent::RangeSelected { minutes: 10 }).unwrap(),
            Effect::Filter
        );
    }
}
