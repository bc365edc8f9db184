use crux_core::{render::render, Command};
use serde::Serialize;

use crate::events::{Event, SyncEvent};
use crate::model::{Model, ResourceValue};
use crate::types::{DoorState, LocationConfig, NetworkConfig, Resource};
use crate::{resource_get, resource_post, Effect};

use super::ui::show_confirmation;

/// Fetch every resource at once; each request succeeds or fails on its own
pub fn load_all() -> Command<Effect, Event> {
    Command::all(Resource::ALL.map(load))
}

pub fn load(resource: Resource) -> Command<Effect, Event> {
    match resource {
        Resource::Door => resource_get!(resource, DoorLoaded, DoorState),
        Resource::Network => resource_get!(resource, NetworkLoaded, NetworkConfig),
        Resource::Location => resource_get!(resource, LocationLoaded, LocationConfig),
    }
}

/// Write a partial update; the reply replaces the stored value wholesale
pub fn save(resource: Resource, payload: &impl Serialize) -> Command<Effect, Event> {
    match resource {
        Resource::Door => resource_post!(resource, payload, DoorSaved, DoorState),
        Resource::Network => resource_post!(resource, payload, NetworkSaved, NetworkConfig),
        Resource::Location => resource_post!(resource, payload, LocationSaved, LocationConfig),
    }
}

pub fn handle(event: SyncEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SyncEvent::Reload(resource) => load(resource),

        SyncEvent::DoorLoaded(result) => {
            handle_loaded(Resource::Door, result.map(ResourceValue::Door), model)
        }
        SyncEvent::NetworkLoaded(result) => {
            handle_loaded(Resource::Network, result.map(ResourceValue::Network), model)
        }
        SyncEvent::LocationLoaded(result) => {
            handle_loaded(Resource::Location, result.map(ResourceValue::Location), model)
        }

        // Door actions are not configuration, so no "saved" indicator
        SyncEvent::DoorSaved(result) => {
            handle_loaded(Resource::Door, result.map(ResourceValue::Door), model)
        }
        SyncEvent::NetworkSaved(result) => {
            handle_saved(Resource::Network, result.map(ResourceValue::Network), model)
        }
        SyncEvent::LocationSaved(result) => {
            handle_saved(Resource::Location, result.map(ResourceValue::Location), model)
        }
    }
}

/// Store a fetched value, or keep the last-known one if the fetch failed
fn handle_loaded(
    resource: Resource,
    result: Result<ResourceValue, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match result {
        Ok(value) => {
            log::debug!("{resource} updated: {value:?}");
            model.apply(value);
            render()
        }
        Err(e) => {
            log::warn!("keeping last known {resource}: {e}");
            Command::done()
        }
    }
}

fn handle_saved(
    resource: Resource,
    result: Result<ResourceValue, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match result {
        Ok(value) => {
            log::debug!("{resource} saved: {value:?}");
            model.apply(value);
            Command::all([render(), show_confirmation(model)])
        }
        Err(e) => {
            log::warn!("{resource} not saved: {e}");
            Command::done()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NetworkFormData, Scalar};
    use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult};
    use crux_http::HttpError;

    type HttpRequestEffect = crux_core::Request<HttpRequest>;

    fn http_requests(cmd: &mut Command<Effect, Event>) -> Vec<HttpRequestEffect> {
        cmd.effects()
            .filter_map(|effect| match effect {
                Effect::Http(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn take_request(requests: &mut Vec<HttpRequestEffect>, endpoint: &str) -> HttpRequestEffect {
        let index = requests
            .iter()
            .position(|r| r.operation.url == crate::build_url(endpoint))
            .unwrap_or_else(|| panic!("no request for {endpoint}"));
        requests.remove(index)
    }

    fn ok_json(body: &str) -> HttpResult {
        HttpResult::Ok(HttpResponse::ok().body(body.as_bytes().to_vec()).build())
    }

    /// Resolve `request` and feed the resulting event back through `update`
    fn complete(
        cmd: &mut Command<Effect, Event>,
        mut request: HttpRequestEffect,
        result: HttpResult,
        model: &mut Model,
    ) -> Command<Effect, Event> {
        request.resolve(result).expect("failed to resolve request");
        let event = cmd.events().next().expect("no event after response");
        crate::update::update(event, model)
    }

    mod load_all {
        use super::*;

        #[test]
        fn issues_three_independent_gets() {
            let mut cmd = load_all();
            let requests = http_requests(&mut cmd);

            let mut urls: Vec<_> = requests.iter().map(|r| r.operation.url.clone()).collect();
            urls.sort();
            assert_eq!(
                urls,
                vec![
                    "https://relative/door",
                    "https://relative/location",
                    "https://relative/network"
                ]
            );
            assert!(requests.iter().all(|r| r.operation.method == "GET"));
        }

        #[test]
        fn completions_apply_in_any_order() {
            let mut model = Model::default();
            let mut cmd = load_all();
            let mut requests = http_requests(&mut cmd);

            let location = take_request(&mut requests, "/location");
            let _ = complete(
                &mut cmd,
                location,
                ok_json(r#"{"latitude":49,"longitude":-123,"timezone":"PST"}"#),
                &mut model,
            );

            assert!(model.store.contains(Resource::Location));
            assert!(!model.store.contains(Resource::Door));
            assert!(!model.store.contains(Resource::Network));

            let door = take_request(&mut requests, "/door");
            let _ = complete(&mut cmd, door, ok_json(r#"{"status":"Closed"}"#), &mut model);

            assert_eq!(model.store.door().map(|d| d.status.as_str()), Some("Closed"));
            assert!(!model.store.contains(Resource::Network));
        }

        #[test]
        fn door_failure_does_not_block_other_resources() {
            let mut model = Model::default();
            let mut cmd = load_all();
            let mut requests = http_requests(&mut cmd);

            let door = take_request(&mut requests, "/door");
            let mut after_door = complete(
                &mut cmd,
                door,
                HttpResult::Err(HttpError::Io("connection refused".to_string())),
                &mut model,
            );
            assert!(after_door.is_done());

            let network = take_request(&mut requests, "/network");
            let _ = complete(
                &mut cmd,
                network,
                ok_json(r#"{"ip_address":"10.0.0.2","essid":"coop","password":"hens","can_start_ap":false}"#),
                &mut model,
            );
            let location = take_request(&mut requests, "/location");
            let _ = complete(
                &mut cmd,
                location,
                ok_json(r#"{"latitude":"49","longitude":"-123","timezone":"EST"}"#),
                &mut model,
            );

            assert!(!model.store.contains(Resource::Door));
            assert!(model.store.contains(Resource::Network));
            assert!(model.store.contains(Resource::Location));
        }
    }

    mod failures {
        use super::*;

        fn loaded_model() -> Model {
            let mut model = Model::default();
            model.apply(ResourceValue::Location(LocationConfig {
                latitude: Scalar::from(49),
                longitude: Scalar::from(-123),
                timezone: "PST".to_string(),
            }));
            model
        }

        #[test]
        fn decode_failure_keeps_last_known_value() {
            let mut model = loaded_model();
            let before = model.clone();

            let mut cmd = load(Resource::Location);
            let request = http_requests(&mut cmd).remove(0);
            let mut next = complete(&mut cmd, request, ok_json("not json"), &mut model);

            assert!(next.is_done());
            assert_eq!(model, before);
        }

        #[test]
        fn rejection_keeps_last_known_value() {
            let mut model = loaded_model();
            let before = model.clone();

            let mut cmd = save(
                Resource::Location,
                &crate::types::LocationFormData {
                    timezone: "XYZ".to_string(),
                    latitude: "49".to_string(),
                    longitude: "-123".to_string(),
                },
            );
            let request = http_requests(&mut cmd).remove(0);
            let _ = complete(
                &mut cmd,
                request,
                HttpResult::Ok(
                    HttpResponse::status(400)
                        .body(b"invalid timezone".to_vec())
                        .build(),
                ),
                &mut model,
            );

            assert_eq!(model, before);
            assert!(!model.confirmation.is_visible());
        }
    }

    mod save {
        use super::*;

        #[test]
        fn posts_partial_payload_as_json() {
            let payload = NetworkFormData {
                essid: "X".to_string(),
                password: "Y".to_string(),
                can_start_ap: true,
            };

            let mut cmd = save(Resource::Network, &payload);
            let request = http_requests(&mut cmd).remove(0);

            assert_eq!(request.operation.method, "POST");
            assert_eq!(request.operation.url, "https://relative/network");
            let body: serde_json::Value = serde_json::from_slice(&request.operation.body).unwrap();
            assert_eq!(
                body,
                serde_json::json!({"essid": "X", "password": "Y", "can_start_ap": true})
            );
        }

        #[test]
        fn response_replaces_store_entry_including_server_fields() {
            let mut model = Model::default();
            let payload = NetworkFormData {
                essid: "X".to_string(),
                password: "Y".to_string(),
                can_start_ap: true,
            };

            let mut cmd = save(Resource::Network, &payload);
            let request = http_requests(&mut cmd).remove(0);
            let _ = complete(
                &mut cmd,
                request,
                ok_json(r#"{"ip_address":"10.0.0.2","essid":"X","password":"Y","can_start_ap":true}"#),
                &mut model,
            );

            assert_eq!(
                model.store.network(),
                Some(&NetworkConfig {
                    ip_address: Some("10.0.0.2".to_string()),
                    essid: "X".to_string(),
                    password: "Y".to_string(),
                    can_start_ap: true,
                })
            );
            assert!(model.confirmation.is_visible());
        }

        #[test]
        fn overlapping_saves_are_last_writer_wins() {
            let mut model = Model::default();
            let first_payload = NetworkFormData {
                essid: "first".to_string(),
                password: String::new(),
                can_start_ap: true,
            };
            let second_payload = NetworkFormData {
                essid: "second".to_string(),
                ..first_payload.clone()
            };

            let mut first = save(Resource::Network, &first_payload);
            let mut second = save(Resource::Network, &second_payload);
            let first_request = http_requests(&mut first).remove(0);
            let second_request = http_requests(&mut second).remove(0);

            // Responses arrive out of order
            let _ = complete(
                &mut second,
                second_request,
                ok_json(r#"{"essid":"second","password":"","can_start_ap":true}"#),
                &mut model,
            );
            let _ = complete(
                &mut first,
                first_request,
                ok_json(r#"{"essid":"first","password":"","can_start_ap":true}"#),
                &mut model,
            );

            assert_eq!(model.store.network().map(|n| n.essid.as_str()), Some("first"));
        }
    }
}
