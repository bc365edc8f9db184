use crux_core::Command;

use crate::events::{Event, FormEvent, FormName};
use crate::model::Model;
use crate::types::Resource;
use crate::update_field;
use crate::Effect;

use super::sync;

/// Handle form edits and submission.
///
/// Field values are sent exactly as entered; the device is the only validator.
pub fn handle(event: FormEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        FormEvent::NetworkFormUpdate(form_data) => update_field!(model.network_form, form_data),
        FormEvent::LocationFormUpdate(form_data) => {
            update_field!(model.location_form, form_data)
        }
        FormEvent::Submit(FormName::Network) => sync::save(Resource::Network, &model.network_form),
        FormEvent::Submit(FormName::Location) => {
            sync::save(Resource::Location, &model.location_form)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResourceValue;
    use crate::types::{LocationConfig, LocationFormData, NetworkFormData, Scalar};
    use crux_http::protocol::{HttpResponse, HttpResult};

    fn location_form() -> LocationFormData {
        LocationFormData {
            timezone: "MST".to_string(),
            latitude: "not a number".to_string(),
            longitude: "-111.9".to_string(),
        }
    }

    #[test]
    fn update_replaces_draft_and_renders() {
        let mut model = Model::default();

        let mut cmd = handle(FormEvent::LocationFormUpdate(location_form()), &mut model);

        assert_eq!(model.location_form, location_form());
        assert!(cmd.effects().any(|e| matches!(e, Effect::Render(_))));
    }

    #[test]
    fn unchanged_draft_does_not_render() {
        let mut model = Model::default();

        let mut cmd = handle(
            FormEvent::NetworkFormUpdate(NetworkFormData::default()),
            &mut model,
        );

        assert!(cmd.is_done());
    }

    #[test]
    fn submit_sends_draft_without_validation() {
        let mut model = Model {
            location_form: location_form(),
            ..Default::default()
        };

        let mut cmd = handle(FormEvent::Submit(FormName::Location), &mut model);
        let request = cmd
            .effects()
            .find_map(|effect| match effect {
                Effect::Http(request) => Some(request),
                _ => None,
            })
            .expect("no http request");

        assert_eq!(request.operation.method, "POST");
        assert_eq!(request.operation.url, "https://relative/location");
        let body: serde_json::Value = serde_json::from_slice(&request.operation.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"timezone": "MST", "latitude": "not a number", "longitude": "-111.9"})
        );
    }

    #[test]
    fn successful_submit_reseeds_draft_from_reply() {
        let mut model = Model {
            location_form: location_form(),
            ..Default::default()
        };

        let mut cmd = handle(FormEvent::Submit(FormName::Location), &mut model);
        let mut request = cmd
            .effects()
            .find_map(|effect| match effect {
                Effect::Http(request) => Some(request),
                _ => None,
            })
            .expect("no http request");
        request
            .resolve(HttpResult::Ok(
                HttpResponse::ok()
                    .body(br#"{"latitude":33,"longitude":-112,"timezone":"AMT"}"#.to_vec())
                    .build(),
            ))
            .expect("failed to resolve request");
        let event = cmd.events().next().expect("no event after response");
        let mut after_save = crate::update::update(event, &mut model);

        let expected = LocationConfig {
            latitude: Scalar::from(33),
            longitude: Scalar::from(-112),
            timezone: "AMT".to_string(),
        };
        assert_eq!(
            model.store.get(Resource::Location),
            Some(ResourceValue::Location(expected.clone()))
        );
        assert_eq!(model.location_form, LocationFormData::from(&expected));
        assert!(model.confirmation.is_visible());
        assert!(after_save.effects().any(|e| matches!(e, Effect::Timer(_))));
    }
}
