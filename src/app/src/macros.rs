/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.network_form, form_data)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.network_form, network;
///     model.location_form, location
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

// Re-export http_helpers functions for macro use
pub use crate::http_helpers::{build_url, map_http_error, process_json_response, BASE_URL};

/// GET a resource and decode it into its typed shape.
///
/// The response is wrapped in the given `SyncEvent` variant. Neither loading state nor
/// errors are recorded on the model here; the receiving handler decides.
///
/// # Example
/// ```ignore
/// resource_get!(Resource::Door, DoorLoaded, DoorState)
/// ```
#[macro_export]
macro_rules! resource_get {
    ($resource:expr, $response_event:ident, $response_type:ty) => {{
        let resource: $crate::types::Resource = $resource;
        let action = format!("Load {resource}");
        $crate::HttpCmd::get($crate::build_url(resource.endpoint()))
            .build()
            .then_send(move |result| {
                let event_result: Result<$response_type, String> =
                    $crate::process_json_response(&action, result);
                $crate::events::Event::Sync($crate::events::SyncEvent::$response_event(
                    event_result,
                ))
            })
    }};
}

/// POST a JSON body to a resource and decode the device's authoritative reply.
///
/// # Example
/// ```ignore
/// resource_post!(Resource::Network, &form_data, NetworkSaved, NetworkConfig)
/// ```
#[macro_export]
macro_rules! resource_post {
    ($resource:expr, $body:expr, $response_event:ident, $response_type:ty) => {{
        let resource: $crate::types::Resource = $resource;
        let action = format!("Save {resource}");
        match $crate::HttpCmd::post($crate::build_url(resource.endpoint()))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => builder.build().then_send(move |result| {
                let event_result: Result<$response_type, String> =
                    $crate::process_json_response(&action, result);
                $crate::events::Event::Sync($crate::events::SyncEvent::$response_event(
                    event_result,
                ))
            }),
            Err(e) => {
                log::error!("failed to create {action} request: {e}");
                crux_core::Command::done()
            }
        }
    }};
}
