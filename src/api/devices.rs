//! Peripheral device endpoints.

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{error, info};

use crate::db::{
    ListPeripheralsResponse, PeripheralDetail, PeripheralDevice, RegisterDeviceRequest,
    RegisterDeviceResponse,
};
use crate::AppState;

use super::error::ApiError;

/// Register a new peripheral device with the kiosk.
///
/// POST /api/peripherals
///
/// Keeps the lenient registration contract: a store failure answers
/// `{device_id: "", status: "error"}` instead of the error envelope.
pub async fn register_device(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterDeviceRequest>,
) -> Json<RegisterDeviceResponse> {
    match PeripheralDevice::create(&state.db, &request.name, request.device_type).await {
        Ok(device) => {
            info!(name = %device.name, device_type = %device.device_type, "Registered peripheral device");
            Json(RegisterDeviceResponse {
                device_id: device.id,
                status: "success".to_string(),
            })
        }
        Err(e) => {
            error!("Error registering device: {}", e);
            Json(RegisterDeviceResponse {
                device_id: String::new(),
                status: "error".to_string(),
            })
        }
    }
}

/// Retrieve the registered peripheral devices.
///
/// GET /api/peripherals
pub async fn list_devices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListPeripheralsResponse>, ApiError> {
    let devices = PeripheralDevice::list(&state.db).await?;
    let supported_peripherals = devices
        .into_iter()
        .map(|d| PeripheralDetail {
            name: d.name,
            device_type: d.device_type,
        })
        .collect();
    Ok(Json(ListPeripheralsResponse {
        supported_peripherals,
    }))
}
