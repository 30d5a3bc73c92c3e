//! Peripheral device model and registration DTOs.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Kind of peripheral hardware a kiosk can register. Stored as its
/// string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeripheralDeviceType {
    Keyboard,
    Mouse,
    Monitor,
    Printer,
    UsbStorage,
    BarcodeScanner,
    RfidReader,
}

impl PeripheralDeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeripheralDeviceType::Keyboard => "KEYBOARD",
            PeripheralDeviceType::Mouse => "MOUSE",
            PeripheralDeviceType::Monitor => "MONITOR",
            PeripheralDeviceType::Printer => "PRINTER",
            PeripheralDeviceType::UsbStorage => "USB_STORAGE",
            PeripheralDeviceType::BarcodeScanner => "BARCODE_SCANNER",
            PeripheralDeviceType::RfidReader => "RFID_READER",
        }
    }
}

impl std::fmt::Display for PeripheralDeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PeripheralDevice {
    pub id: String,
    pub name: String,
    pub device_type: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterDeviceRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: PeripheralDeviceType,
}

/// Registration outcome. A failed insert answers an empty device_id and
/// status "error" rather than the error envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterDeviceResponse {
    pub device_id: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PeripheralDetail {
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListPeripheralsResponse {
    pub supported_peripherals: Vec<PeripheralDetail>,
}

impl PeripheralDevice {
    pub async fn create(
        db: &SqlitePool,
        name: &str,
        device_type: PeripheralDeviceType,
    ) -> Result<PeripheralDevice, sqlx::Error> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO peripheral_devices (id, name, device_type, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(name)
        .bind(device_type.as_str())
        .bind(&now)
        .execute(db)
        .await?;

        Self::get_by_id(db, &id).await?.ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn get_by_id(
        db: &SqlitePool,
        id: &str,
    ) -> Result<Option<PeripheralDevice>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, name, device_type, created_at
            FROM peripheral_devices
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn list(db: &SqlitePool) -> Result<Vec<PeripheralDevice>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, name, device_type, created_at
            FROM peripheral_devices
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[test]
    fn device_type_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&PeripheralDeviceType::BarcodeScanner).unwrap();
        assert_eq!(json, "\"BARCODE_SCANNER\"");

        let parsed: PeripheralDeviceType = serde_json::from_str("\"RFID_READER\"").unwrap();
        assert_eq!(parsed, PeripheralDeviceType::RfidReader);
    }

    #[tokio::test]
    async fn create_and_list_devices() {
        let db = test_pool().await;

        let device = PeripheralDevice::create(&db, "Front desk scanner", PeripheralDeviceType::BarcodeScanner)
            .await
            .unwrap();
        assert_eq!(device.device_type, "BARCODE_SCANNER");

        PeripheralDevice::create(&db, "Lobby printer", PeripheralDeviceType::Printer)
            .await
            .unwrap();

        let devices = PeripheralDevice::list(&db).await.unwrap();
        assert_eq!(devices.len(), 2);
    }
}
