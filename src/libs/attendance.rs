//! Attendance records as they travel over the wire.
//!
//! The attendance service is loose about its types: identifiers come back as
//! JSON numbers or strings depending on the endpoint, and the presence flag
//! is sometimes called `status` and sometimes `present`. The types here
//! absorb those differences so the rest of the crate can work with a single
//! shape.
//!
//! ## Wire shape
//!
//! ```json
//! {
//!   "id": 17,
//!   "employeeId": "1",
//!   "date": "2025-03-14",
//!   "checkIn": "09:02:11",
//!   "checkOut": "00:00:00",
//!   "status": true,
//!   "remark": "Good"
//! }
//! ```
//!
//! A `checkOut` of `"00:00:00"` is a placeholder for "not yet punched out",
//! never a real midnight timestamp.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};

/// Wire placeholder meaning "not yet recorded".
pub const SENTINEL_TIME: &str = "00:00:00";

/// Identifier that may arrive as a JSON string or a JSON number.
///
/// Stored in its string form; two ids are equal when their trimmed string
/// forms are equal, so `1` and `"1"` refer to the same employee.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WireId(String);

impl WireId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for WireId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WireId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WireId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<i64> for WireId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for WireId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WireId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => WireId::new(id),
            RawId::Signed(id) => WireId(id.to_string()),
            RawId::Unsigned(id) => WireId(id.to_string()),
        })
    }
}

/// Accepts `true`/`false`, `0`/`1` and the strings `"true"`, `"present"`, `"1"`.
fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Number(i64),
        Text(String),
    }

    Ok(Option::<RawFlag>::deserialize(deserializer)?.map(|flag| match flag {
        RawFlag::Bool(value) => value,
        RawFlag::Number(value) => value != 0,
        RawFlag::Text(value) => matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "present" | "1"),
    }))
}

/// One attendance row owned by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: WireId,
    pub employee_id: WireId,
    pub date: String,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag", skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_flag", skip_serializing_if = "Option::is_none")]
    pub present: Option<bool>,
    #[serde(default)]
    pub remark: Option<String>,
}

impl AttendanceRecord {
    /// `status` wins over `present` when the server sends both.
    pub fn is_present(&self) -> bool {
        self.status.or(self.present).unwrap_or(false)
    }

    pub fn check_in(&self) -> Option<&str> {
        recorded(self.check_in.as_deref())
    }

    /// The check-out time, or `None` while it is missing or still the sentinel.
    pub fn check_out(&self) -> Option<&str> {
        recorded(self.check_out.as_deref()).filter(|time| *time != SENTINEL_TIME)
    }

    /// An open record has been punched in but not yet punched out.
    ///
    /// Rows without a real check-in, such as absences entered by an admin, are never open.
    pub fn is_open(&self) -> bool {
        self.check_in().is_some_and(|time| time != SENTINEL_TIME) && self.check_out().is_none()
    }

    pub fn belongs_to(&self, employee_id: &WireId) -> bool {
        &self.employee_id == employee_id
    }
}

fn recorded(time: Option<&str>) -> Option<&str> {
    time.map(str::trim).filter(|time| !time.is_empty())
}

/// Body of `POST /attendances` and `PUT /attendances/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendance {
    pub employee_id: WireId,
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub status: bool,
    pub remark: String,
}

/// Explicit construction parameters for the attendance helper.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceConfig {
    pub api_base_url: String,
    pub employee_id: WireId,
}

impl AttendanceConfig {
    pub fn new(api_base_url: impl Into<String>, employee_id: impl Into<WireId>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            employee_id: employee_id.into(),
        }
    }
}
