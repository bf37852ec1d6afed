//! Derives client punch state and display rows from the server's record list.
//!
//! Nothing about a punch session is persisted locally, so every start of
//! the client rebuilds it here: an attendance record dated today, belonging
//! to the current employee and not yet punched out, means the employee is
//! still punched in.

use crate::libs::attendance::{AttendanceRecord, WireId};
use crate::libs::error::{AttendanceError, AttendanceResult};
use crate::libs::hours::hours_worked;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

pub const NOT_AVAILABLE: &str = "N/A";
pub const STATUS_PRESENT: &str = "Present";
pub const STATUS_ABSENT: &str = "Absent";

/// Envelope keys some deployments wrap the record list in.
const LIST_KEYS: [&str; 2] = ["data", "records"];

/// One line of the attendance history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceRow {
    pub id: WireId,
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub hours: String,
    pub status: String,
    pub remark: String,
}

impl From<&AttendanceRecord> for AttendanceRow {
    fn from(record: &AttendanceRecord) -> Self {
        Self {
            id: record.id.clone(),
            date: record.date.clone(),
            check_in: record.check_in().unwrap_or(NOT_AVAILABLE).to_string(),
            check_out: record.check_out().unwrap_or(NOT_AVAILABLE).to_string(),
            hours: hours_worked(record.check_in.as_deref(), record.check_out.as_deref()),
            status: (if record.is_present() { STATUS_PRESENT } else { STATUS_ABSENT }).to_string(),
            remark: record.remark.clone().unwrap_or_default(),
        }
    }
}

/// Today's record that is still waiting for a punch-out.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenSession {
    pub record_id: WireId,
    pub date: String,
    pub check_in: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    pub rows: Vec<AttendanceRow>,
    pub open_session: Option<OpenSession>,
}

/// Reconciles a raw `GET /attendances` payload.
///
/// The payload must be a flat JSON array; anything else fails with
/// [`AttendanceError::InvalidShape`]. Entries that do not decode as attendance
/// records are skipped, so one bad row cannot hide the rest of the history.
pub fn reconcile(payload: &Value, employee_id: &WireId, today: &str) -> AttendanceResult<Reconciliation> {
    let entries = payload
        .as_array()
        .ok_or_else(|| AttendanceError::InvalidShape(format!("expected a list of attendance records, got {}", json_kind(payload))))?;

    let mut skipped = 0usize;
    let records: Vec<AttendanceRecord> = entries
        .iter()
        .filter_map(|entry| match AttendanceRecord::deserialize(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(error = %e, "undecodable attendance entry");
                skipped += 1;
                None
            }
        })
        .collect();
    if skipped > 0 {
        warn!(skipped, total = entries.len(), "skipped undecodable attendance entries");
    }

    Ok(reconcile_records(&records, employee_id, today))
}

/// Reconciles records that are already decoded.
pub fn reconcile_records(records: &[AttendanceRecord], employee_id: &WireId, today: &str) -> Reconciliation {
    let own = records.iter().filter(|record| record.belongs_to(employee_id));

    let rows = own.clone().map(AttendanceRow::from).collect();
    let open_session = own
        .filter(|record| record.date.trim() == today && record.is_open())
        .map(|record| OpenSession {
            record_id: record.id.clone(),
            date: record.date.clone(),
            check_in: record.check_in().map(str::to_string),
        })
        .next();

    Reconciliation { rows, open_session }
}

/// Lifts the list out of a `{"data": [...]}` or `{"records": [...]}` envelope.
///
/// Any other payload is returned as is, for [`reconcile`] to accept or reject.
pub fn unwrap_list(payload: Value) -> Value {
    if let Value::Object(fields) = &payload {
        for key in LIST_KEYS {
            if let Some(list @ Value::Array(_)) = fields.get(key) {
                return list.clone();
            }
        }
    }
    payload
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
