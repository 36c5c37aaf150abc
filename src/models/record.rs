use serde::{Deserialize, Serialize};

/// Number of fields every record carries
pub const FIELD_COUNT: usize = 9;

/// Required field names, in the order they must appear in headers and JSON keys
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "Date",
    "Client Name",
    "Input Data",
    "Service Name",
    "Vendor Name",
    "Delivery Date",
    "V Send Date",
    "V Receive Date",
    "Other Remarks",
];

/// One service-delivery log row.
///
/// Field declaration order matches [`FIELD_NAMES`], so serialization always emits keys in
/// the canonical order. Values are kept verbatim as strings; nothing is coerced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Client Name")]
    pub client_name: String,
    #[serde(rename = "Input Data")]
    pub input_data: String,
    #[serde(rename = "Service Name")]
    pub service_name: String,
    #[serde(rename = "Vendor Name")]
    pub vendor_name: String,
    #[serde(rename = "Delivery Date")]
    pub delivery_date: String,
    #[serde(rename = "V Send Date")]
    pub v_send_date: String,
    #[serde(rename = "V Receive Date")]
    pub v_receive_date: String,
    #[serde(rename = "Other Remarks")]
    pub other_remarks: String,
}

impl Record {
    /// Build a record from values given in [`FIELD_NAMES`] order
    pub fn from_values(values: [String; FIELD_COUNT]) -> Self {
        let [
            date,
            client_name,
            input_data,
            service_name,
            vendor_name,
            delivery_date,
            v_send_date,
            v_receive_date,
            other_remarks,
        ] = values;

        Self {
            date,
            client_name,
            input_data,
            service_name,
            vendor_name,
            delivery_date,
            v_send_date,
            v_receive_date,
            other_remarks,
        }
    }

    /// Field values in [`FIELD_NAMES`] order
    pub fn values(&self) -> [&str; FIELD_COUNT] {
        [
            self.date.as_str(),
            self.client_name.as_str(),
            self.input_data.as_str(),
            self.service_name.as_str(),
            self.vendor_name.as_str(),
            self.delivery_date.as_str(),
            self.v_send_date.as_str(),
            self.v_receive_date.as_str(),
            self.other_remarks.as_str(),
        ]
    }
}
