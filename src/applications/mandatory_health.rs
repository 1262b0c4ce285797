//! Mandatory (state) health insurance registration form.

use serde::{Deserialize, Serialize};

use super::check::FieldCheck;
use super::personal::PersonalInfo;

/// Mandatory health insurance application
/// (`insurance_type = "mandatory_health"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandatoryHealthApplication {
    #[serde(flatten)]
    pub personal: PersonalInfo,
    #[serde(rename = "noi_lam_viec")]
    pub workplace: String,
    /// Existing social insurance number, if already enrolled.
    #[serde(rename = "ma_bhxh", default, skip_serializing_if = "Option::is_none")]
    pub social_insurance_id: Option<String>,
    /// Registered primary care facility.
    #[serde(rename = "co_so_dang_ky_kcb")]
    pub medical_facility: String,
    #[serde(rename = "tinh_thanh_dang_ky")]
    pub province: String,
    #[serde(rename = "so_ho_khau")]
    pub household_number: String,
    #[serde(rename = "dia_chi_ho_khau")]
    pub household_address: String,
    /// Uploaded ID-card image references.
    #[serde(rename = "hinh_anh_can_cuoc", default, skip_serializing_if = "Option::is_none")]
    pub id_document_images: Option<Vec<String>>,
    /// Uploaded household-registration image references.
    #[serde(rename = "hinh_anh_ho_khau", default, skip_serializing_if = "Option::is_none")]
    pub household_document_images: Option<Vec<String>>,
    pub package_id: String,
}

impl MandatoryHealthApplication {
    /// Wire keys of required fields that are still blank.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut check = FieldCheck::default();
        self.personal.check(&mut check);
        check
            .require("noi_lam_viec", &self.workplace)
            .require("co_so_dang_ky_kcb", &self.medical_facility)
            .require("tinh_thanh_dang_ky", &self.province)
            .require("so_ho_khau", &self.household_number)
            .require("dia_chi_ho_khau", &self.household_address)
            .require("package_id", &self.package_id);
        check.finish()
    }
}
