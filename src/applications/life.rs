//! Life insurance application form.

use serde::{Deserialize, Serialize};

use super::check::FieldCheck;
use super::personal::{PersonalInfo, YesNo};

/// Life insurance application (`insurance_type = "life"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeInsuranceApplication {
    #[serde(flatten)]
    pub personal: PersonalInfo,
    #[serde(rename = "nghe_nghiep")]
    pub occupation: String,
    #[serde(rename = "noi_lam_viec")]
    pub workplace: String,
    /// Monthly income as entered, unparsed.
    #[serde(rename = "thu_nhap_hang_thang")]
    pub monthly_income: String,
    #[serde(rename = "nguoi_thu_huong")]
    pub beneficiary: Beneficiary,
    #[serde(rename = "tinh_trang_suc_khoe")]
    pub health: HealthDeclaration,
    pub package_id: String,
}

/// Person receiving the payout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    #[serde(rename = "ho_ten")]
    pub full_name: String,
    #[serde(rename = "quan_he")]
    pub relationship: String,
    #[serde(rename = "so_cmnd")]
    pub national_id: String,
    #[serde(rename = "sdt")]
    pub phone: String,
}

/// Applicant's self-declared health status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDeclaration {
    #[serde(rename = "chieu_cao")]
    pub height: String,
    #[serde(rename = "can_nang")]
    pub weight: String,
    #[serde(rename = "benh_nen")]
    pub pre_existing_conditions: Vec<String>,
    #[serde(rename = "dang_dieu_tri")]
    pub under_treatment: YesNo,
    #[serde(rename = "mo_ta_benh")]
    pub condition_description: String,
    #[serde(rename = "hut_thuoc")]
    pub smoker: YesNo,
    #[serde(rename = "uong_ruou")]
    pub drinker: YesNo,
}

impl LifeInsuranceApplication {
    /// Wire keys of required fields that are still blank.
    ///
    /// The condition description is only required when the applicant
    /// declares a condition or ongoing treatment.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut check = FieldCheck::default();
        self.personal.check(&mut check);

        let declares_condition =
            self.health.under_treatment.is_yes() || !self.health.pre_existing_conditions.is_empty();
        check
            .require("nghe_nghiep", &self.occupation)
            .require("noi_lam_viec", &self.workplace)
            .require("thu_nhap_hang_thang", &self.monthly_income)
            .require("nguoi_thu_huong.ho_ten", &self.beneficiary.full_name)
            .require("nguoi_thu_huong.quan_he", &self.beneficiary.relationship)
            .require("nguoi_thu_huong.so_cmnd", &self.beneficiary.national_id)
            .require("nguoi_thu_huong.sdt", &self.beneficiary.phone)
            .require("tinh_trang_suc_khoe.chieu_cao", &self.health.height)
            .require("tinh_trang_suc_khoe.can_nang", &self.health.weight)
            .require_if(declares_condition, "tinh_trang_suc_khoe.mo_ta_benh", &self.health.condition_description)
            .require("package_id", &self.package_id);
        check.finish()
    }
}
