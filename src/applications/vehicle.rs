//! Motor vehicle insurance application form.

use serde::{Deserialize, Serialize};

use super::check::FieldCheck;
use super::personal::{PersonalInfo, YesNo};

/// Vehicle insurance application (`insurance_type = "vehicle"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInsuranceApplication {
    #[serde(flatten)]
    pub personal: PersonalInfo,
    #[serde(rename = "thong_tin_xe")]
    pub vehicle: VehicleInfo,
    #[serde(rename = "giay_phep_lai_xe")]
    pub license: DriverLicense,
    #[serde(rename = "lich_su_bao_hiem")]
    pub insurance_history: InsuranceHistory,
    #[serde(rename = "lich_su_tai_nan")]
    pub accident_history: AccidentHistory,
    pub package_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleClass {
    #[serde(rename = "Xe_may")]
    Motorbike,
    #[serde(rename = "O_to")]
    Car,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsagePurpose {
    #[serde(rename = "Ca_nhan")]
    Personal,
    #[serde(rename = "Kinh_doanh")]
    Commercial,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    #[serde(rename = "loai_xe")]
    pub class: VehicleClass,
    #[serde(rename = "bien_so")]
    pub plate_number: String,
    #[serde(rename = "so_khung")]
    pub chassis_number: String,
    #[serde(rename = "so_may")]
    pub engine_number: String,
    #[serde(rename = "hang_xe")]
    pub make: String,
    #[serde(rename = "dong_xe")]
    pub model: String,
    #[serde(rename = "nam_san_xuat")]
    pub year: String,
    #[serde(rename = "mau_xe")]
    pub color: String,
    /// Declared market value as entered.
    #[serde(rename = "gia_tri_xe")]
    pub declared_value: String,
    #[serde(rename = "muc_dich_su_dung")]
    pub usage: UsagePurpose,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverLicense {
    #[serde(rename = "so_bang")]
    pub number: String,
    /// License class (A1, B2, ...).
    #[serde(rename = "hang")]
    pub class: String,
    #[serde(rename = "ngay_cap")]
    pub issue_date: String,
    #[serde(rename = "noi_cap")]
    pub issue_place: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceHistory {
    #[serde(rename = "da_mua_bao_hiem")]
    pub previously_insured: YesNo,
    #[serde(rename = "cong_ty_cu", default, skip_serializing_if = "Option::is_none")]
    pub previous_insurer: Option<String>,
    #[serde(rename = "thoi_han_cu", default, skip_serializing_if = "Option::is_none")]
    pub previous_term: Option<String>,
    #[serde(rename = "da_boi_thuong")]
    pub had_claim: YesNo,
    #[serde(rename = "mo_ta_boi_thuong", default, skip_serializing_if = "Option::is_none")]
    pub claim_description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccidentHistory {
    #[serde(rename = "da_gap_tai_nan")]
    pub had_accident: YesNo,
    #[serde(rename = "so_lan", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(rename = "mo_ta", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VehicleInsuranceApplication {
    /// Wire keys of required fields that are still blank.
    ///
    /// Claim and accident descriptions become required once the matching
    /// flag is `Co`.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut check = FieldCheck::default();
        self.personal.check(&mut check);

        let vehicle = &self.vehicle;
        let license = &self.license;
        let history = &self.insurance_history;
        let accidents = &self.accident_history;
        check
            .require("thong_tin_xe.bien_so", &vehicle.plate_number)
            .require("thong_tin_xe.so_khung", &vehicle.chassis_number)
            .require("thong_tin_xe.so_may", &vehicle.engine_number)
            .require("thong_tin_xe.hang_xe", &vehicle.make)
            .require("thong_tin_xe.dong_xe", &vehicle.model)
            .require("thong_tin_xe.nam_san_xuat", &vehicle.year)
            .require("thong_tin_xe.mau_xe", &vehicle.color)
            .require("thong_tin_xe.gia_tri_xe", &vehicle.declared_value)
            .require("giay_phep_lai_xe.so_bang", &license.number)
            .require("giay_phep_lai_xe.hang", &license.class)
            .require("giay_phep_lai_xe.ngay_cap", &license.issue_date)
            .require("giay_phep_lai_xe.noi_cap", &license.issue_place)
            .require_some_if(
                history.had_claim.is_yes(),
                "lich_su_bao_hiem.mo_ta_boi_thuong",
                history.claim_description.as_deref(),
            )
            .require_some_if(accidents.had_accident.is_yes(), "lich_su_tai_nan.mo_ta", accidents.description.as_deref())
            .require("package_id", &self.package_id);
        check.finish()
    }
}
