//! Voluntary health insurance application form.

use serde::{Deserialize, Serialize};

use super::check::FieldCheck;
use super::personal::{PersonalInfo, YesNo};

/// Health insurance application (`insurance_type = "health"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthInsuranceApplication {
    #[serde(flatten)]
    pub personal: PersonalInfo,
    #[serde(rename = "nghe_nghiep")]
    pub occupation: String,
    #[serde(rename = "lich_su_benh")]
    pub medical_history: MedicalHistory,
    /// Covered relatives, for family packages.
    #[serde(rename = "thanh_vien_gia_dinh", default, skip_serializing_if = "Option::is_none")]
    pub family_members: Option<Vec<FamilyMember>>,
    #[serde(rename = "benh_vien_uu_tien", default, skip_serializing_if = "Option::is_none")]
    pub preferred_hospital: Option<String>,
    pub package_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalHistory {
    #[serde(rename = "benh_hien_co")]
    pub existing_conditions: Vec<String>,
    #[serde(rename = "phau_thuat")]
    pub had_surgery: YesNo,
    #[serde(rename = "mo_ta_phau_thuat")]
    pub surgery_description: String,
    #[serde(rename = "dang_dung_thuoc")]
    pub on_medication: YesNo,
    #[serde(rename = "ten_thuoc")]
    pub medication_name: String,
    /// Known allergies; "none" must be stated rather than left blank.
    #[serde(rename = "di_ung")]
    pub allergies: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    #[serde(rename = "ho_ten")]
    pub full_name: String,
    #[serde(rename = "quan_he")]
    pub relationship: String,
    #[serde(rename = "ngay_sinh")]
    pub date_of_birth: String,
    #[serde(rename = "so_cmnd")]
    pub national_id: String,
}

impl HealthInsuranceApplication {
    /// Wire keys of required fields that are still blank.
    ///
    /// Family members are indexed (`thanh_vien_gia_dinh[1].ho_ten`).
    pub fn missing_fields(&self) -> Vec<String> {
        let mut check = FieldCheck::default();
        self.personal.check(&mut check);

        let history = &self.medical_history;
        check
            .require("nghe_nghiep", &self.occupation)
            .require_if(history.had_surgery.is_yes(), "lich_su_benh.mo_ta_phau_thuat", &history.surgery_description)
            .require_if(history.on_medication.is_yes(), "lich_su_benh.ten_thuoc", &history.medication_name)
            .require("lich_su_benh.di_ung", &history.allergies);

        for (i, member) in self.family_members.iter().flatten().enumerate() {
            let prefix = format!("thanh_vien_gia_dinh[{i}]");
            check
                .require(&format!("{prefix}.ho_ten"), &member.full_name)
                .require(&format!("{prefix}.quan_he"), &member.relationship)
                .require(&format!("{prefix}.ngay_sinh"), &member.date_of_birth)
                .require(&format!("{prefix}.so_cmnd"), &member.national_id);
        }

        check.require("package_id", &self.package_id);
        check.finish()
    }
}
