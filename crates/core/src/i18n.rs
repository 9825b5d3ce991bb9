//! Static UI dictionaries.
//!
//! [`dictionary`] maps a [`Locale`] to a closed, fully-populated
//! [`Dictionary`]. Every field is checked at compile time; there is no
//! string-keyed lookup.

use serde::Serialize;

use crate::locale::Locale;

#[derive(Debug, Serialize)]
pub struct Dictionary {
    pub common: CommonText,
    pub nav: NavText,
    pub upload: UploadText,
    pub statistics: StatisticsText,
    pub errors: ErrorsText,
    pub compare: CompareText,
    pub settings: SettingsText,
}

#[derive(Debug, Serialize)]
pub struct CommonText {
    pub loading: &'static str,
    pub refresh: &'static str,
    pub export: &'static str,
    pub not_available: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NavText {
    pub brand: &'static str,
    pub upload: &'static str,
    pub statistics: &'static str,
    pub errors: &'static str,
    pub compare: &'static str,
    pub settings: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UploadText {
    pub title: &'static str,
    pub description: &'static str,
    pub drag_drop: &'static str,
    pub browse: &'static str,
    pub select_files: &'static str,
    pub uploaded_files: &'static str,
    pub uploaded: &'static str,
    pub failed: &'static str,
    /// Toast template; `{name}` is replaced with the file name.
    pub success_toast: &'static str,
    /// Toast template; `{name}` is replaced with the file name.
    pub failure_toast: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StatisticsText {
    pub title: &'static str,
    pub description: &'static str,
    pub total_reports: &'static str,
    pub valid_reports: &'static str,
    pub errors_found: &'static str,
    pub pending_review: &'static str,
    pub recent_reports: &'static str,
    pub report_name: &'static str,
    pub status: &'static str,
    pub score: &'static str,
    pub average_score: &'static str,
    pub success_rate: &'static str,
    pub no_reports: &'static str,
    pub load_failed: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorsText {
    pub title: &'static str,
    pub description: &'static str,
    pub all_errors: &'static str,
    pub pending_errors: &'static str,
    pub resolved_errors: &'static str,
    pub ignored_errors: &'static str,
    pub no_errors: &'static str,
    pub load_failed: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CompareText {
    pub title: &'static str,
    pub description: &'static str,
    pub select_reports: &'static str,
    pub report_a: &'static str,
    pub report_b: &'static str,
    pub compare: &'static str,
    pub score: &'static str,
    pub error_count: &'static str,
    pub warning_count: &'static str,
    pub no_reports: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SettingsText {
    pub title: &'static str,
    pub description: &'static str,
    pub company_name: &'static str,
    pub timezone: &'static str,
    pub max_file_size: &'static str,
    pub validation_level: &'static str,
    pub save: &'static str,
    pub reset: &'static str,
}

/// Return the dictionary for `locale`.
pub fn dictionary(locale: Locale) -> &'static Dictionary {
    match locale {
        Locale::En => &EN,
        Locale::Az => &AZ,
    }
}

/// Substitute `{name}` in a toast template.
pub fn fill_name(template: &str, name: &str) -> String {
    template.replace("{name}", name)
}

static EN: Dictionary = Dictionary {
    common: CommonText {
        loading: "Loading...",
        refresh: "Refresh",
        export: "Export",
        not_available: "N/A",
    },
    nav: NavText {
        brand: "AzStat Report",
        upload: "Upload Report",
        statistics: "Statistics",
        errors: "Error List",
        compare: "Compare",
        settings: "Settings",
    },
    upload: UploadText {
        title: "Upload Report",
        description: "Upload HTML report files for validation",
        drag_drop: "Drag and drop files here",
        browse: "or click to browse (.html, .htm)",
        select_files: "Select Files",
        uploaded_files: "Uploaded Files",
        uploaded: "Uploaded",
        failed: "Failed",
        success_toast: "File \"{name}\" uploaded successfully",
        failure_toast: "Failed to upload \"{name}\"",
    },
    statistics: StatisticsText {
        title: "Statistics",
        description: "Overview of report validation results",
        total_reports: "Total Reports",
        valid_reports: "Valid Reports",
        errors_found: "Errors Found",
        pending_review: "Pending Review",
        recent_reports: "Recent Reports",
        report_name: "Report Name",
        status: "Status",
        score: "Score",
        average_score: "Average Score",
        success_rate: "Success Rate",
        no_reports: "No reports found",
        load_failed: "Error loading statistics",
    },
    errors: ErrorsText {
        title: "Error List",
        description: "Validation errors found in uploaded reports",
        all_errors: "All Errors",
        pending_errors: "Pending",
        resolved_errors: "Resolved",
        ignored_errors: "Ignored",
        no_errors: "No Errors Found",
        load_failed: "Error loading errors",
    },
    compare: CompareText {
        title: "Compare Reports",
        description: "Compare validation results of two reports side by side",
        select_reports: "Select Reports",
        report_a: "Report A",
        report_b: "Report B",
        compare: "Compare",
        score: "Score",
        error_count: "Errors",
        warning_count: "Warnings",
        no_reports: "No reports available for comparison",
    },
    settings: SettingsText {
        title: "Settings",
        description: "Configure your AzStat Report dashboard preferences",
        company_name: "Company Name",
        timezone: "Timezone",
        max_file_size: "Max File Size (MB)",
        validation_level: "Default Validation Level",
        save: "Save Changes",
        reset: "Reset to Defaults",
    },
};

static AZ: Dictionary = Dictionary {
    common: CommonText {
        loading: "Yüklənir...",
        refresh: "Yenilə",
        export: "İxrac et",
        not_available: "Yoxdur",
    },
    nav: NavText {
        brand: "AzStat Hesabat",
        upload: "Hesabat yüklə",
        statistics: "Statistika",
        errors: "Xəta siyahısı",
        compare: "Müqayisə",
        settings: "Parametrlər",
    },
    upload: UploadText {
        title: "Hesabat yüklə",
        description: "Validasiya üçün HTML hesabat fayllarını yükləyin",
        drag_drop: "Faylları bura sürükləyin",
        browse: "və ya seçmək üçün klikləyin (.html, .htm)",
        select_files: "Fayl seç",
        uploaded_files: "Yüklənmiş fayllar",
        uploaded: "Yükləndi",
        failed: "Uğursuz",
        success_toast: "\"{name}\" faylı uğurla yükləndi",
        failure_toast: "\"{name}\" faylını yükləmək alınmadı",
    },
    statistics: StatisticsText {
        title: "Statistika",
        description: "Hesabat validasiya nəticələrinin icmalı",
        total_reports: "Ümumi hesabatlar",
        valid_reports: "Düzgün hesabatlar",
        errors_found: "Tapılan xətalar",
        pending_review: "Baxış gözləyir",
        recent_reports: "Son hesabatlar",
        report_name: "Hesabatın adı",
        status: "Status",
        score: "Bal",
        average_score: "Orta bal",
        success_rate: "Uğur faizi",
        no_reports: "Hesabat tapılmadı",
        load_failed: "Statistikanı yükləmək alınmadı",
    },
    errors: ErrorsText {
        title: "Xəta siyahısı",
        description: "Yüklənmiş hesabatlarda tapılan validasiya xətaları",
        all_errors: "Bütün xətalar",
        pending_errors: "Gözləyir",
        resolved_errors: "Həll olunub",
        ignored_errors: "Nəzərə alınmayıb",
        no_errors: "Xəta tapılmadı",
        load_failed: "Xətaları yükləmək alınmadı",
    },
    compare: CompareText {
        title: "Hesabatları müqayisə et",
        description: "İki hesabatın validasiya nəticələrini yan-yana müqayisə edin",
        select_reports: "Hesabatları seçin",
        report_a: "Hesabat A",
        report_b: "Hesabat B",
        compare: "Müqayisə et",
        score: "Bal",
        error_count: "Xətalar",
        warning_count: "Xəbərdarlıqlar",
        no_reports: "Müqayisə üçün hesabat yoxdur",
    },
    settings: SettingsText {
        title: "Parametrlər",
        description: "AzStat Hesabat panelinin seçimlərini tənzimləyin",
        company_name: "Şirkətin adı",
        timezone: "Saat qurşağı",
        max_file_size: "Maksimal fayl ölçüsü (MB)",
        validation_level: "Standart validasiya səviyyəsi",
        save: "Yadda saxla",
        reset: "Standartlara qaytar",
    },
};
