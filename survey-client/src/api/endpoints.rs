// survey-client/src/api/endpoints.rs
//
// Endpoint catalogue for the survey marketplace backend. Paths only; the
// gateway prepends the configured base URL.

// Authentication
pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_REGISTER: &str = "/api/auth/register";
pub const AUTH_LOGOUT: &str = "/api/auth/logout";

// Surveys (creator side)
pub const SURVEYS: &str = "/api/surveys";

pub fn survey_detail(survey_id: &str) -> String {
    format!("/api/surveys/{}", survey_id)
}

pub fn survey_launch(survey_id: &str) -> String {
    format!("/api/surveys/{}/launch", survey_id)
}

pub fn survey_pause(survey_id: &str) -> String {
    format!("/api/surveys/{}/pause", survey_id)
}

// Survey taking (filler side)
pub const USER_SURVEYS_AVAILABLE: &str = "/api/user-surveys/available";

pub fn user_survey_take(survey_id: &str) -> String {
    format!("/api/user-surveys/{}/take", survey_id)
}

pub fn user_survey_submit(survey_id: &str) -> String {
    format!("/api/user-surveys/{}/submit", survey_id)
}

// Admin moderation
pub fn admin_user_approve(user_id: &str) -> String {
    format!("/api/admin/users/{}/approve", user_id)
}

pub fn admin_user_reject(user_id: &str) -> String {
    format!("/api/admin/users/{}/reject", user_id)
}

pub fn admin_user_suspend(user_id: &str) -> String {
    format!("/api/admin/users/{}/suspend", user_id)
}

pub fn admin_survey_approve(survey_id: &str) -> String {
    format!("/api/admin/surveys/{}/approve", survey_id)
}

pub fn admin_survey_reject(survey_id: &str) -> String {
    format!("/api/admin/surveys/{}/reject", survey_id)
}

pub fn admin_withdrawal_approve(withdrawal_id: &str) -> String {
    format!("/api/admin/withdrawals/{}/approve", withdrawal_id)
}

// Super admin
pub const SUPER_ADMIN_ADMINS: &str = "/api/super-admin/admins";
pub const SUPER_ADMIN_AUDIT_LOGS: &str = "/api/super-admin/audit-logs";

pub fn super_admin_admin_suspend(admin_id: &str) -> String {
    format!("/api/super-admin/admins/{}/suspend", admin_id)
}
