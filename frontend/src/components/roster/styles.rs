//! Inline styles of the review screen.

use common::model::applicant::Status;

pub const ROOT: &str = "padding:20px;max-width:1200px;margin:0 auto;";
pub const STATS_BAR: &str = "display:flex;gap:10px;margin-bottom:20px;";
pub const FILTER_BAR: &str = "margin-bottom:20px;display:flex;gap:10px;";
pub const SEARCH_BAR: &str = "margin-bottom:20px;display:flex;gap:10px;align-items:center;";
pub const ERROR_BANNER: &str = "margin-bottom:20px;padding:10px;background:#fdecea;color:#611a15;border-radius:4px;display:flex;gap:10px;align-items:center;";
pub const COLUMNS: &str = "display:flex;gap:20px;";
pub const DETAILS: &str = "flex:1;background-color:#f5f5f5;padding:20px;border-radius:8px;";
pub const SECTION: &str = "margin-bottom:20px;";
pub const BUTTON_ROW: &str = "display:flex;gap:10px;margin-bottom:20px;align-items:center;";
pub const NAV_BUTTON: &str = "padding:10px 20px;border:1px solid #ddd;border-radius:4px;";
pub const RESUME_COLUMN: &str = "flex:1.5;";
pub const RESUME_FRAME: &str = "width:100%;height:calc(100vh - 40px);border:1px solid #ddd;border-radius:8px;";

pub fn stat_card(color: &str) -> String {
    format!(
        "flex:1;padding:10px;border-radius:4px;background:{color};color:white;text-align:center;"
    )
}

pub fn filter_button(status: Status, active: bool) -> String {
    let (background, color) = if active {
        (status.color(), "white")
    } else {
        ("#f5f5f5", "black")
    };
    format!(
        "padding:10px 20px;background-color:{background};color:{color};border:1px solid #ddd;border-radius:4px;cursor:pointer;"
    )
}

pub fn decision_button(status: Status) -> String {
    format!(
        "background-color:{};color:white;padding:10px 20px;border:none;border-radius:4px;cursor:pointer;",
        status.color()
    )
}

pub fn status_banner(color: &str) -> String {
    format!("margin-bottom:20px;padding:10px;background-color:{color};border-radius:4px;color:white;")
}

pub fn search_input(invalid: bool) -> String {
    let border = if invalid { "#f44336" } else { "#ddd" };
    format!("flex:1;padding:10px;border-radius:4px;border:2px solid {border};font-size:14px;")
}
