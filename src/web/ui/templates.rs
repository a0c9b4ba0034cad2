use askama::Template;
use askama_web::WebTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub satellite: String,
    pub refresh_ms: u64,
    pub stale_after_ms: u64,
}
