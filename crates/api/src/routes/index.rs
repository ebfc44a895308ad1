//! Index Route

use axum::response::Html;
use tracing::info;

const INDEX: &str = "Home page.<br/>\
These are your options:<br/>\
/api/v1.0/precipitation<br/>\
/api/v1.0/stations<br/>\
/api/v1.0/tobs<br/>\
/api/v1.0/start_date<br/>\
<li>Enter start date as Year-Month-Day. Example: /api/v1.0/2017-03-27</li><br/>\
/api/v1.0/start_date/end_date<br/>\
<li>Enter start date and end date as Year-Month-Day. Example: /api/v1.0/2017-03-27/2017-08-03</li>";

/// List the available routes
pub async fn home() -> Html<&'static str> {
    info!("Server request for Home page");
    Html(INDEX)
}
