use crate::error::Result;
use crate::middleware::CurrentAccount;
use crate::AppState;
use actix_web::{web, HttpResponse};

/// Every account and every post; admins only
pub async fn admin_view(state: web::Data<AppState>, current: CurrentAccount) -> Result<HttpResponse> {
    let view = state.admin.view(&current.0).await?;
    Ok(HttpResponse::Ok().json(view))
}
